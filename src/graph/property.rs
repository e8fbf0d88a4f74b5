//! Property values and the per-element property store
//!
//! Every vertex, edge and graph carries a [`PropertyStore`]: a map from string
//! keys to heterogeneously typed [`PropertyValue`]s. Values are a closed tagged
//! union, so typed retrieval is always checked and a request for the wrong
//! type fails with [`PropertyError::TypeMismatch`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised by property lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    #[error("Property '{0}' not found")]
    NotFound(String),

    #[error("Property '{key}' holds {found}, requested {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub type PropertyResult<T> = Result<T, PropertyError>;

/// Property value type supporting multiple data types
///
/// Supports:
/// - String
/// - Integer (i64)
/// - Float (f64)
/// - Boolean
/// - List (Vec<PropertyValue>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get list value if this is a list
    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::List(_) => "List",
        }
    }
}

/// Plain textual form, used by summaries and exporters. Strings are not quoted.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "{}", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::List(items) => {
                write!(f, "[")?;
                for (i, val) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        PropertyValue::List(items)
    }
}

/// Typed extraction out of a [`PropertyValue`]
///
/// Only the exact variant matches; an `Integer` is never read back as `f64`.
pub trait FromProperty: Sized {
    /// Variant name reported in [`PropertyError::TypeMismatch`]
    const TYPE_NAME: &'static str;

    fn from_property(value: &PropertyValue) -> Option<Self>;
}

impl FromProperty for String {
    const TYPE_NAME: &'static str = "String";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        value.as_string().map(str::to_owned)
    }
}

impl FromProperty for i64 {
    const TYPE_NAME: &'static str = "Integer";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromProperty for f64 {
    const TYPE_NAME: &'static str = "Float";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromProperty for bool {
    const TYPE_NAME: &'static str = "Boolean";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        value.as_boolean()
    }
}

impl FromProperty for Vec<PropertyValue> {
    const TYPE_NAME: &'static str = "List";

    fn from_property(value: &PropertyValue) -> Option<Self> {
        value.as_list().map(<[PropertyValue]>::to_vec)
    }
}

/// Property store for vertices, edges and graphs
///
/// Keys are unique and kept in insertion order; re-setting an existing key
/// replaces the value in place without moving the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyStore {
    entries: IndexMap<String, PropertyValue>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, returning the value it replaced
    ///
    /// The previous value may be of a different type.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Typed retrieval
    pub fn get<T: FromProperty>(&self, key: &str) -> PropertyResult<T> {
        let value = self
            .entries
            .get(key)
            .ok_or_else(|| PropertyError::NotFound(key.to_string()))?;

        T::from_property(value).ok_or_else(|| PropertyError::TypeMismatch {
            key: key.to_string(),
            expected: T::TYPE_NAME,
            found: value.type_name(),
        })
    }

    /// Untyped retrieval
    pub fn get_value(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a property, keeping the order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
