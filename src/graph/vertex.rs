//! Vertex implementation
//!
//! A vertex is an id plus a property store. Identity is immutable after
//! construction; equality and hashing consider the id alone.

use super::element::{GraphElement, Summary};
use super::property::{PropertyStore, PropertyValue};
use super::types::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex in the graph
///
/// Built by the caller as a value description, then moved into the graph by
/// [`Graph::add_vertex`](super::Graph::add_vertex). Cloning deep-copies the
/// property store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,

    /// Properties associated with this vertex
    properties: PropertyStore,
}

impl Vertex {
    /// Create a vertex with no properties
    pub fn new(id: VertexId) -> Self {
        Vertex {
            id,
            properties: PropertyStore::new(),
        }
    }

    /// Create a vertex with an initial property store
    pub fn new_with_properties(id: VertexId, properties: PropertyStore) -> Self {
        Vertex {
            id,
            properties,
        }
    }

    /// Add a property, builder style
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(key, value);
        self
    }

    pub fn id(&self) -> VertexId {
        self.id
    }
}

impl GraphElement for Vertex {
    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex: {}", self.id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Summary(self), f)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
