//! Capability shared by vertices, edges and the graph itself

use super::property::{FromProperty, PropertyResult, PropertyStore, PropertyValue};
use std::fmt;
use std::io;

/// Anything that carries a property store and can describe itself
pub trait GraphElement {
    fn properties(&self) -> &PropertyStore;

    fn properties_mut(&mut self) -> &mut PropertyStore;

    /// Write the one-line identity, e.g. `Vertex: 1`
    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Set a property value, returning the one it replaced
    fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue>
    where
        Self: Sized,
    {
        self.properties_mut().set(key, value)
    }

    /// Typed property lookup
    fn property<T: FromProperty>(&self, key: &str) -> PropertyResult<T>
    where
        Self: Sized,
    {
        self.properties().get(key)
    }

    fn has_property(&self, key: &str) -> bool {
        self.properties().has(key)
    }

    fn property_count(&self) -> usize {
        self.properties().len()
    }

    /// Human-readable summary: identity plus a properties block when non-empty
    fn summary(&self) -> String
    where
        Self: Sized,
    {
        Summary(self).to_string()
    }

    fn print_summary<W: io::Write>(&self, sink: &mut W) -> io::Result<()>
    where
        Self: Sized,
    {
        write!(sink, "{}", Summary(self))
    }
}

/// Display adapter rendering an element's summary
pub struct Summary<'a, E: ?Sized>(pub &'a E);

impl<E: GraphElement + ?Sized> fmt::Display for Summary<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_identity(f)?;
        fmt_properties(self.0.properties(), f)
    }
}

fn fmt_properties(props: &PropertyStore, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if props.is_empty() {
        return Ok(());
    }
    write!(f, "\n  Properties: {} items", props.len())?;
    for (key, value) in props.iter() {
        write!(f, "\n    {}: \t{}", key, value)?;
    }
    Ok(())
}
