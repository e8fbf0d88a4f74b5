//! Edge implementation
//!
//! Directed edges reference their endpoints by id; they never own a vertex.
//! Any number of edges may join the same ordered pair of vertices.

use super::element::{GraphElement, Summary};
use super::property::{PropertyStore, PropertyValue};
use super::types::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    source: VertexId,

    /// Target vertex (edge goes TO this vertex)
    target: VertexId,

    /// Properties associated with this edge
    properties: PropertyStore,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Edge {
            source,
            target,
            properties: PropertyStore::new(),
        }
    }

    /// Create a new edge with properties
    pub fn new_with_properties(
        source: VertexId,
        target: VertexId,
        properties: PropertyStore,
    ) -> Self {
        Edge {
            source,
            target,
            properties,
        }
    }

    /// Add a property, builder style
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(key, value);
        self
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Check if this edge goes FROM a specific vertex
    pub fn starts_from(&self, vertex: VertexId) -> bool {
        self.source == vertex
    }

    /// Check if this edge goes TO a specific vertex
    pub fn ends_at(&self, vertex: VertexId) -> bool {
        self.target == vertex
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl GraphElement for Edge {
    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }

    fn fmt_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge: {} -> {}", self.source, self.target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Summary(self), f)
    }
}
