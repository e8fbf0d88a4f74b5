//! Core graph implementation
//!
//! This module implements the directed property graph:
//! - Vertices identified by a numeric id, carrying properties
//! - Directed edges between vertex ids, carrying properties
//! - Multiple edges between the same ordered pair of vertices
//! - An adjacency table keeping in/out edge lists per vertex

pub mod edge;
pub mod element;
pub mod property;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use element::{GraphElement, Summary};
pub use property::{FromProperty, PropertyError, PropertyResult, PropertyStore, PropertyValue};
pub use store::{AdjacencyRecord, Graph, GraphError, GraphResult, GraphStatistics};
pub use types::{EdgeId, VertexId};
pub use vertex::Vertex;
