//! Propgraph
//!
//! An in-memory directed property graph with GraphViz and GraphML export.
//!
//! # Data model
//!
//! - Vertices identified by a caller-chosen numeric id
//! - Directed edges between existing vertices, parallel edges allowed
//! - String-keyed properties on vertices, edges and the graph itself,
//!   holding strings, integers, floats, booleans or lists
//! - Per-vertex in/out edge lists kept consistent on every insertion
//!
//! ## Example Usage
//!
//! ```rust
//! use propgraph::graph::{Edge, Graph, GraphElement, Vertex, VertexId};
//!
//! let mut graph = Graph::new();
//!
//! let human = graph
//!     .add_vertex(
//!         Vertex::new(VertexId::new(1))
//!             .with_property("name", "human")
//!             .with_property("weight", 0.8),
//!     )
//!     .unwrap();
//! let primate = graph.add_vertex(Vertex::new(VertexId::new(2))).unwrap();
//!
//! let edge = graph.add_edge(Edge::new(human, primate)).unwrap();
//! graph.get_edge_mut(edge).unwrap().set_property("rel", "is_a");
//!
//! assert_eq!(graph.get_out_degree(human).unwrap(), 1);
//! assert_eq!(graph.get_in_degree(primate).unwrap(), 1);
//!
//! let name: String = graph.get_vertex(human).unwrap().property("name").unwrap();
//! assert_eq!(name, "human");
//!
//! let mut dot = Vec::new();
//! graph
//!     .write_graphviz(&mut dot, Some(&|v: &Vertex| v.id().to_string()), None)
//!     .unwrap();
//! assert!(String::from_utf8(dot).unwrap().starts_with("digraph g {"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod export;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, FromProperty, Graph, GraphElement, GraphError, GraphResult, PropertyError,
    PropertyResult, PropertyStore, PropertyValue, Vertex, VertexId,
};

pub use export::{ExportError, ExportResult, GraphmlWriter, GraphvizWriter};

pub use config::{ConfigError, ConfigResult, DotConfig, ExportConfig, GraphmlConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
