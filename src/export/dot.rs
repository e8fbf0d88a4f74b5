//! GraphViz DOT writer

use super::{escape_dot, ExportResult};
use crate::config::DotConfig;
use crate::graph::{Edge, Graph, Vertex};
use std::borrow::Cow;
use std::io::Write;
use tracing::trace;

/// Maps a vertex to its display label
pub type VertexLabeler<'a> = Box<dyn Fn(&Vertex) -> String + 'a>;

/// Maps an edge to its display label
pub type EdgeLabeler<'a> = Box<dyn Fn(&Edge) -> String + 'a>;

/// Writes a graph as a DOT digraph
///
/// Vertices are visited in ascending id order. Each vertex statement is
/// followed by the statements for that vertex's out-edges, in insertion order.
/// Without a vertex labeler no vertex statements are written; likewise for
/// edges.
pub struct GraphvizWriter<'a> {
    config: &'a DotConfig,
    vertex_labeler: Option<VertexLabeler<'a>>,
    edge_labeler: Option<EdgeLabeler<'a>>,
}

impl<'a> GraphvizWriter<'a> {
    pub fn new(config: &'a DotConfig) -> Self {
        Self {
            config,
            vertex_labeler: None,
            edge_labeler: None,
        }
    }

    pub fn with_vertex_labeler<F>(mut self, labeler: F) -> Self
    where
        F: Fn(&Vertex) -> String + 'a,
    {
        self.vertex_labeler = Some(Box::new(labeler));
        self
    }

    pub fn with_edge_labeler<F>(mut self, labeler: F) -> Self
    where
        F: Fn(&Edge) -> String + 'a,
    {
        self.edge_labeler = Some(Box::new(labeler));
        self
    }

    pub fn write<W: Write>(&self, graph: &Graph, sink: &mut W) -> ExportResult<()> {
        trace!(
            "Writing DOT for {} vertices, {} edges",
            graph.num_vertices(),
            graph.num_edges()
        );

        writeln!(sink, "digraph {} {{", graph_name(&self.config.graph_name))?;
        for (vertex, out_edges) in graph.vertices_with_out_edges() {
            if let Some(labeler) = &self.vertex_labeler {
                writeln!(sink, "{}[label=\"{}\"];", vertex.id(), escape_dot(&labeler(vertex)))?;
            }
            if let Some(labeler) = &self.edge_labeler {
                for edge in out_edges {
                    writeln!(
                        sink,
                        "{} -> {} [ label= \"{}\"];",
                        edge.source(),
                        edge.target(),
                        escape_dot(&labeler(edge))
                    )?;
                }
            }
        }
        writeln!(sink, "}}")?;
        Ok(())
    }

    /// Render into a string
    pub fn render(&self, graph: &Graph) -> ExportResult<String> {
        let mut buf = Vec::new();
        self.write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

// Bare identifiers are written as-is; anything else is quoted.
fn graph_name(name: &str) -> Cow<'_, str> {
    let is_identifier = name
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if is_identifier {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", escape_dot(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphElement, VertexId};

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph
            .add_vertex(
                Vertex::new(VertexId::new(1))
                    .with_property("name", "human")
                    .with_property("weight", 0.8)
                    .with_property("type", "AND"),
            )
            .unwrap();
        graph.add_vertex(Vertex::new(VertexId::new(2))).unwrap();
        graph
            .add_edge(Edge::new(VertexId::new(1), VertexId::new(2)).with_property("rel", "part_of"))
            .unwrap();
        graph
    }

    #[test]
    fn test_identity_labelers() {
        let graph = sample_graph();
        let config = DotConfig::default();
        let dot = GraphvizWriter::new(&config)
            .with_vertex_labeler(|v| v.id().to_string())
            .with_edge_labeler(|e| format!("{}->{}", e.source(), e.target()))
            .render(&graph)
            .unwrap();

        assert_eq!(
            dot,
            "digraph g {\n1[label=\"1\"];\n1 -> 2 [ label= \"1->2\"];\n2[label=\"2\"];\n}\n"
        );
    }

    #[test]
    fn test_no_labelers_writes_empty_body() {
        let graph = sample_graph();
        let config = DotConfig::default();
        let dot = GraphvizWriter::new(&config).render(&graph).unwrap();
        assert_eq!(dot, "digraph g {\n}\n");
    }

    #[test]
    fn test_edge_labeler_only() {
        let graph = sample_graph();
        let config = DotConfig::default();
        let dot = GraphvizWriter::new(&config)
            .with_edge_labeler(|e| e.property::<String>("rel").unwrap_or_default())
            .render(&graph)
            .unwrap();
        assert_eq!(dot, "digraph g {\n1 -> 2 [ label= \"part_of\"];\n}\n");
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut graph = Graph::new();
        graph
            .add_vertex(Vertex::new(VertexId::new(1)).with_property("name", "say \"hi\""))
            .unwrap();
        let config = DotConfig::default();
        let dot = GraphvizWriter::new(&config)
            .with_vertex_labeler(|v| v.property::<String>("name").unwrap_or_default())
            .render(&graph)
            .unwrap();
        assert!(dot.contains("1[label=\"say \\\"hi\\\"\"];"));
    }

    #[test]
    fn test_graph_name() {
        assert_eq!(graph_name("g"), "g");
        assert_eq!(graph_name("deps_2"), "deps_2");
        assert_eq!(graph_name("my graph"), "\"my graph\"");
        assert_eq!(graph_name("2g"), "\"2g\"");
        assert_eq!(graph_name(""), "\"\"");
    }

    #[test]
    fn test_vertex_order_and_edge_grouping() {
        let mut graph = Graph::new();
        for id in [3, 1, 2] {
            graph.add_vertex(Vertex::new(VertexId::new(id))).unwrap();
        }
        graph.add_edge(Edge::new(VertexId::new(3), VertexId::new(1))).unwrap();
        graph.add_edge(Edge::new(VertexId::new(1), VertexId::new(3))).unwrap();
        graph.add_edge(Edge::new(VertexId::new(1), VertexId::new(2))).unwrap();

        let config = DotConfig {
            graph_name: "deps".to_string(),
        };
        let dot = GraphvizWriter::new(&config)
            .with_vertex_labeler(|v| format!("v{}", v.id()))
            .with_edge_labeler(|_| String::new())
            .render(&graph)
            .unwrap();

        assert_eq!(
            dot,
            "digraph deps {\n\
             1[label=\"v1\"];\n\
             1 -> 3 [ label= \"\"];\n\
             1 -> 2 [ label= \"\"];\n\
             2[label=\"v2\"];\n\
             3[label=\"v3\"];\n\
             3 -> 1 [ label= \"\"];\n\
             }\n"
        );
    }
}
