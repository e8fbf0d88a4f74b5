//! GraphML writer

use super::{escape_xml, ExportResult};
use crate::config::GraphmlConfig;
use crate::graph::{Graph, GraphElement, PropertyStore};
use indexmap::IndexSet;
use std::io::Write;
use tracing::trace;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

/// Writes a graph as a GraphML document
///
/// Every property value is exported as `attr.type="string"` using its
/// `Display` rendering.
pub struct GraphmlWriter<'a> {
    config: &'a GraphmlConfig,
}

impl<'a> GraphmlWriter<'a> {
    pub fn new(config: &'a GraphmlConfig) -> Self {
        Self { config }
    }

    pub fn write<W: Write>(&self, graph: &Graph, sink: &mut W) -> ExportResult<()> {
        trace!(
            "Writing GraphML for {} vertices, {} edges",
            graph.num_vertices(),
            graph.num_edges()
        );

        // Distinct property names per scope, first-seen order
        let mut node_keys: IndexSet<&str> = IndexSet::new();
        let mut edge_keys: IndexSet<&str> = IndexSet::new();
        for vertex in graph.vertices() {
            node_keys.extend(vertex.properties().keys());
        }
        for (_, edge) in graph.edges() {
            edge_keys.extend(edge.properties().keys());
        }
        let graph_keys: IndexSet<&str> = graph.properties().keys().collect();

        writeln!(sink, "{}", XML_HEADER)?;
        writeln!(
            sink,
            "<graphml xmlns=\"{}\" xmlns:xsi=\"{}\" xsi:schemaLocation=\"{}\">",
            GRAPHML_NS, XSI_NS, SCHEMA_LOCATION
        )?;

        self.write_keys(sink, &node_keys, "node", &self.config.node_key_suffix)?;
        self.write_keys(sink, &edge_keys, "edge", &self.config.edge_key_suffix)?;
        self.write_keys(sink, &graph_keys, "graph", &self.config.graph_key_suffix)?;

        writeln!(
            sink,
            "{}<graph id=\"{}\" edgedefault=\"directed\">",
            self.pad(1),
            escape_xml(&self.config.graph_id)
        )?;
        self.write_data(sink, graph.properties(), &self.config.graph_key_suffix, 2)?;

        for vertex in graph.vertices() {
            let open = format!("node id=\"{}\"", vertex.id());
            self.write_element(sink, &open, "node", vertex.properties(), &self.config.node_key_suffix)?;
        }

        for (_, out_edges) in graph.vertices_with_out_edges() {
            for edge in out_edges {
                let open = format!("edge source=\"{}\" target=\"{}\"", edge.source(), edge.target());
                self.write_element(sink, &open, "edge", edge.properties(), &self.config.edge_key_suffix)?;
            }
        }

        writeln!(sink, "{}</graph>", self.pad(1))?;
        writeln!(sink, "</graphml>")?;
        Ok(())
    }

    /// Render into a string
    pub fn render(&self, graph: &Graph) -> ExportResult<String> {
        let mut buf = Vec::new();
        self.write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_keys<W: Write>(
        &self,
        sink: &mut W,
        keys: &IndexSet<&str>,
        scope: &str,
        suffix: &str,
    ) -> ExportResult<()> {
        for name in keys {
            let name = escape_xml(name);
            writeln!(
                sink,
                "{}<key id=\"{}{}\" for=\"{}\" attr.name=\"{}\" attr.type=\"string\"/>",
                self.pad(1),
                name,
                escape_xml(suffix),
                scope,
                name
            )?;
        }
        Ok(())
    }

    // Self-closing when there is nothing to nest
    fn write_element<W: Write>(
        &self,
        sink: &mut W,
        open: &str,
        tag: &str,
        properties: &PropertyStore,
        suffix: &str,
    ) -> ExportResult<()> {
        if properties.is_empty() {
            writeln!(sink, "{}<{}/>", self.pad(2), open)?;
            return Ok(());
        }
        writeln!(sink, "{}<{}>", self.pad(2), open)?;
        self.write_data(sink, properties, suffix, 3)?;
        writeln!(sink, "{}</{}>", self.pad(2), tag)?;
        Ok(())
    }

    fn write_data<W: Write>(
        &self,
        sink: &mut W,
        properties: &PropertyStore,
        suffix: &str,
        level: usize,
    ) -> ExportResult<()> {
        for (key, value) in properties.iter() {
            writeln!(
                sink,
                "{}<data key=\"{}{}\">{}</data>",
                self.pad(level),
                escape_xml(key),
                escape_xml(suffix),
                escape_xml(&value.to_string())
            )?;
        }
        Ok(())
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(level * self.config.indent)
    }
}
