//! Textual exporters
//!
//! Supports:
//! - GraphViz DOT
//! - GraphML
//!
//! Both are read-only passes over the graph's public query surface. Property
//! values are always rendered through their `Display` form, so every value
//! kind can be exported.

mod dot;
mod graphml;

pub use dot::{EdgeLabeler, GraphvizWriter, VertexLabeler};
pub use graphml::GraphmlWriter;

use crate::config::ExportConfig;
use crate::graph::{Edge, Graph, Vertex};
use std::borrow::Cow;
use std::io::Write;
use thiserror::Error;

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

impl Graph {
    /// Write the graph as a DOT digraph using the default configuration
    ///
    /// Vertex statements are only emitted when `vertex_labeler` is given, edge
    /// statements only when `edge_labeler` is given.
    pub fn write_graphviz<W: Write>(
        &self,
        sink: &mut W,
        vertex_labeler: Option<&dyn Fn(&Vertex) -> String>,
        edge_labeler: Option<&dyn Fn(&Edge) -> String>,
    ) -> ExportResult<()> {
        let config = ExportConfig::default();
        let mut writer = GraphvizWriter::new(&config.dot);
        if let Some(labeler) = vertex_labeler {
            writer = writer.with_vertex_labeler(labeler);
        }
        if let Some(labeler) = edge_labeler {
            writer = writer.with_edge_labeler(labeler);
        }
        writer.write(self, sink)
    }

    /// Write the graph as a GraphML document using the default configuration
    pub fn write_graphml<W: Write>(&self, sink: &mut W) -> ExportResult<()> {
        let config = ExportConfig::default();
        GraphmlWriter::new(&config.graphml).write(self, sink)
    }
}

/// Escape text for use inside a double-quoted DOT string
pub(crate) fn escape_dot(input: &str) -> Cow<'_, str> {
    if !input.contains(['"', '\\', '\n', '\r']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

// Characters XML 1.0 does not allow anywhere in a document, even as references.
fn is_xml_forbidden(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Escape text for XML attribute values and character data
///
/// Markup characters become entity references and `\r` becomes `&#13;` so it
/// survives line-end normalization. Characters XML 1.0 forbids are replaced
/// with U+FFFD.
pub(crate) fn escape_xml(input: &str) -> Cow<'_, str> {
    if !input
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\'' | '\r') || is_xml_forbidden(c))
    {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => out.push_str("&#13;"),
            c if is_xml_forbidden(c) => out.push(char::REPLACEMENT_CHARACTER),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dot() {
        assert!(matches!(escape_dot("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape_dot(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_dot("a\\b"), "a\\\\b");
        assert_eq!(escape_dot("two\nlines"), "two\\nlines");
        assert_eq!(escape_dot("crlf\r\n"), "crlf\\r\\n");
    }

    #[test]
    fn test_escape_xml() {
        assert!(matches!(escape_xml("plain"), Cow::Borrowed("plain")));
        assert_eq!(escape_xml("a<b & c>d"), "a&lt;b &amp; c&gt;d");
        assert_eq!(escape_xml(r#"'q' "q""#), "&apos;q&apos; &quot;q&quot;");
    }

    #[test]
    fn test_escape_xml_control_characters() {
        assert!(matches!(escape_xml("tab\tand\nnewline"), Cow::Borrowed(_)));
        assert_eq!(escape_xml("bell\u{7}here"), "bell\u{FFFD}here");
        assert_eq!(escape_xml("\u{0}\u{1F}\u{FFFF}"), "\u{FFFD}\u{FFFD}\u{FFFD}");
        assert_eq!(escape_xml("a\rb"), "a&#13;b");
    }
}
