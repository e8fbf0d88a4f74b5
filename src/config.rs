//! Exporter configuration
//!
//! Every field has a default, so a YAML file only needs the values it changes:
//!
//! ```yaml
//! dot:
//!   graph_name: deps
//! graphml:
//!   indent: 4
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// GraphViz output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Name after the `digraph` keyword
    pub graph_name: String,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            graph_name: "g".to_string(),
        }
    }
}

/// GraphML output settings
///
/// The three key suffixes must differ from each other, otherwise a property
/// name shared between scopes would declare the same `<key id>` twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphmlConfig {
    /// `id` attribute of the `<graph>` element
    pub graph_id: String,
    /// Appended to property names to form node-scope key ids
    pub node_key_suffix: String,
    /// Appended to property names to form edge-scope key ids
    pub edge_key_suffix: String,
    /// Appended to property names to form graph-scope key ids
    pub graph_key_suffix: String,
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for GraphmlConfig {
    fn default() -> Self {
        Self {
            graph_id: "G".to_string(),
            node_key_suffix: "V".to_string(),
            edge_key_suffix: "E".to_string(),
            graph_key_suffix: "G".to_string(),
            indent: 2,
        }
    }
}

impl GraphmlConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        let suffixes = [
            ("node_key_suffix", &self.node_key_suffix),
            ("edge_key_suffix", &self.edge_key_suffix),
            ("graph_key_suffix", &self.graph_key_suffix),
        ];
        for (i, (name, suffix)) in suffixes.iter().enumerate() {
            for (other_name, other) in &suffixes[i + 1..] {
                if suffix == other {
                    return Err(ConfigError::Invalid(format!(
                        "graphml.{} and graphml.{} are both {:?}",
                        name, other_name, suffix
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Settings for all exporters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dot: DotConfig,
    pub graphml: GraphmlConfig,
}

impl ExportConfig {
    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.graphml.validate()
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading export config from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.dot.graph_name, "g");
        assert_eq!(config.graphml.graph_id, "G");
        assert_eq!(config.graphml.node_key_suffix, "V");
        assert_eq!(config.graphml.edge_key_suffix, "E");
        assert_eq!(config.graphml.graph_key_suffix, "G");
        assert_eq!(config.graphml.indent, 2);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ExportConfig::from_yaml_str("graphml:\n  indent: 4\n").unwrap();
        assert_eq!(config.graphml.indent, 4);
        assert_eq!(config.graphml.graph_id, "G");
        assert_eq!(config.dot, DotConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ExportConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ExportConfig::from_yaml_str("graphml:\n  indent: lots\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_equal_key_suffixes_rejected() {
        let yaml = "graphml:\n  node_key_suffix: \"\"\n  edge_key_suffix: \"\"\n";
        let result = ExportConfig::from_yaml_str(yaml);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        // Default graph suffix "G" collides with a node suffix of "G"
        let result = ExportConfig::from_yaml_str("graphml:\n  node_key_suffix: G\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let config = ExportConfig::from_yaml_str("graphml:\n  node_key_suffix: _n\n").unwrap();
        assert_eq!(config.graphml.node_key_suffix, "_n");
        assert!(GraphmlConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let result = ExportConfig::from_file("/nonexistent/propgraph.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
