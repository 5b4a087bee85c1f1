//! Configuration for catchnet.
//!
//! Everything the builder and renderers need is carried in an explicit
//! [`Config`] value. It can be loaded from a YAML file and then overridden by
//! command-line flags.
//!
//! ```yaml
//! database: ./catchments.sqlite
//! direction: forward
//! output:
//!   format: dot
//!   graph-name: network
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builder::{EdgeDirection, NetworkBuilder};
use crate::db::{DEFAULT_QUERY, SqliteSource};
use crate::error::{Error, Result};
use crate::render::OutputFormat;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Path to the `SQLite` database holding the edge table
    pub database: Option<PathBuf>,

    /// Query returning `(from, to)` integer pairs
    pub query: String,

    /// How rows are oriented when inserted
    pub direction: EdgeDirection,

    /// Output settings
    pub output: OutputConfig,
}

/// Output section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Serialization to write
    pub format: OutputFormat,

    /// Name given to the dot graph
    pub graph_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            query: DEFAULT_QUERY.to_string(),
            direction: EdgeDirection::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Builder honouring the configured direction.
    #[must_use]
    pub fn network_builder(&self) -> NetworkBuilder {
        NetworkBuilder::new(self.direction)
    }

    /// Open the configured database with the configured query.
    pub fn open_source(&self) -> Result<SqliteSource> {
        let database = self.database.as_deref().ok_or_else(|| {
            Error::Config("--db must be set (or `database` in the config file)".to_string())
        })?;
        SqliteSource::open(database, self.query.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_use_catchment_query_and_forward_direction() {
        let config = Config::default();

        assert_eq!(config.query, DEFAULT_QUERY);
        assert_eq!(config.direction, EdgeDirection::Forward);
        assert_eq!(config.output.format, OutputFormat::Dot);
        assert!(config.database.is_none());
    }

    #[test]
    fn full_document_parses() {
        let yaml = r"
database: ./una.sqlite
query: SELECT a, b FROM links
direction: reversed
output:
  format: plain
  graph-name: una
";
        let config = Config::from_yaml(yaml).expect("valid config");

        assert_eq!(config.database, Some(PathBuf::from("./una.sqlite")));
        assert_eq!(config.query, "SELECT a, b FROM links");
        assert_eq!(config.direction, EdgeDirection::Reversed);
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert_eq!(config.output.graph_name.as_deref(), Some("una"));
        assert_eq!(
            config.network_builder().direction(),
            EdgeDirection::Reversed
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("  \n")]
    #[case::empty_mapping("{}")]
    fn blank_documents_yield_defaults(#[case] yaml: &str) {
        let config = Config::from_yaml(yaml).expect("blank config is valid");
        assert_eq!(config, Config::default());
    }

    #[rstest]
    #[case::unknown_key("databse: x.sqlite")]
    #[case::bad_direction("direction: sideways")]
    #[case::bad_format("output:\n  format: png")]
    fn invalid_documents_are_config_errors(#[case] yaml: &str) {
        let result = Config::from_yaml(yaml);
        assert!(matches!(result, Err(Error::Config(_))), "got {result:?}");
    }

    #[test]
    fn open_source_requires_database() {
        let result = Config::default().open_source();

        let Err(Error::Config(message)) = result else {
            panic!("expected config error");
        };
        assert!(message.contains("--db"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("catchnet.yaml");
        std::fs::write(&path, "direction: reversed\n").expect("write config");

        let config = Config::load(&path).expect("load config");

        assert_eq!(config.direction, EdgeDirection::Reversed);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = Config::load(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
