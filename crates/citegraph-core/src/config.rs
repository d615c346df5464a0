//! Configuration management for citegraph tools.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (`CITEGRAPH__GRAPH__*`)
//! 2. Config file (`citegraph.toml`, `[graph]` section)
//! 3. Defaults

use serde::Deserialize;

use crate::error::Result;

/// How command outcomes are written.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per command.
    #[default]
    Text,
    /// One JSON object per command.
    Json,
}

/// Top-level citegraph configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CitegraphConfig {
    /// Identifier of the root publication (default: "root").
    #[serde(default = "default_root_id")]
    pub root_id: String,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Output format for command outcomes.
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_root_id() -> String {
    "root".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CitegraphConfig {
    fn default() -> Self {
        Self {
            root_id: default_root_id(),
            log_filter: default_log_filter(),
            output: OutputFormat::default(),
        }
    }
}

impl CitegraphConfig {
    /// Load configuration from `{file_prefix}.toml` (optional) and the
    /// environment. A missing `[graph]` section yields the defaults; a
    /// present but malformed one is an error.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("CITEGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        match cfg.get::<CitegraphConfig>("graph") {
            Ok(c) => {
                tracing::debug!(root_id = %c.root_id, "Configuration loaded");
                Ok(c)
            }
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CitegraphConfig::default();
        assert_eq!(config.root_id, "root");
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let config = CitegraphConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.root_id, "root");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("citegraph.toml"),
            "[graph]\nroot_id = \"R\"\noutput = \"json\"\n",
        )
        .unwrap();

        let prefix = dir.path().join("citegraph");
        let config = CitegraphConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.root_id, "R");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_load_rejects_bad_output_format() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("citegraph.toml"),
            "[graph]\noutput = \"yaml\"\n",
        )
        .unwrap();

        let prefix = dir.path().join("citegraph");
        assert!(CitegraphConfig::load(prefix.to_str().unwrap()).is_err());
    }
}
