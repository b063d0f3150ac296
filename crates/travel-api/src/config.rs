//! Configuration for the travel-api server.
//!
//! Loaded from (in priority order):
//! 1. Environment variables (`TRAVEL__` prefix, `__` separator,
//!    e.g. `TRAVEL__NEO4J__URI`)
//! 2. Config file (`travel.toml` by default)
//! 3. Defaults

use serde::Deserialize;
use travel_graph::GraphConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub neo4j: GraphConfig,
}

/// The `[server]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `<file_prefix>.{toml,json,yaml,..}` (optional) and the
    /// environment.
    pub fn load(file_prefix: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("TRAVEL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(text: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(config.neo4j.query_timeout_secs, 10);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [server]
            bind = "0.0.0.0:9000"

            [neo4j]
            uri = "bolt://graph:7687"
            query_timeout_secs = 3
            "#,
        );
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.neo4j.uri, "bolt://graph:7687");
        assert_eq!(config.neo4j.query_timeout_secs, 3);
        assert_eq!(config.neo4j.user, "neo4j");
        assert_eq!(config.neo4j.max_connections, 16);
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = from_toml("");
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.neo4j.password, "travel-dev");
    }
}
