//! Strand configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main strand configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrandConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed origins for CORS (empty = allow any origin)
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl StrandConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StrandConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strand.toml");

        let mut config = StrandConfig::default();
        config.server.port = 8080;
        config.server.cors_allowed_origins = vec!["http://localhost:5173".to_string()];
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = StrandConfig::load(&path).unwrap();
        assert_eq!(loaded.server.port, 8080);
        assert_eq!(
            loaded.server.cors_allowed_origins,
            vec!["http://localhost:5173"]
        );
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = StrandConfig::load(Path::new("/nonexistent/strand.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "server = not toml").unwrap();

        assert!(StrandConfig::load(&path).is_err());
    }

    #[test]
    fn test_parse_inline_toml() {
        let parsed: StrandConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            cors_allowed_origins = []
            "#,
        )
        .unwrap();
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.server.port, 9000);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let parsed: StrandConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.server.port, 3000);
    }
}
