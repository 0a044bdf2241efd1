//! Application settings loaded from config.toml
//!
//! The file is optional: when it does not exist every setting falls back to its
//! default. A file that exists but cannot be read or parsed is a hard error.

use super::messages::Messages;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// User-facing message table
    pub messages: Messages,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API binds to
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads configuration from `APP_CONFIG`, or ./config.toml when unset.
///
/// # Errors
/// See [`load_app_config_from`].
pub fn load_app_config() -> Result<AppConfig> {
    let path = std::env::var("APP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_app_config_from(path)
}

/// Loads configuration from `path` if it exists, otherwise [`AppConfig::default`].
///
/// # Errors
/// Returns [`Error::Config`] when the file exists but cannot be read or parsed.
pub fn load_app_config_from<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        let config = load_config(path_ref)?;
        info!("Loaded configuration from {}", path_ref.display());
        Ok(config)
    } else {
        info!("No configuration file at {}, using defaults", path_ref.display());
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::MessageKind;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
            [server]
            bind_address = "127.0.0.1:9000"

            [messages]
            item_not_found = "Item not found"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert_eq!(config.messages.get(MessageKind::ItemNotFound), "Item not found");
        assert_eq!(
            config.messages.get(MessageKind::InvoiceIdRequired),
            "ID da nota é obrigatório"
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:8000");
        assert_eq!(config.messages, Messages::default());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_absent_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_app_config_from(dir.path().join("config.toml")).unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:8000");
        assert_eq!(config.messages, Messages::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nbind_address = ").unwrap();

        let result = load_app_config_from(&path);
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nbind_address = \"127.0.0.1:7000\"\n").unwrap();

        let config = load_app_config_from(&path).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:7000");
        assert_eq!(config.messages, Messages::default());
    }
}
