/// Database configuration and connection management
pub mod database;

/// Localized user-facing messages keyed by error kind
pub mod messages;

/// Application settings loaded from config.toml
pub mod settings;

pub use messages::{MessageKind, Messages};
pub use settings::{AppConfig, ServerConfig, load_app_config, load_app_config_from, load_config};
