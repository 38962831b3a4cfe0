//! TOML configuration: catalog, UI strings, session persistence, logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, SessionConfig, Strings, UiConfig};
