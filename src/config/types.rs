use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_desserts, ItemRecord};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog, sorted by threshold.
    #[serde(default = "default_desserts")]
    pub desserts: Vec<ItemRecord>,
    #[serde(default)]
    pub strings: Strings,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Externalized UI strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub app_name: String,
    pub dessert_sold: String,
    pub total_revenue: String,
    pub share: String,
    /// Template with `{sold}` and `{revenue}` placeholders.
    pub share_text: String,
    pub sharing_not_available: String,
    /// Toast shown after a successful share.
    pub shared: String,
}

/// Session persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Save the session on exit and restore it on start (default: true).
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Snapshot file. Defaults to the platform data directory.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    /// EnvFilter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Terminal UI timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a toast stays in the footer, in seconds (default: 3).
    #[serde(default = "default_toast_seconds")]
    pub toast_seconds: u64,
}

fn default_persist() -> bool {
    true
}

fn default_logging_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_toast_seconds() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            desserts: default_desserts(),
            strings: Strings::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            app_name: "Dessert Clicker".to_string(),
            dessert_sold: "Desserts sold".to_string(),
            total_revenue: "Total Revenue".to_string(),
            share: "Share".to_string(),
            share_text: "I've clicked {sold} Desserts for a total of {revenue}$ #AndroidDessertClicker"
                .to_string(),
            sharing_not_available: "Sharing not available".to_string(),
            shared: "Copied to clipboard".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            snapshot_path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            toast_seconds: default_toast_seconds(),
        }
    }
}
