use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::config::types::Config;
use crate::snapshot::SessionSnapshot;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl From<CatalogError> for ConfigError {
    fn from(err: CatalogError) -> Self {
        ConfigError::ValidationError {
            message: err.to_string(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/dessert-clicker/config.toml` on Linux,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("dessert-clicker").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The catalog is non-empty and sorted by threshold
    /// - The tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog()?;

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Build the catalog described by `desserts`.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::new(self.desserts.clone())?)
    }

    /// Log a warning when the first dessert's threshold is non-zero.
    ///
    /// Returns whether the warning was emitted. Call once, after tracing is
    /// initialized.
    pub fn warn_on_unreachable_first_tier(&self) -> bool {
        let Some(first) = self.desserts.first() else {
            return false;
        };
        if first.activation_threshold == 0 {
            return false;
        }
        tracing::warn!(
            image = %first.image_ref,
            threshold = first.activation_threshold,
            "First dessert has a non-zero threshold; it is shown until a later tier is reached"
        );
        true
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.session
            .snapshot_path
            .clone()
            .unwrap_or_else(SessionSnapshot::default_path)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.ui.toast_seconds)
    }
}
