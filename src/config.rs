//! Configuration for the FES object model
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (fes-model.toml)
//! - Environment variables (FES_MODEL__*)
//!
//! ## Example config file (fes-model.toml):
//! ```toml
//! [notifications]
//! deliver = true
//! trace = false
//!
//! [catalog]
//! output_format = "pretty"
//! include_defaults = true
//! ```

use std::path::Path;

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notify;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Change notification defaults
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Catalog rendering for the CLI
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Notification defaults applied process-wide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether new records deliver notifications to their observers
    #[serde(default = "default_true")]
    pub deliver: bool,

    /// Log every delivered notification at trace level
    #[serde(default)]
    pub trace: bool,
}

/// Catalog output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Show lexical defaults of unsettable features
    #[serde(default = "default_true")]
    pub include_defaults: bool,
}

/// Output format for catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
    /// Plain text table
    Text,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            deliver: true,
            trace: false,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Pretty,
            include_defaults: true,
        }
    }
}

impl NotificationConfig {
    /// Apply to records created from now on
    pub fn install(&self) {
        notify::set_deliver_by_default(self.deliver);
        notify::set_trace(self.trace);
        tracing::debug!(
            deliver = self.deliver,
            trace = self.trace,
            "notification defaults installed"
        );
    }
}

impl ModelConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, with `config_path` as an additional required file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        for location in ["fes-model.toml", ".fes-model.toml", "config/fes-model.toml"] {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(dirs) = directories::ProjectDirs::from("net", "opengis", "fes-model") {
            let xdg_config = dirs.config_dir().join("fes-model.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // FES_MODEL__NOTIFICATIONS__TRACE=true
        builder = builder.add_source(
            Environment::with_prefix("FES_MODEL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Save configuration to a file as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModelConfig::default();
        assert!(config.notifications.deliver);
        assert!(!config.notifications.trace);
        assert_eq!(config.catalog.output_format, OutputFormat::Pretty);
    }

    #[test]
    fn test_serialize_config() {
        let toml_str = ModelConfig::default().to_toml().unwrap();
        assert!(toml_str.contains("[notifications]"));
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("output_format = \"pretty\""));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ModelConfig = toml::from_str("[catalog]\noutput_format = \"text\"\n").unwrap();
        assert_eq!(config.catalog.output_format, OutputFormat::Text);
        assert!(config.catalog.include_defaults);
        assert!(config.notifications.deliver);
    }
}
