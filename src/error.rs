//! Error types for the FES object model

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Object model errors
///
/// Accessors on records never fail. These errors come from the edges of the
/// model: lexical datatype conversion, catalog lookups and configuration.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("The value '{value}' is not a valid {datatype}")]
    InvalidLiteral { datatype: &'static str, value: String },

    #[error("Unknown schema type: {0}")]
    UnknownType(String),

    #[error("Unknown feature {feature} on {owner}")]
    UnknownFeature { owner: String, feature: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    pub(crate) fn invalid_literal(datatype: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            datatype,
            value: value.into(),
        }
    }
}
