//! Error types for configuration loading and validation.
//!
//! The translator, cipher and color mapping never fail; only reading and
//! checking configuration can.

use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A parameter is outside its valid range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Dotted parameter path, e.g. `tones.gain`.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or unknown fields.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidParameter { .. } => "CFG_001",
            ConfigError::Io(_) => "CFG_002",
            ConfigError::Json(_) => "CFG_003",
        }
    }
}
