//! Error types for the render backend.

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] ::png::EncodingError),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl RenderError {
    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::Io(_) => "RENDER_001",
            RenderError::Encoding(_) => "RENDER_002",
            RenderError::InvalidDimensions(_) => "RENDER_003",
        }
    }
}
