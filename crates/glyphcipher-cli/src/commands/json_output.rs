//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints exactly one [`JsonOutput`] object
//! to stdout.

use serde::{Deserialize, Serialize};

use glyphcipher_audio::{AudioError, Tone};
use glyphcipher_core::ConfigError;
use glyphcipher_render::{ChartPoint, RenderError};

/// Error codes for CLI operations.
pub mod error_codes {
    /// Config could not be loaded or is invalid
    pub const CONFIG: &str = "CLI_001";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "CFG_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Builds a JSON error from an `anyhow` error, preferring the code of a
    /// typed library error somewhere in its chain.
    pub fn from_anyhow(fallback_code: &str, err: &anyhow::Error) -> Self {
        let code = if let Some(e) = err.downcast_ref::<ConfigError>() {
            e.code()
        } else if let Some(e) = err.downcast_ref::<RenderError>() {
            e.code()
        } else if let Some(e) = err.downcast_ref::<AudioError>() {
            e.code()
        } else {
            fallback_code
        };
        Self::new(code, format!("{:#}", err))
    }
}

/// Envelope printed by every `--json` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> JsonOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            result: None,
        }
    }
}

impl<T: Serialize> JsonOutput<T> {
    /// Prints the envelope as pretty JSON on stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        println!("{}", json);
        Ok(())
    }
}

/// Result of `translate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResult {
    pub input: String,
    pub translated: String,
}

/// Result of `encode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeResult {
    pub input: String,
    pub translated: String,
    pub phi: f64,
    pub sequence: Vec<i64>,
    /// CSS color of each value, in sequence order.
    pub colors: Vec<String>,
}

/// Result of `plot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotResult {
    pub translated: String,
    pub phi: f64,
    pub chart_png: String,
    pub chart_json: String,
    pub shape_svg: String,
    /// BLAKE3 hash of the PNG bytes.
    pub png_hash: String,
    pub points: Vec<ChartPoint>,
}

/// Result of `sound`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundResult {
    pub translated: String,
    pub phi: f64,
    pub wav: String,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
    pub sample_rate: u32,
    pub duration_seconds: f64,
    pub tones: Vec<Tone>,
}

/// One row of `symbols`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub letter: char,
    pub glyph: char,
    pub code_point: String,
}
