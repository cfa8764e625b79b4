//! Configuration for the cipher and every presentation surface.
//!
//! All sections use `#[serde(default)]`, so a config file only needs the keys
//! it changes:
//!
//! ```json
//! { "cipher": { "phi": 2.0 }, "tones": { "stagger_ms": 250 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cipher::CipherParams;
use crate::color::Rgb;
use crate::error::{ConfigError, ConfigResult};

/// Largest accepted raster or canvas edge, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Longest accepted tone duration or stagger, in milliseconds.
pub const MAX_TONE_MS: u64 = 60_000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphConfig {
    pub cipher: CipherParams,
    pub chart: ChartParams,
    pub shape: ShapeParams,
    pub tones: ToneParams,
}

/// Scatter chart parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartParams {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Radius of each plotted point in pixels.
    pub point_radius: u32,
    /// Dataset label.
    pub label: String,
    /// X axis title.
    pub x_title: String,
    /// Y axis title.
    pub y_title: String,
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            point_radius: 8,
            label: "Golden Ratio Cipher".to_string(),
            x_title: "Character Position".to_string(),
            y_title: "Encoded Value".to_string(),
        }
    }
}

/// Radial shape parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeParams {
    pub width: u32,
    pub height: u32,
    /// Base radius of the radial layout.
    pub radius: f64,
    /// Each point's radius is scaled by `1 + value / value_scale`.
    pub value_scale: f64,
    pub particle_radius: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
    pub background: String,
    pub gradient_from: String,
    pub gradient_to: String,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            radius: 150.0,
            value_scale: 100.0,
            particle_radius: 5.0,
            stroke: "#1f3a93".to_string(),
            stroke_width: 3.0,
            opacity: 0.8,
            background: "#f4f4f9".to_string(),
            gradient_from: "#3498db".to_string(),
            gradient_to: "#e74c3c".to_string(),
        }
    }
}

/// Tone sequence parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToneParams {
    /// Frequency of the lowest value in Hz.
    pub min_frequency: f64,
    /// Frequency of the highest value in Hz.
    pub max_frequency: f64,
    /// Length of each tone in milliseconds.
    pub duration_ms: u64,
    /// Delay between consecutive tone starts in milliseconds.
    pub stagger_ms: u64,
    /// Linear gain (0.0 to 1.0).
    pub gain: f64,
    /// Sample rate for rendered audio.
    pub sample_rate: u32,
    /// Linear fade in/out applied to each tone, in milliseconds.
    pub declick_ms: f64,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            min_frequency: 200.0,
            max_frequency: 1000.0,
            duration_ms: 500,
            stagger_ms: 500,
            gain: 0.5,
            sample_rate: 44100,
            declick_ms: 5.0,
        }
    }
}

impl GlyphConfig {
    /// Parses a config from JSON text. Does not validate.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file. Does not validate.
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every section, returning the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.cipher.phi.is_finite() {
            return Err(ConfigError::invalid_param(
                "cipher.phi",
                format!("must be finite, got {}", self.cipher.phi),
            ));
        }
        self.chart.validate()?;
        self.shape.validate()?;
        self.tones.validate()
    }
}

fn check_dimensions(name: &str, width: u32, height: u32) -> ConfigResult<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ConfigError::invalid_param(
            name,
            format!(
                "dimensions must be within 1..={}, got {}x{}",
                MAX_DIMENSION, width, height
            ),
        ));
    }
    Ok(())
}

impl ChartParams {
    fn validate(&self) -> ConfigResult<()> {
        check_dimensions("chart.width/height", self.width, self.height)?;
        let limit = self.width.min(self.height);
        if self.point_radius > limit {
            return Err(ConfigError::invalid_param(
                "chart.point_radius",
                format!("{} exceeds the chart size ({})", self.point_radius, limit),
            ));
        }
        Ok(())
    }
}

impl ShapeParams {
    fn validate(&self) -> ConfigResult<()> {
        check_dimensions("shape.width/height", self.width, self.height)?;
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::invalid_param("shape.radius", "must be positive"));
        }
        if !(self.value_scale.is_finite() && self.value_scale != 0.0) {
            return Err(ConfigError::invalid_param(
                "shape.value_scale",
                "must be finite and non-zero",
            ));
        }
        for (name, value) in [
            ("shape.stroke", &self.stroke),
            ("shape.background", &self.background),
            ("shape.gradient_from", &self.gradient_from),
            ("shape.gradient_to", &self.gradient_to),
        ] {
            if Rgb::from_hex(value).is_none() {
                return Err(ConfigError::invalid_param(
                    name,
                    format!("expected a #rrggbb color, got '{}'", value),
                ));
            }
        }
        Ok(())
    }
}

impl ToneParams {
    fn validate(&self) -> ConfigResult<()> {
        if !(self.min_frequency > 0.0 && self.max_frequency.is_finite()) {
            return Err(ConfigError::invalid_param(
                "tones.min_frequency",
                "frequencies must be positive and finite",
            ));
        }
        if self.min_frequency >= self.max_frequency {
            return Err(ConfigError::invalid_param(
                "tones.min_frequency",
                format!(
                    "must be below max_frequency ({} >= {})",
                    self.min_frequency, self.max_frequency
                ),
            ));
        }
        if !(1..=MAX_TONE_MS).contains(&self.duration_ms) {
            return Err(ConfigError::invalid_param(
                "tones.duration_ms",
                format!("{} is outside 1..={}", self.duration_ms, MAX_TONE_MS),
            ));
        }
        if self.stagger_ms > MAX_TONE_MS {
            return Err(ConfigError::invalid_param(
                "tones.stagger_ms",
                format!("{} exceeds {}", self.stagger_ms, MAX_TONE_MS),
            ));
        }
        if !(0.0..=1.0).contains(&self.gain) {
            return Err(ConfigError::invalid_param(
                "tones.gain",
                "must be between 0 and 1",
            ));
        }
        if !(8000..=192_000).contains(&self.sample_rate) {
            return Err(ConfigError::invalid_param(
                "tones.sample_rate",
                format!("{} is outside 8000..=192000", self.sample_rate),
            ));
        }
        if !(self.declick_ms >= 0.0 && self.declick_ms.is_finite()) {
            return Err(ConfigError::invalid_param(
                "tones.declick_ms",
                "must be non-negative",
            ));
        }
        Ok(())
    }

    /// Center of the frequency range, used for a degenerate value range.
    pub fn mid_frequency(&self) -> f64 {
        (self.min_frequency + self.max_frequency) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = GlyphConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cipher.phi, 1.618);
        assert_eq!(config.tones.mid_frequency(), 600.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            GlyphConfig::from_json_str(r#"{ "cipher": { "phi": 2.0 }, "tones": { "stagger_ms": 250 } }"#)
                .unwrap();
        assert_eq!(config.cipher.phi, 2.0);
        assert_eq!(config.tones.stagger_ms, 250);
        assert_eq!(config.tones.duration_ms, 500);
        assert_eq!(config.chart, ChartParams::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = GlyphConfig::from_json_str(r#"{ "cipher": { "psi": 2.0 } }"#).unwrap_err();
        assert_eq!(err.code(), "CFG_003");
    }

    #[test]
    fn test_round_trip() {
        let config = GlyphConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(GlyphConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = GlyphConfig::default();
        config.tones.min_frequency = 1000.0;
        assert!(config.validate().unwrap_err().to_string().contains("tones.min_frequency"));

        let mut config = GlyphConfig::default();
        config.tones.gain = 1.5;
        assert!(config.validate().unwrap_err().to_string().contains("tones.gain"));

        let mut config = GlyphConfig::default();
        config.shape.stroke = "blue".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("shape.stroke"));

        let mut config = GlyphConfig::default();
        config.chart.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyph.json");
        std::fs::write(&path, r#"{ "cipher": { "phi": 1.5 } }"#).unwrap();
        let config = GlyphConfig::from_json_file(&path).unwrap();
        assert_eq!(config.cipher.phi, 1.5);

        let missing = GlyphConfig::from_json_file(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(missing.code(), "CFG_002");
    }

    #[test]
    fn test_from_json_file_leaves_validation_to_caller() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyph.json");
        std::fs::write(&path, r#"{ "tones": { "gain": 4.0 } }"#).unwrap();
        let config = GlyphConfig::from_json_file(&path).unwrap();
        assert_eq!(config.tones.gain, 4.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tone_timing_upper_bounds() {
        let mut config = GlyphConfig::default();
        config.tones.duration_ms = u64::MAX;
        assert!(config.validate().unwrap_err().to_string().contains("tones.duration_ms"));

        let mut config = GlyphConfig::default();
        config.tones.stagger_ms = MAX_TONE_MS + 1;
        assert!(config.validate().unwrap_err().to_string().contains("tones.stagger_ms"));

        let mut config = GlyphConfig::default();
        config.tones.duration_ms = MAX_TONE_MS;
        config.tones.stagger_ms = MAX_TONE_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chart_size_upper_bounds() {
        let mut config = GlyphConfig::default();
        config.chart.point_radius = u32::MAX;
        assert!(config.validate().unwrap_err().to_string().contains("chart.point_radius"));

        let mut config = GlyphConfig::default();
        config.chart.width = MAX_DIMENSION + 1;
        assert!(config.validate().unwrap_err().to_string().contains("chart.width/height"));

        let mut config = GlyphConfig::default();
        config.shape.height = MAX_DIMENSION + 1;
        assert!(config.validate().unwrap_err().to_string().contains("shape.width/height"));
    }
}
