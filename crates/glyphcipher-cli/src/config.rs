//! Configuration loading for CLI commands.

use anyhow::{Context, Result};
use glyphcipher_core::GlyphConfig;
use std::path::Path;

/// Loads the config file (or defaults), applies a `--phi` override, and
/// validates the result.
pub fn load_config(config_path: Option<&str>, phi: Option<f64>) -> Result<GlyphConfig> {
    let mut config = match config_path {
        Some(path) => GlyphConfig::from_json_file(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => GlyphConfig::default(),
    };

    if let Some(phi) = phi {
        config.cipher.phi = phi;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, GlyphConfig::default());
    }

    #[test]
    fn test_phi_override_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "cipher": { "phi": 2.5 } }"#).unwrap();

        let from_file = load_config(path.to_str(), None).unwrap();
        assert_eq!(from_file.cipher.phi, 2.5);

        let overridden = load_config(path.to_str(), Some(1.2)).unwrap();
        assert_eq!(overridden.cipher.phi, 1.2);
    }

    #[test]
    fn test_non_finite_phi_rejected() {
        let err = load_config(None, Some(f64::INFINITY)).unwrap_err();
        assert!(format!("{:#}", err).contains("cipher.phi"));
    }

    #[test]
    fn test_invalid_file_is_validated_once_after_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "tones": { "gain": 4.0 } }"#).unwrap();

        let err = load_config(path.to_str(), Some(2.0)).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Invalid configuration"));
        assert!(!message.contains("Failed to load config file"));
        assert_eq!(message.matches("tones.gain").count(), 1);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config(Some("/definitely/not/here.json"), None).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
