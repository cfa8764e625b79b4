//! Encode command implementation
//!
//! Translates text and prints its cipher sequence with the color of each value.

use anyhow::Result;
use colored::Colorize;
use glyphcipher_core::{encode, sequence_colors};
use std::process::ExitCode;

use super::json_output::{error_codes, EncodeResult, JsonError, JsonOutput};
use crate::config::load_config;

/// Run the encode command
///
/// # Arguments
/// * `text` - Text to encode
/// * `config_path` - Optional JSON config file
/// * `phi` - Optional phi override
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the configuration is invalid
pub fn run(
    text: &str,
    config_path: Option<&str>,
    phi: Option<f64>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(text, config_path, phi)
    } else {
        run_human(text, config_path, phi)
    }
}

/// Computes the encode result without printing anything.
pub fn build(text: &str, config_path: Option<&str>, phi: Option<f64>) -> Result<EncodeResult> {
    let config = load_config(config_path, phi)?;
    let encoding = encode(text, &config.cipher);
    let colors = sequence_colors(&encoding.sequence)
        .iter()
        .map(|c| c.to_css())
        .collect();

    Ok(EncodeResult {
        input: encoding.input,
        translated: encoding.translated,
        phi: encoding.phi,
        sequence: encoding.sequence.into_inner(),
        colors,
    })
}

fn run_human(text: &str, config_path: Option<&str>, phi: Option<f64>) -> Result<ExitCode> {
    let result = build(text, config_path, phi)?;

    println!("{} {}", "Encoding:".cyan().bold(), result.input);
    println!("{} {}", "Translated:".dimmed(), result.translated);
    println!("{} {}", "Phi:".dimmed(), result.phi);

    if result.sequence.is_empty() {
        println!("  {} empty input, nothing to encode", "!!".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} ({} values)",
        "Sequence:".bold(),
        result.sequence.len()
    );
    for (index, (value, color)) in result.sequence.iter().zip(&result.colors).enumerate() {
        println!("  {:>4}  {:>10}  {}", index, value, color.dimmed());
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(text: &str, config_path: Option<&str>, phi: Option<f64>) -> Result<ExitCode> {
    match build(text, config_path, phi) {
        Ok(result) => {
            JsonOutput::success(result).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            JsonOutput::<EncodeResult>::failure(JsonError::from_anyhow(error_codes::CONFIG, &e))
                .print()?;
            Ok(ExitCode::from(1))
        }
    }
}
