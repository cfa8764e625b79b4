//! Translate command implementation
//!
//! Prints the glyph translation of the input text.

use anyhow::Result;
use colored::Colorize;
use glyphcipher_core::translate;
use std::process::ExitCode;

use super::json_output::{JsonOutput, TranslateResult};

/// Run the translate command
pub fn run(text: &str, json_output: bool) -> Result<ExitCode> {
    let translated = translate(text);

    if json_output {
        JsonOutput::success(TranslateResult {
            input: text.to_string(),
            translated,
        })
        .print()?;
    } else {
        println!("{} {}", "Input:".dimmed(), text);
        println!("{} {}", "Translated:".cyan().bold(), translated);
    }

    Ok(ExitCode::SUCCESS)
}
