//! Symbols command implementation
//!
//! Prints the fixed letter-to-glyph table.

use anyhow::Result;
use colored::Colorize;
use glyphcipher_core::symbols;
use std::process::ExitCode;

use super::json_output::{JsonOutput, SymbolEntry};

/// Run the symbols command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries: Vec<SymbolEntry> = symbols()
        .map(|(letter, glyph)| SymbolEntry {
            letter,
            glyph,
            code_point: format!("U+{:04X}", glyph as u32),
        })
        .collect();

    if json_output {
        JsonOutput::success(entries).print()?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Symbol Table".cyan().bold());
    println!("{}", "============".cyan());
    for entry in &entries {
        println!(
            "  {} {} {}",
            entry.letter.to_string().bold(),
            entry.glyph,
            entry.code_point.dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
