//! GlyphCipher CLI - translate text to glyphs and derive its cipher sequence
//!
//! This binary wires the command-line arguments to the command
//! implementations in the `glyphcipher_cli` library.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use glyphcipher_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Translate { text, json } => commands::translate::run(&text, json),
        Commands::Encode { text, phi, json } => commands::encode::run(&text, config, phi, json),
        Commands::Plot {
            text,
            phi,
            out_dir,
            json,
        } => commands::plot::run(&text, config, phi, out_dir.as_deref(), json),
        Commands::Sound {
            text,
            phi,
            out,
            realtime,
            json,
        } => commands::sound::run(&text, config, phi, &out, realtime, json),
        Commands::Symbols { json } => commands::symbols::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
