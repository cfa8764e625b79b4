//! CLI argument definitions for the GlyphCipher command-line interface.

use clap::{Parser, Subcommand};

/// GlyphCipher - glyph translation and golden ratio cipher
#[derive(Parser)]
#[command(name = "glyphcipher")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Translate text through the glyph alphabet
    Translate {
        /// Text to translate
        text: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Translate text and print its cipher sequence
    Encode {
        /// Text to encode
        text: String,

        /// Cipher parameter (overrides the config file)
        #[arg(long)]
        phi: Option<f64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render the cipher sequence as a chart PNG and a shape SVG
    Plot {
        /// Text to encode
        text: String,

        /// Cipher parameter (overrides the config file)
        #[arg(long)]
        phi: Option<f64>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render the cipher sequence as a tone sequence WAV
    Sound {
        /// Text to encode
        text: String,

        /// Cipher parameter (overrides the config file)
        #[arg(long)]
        phi: Option<f64>,

        /// Output WAV path
        #[arg(short, long, default_value = "tones.wav")]
        out: String,

        /// Also play the schedule in real time, printing each tone (Ctrl-C stops)
        #[arg(long, conflicts_with = "json")]
        realtime: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the glyph alphabet
    Symbols {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
