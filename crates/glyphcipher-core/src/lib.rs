//! GlyphCipher Core Library
//!
//! This crate holds the deterministic heart of GlyphCipher: it maps text through
//! a fixed glyph alphabet and derives an integer sequence from it with a
//! positional exponential cipher keyed on the golden ratio.
//!
//! # Overview
//!
//! - **Alphabet Translator** - substitutes each letter A-Z (any case) with a glyph
//!   from the [`SYMBOL_TABLE`], one character in, one character out
//! - **Positional Cipher Generator** - maps each character to
//!   `round((code - 64) * phi^i)`
//! - **Color Mapping** - blue/green to red gradient used by every presentation surface
//!
//! Every function in this crate is total: empty strings, unmapped characters and
//! degenerate numeric ranges all produce a defined value.
//!
//! # Example
//!
//! ```
//! use glyphcipher_core::{encode, CipherParams};
//!
//! let encoding = encode("Hi", &CipherParams::default());
//! assert_eq!(encoding.translated, "𑀯⨁");
//! assert_eq!(encoding.sequence.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`alphabet`]: Symbol Table and translator
//! - [`cipher`]: cipher parameters, generator and the [`CipherSequence`] type
//! - [`color`]: value-to-color gradient
//! - [`config`]: serde configuration for all surfaces
//! - [`encode`]: the translate-then-cipher pipeline
//! - [`error`]: configuration errors

pub mod alphabet;
pub mod cipher;
pub mod color;
pub mod config;
pub mod encode;
pub mod error;

// Re-export commonly used types at the crate root
pub use alphabet::{glyph_for, symbols, translate, SYMBOL_TABLE};
pub use cipher::{cipher_sequence, golden_ratio_cipher, CipherParams, CipherSequence, DEFAULT_PHI};
pub use color::{normalize, sequence_colors, value_color, Rgb, DEGENERATE_NORMALIZED};
pub use config::{
    ChartParams, GlyphConfig, ShapeParams, ToneParams, MAX_DIMENSION, MAX_TONE_MS,
};
pub use encode::{encode, Encoding};
pub use error::{ConfigError, ConfigResult};
