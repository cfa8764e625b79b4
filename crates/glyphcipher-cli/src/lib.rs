//! GlyphCipher CLI library.
//!
//! Configuration loading and the command implementations behind the
//! `glyphcipher` binary.

pub mod commands;
pub mod config;
