//! CLI command implementations

pub mod encode;
pub mod json_output;
pub mod plot;
pub mod sound;
pub mod symbols;
pub mod translate;
