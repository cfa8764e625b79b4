//! Value-to-color gradient.
//!
//! Low values are cyan-ish (green and blue at full), high values are red.
//! The same normalization feeds the tone frequency mapping, so both surfaces
//! agree on where a value sits in its range.

use serde::{Deserialize, Serialize};

use crate::cipher::CipherSequence;

/// Normalized position used when `min == max` or the division is not finite.
pub const DEGENERATE_NORMALIZED: f64 = 0.5;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(255, 0, 0)`.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Lowercase hex notation, e.g. `#ff0000`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses `#rrggbb` or `#rgb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Some(Self::new(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => None,
        }
    }
}

/// Position of `value` inside `[min, max]`, clamped to `[0, 1]`.
///
/// Returns [`DEGENERATE_NORMALIZED`] when the range is empty or the result
/// is not finite.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let normalized = (value - min) / (max - min);
    if normalized.is_finite() {
        normalized.clamp(0.0, 1.0)
    } else {
        DEGENERATE_NORMALIZED
    }
}

/// Maps a value to the gradient color for its position in `[min, max]`.
///
/// A degenerate range (`min == max`) yields mid-gray `rgb(128, 128, 128)`.
pub fn value_color(value: f64, min: f64, max: f64) -> Rgb {
    let n = normalize(value, min, max);
    let red = (255.0 * n).round() as u8;
    let cool = (255.0 * (1.0 - n)).round() as u8;
    Rgb::new(red, cool, cool)
}

/// Colors every value of a sequence against the sequence's own bounds.
pub fn sequence_colors(sequence: &CipherSequence) -> Vec<Rgb> {
    let Some((min, max)) = sequence.bounds() else {
        return Vec::new();
    };
    sequence
        .values()
        .iter()
        .map(|&v| value_color(v as f64, min as f64, max as f64))
        .collect()
}
