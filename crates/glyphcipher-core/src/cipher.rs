//! Positional Cipher Generator.
//!
//! Each character contributes `round((code(upper(c)) - 64) * phi^i)` where `i`
//! is its position inside the word being ciphered. `A` therefore starts at 1,
//! `B` at 2, and so on. Code points outside A-Z are not rejected: a glyph such
//! as `⚗` simply yields its raw code point minus 64.

use serde::{Deserialize, Serialize};

use crate::alphabet::upper_single;

/// Value of phi used when nothing else is configured.
pub const DEFAULT_PHI: f64 = 1.618;

/// Offset subtracted from every code point so that `A` maps to 1.
const CODE_OFFSET: f64 = 64.0;

/// Parameters for the positional cipher.
///
/// Passed explicitly to every call; changing phi only affects later calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CipherParams {
    /// Base of the positional weighting.
    pub phi: f64,
}

impl Default for CipherParams {
    fn default() -> Self {
        Self { phi: DEFAULT_PHI }
    }
}

impl CipherParams {
    /// Creates cipher parameters with the given phi.
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }
}

/// Ciphers a single word, one integer per character.
///
/// Rounding is half away from zero. Results beyond the `i64` range saturate
/// and a NaN result (only possible with a non-finite phi) becomes 0.
pub fn golden_ratio_cipher(word: &str, params: &CipherParams) -> Vec<i64> {
    word.chars()
        .enumerate()
        .map(|(index, c)| {
            let code = upper_single(c) as u32 as f64 - CODE_OFFSET;
            (code * params.phi.powf(index as f64)).round() as i64
        })
        .collect()
}

/// Builds the Cipher Sequence for translated text.
///
/// The generator is called once per character, so the position index resets
/// to 0 for every character and each one contributes exactly one value.
pub fn cipher_sequence(translated: &str, params: &CipherParams) -> CipherSequence {
    let mut values = Vec::with_capacity(translated.len());
    let mut buf = [0u8; 4];
    for c in translated.chars() {
        values.extend(golden_ratio_cipher(c.encode_utf8(&mut buf), params));
    }
    CipherSequence::new(values)
}

/// Ordered cipher output consumed read-only by every presentation surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CipherSequence(Vec<i64>);

impl CipherSequence {
    /// Wraps raw values.
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// The values in input order.
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn min(&self) -> Option<i64> {
        self.0.iter().copied().min()
    }

    pub fn max(&self) -> Option<i64> {
        self.0.iter().copied().max()
    }

    /// Returns `(min, max)`, or `None` for an empty sequence.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        Some((self.min()?, self.max()?))
    }

    /// Iterates over `(position, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.0.iter().copied().enumerate()
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }
}

impl From<Vec<i64>> for CipherSequence {
    fn from(values: Vec<i64>) -> Self {
        Self(values)
    }
}
