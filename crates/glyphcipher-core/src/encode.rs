//! Translate-then-cipher pipeline.

use serde::{Deserialize, Serialize};

use crate::alphabet::translate;
use crate::cipher::{cipher_sequence, CipherParams, CipherSequence};

/// Everything derived from one piece of input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    /// Text as typed.
    pub input: String,
    /// Text after glyph substitution.
    pub translated: String,
    /// One value per translated character.
    pub sequence: CipherSequence,
    /// Phi the sequence was computed with.
    pub phi: f64,
}

/// Translates `text` and ciphers the result character by character.
///
/// Nothing is cached; calling twice recomputes from scratch.
pub fn encode(text: &str, params: &CipherParams) -> Encoding {
    let translated = translate(text);
    let sequence = cipher_sequence(&translated, params);
    Encoding {
        input: text.to_string(),
        translated,
        sequence,
        phi: params.phi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hi() {
        let encoding = encode("Hi", &CipherParams::default());
        assert_eq!(encoding.translated, "𑀯⨁");
        // U+1102F and U+2A01, each at index 0
        assert_eq!(encoding.sequence.values(), &[0x1102F - 64, 0x2A01 - 64]);
    }

    #[test]
    fn test_phi_does_not_affect_single_character_pipeline() {
        let a = encode("Hello", &CipherParams::new(1.618));
        let b = encode("Hello", &CipherParams::new(9.0));
        assert_eq!(a.sequence, b.sequence);
        assert_eq!(b.phi, 9.0);
    }

    #[test]
    fn test_empty() {
        let encoding = encode("", &CipherParams::default());
        assert!(encoding.translated.is_empty());
        assert!(encoding.sequence.is_empty());
    }
}
