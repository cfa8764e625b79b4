//! Symbol Table and Alphabet Translator.
//!
//! The table is keyed on uppercase ASCII letters only. Lookup upper-cases the
//! input character first, so `a` and `A` both map to the same glyph.

/// Fixed letter-to-glyph mapping. Every glyph is a single Unicode scalar value.
pub const SYMBOL_TABLE: [(char, char); 26] = [
    ('A', '𓂀'),
    ('B', 'Ꙫ'),
    ('C', 'ⴲ'),
    ('D', 'Ꙥ'),
    ('E', '⊕'),
    ('F', '⨀'),
    ('G', 'Ꙡ'),
    ('H', '𑀯'),
    ('I', '⨁'),
    ('J', '✹'),
    ('K', 'ꙧ'),
    ('L', '⍣'),
    ('M', '⚸'),
    ('N', '⚺'),
    ('O', '⦿'),
    ('P', '⚛'),
    ('Q', '⊛'),
    ('R', '⚒'),
    ('S', '⚕'),
    ('T', '✴'),
    ('U', '☀'),
    ('V', '⍟'),
    ('W', '⚙'),
    ('X', '⚚'),
    ('Y', '⚖'),
    ('Z', '⚗'),
];

/// Upper-cases a single character.
///
/// Characters whose uppercase form is more than one character (`ß` -> `SS`)
/// are returned unchanged so callers can rely on one-for-one substitution.
pub(crate) fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Returns the glyph for a character, if its uppercase form is A-Z.
pub fn glyph_for(c: char) -> Option<char> {
    let upper = upper_single(c);
    if upper.is_ascii_uppercase() {
        Some(SYMBOL_TABLE[(upper as u8 - b'A') as usize].1)
    } else {
        None
    }
}

/// Translates text through the Symbol Table.
///
/// Letters become glyphs. Every other character is emitted in its uppercase
/// form, or verbatim when that form would span several characters. The output
/// always has the same number of characters as the input.
pub fn translate(text: &str) -> String {
    text.chars()
        .map(|c| glyph_for(c).unwrap_or_else(|| upper_single(c)))
        .collect()
}

/// Iterates over the table as `(letter, glyph)` pairs in alphabetical order.
pub fn symbols() -> impl Iterator<Item = (char, char)> {
    SYMBOL_TABLE.iter().copied()
}
