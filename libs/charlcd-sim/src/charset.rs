//! Character ROM mapping
//!
//! Printable ASCII is stored as-is. The logger firmware writes German
//! umlauts with the code-page-437 codes below, and the degree sign with the
//! HD44780 ROM code.

use crate::error::{Error, LcdResult};

const EXTENDED: [(char, u8); 8] = [
    ('ü', 0x81),
    ('ä', 0x84),
    ('Ä', 0x8E),
    ('ö', 0x94),
    ('Ö', 0x99),
    ('Ü', 0x9A),
    ('°', 0xDF),
    ('ß', 0xE1),
];

/// ROM code for `c`, if the display can show it
pub fn encode_char(c: char) -> Option<u8> {
    if c.is_ascii() && !c.is_ascii_control() {
        return u8::try_from(c).ok();
    }
    EXTENDED
        .iter()
        .find(|(candidate, _)| *candidate == c)
        .map(|(_, code)| *code)
}

/// Encode a whole string, failing on the first character without a ROM code
pub fn encode(text: &str) -> LcdResult<Vec<u8>> {
    text.chars()
        .map(|c| encode_char(c).ok_or(Error::Unencodable(c)))
        .collect()
}

/// Character shown for a ROM code. CGRAM codes (below 0x10) and codes the
/// mapping does not cover return `None`.
pub fn decode(code: u8) -> Option<char> {
    match code {
        0x20..=0x7E => Some(char::from(code)),
        _ => EXTENDED
            .iter()
            .find(|(_, candidate)| *candidate == code)
            .map(|(c, _)| *c),
    }
}
