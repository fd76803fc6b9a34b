use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    #[error("Row {row} has bits outside the 5-pixel width: {value:#04x}")]
    StrayBits { row: usize, value: u8 },
    #[error("Unknown glyph name: {0}")]
    UnknownName(String),
}
