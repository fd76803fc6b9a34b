use solarlog_glyphs::GlyphError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("CGRAM slot {0} out of range (0-7)")]
    InvalidSlot(u8),
    #[error("Cursor ({column}, {row}) outside the {columns}x{rows} display")]
    CursorOutOfRange {
        column: u8,
        row: u8,
        columns: u8,
        rows: u8,
    },
    #[error("DDRAM address 0x{0:02X} is not mapped")]
    AddressOutOfRange(u8),
    #[error("Instruction byte 0x00 is not a command")]
    EmptyInstruction,
    #[error("Character {0:?} has no code in the display ROM")]
    Unencodable(char),
    #[error("Glyph error: {0}")]
    Glyph(#[from] GlyphError),
}

pub type LcdResult<T> = Result<T, Error>;
