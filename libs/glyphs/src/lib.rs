//! Custom-character bitmaps for the solar logger's character LCD
//!
//! Every glyph is eight rows of five pixels, ready to be written into one of
//! the eight CGRAM slots of an HD44780-compatible controller. Which glyph
//! lands in which slot is decided by the caller.

mod error;
mod glyph;
mod table;

pub use error::GlyphError;
pub use glyph::{GLYPH_COLUMNS, GLYPH_ROWS, Glyph, ROW_MASK};
pub use table::{
    DEGREE_CELSIUS, DOTS, EMPTY_BATTERY, GlyphName, LAST, LAST_ITEM, MAX, MIN, ROTATION, RUNNER,
    SIGNAL, TIMER,
};
