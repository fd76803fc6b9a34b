use solarlog_glyphs::{GlyphError, GlyphName};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("CGRAM slot {0} out of range (0-7)")]
    SlotOutOfRange(u8),
    #[error("CGRAM slot {0} assigned twice")]
    DuplicateSlot(u8),
    #[error("Glyph {0} assigned to more than one slot")]
    DuplicateGlyph(GlyphName),
    #[error("Glyph {0} is not loaded into any CGRAM slot")]
    GlyphNotLoaded(GlyphName),
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    #[error("Display error: {0}")]
    Lcd(#[from] charlcd_sim::Error),
    #[error("Invalid slot map JSON: {0}")]
    Json(#[from] serde_json::Error),
}
