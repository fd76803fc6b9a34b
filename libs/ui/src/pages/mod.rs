use crate::error::UiError;
use crate::slots::SlotMap;
use charlcd_sim::CharacterDisplay;
use solarlog_locale::Language;

pub mod message;
pub mod status;

pub use message::MessagePage;
pub use status::StatusPage;

/// Trait for screens that can be written to the character display
pub trait Page {
    /// Write the page content, row by row
    fn draw(
        &self,
        display: &mut CharacterDisplay,
        slots: &SlotMap,
        language: Language,
    ) -> Result<(), UiError>;

    /// Glyphs the page needs in CGRAM
    fn glyphs(&self) -> Vec<solarlog_glyphs::GlyphName> {
        Vec::new()
    }

    /// Clear the display and draw the page (convenience method)
    fn show(
        &self,
        display: &mut CharacterDisplay,
        slots: &SlotMap,
        language: Language,
    ) -> Result<(), UiError> {
        display.clear()?;
        self.draw(display, slots, language)
    }
}
