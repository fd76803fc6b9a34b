//! Status screens for the solar logger's character display
//!
//! Combines the custom glyphs and the localized strings into display lines:
//! which glyph sits in which CGRAM slot, and how an icon and a label share a
//! row.

mod error;
pub mod pages;
pub mod slots;
pub mod widgets;

// Re-export commonly used types
pub use error::UiError;
pub use pages::Page;
pub use slots::SlotMap;
pub use widgets::StatusLine;
