pub mod charset;
pub mod common;
pub mod controller;
pub mod display;
mod error;
pub mod framebuffer;

pub use common::Geometry;
pub use controller::{Command, Controller};
pub use display::CharacterDisplay;
pub use error::{Error, LcdResult};
pub use framebuffer::{Framebuffer, GlyphCell};
