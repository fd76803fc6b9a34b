use anyhow::{Context, Result};
use charlcd_sim::{CharacterDisplay, Framebuffer, Geometry};
use colored::Colorize;
use solarlog_locale::{Language, MessageKey};
use solarlog_ui::pages::{MessagePage, StatusPage};
use solarlog_ui::{Page, SlotMap};
use std::path::Path;

use crate::config::{SlotMapSource, resolve_slot_map};
use crate::constants::{PIXEL_OFF, PIXEL_ON};
use crate::utils::{info, print_title_bar};

/// What to put on the simulated screen
pub struct RenderOptions<'a> {
    pub language: Language,
    pub slots: Option<&'a Path>,
    pub geometry: Geometry,
    /// Show a single message instead of the status overview
    pub message: Option<MessageKey>,
    pub max: &'a str,
    pub min: &'a str,
}

/// Upload `slots`, draw `page` and rasterize the result
pub fn render_page(
    page: &dyn Page,
    slots: &SlotMap,
    language: Language,
    geometry: Geometry,
) -> Result<Framebuffer> {
    let mut display = CharacterDisplay::new(geometry)?;
    slots.upload(&mut display)?;
    page.show(&mut display, slots, language)
        .context("Failed to draw page")?;

    let mut framebuffer = Framebuffer::for_geometry(geometry);
    let Ok(()) = framebuffer.render(&display);
    Ok(framebuffer)
}

pub fn run_render(options: &RenderOptions<'_>) -> Result<()> {
    let page: Box<dyn Page> = match options.message {
        Some(key) => Box::new(MessagePage::new(key)),
        None => Box::new(StatusPage::overview(true, true, options.max, options.min)),
    };
    let (slots, source) = resolve_slot_map(options.slots, &page.glyphs())?;

    print_title_bar(&format!(
        "{}x{} preview ({})",
        options.geometry.columns(),
        options.geometry.rows(),
        options.language
    ));
    match &source {
        SlotMapSource::File(path) => info(&format!("Slot map: {}", path.display())),
        SlotMapSource::Page => info("Slot map: glyphs used by the page"),
    }
    for (slot, name) in slots.iter() {
        log::debug!("slot {slot}: {name}");
    }
    println!();

    let framebuffer = render_page(page.as_ref(), &slots, options.language, options.geometry)?;
    for line in framebuffer.to_ascii_art(PIXEL_ON, PIXEL_OFF).lines() {
        println!("  {}", line.bright_green());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Point;
    use solarlog_glyphs::GlyphName;

    #[test]
    fn test_overview_needs_its_own_glyphs() {
        let page = StatusPage::overview(true, true, "21.5", "-3.0");
        let slots = SlotMap::for_glyphs(&page.glyphs()).unwrap();
        assert!(slots.slot_of(GlyphName::Runner).is_some());
        render_page(&page, &slots, Language::De, Geometry::Lcd20x4).unwrap();
    }

    #[test]
    fn test_missing_glyph_is_reported() {
        let page = StatusPage::overview(true, true, "21.5", "-3.0");
        let err = render_page(&page, &SlotMap::empty(), Language::En, Geometry::Lcd16x2)
            .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to draw page"));
        assert!(format!("{err:#}").contains("not loaded"));
    }

    #[test]
    fn test_first_cell_shows_signal_glyph() {
        let page = StatusPage::overview(true, false, "21.5", "-3.0");
        let slots = SlotMap::for_glyphs(&page.glyphs()).unwrap();
        let framebuffer = render_page(&page, &slots, Language::En, Geometry::Lcd16x2).unwrap();
        for (column, row) in GlyphName::Signal.glyph().pixels() {
            let point = Point::new(i32::try_from(column).unwrap(), i32::try_from(row).unwrap());
            assert!(framebuffer.is_lit(point));
        }
    }
}
