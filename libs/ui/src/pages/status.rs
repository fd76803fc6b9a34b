use super::Page;
use crate::error::UiError;
use crate::slots::SlotMap;
use crate::widgets::StatusLine;
use charlcd_sim::CharacterDisplay;
use log::warn;
use solarlog_glyphs::GlyphName;
use solarlog_locale::{Language, MessageKey};

/// `StatusPage` stacks one [`StatusLine`] per display row.
///
/// Lines beyond the display height are dropped with a warning.
#[derive(Clone, Debug, Default)]
pub struct StatusPage {
    lines: Vec<StatusLine>,
}

impl StatusPage {
    #[must_use]
    pub fn new(lines: Vec<StatusLine>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn with_line(mut self, line: StatusLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn lines(&self) -> &[StatusLine] {
        &self.lines
    }

    /// Time sync state, recording state and the min/max temperatures
    #[must_use]
    pub fn overview(time_synced: bool, recording: bool, max: &str, min: &str) -> Self {
        let time = if time_synced {
            StatusLine::new(MessageKey::Dcf77Sync).with_glyph(GlyphName::Signal)
        } else {
            StatusLine::new(MessageKey::Dcf77Missing).with_glyph(GlyphName::Rotation)
        };
        let record = if recording {
            StatusLine::new(MessageKey::RecordMode).with_glyph(GlyphName::Runner)
        } else {
            StatusLine::new(MessageKey::NoRecording).with_glyph(GlyphName::Timer)
        };
        Self::new(vec![
            time,
            record,
            StatusLine::value_only(max)
                .with_glyph(GlyphName::Max)
                .with_value_glyph(GlyphName::DegreeCelsius),
            StatusLine::value_only(min)
                .with_glyph(GlyphName::Min)
                .with_value_glyph(GlyphName::DegreeCelsius),
        ])
    }
}

impl Page for StatusPage {
    fn draw(
        &self,
        display: &mut CharacterDisplay,
        slots: &SlotMap,
        language: Language,
    ) -> Result<(), UiError> {
        let rows = usize::from(display.geometry().rows());
        if self.lines.len() > rows {
            warn!(
                "Status page has {} lines, display shows {rows}",
                self.lines.len()
            );
        }
        for (row, line) in (0u8..).zip(self.lines.iter().take(rows)) {
            line.show(display, slots, language, row)?;
        }
        Ok(())
    }

    fn glyphs(&self) -> Vec<GlyphName> {
        let mut glyphs = Vec::new();
        for line in &self.lines {
            for glyph in [line.glyph, line.value_glyph].into_iter().flatten() {
                if !glyphs.contains(&glyph) {
                    glyphs.push(glyph);
                }
            }
        }
        glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charlcd_sim::{Geometry, common::BLANK};

    #[test]
    fn test_overview_glyphs_fit_cgram() {
        let page = StatusPage::overview(true, true, "31.2", "-4.0");
        let glyphs = page.glyphs();
        assert_eq!(
            glyphs,
            vec![
                GlyphName::Signal,
                GlyphName::Runner,
                GlyphName::Max,
                GlyphName::DegreeCelsius,
                GlyphName::Min,
            ]
        );
        assert!(SlotMap::for_glyphs(&glyphs).is_ok());
    }

    #[test]
    fn test_overview_on_20x4() {
        let page = StatusPage::overview(false, false, "31.2", "-4.0");
        let slots = SlotMap::for_glyphs(&page.glyphs()).unwrap();
        let mut display = CharacterDisplay::new(Geometry::Lcd20x4).unwrap();
        slots.upload(&mut display).unwrap();
        page.show(&mut display, &slots, Language::De).unwrap();

        let rotation = slots.slot_of(GlyphName::Rotation).unwrap();
        let row0 = display.line(0).unwrap();
        assert_eq!(row0[0], rotation);
        assert_eq!(&row0[2..17], b"Zeit ausstehend");

        let row1 = display.line(1).unwrap();
        assert_eq!(&row1[2..9], b"Manuell");

        let celsius = slots.slot_of(GlyphName::DegreeCelsius).unwrap();
        let row3 = display.line(3).unwrap();
        assert_eq!(row3[0], slots.slot_of(GlyphName::Min).unwrap());
        assert_eq!(&row3[15..19], b"-4.0");
        assert_eq!(row3[19], celsius);
    }

    #[test]
    fn test_extra_lines_are_dropped() {
        let page = StatusPage::overview(true, false, "1", "0");
        let slots = SlotMap::for_glyphs(&page.glyphs()).unwrap();
        let mut display = CharacterDisplay::new(Geometry::Lcd16x2).unwrap();
        slots.upload(&mut display).unwrap();
        page.show(&mut display, &slots, Language::En).unwrap();
        assert_eq!(&display.line(1).unwrap()[2..8], b"Manual");
    }

    #[test]
    fn test_empty_page_leaves_blank_display() {
        let mut display = CharacterDisplay::new(Geometry::Lcd16x2).unwrap();
        StatusPage::default()
            .show(&mut display, &SlotMap::empty(), Language::En)
            .unwrap();
        assert_eq!(display.line(0).unwrap(), vec![BLANK; 16]);
    }
}
