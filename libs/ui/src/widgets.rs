use crate::error::UiError;
use crate::slots::SlotMap;
use charlcd_sim::{CharacterDisplay, charset, common::BLANK};
use solarlog_glyphs::GlyphName;
use solarlog_locale::{Language, MessageKey};

/// One display row: an optional icon, a localized label and an optional
/// trailing value, e.g. `<runner> Record mode` or `<max> 23.5<degC>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub glyph: Option<GlyphName>,
    pub key: Option<MessageKey>,
    pub value: Option<String>,
    pub value_glyph: Option<GlyphName>,
}

impl StatusLine {
    #[must_use]
    pub fn new(key: MessageKey) -> Self {
        Self {
            glyph: None,
            key: Some(key),
            value: None,
            value_glyph: None,
        }
    }

    /// A line with no label, only the value part
    #[must_use]
    pub fn value_only(value: &str) -> Self {
        Self {
            glyph: None,
            key: None,
            value: Some(value.to_string()),
            value_glyph: None,
        }
    }

    #[must_use]
    pub fn with_glyph(mut self, glyph: GlyphName) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Text placed after the label, right-aligned
    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Glyph placed right after the value, such as a unit sign
    #[must_use]
    pub fn with_value_glyph(mut self, glyph: GlyphName) -> Self {
        self.value_glyph = Some(glyph);
        self
    }

    /// Character codes for a row `width` cells wide.
    ///
    /// The icon and label are left-aligned, the value is right-aligned and
    /// wins over the label when both do not fit. The result is padded with
    /// blanks to exactly `width` codes.
    pub fn render(
        &self,
        slots: &SlotMap,
        language: Language,
        width: usize,
    ) -> Result<Vec<u8>, UiError> {
        let mut left = Vec::with_capacity(width);
        if let Some(glyph) = self.glyph {
            left.push(slot_code(slots, glyph)?);
            left.push(BLANK);
        }
        if let Some(key) = self.key {
            left.extend(charset::encode(language.text(key))?);
        }

        let mut right = Vec::new();
        if let Some(value) = &self.value {
            right.extend(charset::encode(value)?);
        }
        if let Some(glyph) = self.value_glyph {
            right.push(slot_code(slots, glyph)?);
        }
        right.truncate(width);

        let room = width - right.len();
        if !right.is_empty() && left.len() >= room {
            // keep one blank between label and value
            left.truncate(room.saturating_sub(1));
        } else {
            left.truncate(room);
        }

        let mut line = left;
        line.resize(width - right.len(), BLANK);
        line.extend(right);
        Ok(line)
    }

    /// Write the line into `row` of the display
    pub fn show(
        &self,
        display: &mut CharacterDisplay,
        slots: &SlotMap,
        language: Language,
        row: u8,
    ) -> Result<(), UiError> {
        let width = usize::from(display.geometry().columns());
        let line = self.render(slots, language, width)?;
        display.set_cursor(0, row)?;
        display.write_bytes(&line);
        Ok(())
    }
}

fn slot_code(slots: &SlotMap, glyph: GlyphName) -> Result<u8, UiError> {
    slots.slot_of(glyph).ok_or(UiError::GlyphNotLoaded(glyph))
}
