use super::Page;
use crate::error::UiError;
use crate::slots::SlotMap;
use charlcd_sim::{CharacterDisplay, charset, common::BLANK};
use solarlog_locale::{Language, MessageKey};

/// `MessagePage` shows a single confirmation or notice centered on the
/// first row, such as "Saved" after a setting changed.
pub struct MessagePage {
    key: MessageKey,
}

impl MessagePage {
    #[must_use]
    pub fn new(key: MessageKey) -> Self {
        Self { key }
    }
}

impl Page for MessagePage {
    fn draw(
        &self,
        display: &mut CharacterDisplay,
        _slots: &SlotMap,
        language: Language,
    ) -> Result<(), UiError> {
        let width = usize::from(display.geometry().columns());
        let mut text = charset::encode(language.text(self.key))?;
        text.truncate(width);

        let mut line = vec![BLANK; (width - text.len()) / 2];
        line.extend(text);
        display.set_cursor(0, 0)?;
        display.write_bytes(&line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charlcd_sim::Geometry;

    #[test]
    fn test_message_is_centered() {
        let mut display = CharacterDisplay::new(Geometry::Lcd16x2).unwrap();
        MessagePage::new(MessageKey::Saved)
            .show(&mut display, &SlotMap::empty(), Language::En)
            .unwrap();
        let row = display.line(0).unwrap();
        // "Saved" is 5 wide: 5 blanks, text, 6 blanks
        assert_eq!(&row[5..10], b"Saved");
        assert!(row[..5].iter().all(|&c| c == BLANK));
        assert!(row[10..].iter().all(|&c| c == BLANK));
    }

    #[test]
    fn test_show_clears_previous_content() {
        let mut display = CharacterDisplay::new(Geometry::Lcd16x2).unwrap();
        display.set_cursor(0, 1).unwrap();
        display.print("old").unwrap();
        MessagePage::new(MessageKey::Done)
            .show(&mut display, &SlotMap::empty(), Language::De)
            .unwrap();
        assert_eq!(display.line(1).unwrap(), vec![BLANK; 16]);
        assert_eq!(&display.line(0).unwrap()[7..9], b"Ok");
    }
}
