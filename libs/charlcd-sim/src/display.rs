use crate::charset;
use crate::common::{CGRAM_SLOTS, Geometry};
use crate::controller::{
    Command, Controller, DISPLAY_ON, EIGHT_BIT_BUS, ENTRY_INCREMENT, TWO_LINES,
};
use crate::error::{Error, LcdResult};
use log::{debug, info};
use solarlog_glyphs::{GLYPH_ROWS, Glyph};

/// A character LCD panel: a controller plus the visible window geometry.
///
/// Mirrors the calls firmware makes through a LiquidCrystal-style driver
/// (`createChar`, `setCursor`, `print`), each translated into controller
/// instructions.
pub struct CharacterDisplay {
    controller: Controller,
    geometry: Geometry,
}

impl CharacterDisplay {
    /// Power up and run the usual initialization sequence
    pub fn new(geometry: Geometry) -> LcdResult<Self> {
        info!(
            "Initializing {}x{} character display",
            geometry.columns(),
            geometry.rows()
        );
        let mut display = Self {
            controller: Controller::new(),
            geometry,
        };
        display.command(Command::FunctionSet, EIGHT_BIT_BUS | TWO_LINES)?;
        display.command(Command::DisplayControl, DISPLAY_ON)?;
        display.command(Command::ClearDisplay, 0)?;
        display.command(Command::EntryModeSet, ENTRY_INCREMENT)?;
        Ok(display)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    fn command(&mut self, command: Command, operand: u8) -> LcdResult<()> {
        self.controller.write_command(command.with(operand))
    }

    /// Program CGRAM `slot` with `glyph`. Leaves the cursor at home.
    pub fn create_char(&mut self, slot: u8, glyph: &Glyph) -> LcdResult<()> {
        if slot >= CGRAM_SLOTS {
            return Err(Error::InvalidSlot(slot));
        }
        debug!("LCD: uploading glyph to CGRAM slot {slot}");
        self.command(Command::SetCgramAddress, slot << 3)?;
        for &row in glyph.rows() {
            self.controller.write_data(row);
        }
        self.command(Command::SetDdramAddress, 0)
    }

    /// Program CGRAM `slot` from raw rows, rejecting rows wider than 5 pixels
    pub fn create_char_rows(&mut self, slot: u8, rows: [u8; GLYPH_ROWS]) -> LcdResult<()> {
        let glyph = Glyph::from_rows(rows)?;
        self.create_char(slot, &glyph)
    }

    /// Read CGRAM `slot` back through the data register. Only the five pixel
    /// bits of each row are kept.
    pub fn read_char(&mut self, slot: u8) -> LcdResult<Glyph> {
        if slot >= CGRAM_SLOTS {
            return Err(Error::InvalidSlot(slot));
        }
        self.command(Command::SetCgramAddress, slot << 3)?;
        let mut rows = [0u8; GLYPH_ROWS];
        for row in &mut rows {
            *row = self.controller.read_data();
        }
        self.command(Command::SetDdramAddress, 0)?;
        Ok(Glyph::from_rows_masked(rows))
    }

    pub fn clear(&mut self) -> LcdResult<()> {
        self.command(Command::ClearDisplay, 0)
    }

    pub fn home(&mut self) -> LcdResult<()> {
        self.command(Command::ReturnHome, 0)
    }

    pub fn set_cursor(&mut self, column: u8, row: u8) -> LcdResult<()> {
        let out_of_range = || Error::CursorOutOfRange {
            column,
            row,
            columns: self.geometry.columns(),
            rows: self.geometry.rows(),
        };
        if column >= self.geometry.columns() {
            return Err(out_of_range());
        }
        let offset = self.geometry.row_offset(row).ok_or_else(out_of_range)?;
        self.command(Command::SetDdramAddress, offset + column)
    }

    /// Write raw character codes at the cursor
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.controller.write_data(byte);
        }
    }

    /// Write the custom character in `slot` at the cursor
    pub fn write_slot(&mut self, slot: u8) -> LcdResult<()> {
        if slot >= CGRAM_SLOTS {
            return Err(Error::InvalidSlot(slot));
        }
        self.controller.write_data(slot);
        Ok(())
    }

    /// Encode `text` for the character ROM and write it at the cursor.
    /// Nothing is written if any character has no ROM code.
    pub fn print(&mut self, text: &str) -> LcdResult<()> {
        let bytes = charset::encode(text)?;
        self.write_bytes(&bytes);
        Ok(())
    }

    /// Character code shown at a visible cell
    pub fn cell(&self, column: u8, row: u8) -> Option<u8> {
        if column >= self.geometry.columns() {
            return None;
        }
        let offset = self.geometry.row_offset(row)?;
        self.controller.visible_code(offset, column)
    }

    /// Character codes of one visible row
    pub fn line(&self, row: u8) -> Option<Vec<u8>> {
        (0..self.geometry.columns())
            .map(|column| self.cell(column, row))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BLANK;
    use solarlog_glyphs::GlyphName;

    fn display() -> CharacterDisplay {
        CharacterDisplay::new(Geometry::Lcd16x2).unwrap()
    }

    #[test]
    fn test_init_sequence() {
        let display = display();
        assert!(display.controller().is_display_on());
        assert!(display.controller().is_two_line());
        assert_eq!(display.line(0).unwrap(), vec![BLANK; 16]);
    }

    #[test]
    fn test_create_and_read_char() {
        let mut display = display();
        display
            .create_char(1, GlyphName::DegreeCelsius.glyph())
            .unwrap();
        assert_eq!(
            display.read_char(1).unwrap().rows(),
            &[0x08, 0x14, 0x08, 0x03, 0x04, 0x04, 0x03, 0x00]
        );
    }

    #[test]
    fn test_invalid_slot() {
        let mut display = display();
        assert_eq!(
            display.create_char(8, GlyphName::Max.glyph()),
            Err(Error::InvalidSlot(8))
        );
        assert_eq!(display.read_char(9), Err(Error::InvalidSlot(9)));
        assert_eq!(display.write_slot(8), Err(Error::InvalidSlot(8)));
    }

    #[test]
    fn test_create_char_rows_rejects_wide_rows() {
        let mut display = display();
        assert!(matches!(
            display.create_char_rows(0, [0x20, 0, 0, 0, 0, 0, 0, 0]),
            Err(Error::Glyph(_))
        ));
    }

    #[test]
    fn test_upload_keeps_text() {
        let mut display = display();
        display.print("Solar").unwrap();
        display.create_char(0, GlyphName::Signal.glyph()).unwrap();
        assert_eq!(&display.line(0).unwrap()[..5], b"Solar");
    }

    #[test]
    fn test_print_at_cursor() {
        let mut display = display();
        display.set_cursor(0, 1).unwrap();
        display.write_slot(2).unwrap();
        display.print("Zurück").unwrap();
        let line = display.line(1).unwrap();
        assert_eq!(line[0], 2);
        assert_eq!(&line[1..7], &[b'Z', b'u', b'r', 0x81, b'c', b'k']);
    }

    #[test]
    fn test_print_is_all_or_nothing() {
        let mut display = display();
        assert_eq!(display.print("ab€"), Err(Error::Unencodable('€')));
        assert_eq!(display.cell(0, 0), Some(BLANK));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut display = display();
        assert_eq!(
            display.set_cursor(16, 0),
            Err(Error::CursorOutOfRange {
                column: 16,
                row: 0,
                columns: 16,
                rows: 2
            })
        );
        assert!(display.set_cursor(0, 2).is_err());
        assert_eq!(display.cell(16, 0), None);
        assert_eq!(display.line(2), None);
    }

    #[test]
    fn test_20x4_rows_continue_lines() {
        let mut display = CharacterDisplay::new(Geometry::Lcd20x4).unwrap();
        display.set_cursor(0, 2).unwrap();
        display.print("third").unwrap();
        display.set_cursor(19, 3).unwrap();
        display.print("!").unwrap();
        assert_eq!(&display.line(2).unwrap()[..5], b"third");
        assert_eq!(display.cell(19, 3), Some(b'!'));
        assert_eq!(display.controller().ddram_at(0x14), Some(b't'));
    }

    #[test]
    fn test_clear() {
        let mut display = display();
        display.print("x").unwrap();
        display.clear().unwrap();
        assert_eq!(display.cell(0, 0), Some(BLANK));
    }
}
