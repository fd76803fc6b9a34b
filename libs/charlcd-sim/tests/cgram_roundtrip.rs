//! Uploading glyphs into the emulated controller and reading them back

use charlcd_sim::{CharacterDisplay, Geometry};
use proptest::prelude::*;
use solarlog_glyphs::{GLYPH_ROWS, Glyph, GlyphName, ROW_MASK};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_builtin_glyph_survives_cgram() {
    init_logging();
    let mut display = CharacterDisplay::new(Geometry::Lcd16x2).unwrap();

    // 11 glyphs, 8 slots: reuse slots like the firmware does when it swaps
    // icon sets between screens
    for (index, name) in GlyphName::ALL.into_iter().enumerate() {
        let slot = u8::try_from(index % 8).unwrap();
        display.create_char(slot, name.glyph()).unwrap();
        let read = display.read_char(slot).unwrap();
        assert_eq!(&read, name.glyph(), "{name} in slot {slot}");
    }
}

#[test]
fn slots_do_not_overlap() {
    init_logging();
    let mut display = CharacterDisplay::new(Geometry::Lcd20x4).unwrap();
    let names = &GlyphName::ALL[..8];
    for (slot, name) in (0u8..).zip(names) {
        display.create_char(slot, name.glyph()).unwrap();
    }
    for (slot, name) in (0u8..).zip(names) {
        assert_eq!(&display.read_char(slot).unwrap(), name.glyph());
        assert_eq!(
            display.controller().cgram_pattern(slot),
            Some(*name.glyph().rows())
        );
    }
}

proptest! {
    /// Arbitrary bytes written straight to CGRAM read back as their 5-bit masks
    #[test]
    fn raw_rows_read_back_masked(
        rows in prop::array::uniform8(any::<u8>()),
        slot in 0u8..8,
    ) {
        let mut display = CharacterDisplay::new(Geometry::Lcd16x2).unwrap();
        let controller = display.controller_mut();
        controller.write_command(0x40 | (slot << 3)).unwrap();
        for row in rows {
            controller.write_data(row);
        }

        let read = display.read_char(slot).unwrap();
        let mut expected = [0u8; GLYPH_ROWS];
        for (out, row) in expected.iter_mut().zip(rows) {
            *out = row & ROW_MASK;
        }
        prop_assert_eq!(read.rows(), &expected);
    }

    /// Valid glyphs round-trip exactly through any slot
    #[test]
    fn glyph_round_trip(rows in prop::array::uniform8(0u8..=ROW_MASK), slot in 0u8..8) {
        let glyph = Glyph::from_rows(rows).unwrap();
        let mut display = CharacterDisplay::new(Geometry::Lcd16x2).unwrap();
        display.create_char(slot, &glyph).unwrap();
        prop_assert_eq!(display.read_char(slot).unwrap(), glyph);
    }
}
