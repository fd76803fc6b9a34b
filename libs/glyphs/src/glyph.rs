use crate::error::GlyphError;
use std::fmt;

/// Rows per character cell
pub const GLYPH_ROWS: usize = 8;

/// Significant pixel columns per row
pub const GLYPH_COLUMNS: usize = 5;

/// Bits of a row byte that map to pixels. The upper three bits are unused.
pub const ROW_MASK: u8 = 0b1_1111;

/// An 8x5 pixel pattern for one custom character.
///
/// Rows run top to bottom. Within a row, bit 4 (`0b10000`) is the leftmost
/// pixel and bit 0 the rightmost, which is the layout HD44780 CGRAM expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    /// Build a glyph from literal rows.
    ///
    /// Meant for constants: a row with bits above the 5-pixel width aborts
    /// const evaluation, so a malformed table never compiles.
    ///
    /// ```
    /// use solarlog_glyphs::Glyph;
    ///
    /// const BAR: Glyph = Glyph::new([0x1F, 0, 0, 0, 0, 0, 0, 0]);
    /// assert!(BAR.is_lit(0, 0) && BAR.is_lit(4, 0));
    /// ```
    ///
    /// ```compile_fail
    /// use solarlog_glyphs::Glyph;
    ///
    /// const BAD: Glyph = Glyph::new([0x20, 0, 0, 0, 0, 0, 0, 0]);
    /// let _ = BAD;
    /// ```
    pub const fn new(rows: [u8; GLYPH_ROWS]) -> Self {
        let mut i = 0;
        while i < GLYPH_ROWS {
            assert!(rows[i] & !ROW_MASK == 0, "glyph row wider than 5 pixels");
            i += 1;
        }
        Self { rows }
    }

    /// Build a glyph from rows that come from outside the crate (CGRAM
    /// read-back, config files).
    pub fn from_rows(rows: [u8; GLYPH_ROWS]) -> Result<Self, GlyphError> {
        if let Some((row, &value)) = rows
            .iter()
            .enumerate()
            .find(|(_, value)| **value & !ROW_MASK != 0)
        {
            return Err(GlyphError::StrayBits { row, value });
        }
        Ok(Self { rows })
    }

    /// Keep only the five pixel bits of every row.
    pub const fn from_rows_masked(rows: [u8; GLYPH_ROWS]) -> Self {
        let mut masked = rows;
        let mut i = 0;
        while i < GLYPH_ROWS {
            masked[i] &= ROW_MASK;
            i += 1;
        }
        Self { rows: masked }
    }

    pub const fn rows(&self) -> &[u8; GLYPH_ROWS] {
        &self.rows
    }

    /// Whether the pixel at `column` (0 = left) and `row` (0 = top) is lit.
    /// Out-of-range coordinates are never lit.
    pub const fn is_lit(&self, column: usize, row: usize) -> bool {
        if column >= GLYPH_COLUMNS || row >= GLYPH_ROWS {
            return false;
        }
        self.rows[row] & (1 << (GLYPH_COLUMNS - 1 - column)) != 0
    }

    /// Coordinates `(column, row)` of every lit pixel, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLUMNS)
                .filter(move |&column| self.is_lit(column, row))
                .map(move |column| (column, row))
        })
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Render the glyph as eight lines of text, one character per pixel.
    pub fn to_ascii_art(&self, on: char, off: char) -> String {
        let mut art = String::with_capacity(GLYPH_ROWS * (GLYPH_COLUMNS + 1));
        for row in 0..GLYPH_ROWS {
            for column in 0..GLYPH_COLUMNS {
                art.push(if self.is_lit(column, row) { on } else { off });
            }
            art.push('\n');
        }
        art
    }
}

impl From<Glyph> for [u8; GLYPH_ROWS] {
    fn from(glyph: Glyph) -> Self {
        glyph.rows
    }
}

impl TryFrom<[u8; GLYPH_ROWS]> for Glyph {
    type Error = GlyphError;

    fn try_from(rows: [u8; GLYPH_ROWS]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii_art('#', '.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_four_is_leftmost_column() {
        let glyph = Glyph::new([0b10000, 0b00001, 0, 0, 0, 0, 0, 0]);
        assert!(glyph.is_lit(0, 0));
        assert!(!glyph.is_lit(4, 0));
        assert!(glyph.is_lit(4, 1));
        assert!(!glyph.is_lit(0, 1));
    }

    #[test]
    fn test_out_of_range_pixels_are_dark() {
        let glyph = Glyph::new([ROW_MASK; GLYPH_ROWS]);
        assert!(!glyph.is_lit(GLYPH_COLUMNS, 0));
        assert!(!glyph.is_lit(0, GLYPH_ROWS));
    }

    #[test]
    fn test_from_rows_rejects_stray_bits() {
        let err = Glyph::from_rows([0, 0, 0b0010_0001, 0, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            GlyphError::StrayBits {
                row: 2,
                value: 0x21
            }
        );
        assert!(err.to_string().contains("0x21"));
    }

    #[test]
    fn test_from_rows_masked_drops_high_bits() {
        let glyph = Glyph::from_rows_masked([0xFF; GLYPH_ROWS]);
        assert_eq!(glyph.rows(), &[ROW_MASK; GLYPH_ROWS]);
    }

    #[test]
    #[should_panic(expected = "glyph row wider than 5 pixels")]
    fn test_new_panics_on_wide_row() {
        let _ = Glyph::new([0, 0, 0, 0, 0, 0, 0, 0x20]);
    }

    #[test]
    fn test_pixels_in_reading_order() {
        let glyph = Glyph::new([0b10001, 0, 0, 0, 0, 0, 0, 0b00100]);
        let lit: Vec<_> = glyph.pixels().collect();
        assert_eq!(lit, vec![(0, 0), (4, 0), (2, 7)]);
    }

    #[test]
    fn test_ascii_art() {
        let glyph = Glyph::new([0b10101, 0, 0, 0, 0, 0, 0, 0b11111]);
        let art = glyph.to_ascii_art('#', '.');
        let lines: Vec<_> = art.lines().collect();
        assert_eq!(lines.len(), GLYPH_ROWS);
        assert_eq!(lines[0], "#.#.#");
        assert_eq!(lines[1], ".....");
        assert_eq!(lines[7], "#####");
    }

    #[test]
    fn test_blank() {
        assert!(Glyph::new([0; GLYPH_ROWS]).is_blank());
        assert!(!Glyph::new([0, 0, 0, 1, 0, 0, 0, 0]).is_blank());
    }
}
