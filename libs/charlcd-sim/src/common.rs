/// Number of programmable characters
pub const CGRAM_SLOTS: u8 = 8;
/// Bytes of character generator RAM (8 slots x 8 rows)
pub const CGRAM_SIZE: usize = 64;
/// Bytes of display data RAM
pub const DDRAM_SIZE: usize = 80;
/// DDRAM positions per line in two-line mode
pub const LINE_LENGTH: u8 = 40;
/// DDRAM address of the second line in two-line mode
pub const SECOND_LINE: u8 = 0x40;

/// Pixel size of one character cell
pub const CELL_WIDTH: u32 = 5;
pub const CELL_HEIGHT: u32 = 8;
/// Unlit pixels between neighbouring cells when rendered
pub const CELL_GAP: u32 = 1;

/// Character code the controller fills DDRAM with on clear
pub const BLANK: u8 = b' ';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Geometry {
    #[default]
    Lcd16x2,
    Lcd20x4,
}

impl Geometry {
    pub const fn columns(self) -> u8 {
        match self {
            Geometry::Lcd16x2 => 16,
            Geometry::Lcd20x4 => 20,
        }
    }

    pub const fn rows(self) -> u8 {
        match self {
            Geometry::Lcd16x2 => 2,
            Geometry::Lcd20x4 => 4,
        }
    }

    /// DDRAM address of the first column of `row`. Rows 2 and 3 of a 20x4
    /// panel continue lines 0 and 1.
    pub const fn row_offset(self, row: u8) -> Option<u8> {
        match (self, row) {
            (_, 0) => Some(0x00),
            (_, 1) => Some(SECOND_LINE),
            (Geometry::Lcd20x4, 2) => Some(0x14),
            (Geometry::Lcd20x4, 3) => Some(SECOND_LINE + 0x14),
            _ => None,
        }
    }

    /// Framebuffer size in pixels, cells separated by [`CELL_GAP`]
    pub const fn pixel_size(self) -> (u32, u32) {
        let columns = self.columns() as u32;
        let rows = self.rows() as u32;
        (
            columns * (CELL_WIDTH + CELL_GAP) - CELL_GAP,
            rows * (CELL_HEIGHT + CELL_GAP) - CELL_GAP,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offsets() {
        assert_eq!(Geometry::Lcd16x2.row_offset(1), Some(0x40));
        assert_eq!(Geometry::Lcd16x2.row_offset(2), None);
        assert_eq!(Geometry::Lcd20x4.row_offset(2), Some(0x14));
        assert_eq!(Geometry::Lcd20x4.row_offset(3), Some(0x54));
    }

    #[test]
    fn test_pixel_size() {
        assert_eq!(Geometry::Lcd16x2.pixel_size(), (95, 17));
        assert_eq!(Geometry::Lcd20x4.pixel_size(), (119, 35));
    }
}
