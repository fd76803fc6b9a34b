use crate::charset;
use crate::common::{CELL_GAP, CELL_HEIGHT, CELL_WIDTH, Geometry};
use crate::display::CharacterDisplay;
use core::convert::Infallible;
use embedded_graphics::{
    Drawable,
    geometry::Dimensions,
    mono_font::{MonoTextStyle, iso_8859_1::FONT_5X8},
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, Point, PointsIter, Size},
    primitives::Rectangle,
    text::{Baseline, Text},
};
use log::trace;
use solarlog_glyphs::{GLYPH_COLUMNS, GLYPH_ROWS, Glyph};

/// One 5x8 character cell drawn from CGRAM rows.
///
/// Every pixel of the cell is drawn, lit or not, so a cell fully replaces
/// whatever was there before.
#[derive(Clone, Copy, Debug)]
pub struct GlyphCell {
    glyph: Glyph,
    top_left: Point,
}

impl GlyphCell {
    pub fn new(glyph: Glyph, top_left: Point) -> Self {
        Self { glyph, top_left }
    }
}

impl Dimensions for GlyphCell {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(self.top_left, Size::new(CELL_WIDTH, CELL_HEIGHT))
    }
}

impl Drawable for GlyphCell {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let pixels = (0..GLYPH_ROWS).flat_map(|row| {
            (0..GLYPH_COLUMNS).map(move |column| {
                let color = BinaryColor::from(self.glyph.is_lit(column, row));
                // Cell coordinates are below 8, the casts are lossless
                let offset = Point::new(column as i32, row as i32);
                Pixel(self.top_left + offset, color)
            })
        });
        target.draw_iter(pixels)
    }
}

/// 1-bit-per-pixel picture of a character display, lit = `BinaryColor::On`.
#[derive(Debug)]
pub struct Framebuffer {
    size: Size,
    buffer: Box<[u8]>,
}

impl Framebuffer {
    #[must_use]
    pub fn new(size: Size) -> Self {
        let row_pitch_bytes = size.width.div_ceil(8) as usize;
        let buffer = vec![0x00; row_pitch_bytes * size.height as usize].into_boxed_slice();
        Self { size, buffer }
    }

    /// A framebuffer sized for `geometry`'s cells and the gaps between them
    #[must_use]
    pub fn for_geometry(geometry: Geometry) -> Self {
        let (width, height) = geometry.pixel_size();
        Self::new(Size::new(width, height))
    }

    fn row_pitch_bytes(&self) -> u32 {
        self.size.width.div_ceil(8)
    }

    fn index(&self, point: Point) -> Option<(usize, u32)> {
        let (x, y) = point.into();
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x.cast_unsigned(), y.cast_unsigned());
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let index = (y * self.row_pitch_bytes() + x / 8) as usize;
        Some((index, 7 - (x % 8)))
    }

    pub fn is_lit(&self, point: Point) -> bool {
        self.index(point)
            .is_some_and(|(index, bit)| self.buffer[index] & (1 << bit) != 0)
    }

    /// Draw every visible cell of `display`. Cells holding a CGRAM code show
    /// the stored pattern; other codes are drawn with a 5x8 font, and codes
    /// the character ROM mapping does not cover stay dark.
    pub fn render(&mut self, display: &CharacterDisplay) -> Result<(), Infallible> {
        self.clear(BinaryColor::Off)?;
        let geometry = display.geometry();
        let text_style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);

        for row in 0..geometry.rows() {
            for column in 0..geometry.columns() {
                let Some(code) = display.cell(column, row) else {
                    continue;
                };
                let top_left = Point::new(
                    (u32::from(column) * (CELL_WIDTH + CELL_GAP)).cast_signed(),
                    (u32::from(row) * (CELL_HEIGHT + CELL_GAP)).cast_signed(),
                );
                if let Some(rows) = display.controller().cgram_pattern(code) {
                    GlyphCell::new(Glyph::from_rows_masked(rows), top_left).draw(self)?;
                } else if let Some(c) = charset::decode(code) {
                    let mut utf8 = [0u8; 4];
                    Text::with_baseline(c.encode_utf8(&mut utf8), top_left, text_style, Baseline::Top)
                        .draw(self)?;
                } else {
                    trace!("LCD: no ROM glyph for code 0x{code:02X}");
                }
            }
        }
        Ok(())
    }

    /// One text line per pixel row
    pub fn to_ascii_art(&self, on: char, off: char) -> String {
        let mut art = String::new();
        for y in 0..self.size.height {
            for x in 0..self.size.width {
                let point = Point::new(x.cast_signed(), y.cast_signed());
                art.push(if self.is_lit(point) { on } else { off });
            }
            art.push('\n');
        }
        art
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let Some((index, bit)) = self.index(point) else {
                continue;
            };
            if color.is_on() {
                self.buffer[index] |= 1 << bit;
            } else {
                self.buffer[index] &= !(1 << bit);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped_area = area.intersection(&self.bounding_box());

        if clipped_area.is_zero_sized() {
            return Ok(());
        }

        self.draw_iter(clipped_area.points().map(|p| Pixel(p, color)))
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.buffer.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        self.size
    }
}
