use colored::Colorize;
use solarlog_glyphs::GlyphName;

use crate::constants::{PIXEL_OFF, PIXEL_ON};
use crate::utils::{print_subtitle_bar, print_title_bar};

/// Hex listing of a glyph's rows, e.g. `08 14 08 03 04 04 03 00`
pub fn format_rows(name: GlyphName) -> String {
    name.glyph()
        .rows()
        .iter()
        .map(|row| format!("{row:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print one glyph, or all of them side by side in groups
pub fn run_glyphs(name: Option<GlyphName>) {
    print_title_bar("Custom characters");
    println!();

    let names: Vec<GlyphName> = name.map_or_else(|| GlyphName::ALL.to_vec(), |n| vec![n]);
    for name in names {
        print_subtitle_bar(&format!("{} ({})", name.description(), name));
        println!("  {}", format_rows(name).dimmed());
        for line in name.glyph().to_ascii_art(PIXEL_ON, PIXEL_OFF).lines() {
            println!("  {line}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rows() {
        assert_eq!(
            format_rows(GlyphName::DegreeCelsius),
            "08 14 08 03 04 04 03 00"
        );
    }
}
