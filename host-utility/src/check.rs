use anyhow::{Result, bail};
use charlcd_sim::{CharacterDisplay, Geometry, charset, common::CGRAM_SLOTS};
use solarlog_glyphs::{Glyph, GlyphName};
use solarlog_locale::{ACTIVE_LANGUAGE, Language, MessageKey};

use crate::utils::{failure, info, print_subtitle_bar, print_title_bar, success};

/// Outcome of one check: a description of every problem found
pub type Findings = Vec<String>;

/// Every glyph row fits the 5-pixel width
pub fn check_glyph_rows() -> Findings {
    GlyphName::ALL
        .into_iter()
        .filter_map(|name| {
            Glyph::from_rows(*name.glyph().rows())
                .err()
                .map(|e| format!("{name}: {e}"))
        })
        .collect()
}

/// Every glyph reads back unchanged from the emulated controller's CGRAM
pub fn check_cgram_round_trip() -> Result<Findings> {
    let mut display = CharacterDisplay::new(Geometry::default())?;
    let mut findings = Findings::new();
    for (name, slot) in GlyphName::ALL.into_iter().zip((0..CGRAM_SLOTS).cycle()) {
        display.create_char(slot, name.glyph())?;
        let read = display.read_char(slot)?;
        if &read != name.glyph() {
            findings.push(format!(
                "{name}: slot {slot} read back {:?}, wrote {:?}",
                read.rows(),
                name.glyph().rows()
            ));
        }
    }
    Ok(findings)
}

/// Every language has a non-empty, displayable text for every key that fits
/// a line of `width` cells
pub fn check_language_tables(width: usize) -> Findings {
    let mut findings = Findings::new();
    for language in Language::ALL {
        for key in MessageKey::ALL {
            let text = language.text(key);
            if text.is_empty() {
                findings.push(format!("{language}/{key}: empty"));
            }
            match charset::encode(text) {
                Ok(bytes) if bytes.len() > width => findings.push(format!(
                    "{language}/{key}: {} cells, line holds {width}",
                    bytes.len()
                )),
                Ok(_) => {}
                Err(e) => findings.push(format!("{language}/{key}: {e}")),
            }
        }
    }
    findings
}

fn report(title: &str, findings: &Findings) -> usize {
    if findings.is_empty() {
        success(title);
    } else {
        failure(title);
        for finding in findings {
            info(finding);
        }
    }
    findings.len()
}

pub fn run_check(geometry: Geometry) -> Result<()> {
    print_title_bar("Display asset checks");
    println!();

    print_subtitle_bar("Build");
    info(&format!(
        "Active language: {ACTIVE_LANGUAGE} (feature \"{}\")",
        ACTIVE_LANGUAGE.feature()
    ));
    info(&format!(
        "{} glyphs, {} message keys, {} languages",
        GlyphName::ALL.len(),
        MessageKey::ALL.len(),
        Language::ALL.len()
    ));
    println!();

    print_subtitle_bar("Checks");
    let mut problems = 0;
    problems += report("Glyph rows fit 5 columns", &check_glyph_rows());
    problems += report("Glyphs survive a CGRAM round trip", &check_cgram_round_trip()?);
    let width = usize::from(geometry.columns());
    problems += report(
        &format!("Every language complete and fits {width} columns"),
        &check_language_tables(width),
    );
    println!();

    if problems > 0 {
        bail!("{problems} problem(s) found");
    }
    success("All checks passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_assets_pass() {
        assert!(check_glyph_rows().is_empty());
        assert!(check_cgram_round_trip().unwrap().is_empty());
        assert!(check_language_tables(16).is_empty());
    }

    #[test]
    fn test_narrow_display_flags_long_labels() {
        let findings = check_language_tables(5);
        assert!(findings.iter().any(|f| f.starts_with("de/DCF77MISSING")));
        assert!(!findings.iter().any(|f| f.contains("/DONE:")));
    }
}
