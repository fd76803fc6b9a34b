use anyhow::Result;
use charlcd_sim::charset;
use colored::Colorize;
use solarlog_locale::{ACTIVE_LANGUAGE, Language, MessageKey};

use crate::utils::{pad, print_title_bar};

/// Widest key name, for column alignment
fn key_column_width() -> usize {
    MessageKey::ALL
        .iter()
        .map(|key| key.macro_name().len())
        .max()
        .unwrap_or(0)
}

/// Display ROM codes of `text` as hex
pub fn encoded_hex(text: &str) -> Result<String> {
    let bytes = charset::encode(text)?;
    Ok(bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" "))
}

/// Print the string table of one language, or all languages side by side
pub fn run_strings(language: Option<Language>, encoded: bool) -> Result<()> {
    let languages: Vec<Language> = language.map_or_else(|| Language::ALL.to_vec(), |l| vec![l]);

    print_title_bar(&format!(
        "Display strings (build language: {ACTIVE_LANGUAGE})"
    ));
    println!();

    let key_width = key_column_width();
    let text_width = 16;

    let header: String = languages
        .iter()
        .map(|l| pad(&l.code().to_uppercase(), text_width + 2))
        .collect();
    println!("  {}  {}", pad("KEY", key_width), header.bold());

    for key in MessageKey::ALL {
        let mut row = format!("  {}  ", pad(key.macro_name(), key_width).dimmed());
        for &language in &languages {
            row.push_str(&pad(language.text(key), text_width + 2));
        }
        println!("{}", row.trim_end());

        if encoded {
            for &language in &languages {
                println!(
                    "  {}  {} {}",
                    pad("", key_width),
                    language.code().dimmed(),
                    encoded_hex(language.text(key))?.dimmed()
                );
            }
        }
    }
    Ok(())
}
