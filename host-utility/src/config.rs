// Slot map resolution for the preview commands
//
// A slot map given on the command line wins, then the one in the user's
// config directory, then the glyphs the previewed page asks for.

use anyhow::{Context, Result};
use solarlog_glyphs::GlyphName;
use solarlog_ui::SlotMap;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, SLOT_MAP_FILE_NAME};

/// Where a slot map came from, for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotMapSource {
    File(PathBuf),
    Page,
}

/// Default location of the user's slot map
pub fn default_slot_map_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SLOT_MAP_FILE_NAME))
}

/// Load a slot map from a JSON file
pub fn load_slot_map(path: &Path) -> Result<SlotMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read slot map: {}", path.display()))?;
    SlotMap::from_json(&content)
        .with_context(|| format!("Failed to parse slot map: {}", path.display()))
}

/// Pick the slot map for a preview.
///
/// `fallback` is the page's own glyph list, loaded into slots 0.. in order.
pub fn resolve_slot_map(
    explicit: Option<&Path>,
    fallback: &[GlyphName],
) -> Result<(SlotMap, SlotMapSource)> {
    if let Some(path) = explicit {
        return Ok((load_slot_map(path)?, SlotMapSource::File(path.to_path_buf())));
    }

    if let Some(path) = default_slot_map_path().filter(|p| p.exists()) {
        log::debug!("Using slot map from {}", path.display());
        return Ok((load_slot_map(&path)?, SlotMapSource::File(path)));
    }

    let map = SlotMap::for_glyphs(fallback).context("Page needs more than 8 custom glyphs")?;
    Ok((map, SlotMapSource::Page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_file_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"slot": 2, "glyph": "timer"}}]"#).unwrap();

        let (map, source) = resolve_slot_map(Some(file.path()), &[GlyphName::Max]).unwrap();
        assert_eq!(map.slot_of(GlyphName::Timer), Some(2));
        assert_eq!(map.slot_of(GlyphName::Max), None);
        assert_eq!(source, SlotMapSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn test_bad_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = resolve_slot_map(Some(file.path()), &[]).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse slot map"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_slot_map(Path::new("/nonexistent/slots.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read slot map"));
    }
}
