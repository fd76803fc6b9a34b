use crate::error::UiError;
use charlcd_sim::{CharacterDisplay, LcdResult, common::CGRAM_SLOTS};
use log::debug;
use serde::{Deserialize, Serialize};
use solarlog_glyphs::GlyphName;

/// One entry of a slot map file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotEntry {
    pub slot: u8,
    pub glyph: String,
}

/// Assignment of glyphs to the eight CGRAM slots.
///
/// The table holds more glyphs than the controller has slots, so each screen
/// set decides which ones are loaded. Serialized as a JSON list of
/// `{ "slot": 0, "glyph": "signal" }` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SlotEntry>", into = "Vec<SlotEntry>")]
pub struct SlotMap {
    slots: [Option<GlyphName>; CGRAM_SLOTS as usize],
}

impl Default for SlotMap {
    /// The first eight glyphs in definition order, in slots 0-7
    fn default() -> Self {
        let mut slots = [None; CGRAM_SLOTS as usize];
        for (slot, name) in slots.iter_mut().zip(GlyphName::ALL) {
            *slot = Some(name);
        }
        Self { slots }
    }
}

impl SlotMap {
    pub fn empty() -> Self {
        Self {
            slots: [None; CGRAM_SLOTS as usize],
        }
    }

    /// Load `glyphs` into consecutive slots starting at 0
    pub fn for_glyphs(glyphs: &[GlyphName]) -> Result<Self, UiError> {
        let mut map = Self::empty();
        for (slot, &name) in (0u8..).zip(glyphs) {
            map.assign(slot, name)?;
        }
        Ok(map)
    }

    /// Put `name` into `slot`, replacing whatever the slot held
    pub fn assign(&mut self, slot: u8, name: GlyphName) -> Result<(), UiError> {
        if slot >= CGRAM_SLOTS {
            return Err(UiError::SlotOutOfRange(slot));
        }
        if self.slot_of(name).is_some_and(|current| current != slot) {
            return Err(UiError::DuplicateGlyph(name));
        }
        self.slots[usize::from(slot)] = Some(name);
        Ok(())
    }

    pub fn remove(&mut self, slot: u8) -> Option<GlyphName> {
        self.slots.get_mut(usize::from(slot))?.take()
    }

    pub fn slot_of(&self, name: GlyphName) -> Option<u8> {
        (0u8..)
            .zip(self.slots.iter())
            .find(|(_, assigned)| **assigned == Some(name))
            .map(|(slot, _)| slot)
    }

    pub fn glyph_at(&self, slot: u8) -> Option<GlyphName> {
        self.slots.get(usize::from(slot)).copied().flatten()
    }

    /// Assigned `(slot, glyph)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (u8, GlyphName)> + '_ {
        (0u8..)
            .zip(self.slots.iter())
            .filter_map(|(slot, assigned)| assigned.map(|name| (slot, name)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Program every assigned slot into the display's CGRAM
    pub fn upload(&self, display: &mut CharacterDisplay) -> LcdResult<()> {
        for (slot, name) in self.iter() {
            debug!("Loading glyph {name} into slot {slot}");
            display.create_char(slot, name.glyph())?;
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, UiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TryFrom<Vec<SlotEntry>> for SlotMap {
    type Error = UiError;

    fn try_from(entries: Vec<SlotEntry>) -> Result<Self, Self::Error> {
        let mut map = SlotMap::empty();
        for entry in entries {
            if map.glyph_at(entry.slot).is_some() {
                return Err(UiError::DuplicateSlot(entry.slot));
            }
            let name: GlyphName = entry.glyph.parse()?;
            map.assign(entry.slot, name)?;
        }
        Ok(map)
    }
}

impl From<SlotMap> for Vec<SlotEntry> {
    fn from(map: SlotMap) -> Self {
        map.iter()
            .map(|(slot, name)| SlotEntry {
                slot,
                glyph: name.name().to_string(),
            })
            .collect()
    }
}
