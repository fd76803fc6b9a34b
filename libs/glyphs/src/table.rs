// Custom characters used by the logger's status screens.
// Drawn with https://maxpromer.github.io/LCD-Character-Creator/

use crate::error::GlyphError;
use crate::glyph::Glyph;
use std::fmt;
use std::str::FromStr;

/// Radio mast with signal, shown while DCF77 time is received
pub const SIGNAL: Glyph = Glyph::new([
    0b11111, //
    0b10001, //
    0b10001, //
    0b01010, //
    0b00100, //
    0b00100, //
    0b00000, //
    0b00000, //
]);

/// Degree mark followed by a small C
pub const DEGREE_CELSIUS: Glyph = Glyph::new([
    0b01000, //
    0b10100, //
    0b01000, //
    0b00011, //
    0b00100, //
    0b00100, //
    0b00011, //
    0b00000, //
]);

/// Circular arrow
pub const ROTATION: Glyph = Glyph::new([
    0b00000, //
    0b01100, //
    0b01101, //
    0b10001, //
    0b10001, //
    0b10110, //
    0b00110, //
    0b00000, //
]);

/// Play marker against a bar, marks the newest buffer entry
pub const LAST_ITEM: Glyph = Glyph::new([
    0b00000, //
    0b00000, //
    0b10001, //
    0b11001, //
    0b11101, //
    0b11001, //
    0b10001, //
    0b00000, //
]);

pub const EMPTY_BATTERY: Glyph = Glyph::new([
    0b01100, //
    0b11110, //
    0b10010, //
    0b10010, //
    0b10010, //
    0b10010, //
    0b11110, //
    0b00000, //
]);

/// Upward arrow under a bar
pub const MAX: Glyph = Glyph::new([
    0b11111, //
    0b00000, //
    0b00100, //
    0b01110, //
    0b11111, //
    0b00100, //
    0b00100, //
    0b00000, //
]);

/// Downward arrow over a bar
pub const MIN: Glyph = Glyph::new([
    0b00100, //
    0b00100, //
    0b11111, //
    0b01110, //
    0b00100, //
    0b00000, //
    0b11111, //
    0b00000, //
]);

/// Selection dots on the bottom two rows
pub const DOTS: Glyph = Glyph::new([
    0b00000, //
    0b00000, //
    0b00000, //
    0b00000, //
    0b00000, //
    0b00000, //
    0b10010, //
    0b10010, //
]);

/// Left-aligned play marker, marks the latest reading
pub const LAST: Glyph = Glyph::new([
    0b00000, //
    0b00000, //
    0b10000, //
    0b11000, //
    0b11100, //
    0b11000, //
    0b10000, //
    0b00000, //
]);

/// Stopwatch
pub const TIMER: Glyph = Glyph::new([
    0b01110, //
    0b00100, //
    0b01110, //
    0b10101, //
    0b11101, //
    0b10001, //
    0b01110, //
    0b00000, //
]);

/// Running figure, shown while recording
pub const RUNNER: Glyph = Glyph::new([
    0b01100, //
    0b01110, //
    0b01100, //
    0b00111, //
    0b00100, //
    0b00100, //
    0b01011, //
    0b10000, //
]);

/// Symbolic names of the built-in glyphs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GlyphName {
    Signal,
    DegreeCelsius,
    Rotation,
    LastItem,
    EmptyBattery,
    Max,
    Min,
    Dots,
    Last,
    Timer,
    Runner,
}

impl GlyphName {
    /// All glyphs in definition order
    pub const ALL: [GlyphName; 11] = [
        GlyphName::Signal,
        GlyphName::DegreeCelsius,
        GlyphName::Rotation,
        GlyphName::LastItem,
        GlyphName::EmptyBattery,
        GlyphName::Max,
        GlyphName::Min,
        GlyphName::Dots,
        GlyphName::Last,
        GlyphName::Timer,
        GlyphName::Runner,
    ];

    pub const fn glyph(self) -> &'static Glyph {
        match self {
            GlyphName::Signal => &SIGNAL,
            GlyphName::DegreeCelsius => &DEGREE_CELSIUS,
            GlyphName::Rotation => &ROTATION,
            GlyphName::LastItem => &LAST_ITEM,
            GlyphName::EmptyBattery => &EMPTY_BATTERY,
            GlyphName::Max => &MAX,
            GlyphName::Min => &MIN,
            GlyphName::Dots => &DOTS,
            GlyphName::Last => &LAST,
            GlyphName::Timer => &TIMER,
            GlyphName::Runner => &RUNNER,
        }
    }

    /// Stable kebab-case identifier, used in config files and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            GlyphName::Signal => "signal",
            GlyphName::DegreeCelsius => "degree-celsius",
            GlyphName::Rotation => "rotation",
            GlyphName::LastItem => "last-item",
            GlyphName::EmptyBattery => "empty-battery",
            GlyphName::Max => "max",
            GlyphName::Min => "min",
            GlyphName::Dots => "dots",
            GlyphName::Last => "last",
            GlyphName::Timer => "timer",
            GlyphName::Runner => "runner",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            GlyphName::Signal => "Signal",
            GlyphName::DegreeCelsius => "Degree celsius",
            GlyphName::Rotation => "Rotation",
            GlyphName::LastItem => "Last item",
            GlyphName::EmptyBattery => "Empty battery",
            GlyphName::Max => "Max",
            GlyphName::Min => "Min",
            GlyphName::Dots => "Selection dots",
            GlyphName::Last => "Last data",
            GlyphName::Timer => "Timer",
            GlyphName::Runner => "Runner",
        }
    }
}

impl fmt::Display for GlyphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlyphName {
    type Err = GlyphError;

    /// Accepts the kebab-case name, ignoring case, `_` in place of `-`, or
    /// the CamelCase variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        GlyphName::ALL
            .into_iter()
            .find(|name| name.name().replace('-', "") == wanted)
            .ok_or_else(|| GlyphError::UnknownName(s.to_string()))
    }
}
