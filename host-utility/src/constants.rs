// Constants for the solarlog host utility

/// Accent color as RGB for truecolor terminals
pub const ORANGE: (u8, u8, u8) = (255, 135, 0);

/// Directory under the user's config dir holding utility settings
pub const CONFIG_DIR_NAME: &str = "solarlog";

/// Slot map picked up when `--slots` is not given
pub const SLOT_MAP_FILE_NAME: &str = "slots.json";

/// Pixel shown for lit and unlit dots in previews
pub const PIXEL_ON: char = '█';
pub const PIXEL_OFF: char = '·';
