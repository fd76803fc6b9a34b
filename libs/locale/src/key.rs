use crate::error::LocaleError;
use std::fmt;
use std::str::FromStr;

/// Language-independent identifier of a display message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    /// DCF77 time signal received
    Dcf77Sync,
    /// No DCF77 time yet
    Dcf77Missing,
    Done,
    Back,
    Saved,
    ResetBuffer,
    SendBuffer,
    ViewBuffer,
    TimeDate,
    BufferEmpty,
    PowerSource,
    SolarPower,
    BatteryPower,
    UsbPowerbank,
    RecordMode,
    NoRecording,
    /// Record at minute 0 of every hour
    At0x00,
}

impl MessageKey {
    pub const ALL: [MessageKey; 17] = [
        MessageKey::Dcf77Sync,
        MessageKey::Dcf77Missing,
        MessageKey::Done,
        MessageKey::Back,
        MessageKey::Saved,
        MessageKey::ResetBuffer,
        MessageKey::SendBuffer,
        MessageKey::ViewBuffer,
        MessageKey::TimeDate,
        MessageKey::BufferEmpty,
        MessageKey::PowerSource,
        MessageKey::SolarPower,
        MessageKey::BatteryPower,
        MessageKey::UsbPowerbank,
        MessageKey::RecordMode,
        MessageKey::NoRecording,
        MessageKey::At0x00,
    ];

    /// Identifier used by the logger firmware (`STR_` prefix dropped)
    pub const fn macro_name(self) -> &'static str {
        match self {
            MessageKey::Dcf77Sync => "DCF77SYNC",
            MessageKey::Dcf77Missing => "DCF77MISSING",
            MessageKey::Done => "DONE",
            MessageKey::Back => "BACK",
            MessageKey::Saved => "SAVED",
            MessageKey::ResetBuffer => "RESETBUFFER",
            MessageKey::SendBuffer => "SENDBUFFER",
            MessageKey::ViewBuffer => "VIEWBUFFER",
            MessageKey::TimeDate => "TIMEDATE",
            MessageKey::BufferEmpty => "BUFFEREMPTY",
            MessageKey::PowerSource => "POWERSOURCE",
            MessageKey::SolarPower => "SOLARPOWER",
            MessageKey::BatteryPower => "BATTERYPOWER",
            MessageKey::UsbPowerbank => "USBPOWERBANK",
            MessageKey::RecordMode => "RECORDMODE",
            MessageKey::NoRecording => "NORECORDING",
            MessageKey::At0x00 => "AT0x00",
        }
    }
}

// `ALL` lists the variants in declaration order, last one included.
const _: () = assert!(MessageKey::At0x00 as usize + 1 == MessageKey::ALL.len());

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.macro_name())
    }
}

impl FromStr for MessageKey {
    type Err = LocaleError;

    /// Accepts the firmware identifier with or without the `STR_` prefix,
    /// ignoring case and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unprefixed = trimmed
            .get(..4)
            .filter(|prefix| prefix.eq_ignore_ascii_case("STR_"))
            .map_or(trimmed, |_| &trimmed[4..]);
        let wanted = unprefixed.replace('_', "");
        MessageKey::ALL
            .into_iter()
            .find(|key| key.macro_name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| LocaleError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_macro_names() {
        for key in MessageKey::ALL {
            assert_eq!(key.macro_name().parse::<MessageKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(
            "STR_RECORDMODE".parse::<MessageKey>().unwrap(),
            MessageKey::RecordMode
        );
        assert_eq!(
            "reset_buffer".parse::<MessageKey>().unwrap(),
            MessageKey::ResetBuffer
        );
        assert_eq!("at0x00".parse::<MessageKey>().unwrap(), MessageKey::At0x00);
    }

    #[test]
    fn test_parse_unknown_key() {
        assert_eq!(
            "STR_HELLO".parse::<MessageKey>(),
            Err(LocaleError::UnknownKey("STR_HELLO".to_string()))
        );
    }

    #[test]
    fn test_all_in_declaration_order() {
        for (index, key) in MessageKey::ALL.iter().enumerate() {
            assert_eq!(*key as usize, index);
        }
    }

    #[test]
    fn test_macro_names_unique() {
        let mut names: Vec<_> = MessageKey::ALL.iter().map(|k| k.macro_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), MessageKey::ALL.len());
    }
}
