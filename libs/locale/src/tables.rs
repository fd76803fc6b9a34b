use crate::key::MessageKey;

pub(crate) const fn de(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Dcf77Sync => "Zeit-Sync",
        MessageKey::Dcf77Missing => "Zeit ausstehend",
        MessageKey::Done => "Ok",
        MessageKey::Back => "Zurück",
        MessageKey::Saved => "Gespeichert",
        MessageKey::ResetBuffer => "Puffer löschen",
        MessageKey::SendBuffer => "Puffer senden",
        MessageKey::ViewBuffer => "Puffer zeigen",
        MessageKey::TimeDate => "Zeit/Datum",
        MessageKey::BufferEmpty => "Leerer Puffer",
        MessageKey::PowerSource => "Stromquelle",
        MessageKey::SolarPower => "Solar",
        MessageKey::BatteryPower => "Batterie",
        MessageKey::UsbPowerbank => "USB-Powerbank",
        MessageKey::RecordMode => "Aufzeichnung",
        MessageKey::NoRecording => "Manuell",
        MessageKey::At0x00 => "Jede Stunde",
    }
}

pub(crate) const fn en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Dcf77Sync => "Time sync",
        MessageKey::Dcf77Missing => "Time missing",
        MessageKey::Done => "Done",
        MessageKey::Back => "Back",
        MessageKey::Saved => "Saved",
        MessageKey::ResetBuffer => "Reset buffer",
        MessageKey::SendBuffer => "Send buffer",
        MessageKey::ViewBuffer => "View buffer",
        MessageKey::TimeDate => "Time/Date",
        MessageKey::BufferEmpty => "Empty buffer",
        MessageKey::PowerSource => "Power source",
        MessageKey::SolarPower => "Solar",
        MessageKey::BatteryPower => "Battery",
        MessageKey::UsbPowerbank => "USB powerbank",
        MessageKey::RecordMode => "Record mode",
        MessageKey::NoRecording => "Manual",
        MessageKey::At0x00 => "Every hour",
    }
}
