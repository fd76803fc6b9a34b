//! Localized display strings for the solar logger
//!
//! Every supported [`Language`] carries a complete table over [`MessageKey`].
//! One language is active per build, chosen with a cargo feature:
//!
//! ```toml
//! solarlog-locale = { path = "../libs/locale", default-features = false, features = ["lang-de"] }
//! ```
//!
//! Enabling no language feature, or more than one, is a compile error. There
//! is no runtime fallback.

mod error;
mod key;
mod language;
mod tables;

pub use error::LocaleError;
pub use key::MessageKey;
pub use language::Language;

#[cfg(all(feature = "lang-de", feature = "lang-en"))]
compile_error!("enable exactly one language feature, not both \"lang-de\" and \"lang-en\"");

#[cfg(not(any(feature = "lang-de", feature = "lang-en")))]
compile_error!("no display language selected; enable feature \"lang-de\" or \"lang-en\"");

/// Language selected for this build
#[cfg(all(feature = "lang-de", not(feature = "lang-en")))]
pub const ACTIVE_LANGUAGE: Language = Language::De;

/// Language selected for this build
#[cfg(all(feature = "lang-en", not(feature = "lang-de")))]
pub const ACTIVE_LANGUAGE: Language = Language::En;

/// Text for `key` in the build's active language
pub const fn text(key: MessageKey) -> &'static str {
    ACTIVE_LANGUAGE.text(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "lang-en")]
    #[test]
    fn test_active_language_en() {
        assert_eq!(ACTIVE_LANGUAGE, Language::En);
        assert_eq!(text(MessageKey::RecordMode), "Record mode");
    }

    #[cfg(feature = "lang-de")]
    #[test]
    fn test_active_language_de() {
        assert_eq!(ACTIVE_LANGUAGE, Language::De);
        assert_eq!(text(MessageKey::RecordMode), "Aufzeichnung");
    }

    #[test]
    fn test_active_lookup_matches_table() {
        for key in MessageKey::ALL {
            assert_eq!(text(key), ACTIVE_LANGUAGE.text(key));
        }
    }
}
