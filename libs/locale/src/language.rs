use crate::error::LocaleError;
use crate::key::MessageKey;
use crate::tables;
use std::fmt;
use std::str::FromStr;

/// A display language with a complete string table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    De,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    /// Text for `key` in this language.
    ///
    /// Each table is an exhaustive match over [`MessageKey`], so adding a key
    /// without translating it for every language does not compile.
    pub const fn text(self, key: MessageKey) -> &'static str {
        match self {
            Language::De => tables::de(key),
            Language::En => tables::en(key),
        }
    }

    /// Lower-case ISO 639-1 code
    pub const fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    /// Name of the cargo feature that selects this language
    pub const fn feature(self) -> &'static str {
        match self {
            Language::De => "lang-de",
            Language::En => "lang-en",
        }
    }

    /// `(key, text)` pairs in key order
    pub fn entries(self) -> impl Iterator<Item = (MessageKey, &'static str)> {
        MessageKey::ALL.into_iter().map(move |key| (key, self.text(key)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let wanted = ["DISPLAYLANGUAGE_", "lang-"]
            .into_iter()
            .find_map(|prefix| strip_prefix_ignore_case(wanted, prefix))
            .unwrap_or(wanted);
        Language::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LocaleError::UnsupportedLanguage(s.to_string()))
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &s[prefix.len()..])
}
