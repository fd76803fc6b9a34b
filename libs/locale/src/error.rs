use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unsupported display language: {0} (supported: de, en)")]
    UnsupportedLanguage(String),
    #[error("Unknown message key: {0}")]
    UnknownKey(String),
}
