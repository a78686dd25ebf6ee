//! Error type shared by the controller and its capabilities.

/// Failures surfaced while reading, applying or persisting a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0} must not be empty")]
    InvalidConfig(&'static str),
}
