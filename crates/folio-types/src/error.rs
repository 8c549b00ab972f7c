//! Error types for folio.

use std::io;

/// Errors produced while loading configuration.
///
/// Command handling itself never fails; bad input is answered with text.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
