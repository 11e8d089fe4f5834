//! Error types

use thiserror::Error;

/// Errors from parsing host-supplied configuration.
///
/// Rendering itself never fails; these only surface at the boundary where
/// string-keyed or JSON input is turned into typed configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A theme override named a key outside the widget's vocabulary.
    #[error("unknown theme key '{key}' for {namespace}")]
    UnknownThemeKey {
        namespace: &'static str,
        key: String,
    },

    /// Malformed JSON configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
