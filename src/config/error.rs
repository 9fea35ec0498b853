use std::{fmt, io, path::PathBuf, result};

use thiserror::Error;

/// Errors raised while loading or persisting a configuration file.
///
/// Every variant is returned to the caller as-is. The store never retries,
/// repairs a corrupt file, or falls back to default values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be created, opened, read or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Existing file content could not be decoded into the expected record.
    #[error("failed to decode config at '{path}': {details}")]
    Decode {
        /// Path of the undecodable file
        path: PathBuf,
        /// Decoder error details
        details: String,
    },

    /// Existing file content decoded to nothing (blank or `null`).
    #[error("config at '{path}' is empty")]
    Empty {
        /// Path of the empty file
        path: PathBuf,
    },

    /// The record could not be encoded.
    #[error("failed to encode config: {details}")]
    Encode {
        /// Encoder error details
        details: String,
    },

    /// No configuration root could be derived for an application.
    #[error("cannot locate config directory for '{app_name}': {source}")]
    NoConfigDir {
        /// Application whose directory was requested
        app_name: String,
        /// Underlying lookup error
        #[source]
        source: io::Error,
    },

    /// The file name is empty or absolute.
    #[error("invalid config file name '{name}': must be a non-empty relative path")]
    InvalidFileName {
        /// The rejected name
        name: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = result::Result<T, ConfigError>;

impl ConfigError {
    pub(crate) fn io(source: io::Error, path: impl Into<PathBuf>) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(error: impl fmt::Display, path: impl Into<PathBuf>) -> Self {
        ConfigError::Decode {
            path: path.into(),
            details: error.to_string(),
        }
    }

    pub(crate) fn encode(error: impl fmt::Display) -> Self {
        ConfigError::Encode {
            details: error.to_string(),
        }
    }

    /// Whether the error came from unusable file content rather than I/O.
    pub fn is_decode(&self) -> bool {
        matches!(self, ConfigError::Decode { .. } | ConfigError::Empty { .. })
    }
}
