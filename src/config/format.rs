use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use super::error::{ConfigError, Result};

/// Structured text format of a configuration file.
///
/// Chosen from the file extension: `.toml` files are TOML, everything
/// else is JSON. Both encoders pretty-print and end with a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Pretty-printed JSON with two-space indentation.
    #[default]
    Json,

    /// Pretty-printed TOML.
    Toml,
}

impl Format {
    /// Picks the format for a config file path.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }

    /// Encodes a record into the text written to disk.
    ///
    /// # Errors
    /// Returns `ConfigError::Encode` if the serializer rejects the record.
    pub fn encode<T: Serialize>(&self, record: &T) -> Result<String> {
        let mut text = match self {
            Format::Json => serde_json::to_string_pretty(record).map_err(ConfigError::encode)?,
            Format::Toml => toml::to_string_pretty(record).map_err(ConfigError::encode)?,
        };

        if !text.ends_with('\n') {
            text.push('\n');
        }

        Ok(text)
    }

    /// Decodes file content into a record.
    ///
    /// Returns `Ok(None)` when the content holds no record at all: blank
    /// text, or a JSON `null`.
    ///
    /// # Errors
    /// Returns `ConfigError::Decode` with `path` as context when the content
    /// does not match the record shape.
    pub fn decode<T: DeserializeOwned>(&self, content: &str, path: &Path) -> Result<Option<T>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        match self {
            Format::Json => {
                serde_json::from_str::<Option<T>>(content).map_err(|e| ConfigError::decode(e, path))
            }
            Format::Toml => toml::from_str::<T>(content)
                .map(Some)
                .map_err(|e| ConfigError::decode(e, path)),
        }
    }
}
