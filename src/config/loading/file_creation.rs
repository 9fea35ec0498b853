use std::{fs::OpenOptions, path::Path};

use tracing::info;

use crate::config::{ConfigError, Result};

/// Creates an empty config file, failing if it already exists
///
/// Parent directories are not created; a missing directory surfaces as
/// `ConfigError::Io`.
///
/// # Errors
/// Returns `ConfigError::Io` if the file already exists or cannot be created
pub fn create_empty_config_file(path: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| ConfigError::io(e, path))?;

    info!("Created config file {}", path.display());
    Ok(())
}
