use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use super::{ConfigError, ConfigPaths, Format, Result, loading::write_record};

/// Loads and persists configuration files under a single root directory.
///
/// The store keeps nothing but the root path. Records are owned by the
/// caller once returned and nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Creates a store rooted at a directory supplied by the host.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a store rooted at the XDG config directory of `app_name`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if neither `XDG_CONFIG_HOME` nor `HOME` is set.
    pub fn for_app(app_name: &str) -> Result<Self> {
        let root = ConfigPaths::config_dir(app_name).map_err(|source| ConfigError::NoConfigDir {
            app_name: app_name.to_string(),
            source,
        })?;
        Ok(Self::new(root))
    }

    /// The configuration root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a config file name against the root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFileName` if `file_name` is empty or absolute.
    pub fn resolve(&self, file_name: &str) -> Result<PathBuf> {
        let relative = Path::new(file_name);
        let is_relative = relative
            .components()
            .all(|component| !matches!(component, Component::RootDir | Component::Prefix(_)));

        if file_name.is_empty() || !is_relative {
            return Err(ConfigError::InvalidFileName {
                name: file_name.to_string(),
            });
        }

        Ok(self.root.join(relative))
    }

    /// Writes a record to a file under the root, replacing any previous content.
    ///
    /// The file is created if absent; its parent directory must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file name is invalid, the record cannot be
    /// encoded, or the file cannot be written.
    #[instrument(skip(self, record), fields(root = %self.root.display()))]
    pub fn save<T: Serialize>(&self, file_name: &str, record: &T) -> Result<()> {
        let path = self.resolve(file_name)?;
        write_record(&path, Format::from_path(&path), record)?;

        debug!("Saved config to {}", path.display());
        Ok(())
    }
}
