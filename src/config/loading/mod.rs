mod file_creation;

use std::{fs, path::Path};

use file_creation::create_empty_config_file;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument};

use super::{ConfigError, ConfigStore, Format, Result, Versioned};

impl ConfigStore {
    /// Loads a versioned record from a file under the configuration root
    ///
    /// On first run the file is created and the record comes from
    /// `default_values`. An existing file is decoded as-is. Either way, a
    /// record that is not up to date is upgraded with [`Versioned::update`]
    /// and written back; an up-to-date file is left untouched.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Non-empty path relative to the configuration root
    /// * `default_values` - Factory for the record used when no file exists
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file name is empty or absolute
    /// - The file cannot be created, read or written (`ConfigError::Io`)
    /// - The existing content is blank, `null` or malformed
    ///   (`ConfigError::Empty` / `ConfigError::Decode`)
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use serde::{Deserialize, Serialize};
    /// use verconf::config::{ConfigStore, Versioned};
    ///
    /// #[derive(Serialize, Deserialize, Default)]
    /// #[serde(rename_all = "snake_case")]
    /// struct Settings {
    ///     version: u32,
    ///     enable_shaders: bool,
    /// }
    ///
    /// impl Versioned for Settings {
    ///     fn is_up_to_date(&self) -> bool {
    ///         self.version == 1
    ///     }
    ///
    ///     fn update(&mut self) {
    ///         self.version = 1;
    ///     }
    /// }
    ///
    /// let store = ConfigStore::for_app("mymod")?;
    /// let settings: Settings = store.load("settings.json", Settings::default)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(skip(self, default_values), fields(root = %self.root().display()))]
    pub fn load<T, F>(&self, file_name: &str, default_values: F) -> Result<T>
    where
        T: Versioned + Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let path = self.resolve(file_name)?;
        let format = Format::from_path(&path);

        let exists = path.try_exists().map_err(|e| ConfigError::io(e, &path))?;

        let (mut record, needs_rewrite) = if exists {
            debug!("Reading existing config {}", path.display());
            let record: T = read_record(&path, format)?;
            let needs_rewrite = !record.is_up_to_date();
            (record, needs_rewrite)
        } else {
            debug!("No config at {}, using default values", path.display());
            create_empty_config_file(&path)?;
            (default_values(), true)
        };

        if needs_rewrite {
            record.update();
            write_record(&path, format, &record)?;
            info!("Wrote up-to-date config to {}", path.display());
        } else {
            debug!("Config {} is up to date", path.display());
        }

        Ok(record)
    }
}

fn read_record<T: DeserializeOwned>(path: &Path, format: Format) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(e, path))?;

    format
        .decode(&content, path)?
        .ok_or_else(|| ConfigError::Empty {
            path: path.to_path_buf(),
        })
}

pub(super) fn write_record<T: Serialize>(path: &Path, format: Format, record: &T) -> Result<()> {
    let content = format.encode(record)?;
    fs::write(path, content).map_err(|e| ConfigError::io(e, path))
}
