use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Utility struct for locating configuration directories
///
/// Follows the XDG Base Directory specification for hosts that do not
/// hand the store an explicit configuration root.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory for an application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends `app_name` to the base config directory
    ///
    /// Empty variables count as unset. The directory is not created.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir(app_name: &str) -> Result<PathBuf, Error> {
        Self::config_dir_from(
            env::var("XDG_CONFIG_HOME").ok(),
            env::var("HOME").ok(),
            app_name,
        )
    }

    pub(crate) fn config_dir_from(
        xdg_config_home: Option<String>,
        home: Option<String>,
        app_name: &str,
    ) -> Result<PathBuf, Error> {
        let config_home = xdg_config_home
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                home.filter(|dir| !dir.is_empty())
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(config_home.join(app_name))
    }
}
