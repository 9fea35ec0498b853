//! Versioned configuration records and their on-disk store.
//!
//! A record implements [`Versioned`] plus serde's traits; [`ConfigStore`]
//! reads it from (or creates it under) a configuration root and rewrites
//! the file whenever the record had to be upgraded.

mod error;
mod format;
mod loading;
mod paths;
mod store;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, Result};
pub use format::Format;
pub use paths::ConfigPaths;
pub use store::ConfigStore;

/// A configuration record that tracks its own schema version.
///
/// Implemented by every concrete settings type handed to
/// [`ConfigStore::load`]. After [`update`](Versioned::update) returns,
/// [`is_up_to_date`](Versioned::is_up_to_date) must report `true`, and a
/// second `update` must change nothing.
pub trait Versioned {
    /// Whether the record already matches the current schema.
    fn is_up_to_date(&self) -> bool;

    /// Upgrades the record to the current schema in place.
    fn update(&mut self);
}
