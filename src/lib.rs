//! Verconf - Self-migrating configuration files.
//!
//! Loads a versioned configuration record from a file under a configuration
//! root, creating it from defaults on first run and rewriting it whenever the
//! record reports a stale schema.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use serde::{Deserialize, Serialize};
//! use verconf::config::{ConfigStore, Versioned};
//!
//! #[derive(Serialize, Deserialize)]
//! #[serde(rename_all = "snake_case")]
//! struct Settings {
//!     schema_version: u32,
//!     render_distance: u32,
//! }
//!
//! impl Versioned for Settings {
//!     fn is_up_to_date(&self) -> bool {
//!         self.schema_version >= 2
//!     }
//!
//!     fn update(&mut self) {
//!         self.schema_version = 2;
//!     }
//! }
//!
//! let store = ConfigStore::new("/etc/mygame");
//! let settings = store.load("settings.json", || Settings {
//!     schema_version: 2,
//!     render_distance: 12,
//! })?;
//! println!("render distance: {}", settings.render_distance);
//! # Ok::<(), verconf::ConfigError>(())
//! ```

/// Versioned records, file formats and the configuration store.
pub mod config;

/// Opt-in tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use config::{ConfigError, ConfigStore, Result, Versioned};
