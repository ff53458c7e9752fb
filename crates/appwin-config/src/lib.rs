//! appwin configuration.
//!
//! TOML-based configuration for the replay tool and the bridge's event bus.
//! Every section uses serde defaults so partial files work.
//!
//! ```rust,no_run
//! use appwin_config::load_config_or_default;
//!
//! let (config, error) = load_config_or_default(None);
//! if let Some(e) = error {
//!     eprintln!("using defaults: {e}");
//! }
//! println!("bus capacity: {}", config.events.bus_capacity);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AppWinConfig, EventsConfig, LogLevel, LoggingConfig, ReplayConfig};
pub use toml_loader::{load_default, load_from_path};

use appwin_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or the platform default when `None`, and
/// validate it.
pub fn load_config(path: Option<&Path>) -> Result<AppWinConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Like [`load_config`], but falls back to defaults on any error.
///
/// The error is handed back rather than logged so callers can report it
/// once logging is set up.
pub fn load_config_or_default(path: Option<&Path>) -> (AppWinConfig, Option<ConfigError>) {
    match load_config(path) {
        Ok(config) => (config, None),
        Err(e) => (AppWinConfig::default(), Some(e)),
    }
}
