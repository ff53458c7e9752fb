//! Config path resolution and default file creation.

use appwin_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Contents written when no config file exists yet.
pub const DEFAULT_CONFIG_TOML: &str = r#"# appwin configuration

[logging]
# trace | debug | info | warn | error
level = "info"

[events]
# Capacity of the notification event bus (8-4096).
bus_capacity = 64

[replay]
# Stop at the first malformed host message instead of skipping it.
strict = false
"#;

/// Platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("appwin").join("config.toml"))
}

/// Write the documented default config to `path`, creating parent dirs.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
