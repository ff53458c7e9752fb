//! Read config from a path or the platform default.

use crate::schema::AppWinConfig;
use crate::validation;
use appwin_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file.
///
/// Missing fields take serde defaults. A validation failure is logged and the
/// parsed config is returned as-is; callers that need a hard failure run
/// [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<AppWinConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: AppWinConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// On Linux: `~/.config/appwin/config.toml`. If the file does not exist a
/// documented default is written there and defaults are returned.
pub fn load_default() -> Result<AppWinConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(&path) {
                warn!("could not write default config: {e}");
            }
            Ok(AppWinConfig::default())
        }
        Err(e) => Err(e),
    }
}
