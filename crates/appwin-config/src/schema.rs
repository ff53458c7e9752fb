//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Log verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive scoped to the appwin crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "appwin=trace",
            LogLevel::Debug => "appwin=debug",
            LogLevel::Info => "appwin=info",
            LogLevel::Warn => "appwin=warn",
            LogLevel::Error => "appwin=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Event bus that window notifications are mirrored onto.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Broadcast channel capacity (valid range: 8-4096).
    pub bus_capacity: u32,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { bus_capacity: 64 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReplayConfig {
    /// Abort on the first malformed host message instead of skipping it.
    pub strict: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppWinConfig {
    pub logging: LoggingConfig,
    pub events: EventsConfig,
    pub replay: ReplayConfig,
}
