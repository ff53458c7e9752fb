//! Window state records exchanged with the host.

use appwin_common::{Bounds, WindowId};
use serde::{Deserialize, Serialize};

/// Parameters the host supplies when a window context is established.
///
/// `bounds` is required; absent flags read as `false` and an absent or null
/// `id` reads as the empty id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowParams {
    #[serde(default)]
    pub id: Option<WindowId>,
    pub bounds: Bounds,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default)]
    pub minimized: bool,
    #[serde(default)]
    pub maximized: bool,
}

/// Full replacement state pushed on every update. Carries no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub bounds: Bounds,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default)]
    pub minimized: bool,
    #[serde(default)]
    pub maximized: bool,
}

impl WindowState {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            fullscreen: false,
            minimized: false,
            maximized: false,
        }
    }

    pub fn fullscreen(mut self, on: bool) -> Self {
        self.fullscreen = on;
        self
    }

    pub fn minimized(mut self, on: bool) -> Self {
        self.minimized = on;
        self
    }

    pub fn maximized(mut self, on: bool) -> Self {
        self.maximized = on;
        self
    }
}

/// One instant of a window's observable state.
///
/// Snapshots are replaced wholesale; the bridge only hands out shared
/// references to the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub bounds: Bounds,
    pub fullscreen: bool,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowSnapshot {
    pub fn from_params(params: WindowParams) -> Self {
        Self {
            id: params.id.unwrap_or_default(),
            bounds: params.bounds,
            fullscreen: params.fullscreen,
            minimized: params.minimized,
            maximized: params.maximized,
        }
    }

    /// The snapshot that replaces `self` after `state`, keeping `self.id`.
    pub fn succeed(&self, state: WindowState) -> Self {
        Self {
            id: self.id.clone(),
            bounds: state.bounds,
            fullscreen: state.fullscreen,
            minimized: state.minimized,
            maximized: state.maximized,
        }
    }

    pub fn state(&self) -> WindowState {
        WindowState {
            bounds: self.bounds,
            fullscreen: self.fullscreen,
            minimized: self.minimized,
            maximized: self.maximized,
        }
    }
}
