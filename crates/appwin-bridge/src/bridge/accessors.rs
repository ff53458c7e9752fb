use appwin_common::{BridgeError, Bounds, WindowId};

use crate::snapshot::WindowSnapshot;

use super::WindowStateBridge;

/// Read-only view of a window as seen from script code.
///
/// Every accessor fails with [`BridgeError::NotInitialized`] when no window
/// state is attached rather than returning a default.
pub trait AppWindow {
    fn id(&self) -> Result<&WindowId, BridgeError>;
    fn bounds(&self) -> Result<Bounds, BridgeError>;
    fn is_fullscreen(&self) -> Result<bool, BridgeError>;
    fn is_minimized(&self) -> Result<bool, BridgeError>;
    fn is_maximized(&self) -> Result<bool, BridgeError>;
}

impl WindowStateBridge {
    pub fn snapshot(&self) -> Result<&WindowSnapshot, BridgeError> {
        self.snapshot.as_ref().ok_or(BridgeError::NotInitialized)
    }

    /// Bounds by value; callers never alias the stored rectangle.
    pub fn current_bounds(&self) -> Result<Bounds, BridgeError> {
        self.snapshot().map(|s| s.bounds)
    }
}

impl AppWindow for WindowStateBridge {
    fn id(&self) -> Result<&WindowId, BridgeError> {
        self.snapshot().map(|s| &s.id)
    }

    fn bounds(&self) -> Result<Bounds, BridgeError> {
        self.current_bounds()
    }

    fn is_fullscreen(&self) -> Result<bool, BridgeError> {
        self.snapshot().map(|s| s.fullscreen)
    }

    fn is_minimized(&self) -> Result<bool, BridgeError> {
        self.snapshot().map(|s| s.minimized)
    }

    fn is_maximized(&self) -> Result<bool, BridgeError> {
        self.snapshot().map(|s| s.maximized)
    }
}
