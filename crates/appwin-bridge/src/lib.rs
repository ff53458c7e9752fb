//! Window-state synchronization bridge.
//!
//! Keeps the last snapshot of a window's observable state, takes full
//! replacement snapshots from the host, and turns the differences into
//! named zero-argument notifications:
//! - `onBoundsChanged`, `onFullscreened`, `onMinimized`, `onMaximized`,
//!   `onRestored` from [`WindowStateBridge::apply_update`]
//! - `onClosed` from [`WindowStateBridge::notify_closed`]
//!
//! One [`WindowContext`] exists per window; nothing here is process-wide.

pub mod bridge;
pub mod context;
pub mod diff;
pub mod host;
pub mod notification;
pub mod protocol;
pub mod signal;
pub mod snapshot;

pub use bridge::{AppWindow, WindowStateBridge};
pub use context::WindowContext;
pub use diff::transitions;
pub use host::{NoopHost, WindowHost};
pub use notification::WindowNotification;
pub use protocol::HostMessage;
pub use signal::{ListenerId, Signal};
pub use snapshot::{WindowParams, WindowSnapshot, WindowState};
