//! Transition detection between two snapshots.

use crate::notification::WindowNotification;
use crate::snapshot::WindowSnapshot;

/// Notifications implied by moving from `old` to `new`, in dispatch order.
///
/// Each flag that turns on yields its own notification. Any number of flags
/// turning off in the same step collapse into a single `Restored`.
pub fn transitions(old: &WindowSnapshot, new: &WindowSnapshot) -> Vec<WindowNotification> {
    let mut fired = Vec::new();

    if old.bounds != new.bounds {
        fired.push(WindowNotification::BoundsChanged);
    }

    if !old.fullscreen && new.fullscreen {
        fired.push(WindowNotification::Fullscreened);
    }
    if !old.minimized && new.minimized {
        fired.push(WindowNotification::Minimized);
    }
    if !old.maximized && new.maximized {
        fired.push(WindowNotification::Maximized);
    }

    if (old.fullscreen && !new.fullscreen)
        || (old.minimized && !new.minimized)
        || (old.maximized && !new.maximized)
    {
        fired.push(WindowNotification::Restored);
    }

    fired
}
