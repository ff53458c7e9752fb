use appwin_common::{WindowEvent, WindowId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six notifications a bridge can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowNotification {
    #[serde(rename = "onBoundsChanged")]
    BoundsChanged,
    #[serde(rename = "onFullscreened")]
    Fullscreened,
    #[serde(rename = "onMinimized")]
    Minimized,
    #[serde(rename = "onMaximized")]
    Maximized,
    #[serde(rename = "onRestored")]
    Restored,
    #[serde(rename = "onClosed")]
    Closed,
}

impl WindowNotification {
    pub const ALL: [WindowNotification; 6] = [
        WindowNotification::BoundsChanged,
        WindowNotification::Fullscreened,
        WindowNotification::Minimized,
        WindowNotification::Maximized,
        WindowNotification::Restored,
        WindowNotification::Closed,
    ];

    /// Script-facing event name.
    pub fn name(self) -> &'static str {
        match self {
            WindowNotification::BoundsChanged => "onBoundsChanged",
            WindowNotification::Fullscreened => "onFullscreened",
            WindowNotification::Minimized => "onMinimized",
            WindowNotification::Maximized => "onMaximized",
            WindowNotification::Restored => "onRestored",
            WindowNotification::Closed => "onClosed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.name() == name)
    }

    /// Inverse of [`to_event`](Self::to_event). `None` for unknown events.
    pub fn from_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::BoundsChanged(_) => Some(WindowNotification::BoundsChanged),
            WindowEvent::Fullscreened(_) => Some(WindowNotification::Fullscreened),
            WindowEvent::Minimized(_) => Some(WindowNotification::Minimized),
            WindowEvent::Maximized(_) => Some(WindowNotification::Maximized),
            WindowEvent::Restored(_) => Some(WindowNotification::Restored),
            WindowEvent::Closed(_) => Some(WindowNotification::Closed),
            WindowEvent::Unknown => None,
        }
    }

    pub fn to_event(self, window: WindowId) -> WindowEvent {
        match self {
            WindowNotification::BoundsChanged => WindowEvent::BoundsChanged(window),
            WindowNotification::Fullscreened => WindowEvent::Fullscreened(window),
            WindowNotification::Minimized => WindowEvent::Minimized(window),
            WindowNotification::Maximized => WindowEvent::Maximized(window),
            WindowNotification::Restored => WindowEvent::Restored(window),
            WindowNotification::Closed => WindowEvent::Closed(window),
        }
    }
}

impl fmt::Display for WindowNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for n in WindowNotification::ALL {
            assert_eq!(WindowNotification::from_name(n.name()), Some(n));
        }
        assert_eq!(WindowNotification::from_name("onResized"), None);
    }

    #[test]
    fn serde_uses_script_names() {
        let json = serde_json::to_string(&WindowNotification::Fullscreened).unwrap();
        assert_eq!(json, "\"onFullscreened\"");
        let back: WindowNotification = serde_json::from_str("\"onRestored\"").unwrap();
        assert_eq!(back, WindowNotification::Restored);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(WindowNotification::Closed.to_string(), "onClosed");
    }

    #[test]
    fn to_event_carries_window_id() {
        let event = WindowNotification::Minimized.to_event(WindowId::new("main"));
        assert_eq!(event, WindowEvent::Minimized(WindowId::new("main")));
    }

    #[test]
    fn from_event_inverts_to_event() {
        for n in WindowNotification::ALL {
            let event = n.to_event(WindowId::new("w"));
            assert_eq!(WindowNotification::from_event(&event), Some(n));
        }
        assert_eq!(WindowNotification::from_event(&WindowEvent::Unknown), None);
    }
}
