use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::WindowId;

/// Window notifications mirrored onto the bus for consumers outside the
/// bridge's own listener lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WindowEvent {
    BoundsChanged(WindowId),
    Fullscreened(WindowId),
    Minimized(WindowId),
    Maximized(WindowId),
    Restored(WindowId),
    Closed(WindowId),
    #[serde(other)]
    Unknown,
}

impl WindowEvent {
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            WindowEvent::BoundsChanged(id)
            | WindowEvent::Fullscreened(id)
            | WindowEvent::Minimized(id)
            | WindowEvent::Maximized(id)
            | WindowEvent::Restored(id)
            | WindowEvent::Closed(id) => Some(id),
            WindowEvent::Unknown => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<WindowEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WindowEvent> {
        self.sender.subscribe()
    }

    /// Publish to every live receiver. Returns how many received it.
    pub fn publish(&self, event: WindowEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
