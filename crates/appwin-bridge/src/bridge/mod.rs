//! Per-window state bridge.
//!
//! [`WindowStateBridge`] owns the current [`WindowSnapshot`] exclusively.
//! Mutation happens only through [`initialize`](WindowStateBridge::initialize),
//! [`apply_update`](WindowStateBridge::apply_update) and
//! [`notify_closed`](WindowStateBridge::notify_closed); listeners run in-line
//! before those calls return.

use appwin_common::{EventBus, WindowId};
use tracing::debug;

use crate::diff::transitions;
use crate::notification::WindowNotification;
use crate::signal::{ListenerId, Signal};
use crate::snapshot::{WindowParams, WindowSnapshot, WindowState};

mod accessors;


pub use accessors::AppWindow;

#[derive(Debug)]
struct Signals {
    bounds_changed: Signal,
    fullscreened: Signal,
    minimized: Signal,
    maximized: Signal,
    restored: Signal,
    closed: Signal,
}

impl Signals {
    fn new() -> Self {
        Self {
            bounds_changed: Signal::new(WindowNotification::BoundsChanged.name()),
            fullscreened: Signal::new(WindowNotification::Fullscreened.name()),
            minimized: Signal::new(WindowNotification::Minimized.name()),
            maximized: Signal::new(WindowNotification::Maximized.name()),
            restored: Signal::new(WindowNotification::Restored.name()),
            closed: Signal::new(WindowNotification::Closed.name()),
        }
    }

    fn get_mut(&mut self, notification: WindowNotification) -> &mut Signal {
        match notification {
            WindowNotification::BoundsChanged => &mut self.bounds_changed,
            WindowNotification::Fullscreened => &mut self.fullscreened,
            WindowNotification::Minimized => &mut self.minimized,
            WindowNotification::Maximized => &mut self.maximized,
            WindowNotification::Restored => &mut self.restored,
            WindowNotification::Closed => &mut self.closed,
        }
    }
}

/// Current window state plus the listeners its changes are reported to.
#[derive(Debug)]
pub struct WindowStateBridge {
    snapshot: Option<WindowSnapshot>,
    signals: Signals,
    /// Optional broadcast mirror; published after in-line listeners ran.
    bus: Option<EventBus>,
}

impl WindowStateBridge {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            signals: Signals::new(),
            bus: None,
        }
    }

    /// A bridge that also publishes every notification onto `bus`.
    pub fn with_event_bus(bus: EventBus) -> Self {
        Self {
            bus: Some(bus),
            ..Self::new()
        }
    }

    pub fn set_event_bus(&mut self, bus: Option<EventBus>) {
        self.bus = bus;
    }

    pub fn is_initialized(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Install the initial snapshot. Fires nothing.
    ///
    /// Calling it again replaces the snapshot and its identity.
    pub fn initialize(&mut self, params: WindowParams) {
        let snapshot = WindowSnapshot::from_params(params);
        match &self.snapshot {
            Some(prev) => debug!(
                previous = %prev.id,
                window_id = %snapshot.id,
                "bridge re-initialized"
            ),
            None => debug!(window_id = %snapshot.id, bounds = %snapshot.bounds, "bridge initialized"),
        }
        self.snapshot = Some(snapshot);
    }

    /// Replace the current snapshot with `state` and raise the transitions.
    ///
    /// Ignored when the bridge holds no snapshot. Returns the notifications
    /// that fired, in dispatch order.
    pub fn apply_update(&mut self, state: WindowState) -> Vec<WindowNotification> {
        let Some(old) = self.snapshot.take() else {
            debug!("update before initialize ignored");
            return Vec::new();
        };

        let new = old.succeed(state);
        let fired = transitions(&old, &new);
        let window_id = new.id.clone();
        self.snapshot = Some(new);

        for notification in &fired {
            self.raise(*notification, &window_id);
        }
        fired
    }

    /// Raise `onClosed` once and drop the snapshot.
    ///
    /// Returns `false` without firing when no window is attached, which
    /// includes a second call after the window already closed.
    pub fn notify_closed(&mut self) -> bool {
        let Some(snapshot) = self.snapshot.take() else {
            debug!("close notification without an attached window ignored");
            return false;
        };
        self.raise(WindowNotification::Closed, &snapshot.id);
        true
    }

    /// Listener list for `notification`.
    pub fn signal_mut(&mut self, notification: WindowNotification) -> &mut Signal {
        self.signals.get_mut(notification)
    }

    pub fn subscribe(
        &mut self,
        notification: WindowNotification,
        listener: impl FnMut() + 'static,
    ) -> ListenerId {
        self.signal_mut(notification).subscribe(listener)
    }

    pub fn unsubscribe(&mut self, notification: WindowNotification, id: ListenerId) -> bool {
        self.signal_mut(notification).unsubscribe(id)
    }

    pub fn on_bounds_changed(&mut self) -> &mut Signal {
        &mut self.signals.bounds_changed
    }

    pub fn on_fullscreened(&mut self) -> &mut Signal {
        &mut self.signals.fullscreened
    }

    pub fn on_minimized(&mut self) -> &mut Signal {
        &mut self.signals.minimized
    }

    pub fn on_maximized(&mut self) -> &mut Signal {
        &mut self.signals.maximized
    }

    pub fn on_restored(&mut self) -> &mut Signal {
        &mut self.signals.restored
    }

    pub fn on_closed(&mut self) -> &mut Signal {
        &mut self.signals.closed
    }

    fn raise(&mut self, notification: WindowNotification, window_id: &WindowId) {
        let listeners = self.signals.get_mut(notification).fire();
        debug!(window_id = %window_id, %notification, listeners, "notification raised");
        if let Some(bus) = &self.bus {
            bus.publish(notification.to_event(window_id.clone()));
        }
    }
}

impl Default for WindowStateBridge {
    fn default() -> Self {
        Self::new()
    }
}
