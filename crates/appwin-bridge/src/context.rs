//! One window context: its bridge plus the host that owns the real window.
//!
//! Each script context gets its own `WindowContext`; nothing is shared
//! between windows.

use appwin_common::{BridgeError, ContextId};
use tracing::{debug, error};

use crate::bridge::{AppWindow, WindowStateBridge};
use crate::host::{NoopHost, WindowHost};
use crate::notification::WindowNotification;
use crate::protocol::HostMessage;

/// Owns one window's bridge and the host that acts on its requests.
pub struct WindowContext {
    id: ContextId,
    bridge: WindowStateBridge,
    host: Box<dyn WindowHost>,
}

impl WindowContext {
    pub fn new(host: impl WindowHost + 'static) -> Self {
        Self::with_bridge(WindowStateBridge::new(), host)
    }

    pub fn with_bridge(bridge: WindowStateBridge, host: impl WindowHost + 'static) -> Self {
        let id = ContextId::new();
        debug!(context = %id, "window context created");
        Self {
            id,
            bridge,
            host: Box::new(host),
        }
    }

    pub fn id(&self) -> &ContextId {
        &self.id
    }

    pub fn bridge(&self) -> &WindowStateBridge {
        &self.bridge
    }

    /// For listener registration.
    pub fn bridge_mut(&mut self) -> &mut WindowStateBridge {
        &mut self.bridge
    }

    /// Route a host message to the bridge. Returns what fired.
    pub fn handle(&mut self, message: HostMessage) -> Vec<WindowNotification> {
        match message {
            HostMessage::Initialize(params) => {
                self.bridge.initialize(params);
                Vec::new()
            }
            HostMessage::Update(state) => self.bridge.apply_update(state),
            HostMessage::Closed => {
                if self.bridge.notify_closed() {
                    vec![WindowNotification::Closed]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// The window associated with this context, if any.
    pub fn current(&self) -> Option<&dyn AppWindow> {
        if !self.bridge.is_initialized() {
            error!(context = %self.id, "context has no associated app window");
            return None;
        }
        Some(&self.bridge)
    }

    pub fn close(&mut self) -> Result<(), BridgeError> {
        let window = self.bridge.id()?;
        self.host.close(window);
        Ok(())
    }

    pub fn move_to(&mut self, left: i32, top: i32) -> Result<(), BridgeError> {
        let window = self.bridge.id()?;
        self.host.move_to(window, left, top);
        Ok(())
    }

    pub fn resize_to(&mut self, width: i32, height: i32) -> Result<(), BridgeError> {
        let window = self.bridge.id()?;
        self.host.resize_to(window, width, height);
        Ok(())
    }
}

impl Default for WindowContext {
    fn default() -> Self {
        Self::new(NoopHost)
    }
}
