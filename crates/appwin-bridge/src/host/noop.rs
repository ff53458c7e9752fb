//! Host that only logs requests.
//!
//! Used when replaying recorded host traffic, where nothing can act on
//! script-side requests.

use appwin_common::WindowId;
use tracing::debug;

use super::WindowHost;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl WindowHost for NoopHost {
    fn move_to(&mut self, window: &WindowId, left: i32, top: i32) {
        debug!(window_id = %window, left, top, "move request dropped");
    }

    fn resize_to(&mut self, window: &WindowId, width: i32, height: i32) {
        debug!(window_id = %window, width, height, "resize request dropped");
    }

    fn close(&mut self, window: &WindowId) {
        debug!(window_id = %window, "close request dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_accepted() {
        let mut host = NoopHost;
        let id = WindowId::new("w");
        host.move_to(&id, 1, 2);
        host.resize_to(&id, 3, 4);
        host.close(&id);
    }
}
