//! The host side of a window: the thing that actually moves, resizes and
//! closes it.
//!
//! Requests sent through a [`WindowHost`] do not touch the bridge's snapshot.
//! The host reports the resulting state back with an update message.

use appwin_common::WindowId;

mod noop;

pub use noop::NoopHost;

pub trait WindowHost {
    fn move_to(&mut self, window: &WindowId, left: i32, top: i32);
    fn resize_to(&mut self, window: &WindowId, width: i32, height: i32);
    fn close(&mut self, window: &WindowId);
}
