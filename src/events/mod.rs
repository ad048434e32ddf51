//! Event handling for the dashboard.
//!
//! This module turns terminal input into application events and maps keys
//! to dashboard actions.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{action_for_key, Action, KEY_HINTS};

/// An application event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// No input arrived within the tick rate.
    Tick,
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
}
