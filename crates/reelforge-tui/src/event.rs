//! TUI event types for input and background tasks.

use crossterm::event::KeyEvent;

/// Application event emitted by input handlers or background tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input event.
    Input(KeyEvent),
    /// Periodic tick event.
    Tick,
    /// A content generation run finished with these lines.
    Generated(Vec<String>),
    /// Scroll event in a list view.
    Scroll(i16),
}
