//! Keyboard event handling for the chart viewer

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// What the viewer should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Keep showing the current chart
    Stay,
    /// Dismiss the chart and continue with the next one
    Next,
    /// Stop the whole run
    Abort,
}

/// Handles keyboard events for the viewer
pub struct EventHandler {
    poll_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
        }
    }

    /// Wait briefly for a key and map it to an action
    pub fn next_action(&mut self) -> io::Result<ViewerAction> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Self::handle_key(key));
            }
        }
        Ok(ViewerAction::Stay)
    }

    /// Map keyboard input to an action
    pub fn handle_key(key: KeyEvent) -> ViewerAction {
        if key.kind == KeyEventKind::Release {
            return ViewerAction::Stay;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ViewerAction::Abort
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter => {
                ViewerAction::Next
            }
            KeyCode::Char(' ') => ViewerAction::Next,
            _ => ViewerAction::Stay,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_dismiss_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc, KeyCode::Enter, KeyCode::Char(' ')] {
            assert_eq!(
                EventHandler::handle_key(key(code, KeyModifiers::NONE)),
                ViewerAction::Next
            );
        }
    }

    #[test]
    fn test_ctrl_c_aborts() {
        assert_eq!(
            EventHandler::handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ViewerAction::Abort
        );
        assert_eq!(
            EventHandler::handle_key(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            ViewerAction::Stay
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(
            EventHandler::handle_key(key(KeyCode::Left, KeyModifiers::NONE)),
            ViewerAction::Stay
        );
    }
}
