//! Key binding definitions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Hint line shown in the footer.
pub const KEY_HINTS: &str = "[Tab/h/l] switch tab  [1-3] jump  [j/k] select issue  [q] quit";

/// A dashboard action triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show the next tab.
    NextTab,
    /// Show the previous tab.
    PreviousTab,
    /// Jump to the tab at this index.
    SelectTab(usize),
    /// Move the issue selection down.
    Down,
    /// Move the issue selection up.
    Up,
    /// Leave the dashboard.
    Quit,
}

/// Map a key event to an action.
///
/// Only key presses count; releases and repeats reported by some terminals
/// are ignored.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextTab),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousTab),
        KeyCode::Char(c @ '1'..='3') => Some(Action::SelectTab(c as usize - '1' as usize)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        _ => None,
    }
}
