//! Key mapping for the board view
//!
//! Kept separate from the iocraft component so the keymap can be unit
//! tested without the framework.

use iocraft::prelude::{KeyCode, KeyModifiers};

/// All possible actions on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Advance the grouping axis (status -> user -> priority)
    CycleGrouping,
    /// Flip the ordering (priority <-> title)
    ToggleOrdering,
    /// Start a fresh load lifetime
    Reload,
    /// Quit the application
    Quit,
}

/// Map a key event to a board action
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<BoardAction> {
    match code {
        KeyCode::Char('g') => Some(BoardAction::CycleGrouping),
        KeyCode::Char('o') => Some(BoardAction::ToggleOrdering),
        KeyCode::Char('r') => Some(BoardAction::Reload),
        KeyCode::Char('q') => Some(BoardAction::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(BoardAction::Quit),
        _ => None,
    }
}
