//! Key bindings for the picker

use super::state::PickerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps key events to picker actions
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(key: KeyEvent) -> PickerAction {
        match (key.code, key.modifiers) {
            // Abort
            (KeyCode::Esc, _) => PickerAction::Cancel,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => PickerAction::Cancel,
            (KeyCode::Char('g'), KeyModifiers::CONTROL) => PickerAction::Cancel,

            // Navigation
            (KeyCode::Up, _) => PickerAction::Up,
            (KeyCode::Char('p'), KeyModifiers::CONTROL) => PickerAction::Up,
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => PickerAction::Up,
            (KeyCode::Down, _) => PickerAction::Down,
            (KeyCode::Char('n'), KeyModifiers::CONTROL) => PickerAction::Down,
            (KeyCode::Char('j'), KeyModifiers::CONTROL) => PickerAction::Down,

            (KeyCode::Enter, _) => PickerAction::Submit,

            // Query editing
            (KeyCode::Backspace, _) => PickerAction::DeleteChar,
            (KeyCode::Char('h'), KeyModifiers::CONTROL) => PickerAction::DeleteChar,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => PickerAction::ClearQuery,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                PickerAction::InsertChar(c)
            }

            _ => PickerAction::None,
        }
    }
}
