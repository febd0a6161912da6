//! Input handling module
//!
//! Maps raw crossterm key events to application actions. The mapping is
//! split by mode so the calculator keys and the history-browser keys stay
//! independent; the app layer dispatches on the returned action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::Operator;

/// A resolved user action, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Append a digit or decimal point to the current operand
    Digit(char),
    /// Choose a binary operator
    Operator(Operator),
    /// Finalize the pending operation (`Enter` or `=`)
    Compute,
    /// Full reset (`Esc` or `Delete`)
    Clear,
    /// Reset only the current operand (`c`)
    ClearEntry,
    /// Remove the last character (`Backspace`)
    DeleteLast,
    /// Switch between the dark and light themes (`t`)
    ToggleTheme,
    /// Show or hide the help overlay (`?`)
    ToggleHelp,
    /// Open the history view (`h`)
    OpenHistory,
    /// Leave the current view (`Esc` in history)
    CloseView,
    /// Move the selection up
    SelectUp,
    /// Move the selection down
    SelectDown,
    /// Recall the selected history entry (`Enter`)
    Recall,
    /// Exit the application (`q` or `Ctrl+C`)
    Quit,
}

/// Map a key event while the calculator screen is active.
pub fn map_calculator_key(key_event: KeyEvent) -> Option<InputAction> {
    if is_ctrl_c(key_event) {
        return Some(InputAction::Quit);
    }

    match key_event.code {
        KeyCode::Char(c @ '0'..='9') | KeyCode::Char(c @ '.') => Some(InputAction::Digit(c)),
        KeyCode::Char(c) if Operator::from_key(c).is_some() => {
            Operator::from_key(c).map(InputAction::Operator)
        }
        KeyCode::Enter | KeyCode::Char('=') => Some(InputAction::Compute),
        KeyCode::Esc | KeyCode::Delete => Some(InputAction::Clear),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(InputAction::ClearEntry),
        KeyCode::Backspace => Some(InputAction::DeleteLast),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputAction::ToggleTheme),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(InputAction::OpenHistory),
        KeyCode::Char('?') => Some(InputAction::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
        _ => None,
    }
}

/// Map a key event while the history view is active.
pub fn map_history_key(key_event: KeyEvent) -> Option<InputAction> {
    if is_ctrl_c(key_event) {
        return Some(InputAction::Quit);
    }

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => Some(InputAction::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => Some(InputAction::SelectDown),
        KeyCode::Enter => Some(InputAction::Recall),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('b') => Some(InputAction::CloseView),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputAction::ToggleTheme),
        KeyCode::Char('?') => Some(InputAction::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
        _ => None,
    }
}

fn is_ctrl_c(key_event: KeyEvent) -> bool {
    key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
