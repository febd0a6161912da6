//! Application state definitions
//!
//! Contains all state-related types for the application: the `AppState`
//! owned by the controller and the `AppMode` it dispatches on. The state is
//! a plain owned value: the event loop is single-threaded and every
//! mutation happens between two frames, so no locking is involved.

use crate::engine::Calculator;
use crate::history::History;
use crate::theme::ThemeKind;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// The calculator screen - keypad, display, status bar
    Calculator,
    /// The history browser - recall past results
    History,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The calculator engine
    pub calculator: Calculator,
    /// Bounded log of completed computations
    pub history: History,
    /// Active display theme
    pub theme: ThemeKind,
    /// Status message for user feedback
    pub status_message: String,
    /// True while the last status message is an error notification
    pub status_is_error: bool,
    /// Selected row in the history view (0 = most recent)
    pub history_selection: usize,
    /// Whether the help overlay is visible
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Calculator,
            calculator: Calculator::new(),
            history: History::new(),
            theme: ThemeKind::default(),
            status_message: "Ready".to_string(),
            status_is_error: false,
            history_selection: 0,
            help_visible: false,
        }
    }
}

impl AppState {
    /// Set an informational status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    /// Set an error notification in the status bar.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}
