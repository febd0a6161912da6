//! Application module
//!
//! Contains the main application logic, state management, and event
//! handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState};

use crate::engine::Operator;
use crate::input::{self, InputAction};
use crate::storage::{Preferences, Storage};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    state: AppState,
    storage: Storage,
    ui_renderer: UiRenderer,
}

impl App {
    /// Create a new application instance, loading persisted history and
    /// preferences. Load failures fall back to defaults with a warning;
    /// a corrupt history file must never keep the calculator from starting.
    pub fn new(storage: Storage) -> Self {
        info!("Creating new App instance");
        let mut state = AppState::default();

        match storage.load_history() {
            Ok(history) => state.history = history,
            Err(e) => warn!("Could not load history: {e:#}"),
        }
        match storage.load_preferences() {
            Ok(preferences) => state.theme = preferences.theme,
            Err(e) => warn!("Could not load preferences: {e:#}"),
        }

        Self {
            state,
            storage,
            ui_renderer: UiRenderer::new(),
        }
    }

    /// Read-only view of the application state (for tests and rendering).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            // Handle input events
            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break; // Exit requested
                    }
                }
            }

            // Render UI
            terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;
        }

        Ok(())
    }

    /// Handle a keyboard event. Returns true when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        // The help overlay swallows everything except its own dismissal.
        if self.state.help_visible {
            self.state.help_visible = false;
            return false;
        }

        let action = match self.state.mode {
            AppMode::Calculator => input::map_calculator_key(key_event),
            AppMode::History => input::map_history_key(key_event),
        };

        match action {
            Some(action) => self.apply_action(action),
            None => false,
        }
    }

    /// Apply a resolved input action. Returns true when the user asked to
    /// quit.
    fn apply_action(&mut self, action: InputAction) -> bool {
        debug!("Applying action: {action:?}");

        match action {
            InputAction::Digit(token) => {
                self.state.calculator.append_digit(token);
                self.state.set_status("Ready");
            }
            InputAction::Operator(op) => self.choose_operator(op),
            InputAction::Compute => self.compute_and_record(),
            InputAction::Clear => {
                self.state.calculator.clear();
                self.state.set_status("Cleared");
            }
            InputAction::ClearEntry => {
                self.state.calculator.clear_entry();
                self.state.set_status("Entry cleared");
            }
            InputAction::DeleteLast => self.state.calculator.delete_last(),
            InputAction::ToggleTheme => self.toggle_theme(),
            InputAction::ToggleHelp => self.state.help_visible = true,
            InputAction::OpenHistory => {
                self.state.mode = AppMode::History;
                self.state.history_selection = 0;
                self.state.set_status("History - Enter recalls, Esc returns");
            }
            InputAction::CloseView => {
                self.state.mode = AppMode::Calculator;
                self.state.set_status("Ready");
            }
            InputAction::SelectUp => {
                self.state.history_selection = self.state.history_selection.saturating_sub(1);
            }
            InputAction::SelectDown => {
                let last = self.state.history.len().saturating_sub(1);
                if self.state.history_selection < last {
                    self.state.history_selection += 1;
                }
            }
            InputAction::Recall => self.recall_selected(),
            InputAction::Quit => return true,
        }

        false
    }

    /// Choose an operator, surfacing a divide-by-zero from the fold.
    fn choose_operator(&mut self, op: Operator) {
        match self.state.calculator.choose_operator(op) {
            Ok(()) => self.state.set_status("Ready"),
            Err(e) => self.state.set_error(e.to_string()),
        }
    }

    /// Finalize the pending operation and record it in the history.
    fn compute_and_record(&mut self) {
        match self.state.calculator.compute() {
            Ok(Some(computation)) => {
                let result = self.state.calculator.current_operand().to_string();
                self.state
                    .history
                    .record(computation.expression, result.clone());
                self.state.set_status(format!("= {result}"));
                if let Err(e) = self.storage.save_history(&self.state.history) {
                    warn!("Could not save history: {e:#}");
                }
            }
            Ok(None) => {
                // Nothing to compute; leave the state and status alone.
            }
            Err(e) => self.state.set_error(e.to_string()),
        }
    }

    /// Toggle between the dark and light themes and persist the choice.
    fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        self.state.set_status(format!("Theme: {}", self.state.theme));

        let preferences = Preferences {
            theme: self.state.theme,
        };
        if let Err(e) = self.storage.save_preferences(&preferences) {
            warn!("Could not save preferences: {e:#}");
        }
    }

    /// Recall the selected history entry into the calculator.
    fn recall_selected(&mut self) {
        let Some(entry) = self.state.history.get(self.state.history_selection) else {
            return;
        };
        let result = entry.result.clone();
        self.state.calculator.recall(&result);
        self.state.mode = AppMode::Calculator;
        self.state.set_status(format!("Recalled {result}"));
    }
}
