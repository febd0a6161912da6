//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `display` - The operand readout and its number formatting
//! - `keypad` - The button grid
//! - `history` - The history browser list
//! - `help` - The help overlay

mod display;
mod help;
mod history;
mod keypad;

pub use display::{format_display_value, format_pending_operation};

use crate::app::{AppMode, AppState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph},
};

/// Renders the full application frame, dispatching on the current mode.
pub struct UiRenderer;

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render one frame
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let palette = state.theme.palette();

        // Paint the themed background before anything else.
        f.render_widget(Block::default().style(palette.screen_bg()), f.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // title
                Constraint::Length(4),  // display
                Constraint::Min(10),    // keypad or history
                Constraint::Length(1),  // status
                Constraint::Length(1),  // nav hints
            ])
            .split(f.area());

        self.render_title(f, chunks[0], state);
        display::render_display(f, chunks[1], state);

        match state.mode {
            AppMode::Calculator => keypad::render_keypad(f, chunks[2], state),
            AppMode::History => history::render_history(f, chunks[2], state),
        }

        self.render_status(f, chunks[3], state);
        self.render_nav_bar(f, chunks[4], state);

        if state.help_visible {
            help::render_help_overlay(f, state);
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();
        let title = Paragraph::new(" calctui ")
            .alignment(Alignment::Center)
            .style(palette.title());
        f.render_widget(title, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();
        let style = if state.status_is_error {
            palette.error()
        } else {
            palette.text_muted()
        };
        let status = Paragraph::new(format!(" {}", state.status_message)).style(style);
        f.render_widget(status, area);
    }

    fn render_nav_bar(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();
        let hints = match state.mode {
            AppMode::Calculator => {
                " 0-9 . type │ + - * / % operator │ Enter = │ Bksp ⌫ │ Esc clear │ c CE │ h history │ t theme │ ? help │ q quit"
            }
            AppMode::History => " ↑/↓ select │ Enter recall │ Esc back │ t theme │ ? help │ q quit",
        };
        let nav = Paragraph::new(hints).style(palette.nav_hint());
        f.render_widget(nav, area);
    }
}
