//! Help overlay
//!
//! A centered floating window listing every key binding. Any key closes it.

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Key/description pairs shown in the overlay.
const BINDINGS: &[(&str, &str)] = &[
    ("0-9 .", "Type the current operand"),
    ("+ - * / %", "Choose an operator"),
    ("Enter  =", "Compute the result"),
    ("Backspace", "Delete the last character"),
    ("Esc  Del", "Clear everything"),
    ("c", "Clear the current entry"),
    ("h", "Browse calculation history"),
    ("↑ ↓  Enter", "Select and recall a history entry"),
    ("t", "Toggle dark/light theme"),
    ("?", "Show this help"),
    ("q  Ctrl+C", "Quit"),
];

/// Render the help overlay centered over the whole frame.
pub fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let palette = state.theme.palette();
    let area = centered_rect(f.area(), 50, BINDINGS.len() as u16 + 6);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{key:<12}"), palette.title()),
            Span::styled(*description, palette.text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Press any key to close",
        palette.text_muted(),
    ));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_active())
            .title(" Help ")
            .title_style(palette.title())
            .style(palette.panel_bg()),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// A centered rectangle `width` columns wide and `height` rows tall,
/// clamped to the parent area.
fn centered_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.min(parent.height))])
        .flex(Flex::Center)
        .areas(parent);
    let [area] = Layout::horizontal([Constraint::Length(width.min(parent.width))])
        .flex(Flex::Center)
        .areas(vertical);
    area
}
