//! History browser rendering
//!
//! Lists the bounded computation log most-recent-first. The selected entry
//! can be recalled into the calculator with Enter.

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Render the history list, or a placeholder when it is empty.
pub fn render_history(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_active())
        .title(" Calculation History ")
        .title_style(palette.title())
        .style(palette.panel_bg());

    if state.history.is_empty() {
        let placeholder = Paragraph::new("No calculations yet")
            .style(palette.text_muted())
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .history
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.expression.clone(), palette.history_expression()),
                Span::styled(" = ", palette.text_muted()),
                Span::styled(entry.result.clone(), palette.text()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(palette.unselected())
        .highlight_style(palette.selected())
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.history_selection));
    f.render_stateful_widget(list, area, &mut list_state);
}
