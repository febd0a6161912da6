//! Operand readout rendering and display-side number formatting
//!
//! The engine holds canonical decimal text; everything cosmetic happens
//! here. Values wider than the readout switch to exponential notation,
//! everything else gets thousand separators. When an operation is pending,
//! the left operand and operator render in a smaller line above the
//! current operand.

use crate::app::AppState;
use crate::engine::Operator;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Values longer than this render in exponential notation.
const MAX_PLAIN_WIDTH: usize = 12;

/// Pending-operand text longer than this renders in exponential notation.
const MAX_PENDING_WIDTH: usize = 8;

/// Render the two-line display panel: the pending operation (if any) above
/// the current operand.
pub fn render_display(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let pending = match (state.calculator.previous_operand(), state.calculator.operator()) {
        ("", _) | (_, None) => String::new(),
        (prev, Some(op)) => format_pending_operation(prev, op),
    };

    let lines = vec![
        Line::styled(pending, palette.display_pending()),
        Line::styled(
            format_display_value(state.calculator.current_operand()),
            palette.display_value(),
        ),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_active())
                .style(palette.panel_bg()),
        );
    f.render_widget(display, area);
}

/// Format the current operand for the readout: empty text shows as `0`,
/// wide values switch to exponential notation, everything else gets
/// thousand separators in the integer part.
pub fn format_display_value(value: &str) -> String {
    if value.is_empty() {
        return "0".to_string();
    }

    if value.len() > MAX_PLAIN_WIDTH {
        if let Ok(number) = value.parse::<f64>() {
            return format!("{number:.6e}");
        }
    }

    add_thousand_separators(value)
}

/// Format the pending-operation line, e.g. `"1,024 ×"`.
pub fn format_pending_operation(previous: &str, op: Operator) -> String {
    if previous.len() > MAX_PENDING_WIDTH {
        if let Ok(number) = previous.parse::<f64>() {
            return format!("{number:.3e} {op}");
        }
    }
    format!("{} {op}", add_thousand_separators(previous))
}

/// Insert `,` separators into the integer part of a decimal string,
/// leaving the sign and fraction untouched.
fn add_thousand_separators(value: &str) -> String {
    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
