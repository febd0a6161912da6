//! Keypad grid rendering
//!
//! Renders the classic 5×4 button layout as a visual reference for the key
//! bindings. The keys are not clickable; input arrives through the
//! keyboard. The grid mirrors the familiar calculator face.

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Visual class of a keypad key, used only for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyClass {
    Digit,
    Operator,
    Control,
}

/// The keypad face, row by row.
const KEYPAD_ROWS: [[(&str, KeyClass); 4]; 5] = [
    [
        ("C", KeyClass::Control),
        ("CE", KeyClass::Control),
        ("⌫", KeyClass::Control),
        ("÷", KeyClass::Operator),
    ],
    [
        ("7", KeyClass::Digit),
        ("8", KeyClass::Digit),
        ("9", KeyClass::Digit),
        ("×", KeyClass::Operator),
    ],
    [
        ("4", KeyClass::Digit),
        ("5", KeyClass::Digit),
        ("6", KeyClass::Digit),
        ("-", KeyClass::Operator),
    ],
    [
        ("1", KeyClass::Digit),
        ("2", KeyClass::Digit),
        ("3", KeyClass::Digit),
        ("+", KeyClass::Operator),
    ],
    [
        ("0", KeyClass::Digit),
        (".", KeyClass::Digit),
        ("%", KeyClass::Operator),
        ("=", KeyClass::Operator),
    ],
];

/// Render the keypad grid.
pub fn render_keypad(f: &mut Frame, area: Rect, state: &AppState) {
    let palette = state.theme.palette();

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (row, row_area) in KEYPAD_ROWS.iter().zip(row_areas.iter()) {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(*row_area);

        for ((label, class), cell_area) in row.iter().zip(cell_areas.iter()) {
            let style = match class {
                KeyClass::Digit => palette.key(),
                KeyClass::Operator => palette.key_operator(),
                KeyClass::Control => palette.key_control(),
            };

            let key = Paragraph::new(*label)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(palette.border_inactive()),
                );
            f.render_widget(key, vertically_centered(*cell_area));
        }
    }
}

/// Clamp a cell to a three-line key centered in its area, so short keys do
/// not stretch into tall slabs on big terminals.
fn vertically_centered(area: Rect) -> Rect {
    if area.height <= 3 {
        return area;
    }
    let pad = (area.height - 3) / 2;
    Rect {
        y: area.y + pad,
        height: 3,
        ..area
    }
}
