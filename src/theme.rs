//! Centralized theme and styling for the TUI
//!
//! A single source of truth for all colors and styles used throughout the
//! application. The calculator supports dark and light themes; every render
//! path styles itself through the active `Palette` rather than hardcoding
//! colors, so toggling the theme restyles the whole screen at once.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Selectable display theme. Persisted as part of the user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    #[strum(serialize = "dark")]
    Dark,
    #[strum(serialize = "light")]
    Light,
}

impl ThemeKind {
    /// The other theme; used by the theme-toggle key.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The color palette for this theme.
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                bg: Color::Rgb(20, 20, 30),
                bg_panel: Color::Rgb(30, 30, 40),
                fg_primary: Color::White,
                fg_muted: Color::DarkGray,
                accent: Color::Cyan,
                emphasis: Color::Yellow,
                operator: Color::Rgb(249, 115, 22),
                success: Color::Green,
                error: Color::Red,
                border_active: Color::Cyan,
                border_inactive: Color::DarkGray,
                selected_bg: Color::Yellow,
                selected_fg: Color::Black,
            },
            Self::Light => Palette {
                bg: Color::Rgb(245, 245, 240),
                bg_panel: Color::Rgb(230, 230, 225),
                fg_primary: Color::Black,
                fg_muted: Color::Gray,
                accent: Color::Blue,
                emphasis: Color::Rgb(180, 100, 0),
                operator: Color::Rgb(200, 80, 10),
                success: Color::Rgb(0, 130, 0),
                error: Color::Rgb(190, 20, 20),
                border_active: Color::Blue,
                border_inactive: Color::Gray,
                selected_bg: Color::Blue,
                selected_fg: Color::White,
            },
        }
    }
}

/// Core color palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Panel/dialog background
    pub bg_panel: Color,
    /// Default foreground text color
    pub fg_primary: Color,
    /// Secondary/muted text color
    pub fg_muted: Color,
    /// Primary accent - borders, titles, highlights
    pub accent: Color,
    /// Secondary accent - emphasis, pending-operation text
    pub emphasis: Color,
    /// Operator keys and expression text
    pub operator: Color,
    /// Success/positive feedback
    pub success: Color,
    /// Error/danger feedback
    pub error: Color,
    /// Active border color
    pub border_active: Color,
    /// Inactive/unfocused border color
    pub border_inactive: Color,
    /// Selected item highlight
    pub selected_bg: Color,
    /// Selected item text
    pub selected_fg: Color,
}

// Pre-built styles for common UI patterns. Use these instead of
// constructing styles inline for consistency.
impl Palette {
    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg_primary)
    }

    /// Muted/secondary text
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Main title style (accent, bold)
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.border_active)
    }

    /// Inactive border style
    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.border_inactive)
    }

    /// Screen background
    pub fn screen_bg(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Panel background
    pub fn panel_bg(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Selected/highlighted item
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected list item
    pub fn unselected(&self) -> Style {
        Style::default().fg(self.fg_primary)
    }

    /// The large current-operand readout
    pub fn display_value(&self) -> Style {
        Style::default()
            .fg(self.fg_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// The smaller pending-operation line above the readout
    pub fn display_pending(&self) -> Style {
        Style::default().fg(self.emphasis)
    }

    /// Digit keypad keys
    pub fn key(&self) -> Style {
        Style::default().fg(self.fg_primary)
    }

    /// Operator keypad keys
    pub fn key_operator(&self) -> Style {
        Style::default().fg(self.operator).add_modifier(Modifier::BOLD)
    }

    /// Clear/delete keypad keys
    pub fn key_control(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Expression text in the history list
    pub fn history_expression(&self) -> Style {
        Style::default().fg(self.operator)
    }

    /// Error message style
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Success message style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Navigation hint (keybindings) style
    pub fn nav_hint(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }
}
