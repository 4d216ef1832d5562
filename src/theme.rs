//! Theme and styling for the roulette
//!
//! Dark chrome around a light wheel. Wedge colors follow the classic
//! pale-blue / white alternation with a pale-yellow winner.

use ratatui::style::{Color, Modifier, Style};

/// Wheel palette
pub mod wheel {
    use ratatui::style::Color;

    /// Even wedges - #f0f9ff
    pub const EVEN: Color = Color::Rgb(240, 249, 255);

    /// Odd wedges - white
    pub const ODD: Color = Color::Rgb(255, 255, 255);

    /// Winning wedge - #fef9c3
    pub const WINNER: Color = Color::Rgb(254, 249, 195);

    /// Wedge borders - #e5e7eb
    pub const BORDER: Color = Color::Rgb(229, 231, 235);

    /// Fixed pointer
    pub const POINTER: Color = Color::Rgb(239, 68, 68);

    /// Labels and center dot
    pub const INK: Color = Color::Rgb(0, 0, 0);
}

/// Application color palette
pub struct Theme {
    // Primary colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,

    // Background colors
    pub bg_dark: Color,
    pub bg_light: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Status colors
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Special colors
    pub border: Color,
    pub border_focused: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(34, 197, 94),    // Spin button green
            secondary: Color::Rgb(59, 130, 246), // Add button blue
            accent: wheel::WINNER,

            bg_dark: Color::Rgb(17, 24, 39),
            bg_light: Color::Rgb(55, 65, 81),

            text_primary: Color::Rgb(243, 244, 246),
            text_secondary: Color::Rgb(209, 213, 219),
            text_muted: Color::Rgb(156, 163, 175),

            warning: Color::Rgb(250, 204, 21),
            error: wheel::POINTER,
            info: Color::Rgb(59, 130, 246),

            border: Color::Rgb(75, 85, 99),
            border_focused: Color::Rgb(59, 130, 246),
            disabled: Color::Rgb(209, 213, 219),
        }
    }
}

impl Theme {
    /// Create a new theme
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    // Style builders
    // ─────────────────────────────────────────────────────────────

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary accent style
    pub fn primary(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Subtitle style
    pub fn subtitle(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    /// Block border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Block border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Selected item in a list
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.bg_light)
            .add_modifier(Modifier::BOLD)
    }

    /// Winning entry in the list
    pub fn winner(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(wheel::INK)
            .add_modifier(Modifier::BOLD)
    }

    /// Warning status
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Error status
    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Info status
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Key hint style
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Key description style
    pub fn key_desc(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Input field style
    pub fn input(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Input cursor style
    pub fn cursor(&self) -> Style {
        Style::default().bg(self.secondary).fg(self.bg_dark)
    }

    /// Spin button, enabled
    pub fn button(&self) -> Style {
        Style::default()
            .bg(self.primary)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Spin button, disabled
    pub fn button_disabled(&self) -> Style {
        Style::default()
            .bg(self.disabled)
            .fg(self.text_muted)
            .add_modifier(Modifier::BOLD)
    }

    /// Label drawn on top of a wedge
    pub fn wedge_label(&self, fill: Color) -> Style {
        Style::default().fg(wheel::INK).bg(fill)
    }
}

/// Symbols for consistent UI
pub mod symbols {
    pub const ARROW_RIGHT: &str = "→";
    pub const CROSS_MARK: &str = "×";
    pub const STAR: &str = "★";
    pub const ELLIPSIS: char = '…';

    pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
}
