//! UI rendering module
//!
//! Contains all view rendering logic for the TUI.

mod controls;
mod entries;
mod header;
mod help;
mod logs;
mod wheel;

pub use controls::{render_input, render_spin_controls};
pub use entries::render_entries;
pub use header::render_header;
pub use help::render_help;
pub use logs::render_logs;
pub use wheel::WheelView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Areas of the main screen
pub struct MainLayout {
    pub header: Rect,
    pub wheel: Rect,
    pub input: Rect,
    pub entries: Rect,
    pub controls: Rect,
    pub footer: Rect,
}

/// Create a centered rect for popups
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Split the screen into header, wheel, side panel and footer
pub fn main_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Names
            Constraint::Length(5), // Spin button + notice
        ])
        .split(columns[1]);

    MainLayout {
        header: rows[0],
        wheel: columns[0],
        input: side[0],
        entries: side[1],
        controls: side[2],
        footer: rows[2],
    }
}

/// Render an error popup
pub fn render_error_popup(frame: &mut Frame, theme: &Theme, message: &str) {
    let area = centered_rect(60, 20, frame.area());

    let block = Block::default()
        .title(" Error ")
        .title_style(theme.error())
        .borders(Borders::ALL)
        .border_style(theme.error());

    let paragraph = Paragraph::new(message)
        .style(theme.text())
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Render the status bar / footer
pub fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect, hint: &str) {
    let footer = Paragraph::new(hint)
        .style(theme.key_desc())
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
