//! Help popup rendering

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Theme;
use crate::ui::centered_rect;

/// Render the help popup
pub fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());

    // Clear background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .title(" Help - Keyboard Shortcuts ")
        .title_style(theme.title());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = vec![
        (
            "Global",
            vec![
                ("Ctrl+C", "Quit application"),
                ("Esc", "Close popup / leave input"),
            ],
        ),
        (
            "Adding Names",
            vec![
                ("i / Tab", "Focus the name field"),
                ("Enter", "Add name (spin if the field is empty)"),
                ("Ctrl+U", "Clear the field"),
                ("Ctrl+W", "Delete previous word"),
            ],
        ),
        (
            "Wheel",
            vec![
                ("Space / s", "Spin"),
                ("j / ↓", "Next name"),
                ("k / ↑", "Previous name"),
                ("d / x / Del", "Remove selected name"),
                ("e", "Export wheel as SVG"),
                ("l", "View application logs"),
                ("?", "Toggle help"),
                ("q", "Quit"),
            ],
        ),
    ];

    let mut lines: Vec<Line> = Vec::new();

    for (section_title, keys) in sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {} ", section_title),
            theme.title(),
        )));
        lines.push(Line::from(Span::styled(" ─".repeat(24), theme.text_muted())));

        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:14}", key), theme.key_hint()),
                Span::styled(desc, theme.text_secondary()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press ? or Esc to close ",
        theme.text_muted(),
    )));

    let help_para = Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true });

    frame.render_widget(help_para, inner);
}
