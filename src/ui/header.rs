//! Header rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::roulette::Roulette;
use crate::theme::{symbols, Theme};

/// Application version, overridable at build time
const VERSION: &str = match option_env!("APP_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Commit the binary was built from, if known
const COMMIT: Option<&str> = option_env!("APP_COMMIT");

fn version_label() -> String {
    match COMMIT {
        Some(commit) => {
            let short: String = commit.chars().take(7).collect();
            format!("v{} ({})", VERSION, short)
        }
        None => format!("v{}", VERSION),
    }
}

/// Render the title bar with the last winner
pub fn render_header(frame: &mut Frame, theme: &Theme, area: Rect, roulette: &Roulette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Name Roulette ", theme.title()),
        Span::styled(version_label(), theme.text_muted()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    frame.render_widget(title, chunks[0]);

    let status = match roulette.winner() {
        Some(entry) => Line::from(vec![
            Span::styled(format!("{} ", symbols::STAR), theme.warning()),
            Span::styled(entry.text.as_str(), theme.text()),
        ]),
        None if roulette.is_spinning() => {
            Line::from(Span::styled("Spinning...", theme.text_secondary()))
        }
        None => Line::from(Span::styled("-", theme.text_muted())),
    };

    let status = Paragraph::new(status)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(" Winner ")
                .title_style(theme.subtitle()),
        );
    frame.render_widget(status, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_label() {
        let label = version_label();
        match COMMIT {
            Some(commit) => {
                let short: String = commit.chars().take(7).collect();
                assert_eq!(label, format!("v{} ({})", VERSION, short));
            }
            None => assert_eq!(label, format!("v{}", VERSION)),
        }
    }
}
