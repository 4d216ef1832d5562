//! Name input, spin button and validation notice

use ratatui::{
    layout::Rect,
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::components::TextInput;
use crate::roulette::{Roulette, MIN_ENTRIES};
use crate::theme::{symbols, Theme};

const PLACEHOLDER: &str = "Enter a name";

/// Spin button label for the current state
pub fn spin_label(roulette: &Roulette) -> String {
    if roulette.is_spinning() {
        // Tie the spinner glyph to the wheel so it slows down with it.
        let frame = (roulette.rotation_degrees() / 30.0) as usize % symbols::SPINNER.len();
        format!("{} Spinning...", symbols::SPINNER[frame])
    } else {
        "Spin".to_string()
    }
}

/// Validation notice shown while too few names exist
pub fn notice_text(roulette: &Roulette) -> Option<String> {
    roulette
        .needs_more_entries()
        .then(|| format!("At least {} names are required to spin the roulette", MIN_ENTRIES))
}

/// Render the name input field
pub fn render_input(frame: &mut Frame, theme: &Theme, area: Rect, input: &TextInput) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if input.is_focused() {
            theme.border_focused()
        } else {
            theme.border()
        })
        .title(if input.is_focused() {
            " Add name (Enter to add, Esc to leave) "
        } else {
            " Press 'i' to add names "
        })
        .title_style(if input.is_focused() {
            theme.info()
        } else {
            theme.subtitle()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if input.value().is_empty() {
        let mut spans = Vec::new();
        if input.is_focused() {
            spans.push(Span::styled(" ", theme.cursor()));
        }
        spans.push(Span::styled(PLACEHOLDER, theme.text_muted()));
        Line::from(spans)
    } else if input.is_focused() {
        let (before, rest) = input.split_at_cursor();
        let mut chars = rest.chars();
        let cursor_char = chars.next().unwrap_or(' ');
        Line::from(vec![
            Span::styled(before, theme.input()),
            Span::styled(cursor_char.to_string(), theme.cursor()),
            Span::styled(chars.as_str(), theme.input()),
        ])
    } else {
        Line::from(Span::styled(input.value(), theme.text_muted()))
    };

    frame.render_widget(Paragraph::new(line), inner);
}

/// Render the spin button and, when needed, the minimum-entries notice
pub fn render_spin_controls(frame: &mut Frame, theme: &Theme, area: Rect, roulette: &Roulette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let style = if roulette.can_spin() {
        theme.button()
    } else {
        theme.button_disabled()
    };

    let button = Paragraph::new(Line::from(spin_label(roulette)))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, chunks[0]);

    if let Some(notice) = notice_text(roulette) {
        let notice = Paragraph::new(notice)
            .style(theme.error())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(notice, chunks[1]);
    }
}
