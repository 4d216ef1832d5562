//! Entry list rendering

use ratatui::{
    layout::Rect,
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::components::ListCursor;
use crate::roulette::Roulette;
use crate::theme::{symbols, Theme};

/// Render the list of names with the winner highlighted
pub fn render_entries(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    roulette: &Roulette,
    cursor: &mut ListCursor,
    focused: bool,
) {
    let entries = roulette.names().entries();
    let winner = roulette.winner_index();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused()
        } else {
            theme.border()
        })
        .title(format!(" Names ({}) ", entries.len()))
        .title_style(theme.title());

    if roulette.names().is_empty() {
        let empty = Paragraph::new("No names yet")
            .style(theme.text_muted())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected = cursor.selected();
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_winner = winner == Some(i);

            let prefix = if focused && selected == Some(i) {
                format!("{} ", symbols::ARROW_RIGHT)
            } else {
                "  ".to_string()
            };

            let name_style = if is_winner { theme.winner() } else { theme.text() };
            let mut spans = vec![
                Span::styled(prefix, theme.primary()),
                Span::styled(format!(" {} ", entry.text), name_style),
            ];
            if is_winner {
                spans.push(Span::styled(format!(" {}", symbols::STAR), theme.warning()));
            }
            spans.push(Span::styled(format!(" {}", symbols::CROSS_MARK), theme.error()));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(if focused {
        theme.selected()
    } else {
        Style::default()
    });

    frame.render_stateful_widget(list, area, &mut cursor.state);
}
