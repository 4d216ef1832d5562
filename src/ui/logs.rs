//! Log viewer popup rendering using tui-logger

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetState};

use crate::theme::Theme;
use crate::ui::centered_rect;

/// Render the logs popup using TuiLoggerSmartWidget
pub fn render_logs(frame: &mut Frame, theme: &Theme, logger_state: &TuiWidgetState) {
    let area = centered_rect(85, 80, frame.area());

    frame.render_widget(Clear, area);

    // Move events from hot buffer to widget buffer
    tui_logger::move_events();

    let logger_widget = TuiLoggerSmartWidget::default()
        .style_error(theme.error())
        .style_warn(theme.warning())
        .style_info(theme.info())
        .style_debug(theme.text_muted())
        .style_trace(theme.text_muted())
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .title_log(" Messages ")
        .title_target(" Targets ")
        .border_style(theme.border())
        .border_type(BorderType::Rounded)
        .highlight_style(theme.selected())
        .state(logger_state);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .border_type(BorderType::Rounded)
        .title(" Logs (h:targets | PgUp/Dn:scroll | l/Esc:close) ")
        .title_style(theme.title());

    let inner = outer_block.inner(area);
    frame.render_widget(outer_block, area);
    frame.render_widget(logger_widget, inner);
}
