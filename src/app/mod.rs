//! Application state and main event loop
//!
//! Follows the Elm Architecture (TEA) pattern:
//! - Model: AppState
//! - Update: handlers.rs
//! - View: render() method

mod handlers;
mod types;

pub use types::{AppState, FocusMode};

use color_eyre::Result;

use crate::config::Config;
use crate::event::{Event, EventHandler};
use crate::theme::Theme;
use crate::tui::{self, Tui};
use crate::ui;

/// Main application
pub struct App {
    /// Terminal instance
    terminal: Tui,

    /// Event handler
    events: EventHandler,

    /// Theme
    theme: Theme,

    /// Application state
    pub state: AppState,
}

impl App {
    /// Create a new application
    pub fn new() -> Result<Self> {
        let config = Config::load();
        log::info!(
            "Frame interval {}ms, exporting to {}",
            config.frame_interval_ms,
            config.export_path.display()
        );

        let terminal = tui::init()?;
        let events = EventHandler::new(config.frame_interval());

        Ok(Self {
            terminal,
            events,
            theme: Theme::new(),
            state: AppState::new(&config),
        })
    }

    /// Main run loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state.should_quit {
            self.render()?;

            match self.events.next().await? {
                Event::Tick => self.state.on_tick(),
                Event::Key(key) => self.state.handle_key(key),
                Event::Resize => {
                    // Redrawn on the next iteration
                }
                Event::Error(e) => {
                    log::error!("Terminal event error: {}", e);
                    self.state.error = Some(e);
                }
            }
        }

        // Cleanup
        self.state.teardown();
        self.events.stop();
        tui::restore()?;

        Ok(())
    }

    /// Render the UI
    fn render(&mut self) -> Result<()> {
        let theme = &self.theme;
        let state = &mut self.state;
        let hint = state.footer_hint();

        self.terminal.draw(|frame| {
            let layout = ui::main_layout(frame.area());

            ui::render_header(frame, theme, layout.header, &state.roulette);

            frame.render_widget(
                ui::WheelView::new(&state.roulette, theme).label_width(state.label_width),
                layout.wheel,
            );

            ui::render_input(frame, theme, layout.input, &state.input);
            ui::render_entries(
                frame,
                theme,
                layout.entries,
                &state.roulette,
                &mut state.cursor,
                state.focus == FocusMode::Normal,
            );
            ui::render_spin_controls(frame, theme, layout.controls, &state.roulette);

            ui::render_footer(frame, theme, layout.footer, hint);

            if state.show_help {
                ui::render_help(frame, theme);
            }

            if state.show_logs {
                ui::render_logs(frame, theme, &state.logger_state);
            }

            if let Some(ref error) = state.error {
                ui::render_error_popup(frame, theme, error);
            }
        })?;

        Ok(())
    }
}
