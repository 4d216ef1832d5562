//! Key event handlers
//!
//! Keyboard handling organized by context: popups first, then the name
//! field or the wheel shortcuts depending on focus.

use crossterm::event::{KeyCode, KeyEvent};
use tui_logger::TuiWidgetEvent;

use crate::event::keys;
use crate::roulette::{svg, FrameOutcome};

use super::types::{AppState, FocusMode};

impl AppState {
    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if keys::is_interrupt(&key) {
            self.should_quit = true;
            return;
        }

        // Handle error dismissal first
        if self.error.is_some() {
            if keys::is_escape(&key) || keys::is_enter(&key) {
                self.error = None;
            }
            return;
        }

        // Handle help popup
        if self.show_help {
            if keys::is_escape(&key) || keys::is_char(&key, '?') {
                self.show_help = false;
            }
            return;
        }

        // Handle logs popup
        if self.show_logs {
            self.handle_logs_key(key);
            return;
        }

        match self.focus {
            FocusMode::Input => self.handle_input_key(key),
            FocusMode::Normal => self.handle_normal_key(key),
        }
    }

    /// Service due animation frames
    pub fn on_tick(&mut self) {
        for handle in self.frames.take_due() {
            match self.roulette.on_frame(handle, &mut self.frames) {
                FrameOutcome::Spinning { rotation } => log::trace!("Wheel at {:.1}°", rotation),
                FrameOutcome::Stopped { rotation, selected } => {
                    log::debug!("Wheel at rest at {:.1}°", rotation);
                    // Move the list cursor onto the winner
                    if selected.is_some() {
                        self.cursor.state.select(Some(self.roulette.selected_index()));
                        self.cursor.clamp(self.roulette.names().len());
                    }
                }
                FrameOutcome::Ignored => {}
            }
        }
    }

    /// Leave the screen: cancel pending frames
    pub fn teardown(&mut self) {
        self.roulette.teardown(&mut self.frames);
        debug_assert!(!self.frames.has_pending());
    }

    fn set_focus(&mut self, focus: FocusMode) {
        self.focus = focus;
        self.input.set_focused(focus == FocusMode::Input);
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if keys::is_escape(&key) || keys::is_tab(&key) {
            self.set_focus(FocusMode::Normal);
        } else if keys::is_enter(&key) {
            if self.input.value().is_empty() {
                self.spin();
            } else if !self.input.value().trim().is_empty() {
                self.add_from_input();
            }
        } else {
            self.input.handle_key(&key);
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let len = self.roulette.names().len();

        if keys::is_char(&key, 'q') {
            self.should_quit = true;
        } else if keys::is_char(&key, 'i') || keys::is_tab(&key) {
            self.set_focus(FocusMode::Input);
        } else if keys::is_char(&key, ' ') || keys::is_char(&key, 's') {
            self.spin();
        } else if keys::is_down(&key) {
            self.cursor.next(len);
        } else if keys::is_up(&key) {
            self.cursor.previous(len);
        } else if keys::is_char(&key, 'd') || keys::is_char(&key, 'x') || keys::is_delete(&key) {
            self.remove_selected();
        } else if keys::is_char(&key, 'e') {
            self.export_svg();
        } else if keys::is_char(&key, 'l') {
            self.show_logs = true;
        } else if keys::is_char(&key, '?') {
            self.show_help = true;
        }
    }

    fn handle_logs_key(&mut self, key: KeyEvent) {
        if keys::is_escape(&key) || keys::is_char(&key, 'l') {
            self.show_logs = false;
            return;
        }

        let event = match key.code {
            KeyCode::Char('h') => Some(TuiWidgetEvent::HideKey),
            KeyCode::Char('f') => Some(TuiWidgetEvent::FocusKey),
            KeyCode::Up => Some(TuiWidgetEvent::UpKey),
            KeyCode::Down => Some(TuiWidgetEvent::DownKey),
            KeyCode::Left | KeyCode::Char('<') => Some(TuiWidgetEvent::LeftKey),
            KeyCode::Right | KeyCode::Char('>') => Some(TuiWidgetEvent::RightKey),
            KeyCode::Char('-') => Some(TuiWidgetEvent::MinusKey),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(TuiWidgetEvent::PlusKey),
            KeyCode::PageUp => Some(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => Some(TuiWidgetEvent::NextPageKey),
            KeyCode::Char(' ') => Some(TuiWidgetEvent::SpaceKey),
            _ => None,
        };

        if let Some(evt) = event {
            self.logger_state.transition(evt);
        }
    }

    fn add_from_input(&mut self) {
        let text = self.input.take();
        if self.roulette.add(&text).is_some() {
            self.cursor.select_last(self.roulette.names().len());
        }
    }

    fn remove_selected(&mut self) {
        let Some(index) = self.cursor.selected() else {
            return;
        };
        let Some(id) = self.roulette.names().get(index).map(|e| e.id.clone()) else {
            return;
        };

        self.roulette.remove(&id);
        self.cursor.clamp(self.roulette.names().len());
    }

    fn spin(&mut self) {
        if !self.roulette.spin(&mut self.frames) {
            log::debug!(
                "Spin ignored: {} names, spinning={}",
                self.roulette.names().len(),
                self.roulette.is_spinning()
            );
        }
    }

    fn export_svg(&mut self) {
        match svg::export(&self.roulette, &self.export_path) {
            Ok(()) => log::info!("Exported wheel to {}", self.export_path.display()),
            Err(e) => {
                log::error!("{}", e);
                self.error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyModifiers;

    fn state() -> AppState {
        AppState::new(&Config::default())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_name(state: &mut AppState, name: &str) {
        for c in name.chars() {
            press(state, KeyCode::Char(c));
        }
        press(state, KeyCode::Enter);
    }

    fn run_until_stopped(state: &mut AppState) {
        let mut ticks = 0;
        while state.roulette.is_spinning() {
            state.on_tick();
            ticks += 1;
            assert!(ticks < 10_000);
        }
    }

    #[test]
    fn test_starts_in_input_mode() {
        let state = state();
        assert_eq!(state.focus, FocusMode::Input);
        assert!(state.input.is_focused());
    }

    #[test]
    fn test_enter_adds_and_clears_field() {
        let mut state = state();
        type_name(&mut state, "  Alice ");
        assert_eq!(state.roulette.names().len(), 1);
        assert_eq!(state.roulette.names().entries()[0].text, "Alice");
        assert_eq!(state.input.value(), "");
        assert_eq!(state.cursor.selected(), Some(0));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut state = state();
        type_name(&mut state, "   ");
        assert!(state.roulette.names().is_empty());
        assert!(!state.roulette.is_spinning());
    }

    #[test]
    fn test_whitespace_input_is_kept_and_does_not_spin() {
        let mut state = state();
        type_name(&mut state, "Alice");
        type_name(&mut state, "Bob");
        type_name(&mut state, "  ");
        assert_eq!(state.input.value(), "  ");
        assert_eq!(state.roulette.names().len(), 2);
        assert!(!state.roulette.is_spinning());
    }

    #[test]
    fn test_end_to_end_flow() {
        let mut state = state();
        type_name(&mut state, "Alice");
        type_name(&mut state, "Bob");
        assert_eq!(state.roulette.names().len(), 2);
        assert!(state.roulette.can_spin());

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.focus, FocusMode::Normal);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.roulette.is_spinning());

        // A second spin request while spinning changes nothing.
        press(&mut state, KeyCode::Char('s'));
        run_until_stopped(&mut state);
        assert!(state.roulette.selected_index() < 2);
        assert_eq!(state.cursor.selected(), Some(state.roulette.selected_index()));

        // Remove Alice.
        state.cursor.state.select(Some(0));
        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.roulette.names().len(), 1);
        assert_eq!(state.roulette.names().entries()[0].text, "Bob");
        assert!(!state.roulette.can_spin());
    }

    #[test]
    fn test_enter_on_empty_field_spins() {
        let mut state = state();
        type_name(&mut state, "Alice");
        type_name(&mut state, "Bob");
        press(&mut state, KeyCode::Enter);
        assert!(state.roulette.is_spinning());
    }

    #[test]
    fn test_typing_q_in_field_does_not_quit() {
        let mut state = state();
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        assert_eq!(state.input.value(), "q");

        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut state = state();
        state.show_help = true;
        state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(state.should_quit);
    }

    #[test]
    fn test_popups_toggle() {
        let mut state = state();
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('?'));
        assert!(state.show_help);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.show_help);
        press(&mut state, KeyCode::Esc);
        assert!(!state.show_help);

        press(&mut state, KeyCode::Char('l'));
        assert!(state.show_logs);
        press(&mut state, KeyCode::Char('l'));
        assert!(!state.show_logs);
    }

    #[test]
    fn test_remove_with_empty_list_is_noop() {
        let mut state = state();
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('d'));
        assert!(state.roulette.names().is_empty());
    }

    #[test]
    fn test_teardown_cancels_spin_frames() {
        let mut state = state();
        type_name(&mut state, "Alice");
        type_name(&mut state, "Bob");
        press(&mut state, KeyCode::Enter);
        assert!(state.frames.has_pending());

        state.teardown();
        assert!(!state.frames.has_pending());
    }

    #[test]
    fn test_export_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state();
        state.export_path = dir.path().join("wheel.svg");
        type_name(&mut state, "Alice");
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('e'));

        assert!(state.error.is_none());
        let svg = std::fs::read_to_string(&state.export_path).unwrap();
        assert!(svg.contains("Alice"));
    }

    #[test]
    fn test_export_failure_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state();
        state.export_path = dir.path().join("missing").join("wheel.svg");
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('e'));
        assert!(state.error.is_some());

        press(&mut state, KeyCode::Esc);
        assert!(state.error.is_none());
    }
}
