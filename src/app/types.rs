//! Application types and state definitions

use std::path::PathBuf;

use tui_logger::TuiWidgetState;

use crate::animation::FrameScheduler;
use crate::components::{ListCursor, TextInput};
use crate::config::Config;
use crate::roulette::Roulette;

/// Focus mode for input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    /// Wheel and list shortcuts are active
    Normal,
    /// Keys go to the name field
    Input,
}

/// Everything the screen shows, minus the terminal itself
pub struct AppState {
    /// The wheel and its names
    pub roulette: Roulette,
    /// Pending animation frames
    pub frames: FrameScheduler,
    /// Where keys are routed
    pub focus: FocusMode,
    /// Name field
    pub input: TextInput,
    /// Selection in the names list
    pub cursor: ListCursor,
    /// Show help popup
    pub show_help: bool,
    /// Show logs popup
    pub show_logs: bool,
    /// tui-logger widget state
    pub logger_state: TuiWidgetState,
    /// Error message
    pub error: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// SVG export target
    pub export_path: PathBuf,
    /// Longest wedge label
    pub label_width: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut input = TextInput::new();
        input.set_focused(true);

        Self {
            roulette: Roulette::new(),
            frames: FrameScheduler::new(),
            focus: FocusMode::Input,
            input,
            cursor: ListCursor::new(),
            show_help: false,
            show_logs: false,
            logger_state: TuiWidgetState::new(),
            error: None,
            should_quit: false,
            export_path: config.export_path.clone(),
            label_width: config.label_width,
        }
    }

    /// Contextual footer hint
    pub fn footer_hint(&self) -> &'static str {
        if self.show_help {
            return "Press ? or Esc to close help";
        }

        if self.show_logs {
            return "h:targets | f:focus | +/-:capture | </>:show | PgUp/Dn:scroll | l/Esc:close";
        }

        if self.error.is_some() {
            return "Press Esc to dismiss error";
        }

        match self.focus {
            FocusMode::Input => "Enter: add | Enter on empty: spin | Esc: done | Ctrl+C: quit",
            FocusMode::Normal => {
                "i: add | Space: spin | ↑↓: select | d: remove | e: export | l: logs | ?: help | q: quit"
            }
        }
    }
}
