//! Event handling for the TUI
//!
//! Manages keyboard input, terminal events, and frame ticks
//! using an async channel-based architecture.

use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, error::TryRecvError};

/// Events that can occur in the application
#[derive(Debug, Clone)]
pub enum Event {
    /// Frame tick, drives the wheel animation
    Tick,
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize,
    /// Error occurred
    Error(String),
}

/// Map a terminal event onto an app event. Key releases and repeats are dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

/// Event handler that manages terminal events
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
    /// Stop signal sender, dropping it also stops the poller
    stop_tx: Option<mpsc::Sender<()>>,
}

impl EventHandler {
    /// Create a new event handler emitting a tick every `frame_interval`
    pub fn new(frame_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);

        tokio::spawn(async move {
            let mut last_tick = Instant::now();
            loop {
                match stop_rx.try_recv() {
                    Ok(()) | Err(TryRecvError::Disconnected) => break,
                    Err(TryRecvError::Empty) => {}
                }

                let timeout = frame_interval.saturating_sub(last_tick.elapsed());
                if event::poll(timeout).unwrap_or(false) {
                    let event = match event::read() {
                        Ok(event) => translate(event),
                        Err(e) => {
                            let _ = tx.send(Event::Error(e.to_string()));
                            break;
                        }
                    };
                    if let Some(event) = event {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= frame_interval {
                    last_tick = Instant::now();
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
            log::debug!("Event poller stopped");
        });

        Self {
            rx,
            stop_tx: Some(stop_tx),
        }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| color_eyre::eyre::eyre!("Event channel closed"))
    }

    /// Stop polling the terminal
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.try_send(());
        }
    }
}


/// Key bindings configuration
pub mod keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Check if key is Ctrl+C
    pub fn is_interrupt(key: &KeyEvent) -> bool {
        is_ctrl_char(key, 'c')
    }

    /// Check if key is escape
    pub fn is_escape(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Esc,
                ..
            }
        )
    }

    /// Check if key is enter
    pub fn is_enter(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Check if key is tab
    pub fn is_tab(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Tab | KeyCode::BackTab,
                ..
            }
        )
    }

    /// Check if key is up arrow or k
    pub fn is_up(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Up | KeyCode::Char('k'),
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Check if key is down arrow or j
    pub fn is_down(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Down | KeyCode::Char('j'),
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Check if key is left arrow
    pub fn is_left(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Left,
                ..
            }
        )
    }

    /// Check if key is right arrow
    pub fn is_right(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Right,
                ..
            }
        )
    }

    /// Check if key is home
    pub fn is_home(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Home,
                ..
            }
        )
    }

    /// Check if key is end
    pub fn is_end(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::End,
                ..
            }
        )
    }

    /// Check if key is backspace
    pub fn is_backspace(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Backspace,
                ..
            }
        )
    }

    /// Check if key is delete
    pub fn is_delete(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Delete,
                ..
            }
        )
    }

    /// Check for specific character (handles both with and without shift for case-sensitive matching)
    pub fn is_char(key: &KeyEvent, c: char) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char(ch),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } if *ch == c
        )
    }

    /// Check for character with ctrl modifier
    pub fn is_ctrl_char(key: &KeyEvent, c: char) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char(ch),
                modifiers: KeyModifiers::CONTROL,
                ..
            } if *ch == c
        )
    }

    /// Get the character if it's a printable character
    pub fn get_char(key: &KeyEvent) -> Option<char> {
        if let KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } = key
        {
            Some(*c)
        } else {
            None
        }
    }

}
