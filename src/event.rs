//! src/event.rs

use crate::error::{AppError, AppResult};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Terminal events (user input and resizes).
#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

pub struct EventHandler {
    input_rx: mpsc::UnboundedReceiver<InputEvent>,
    _input_handle: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (input_tx, input_rx) = mpsc::unbounded_channel();

        let input_handle = tokio::spawn(async move {
            loop {
                if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if input_tx.send(InputEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            if input_tx.send(InputEvent::Resize(width, height)).is_err() {
                                break;
                            }
                        }
                        _ => {} // Mouse and focus events are ignored.
                    }
                } else if input_tx.send(InputEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self {
            input_rx,
            _input_handle: input_handle,
        }
    }

    pub async fn next(&mut self) -> AppResult<InputEvent> {
        self.input_rx
            .recv()
            .await
            .ok_or(AppError::EventChannelClosed)
    }
}
