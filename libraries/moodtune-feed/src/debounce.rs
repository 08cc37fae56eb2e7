//! Debounced search input.
//!
//! Keystrokes are pushed as they happen; the committed value is emitted once
//! the input has been quiet for the debounce delay. Every keystroke restarts
//! the timer.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Default quiet period before a search value is committed
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
enum InputEvent {
    Keystroke(String),
    Cancel,
}

/// Sending half of a debouncer.
///
/// Dropping every `SearchInput` stops the debouncer; a value still waiting
/// for its timer is discarded.
#[derive(Debug, Clone)]
pub struct SearchInput {
    tx: mpsc::UnboundedSender<InputEvent>,
}

impl SearchInput {
    /// Record the current raw contents of the search box.
    ///
    /// Returns `false` if the debouncer has stopped.
    pub fn push(&self, text: impl Into<String>) -> bool {
        self.tx.send(InputEvent::Keystroke(text.into())).is_ok()
    }

    /// Forget any pending value without emitting it.
    pub fn cancel(&self) -> bool {
        self.tx.send(InputEvent::Cancel).is_ok()
    }
}

/// Spawned debounce task.
pub struct SearchDebouncer {
    handle: JoinHandle<()>,
}

impl SearchDebouncer {
    /// Start a debouncer on the current runtime.
    ///
    /// Committed values (trimmed) arrive on the returned receiver.
    pub fn spawn(delay: Duration) -> (Self, SearchInput, mpsc::UnboundedReceiver<String>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(run(delay, input_rx, output_tx));

        (Self { handle }, SearchInput { tx: input_tx }, output_rx)
    }

    /// Stop immediately, dropping anything pending.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run(
    delay: Duration,
    mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
    output_tx: mpsc::UnboundedSender<String>,
) {
    let mut pending: Option<String> = None;
    let timer = tokio::time::sleep(delay);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            event = input_rx.recv() => match event {
                Some(InputEvent::Keystroke(text)) => {
                    pending = Some(text);
                    timer.as_mut().reset(Instant::now() + delay);
                }
                Some(InputEvent::Cancel) => {
                    pending = None;
                }
                None => break,
            },
            () = &mut timer, if pending.is_some() => {
                if let Some(text) = pending.take() {
                    let value = text.trim().to_string();
                    debug!(value = %value, "Search input settled");
                    if output_tx.send(value).is_err() {
                        break;
                    }
                }
            }
        }
    }
}
