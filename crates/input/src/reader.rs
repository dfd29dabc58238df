//! Blocking terminal key reader.
//!
//! crossterm's reads block, so they run on a dedicated thread that forwards
//! mapped signals to the async event loop over a tokio channel.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::mpsc;

use crate::map::{map_key, InputSignal};

/// How long one poll waits before checking whether the receiver is gone.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Translate one terminal event into a signal for the event loop.
pub fn translate(event: Event) -> Option<InputSignal> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(_, _) => Some(InputSignal::Resize),
        _ => None,
    }
}

/// Spawn the reader thread.
///
/// The thread ends when the receiving side is dropped, after forwarding a
/// `Quit`, or on a terminal read error.
pub fn spawn_key_reader(tx: mpsc::Sender<InputSignal>) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("blockfall-keys".into())
        .spawn(move || read_loop(tx))
}

fn read_loop(tx: mpsc::Sender<InputSignal>) {
    while !tx.is_closed() {
        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                tracing::error!(%err, "terminal poll failed");
                break;
            }
        }

        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                tracing::error!(%err, "terminal read failed");
                break;
            }
        };

        let Some(signal) = translate(event) else {
            continue;
        };
        tracing::trace!(?signal, "key");

        if tx.blocking_send(signal).is_err() || signal == InputSignal::Quit {
            break;
        }
    }
}
