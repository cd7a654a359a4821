//! Terminal and fetch events feeding the UI loop.

use crate::error::Result;
use crate::model::UserRecord;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Everything the UI loop reacts to.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// A fetch worker settled
    Fetched {
        generation: u64,
        result: Result<Vec<UserRecord>>,
    },
}

/// Reads terminal input on a background thread and merges it with fetch
/// results into one channel.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
}

impl EventHandler {
    /// Start the input thread; a `Tick` is sent whenever `tick_rate` passes
    /// without input.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                    Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                    Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                    _ => None,
                };
                if let Some(ev) = forwarded {
                    if event_tx.send(ev).is_err() {
                        break;
                    }
                }
            } else if event_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    /// Sender for fetch workers.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    /// Block until the next event.
    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}
