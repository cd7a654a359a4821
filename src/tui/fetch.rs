//! Off-thread execution of the single users fetch.

use super::events::Event;
use crate::client::UserSource;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Handle for one issued fetch.
///
/// Generations increase monotonically per list; only the result carrying the
/// latest generation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a ticket does nothing until it is passed to spawn_fetch"]
pub struct FetchTicket {
    pub generation: u64,
}

/// Run `source.fetch_users()` on a worker thread and post the outcome to `tx`.
///
/// There is no cancellation. If the receiving side is gone (the UI has shut
/// down) the result is dropped.
pub fn spawn_fetch(
    source: Arc<dyn UserSource>,
    ticket: FetchTicket,
    tx: Sender<Event>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        tracing::debug!(
            "fetch #{} started ({})",
            ticket.generation,
            source.name()
        );
        let result = source.fetch_users();
        let event = Event::Fetched {
            generation: ticket.generation,
            result,
        };
        if tx.send(event).is_err() {
            tracing::debug!(
                "fetch #{} settled after the UI closed; result dropped",
                ticket.generation
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StaticSource;
    use crate::model::fixtures::user;
    use std::sync::mpsc;

    #[test]
    fn test_spawn_fetch_posts_result() {
        let source = Arc::new(StaticSource::new(vec![user(1, "Ada", "Lovelace")]));
        let (tx, rx) = mpsc::channel();

        spawn_fetch(source.clone(), FetchTicket { generation: 4 }, tx)
            .join()
            .unwrap();

        match rx.recv().unwrap() {
            Event::Fetched { generation, result } => {
                assert_eq!(generation, 4);
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_spawn_fetch_with_closed_receiver() {
        let source = Arc::new(StaticSource::new(vec![]));
        let (tx, rx) = mpsc::channel();
        drop(rx);

        // Must not panic.
        spawn_fetch(source, FetchTicket { generation: 1 }, tx)
            .join()
            .unwrap();
    }
}
