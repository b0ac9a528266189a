//! Change notifications emitted by the history store.

use std::sync::mpsc::{self, Receiver, Sender};

/// What changed in the history. Indices are positions in the list at
/// the time of the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    Added,
    Replaced { index: usize },
    Deleted { index: usize },
    Cleared,
    Imported { count: usize },
}

/// Fan-out of [`HistoryEvent`]s to any number of channel subscribers.
#[derive(Default)]
pub struct Notifier {
    subscribers: Vec<Sender<HistoryEvent>>,
}

impl Notifier {
    pub fn subscribe(&mut self) -> Receiver<HistoryEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Send `event` to every live subscriber; drops the ones whose
    /// receiver is gone.
    pub fn notify(&mut self, event: HistoryEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
