//! Change notification from the explorer to its host.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// "The whole tree may have changed; query it again from the root."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeChanged;

/// Broadcasts [`TreeChanged`] to every live subscriber.
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    subscribers: Mutex<Vec<Sender<TreeChanged>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<TreeChanged> {
        let (tx, rx) = mpsc::channel();
        self.lock().push(tx);
        rx
    }

    /// Notify all subscribers. Subscribers whose receiver was dropped are
    /// removed. Returns how many were notified.
    pub fn fire(&self) -> usize {
        let mut subscribers = self.lock();
        subscribers.retain(|tx| tx.send(TreeChanged).is_ok());
        debug!("Tree change delivered to {} subscriber(s)", subscribers.len());
        subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Sender<TreeChanged>>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
