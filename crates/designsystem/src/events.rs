//! Change notifications published by the token store.

use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::store::Category;

/// Structural or field change applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEvent {
    /// A token was inserted.
    Added {
        /// Category of the token.
        category: Category,
        /// Name of the new token.
        key: String,
    },
    /// A token changed its name.
    Renamed {
        /// Category of the token.
        category: Category,
        /// Previous name.
        from: String,
        /// New name.
        to: String,
    },
    /// A single field of a token changed.
    Updated {
        /// Category of the token.
        category: Category,
        /// Name of the token.
        key: String,
        /// Field that changed.
        field: &'static str,
    },
    /// A token was removed.
    Deleted {
        /// Category of the token.
        category: Category,
        /// Name of the removed token.
        key: String,
    },
    /// A token was copied under a new name.
    Duplicated {
        /// Category of the token.
        category: Category,
        /// Name of the source token.
        from: String,
        /// Name of the copy.
        to: String,
    },
    /// The whole store was replaced with the built-in defaults.
    Reset,
}

/// Publish/subscribe bus that fans events out to every live subscriber.
#[derive(Debug, Clone)]
pub struct ChangeBus<T: Clone + Send + 'static> {
    subscribers: Arc<Mutex<Vec<Sender<T>>>>,
}

impl<T: Clone + Send + 'static> Default for ChangeBus<T> {
    fn default() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone + Send + 'static> ChangeBus<T> {
    /// Constructs a bus without subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new subscriber and returns a receiver that yields events.
    pub fn subscribe(&self) -> Receiver<T> {
        let (tx, rx) = unbounded();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Broadcasts an event, dropping subscribers whose receiver is gone.
    pub fn publish(&self, event: T) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
