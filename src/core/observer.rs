//! In-process broadcast of newly added entries
//!
//! Replaces a global notification center with a bus owned by the store.
//! Callbacks run synchronously inside the `log` call; channel subscribers
//! receive a fire-and-forget copy.

use crossbeam_channel::{unbounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Event name observers can match on
pub const LOG_ADDED: &str = "logAdded";

/// Key under which the formatted text travels
pub const LOG_ADDED_KEY: &str = "log";

/// Event carrying the formatted text of the newest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAdded {
    pub log: String,
}

impl LogAdded {
    pub fn name(&self) -> &'static str {
        LOG_ADDED
    }

    /// Key/value view of the payload
    pub fn user_info(&self) -> (&'static str, &str) {
        (LOG_ADDED_KEY, &self.log)
    }
}

/// Callback invoked for every new entry
pub type LogObserver = Arc<dyn Fn(&LogAdded) + Send + Sync>;

/// Handle returned by subscribe, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Clone)]
enum Subscriber {
    Callback(LogObserver),
    Channel(Sender<LogAdded>),
}

#[derive(Default)]
pub struct ObserverBus {
    next_id: AtomicU64,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber)>>,
}

impl ObserverBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: LogObserver) -> SubscriptionId {
        let id = self.next_id();
        self.subscribers
            .write()
            .push((id, Subscriber::Callback(observer)));
        id
    }

    /// Subscribe with a channel; the receiver sees every event published
    /// after this call
    pub fn subscribe_channel(&self) -> (SubscriptionId, Receiver<LogAdded>) {
        let (sender, receiver) = unbounded();
        let id = self.next_id();
        self.subscribers
            .write()
            .push((id, Subscriber::Channel(sender)));
        (id, receiver)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }

    /// Deliver `event` to every subscriber in subscription order.
    ///
    /// The subscriber list is snapshotted first so a callback may subscribe,
    /// unsubscribe or log again without deadlocking.
    pub fn publish(&self, event: &LogAdded) {
        let snapshot = self.subscribers.read().clone();

        let mut disconnected = Vec::new();
        for (id, subscriber) in snapshot {
            match subscriber {
                Subscriber::Callback(callback) => callback(event),
                Subscriber::Channel(sender) => {
                    if let Err(TrySendError::Disconnected(_)) = sender.try_send(event.clone()) {
                        disconnected.push(id);
                    }
                }
            }
        }

        if !disconnected.is_empty() {
            self.subscribers
                .write()
                .retain(|(id, _)| !disconnected.contains(id));
        }
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Debug for ObserverBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverBus")
            .field("subscribers", &self.len())
            .finish()
    }
}
