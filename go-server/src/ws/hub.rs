use std::collections::HashMap;
use std::sync::Arc;

use go_engine::GameState;
use parking_lot::Mutex;
use tokio::sync::mpsc;

pub type EventSender = mpsc::UnboundedSender<Arc<GameState>>;

#[derive(Debug, Default)]
struct Subscribers {
    /// Map of subscriber id -> delivery queue.
    senders: HashMap<u64, EventSender>,
    next_id: u64,
}

/// Fan-out of game snapshots to every subscribed listener.
///
/// Each listener owns an unbounded queue, so a slow consumer never holds up
/// `publish` or the other listeners. Callers must serialize `publish` calls
/// themselves if they need a single global order (the game room does so by
/// publishing inside its transaction).
#[derive(Debug, Clone, Default)]
pub struct Hub {
    subscribers: Arc<Mutex<Subscribers>>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener queue.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut subs = self.subscribers.lock();
        let id = subs.next_id;
        subs.next_id += 1;
        subs.senders.insert(id, tx);

        Subscription {
            id,
            rx,
            hub: self.clone(),
        }
    }

    /// Remove a listener queue. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: u64) -> bool {
        self.subscribers.lock().senders.remove(&id).is_some()
    }

    /// Push `state` onto every registered queue. Returns how many queues took it.
    ///
    /// The registry lock is held only long enough to copy the senders; queues
    /// whose receiver has gone away are pruned afterwards.
    pub fn publish(&self, state: Arc<GameState>) -> usize {
        let senders: Vec<(u64, EventSender)> = {
            let subs = self.subscribers.lock();
            subs.senders
                .iter()
                .map(|(&id, tx)| (id, tx.clone()))
                .collect()
        };

        let mut delivered = 0;
        let mut closed = Vec::new();
        for (id, tx) in senders {
            if tx.send(Arc::clone(&state)).is_ok() {
                delivered += 1;
            } else {
                closed.push(id);
            }
        }

        if !closed.is_empty() {
            let mut subs = self.subscribers.lock();
            for id in closed {
                subs.senders.remove(&id);
            }
        }

        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().senders.len()
    }
}

/// A listener's end of the hub. Dropping it deregisters the queue.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    rx: mpsc::UnboundedReceiver<Arc<GameState>>,
    hub: Hub,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Wait for the next snapshot. `None` once the hub has dropped this queue.
    pub async fn recv(&mut self) -> Option<Arc<GameState>> {
        self.rx.recv().await
    }

    /// Take the next snapshot if one is already queued.
    pub fn try_recv(&mut self) -> Option<Arc<GameState>> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}
