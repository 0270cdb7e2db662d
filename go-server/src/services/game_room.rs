use std::sync::Arc;

use go_engine::{Engine, GameState, GoError, Point, Seats, Stone};
use parking_lot::Mutex;

use crate::ws::hub::{Hub, Subscription};

/// Everything a join, move or pass may touch. Guarded by one lock.
#[derive(Debug)]
struct Table {
    engine: Engine,
    seats: Seats,
}

/// The single game hosted by this process.
///
/// Joins, moves and passes are serialized on the table lock. Accepted
/// moves and passes are published to the hub before the lock is released,
/// so every subscriber sees snapshots in commit order.
#[derive(Debug)]
pub struct GameRoom {
    table: Mutex<Table>,
    hub: Hub,
}

impl GameRoom {
    pub fn new(board_size: u8) -> Self {
        GameRoom {
            table: Mutex::new(Table {
                engine: Engine::new(board_size),
                seats: Seats::new(),
            }),
            hub: Hub::new(),
        }
    }

    /// Seat `identity`, returning its color. `None` when both seats are taken.
    pub fn join(&self, identity: &str) -> Option<Stone> {
        let mut table = self.table.lock();
        let seat = table.seats.join(identity);
        match seat {
            Some(stone) => tracing::info!("{identity} seated as {stone}"),
            None => tracing::warn!("{identity} turned away: no seat available"),
        }
        seat
    }

    pub fn play_move(&self, x: i64, y: i64, stone: Stone) -> Result<Arc<GameState>, GoError> {
        let point = to_point(x, y).ok_or(GoError::NotOnBoard)?;

        let mut table = self.table.lock();
        match table.engine.try_play(stone, point) {
            Ok(state) => Ok(self.publish(state)),
            Err(e) => {
                tracing::debug!("Rejected {stone} at ({x},{y}): {e}");
                Err(e)
            }
        }
    }

    pub fn pass_turn(&self, stone: Stone) -> Result<Arc<GameState>, GoError> {
        let mut table = self.table.lock();
        match table.engine.try_pass(stone) {
            Ok(state) => Ok(self.publish(state)),
            Err(e) => {
                tracing::debug!("Rejected pass by {stone}: {e}");
                Err(e)
            }
        }
    }

    /// Register a listener and return the position it starts from.
    ///
    /// Registration and snapshot happen under the table lock, so the first
    /// event the subscription yields is the commit right after the snapshot.
    pub fn subscribe(&self) -> (GameState, Subscription) {
        let table = self.table.lock();
        let subscription = self.hub.subscribe();
        let snapshot = table.engine.snapshot();
        tracing::info!(
            "Subscriber {} registered at seq {}",
            subscription.id(),
            snapshot.seq
        );
        (snapshot, subscription)
    }

    pub fn snapshot(&self) -> GameState {
        self.table.lock().engine.snapshot()
    }

    pub fn color_of(&self, identity: &str) -> Option<Stone> {
        self.table.lock().seats.color_of(identity)
    }

    pub fn subscriber_count(&self) -> usize {
        self.hub.subscriber_count()
    }

    // Called with the table lock held.
    fn publish(&self, state: GameState) -> Arc<GameState> {
        let state = Arc::new(state);
        let delivered = self.hub.publish(Arc::clone(&state));
        tracing::info!(
            "#{} {} ({delivered} subscriber(s))",
            state.seq,
            state.message
        );
        state
    }
}

fn to_point(x: i64, y: i64) -> Option<Point> {
    Some((u8::try_from(x).ok()?, u8::try_from(y).ok()?))
}
