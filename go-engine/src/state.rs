use serde::{Deserialize, Serialize};

use crate::goban::{Captures, Goban};
use crate::stone::Stone;
use crate::turn::{Move, Turn};

/// What produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Move,
    Pass,
    /// Current state handed to a new subscriber or a state query.
    Sync,
}

impl From<Move> for EventKind {
    fn from(kind: Move) -> Self {
        match kind {
            Move::Play => EventKind::Move,
            Move::Pass => EventKind::Pass,
        }
    }
}

/// One occupied intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
    pub color: Stone,
}

/// Immutable snapshot of the game after a committed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Commit number: 0 for the opening position, +1 per accepted move or pass.
    pub seq: u64,
    pub kind: EventKind,
    pub size: u8,
    pub cells: Vec<Cell>,
    pub turn: Stone,
    pub captures: Captures,
    pub last: Option<Turn>,
    pub message: String,
}

impl GameState {
    pub(crate) fn capture(
        goban: &Goban,
        seq: u64,
        kind: EventKind,
        turn: Stone,
        last: Option<Turn>,
    ) -> Self {
        let cells = goban
            .stones()
            .map(|((x, y), color)| Cell { x, y, color })
            .collect();

        let message = match (kind, last) {
            (EventKind::Sync, _) | (_, None) => format!("{turn} to play"),
            (_, Some(t)) => t.describe(),
        };

        GameState {
            seq,
            kind,
            size: goban.size(),
            cells,
            turn,
            captures: *goban.captures(),
            last,
            message,
        }
    }

    pub fn stone_at(&self, x: u8, y: u8) -> Option<Stone> {
        self.cells
            .iter()
            .find(|c| c.x == x && c.y == y)
            .map(|c| c.color)
    }
}
