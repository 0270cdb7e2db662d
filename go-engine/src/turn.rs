use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play,
    Pass,
}

/// A committed action: who did what, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub kind: Move,
    pub stone: Stone,
    pub pos: Option<Point>,
}

impl Turn {
    pub fn play(stone: Stone, point: Point) -> Self {
        Turn {
            kind: Move::Play,
            stone,
            pos: Some(point),
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            kind: Move::Pass,
            stone,
            pos: None,
        }
    }

    /// Human-readable line for the event stream, e.g. "Black played at (4,4)".
    pub fn describe(&self) -> String {
        match (self.kind, self.pos) {
            (Move::Play, Some((x, y))) => format!("{} played at ({x},{y})", self.stone),
            (Move::Play, None) => format!("{} played", self.stone),
            (Move::Pass, _) => format!("{} passed", self.stone),
        }
    }
}
