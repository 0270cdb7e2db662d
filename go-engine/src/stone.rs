use serde::{Deserialize, Serialize};
use std::fmt;

/// A stone color. Also identifies the two seats and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    #[serde(rename = "B", alias = "black", alias = "Black")]
    Black,
    #[serde(rename = "W", alias = "white", alias = "White")]
    White,
}

impl Stone {
    /// Decode a board cell value. Zero is an empty intersection.
    pub fn from_int(v: i8) -> Option<Self> {
        match v.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn to_int(self) -> i8 {
        match self {
            Stone::Black => 1,
            Stone::White => -1,
        }
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}
