pub mod engine;
pub mod error;
pub mod goban;
pub mod seats;
pub mod state;
pub mod stone;
pub mod turn;

/// `(x, y)` with the origin at the top-left intersection.
pub type Point = (u8, u8);

pub use engine::Engine;
pub use error::GoError;
pub use goban::{Captures, Goban};
pub use seats::Seats;
pub use state::{Cell, EventKind, GameState};
pub use stone::Stone;
pub use turn::{Move, Turn};
