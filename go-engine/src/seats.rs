use crate::stone::Stone;

/// The two color seats of a game. Black is handed out first.
///
/// A seat, once taken, belongs to that identity for the life of the game.
#[derive(Debug, Clone, Default)]
pub struct Seats {
    black: Option<String>,
    white: Option<String>,
}

impl Seats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat `identity`, or return the seat it already holds.
    /// `None` when both seats belong to other identities.
    pub fn join(&mut self, identity: &str) -> Option<Stone> {
        if let Some(stone) = self.color_of(identity) {
            return Some(stone);
        }

        if self.black.is_none() {
            self.black = Some(identity.to_string());
            Some(Stone::Black)
        } else if self.white.is_none() {
            self.white = Some(identity.to_string());
            Some(Stone::White)
        } else {
            None
        }
    }

    pub fn color_of(&self, identity: &str) -> Option<Stone> {
        if self.black.as_deref() == Some(identity) {
            Some(Stone::Black)
        } else if self.white.as_deref() == Some(identity) {
            Some(Stone::White)
        } else {
            None
        }
    }

    pub fn player(&self, stone: Stone) -> Option<&str> {
        match stone {
            Stone::Black => self.black.as_deref(),
            Stone::White => self.white.as_deref(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.black.is_some() && self.white.is_some()
    }
}
