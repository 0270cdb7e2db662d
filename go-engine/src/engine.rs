use crate::Point;
use crate::error::GoError;
use crate::goban::{Captures, Goban};
use crate::state::{EventKind, GameState};
use crate::stone::Stone;
use crate::turn::Turn;

/// The authoritative game: board, side to move and commit counter.
///
/// Every mutating method either commits completely and returns the new
/// snapshot, or returns an error and leaves the engine untouched.
#[derive(Debug, Clone)]
pub struct Engine {
    goban: Goban,
    turn: Stone,
    seq: u64,
    last: Option<Turn>,
}

impl Engine {
    pub fn new(size: u8) -> Self {
        Engine {
            goban: Goban::with_size(size),
            turn: Stone::Black,
            seq: 0,
            last: None,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    pub fn current_turn_stone(&self) -> Stone {
        self.turn
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    // -- Game actions --

    pub fn try_play(&mut self, stone: Stone, point: Point) -> Result<GameState, GoError> {
        // Board checks run before the turn check so "occupied" wins over "out of turn".
        if !self.goban.on_board(point) {
            return Err(GoError::NotOnBoard);
        }
        if self.goban.stone_at(point).is_some() {
            return Err(GoError::Overwrite);
        }
        if stone != self.turn {
            return Err(GoError::OutOfTurn);
        }

        let (goban, _captured) = self.goban.play(point, stone)?;
        self.goban = goban;
        Ok(self.commit(Turn::play(stone, point)))
    }

    pub fn try_pass(&mut self, stone: Stone) -> Result<GameState, GoError> {
        if stone != self.turn {
            return Err(GoError::OutOfTurn);
        }

        Ok(self.commit(Turn::pass(stone)))
    }

    /// Would `stone` be allowed to play at `point` right now?
    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        stone == self.turn && self.goban.is_legal_move(point, stone)
    }

    /// Current position without committing anything.
    pub fn snapshot(&self) -> GameState {
        GameState::capture(&self.goban, self.seq, EventKind::Sync, self.turn, self.last)
    }

    fn commit(&mut self, turn: Turn) -> GameState {
        self.turn = turn.stone.opp();
        self.seq += 1;
        self.last = Some(turn);
        GameState::capture(
            &self.goban,
            self.seq,
            turn.kind.into(),
            self.turn,
            self.last,
        )
    }
}
