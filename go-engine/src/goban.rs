use std::collections::HashSet;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// Stones captured, indexed by the capturing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// A square Go board stored as a flat row-major array.
///
/// Cells hold `0` for empty, `1` for Black and `-1` for White.
#[derive(Debug, Clone, PartialEq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
    captures: Captures,
}

impl Goban {
    /// Create a goban from a square board matrix (rows of i8 values).
    pub fn new(board: Vec<Vec<i8>>) -> Self {
        let size = u8::try_from(board.len()).ok();

        assert!(
            size.is_some_and(|n| board.iter().all(|row| row.len() == n as usize)),
            "malformed board matrix"
        );
        let size = size.unwrap_or_default();

        Goban {
            board: board.into_iter().flatten().collect(),
            size,
            captures: Captures::new(),
        }
    }

    /// Create an empty `size` x `size` board.
    pub fn with_size(size: u8) -> Self {
        Goban {
            board: vec![0i8; size as usize * size as usize],
            size,
            captures: Captures::new(),
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.board[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < self.size && y < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == 0)
    }

    /// Every stone on the board in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Stone)> + '_ {
        let size = self.size as usize;
        self.board.iter().enumerate().filter_map(move |(i, &v)| {
            Stone::from_int(v).map(|s| (((i % size) as u8, (i / size) as u8), s))
        })
    }

    // -- Game actions --

    /// Place a stone, resolve captures, reject suicide.
    ///
    /// Returns a new goban with the move applied together with the captured
    /// points. `self` is never modified, so a rejected move leaves no trace.
    pub fn play(&self, point: Point, stone: Stone) -> Result<(Goban, Vec<Point>), GoError> {
        if !self.on_board(point) {
            return Err(GoError::NotOnBoard);
        }

        if self.stone_at(point).is_some() {
            return Err(GoError::Overwrite);
        }

        let mut goban = self.clone();
        goban.set_stone(point, stone);

        let mut dead_stones = Vec::new();
        for group in goban.opponent_neighbor_groups(point) {
            if goban.liberties(&group).is_empty() {
                dead_stones.extend(group);
            }
        }

        goban.capture_mut(&dead_stones, stone);

        // Evaluated after removal: captured points are liberties of the new stone.
        if dead_stones.is_empty() && goban.group_liberties(point).is_empty() {
            return Err(GoError::Suicide);
        }

        Ok((goban, dead_stones))
    }

    /// Dry run of [`Goban::play`].
    pub fn is_legal_move(&self, point: Point, stone: Stone) -> bool {
        self.play(point, stone).is_ok()
    }

    /// Remove captured stones in place and credit them to `captor`.
    fn capture_mut(&mut self, stones: &[Point], captor: Stone) {
        if stones.is_empty() {
            return;
        }

        for &pt in stones {
            self.clear_stone(pt);
        }
        self.captures.add(captor, stones.len() as u32);
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.size {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.size {
            result.push((x, y + 1));
        }
        result
    }

    /// Flood-fill the group of same-colored stones containing `point`.
    /// Empty for an empty or off-board point.
    pub fn group(&self, point: Point) -> HashSet<Point> {
        let mut visited = vec![false; self.board.len()];
        self.group_from(point, &mut visited)
    }

    /// Empty intersections orthogonally adjacent to any stone of `group`.
    pub fn liberties(&self, group: &HashSet<Point>) -> HashSet<Point> {
        group
            .iter()
            .flat_map(|&p| self.neighbors(p))
            .filter(|&n| self.stone_at(n).is_none())
            .collect()
    }

    /// Liberties of the group containing `point`.
    pub fn group_liberties(&self, point: Point) -> HashSet<Point> {
        self.liberties(&self.group(point))
    }

    /// Distinct opponent groups touching the stone at `point`.
    fn opponent_neighbor_groups(&self, point: Point) -> Vec<HashSet<Point>> {
        let opponent = match self.stone_at(point) {
            Some(s) => s.opp(),
            None => return Vec::new(),
        };

        let mut groups = Vec::new();
        let mut visited = vec![false; self.board.len()];

        for n in self.neighbors(point) {
            if self.stone_at(n) != Some(opponent) || visited[self.idx(n)] {
                continue;
            }
            groups.push(self.group_from(n, &mut visited));
        }

        groups
    }

    /// Group flood-fill using a shared visited bitset.
    fn group_from(&self, point: Point, visited: &mut [bool]) -> HashSet<Point> {
        let stone = match self.stone_at(point) {
            Some(s) => s,
            None => return HashSet::new(),
        };

        let mut result = HashSet::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let vi = self.idx(p);
            if visited[vi] {
                continue;
            }
            visited[vi] = true;
            result.insert(p);
            for n in self.neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[self.idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, (x, y): Point) -> usize {
        y as usize * self.size as usize + x as usize
    }

    fn set_stone(&mut self, point: Point, stone: Stone) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = stone.to_int();
        }
    }

    fn clear_stone(&mut self, point: Point) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.board[i] = 0;
        }
    }
}
