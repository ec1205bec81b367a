//! Board state and move execution.
//!
//! The grid is a flat vector indexed by `y * size + x`. A move is applied
//! transactionally: the grid is snapshotted, the stone is placed, dead
//! neighbor groups are removed, and the result is checked for suicide and
//! ko. Any rejection restores the snapshot, so an illegal move never leaves
//! a trace in either the grid or the history.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::constants::{ORTHOGONAL, SIZE_9X9, SIZE_19X19};
use crate::history::{History, Placement, Turn};
use crate::ko;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => f.write_str("black"),
            Stone::White => f.write_str("white"),
        }
    }
}

/// A board coordinate `(x, y)`, with `(0, 0)` in the top-left corner.
pub type Point = (usize, usize);

/// Supported board sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoardSize {
    Nine,
    Nineteen,
}

impl BoardSize {
    /// Side length in cells.
    pub fn dim(self) -> usize {
        match self {
            BoardSize::Nine => SIZE_9X9,
            BoardSize::Nineteen => SIZE_19X19,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            SIZE_9X9 => Ok(BoardSize::Nine),
            SIZE_19X19 => Ok(BoardSize::Nineteen),
            other => Err(BoardError::InvalidSize(other)),
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dim();
        write!(f, "{n}x{n}")
    }
}

/// Position repetition rule, fixed for the lifetime of a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum KoRule {
    /// A move may not recreate the position from just before the
    /// opponent's last move.
    #[default]
    Simple,
    /// A move may not recreate any earlier position of the game.
    Super,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("unsupported board size: {0}")]
    InvalidSize(usize),
    #[error("handicap point {0:?} is off the board")]
    PointOutOfBounds(Point),
    #[error("handicap cannot be placed after {0} turns have been played")]
    PlayStarted(usize),
}

/// Reason a placement was rejected. The board is unchanged in every case.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move: point is off the board")]
    OutOfBounds,
    #[error("illegal move: point is occupied")]
    Occupied,
    #[error("illegal move: suicide")]
    Suicide,
    #[error("illegal move: repeats a previous position")]
    Ko,
}

#[derive(Clone)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Option<Stone>>,
    history: History,
    ko_rule: KoRule,
}

impl Board {
    /// Create an empty board, failing if `size` is not 9 or 19.
    pub fn new(size: usize, ko_rule: KoRule) -> Result<Self, BoardError> {
        Ok(Self::with_size(BoardSize::try_from(size)?, ko_rule))
    }

    pub fn with_size(size: BoardSize, ko_rule: KoRule) -> Self {
        let n = size.dim();
        Self {
            size,
            cells: vec![None; n * n],
            history: History::new(n),
            ko_rule,
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn ko_rule(&self) -> KoRule {
        self.ko_rule
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current position, indexed by `y * size + x`.
    pub fn cells(&self) -> &[Option<Stone>] {
        &self.cells
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        let n = self.size.dim();
        x < n && y < n
    }

    /// Occupant of `(x, y)`.
    ///
    /// # Panics
    /// Panics if the point is off the board.
    pub fn at(&self, x: usize, y: usize) -> Option<Stone> {
        assert!(
            self.contains(x, y),
            "point ({x}, {y}) is off the {} board",
            self.size
        );
        self.cells[self.idx(x, y)]
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size.dim() + x
    }

    fn get(&self, x: usize, y: usize) -> Option<Stone> {
        if !self.contains(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    fn set(&mut self, (x, y): Point, stone: Option<Stone>) {
        let i = self.idx(x, y);
        self.cells[i] = stone;
    }

    /// On-board orthogonal neighbors of `(x, y)`.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Point> + '_ {
        ORTHOGONAL.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            self.contains(nx, ny).then_some((nx, ny))
        })
    }

    /// Place `stone` at `(x, y)`, resolving captures.
    ///
    /// Returns the number of opposing stones captured. On error the board
    /// and its history are exactly as they were before the call.
    pub fn place(&mut self, x: usize, y: usize, stone: Stone) -> Result<usize, MoveError> {
        let snapshot = self.cells.clone();
        let mut pending = Turn::new();

        match self.try_place(x, y, stone, &mut pending) {
            Ok(captures) => {
                pending.push(Placement::new((x, y), Some(stone)));
                self.history.push(pending);
                debug!(x, y, %stone, captures, turn = self.history.len(), "placed stone");
                Ok(captures)
            }
            Err(err) => {
                self.cells = snapshot;
                debug!(x, y, %stone, %err, "rejected move");
                Err(err)
            }
        }
    }

    fn try_place(
        &mut self,
        x: usize,
        y: usize,
        stone: Stone,
        pending: &mut Turn,
    ) -> Result<usize, MoveError> {
        if !self.contains(x, y) {
            return Err(MoveError::OutOfBounds);
        }
        if self.get(x, y).is_some() {
            return Err(MoveError::Occupied);
        }
        self.set((x, y), Some(stone));

        let mut captures = 0;
        let neighbors: Vec<Point> = self.neighbors(x, y).collect();
        for (nx, ny) in neighbors {
            match self.get(nx, ny) {
                None => continue,
                Some(c) if c == stone => continue,
                Some(_) => {}
            }
            if let Some(group) = self.dead_group(nx, ny) {
                for pt in group {
                    self.set(pt, None);
                    pending.push(Placement::new(pt, None));
                    captures += 1;
                }
            }
        }

        if self.dead_group(x, y).is_some() {
            return Err(MoveError::Suicide);
        }
        if ko::violates(self.ko_rule, &self.history, &self.cells) {
            return Err(MoveError::Ko);
        }
        Ok(captures)
    }

    /// Flood-fill the group at `(x, y)`.
    ///
    /// Returns `None` as soon as any stone of the group touches an empty
    /// point. Otherwise the group has no liberties and every stone in it is
    /// returned. An empty root counts as having a liberty.
    fn dead_group(&self, x: usize, y: usize) -> Option<Vec<Point>> {
        let color = self.get(x, y)?;
        let mut stack = vec![(x, y)];
        let mut visited = vec![false; self.cells.len()];
        let mut group = Vec::new();

        while let Some((cx, cy)) = stack.pop() {
            let i = self.idx(cx, cy);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            group.push((cx, cy));

            for (nx, ny) in self.neighbors(cx, cy) {
                match self.get(nx, ny) {
                    None => return None,
                    Some(c) if c == color && !visited[self.idx(nx, ny)] => stack.push((nx, ny)),
                    _ => {}
                }
            }
        }
        Some(group)
    }

    /// Returns true if the stone at `(x, y)` belongs to a group with at
    /// least one liberty. Empty points trivially qualify.
    pub fn has_liberty(&self, x: usize, y: usize) -> bool {
        self.dead_group(x, y).is_none()
    }

    /// Put `stone` on every handicap point, bypassing all rule checks.
    ///
    /// The stones become part of the history's base position, so no turn is
    /// recorded. Fails without touching the board if any point is off the
    /// board or if a turn has already been played.
    pub fn apply_handicap(&mut self, stone: Stone, handicap: &[Point]) -> Result<(), BoardError> {
        if !self.history.is_empty() {
            return Err(BoardError::PlayStarted(self.history.len()));
        }
        if let Some(&pt) = handicap.iter().find(|&&(x, y)| !self.contains(x, y)) {
            return Err(BoardError::PointOutOfBounds(pt));
        }
        for &pt in handicap {
            self.set(pt, Some(stone));
            self.history.set_base(pt, Some(stone));
        }
        debug!(%stone, stones = handicap.len(), "applied handicap");
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.dim();
        for y in 0..n {
            for x in 0..n {
                let ch = match self.get(x, y) {
                    Some(Stone::Black) => 'X',
                    Some(Stone::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
