//! Per-turn change log.
//!
//! Every committed move is stored as a [`Turn`]: the ordered list of cell
//! changes it caused (captured stones removed first, the placed stone last).
//! Replaying turns `0..n` on top of the base position reproduces the board
//! exactly as it stood after move `n`. The base position is all-empty unless
//! handicap stones were set up before play.

use crate::board::{Point, Stone};

/// A single cell change: `stone` is the new occupant, `None` for a removal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub point: Point,
    pub stone: Option<Stone>,
}

impl Placement {
    pub fn new(point: Point, stone: Option<Stone>) -> Self {
        Self { point, stone }
    }
}

/// All placement events of one committed move, in the order they happened.
pub type Turn = Vec<Placement>;

/// Append-only record of committed turns.
#[derive(Clone, Debug)]
pub struct History {
    size: usize,
    base: Vec<Option<Stone>>,
    turns: Vec<Turn>,
}

impl History {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            base: vec![None; size * size],
            turns: Vec::new(),
        }
    }

    /// Number of committed turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Position before the first turn (handicap stones only).
    pub fn base(&self) -> &[Option<Stone>] {
        &self.base
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub(crate) fn set_base(&mut self, (x, y): Point, stone: Option<Stone>) {
        self.base[y * self.size + x] = stone;
    }

    fn apply(&self, cells: &mut [Option<Stone>], turn: &[Placement]) {
        for p in turn {
            let (x, y) = p.point;
            cells[y * self.size + x] = p.stone;
        }
    }

    /// Reconstruct the position after the first `n` turns.
    ///
    /// Returns `None` if fewer than `n` turns have been committed.
    pub fn replay(&self, n: usize) -> Option<Vec<Option<Stone>>> {
        let turns = self.turns.get(..n)?;
        let mut cells = self.base.clone();
        for turn in turns {
            self.apply(&mut cells, turn);
        }
        Some(cells)
    }

    /// Walk every recorded position, from the base up to the current one,
    /// stopping at the first for which `pred` returns true.
    pub fn any_position<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&[Option<Stone>]) -> bool,
    {
        let mut cells = self.base.clone();
        if pred(&cells) {
            return true;
        }
        for turn in &self.turns {
            self.apply(&mut cells, turn);
            if pred(&cells) {
                return true;
            }
        }
        false
    }
}
