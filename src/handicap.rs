//! Preset handicap points.
//!
//! Each table lists points in the order they are filled: level `n` uses the
//! first `n` entries.

use thiserror::Error;

use crate::board::{BoardSize, Point};

/// Handicap points for a 9x9 board.
const HANDICAP_9X9: [Point; 9] = [
    (6, 2),
    (2, 6),
    (6, 6),
    (2, 2),
    (4, 4),
    (2, 4),
    (6, 4),
    (4, 2),
    (4, 6),
];

/// Handicap points for a 19x19 board.
const HANDICAP_19X19: [Point; 9] = [
    (15, 3),
    (3, 15),
    (15, 15),
    (3, 3),
    (9, 9),
    (3, 9),
    (15, 9),
    (9, 3),
    (9, 15),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandicapError {
    #[error("handicaps not supported for board size: {0}")]
    UnsupportedSize(usize),
    #[error("handicap {level} exceeds maximum of {max} for board size {size}")]
    LevelTooHigh { size: usize, level: usize, max: usize },
}

fn table(size: BoardSize) -> &'static [Point] {
    match size {
        BoardSize::Nine => &HANDICAP_9X9,
        BoardSize::Nineteen => &HANDICAP_19X19,
    }
}

/// The first `level` handicap points for a board of side `size`.
pub fn get_handicap(size: usize, level: usize) -> Result<&'static [Point], HandicapError> {
    let board_size =
        BoardSize::try_from(size).map_err(|_| HandicapError::UnsupportedSize(size))?;
    let points = table(board_size);
    if level > points.len() {
        return Err(HandicapError::LevelTooHigh {
            size,
            level,
            max: points.len(),
        });
    }
    Ok(&points[..level])
}

/// Largest handicap available for a board of side `size`, or `None` if the
/// size is unsupported.
pub fn max_handicap(size: usize) -> Option<usize> {
    BoardSize::try_from(size).ok().map(|s| table(s).len())
}
