//! goban: a rules engine for the game of Go.
//!
//! Given a board size and a sequence of stone placements, the engine decides
//! whether each move is legal, removes captured groups and prevents position
//! repetition under either the simple ko or the positional superko rule.
//!
//! ## Modules
//!
//! - [`board`] - Board state, placement, captures and handicap setup
//! - [`history`] - Per-turn change log and position reconstruction
//! - [`ko`] - Ko rule strategies
//! - [`handicap`] - Preset handicap points
//! - [`game`] - Turn order, passes and prisoners around a board
//! - [`config`] - Command-line options and game configuration
//! - [`gtp`] - Go Text Protocol front end
//! - [`constants`] - Board sizes and defaults
//!
//! ## Example
//!
//! ```
//! use goban::board::{Board, KoRule, Stone};
//! use goban::handicap::get_handicap;
//!
//! let mut board = Board::new(9, KoRule::Simple).unwrap();
//! board.apply_handicap(Stone::Black, get_handicap(9, 2).unwrap()).unwrap();
//!
//! let captures = board.place(4, 4, Stone::White).unwrap();
//! assert_eq!(captures, 0);
//! assert_eq!(board.at(4, 4), Some(Stone::White));
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod game;
pub mod gtp;
pub mod handicap;
pub mod history;
pub mod ko;
