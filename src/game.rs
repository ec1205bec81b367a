//! Game loop state on top of a [`Board`].
//!
//! The board only knows whether a move is legal and how many stones it
//! captured. `Game` owns everything around that: whose turn it is, passes,
//! the prisoner count for each side and komi.

use thiserror::Error;
use tracing::info;

use crate::board::{Board, BoardError, MoveError, Point, Stone};
use crate::config::GameConfig;
use crate::constants::PASSES_TO_END;
use crate::handicap::{HandicapError, get_handicap};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("initialize board: {0}")]
    Board(#[from] BoardError),
    #[error("initialize handicap: {0}")]
    Handicap(#[from] HandicapError),
}

pub struct Game {
    config: GameConfig,
    board: Board,
    to_move: Stone,
    prisoners: [usize; 2],
    passes: u8,
}

fn slot(stone: Stone) -> usize {
    match stone {
        Stone::Black => 0,
        Stone::White => 1,
    }
}

impl Game {
    /// Start a game: build the board and place Black's handicap stones.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let mut board = Board::with_size(config.size, config.ko_rule);
        let handicap = get_handicap(config.size.dim(), config.handicap)?;
        board.apply_handicap(Stone::Black, handicap)?;

        let to_move = if handicap.is_empty() {
            Stone::Black
        } else {
            Stone::White
        };
        info!(
            size = %config.size,
            handicap = config.handicap,
            komi = config.komi,
            ko_rule = ?config.ko_rule,
            "new game"
        );
        Ok(Self {
            config,
            board,
            to_move,
            prisoners: [0; 2],
            passes: 0,
        })
    }

    /// Start over with the same configuration.
    pub fn reset(&mut self) -> Result<(), SetupError> {
        *self = Self::new(self.config.clone())?;
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn komi(&self) -> f32 {
        self.config.komi
    }

    pub fn set_komi(&mut self, komi: f32) {
        self.config.komi = komi;
    }

    /// Stones captured by `stone` so far.
    pub fn prisoners(&self, stone: Stone) -> usize {
        self.prisoners[slot(stone)]
    }

    /// Prisoners plus komi for White. Territory is not counted.
    pub fn score(&self, stone: Stone) -> f32 {
        let komi = match stone {
            Stone::Black => 0.0,
            Stone::White => self.config.komi,
        };
        self.prisoners(stone) as f32 + komi
    }

    pub fn is_over(&self) -> bool {
        self.passes >= PASSES_TO_END
    }

    /// Play for the side to move. The turn passes only if the move is legal.
    pub fn play(&mut self, x: usize, y: usize) -> Result<usize, MoveError> {
        self.play_as(self.to_move, x, y)
    }

    /// Play `stone` regardless of whose turn it is; the opponent moves next.
    pub fn play_as(&mut self, stone: Stone, x: usize, y: usize) -> Result<usize, MoveError> {
        let captures = self.board.place(x, y, stone)?;
        self.prisoners[slot(stone)] += captures;
        self.to_move = stone.opponent();
        self.passes = 0;
        Ok(captures)
    }

    /// Pass for the side to move. Returns true if the game is over.
    pub fn pass(&mut self) -> bool {
        self.pass_as(self.to_move)
    }

    /// Pass for `stone`; the opponent moves next.
    pub fn pass_as(&mut self, stone: Stone) -> bool {
        self.to_move = stone.opponent();
        self.passes = self.passes.saturating_add(1);
        if self.is_over() {
            info!(
                black = self.score(Stone::Black),
                white = self.score(Stone::White),
                "game over"
            );
        }
        self.is_over()
    }

    /// Pick a random legal move for `stone`, skipping points that would fill
    /// one of its own single-point eyes. `None` means pass.
    pub fn random_move(&self, stone: Stone, rng: &mut fastrand::Rng) -> Option<Point> {
        let n = self.board.size().dim();
        let mut candidates: Vec<Point> = (0..n)
            .flat_map(|y| (0..n).map(move |x| (x, y)))
            .filter(|&(x, y)| self.board.at(x, y).is_none() && !self.is_own_eye(x, y, stone))
            .collect();
        rng.shuffle(&mut candidates);

        candidates.into_iter().find(|&(x, y)| {
            let mut trial = self.board.clone();
            trial.place(x, y, stone).is_ok()
        })
    }

    /// An empty point whose on-board neighbors are all `stone`.
    fn is_own_eye(&self, x: usize, y: usize, stone: Stone) -> bool {
        self.board
            .neighbors(x, y)
            .all(|(nx, ny)| self.board.at(nx, ny) == Some(stone))
    }
}
