//! Command-line options and validated game configuration.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::board::{BoardSize, KoRule};
use crate::constants::{DEFAULT_KOMI, HANDICAP_KOMI, SIZE_9X9, SIZE_19X19};
use crate::handicap::max_handicap;

/// goban: a Go rules engine with a GTP front end
#[derive(Parser, Debug)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Board size; accepts 9 or 19
    #[arg(long, global = true, default_value_t = SIZE_19X19)]
    pub size: usize,

    /// Number of handicap stones placed for Black
    #[arg(long, global = true, default_value_t = 0)]
    pub handicap: usize,

    /// Komi; negative to derive it from the handicap
    #[arg(long, global = true, default_value_t = -1.0, allow_negative_numbers = true)]
    pub komi: f32,

    /// Use positional superko instead of simple ko
    #[arg(long, global = true)]
    pub superko: bool,

    /// Seed for the random move generator
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log rule decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Play a random self-play game and print the final board
    Demo,
}

/// Validated settings for a new game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub size: BoardSize,
    pub handicap: usize,
    pub komi: f32,
    pub ko_rule: KoRule,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::Nineteen,
            handicap: 0,
            komi: DEFAULT_KOMI,
            ko_rule: KoRule::Simple,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Resolve komi the usual way: an explicit non-negative value wins,
    /// otherwise no komi with a handicap and the default without.
    pub fn resolve_komi(komi: f32, handicap: usize) -> f32 {
        if komi >= 0.0 {
            komi
        } else if handicap > 0 {
            HANDICAP_KOMI
        } else {
            DEFAULT_KOMI
        }
    }
}

impl Cli {
    /// Validate the options into a [`GameConfig`].
    pub fn game_config(&self) -> Result<GameConfig> {
        let size = BoardSize::try_from(self.size).with_context(|| {
            format!("board size must be {SIZE_9X9} or {SIZE_19X19}")
        })?;
        let max = max_handicap(self.size).unwrap_or(0);
        if self.handicap > max {
            bail!("bad handicap: {} (maximum for {size} is {max})", self.handicap);
        }
        Ok(GameConfig {
            size,
            handicap: self.handicap,
            komi: GameConfig::resolve_komi(self.komi, self.handicap),
            ko_rule: if self.superko {
                KoRule::Super
            } else {
                KoRule::Simple
            },
            seed: self.seed,
        })
    }
}
