//! goban: a Go rules engine.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban gtp` - Start GTP server for GUI integration
//! - `goban demo --size 9 --handicap 2` - Run the demo with options

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use goban::board::Stone;
use goban::config::{Cli, Commands, GameConfig};
use goban::constants::MAX_MOVES_PER_POINT;
use goban::game::Game;
use goban::gtp::GtpEngine;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.game_config()?;

    match cli.command {
        Some(Commands::Gtp) => {
            let mut engine = GtpEngine::new(config).context("initialize game")?;
            engine.run().context("GTP session")?;
        }
        Some(Commands::Demo) | None => run_demo(config)?,
    }
    Ok(())
}

fn run_demo(config: GameConfig) -> Result<()> {
    println!("goban: Go rules engine\n");

    let mut rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut game = Game::new(config).context("initialize game")?;
    let size = game.board().size();
    println!("Board: {size}, ko rule: {:?}, komi: {}", game.board().ko_rule(), game.komi());

    // Random self-play until both sides pass.
    let max_moves = size.dim() * size.dim() * MAX_MOVES_PER_POINT;
    while !game.is_over() && game.board().history().len() < max_moves {
        let stone = game.to_move();
        match game.random_move(stone, &mut rng) {
            Some((x, y)) => {
                game.play(x, y)
                    .with_context(|| format!("{stone} at ({x}, {y})"))?;
            }
            None => {
                game.pass();
            }
        }
    }

    println!("{}", game.board());
    println!("Moves played: {}", game.board().history().len());
    println!(
        "Prisoners: black {}, white {}",
        game.prisoners(Stone::Black),
        game.prisoners(Stone::White)
    );
    Ok(())
}
