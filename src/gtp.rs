//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module implements the subset of GTP version 2 needed to drive the
//! rules engine from a graphical interface such as Sabaki or GoGui.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Set board size (9 or 19)
//! - `clear_board` - Reset the board, re-placing the configured handicap
//! - `komi <value>` - Set komi
//! - `play <color> <vertex>` - Play a move
//! - `genmove <color>` - Generate and play a random legal move
//! - `showboard` - Print the board
//! - `captures <color>` - Stones captured by a color
//!
//! ## Example
//!
//! ```ignore
//! use goban::config::GameConfig;
//! use goban::gtp::GtpEngine;
//! let mut engine = GtpEngine::new(GameConfig::default())?;
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::{BoardSize, Point, Stone};
use crate::config::GameConfig;
use crate::constants::{COLUMN_LETTERS, ENGINE_NAME};
use crate::game::{Game, SetupError};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "captures",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// A parsed GTP vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Vertex {
    Pass,
    Point(Point),
}

/// Parse a vertex such as `D4` or `pass` for a board of side `size`.
///
/// Columns use the letters A-T without I; row 1 is the bottom row, which
/// maps to `y = size - 1`.
pub fn parse_vertex(s: &str, size: usize) -> Option<Vertex> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }
    let (col, row) = s.split_at_checked(1)?;
    let col = col.as_bytes()[0].to_ascii_uppercase();
    let x = COLUMN_LETTERS.iter().position(|&c| c == col)?;
    let row: usize = row.parse().ok()?;
    if x >= size || row == 0 || row > size {
        return None;
    }
    Some(Vertex::Point((x, size - row)))
}

/// Format a vertex for a board of side `size`.
pub fn format_vertex(vertex: Vertex, size: usize) -> String {
    match vertex {
        Vertex::Pass => "pass".into(),
        Vertex::Point((x, y)) => format!("{}{}", COLUMN_LETTERS[x] as char, size - y),
    }
}

fn parse_color(s: &str) -> Option<Stone> {
    match s.to_ascii_lowercase().as_str() {
        "b" | "black" => Some(Stone::Black),
        "w" | "white" => Some(Stone::White),
        _ => None,
    }
}

/// GTP engine state.
pub struct GtpEngine {
    /// Current game
    game: Game,
    /// Random source for `genmove`
    rng: fastrand::Rng,
}

impl GtpEngine {
    /// Create an engine for a fresh game with the given configuration.
    pub fn new(config: GameConfig) -> Result<Self, SetupError> {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Ok(Self {
            game: Game::new(config)?,
            rng,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop over arbitrary streams.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if let Ok(id) = trimmed[..end].parse::<u32>() {
            return (Some(id), trimmed[end..].trim());
        }
        (None, trimmed)
    }

    fn size(&self) -> usize {
        self.game.board().size().dim()
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "gtp command");
        match command {
            "name" => (true, ENGINE_NAME.to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let size = match arg.parse::<usize>() {
                    Ok(size) => size,
                    Err(_) => return (false, "invalid size".to_string()),
                };
                let Ok(size) = BoardSize::try_from(size) else {
                    return (false, "unacceptable size".to_string());
                };
                let mut config = self.game.config().clone();
                config.size = size;
                match Game::new(config) {
                    Ok(game) => {
                        self.game = game;
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "clear_board" => match self.game.reset() {
                Ok(()) => (true, String::new()),
                Err(err) => (false, err.to_string()),
            },

            "komi" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<f32>() {
                    Ok(komi) => {
                        self.game.set_komi(komi);
                        (true, String::new())
                    }
                    Err(_) => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let Some(stone) = parse_color(color) else {
                    return (false, "invalid color".to_string());
                };
                match parse_vertex(vertex, self.size()) {
                    Some(Vertex::Pass) => {
                        self.game.pass_as(stone);
                        (true, String::new())
                    }
                    Some(Vertex::Point((x, y))) => match self.game.play_as(stone, x, y) {
                        Ok(_) => (true, String::new()),
                        Err(err) => (false, err.to_string()),
                    },
                    None => (false, "invalid vertex".to_string()),
                }
            }

            "genmove" => {
                let Some(stone) = args.first().and_then(|c| parse_color(c)) else {
                    return (false, "invalid color".to_string());
                };
                match self.game.random_move(stone, &mut self.rng) {
                    Some((x, y)) => match self.game.play_as(stone, x, y) {
                        Ok(_) => (true, format_vertex(Vertex::Point((x, y)), self.size())),
                        Err(err) => {
                            warn!(%err, x, y, "generated move was rejected");
                            self.game.pass_as(stone);
                            (true, "pass".to_string())
                        }
                    },
                    None => {
                        self.game.pass_as(stone);
                        (true, "pass".to_string())
                    }
                }
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "captures" => {
                let Some(stone) = args.first().and_then(|c| parse_color(c)) else {
                    return (false, "invalid color".to_string());
                };
                (true, self.game.prisoners(stone).to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
