//! Constants for board geometry, game setup and the protocol front end.

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length of the small board.
pub const SIZE_9X9: usize = 9;

/// Side length of the full-size board.
pub const SIZE_19X19: usize = 19;

/// Orthogonal neighbor offsets (dx, dy). Order: West, East, North, South.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Game Setup
// =============================================================================

/// Komi used when none is configured and no handicap is placed.
pub const DEFAULT_KOMI: f32 = 5.5;

/// Komi used when none is configured and handicap stones are placed.
pub const HANDICAP_KOMI: f32 = 0.0;

/// Consecutive passes that end a game.
pub const PASSES_TO_END: u8 = 2;

/// Self-play stops after this many moves per board point.
pub const MAX_MOVES_PER_POINT: usize = 3;

// =============================================================================
// Go Text Protocol
// =============================================================================

/// Engine name reported over GTP.
pub const ENGINE_NAME: &str = "goban";

/// Column letters used in GTP vertices (`I` is skipped).
pub const COLUMN_LETTERS: &[u8; 19] = b"ABCDEFGHJKLMNOPQRST";
