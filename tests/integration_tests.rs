//! Integration tests for goban
//!
//! These exercise the public board API: legality, captures, both ko rules,
//! history reconstruction and handicap setup.

use goban::board::{Board, BoardError, BoardSize, KoRule, MoveError, Point, Stone};
use goban::handicap::{HandicapError, get_handicap, max_handicap};

use Stone::{Black, White};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn board9(ko_rule: KoRule) -> Board {
    Board::new(9, ko_rule).unwrap()
}

/// Place a list of stones, panicking if any of them is rejected.
fn setpos(board: &mut Board, stones: &[(Stone, Point)]) {
    for &(stone, (x, y)) in stones {
        if let Err(err) = board.place(x, y, stone) {
            panic!("setup move {stone} at ({x}, {y}) rejected: {err}");
        }
    }
}

/// Snapshot of every point via the public query.
fn occupancy(board: &Board) -> Vec<Option<Stone>> {
    let n = board.size().dim();
    (0..n)
        .flat_map(|y| (0..n).map(move |x| (x, y)))
        .map(|(x, y)| board.at(x, y))
        .collect()
}

/// Ko shape in the top-left corner. Black holds (2, 1); White can take it
/// by playing (1, 1), and Black can retake at (2, 1).
///
/// ```text
/// . X O .
/// X . X O
/// . X O .
/// ```
fn ko_shape(dy: usize) -> Vec<(Stone, Point)> {
    vec![
        (Black, (1, dy)),
        (White, (2, dy)),
        (Black, (0, 1 + dy)),
        (White, (3, 1 + dy)),
        (Black, (1, 2 + dy)),
        (White, (2, 2 + dy)),
    ]
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_new_board_is_empty() {
    for size in [9, 19] {
        let board = Board::new(size, KoRule::Simple).unwrap();
        assert!(occupancy(&board).iter().all(Option::is_none));
        assert_eq!(occupancy(&board).len(), size * size);
        assert!(board.history().is_empty());
    }
}

#[test]
fn test_unsupported_size() {
    assert_eq!(
        Board::new(13, KoRule::Simple).err(),
        Some(BoardError::InvalidSize(13))
    );
    assert_eq!(BoardSize::try_from(19usize), Ok(BoardSize::Nineteen));
}

// =============================================================================
// Basic placement
// =============================================================================

#[test]
fn test_play_single_stone() {
    let mut board = board9(KoRule::Simple);
    assert_eq!(board.place(3, 5, Black), Ok(0));
    assert_eq!(board.at(3, 5), Some(Black));
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_illegal_move_occupied() {
    let mut board = board9(KoRule::Simple);
    board.place(4, 4, Black).unwrap();
    let before = occupancy(&board);

    assert_eq!(board.place(4, 4, White), Err(MoveError::Occupied));
    assert_eq!(board.place(4, 4, Black), Err(MoveError::Occupied));
    assert_eq!(occupancy(&board), before);
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_illegal_move_out_of_bounds() {
    let mut board = board9(KoRule::Simple);
    board.place(0, 0, Black).unwrap();
    let before = occupancy(&board);

    assert_eq!(board.place(9, 0, White), Err(MoveError::OutOfBounds));
    assert_eq!(board.place(0, 9, White), Err(MoveError::OutOfBounds));
    assert_eq!(board.place(usize::MAX, 3, White), Err(MoveError::OutOfBounds));
    assert_eq!(occupancy(&board), before);
    assert_eq!(board.history().len(), 1);
}

// =============================================================================
// Capture tests
// =============================================================================

#[test]
fn test_capture_single_stone() {
    let mut board = board9(KoRule::Simple);
    setpos(
        &mut board,
        &[
            (White, (4, 4)),
            (Black, (3, 4)),
            (Black, (5, 4)),
            (Black, (4, 3)),
        ],
    );
    assert!(board.has_liberty(4, 4));

    assert_eq!(board.place(4, 5, Black), Ok(1));
    assert_eq!(board.at(4, 4), None, "surrounded stone should be removed");
}

#[test]
fn test_capture_corner() {
    let mut board = board9(KoRule::Simple);
    setpos(&mut board, &[(White, (0, 0)), (Black, (1, 0))]);
    assert_eq!(board.place(0, 1, Black), Ok(1));
    assert_eq!(board.at(0, 0), None);
}

#[test]
fn test_capture_group() {
    let mut board = board9(KoRule::Simple);
    setpos(
        &mut board,
        &[
            (White, (3, 0)),
            (White, (4, 0)),
            (Black, (2, 0)),
            (Black, (3, 1)),
            (Black, (4, 1)),
        ],
    );
    assert_eq!(board.place(5, 0, Black), Ok(2));
    assert_eq!(board.at(3, 0), None);
    assert_eq!(board.at(4, 0), None);
}

#[test]
fn test_capture_two_groups_at_once() {
    let mut board = board9(KoRule::Simple);
    setpos(
        &mut board,
        &[
            (White, (0, 0)),
            (White, (2, 0)),
            (Black, (0, 1)),
            (Black, (2, 1)),
            (Black, (3, 0)),
        ],
    );
    assert_eq!(board.place(1, 0, Black), Ok(2));
    assert_eq!(board.at(0, 0), None);
    assert_eq!(board.at(2, 0), None);
    assert_eq!(board.at(1, 0), Some(Black));
}

#[test]
fn test_suicide_rejected() {
    let mut board = board9(KoRule::Simple);
    setpos(
        &mut board,
        &[
            (Black, (3, 4)),
            (Black, (5, 4)),
            (Black, (4, 3)),
            (Black, (4, 5)),
        ],
    );
    let before = occupancy(&board);
    assert_eq!(board.place(4, 4, White), Err(MoveError::Suicide));
    assert_eq!(occupancy(&board), before);
    assert_eq!(board.history().len(), 4);
}

#[test]
fn test_multi_stone_suicide_rejected() {
    let mut board = board9(KoRule::Simple);
    setpos(
        &mut board,
        &[
            (White, (0, 0)),
            (Black, (2, 0)),
            (Black, (0, 1)),
            (Black, (1, 1)),
        ],
    );
    // Filling (1, 0) would leave the two white stones with no liberty.
    assert_eq!(board.place(1, 0, White), Err(MoveError::Suicide));
    assert_eq!(board.at(0, 0), Some(White));
    assert_eq!(board.at(1, 0), None);
}

#[test]
fn test_capture_resolves_before_suicide_check() {
    let mut board = board9(KoRule::Simple);
    setpos(&mut board, &ko_shape(0));
    board.place(2, 1, Black).unwrap();

    // White's stone has no liberty until the black stone is removed.
    assert_eq!(board.place(1, 1, White), Ok(1));
    assert_eq!(board.at(2, 1), None);
    assert!(board.has_liberty(1, 1));
}

// =============================================================================
// Ko tests
// =============================================================================

#[test]
fn test_simple_ko_rejects_immediate_retake() {
    let mut board = board9(KoRule::Simple);
    setpos(&mut board, &ko_shape(0));
    board.place(2, 1, Black).unwrap();
    board.place(1, 1, White).unwrap();

    let before = occupancy(&board);
    let turns = board.history().len();
    assert_eq!(board.place(2, 1, Black), Err(MoveError::Ko));
    assert_eq!(occupancy(&board), before);
    assert_eq!(board.history().len(), turns);
}

#[test]
fn test_simple_ko_allows_retake_after_exchange() {
    let mut board = board9(KoRule::Simple);
    setpos(&mut board, &ko_shape(0));
    board.place(2, 1, Black).unwrap();
    board.place(1, 1, White).unwrap();
    assert_eq!(board.place(2, 1, Black), Err(MoveError::Ko));

    // Ko threat and answer elsewhere change the position.
    board.place(8, 8, Black).unwrap();
    board.place(7, 7, White).unwrap();
    assert_eq!(board.place(2, 1, Black), Ok(1));
    assert_eq!(board.at(1, 1), None);
}

#[test]
fn test_simple_ko_with_handicap_stones() {
    let mut board = board9(KoRule::Simple);
    board
        .apply_handicap(Black, get_handicap(9, 2).unwrap())
        .unwrap();
    setpos(&mut board, &ko_shape(0));
    board.place(2, 1, Black).unwrap();
    board.place(1, 1, White).unwrap();

    assert_eq!(board.place(2, 1, Black), Err(MoveError::Ko));
    assert_eq!(board.at(6, 2), Some(Black));
}

/// Two kos, taken and retaken alternately, return to the starting position
/// after four moves. Only superko notices.
fn double_ko_cycle(ko_rule: KoRule) -> (Board, Vec<Option<Stone>>) {
    let mut board = board9(ko_rule);
    setpos(&mut board, &ko_shape(0));
    setpos(&mut board, &[(Black, (2, 1))]);
    setpos(&mut board, &ko_shape(5));
    setpos(&mut board, &[(White, (1, 6))]);
    let start = occupancy(&board);

    assert_eq!(board.place(1, 1, White), Ok(1)); // take first ko
    assert_eq!(board.place(2, 6, Black), Ok(1)); // take second ko
    assert_eq!(board.place(2, 1, Black), Ok(1)); // retake first ko
    (board, start)
}

#[test]
fn test_simple_ko_misses_long_cycle() {
    let (mut board, start) = double_ko_cycle(KoRule::Simple);
    assert_eq!(board.place(1, 6, White), Ok(1));
    assert_eq!(occupancy(&board), start);
}

#[test]
fn test_superko_rejects_long_cycle() {
    let (mut board, _) = double_ko_cycle(KoRule::Super);
    let before = occupancy(&board);
    assert_eq!(board.place(1, 6, White), Err(MoveError::Ko));
    assert_eq!(occupancy(&board), before);
}

#[test]
fn test_superko_rejects_immediate_retake() {
    let mut board = board9(KoRule::Super);
    setpos(&mut board, &ko_shape(0));
    board.place(2, 1, Black).unwrap();
    board.place(1, 1, White).unwrap();
    assert_eq!(board.place(2, 1, Black), Err(MoveError::Ko));
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_history_replay_matches_every_position() {
    let mut board = board9(KoRule::Simple);
    let moves = ko_shape(0)
        .into_iter()
        .chain([(Black, (2, 1)), (White, (1, 1)), (Black, (8, 8)), (White, (7, 7))])
        .chain([(Black, (2, 1))]);

    let mut observed = vec![occupancy(&board)];
    for (stone, (x, y)) in moves {
        board.place(x, y, stone).unwrap();
        observed.push(occupancy(&board));
    }
    // Illegal attempts leave no trace.
    let _ = board.place(2, 1, White);
    let _ = board.place(9, 9, White);

    assert_eq!(board.history().len(), observed.len() - 1);
    for (n, expected) in observed.iter().enumerate() {
        assert_eq!(&board.history().replay(n).unwrap(), expected, "turn {n}");
    }
}

#[test]
fn test_history_records_removals_before_placement() {
    let mut board = board9(KoRule::Simple);
    setpos(&mut board, &[(White, (0, 0)), (Black, (1, 0))]);
    board.place(0, 1, Black).unwrap();

    let last = board.history().turns().last().unwrap();
    assert_eq!(last.len(), 2);
    assert_eq!(last[0].point, (0, 0));
    assert_eq!(last[0].stone, None);
    assert_eq!(last[1].point, (0, 1));
    assert_eq!(last[1].stone, Some(Black));
}

// =============================================================================
// Handicap
// =============================================================================

#[test]
fn test_full_handicap_9x9() {
    let mut board = board9(KoRule::Simple);
    let points = get_handicap(9, 9).unwrap();
    board.apply_handicap(Black, points).unwrap();

    let expected: [Point; 9] = [
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
    for (x, y) in expected {
        assert_eq!(board.at(x, y), Some(Black), "handicap stone at ({x}, {y})");
    }
    let stones = occupancy(&board).iter().filter(|c| c.is_some()).count();
    assert_eq!(stones, 9);
    assert!(board.history().is_empty());
}

#[test]
fn test_handicap_limits() {
    assert_eq!(max_handicap(9), Some(9));
    assert_eq!(max_handicap(19), Some(9));
    assert!(matches!(
        get_handicap(9, 10),
        Err(HandicapError::LevelTooHigh { level: 10, max: 9, .. })
    ));
    assert_eq!(get_handicap(7, 1), Err(HandicapError::UnsupportedSize(7)));
}

#[test]
fn test_handicap_rejected_after_play_started() {
    let mut board = board9(KoRule::Simple);
    board.place(2, 2, Black).unwrap();
    let before = occupancy(&board);

    assert_eq!(
        board.apply_handicap(White, &[(2, 2), (6, 6)]),
        Err(BoardError::PlayStarted(1))
    );
    assert_eq!(occupancy(&board), before);
    assert_eq!(board.history().replay(1).unwrap(), before);
    assert!(board.history().base().iter().all(Option::is_none));
}

#[test]
fn test_handicap_rejects_off_board_points() {
    let mut board = board9(KoRule::Simple);
    // 19x19 star points do not fit on a 9x9 board.
    let points = get_handicap(19, 2).unwrap();
    assert_eq!(
        board.apply_handicap(Black, points),
        Err(BoardError::PointOutOfBounds((15, 3)))
    );
    assert!(occupancy(&board).iter().all(Option::is_none));
}
