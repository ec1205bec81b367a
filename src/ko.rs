//! Ko rule strategies.
//!
//! A board binds one [`KoRule`] at construction. Both strategies are pure
//! functions of the committed history and the candidate position produced by
//! the move being tried; the candidate's own turn is not yet in the history.

use tracing::trace;

use crate::board::{KoRule, Stone};
use crate::history::History;

/// Returns true if `candidate` repeats a position forbidden by `rule`.
pub fn violates(rule: KoRule, history: &History, candidate: &[Option<Stone>]) -> bool {
    match rule {
        KoRule::Simple => simple_ko(history, candidate),
        KoRule::Super => super_ko(history, candidate),
    }
}

/// The candidate may not recreate the position from before the opponent's
/// last move.
fn simple_ko(history: &History, candidate: &[Option<Stone>]) -> bool {
    let Some(n) = history.len().checked_sub(1) else {
        return false;
    };
    trace!(turn = n, "simple ko check");
    history
        .replay(n)
        .is_some_and(|previous| previous.as_slice() == candidate)
}

/// Positional superko: the candidate may not recreate any earlier position.
fn super_ko(history: &History, candidate: &[Option<Stone>]) -> bool {
    trace!(turns = history.len(), "superko scan");
    history.any_position(|previous| previous == candidate)
}
