//! Board invariants - sanity checks that detect bugs.
//!
//! No sequence of legal or rejected moves should ever trigger these.

use crate::game::{Board, Slot, on_board};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut empty = 0usize;

    for (coord, slot) in board.iter() {
        let playable = on_board(coord.row, coord.col, board.arm_thickness(), board.size());
        if playable != slot.is_playable() {
            violations.push(InvariantViolation {
                message: format!(
                    "Slot at {coord} is {slot:?} but shape says playable = {playable}"
                ),
            });
        }
        if slot == Slot::Empty {
            empty += 1;
        }
    }

    // A jump empties two slots and fills one, so some slot is always empty.
    if empty == 0 {
        violations.push(InvariantViolation {
            message: "Board has no empty slot".to_string(),
        });
    }

    let ceiling = usize::try_from(board.playable_count())
        .unwrap_or(0)
        .saturating_sub(1);
    if board.score() > ceiling {
        violations.push(InvariantViolation {
            message: format!("Score {} exceeds {ceiling} marbles", board.score()),
        });
    }

    if board.slot(board.start()).is_none_or(|s| !s.is_playable()) {
        violations.push(InvariantViolation {
            message: format!("Start slot {} is not playable", board.start()),
        });
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(board: &Board) {
    let violations = check_invariants(board);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_board: &Board) {}
