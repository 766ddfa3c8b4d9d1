//! Game layer.
//!
//! Implements the marble solitaire rules:
//! - Cross-shaped board geometry derived from the arm thickness
//! - Slot states (absent, occupied, empty)
//! - Jump-capture move legality and execution
//! - Score and terminal-state detection

mod board;
mod coord;
mod invariants;
mod shape;

pub use board::{Board, GameStatus, Slot};
pub use coord::{Coord, Direction, Move};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use shape::{
    DEFAULT_ARM_THICKNESS, MAX_ARM_THICKNESS, board_size, center, corner_block_side, far_edge,
    is_valid_arm_thickness, near_edge, on_board, playable_slots,
};
