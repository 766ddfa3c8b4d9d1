// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Marble solitaire: a rules engine for cross-shaped peg solitaire boards.
//!
//! A board is a square grid of slots, each absent, occupied, or empty. A move
//! jumps a marble two slots along a row or column over an occupied slot,
//! removing the jumped marble. The game is over when no such move remains.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (`marbles`): args, scripts    │
//! ├─────────────────────────────────────┤
//! │   render / snapshot: text, JSON     │
//! ├─────────────────────────────────────┤
//! │   game: shape, board, invariants    │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use marble_solitaire::Board;
//!
//! let mut board = Board::new(3, 3, 3).unwrap();
//! assert_eq!(board.score(), 32);
//!
//! board.make_move(5, 3, 3, 3).unwrap();
//! assert_eq!(board.score(), 31);
//! assert!(board.make_move(5, 3, 3, 3).is_err());
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod snapshot;

pub use error::{ConfigError, GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{Board, Coord, DEFAULT_ARM_THICKNESS, Direction, GameStatus, Move, Slot};
pub use snapshot::Snapshot;
