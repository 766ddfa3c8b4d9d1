//! Serializable board snapshots for machine-readable output.

use serde::Serialize;

use crate::game::{Board, Coord, GameStatus};
use crate::render::render_text;

/// JSON-serializable view of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Arm thickness the board was built with.
    pub arm_thickness: i32,
    /// Side length of the grid.
    pub size: i32,
    /// Slot that started empty.
    pub start: Coord,
    /// Marbles left on the board.
    pub score: usize,
    /// Whether any legal move remains.
    pub status: GameStatus,
    /// Convenience flag, `true` when `status` is `Over`.
    pub game_over: bool,
    /// Rendered rows, top to bottom.
    pub rows: Vec<String>,
}

impl Snapshot {
    /// Capture the current state of a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        let status = board.status();
        Self {
            arm_thickness: board.arm_thickness(),
            size: board.size(),
            start: board.start(),
            score: board.score(),
            status,
            game_over: status == GameStatus::Over,
            rows: render_text(board).lines().map(str::to_owned).collect(),
        }
    }
}
