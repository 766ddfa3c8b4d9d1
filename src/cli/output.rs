//! Output formatting utilities for CLI.

use marble_solitaire::render::render_summary;
use marble_solitaire::{Board, Move, Snapshot};
use serde::Serialize;

use super::{CliError, OutputFormat};

/// JSON-serializable rejected move.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct JsonRejectedMove {
    /// Script line the move came from.
    pub(crate) line: usize,
    /// The attempted move.
    #[serde(rename = "move")]
    pub(crate) mv: Move,
    /// Why it was rejected.
    pub(crate) reason: String,
}

/// JSON-serializable result of a `play` run.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayResult {
    /// Number of moves applied.
    pub(super) applied: usize,
    /// Moves skipped with `--keep-going`.
    pub(super) rejected: Vec<JsonRejectedMove>,
    /// Script moves not attempted because the game had ended.
    pub(super) unplayed: usize,
    /// Final board.
    pub(super) board: Snapshot,
}

/// Render a board in the requested format.
pub(super) fn format_board(board: &Board, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_summary(board)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Snapshot::of(board))?),
    }
}
