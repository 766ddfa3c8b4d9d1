//! CLI command implementations for the `marbles` binary.

pub(crate) mod logger;
pub(crate) mod play;
pub(crate) mod script;
pub(crate) mod show;

mod output;

use clap::{Args, ValueEnum};
use marble_solitaire::game::{DEFAULT_ARM_THICKNESS, center};
use marble_solitaire::{Board, GameError};
use std::error::Error;
use std::fmt;

/// Output format for board dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Board grid, score line, and game-over marker.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Board configuration shared by all commands.
#[derive(Args, Debug, Clone, Copy)]
pub(crate) struct BoardArgs {
    /// Arm thickness (positive odd number)
    #[arg(short, long, default_value_t = DEFAULT_ARM_THICKNESS, allow_negative_numbers = true)]
    pub(crate) arm: i32,

    /// Row of the initially empty slot (default: centre)
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) row: Option<i32>,

    /// Column of the initially empty slot (default: centre)
    #[arg(short, long, allow_negative_numbers = true)]
    pub(crate) col: Option<i32>,
}

impl BoardArgs {
    /// Build the board, filling in the centre for any missing start coordinate.
    pub(crate) fn build(self) -> Result<Board, CliError> {
        let middle = center(self.arm);
        let row = self.row.unwrap_or(middle.row);
        let col = self.col.unwrap_or(middle.col);
        Ok(Board::new(self.arm, row, col)?)
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(e: GameError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_args_default_to_centre() {
        let args = BoardArgs {
            arm: 5,
            row: None,
            col: None,
        };
        let board = args.build().unwrap();
        assert_eq!(board.start().row, 5);
        assert_eq!(board.start().col, 5);
    }

    #[test]
    fn test_board_args_reports_config_error() {
        let args = BoardArgs {
            arm: 2,
            row: None,
            col: None,
        };
        let err = args.build().unwrap_err();
        assert!(err.to_string().contains("arm thickness"));
    }
}
