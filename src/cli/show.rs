//! Show command implementation.

use super::output::format_board;
use super::{BoardArgs, CliError, OutputFormat};

/// Execute the show command: print the freshly built board.
///
/// # Errors
///
/// Returns an error if the board configuration is invalid.
pub(crate) fn execute(board: BoardArgs, format: OutputFormat) -> Result<(), CliError> {
    let board = board.build()?;
    crate::verbose!(
        "Built board: arm thickness {}, empty start {}",
        board.arm_thickness(),
        board.start()
    );
    println!("{}", format_board(&board, format)?);
    Ok(())
}
