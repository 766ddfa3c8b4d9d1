//! Play command implementation.

use super::output::{JsonPlayResult, JsonRejectedMove, format_board};
use super::script::{ScriptedMove, parse_script, read_script};
use super::{BoardArgs, CliError, OutputFormat};
use marble_solitaire::game::assert_invariants;
use marble_solitaire::{Board, Snapshot};
use std::path::Path;

/// What happened while applying a script.
#[derive(Debug, Default)]
pub(crate) struct PlayOutcome {
    pub(crate) applied: usize,
    pub(crate) rejected: Vec<JsonRejectedMove>,
    pub(crate) unplayed: usize,
}

/// Apply scripted moves in order.
///
/// Stops at the first illegal move unless `keep_going` is set, in which case
/// the move is logged and skipped. Moves after the game has ended are counted
/// as unplayed.
///
/// # Errors
///
/// Returns an error naming the script line of the first illegal move when
/// `keep_going` is not set.
pub(crate) fn run_script(
    board: &mut Board,
    moves: &[ScriptedMove],
    keep_going: bool,
) -> Result<PlayOutcome, CliError> {
    let mut outcome = PlayOutcome::default();

    for (idx, scripted) in moves.iter().enumerate() {
        if board.is_game_over() {
            outcome.unplayed = moves.len() - idx;
            crate::log!(
                "Game over at score {}; ignoring {} remaining move(s)",
                board.score(),
                outcome.unplayed
            );
            break;
        }

        match board.apply(scripted.mv) {
            Ok(()) => {
                outcome.applied += 1;
                assert_invariants(board);
                crate::verbose!(
                    "line {}: {} (score {})",
                    scripted.line,
                    scripted.mv,
                    board.score()
                );
            }
            Err(e) if keep_going => {
                crate::log!("line {}: {e}; skipped", scripted.line);
                outcome.rejected.push(JsonRejectedMove {
                    line: scripted.line,
                    mv: scripted.mv,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(CliError::new(format!("line {}: {e}", scripted.line))),
        }
    }

    Ok(outcome)
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the board configuration is invalid, the script cannot
/// be read or parsed, or a move is illegal without `--keep-going`.
pub(crate) fn execute(
    board: BoardArgs,
    script: Option<&Path>,
    keep_going: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut board = board.build()?;
    let text = read_script(script)?;
    let moves = parse_script(&text)?;
    crate::verbose!("Loaded {} move(s)", moves.len());

    let outcome = run_script(&mut board, &moves, keep_going)?;

    match format {
        OutputFormat::Text => println!("{}", format_board(&board, format)?),
        OutputFormat::Json => {
            let result = JsonPlayResult {
                applied: outcome.applied,
                rejected: outcome.rejected,
                unplayed: outcome.unplayed,
                board: Snapshot::of(&board),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use marble_solitaire::Move;

    fn scripted(moves: &[(i32, i32, i32, i32)]) -> Vec<ScriptedMove> {
        moves
            .iter()
            .enumerate()
            .map(|(idx, &(a, b, c, d))| ScriptedMove {
                line: idx + 1,
                mv: Move::from_parts(a, b, c, d),
            })
            .collect()
    }

    #[test]
    fn test_run_script_opening() {
        let mut board = Board::new(3, 3, 3).unwrap();
        let moves = scripted(&[(5, 3, 3, 3), (2, 3, 4, 3), (3, 1, 3, 3), (0, 3, 2, 3)]);
        let outcome = run_script(&mut board, &moves, false).unwrap();
        assert_eq!(outcome.applied, 4);
        assert!(outcome.rejected.is_empty());
        assert_eq!(board.score(), 28);
    }

    #[test]
    fn test_run_script_stops_on_illegal() {
        let mut board = Board::new(3, 3, 3).unwrap();
        let moves = scripted(&[(5, 3, 3, 3), (5, 3, 3, 3)]);
        let err = run_script(&mut board, &moves, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: illegal move from (5, 3) to (3, 3)"
        );
        assert_eq!(board.score(), 31);
    }

    #[test]
    fn test_run_script_keep_going() {
        let mut board = Board::new(3, 3, 3).unwrap();
        let moves = scripted(&[(5, 3, 3, 3), (5, 3, 3, 3), (2, 3, 4, 3)]);
        let outcome = run_script(&mut board, &moves, true).unwrap();
        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].line, 2);
        assert_eq!(board.score(), 30);
    }

    #[test]
    fn test_run_script_after_game_over() {
        let mut board = Board::new(1, 1, 1).unwrap();
        let moves = scripted(&[(0, 1, 2, 1), (1, 0, 1, 2)]);
        let outcome = run_script(&mut board, &moves, false).unwrap();
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.unplayed, 2);
        assert_eq!(board.score(), 4);
    }
}
