#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use marble_solitaire::game::check_invariants;
use marble_solitaire::{Board, GameError};

/// Structured input for move fuzzing.
#[derive(Arbitrary, Debug)]
struct MovesInput {
    /// Arm thickness (any value, validity is part of the test).
    arm_thickness: i8,
    /// Start row.
    start_row: i8,
    /// Start column.
    start_col: i8,
    /// Raw move attempts as (from_row, from_col, to_row, to_col).
    moves: Vec<(i8, i8, i8, i8)>,
}

fuzz_target!(|input: MovesInput| {
    let arm = i32::from(input.arm_thickness);
    let mut board = match Board::new(arm, i32::from(input.start_row), i32::from(input.start_col)) {
        Ok(board) => board,
        Err(GameError::InvalidConfig(_)) => return,
        Err(e) => panic!("construction failed with {e}"),
    };

    // Cap move count to keep runs short
    for &(fr, fc, tr, tc) in input.moves.iter().take(256) {
        let (fr, fc, tr, tc) = (i32::from(fr), i32::from(fc), i32::from(tr), i32::from(tc));
        let score = board.score();
        let legal = board.is_legal_move(fr, fc, tr, tc);

        match board.make_move(fr, fc, tr, tc) {
            Ok(()) => {
                assert!(legal, "move succeeded but was reported illegal");
                assert_eq!(board.score(), score - 1);
            }
            Err(GameError::IllegalMove { .. }) => {
                assert!(!legal, "legal move was rejected");
                assert_eq!(board.score(), score);
            }
            Err(e) => panic!("unexpected error {e}"),
        }

        let violations = check_invariants(&board);
        assert!(violations.is_empty(), "invariant violations: {violations:?}");
    }

    assert_eq!(board.is_game_over(), board.legal_moves().next().is_none());
});
