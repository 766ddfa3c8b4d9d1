//! Plain-text board output.
//!
//! Board format (standard board, empty centre):
//! ```text
//!     O O O
//!     O O O
//! O O O O O O O
//! O O O _ O O O
//! O O O O O O O
//!     O O O
//!     O O O
//! ```
//! Each leading absent slot becomes two spaces so playable columns line up
//! across rows. Trailing absent slots are dropped. No trailing newline.

use crate::game::{Board, Slot};

/// Render the board grid.
#[must_use]
pub fn render_text(board: &Board) -> String {
    let mut output = String::new();

    for row in 0..board.size() {
        if row > 0 {
            output.push('\n');
        }
        render_row(&mut output, board.row(row));
    }

    output
}

/// Render one row of slots.
fn render_row(output: &mut String, slots: &[Slot]) {
    let mut seen_playable = false;
    let mut previous_playable = false;

    for &slot in slots {
        if slot.is_playable() {
            if previous_playable {
                output.push(' ');
            }
            output.push(slot.symbol());
            seen_playable = true;
        } else if !seen_playable {
            output.push_str("  ");
        }
        previous_playable = slot.is_playable();
    }
}

/// Render the board followed by the score line, prefixed with
/// `Game over!` when no legal move remains.
#[must_use]
pub fn render_summary(board: &Board) -> String {
    let mut output = String::new();

    if board.is_game_over() {
        output.push_str("Game over!\n");
    }
    output.push_str(&render_text(board));
    output.push_str("\nScore: ");
    output.push_str(&board.score().to_string());

    output
}
