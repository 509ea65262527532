//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`]. They never look at whose turn it is, so the
//! same checks serve move application and the search.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{has_won, winner, WINNING_LINES};

use super::board::Board;
use super::state::GameStatus;
use tracing::instrument;

/// Classifies a board.
///
/// A line is checked before fullness, so a move that fills the last cell and
/// completes a line is a win.
#[instrument]
pub fn compute_status(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        return GameStatus::Won(mark);
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
