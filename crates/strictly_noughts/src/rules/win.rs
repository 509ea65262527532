//! Win detection.

use super::super::{Board, Mark, Square};
use tracing::instrument;

/// The eight index triples that win: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// True when `mark` holds all three cells of some line.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let squares = board.squares();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&cell| squares[cell] == Square::Occupied(mark)))
}

/// Returns the side holding a complete line, if any.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(board, mark))
}
