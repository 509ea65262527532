//! Draw detection.

use super::super::{Board, Square};

/// Checks if every cell holds a mark.
///
/// A full board is a draw only when no line is complete; see
/// [`compute_status`](super::compute_status).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "X...O....".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
    }
}
