//! Exhaustive minimax for the side to move.
//!
//! The full tree below any position is at most 9! lines, so every node is
//! visited and no pruning is done. Each recursion works on its own copy of the
//! board.
//!
//! Scores are from the searching side's point of view. A win found `depth`
//! plies after the root move scores `WIN_SCORE - depth`, a loss scores
//! `depth - WIN_SCORE`, a full board scores zero. Quicker wins and slower
//! losses therefore rank higher.

use super::board::Board;
use super::error::SearchError;
use super::mark::Mark;
use super::rules::{has_won, is_full};
use super::state::{GameState, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Score of a win reached immediately after the root move.
pub const WIN_SCORE: i32 = 10;

/// A candidate cell and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index 0-8.
    pub cell: usize,
    /// Value for the side to move, assuming best play afterwards.
    pub score: i32,
}

/// Counters from one search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated, root children included.
    pub nodes: u64,
}

/// Every legal root move with its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The side the scores are for.
    pub side: Mark,
    /// One entry per empty cell, ascending by cell.
    pub moves: Vec<ScoredMove>,
    /// Search counters.
    pub stats: SearchStats,
}

impl Analysis {
    /// The highest-scoring move; the lowest cell wins ties.
    pub fn best(&self) -> Option<ScoredMove> {
        self.moves.iter().copied().fold(None, |best, candidate| match best {
            Some(best) if best.score >= candidate.score => Some(best),
            _ => Some(candidate),
        })
    }
}

/// Scores every legal move for the side to move in `state`.
///
/// # Errors
///
/// Returns [`SearchError::GameOver`] if `state` is already won or drawn.
#[instrument(skip(state), fields(side = %state.current(), status = %state.status()))]
pub fn analyze(state: &GameState) -> Result<Analysis, SearchError> {
    if state.status() != GameStatus::InProgress {
        error!("Search invoked on a finished game");
        return Err(SearchError::GameOver(state.status()));
    }

    let side = state.current();
    let mut minimax = Minimax::new(side);
    let board = state.board();
    let moves: Vec<ScoredMove> = board
        .empty_cells()
        .map(|cell| ScoredMove {
            cell,
            score: minimax.score(&board.with_mark(cell, side), 0, false),
        })
        .collect();

    let stats = SearchStats {
        nodes: minimax.nodes,
    };
    debug!(nodes = stats.nodes, candidates = moves.len(), "Search complete");

    Ok(Analysis { side, moves, stats })
}

/// The optimal cell for the side to move in `state`.
///
/// Among equally valued cells the lowest index is returned, so the answer is
/// the same on every call.
///
/// # Errors
///
/// Returns [`SearchError::GameOver`] if `state` is already won or drawn.
#[instrument(skip(state), fields(side = %state.current()))]
pub fn best_move(state: &GameState) -> Result<usize, SearchError> {
    let analysis = analyze(state)?;
    let best = analysis
        .best()
        .ok_or(SearchError::GameOver(state.status()))?;

    debug!(cell = best.cell, score = best.score, "Best move chosen");
    Ok(best.cell)
}

struct Minimax {
    computer: Mark,
    nodes: u64,
}

impl Minimax {
    fn new(computer: Mark) -> Self {
        Self { computer, nodes: 0 }
    }

    /// Value of `board` for `self.computer`, `depth` plies below the root move.
    fn score(&mut self, board: &Board, depth: i32, computer_to_move: bool) -> i32 {
        self.nodes += 1;

        let opponent = self.computer.opponent();
        if has_won(board, opponent) {
            return depth - WIN_SCORE;
        }
        if has_won(board, self.computer) {
            return WIN_SCORE - depth;
        }
        if is_full(board) {
            return 0;
        }

        let mover = if computer_to_move {
            self.computer
        } else {
            opponent
        };

        let mut best = if computer_to_move { i32::MIN } else { i32::MAX };
        for cell in board.empty_cells() {
            let value = self.score(&board.with_mark(cell, mover), depth + 1, !computer_to_move);
            best = if computer_to_move {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(board: &str, to_move: Mark) -> GameState {
        GameState::from_board(board.parse().unwrap(), to_move)
    }

    #[test]
    fn test_immediate_win_scores_highest() {
        let analysis = analyze(&state("OO./XX./X..", Mark::O)).unwrap();
        let best = analysis.best().unwrap();
        assert_eq!(best.cell, 2);
        assert_eq!(best.score, WIN_SCORE);
    }

    #[test]
    fn test_losing_move_scores_negative() {
        // X threatens the top row; anything but 2 loses on the next ply.
        let analysis = analyze(&state("XX./.O./...", Mark::O)).unwrap();
        let at = |cell| {
            analysis
                .moves
                .iter()
                .find(|m| m.cell == cell)
                .map(|m| m.score)
                .unwrap()
        };
        assert_eq!(at(8), 1 - WIN_SCORE);
        assert!(at(2) >= 0);
    }

    #[test]
    fn test_moves_listed_in_cell_order() {
        let analysis = analyze(&state("X...O...X", Mark::O)).unwrap();
        let cells: Vec<usize> = analysis.moves.iter().map(|m| m.cell).collect();
        assert_eq!(cells, vec![1, 2, 3, 5, 6, 7]);
        assert!(analysis.stats.nodes >= cells.len() as u64);
    }

    #[test]
    fn test_best_prefers_lowest_cell_on_ties() {
        let analysis = Analysis {
            side: Mark::O,
            moves: vec![
                ScoredMove { cell: 1, score: 0 },
                ScoredMove { cell: 3, score: 5 },
                ScoredMove { cell: 6, score: 5 },
            ],
            stats: SearchStats::default(),
        };
        assert_eq!(analysis.best().map(|m| m.cell), Some(3));
    }

    #[test]
    fn test_finished_game_is_an_error() {
        let drawn = state("XOX/XOO/OXX", Mark::O);
        assert_eq!(
            best_move(&drawn),
            Err(SearchError::GameOver(GameStatus::Draw))
        );
    }

    #[test]
    fn test_single_empty_cell() {
        let last = state("XOX/XOO/OX.", Mark::X);
        assert_eq!(best_move(&last), Ok(8));
    }
}
