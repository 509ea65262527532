//! Game state and the move transition.

use super::board::{Board, CELL_COUNT};
use super::error::IllegalMove;
use super::mark::Mark;
use super::rules::compute_status;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves can still be made.
    #[display("in progress")]
    InProgress,
    /// A side completed a line.
    #[display("{} wins", _0)]
    Won(Mark),
    /// Board full, no line.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// Won or drawn.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The winning mark, if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Complete game state.
///
/// Values are never mutated in place: [`GameState::apply_move`] returns the
/// successor and leaves `self` as it was. Once the status is terminal every
/// further move is rejected until [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current: Mark,
    status: GameStatus,
    /// Cells played, in order.
    history: Vec<usize>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts over. The result shares nothing with the previous game.
    pub fn reset() -> Self {
        Self::new()
    }

    /// Builds a state for an arbitrary position with `current` to move.
    ///
    /// Status is derived from the board; history starts empty.
    #[instrument]
    pub fn from_board(board: Board, current: Mark) -> Self {
        Self {
            board,
            current,
            status: compute_status(&board),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Cells played since this state's game began, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Empty cells in ascending order, or none once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    /// Plays `mark` at `cell` and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the game is over, the cell is off the board,
    /// `mark` is not the side to move, or the cell is taken.
    #[instrument(skip(self), fields(current = %self.current, status = %self.status))]
    pub fn apply_move(&self, cell: usize, mark: Mark) -> Result<GameState, IllegalMove> {
        self.check_move(cell, mark)
            .inspect_err(|reason| debug!(%reason, "Move rejected"))?;

        let board = self.board.with_mark(cell, mark);
        let status = compute_status(&board);
        let mut history = self.history.clone();
        history.push(cell);

        debug!(cell, %mark, %status, "Move applied");

        Ok(GameState {
            board,
            current: mark.opponent(),
            status,
            history,
        })
    }

    fn check_move(&self, cell: usize, mark: Mark) -> Result<(), IllegalMove> {
        if self.status.is_terminal() {
            return Err(IllegalMove::GameOver);
        }
        if cell >= CELL_COUNT {
            return Err(IllegalMove::OutOfRange(cell));
        }
        if mark != self.current {
            return Err(IllegalMove::WrongTurn {
                expected: self.current,
                got: mark,
            });
        }
        if !self.board.is_empty(cell) {
            return Err(IllegalMove::Occupied(cell));
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
