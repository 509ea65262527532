//! Engine and search errors.

use super::mark::Mark;
use super::state::GameStatus;

/// A move the rules do not allow. The state it was tried on is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Cell index outside 0-8.
    #[display("Cell {} is off the board (expected 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// A mark tried to move out of turn.
    #[display("It's {}'s turn, not {}'s", expected, got)]
    WrongTurn {
        /// The mark whose turn it is.
        expected: Mark,
        /// The mark that tried to move.
        got: Mark,
    },
}

impl std::error::Error for IllegalMove {}

/// Search was asked for a move where there is none to make.
///
/// This is a caller bug rather than a game condition: callers only search
/// positions that are still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The position is already decided.
    #[display("Cannot search a finished game ({})", _0)]
    GameOver(GameStatus),
}

impl std::error::Error for SearchError {}
