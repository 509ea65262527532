//! Strictly Noughts - a pure noughts-and-crosses engine with a perfect opponent.
//!
//! # Architecture
//!
//! - **Board/Rules Engine**: [`Board`], [`GameState`] and the rule functions in
//!   [`compute_status`] validate moves and detect wins and draws.
//! - **Move Search**: [`best_move`] and [`analyze`] run an exhaustive minimax
//!   over the remaining game tree for the side to move.
//!
//! Every operation is pure: a move produces a new [`GameState`] and the caller
//! decides what to keep. Rendering and input belong to whoever drives the engine.
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{best_move, GameState, GameStatus, Mark};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let state = GameState::new();
//! let state = state.apply_move(4, Mark::X)?;
//! let reply = best_move(&state)?;
//! let state = state.apply_move(reply, Mark::O)?;
//! assert_eq!(state.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod mark;
mod position;
mod rules;
mod search;
mod state;

pub use board::{Board, BoardParseError, Square, CELL_COUNT};
pub use error::{IllegalMove, SearchError};
pub use mark::Mark;
pub use position::Position;
pub use rules::{compute_status, has_won, is_full, winner, WINNING_LINES};
pub use search::{analyze, best_move, Analysis, ScoredMove, SearchStats, WIN_SCORE};
pub use state::{GameState, GameStatus};
