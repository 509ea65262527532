//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, SharedInput};

use anyhow::Result;
use derive_more::{Display, Error};
use strictly_noughts::GameState;

/// Whether a seat is taken by a person or the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlayerKind {
    /// Moves come from typed input.
    #[display("human")]
    Human,
    /// Moves come from the minimax search.
    #[display("computer")]
    Computer,
}

/// Ways a player can end a session without choosing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlayerError {
    /// The person asked to stop.
    #[display("Player quit")]
    Quit,
    /// Input ran out before a move was made.
    #[display("Input closed")]
    InputClosed,
}

/// Trait for anything that can take a turn.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Picks a cell (0-8) for the side to move in `state`.
    ///
    /// The orchestrator validates the choice; a rejected cell leads to
    /// another call with the same state.
    async fn choose_cell(&mut self, state: &GameState) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Human or computer.
    fn kind(&self) -> PlayerKind;
}
