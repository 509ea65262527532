//! The minimax opponent.

use super::{Player, PlayerKind};
use anyhow::Result;
use std::time::Duration;
use strictly_noughts::{best_move, GameState};
use tracing::{debug, instrument};

/// Plays the search's optimal move after an optional pause.
pub struct ComputerPlayer {
    name: String,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that waits `delay` before each move.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn choose_cell(&mut self, state: &GameState) -> Result<usize> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let cell = best_move(state)?;
        debug!(cell, "Computer chose cell");
        Ok(cell)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_noughts::{Board, Mark};

    #[tokio::test]
    async fn test_blocks_threat() {
        let board: Board = "XX./.O./...".parse().unwrap();
        let state = GameState::from_board(board, Mark::O);
        let mut computer = ComputerPlayer::new("Computer", Duration::ZERO);
        assert_eq!(computer.choose_cell(&state).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_finished_game_is_an_error() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let state = GameState::from_board(board, Mark::O);
        let mut computer = ComputerPlayer::new("Computer", Duration::ZERO);
        assert!(computer.choose_cell(&state).await.is_err());
    }
}
