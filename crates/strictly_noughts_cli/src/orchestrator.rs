//! Game orchestration between players.

use super::players::{Player, PlayerKind};
use anyhow::Result;
use strictly_noughts::{Board, GameState, GameStatus, IllegalMove, Mark};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board is ready.
    GameStarted {
        /// The empty board.
        board: Board,
    },
    /// A player has been asked for a move.
    TurnStarted {
        /// Player name.
        player: String,
        /// The mark they play.
        mark: Mark,
        /// Human or computer.
        kind: PlayerKind,
    },
    /// A move was accepted.
    MoveMade {
        /// Player name.
        player: String,
        /// The mark placed.
        mark: Mark,
        /// Cell index 0-8.
        cell: usize,
        /// Board after the move.
        board: Board,
    },
    /// A move was refused; the same player is asked again.
    MoveRejected {
        /// Player name.
        player: String,
        /// Why it was refused.
        reason: IllegalMove,
    },
    /// Game ended.
    GameOver {
        /// Final status (won or drawn).
        status: GameStatus,
        /// Winner's name, if anyone won.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
///
/// Owns the only copy of the game state; players see it by reference and the
/// UI sees it through events.
pub struct Orchestrator {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            state: GameState::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs the game loop until the game is won or drawn.
    ///
    /// Returns the final state. Errors come from players (quit, closed input)
    /// or a closed event channel.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<GameState> {
        info!("Starting game orchestration");
        self.event_tx.send(GameEvent::GameStarted {
            board: *self.state.board(),
        })?;

        loop {
            let status = self.state.status();
            if status.is_terminal() {
                let winner = status.winner().map(|mark| self.player(mark).name().to_string());
                info!(%status, ?winner, "Game over");
                self.event_tx.send(GameEvent::GameOver { status, winner })?;
                return Ok(self.state.clone());
            }

            let mark = self.state.current();
            let (name, kind) = {
                let player = self.player(mark);
                (player.name().to_string(), player.kind())
            };

            self.event_tx.send(GameEvent::TurnStarted {
                player: name.clone(),
                mark,
                kind,
            })?;

            debug!(player = %name, %mark, "Waiting for move");
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let cell = player.choose_cell(&self.state).await?;

            match self.state.apply_move(cell, mark) {
                Ok(next) => {
                    self.state = next;
                    self.event_tx.send(GameEvent::MoveMade {
                        player: name,
                        mark,
                        cell,
                        board: *self.state.board(),
                    })?;
                }
                Err(reason) => {
                    info!(player = %name, cell, %reason, "Move rejected");
                    self.event_tx.send(GameEvent::MoveRejected {
                        player: name,
                        reason,
                    })?;
                }
            }
        }
    }

    /// Starts a new game with the same players.
    pub fn restart(&mut self) {
        self.state = GameState::reset();
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }
}
