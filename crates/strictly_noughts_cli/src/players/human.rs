//! A person typing moves.

use super::{Player, PlayerError, PlayerKind};
use anyhow::Result;
use std::sync::Arc;
use strictly_noughts::{GameState, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::debug;

/// A line source several seats can share, e.g. one terminal for two people.
pub type SharedInput<R> = Arc<Mutex<R>>;

const HINT: &str = "Enter a cell number 1-9 or a name like 'center' (q to quit).\n";

/// Reads one move per line.
///
/// Accepts a cell number as printed on the board or a position label.
/// `q` or `quit` ends the session.
pub struct HumanPlayer<R, W> {
    name: String,
    input: SharedInput<R>,
    output: W,
}

impl<R, W> HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a human player reading from `input`; hints go to `output`.
    pub fn new(name: impl Into<String>, input: SharedInput<R>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

#[async_trait::async_trait]
impl<R, W> Player for HumanPlayer<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn choose_cell(&mut self, _state: &GameState) -> Result<usize> {
        let mut input = self.input.lock().await;
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line).await? == 0 {
                return Err(PlayerError::InputClosed.into());
            }

            let entry = line.trim();
            if entry.eq_ignore_ascii_case("q") || entry.eq_ignore_ascii_case("quit") {
                return Err(PlayerError::Quit.into());
            }

            if let Some(position) = Position::parse_input(entry) {
                debug!(player = %self.name, %position, "Human chose position");
                return Ok(position.to_index());
            }

            debug!(player = %self.name, entry, "Unrecognized input");
            self.output.write_all(HINT.as_bytes()).await?;
            self.output.flush().await?;
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}
