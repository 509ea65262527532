//! Strictly Noughts - terminal shell.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use strictly_noughts::{analyze, Board, GameState, GameStatus, Mark};
use strictly_noughts_cli::render::{infer_to_move, render_analysis, render_event};
use strictly_noughts_cli::{
    ComputerPlayer, GameEvent, GameMode, HumanPlayer, Orchestrator, Player, PlayerError,
    SessionConfig, SharedInput,
};
use tokio::io::BufReader;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            mode,
            computer_mark,
            delay_ms,
            games,
        } => {
            let mut config = SessionConfig::load_or_default(&cli.config)?;
            if let Some(mode) = mode {
                config = config.with_mode(mode);
            }
            if let Some(mark) = computer_mark {
                config = config.with_computer_mark(mark);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_computer_delay_ms(delay_ms);
            }
            run_play(config, games).await
        }
        Command::Selfplay { delay_ms, games } => {
            let mut config = SessionConfig::load_or_default(&cli.config)?;
            if let Some(delay_ms) = delay_ms {
                config = config.with_computer_delay_ms(delay_ms);
            }
            run_selfplay(config, games).await
        }
        Command::Analyze { board, to_move } => run_analyze(&board, to_move),
    }
}

/// Play against a person or the computer on stdin/stdout
#[instrument(skip(config), fields(mode = %config.mode()))]
async fn run_play(config: SessionConfig, games: u32) -> Result<()> {
    info!("Starting terminal session");

    let computer_mark = match config.mode() {
        GameMode::Computer => Some(*config.computer_mark()),
        GameMode::TwoPlayer => None,
    };

    // Both human seats share one buffered stdin; only one of them reads at a time.
    let input: SharedInput<_> = Arc::new(Mutex::new(BufReader::new(tokio::io::stdin())));
    let seat = |mark: Mark| -> Box<dyn Player> {
        if computer_mark == Some(mark) {
            Box::new(ComputerPlayer::new("Computer", config.computer_delay()))
        } else {
            Box::new(HumanPlayer::new(
                config.name_for(mark),
                input.clone(),
                tokio::io::stdout(),
            ))
        }
    };

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = spawn_renderer(event_rx);
    let mut orchestrator = Orchestrator::new(seat(Mark::X), seat(Mark::O), event_tx);

    let outcome = play_games(&mut orchestrator, games).await;
    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;

    match outcome {
        Err(e) if e.downcast_ref::<PlayerError>().is_some() => {
            println!("{}. Goodbye!", e);
            Ok(())
        }
        other => other,
    }
}

/// Computer against computer
#[instrument(skip(config), fields(delay_ms = config.computer_delay_ms()))]
async fn run_selfplay(config: SessionConfig, games: u32) -> Result<()> {
    let delay = config.computer_delay();

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = spawn_renderer(event_rx);
    let mut orchestrator = Orchestrator::new(
        Box::new(ComputerPlayer::new(config.player_x_name().clone(), delay)),
        Box::new(ComputerPlayer::new(config.player_o_name().clone(), delay)),
        event_tx,
    );

    let outcome = play_games(&mut orchestrator, games).await;
    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;
    outcome
}

/// Print the value of every legal move in a position
#[instrument]
fn run_analyze(board: &str, to_move: Option<Mark>) -> Result<()> {
    let board: Board = board.parse()?;
    let side = to_move.unwrap_or_else(|| infer_to_move(&board));
    let state = GameState::from_board(board, side);

    if state.status() != GameStatus::InProgress {
        println!("{}\n\nPosition is already decided: {}", board, state.status());
        return Ok(());
    }

    let analysis = analyze(&state)?;
    print!("{}", render_analysis(&board, &analysis));
    Ok(())
}

/// Results over a run of games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => unreachable!("orchestrator returns only finished games"),
        }
    }
}

/// Runs `games` games in a row and prints a tally.
async fn play_games(orchestrator: &mut Orchestrator, games: u32) -> Result<()> {
    let tally = run_games(orchestrator, games).await?;
    if games > 1 {
        println!(
            "\nX wins: {}  O wins: {}  Draws: {}",
            tally.x_wins, tally.o_wins, tally.draws
        );
    }
    Ok(())
}

async fn run_games(orchestrator: &mut Orchestrator, games: u32) -> Result<Tally> {
    let mut tally = Tally::default();
    for game in 1..=games {
        if game > 1 {
            orchestrator.restart();
        }
        let end = orchestrator.run().await?;
        tally.record(end.status());
    }
    Ok(tally)
}

fn spawn_renderer(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(text) = render_event(&event) {
                println!("{}", text);
            }
        }
    })
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cli_parses_play_overrides() {
        let cli = Cli::parse_from([
            "noughts",
            "play",
            "--mode",
            "two-player",
            "--computer-mark",
            "x",
            "--delay-ms",
            "0",
        ]);
        match cli.command {
            Command::Play {
                mode,
                computer_mark,
                delay_ms,
                games,
            } => {
                assert_eq!(mode, Some(GameMode::TwoPlayer));
                assert_eq!(computer_mark, Some(Mark::X));
                assert_eq!(delay_ms, Some(0));
                assert_eq!(games, 1);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_selfplay_delay() {
        let cli = Cli::parse_from(["noughts", "selfplay", "--delay-ms", "0", "--games", "3"]);
        match cli.command {
            Command::Selfplay { delay_ms, games } => {
                assert_eq!(delay_ms, Some(0));
                assert_eq!(games, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_selfplay_games_all_draw() {
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(
            Box::new(ComputerPlayer::new("X", Duration::ZERO)),
            Box::new(ComputerPlayer::new("O", Duration::ZERO)),
            event_tx,
        );
        let tally = run_games(&mut orchestrator, 2).await.unwrap();
        assert_eq!(
            tally,
            Tally {
                x_wins: 0,
                o_wins: 0,
                draws: 2
            }
        );
    }

    #[test]
    fn test_tally_records_winners() {
        let mut tally = Tally::default();
        tally.record(GameStatus::Won(Mark::X));
        tally.record(GameStatus::Won(Mark::O));
        tally.record(GameStatus::Draw);
        assert_eq!((tally.x_wins, tally.o_wins, tally.draws), (1, 1, 1));
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::parse_from(["noughts", "analyze", "--board", "XX./.O./..."]);
        assert!(matches!(cli.command, Command::Analyze { to_move: None, .. }));
    }
}
