//! Plain-text rendering of game events and analyses.

use super::orchestrator::GameEvent;
use super::players::PlayerKind;
use strictly_noughts::{Analysis, Board, GameStatus, IllegalMove, Mark, Position};

/// Text to print for an event, or `None` for events with nothing to show.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::GameStarted { board } => Some(format!("\nNew game\n\n{}\n", board)),
        GameEvent::TurnStarted { player, mark, kind } => Some(match kind {
            PlayerKind::Human => format!("{} ({}), your move [1-9]:", player, mark),
            PlayerKind::Computer => format!("{} ({}) is thinking...", player, mark),
        }),
        GameEvent::MoveMade {
            player,
            mark,
            cell,
            board,
        } => Some(format!(
            "{} ({}) takes {}\n\n{}\n",
            player,
            mark,
            cell_name(*cell),
            board
        )),
        GameEvent::MoveRejected { player, reason } => Some(format!(
            "{}: {}. Try again.",
            player,
            describe_rejection(reason)
        )),
        GameEvent::GameOver { status, winner } => Some(match (status, winner) {
            (GameStatus::Won(mark), Some(name)) => format!("{} ({}) wins!", name, mark),
            (GameStatus::Won(mark), None) => format!("{} wins!", mark),
            (GameStatus::Draw, _) => "It's a draw!".to_string(),
            (GameStatus::InProgress, _) => return None,
        }),
    }
}

/// A cell as the player sees it: label and the number printed on the board.
fn cell_name(cell: usize) -> String {
    match Position::from_index(cell) {
        Some(pos) => format!("{} [{}]", pos.label(), cell + 1),
        None => format!("[{}]", cell + 1),
    }
}

/// Rejection reasons with cells numbered 1-9, matching the board on screen.
fn describe_rejection(reason: &IllegalMove) -> String {
    match reason {
        IllegalMove::Occupied(cell) => format!("{} is already taken", cell_name(*cell)),
        IllegalMove::OutOfRange(cell) => format!("There is no cell {}", cell + 1),
        IllegalMove::GameOver | IllegalMove::WrongTurn { .. } => reason.to_string(),
    }
}

/// The side to move on a board reached by alternating moves from X.
pub fn infer_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// A table of every candidate cell and its value, best move last.
pub fn render_analysis(board: &Board, analysis: &Analysis) -> String {
    let mut out = format!("{}\n\n{} to move\n", board, analysis.side);
    for scored in &analysis.moves {
        let label = Position::from_index(scored.cell).map_or("?", |pos| pos.label());
        out.push_str(&format!(
            "  [{}] {:<13} {:>3}  {}\n",
            scored.cell + 1,
            label,
            scored.score,
            verdict(scored.score)
        ));
    }
    if let Some(best) = analysis.best() {
        out.push_str(&format!(
            "Best move: [{}] ({} positions searched)\n",
            best.cell + 1,
            analysis.stats.nodes
        ));
    }
    out
}

fn verdict(score: i32) -> &'static str {
    match score {
        s if s > 0 => "wins",
        0 => "draws",
        _ => "loses",
    }
}
