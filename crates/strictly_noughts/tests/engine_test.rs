//! Tests for move application and status detection.

use std::collections::HashSet;
use strictly_noughts::{
    compute_status, Board, GameState, GameStatus, IllegalMove, Mark, Square, WINNING_LINES,
};

/// Status straight from the definition, independent of the engine.
fn status_by_definition(board: &Board) -> GameStatus {
    for mark in [Mark::X, Mark::O] {
        let uniform = WINNING_LINES.iter().any(|line| {
            line.iter()
                .all(|&cell| board.get(cell) == Some(Square::Occupied(mark)))
        });
        if uniform {
            return GameStatus::Won(mark);
        }
    }
    if board.empty_cells().next().is_none() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

fn collect_reachable(state: &GameState, seen: &mut HashSet<Board>, out: &mut Vec<GameState>) {
    if !seen.insert(*state.board()) {
        return;
    }
    out.push(state.clone());
    for cell in state.legal_moves() {
        let next = state
            .apply_move(cell, state.current())
            .expect("legal move accepted");
        collect_reachable(&next, seen, out);
    }
}

#[test]
fn test_status_matches_definition_on_every_reachable_board() {
    let mut seen = HashSet::new();
    let mut states = Vec::new();
    collect_reachable(&GameState::new(), &mut seen, &mut states);

    // Known count of distinct reachable positions, empty board included.
    assert_eq!(states.len(), 5478);

    for state in &states {
        let expected = status_by_definition(state.board());
        assert_eq!(compute_status(state.board()), expected, "{}", state.board());
        assert_eq!(state.status(), expected, "{}", state.board());
    }
}

#[test]
fn test_winning_move_completes_row() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let state = GameState::from_board(board, Mark::X);
    assert_eq!(state.status(), GameStatus::InProgress);

    let won = state.apply_move(2, Mark::X).unwrap();
    assert_eq!(won.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let moves = [0, 4, 2, 1, 7, 3, 5, 8, 6];
    let mut state = GameState::new();
    for cell in moves {
        state = state.apply_move(cell, state.current()).unwrap();
    }
    // X O X / O O X / X X O
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.history(), &moves);
}

#[test]
fn test_illegal_move_is_repeatable_and_pure() {
    let state = GameState::new().apply_move(4, Mark::X).unwrap();
    let before = state.clone();

    let first = state.apply_move(4, Mark::O);
    let second = state.apply_move(4, Mark::O);

    assert_eq!(first, Err(IllegalMove::Occupied(4)));
    assert_eq!(first, second);
    assert_eq!(state, before);
}

#[test]
fn test_illegal_move_kinds() {
    let state = GameState::new();
    assert_eq!(state.apply_move(12, Mark::X), Err(IllegalMove::OutOfRange(12)));
    assert!(matches!(
        state.apply_move(0, Mark::O),
        Err(IllegalMove::WrongTurn { .. })
    ));
}

#[test]
fn test_state_survives_json() {
    let state = GameState::new()
        .apply_move(0, Mark::X)
        .and_then(|s| s.apply_move(4, Mark::O))
        .unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
    assert_eq!(restored.current(), Mark::X);
}
