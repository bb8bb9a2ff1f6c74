//! Property-based tests for the game engine.
//!
//! Random column sequences (including out-of-range and full-column moves)
//! are replayed against a fresh game and the rules are checked after every
//! call.

use connect_four::error::MoveError;
use connect_four::game::{
    Board, Cell, Game, GameConfig, GameState, MoveOutcome, Phase, PlayerId, Position,
};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_dimensions()(height in 1usize..=8, width in 1usize..=9) -> (usize, usize) {
        (height, width)
    }
}

prop_compose! {
    fn game_and_moves()(
        (height, width) in arbitrary_dimensions()
    )(
        moves in prop::collection::vec(0..width + 2, 0..80),
        height in Just(height),
        width in Just(width),
    ) -> (usize, usize, Vec<usize>) {
        (height, width, moves)
    }
}

fn new_game(height: usize, width: usize) -> Game {
    Game::new(GameConfig {
        height,
        width,
        ..GameConfig::default()
    })
    .unwrap()
}

fn assert_gravity(board: &Board) {
    for col in 0..board.width() {
        let mut seen_piece = false;
        for row in 0..board.height() {
            match board.get(row, col) {
                Cell::Occupied(_) => seen_piece = true,
                Cell::Empty => assert!(!seen_piece, "floating piece above empty cell in column {col}"),
            }
        }
    }
}

fn has_any_run(state: &GameState) -> bool {
    [PlayerId::P1, PlayerId::P2]
        .into_iter()
        .any(|id| state.board().find_winning_run(id).is_some())
}

proptest! {
    #[test]
    fn prop_rules_hold_after_every_call((height, width, moves) in game_and_moves()) {
        let mut game = new_game(height, width);

        for column in moves {
            let before = game.state().clone();
            let mover = before.current_player().id();

            match game.apply_move(column) {
                Ok(outcome) => {
                    let state = game.state();
                    prop_assert!(!before.is_terminal());
                    prop_assert_eq!(state.moves_played(), before.moves_played() + 1);
                    let placed = outcome.placed();
                    prop_assert_eq!(placed.col, column);
                    prop_assert_eq!(state.cell(placed.row, placed.col), Cell::Occupied(mover));

                    match outcome {
                        MoveOutcome::Continue { next, .. } => {
                            prop_assert_eq!(next, mover.other());
                            prop_assert_eq!(state.current_player().id(), mover.other());
                            prop_assert_eq!(state.phase(), Phase::AwaitingMove);
                            prop_assert!(!state.board().is_full());
                            prop_assert!(!has_any_run(state));
                        }
                        MoveOutcome::Win { winner, run, .. } => {
                            prop_assert_eq!(winner, mover);
                            prop_assert!(run.contains(&placed));
                            for pos in run {
                                prop_assert_eq!(state.cell(pos.row, pos.col), Cell::Occupied(mover));
                            }
                            prop_assert_eq!(state.current_player().id(), mover);
                        }
                        MoveOutcome::Tie { .. } => {
                            prop_assert!(state.board().is_full());
                            prop_assert!(!has_any_run(state));
                            prop_assert_eq!(state.moves_played(), height * width);
                        }
                    }
                }
                Err(err) => {
                    prop_assert_eq!(game.state(), &before);
                    match err {
                        MoveError::GameOver => {
                            prop_assert!(before.is_terminal());
                        }
                        MoveError::OutOfRange { .. } => {
                            prop_assert!(column >= width);
                        }
                        MoveError::ColumnFull => {
                            prop_assert!(column < width);
                            prop_assert_eq!(before.board().column_height(column), height);
                        }
                    }
                }
            }

            assert_gravity(game.state().board());
        }
    }

    #[test]
    fn prop_move_centred_scan_matches_full_scan((height, width, moves) in game_and_moves()) {
        let mut game = new_game(height, width);

        for column in moves {
            let mover = game.state().current_player().id();
            if let Ok(outcome) = game.apply_move(column) {
                let board = game.state().board();
                let full = board.find_winning_run(mover).is_some();
                let local = board.winning_run_through(outcome.placed()).is_some();
                prop_assert_eq!(full, local);
            }
        }
    }

    #[test]
    fn prop_column_full_never_mutates(height in 1usize..=6, col in 0usize..7) {
        let mut board = Board::new(height, 7);
        for i in 0..height {
            let owner = if i % 2 == 0 { PlayerId::P1 } else { PlayerId::P2 };
            board.drop_piece(col, owner).unwrap();
        }
        let before = board.clone();
        prop_assert!(board.drop_piece(col, PlayerId::P1).is_err());
        prop_assert_eq!(board, before);
    }
}

#[test]
fn scenario_horizontal_win_reports_bottom_row_run() {
    let mut game = new_game(6, 7);
    for col in [0, 6, 1, 6, 2, 6] {
        assert!(game.apply_move(col).is_ok());
    }
    match game.apply_move(3).unwrap() {
        MoveOutcome::Win { winner, run, .. } => {
            assert_eq!(winner, PlayerId::P1);
            assert_eq!(
                run,
                [
                    Position::new(5, 0),
                    Position::new(5, 1),
                    Position::new(5, 2),
                    Position::new(5, 3),
                ]
            );
        }
        other => panic!("expected win, got {other:?}"),
    }
}

#[test]
fn scenario_duplicate_colors_create_no_game() {
    let result = Game::new(GameConfig {
        p1_color: "red".to_string(),
        p2_color: "red".to_string(),
        ..GameConfig::default()
    });
    let err = result.unwrap_err();
    assert!(err.is_invalid_configuration());
}
