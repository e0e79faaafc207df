//! Property tests for the engine's move kernel.
//!
//! Invariants covered:
//! - Piece counts stay balanced: player one has the same number of pieces as
//!   player two when it is player one's turn, and one more otherwise.
//! - A rejected move leaves board, turn, and status unchanged.
//! - `ColumnFull` is reported exactly when the column has no empty cell.
//! - `GameAlreadyOver` is reported for every move after a terminal status.
//! - A lone line of four is detected for its owner and nobody else.

use connect_four_state::state::{Board, Cell, GameEngine, GameStatus, MoveOutcome, Player, Position};
use connect_four_state::MoveError;
use proptest::prelude::*;

fn assert_balanced(game: &GameEngine) {
    let ones = game.board().count(Cell::One);
    let twos = game.board().count(Cell::Two);
    assert!(ones == twos || ones == twos + 1, "ones={ones} twos={twos}");

    match game.status() {
        GameStatus::InProgress => match game.current_player() {
            Player::One => assert_eq!(ones, twos),
            Player::Two => assert_eq!(ones, twos + 1),
        },
        GameStatus::Won(Player::One) => assert_eq!(ones, twos + 1),
        GameStatus::Won(Player::Two) | GameStatus::Tied => assert_eq!(ones, twos),
    }
}

proptest! {
    #[test]
    fn random_play_keeps_invariants(columns in prop::collection::vec(0usize..7, 0..80)) {
        let mut game = GameEngine::new();

        for col in columns {
            let board_before = game.board().clone();
            let player_before = game.current_player();
            let status_before = game.status();
            let was_full = game.board().is_column_full(col);

            match game.drop_piece(col) {
                Ok(outcome) => {
                    prop_assert!(!status_before.is_terminal());
                    prop_assert!(!was_full);
                    prop_assert_eq!(game.board().piece_count(), board_before.piece_count() + 1);
                    let placed = game.last_placement().unwrap();
                    prop_assert_eq!(placed.player, player_before);
                    prop_assert_eq!(placed.column, col);
                    match outcome {
                        MoveOutcome::Win(p) => {
                            prop_assert_eq!(p, player_before);
                            prop_assert_eq!(game.status(), GameStatus::Won(p));
                        }
                        MoveOutcome::Tie => {
                            prop_assert!(game.board().is_full());
                            prop_assert_eq!(game.status(), GameStatus::Tied);
                        }
                        MoveOutcome::Continue(next) => {
                            prop_assert_eq!(next, player_before.other());
                            prop_assert_eq!(game.current_player(), next);
                        }
                    }
                }
                Err(err) => {
                    match err {
                        MoveError::GameAlreadyOver { status } => {
                            prop_assert!(status_before.is_terminal());
                            prop_assert_eq!(status, status_before);
                        }
                        MoveError::ColumnFull { column } => {
                            prop_assert!(!status_before.is_terminal());
                            prop_assert!(was_full);
                            prop_assert_eq!(column, col);
                        }
                        MoveError::InvalidColumn { .. } => {
                            prop_assert!(false, "column {} is in range", col);
                        }
                    }
                    prop_assert_eq!(game.board(), &board_before);
                    prop_assert_eq!(game.current_player(), player_before);
                    prop_assert_eq!(game.status(), status_before);
                }
            }

            assert_balanced(&game);
        }
    }

    #[test]
    fn find_drop_row_matches_where_piece_lands(columns in prop::collection::vec(0usize..7, 1..30)) {
        let mut game = GameEngine::new();

        for col in columns {
            if game.is_terminal() {
                break;
            }
            let expected = game.find_drop_row(col).unwrap();
            match game.drop_piece(col) {
                Ok(_) => prop_assert_eq!(Some(game.last_placement().unwrap().row), expected),
                Err(_) => prop_assert_eq!(expected, None),
            }
        }
    }

    #[test]
    fn lone_line_of_four_wins_for_owner_only(
        row in 0usize..6,
        col in 0usize..7,
        dir in 0usize..4,
        owner_is_one in any::<bool>(),
    ) {
        let (dr, dc): (isize, isize) = [(0, 1), (1, 0), (1, 1), (1, -1)][dir];
        let cells: Vec<(isize, isize)> = (0..4)
            .map(|k| (row as isize + dr * k, col as isize + dc * k))
            .collect();
        prop_assume!(cells.iter().all(|&(r, c)| (0..6).contains(&r) && (0..7).contains(&c)));

        let owner = if owner_is_one { Player::One } else { Player::Two };
        let mut board = Board::default();
        for (r, c) in cells {
            board.set(Position::new(r as usize, c as usize), owner.cell());
        }

        prop_assert!(board.has_win(owner));
        prop_assert!(!board.has_win(owner.other()));
    }
}
