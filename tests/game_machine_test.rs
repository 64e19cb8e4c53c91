//! Tests for the tic-tac-toe state machine.

use tablar::{GameAction, GameMachine, MoveError, Outcome, Player, Position};

fn play(machine: &mut GameMachine, indices: &[usize]) {
    for &index in indices {
        machine
            .dispatch(GameAction::Move { index })
            .expect("legal move");
    }
}

#[test]
fn test_new_game_initial_state() {
    let game = GameMachine::new();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert!(game.history().is_empty());
    assert_eq!(Position::valid_moves(game.board()).len(), 9);
}

#[test]
fn test_alternating_turns() {
    let mut game = GameMachine::new();
    play(&mut game, &[4]);
    assert_eq!(game.to_move(), Player::O);
    play(&mut game, &[0]);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.history(), &[Position::Center, Position::TopLeft]);
}

#[test]
fn test_x_wins_top_row() {
    let mut game = GameMachine::new();
    // X: 0, 1, 2 - O: 3, 4
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.outcome(), Outcome::Won(Player::X));
}

#[test]
fn test_o_wins_left_column() {
    let mut game = GameMachine::new();
    // X: 1, 2, 8 - O: 0, 3, 6
    play(&mut game, &[1, 0, 2, 3, 8, 6]);
    assert_eq!(game.outcome(), Outcome::Won(Player::O));
}

#[test]
fn test_tie_on_full_board() {
    let mut game = GameMachine::new();
    // X: 0, 2, 3, 7, 8 - O: 4, 1, 5, 6 - no complete line.
    play(&mut game, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);
    assert_eq!(game.outcome(), Outcome::Tie);
}

#[test]
fn test_single_mark_in_progress() {
    let mut game = GameMachine::new();
    play(&mut game, &[0]);
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut game = GameMachine::new();
    play(&mut game, &[4]);
    let before = game.clone();

    let result = game.dispatch(GameAction::Move { index: 4 });
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
}

#[test]
fn test_move_after_win_rejected() {
    let mut game = GameMachine::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.clone();

    let result = game.dispatch(GameAction::Move { index: 8 });
    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_bounds_index_rejected() {
    let mut game = GameMachine::new();
    let result = game.dispatch(GameAction::Move { index: 9 });
    assert_eq!(result, Err(MoveError::OutOfBounds(9)));
    assert_eq!(game, GameMachine::new());
}

#[test]
fn test_start_resets_from_mid_game() {
    let mut game = GameMachine::new();
    play(&mut game, &[4, 0, 8]);

    game.dispatch(GameAction::Start).expect("start");
    assert_eq!(game, GameMachine::new());
}

#[test]
fn test_start_resets_from_terminal_state() {
    let mut game = GameMachine::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.outcome(), Outcome::Won(Player::X));

    game.dispatch(GameAction::Start).expect("start");
    assert_eq!(game, GameMachine::new());
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_valid_moves_shrink_as_board_fills() {
    let mut game = GameMachine::new();
    play(&mut game, &[4, 0]);
    let valid = Position::valid_moves(game.board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::Center));
    assert!(!valid.contains(&Position::TopLeft));
}

#[test]
fn test_action_wire_format() {
    let action: GameAction = serde_json::from_str(r#"{"type":"MOVE","index":4}"#).expect("valid");
    assert_eq!(action, GameAction::Move { index: 4 });

    let action: GameAction = serde_json::from_str(r#"{"type":"START"}"#).expect("valid");
    assert_eq!(action, GameAction::Start);
}

#[test]
fn test_unknown_action_fails_to_decode_and_mutates_nothing() {
    let game = GameMachine::new();
    let decoded = serde_json::from_str::<GameAction>(r#"{"type":"UNDO"}"#);
    assert!(decoded.is_err());
    assert_eq!(game, GameMachine::new());
}
