//! Tic-tac-toe: board types, rules, and the dispatch-driven state machine.

mod action;
mod machine;
mod position;
mod rules;
mod types;

pub use action::{GameAction, MoveError};
pub use machine::GameMachine;
pub use position::Position;
pub use rules::{Outcome, check_winner, evaluate};
pub use types::{Board, Player, Square};
