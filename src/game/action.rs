//! Game actions and move errors.
//!
//! Actions are tagged domain events, not side effects: they can be
//! validated before application, serialized for replay, and logged.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A game mutation request.
///
/// Closed enum with a serde tag; an unrecognized `type` fails to decode
/// without touching state, signaling a caller contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum GameAction {
    /// Resets to the initial state: empty board, X to move. Valid from any
    /// state.
    Start,
    /// Places the current player's mark at a board index.
    Move {
        /// Board index, 0-8 row-major.
        index: usize,
    },
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The move's board index is outside 0-8.
    #[display("Board index {} is out of bounds", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
