//! The tic-tac-toe state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::action::{GameAction, MoveError};
use super::position::Position;
use super::rules::{Outcome, evaluate};
use super::types::{Board, Player, Square};

/// Tic-tac-toe game state: board, turn, outcome, and move history.
///
/// A single-writer state container mutated only through
/// [`dispatch`](Self::dispatch). Precondition violations (moving on an
/// occupied square, moving after the game is over) are rejected with a
/// typed error and leave the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMachine {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Position>,
}

impl GameMachine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the move history (positions in play order).
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Applies a game action.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if a move targets an out-of-bounds index, an
    /// occupied square, or a finished game. State is unchanged on error.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: GameAction) -> Result<(), MoveError> {
        match action {
            GameAction::Start => {
                debug!("Restarting game");
                *self = Self::new();
                Ok(())
            }
            GameAction::Move { index } => {
                let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
                self.place(position)
            }
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// Flips the turn, appends to history, and re-evaluates the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after a win or tie, and
    /// [`MoveError::SquareOccupied`] for a non-empty square.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, position: Position) -> Result<(), MoveError> {
        if self.outcome != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        self.board.set(position, Square::Occupied(self.to_move));
        self.history.push(position);
        self.to_move = self.to_move.opponent();
        self.outcome = evaluate(&self.board);

        debug!(outcome = ?self.outcome, "Move applied");
        Ok(())
    }
}

impl Default for GameMachine {
    fn default() -> Self {
        Self::new()
    }
}
