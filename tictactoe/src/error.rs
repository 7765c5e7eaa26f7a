use crate::board::Marker;
use thiserror::Error;

/// Why a line typed by the human did not become a move.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveInputError {
    #[error("❌ Invalid input. Please enter a number between 1 and 9.")]
    NotANumber(String),
    #[error("❌ Position must be between 1 and 9.")]
    OutOfRange(i64),
    #[error("❌ That position is already taken. You lose your turn!")]
    Occupied(usize),
}

impl MoveInputError {
    /// Occupied cells cost the turn; every other mistake is asked again.
    pub fn forfeits_turn(&self) -> bool {
        matches!(self, MoveInputError::Occupied(_))
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("input closed while waiting for the player")]
    InputClosed,
    #[error("both players hold the {0} marker")]
    SameMarkers(Marker),
}
