//! Game state types.

use crate::card::Card;
use crate::hand::HAND_SIZE;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game started yet.
    Idle,
    /// A round is in progress.
    InRound,
    /// A zero-point hand ended the game. Only a reset leaves this state.
    GameOver,
}

/// A snapshot of a completed five-card selection.
///
/// Captured when the fifth card is selected and passed back to
/// [`evaluate`](crate::Game::evaluate) once the host's evaluation timer
/// fires. Evaluation compares the snapshot against the current selected
/// hand, so a batch that outlives a reset is rejected instead of scoring
/// mutated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBatch {
    pub(crate) cards: [Card; HAND_SIZE],
}

impl EvalBatch {
    /// The five cards captured at schedule time.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }
}
