//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left. Callers treat this as "no card drawn".
    #[error("the deck is empty")]
    Empty,
}

/// Errors that can occur when selecting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Invalid game state for selecting (no round in progress).
    #[error("invalid game state for selecting")]
    InvalidState,
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// The selected hand already holds five cards.
    #[error("the selected hand is full")]
    SelectionFull,
    /// The selection lock is armed.
    #[error("selection is locked")]
    Locked,
    /// Index outside the current hand bounds.
    #[error("invalid selection index")]
    InvalidIndex,
}

/// Errors that can occur when evaluating the selected hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluateError {
    /// Invalid game state for evaluating (no round in progress).
    #[error("invalid game state for evaluating")]
    InvalidState,
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// The evaluation batch no longer matches the selected hand.
    #[error("stale evaluation batch")]
    StaleBatch,
}
