//! Outcome types returned by game operations.

use crate::card::Card;
use crate::game::EvalBatch;
use crate::hand::HandCategory;

/// Result of a successful card selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOutcome {
    /// The card moved from the hand into the selected hand.
    pub selected: Card,
    /// The replacement card drawn into the hand, if the deck had one.
    pub drawn: Option<Card>,
    /// The evaluation batch to schedule, present when this selection
    /// completed a five-card selected hand. The host should call
    /// [`evaluate`](crate::Game::evaluate) with it after
    /// [`evaluation_delay_millis`](crate::GameOptions::evaluation_delay_millis).
    pub batch: Option<EvalBatch>,
}

/// Result of evaluating a five-card selected hand.
///
/// This is the payload of the "hand resolved", "round cleared", and
/// "game over" notifications: the host renders it and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResolution {
    /// The matched category, or `None` for a zero-point hand.
    pub category: Option<HandCategory>,
    /// The points awarded (0 is a valid outcome).
    pub points: u32,
    /// The total score after this resolution.
    pub score: u32,
    /// Whether the spent deck was replaced by a fresh shuffled one.
    pub round_cleared: bool,
    /// Whether this hand ended the game.
    pub game_over: bool,
}
