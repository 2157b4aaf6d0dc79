use crate::card::Card;
use crate::error::SelectError;
use crate::hand::HAND_SIZE;
use crate::result::SelectOutcome;

use super::{EvalBatch, Game, GameState};

impl Game {
    /// Moves `hand[index]` into the selected hand.
    ///
    /// On success the hand is replenished with one card drawn from the deck
    /// (when the deck is non-empty), the drawn card is marked used, and the
    /// selection lock is armed; the host should clear it with
    /// [`release_selection_lock`](Self::release_selection_lock) after
    /// [`selection_lock_millis`](crate::GameOptions::selection_lock_millis).
    ///
    /// When this selection completes a five-card selected hand, the returned
    /// outcome carries an [`EvalBatch`] for the host to pass to
    /// [`evaluate`](Self::evaluate) after
    /// [`evaluation_delay_millis`](crate::GameOptions::evaluation_delay_millis).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, no round is in progress, the
    /// selected hand already holds five cards, the selection lock is armed,
    /// or the index is outside the current hand bounds.
    pub fn select_card(&mut self, index: usize) -> Result<SelectOutcome, SelectError> {
        match self.state {
            GameState::GameOver => return Err(SelectError::GameOver),
            GameState::Idle => return Err(SelectError::InvalidState),
            GameState::InRound => {}
        }

        if self.selected.len() >= HAND_SIZE {
            return Err(SelectError::SelectionFull);
        }

        if self.selection_locked {
            return Err(SelectError::Locked);
        }

        if index >= self.hand.len() {
            return Err(SelectError::InvalidIndex);
        }

        let selected = self.hand.remove(index);
        self.selected.push(selected);

        let drawn = self.draw_into_hand();
        self.arm_selection_lock();

        let batch = (self.selected.len() == HAND_SIZE).then(|| self.snapshot_batch());

        Ok(SelectOutcome {
            selected,
            drawn,
            batch,
        })
    }

    /// Draws one card from the deck into the hand and marks it used.
    ///
    /// An empty deck is not an error here: the hand simply shrinks by one
    /// for the rest of the round.
    fn draw_into_hand(&mut self) -> Option<Card> {
        let card = self.deck.draw().ok()?;
        self.hand.push(card);
        self.used.insert(card);
        Some(card)
    }

    /// Captures the current five selected cards.
    fn snapshot_batch(&self) -> EvalBatch {
        let mut cards = [self.selected[0]; HAND_SIZE];
        cards.copy_from_slice(&self.selected);
        EvalBatch { cards }
    }
}
