use crate::error::EvaluateError;
use crate::hand::{HandCategory, evaluate_hand};
use crate::result::HandResolution;

use super::{EvalBatch, Game, GameState};

impl Game {
    /// Evaluates the selected hand captured in `batch`.
    ///
    /// Awards the category points (0 is a valid award) and either continues
    /// the round or ends the game:
    ///
    /// - points > 0: the selected hand is cleared; if the deck is now empty
    ///   the round is cleared, replacing the spent deck with a fresh
    ///   shuffled one while the hand, the selected hand, the used cards, the
    ///   score, and the state are untouched.
    /// - points == 0: the game is over. The selected hand is left populated
    ///   so the losing cards stay observable until a reset.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or no round is in progress, or
    /// [`EvaluateError::StaleBatch`] when the batch no longer matches the
    /// current selected hand (it was captured before a reset or another
    /// mutation). A stale timer firing is therefore a safe no-op and can
    /// never score twice.
    pub fn evaluate(&mut self, batch: &EvalBatch) -> Result<HandResolution, EvaluateError> {
        match self.state {
            GameState::GameOver => return Err(EvaluateError::GameOver),
            GameState::Idle => return Err(EvaluateError::InvalidState),
            GameState::InRound => {}
        }

        if batch.cards().as_slice() != self.selected.as_slice() {
            return Err(EvaluateError::StaleBatch);
        }

        let category = evaluate_hand(&self.selected);
        let points = category.map_or(0, HandCategory::points);
        self.score = self.score.saturating_add(points);

        let mut round_cleared = false;
        let mut game_over = false;

        if points > 0 {
            self.selected.clear();

            if self.deck.is_empty() {
                self.reshuffle_deck();
                round_cleared = true;
            }
        } else {
            self.state = GameState::GameOver;
            game_over = true;
        }

        Ok(HandResolution {
            category,
            points,
            score: self.score,
            round_cleared,
            game_over,
        })
    }
}
