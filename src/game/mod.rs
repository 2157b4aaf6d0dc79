//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::deck::Deck;
use crate::options::GameOptions;

mod evaluate;
mod select;
pub mod state;

pub use state::{EvalBatch, GameState};

/// A solo draw-poker game engine that manages the deck, the hand, the
/// selected hand, and scoring.
///
/// The engine is a single-actor state machine driven by discrete calls; it
/// performs no timing itself. The host owns the two debounce timers (see
/// [`GameOptions`]) and calls [`release_selection_lock`](Self::release_selection_lock)
/// and [`evaluate`](Self::evaluate) back when they fire.
pub struct Game {
    /// Cards not yet dealt.
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: GameState,
    /// Cards visible to the player, in deal order.
    pub hand: Vec<Card>,
    /// Cards committed toward the current evaluation, in selection order.
    pub selected: Vec<Card>,
    /// Every card dealt or drawn since the last start.
    pub used: HashSet<Card>,
    /// Accumulated score. Not reset by [`start`](Self::start).
    pub score: u32,
    /// Selection debounce gate.
    selection_locked: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed.
    ///
    /// The engine starts in [`GameState::Idle`] with an undealt deck; call
    /// [`start`](Self::start) to begin playing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dprs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck,
            options,
            state: GameState::Idle,
            hand: Vec::new(),
            selected: Vec::new(),
            used: HashSet::new(),
            score: 0,
            selection_locked: false,
            rng,
        }
    }

    /// Starts a game.
    ///
    /// Replaces the deck with a fresh shuffled one, clears the hand, the
    /// selected hand, the used cards, and the selection lock, then deals
    /// [`hand_size`](GameOptions::hand_size) cards into the hand and marks
    /// them used. The score is left untouched and keeps accumulating across
    /// starts for the life of the engine value.
    pub fn start(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.hand.clear();
        self.selected.clear();
        self.used.clear();
        self.selection_locked = false;
        self.state = GameState::InRound;

        let dealt = self.deck.deal(self.options.hand_size);
        self.used.extend(dealt.iter().copied());
        self.hand.extend_from_slice(&dealt);
    }

    /// Resets the game after a game over.
    ///
    /// Identical to [`start`](Self::start); in particular the score is not
    /// reset.
    pub fn reset(&mut self) {
        self.start();
    }

    /// Clears the selection lock.
    ///
    /// The host calls this once
    /// [`selection_lock_millis`](GameOptions::selection_lock_millis) has
    /// elapsed after a selection. Idempotent; new selections are already
    /// rejected while the lock is armed, so re-arming is never needed.
    pub const fn release_selection_lock(&mut self) {
        self.selection_locked = false;
    }

    /// Returns whether the selection lock is armed.
    #[must_use]
    pub const fn is_selection_locked(&self) -> bool {
        self.selection_locked
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the game is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Returns the cards visible to the player, in deal order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the cards committed toward evaluation, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[Card] {
        &self.selected
    }

    /// Returns the set of cards dealt or drawn since the last start.
    #[must_use]
    pub const fn used_cards(&self) -> &HashSet<Card> {
        &self.used
    }

    /// Returns the accumulated score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Arms the selection lock.
    pub(crate) const fn arm_selection_lock(&mut self) {
        self.selection_locked = true;
    }

    /// Replaces the spent deck with a fresh shuffled one.
    ///
    /// Touches nothing but the deck: the hand, the selected hand, the used
    /// cards, the score, and the state all survive a round clear.
    pub(crate) fn reshuffle_deck(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
    }
}
