//! Deck construction, dealing, and drawing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANK_COUNT, Suit};
use crate::error::DeckError;

/// An ordered pool of undealt cards.
///
/// The top of the deck is the back of the internal vector, so draws are pops.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck and shuffles it uniformly.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 0..RANK_COUNT as u8 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck with a fixed card order.
    ///
    /// The last element of `cards` is the top of the deck and is drawn first.
    /// Useful for stacking decks in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns up to `n` cards from the top of the deck.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let mut dealt = Vec::with_capacity(n);
        while dealt.len() < n {
            match self.cards.pop() {
                Some(card) => dealt.push(card),
                None => break,
            }
        }
        dealt
    }

    /// Removes and returns the top card of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the cards remaining in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
