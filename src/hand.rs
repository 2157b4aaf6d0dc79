//! Hand categories and the five-card evaluator.

use alloc::vec::Vec;

use core::fmt;

use crate::card::{Card, RANK_ACE, RANK_COUNT, RANK_KING};

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

/// Rank-index sets for the wrap-around straights through the Ace:
/// A-2-3-4-5, K-A-2-3-4, Q-K-A-2-3, and J-Q-K-A-2.
const WRAP_STRAIGHTS: [[u8; 5]; 4] = [
    [0, 1, 2, 3, 12],
    [0, 1, 2, 11, 12],
    [0, 1, 10, 11, 12],
    [0, 9, 10, 11, 12],
];

/// The royal ranks: Ten, Jack, Queen, King, Ace.
const ROYAL_RANKS: [u8; 5] = [8, 9, 10, 11, 12];

/// A scoring hand category.
///
/// The ordering is not standard poker ranking: a flush outscores three of a
/// kind, which outscores a straight, and only pairs of kings or aces score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    /// Ten through Ace in one suit.
    RoyalStraightFlush,
    /// Straight in one suit.
    StraightFlush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Five cards in one suit.
    Flush,
    /// Five consecutive ranks, including the wrap-around sequences.
    Straight,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Two distinct pairs.
    TwoPair,
    /// A single pair of kings or aces. Any other pair scores nothing.
    PairOfKingsOrAces,
}

impl HandCategory {
    /// Returns the points awarded for this category.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::RoyalStraightFlush => 25,
            Self::StraightFlush => 15,
            Self::FourOfAKind => 12,
            Self::FullHouse => 10,
            Self::Flush => 8,
            Self::ThreeOfAKind => 6,
            Self::Straight => 5,
            Self::TwoPair => 2,
            Self::PairOfKingsOrAces => 1,
        }
    }

    /// Returns the display name of this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalStraightFlush => "Royal Straight Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::PairOfKingsOrAces => "Pair of Kings or Aces",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns whether the given distinct rank indices form a straight.
///
/// The ranks must be pairwise distinct; a hand with a repeated rank passes
/// fewer than five entries here and is never a straight. Five sorted ranks
/// form a straight when they are consecutive or match one of the four
/// wrap-around sequences through the Ace.
#[must_use]
pub fn is_straight(ranks: &[u8]) -> bool {
    let mut sorted: Vec<u8> = ranks.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    if sorted.len() != HAND_SIZE {
        return false;
    }

    let consecutive = sorted.windows(2).all(|pair| pair[1] == pair[0] + 1);

    consecutive
        || WRAP_STRAIGHTS
            .iter()
            .any(|pattern| pattern == sorted.as_slice())
}

/// Returns whether the given distinct rank indices are exactly Ten through
/// Ace, in any order.
#[must_use]
pub fn is_royal_straight(ranks: &[u8]) -> bool {
    let mut sorted: Vec<u8> = ranks.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    sorted.as_slice() == ROYAL_RANKS
}

/// Evaluates a five-card hand.
///
/// Returns the first matching category in precedence order, or `None` for a
/// hand that scores nothing. The caller is responsible for passing exactly
/// five cards; fewer cards never match a category.
#[must_use]
pub fn evaluate_hand(cards: &[Card]) -> Option<HandCategory> {
    let mut counts = [0u8; RANK_COUNT];
    for card in cards {
        if let Some(count) = counts.get_mut(card.rank as usize) {
            *count += 1;
        }
    }

    let max_count = counts.iter().copied().max().unwrap_or(0);
    let pair_count = counts.iter().filter(|&&count| count == 2).count();
    let distinct: Vec<u8> = (0..RANK_COUNT as u8)
        .filter(|&rank| counts[rank as usize] > 0)
        .collect();

    let flush = cards.len() == HAND_SIZE && cards.iter().all(|card| card.suit == cards[0].suit);
    let straight = is_straight(&distinct);
    let royal = is_royal_straight(&distinct);

    if royal && flush {
        Some(HandCategory::RoyalStraightFlush)
    } else if flush && straight {
        Some(HandCategory::StraightFlush)
    } else if max_count == 4 {
        Some(HandCategory::FourOfAKind)
    } else if max_count == 3 && counts.contains(&2) {
        Some(HandCategory::FullHouse)
    } else if flush {
        Some(HandCategory::Flush)
    } else if straight {
        Some(HandCategory::Straight)
    } else if max_count == 3 {
        Some(HandCategory::ThreeOfAKind)
    } else if pair_count == 2 {
        Some(HandCategory::TwoPair)
    } else if max_count == 2
        && (counts[RANK_KING as usize] == 2 || counts[RANK_ACE as usize] == 2)
    {
        Some(HandCategory::PairOfKingsOrAces)
    } else {
        None
    }
}
