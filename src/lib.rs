//! A solo draw-poker scoring game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full session flow:
//! shuffling and dealing, moving cards into the five-card selected hand,
//! scoring the selection against a fixed category table, round clears on
//! deck exhaustion, and the terminal game over on a zero-point hand.
//!
//! # Example
//!
//! ```no_run
//! use dprs::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//! game.start();
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_ACE, RANK_COUNT, RANK_JACK, RANK_KING, RANK_QUEEN, RANK_TEN, Suit};
pub use deck::Deck;
pub use error::{DeckError, EvaluateError, SelectError};
pub use game::{EvalBatch, Game, GameState};
pub use hand::{HAND_SIZE, HandCategory, evaluate_hand, is_royal_straight, is_straight};
pub use options::GameOptions;
pub use result::{HandResolution, SelectOutcome};
