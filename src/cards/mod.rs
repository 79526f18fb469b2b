//! Card model: suits, ranks, cards, and the standard deck.
//!
//! Cards are plain data. All placement rules live in `rules`.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{standard_deck, DECK_SIZE};
