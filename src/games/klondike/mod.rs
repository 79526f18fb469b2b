//! Klondike solitaire.
//!
//! - 52 cards dealt into 7 cascading tableau piles, 24 left in the stock
//! - Draw one card at a time; an empty stock recycles the waste
//! - Build foundations up by suit from Ace, tableau down in alternating colors
//! - Scoring: +5 reveal, +10 to foundation, -10 from foundation
//! - Won when all four foundations hold 13 cards

mod game;

pub use game::{DrawOutcome, KlondikeBuilder, KlondikeEngine, MoveOutcome};
