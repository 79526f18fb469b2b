//! Standard 52-card deck construction.

use super::card::{Card, Rank, Suit};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build an unshuffled 52-card deck, all face down.
///
/// Cards are ordered suit by suit (hearts, diamonds, clubs, spades), each
/// suit Ace through King.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}
