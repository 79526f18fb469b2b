//! Placement predicates and the win condition.
//!
//! These are pure functions over cards and piles; the engine calls them
//! before mutating anything.

use crate::cards::{Card, Rank};
use crate::zones::{Layout, Pile};

/// Check whether `card` may be placed on a foundation pile.
///
/// An empty foundation takes only an Ace. Otherwise the card must be the
/// same suit as the top and exactly one rank higher (no wraparound).
#[must_use]
pub fn can_place_on_foundation(card: &Card, foundation: &Pile) -> bool {
    match foundation.top() {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && top.rank.successor() == Some(card.rank),
    }
}

/// Check whether `card` may be placed on a tableau pile.
///
/// An empty pile takes only a King. Otherwise the top must be face up, the
/// colors must differ, and the card must be exactly one rank lower.
#[must_use]
pub fn can_place_on_tableau(card: &Card, pile: &Pile) -> bool {
    match pile.top() {
        None => card.rank == Rank::King,
        Some(top) => {
            top.face_up
                && card.color() != top.color()
                && top.rank.predecessor() == Some(card.rank)
        }
    }
}

/// Check whether the game is won: all four foundations hold 13 cards.
#[must_use]
pub fn is_won(layout: &Layout) -> bool {
    layout.foundations_complete()
}
