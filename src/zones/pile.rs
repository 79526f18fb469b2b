//! Ordered card piles.
//!
//! A `Pile` is a sequence of cards where index 0 is the bottom and the
//! last element is the top (the accessible end).

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// A group of cards lifted off a pile, bottom first.
///
/// A tableau run rarely exceeds a full suit, so it stays inline.
pub type Run = SmallVec<[Card; 13]>;

/// The pile kinds a move can name.
///
/// The stock is deliberately absent: cards only leave it through `draw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PileKind {
    Tableau,
    Waste,
    Foundation,
}

impl PileKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PileKind::Tableau => "tableau",
            PileKind::Waste => "waste",
            PileKind::Foundation => "foundation",
        }
    }
}

impl fmt::Display for PileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered pile of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// The accessible card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Lift every card from `start` to the top, keeping their order.
    ///
    /// Returns `None` (and leaves the pile alone) if `start` is out of range.
    pub fn take_run(&mut self, start: usize) -> Option<Run> {
        if start >= self.cards.len() {
            return None;
        }
        Some(self.cards.drain(start..).collect())
    }

    /// Place a run on top, bottom card first.
    pub fn place_run(&mut self, run: Run) {
        self.cards.extend(run);
    }

    /// Empty the pile, returning its cards bottom to top.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
