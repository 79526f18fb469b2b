//! The Klondike table: seven tableau piles, four foundations, waste, stock.
//!
//! `Layout` owns every card in play. Moves address piles through
//! `pile`/`pile_mut`, which bounds-check the index instead of panicking.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pile::{Pile, PileKind};
use crate::cards::{Card, DECK_SIZE};
use crate::core::config::{FOUNDATION_COMPLETE, FOUNDATION_PILES, TABLEAU_PILES};
use crate::core::error::{MoveError, StateError};

/// All piles of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    pub tableau: [Pile; TABLEAU_PILES],
    pub foundations: [Pile; FOUNDATION_PILES],
    pub waste: Pile,
    pub stock: Pile,
}

impl Layout {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a pile a move can name.
    ///
    /// The index is ignored for the waste.
    pub fn pile(&self, kind: PileKind, index: usize) -> Result<&Pile, MoveError> {
        let pile = match kind {
            PileKind::Tableau => self.tableau.get(index),
            PileKind::Foundation => self.foundations.get(index),
            PileKind::Waste => Some(&self.waste),
        };
        pile.ok_or(MoveError::NoSuchPile { kind, index })
    }

    /// Mutable variant of `pile`.
    pub fn pile_mut(&mut self, kind: PileKind, index: usize) -> Result<&mut Pile, MoveError> {
        let pile = match kind {
            PileKind::Tableau => self.tableau.get_mut(index),
            PileKind::Foundation => self.foundations.get_mut(index),
            PileKind::Waste => Some(&mut self.waste),
        };
        pile.ok_or(MoveError::NoSuchPile { kind, index })
    }

    /// Every card on the table, pile by pile.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain(std::iter::once(&self.waste))
            .chain(std::iter::once(&self.stock))
            .flat_map(Pile::iter)
    }

    /// Total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tableau.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Pile::len).sum::<usize>()
            + self.waste.len()
            + self.stock.len()
    }

    /// Number of cards already on foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// Check if every foundation holds a full suit.
    #[must_use]
    pub fn foundations_complete(&self) -> bool {
        self.foundations
            .iter()
            .all(|f| f.len() == FOUNDATION_COMPLETE)
    }

    /// Check the structural invariants of a full game.
    ///
    /// - exactly 52 cards, each `(suit, rank)` once
    /// - stock all face down, waste all face up
    /// - each foundation an ascending single-suit run from Ace
    pub fn validate(&self) -> Result<(), StateError> {
        let found = self.card_count();
        if found != DECK_SIZE {
            return Err(StateError::CardCount { found });
        }

        let mut seen = FxHashSet::default();
        for card in self.cards() {
            if !seen.insert((card.suit, card.rank)) {
                return Err(StateError::DuplicateCard { card: *card });
            }
        }

        if let Some(card) = self.stock.iter().find(|c| c.face_up) {
            return Err(StateError::FaceUpInStock { card: *card });
        }
        if let Some(card) = self.waste.iter().find(|c| !c.face_up) {
            return Err(StateError::FaceDownInWaste { card: *card });
        }

        for (index, foundation) in self.foundations.iter().enumerate() {
            let ordered = foundation.iter().enumerate().all(|(pos, card)| {
                card.rank.ordinal() as usize == pos
                    && card.suit == foundation.cards()[0].suit
            });
            if !ordered {
                return Err(StateError::BrokenFoundation { index });
            }
        }

        Ok(())
    }
}
