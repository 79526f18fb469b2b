//! Move representation: source pile, destination pile, and run start.
//!
//! A move names piles by kind and index. For tableau sources an optional
//! `card_index` selects where the moving run starts; every other source
//! moves exactly its top card.
//!
//! ```
//! use klondike_engine::core::Move;
//! use klondike_engine::zones::PileKind;
//!
//! // Move the run starting at card 3 of tableau 0 onto tableau 5
//! let run = Move::tableau_run(0, 3, 5);
//! assert_eq!(run.from, PileKind::Tableau);
//! assert_eq!(run.card_index, Some(3));
//!
//! // Play the waste top onto foundation 2
//! let play = Move::new(PileKind::Waste, 0, PileKind::Foundation, 2);
//! assert_eq!(play.card_index, None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::zones::PileKind;

/// A requested card move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source pile kind.
    pub from: PileKind,
    /// Source pile index. Ignored for the waste.
    pub from_index: usize,
    /// Destination pile kind.
    pub to: PileKind,
    /// Destination pile index. Ignored for the waste.
    pub to_index: usize,
    /// Start of the moving run in a tableau source. `None` means the top card.
    pub card_index: Option<usize>,
}

impl Move {
    /// Create a move of the source's top card.
    #[must_use]
    pub const fn new(from: PileKind, from_index: usize, to: PileKind, to_index: usize) -> Self {
        Self {
            from,
            from_index,
            to,
            to_index,
            card_index: None,
        }
    }

    /// Set where the moving run starts in the source pile.
    #[must_use]
    pub const fn with_card_index(mut self, card_index: usize) -> Self {
        self.card_index = Some(card_index);
        self
    }

    /// Tableau run starting at `start` in pile `src`, onto tableau `dst`.
    #[must_use]
    pub const fn tableau_run(src: usize, start: usize, dst: usize) -> Self {
        Self::new(PileKind::Tableau, src, PileKind::Tableau, dst).with_card_index(start)
    }

    /// Top card of tableau `src` onto foundation `dst`.
    #[must_use]
    pub const fn tableau_to_foundation(src: usize, dst: usize) -> Self {
        Self::new(PileKind::Tableau, src, PileKind::Foundation, dst)
    }

    /// Waste top onto tableau `dst`.
    #[must_use]
    pub const fn waste_to_tableau(dst: usize) -> Self {
        Self::new(PileKind::Waste, 0, PileKind::Tableau, dst)
    }

    /// Waste top onto foundation `dst`.
    #[must_use]
    pub const fn waste_to_foundation(dst: usize) -> Self {
        Self::new(PileKind::Waste, 0, PileKind::Foundation, dst)
    }

    /// Top of foundation `src` back onto tableau `dst`.
    #[must_use]
    pub const fn foundation_to_tableau(src: usize, dst: usize) -> Self {
        Self::new(PileKind::Foundation, src, PileKind::Tableau, dst)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.from, self.from_index)?;
        if let Some(start) = self.card_index {
            write!(f, "@{start}")?;
        }
        write!(f, " -> {}[{}]", self.to, self.to_index)
    }
}
