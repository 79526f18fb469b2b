//! Render snapshots: the serialization contract consumed by renderers.
//!
//! ```json
//! {
//!   "score": 15,
//!   "tableau": [[{ "suit": "hearts", "value": "7", "faceUp": true, "id": "7_hearts" }], ...],
//!   "foundations": [[], [], [], []],
//!   "waste": [],
//!   "stock": [...]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::zones::{Layout, Pile};

/// One card as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub suit: Suit,
    pub value: Rank,
    pub face_up: bool,
    pub id: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit,
            value: card.rank,
            face_up: card.face_up,
            id: card.id(),
        }
    }
}

/// Full game snapshot, piles listed bottom to top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: i32,
    pub tableau: Vec<Vec<CardView>>,
    pub foundations: Vec<Vec<CardView>>,
    pub waste: Vec<CardView>,
    pub stock: Vec<CardView>,
}

fn view(pile: &Pile) -> Vec<CardView> {
    pile.iter().map(CardView::from).collect()
}

impl GameSnapshot {
    /// Capture a layout and score.
    #[must_use]
    pub fn capture(layout: &Layout, score: i32) -> Self {
        Self {
            score,
            tableau: layout.tableau.iter().map(view).collect(),
            foundations: layout.foundations.iter().map(view).collect(),
            waste: view(&layout.waste),
            stock: view(&layout.stock),
        }
    }

    /// Total number of cards in the snapshot.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tableau.iter().map(Vec::len).sum::<usize>()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.waste.len()
            + self.stock.len()
    }
}
