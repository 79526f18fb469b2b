//! Game state: the table layout plus the running score.
//!
//! `GameState` is the only mutable data in a game. It is serializable so a
//! caller can checkpoint a game and later restore it into an engine.

use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::snapshot::GameSnapshot;
use crate::zones::Layout;

/// Full game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Every pile on the table.
    pub layout: Layout,

    /// Running score. May go negative.
    pub score: i32,
}

impl GameState {
    /// Create a state from a layout and score.
    ///
    /// No invariants are checked; call `validate` before trusting a state
    /// that came from outside the engine.
    #[must_use]
    pub fn new(layout: Layout, score: i32) -> Self {
        Self { layout, score }
    }

    /// Check the structural invariants of the layout.
    pub fn validate(&self) -> Result<(), StateError> {
        self.layout.validate()
    }

    /// Capture a render snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.layout, self.score)
    }

    /// Apply a score delta.
    pub fn adjust_score(&mut self, delta: i32) {
        self.score += delta;
    }
}
