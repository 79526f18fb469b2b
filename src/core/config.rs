//! Engine configuration.
//!
//! The table layout is fixed by the rules of Klondike; what callers can
//! tune is the shuffle seed and the score values:
//! - `ScoringConfig`: points for reveals, foundation plays and withdrawals
//! - `KlondikeConfig`: combines the seed and scoring
//!
//! Every field has a default, so a partial JSON document is a valid config:
//!
//! ```
//! use klondike_engine::core::KlondikeConfig;
//!
//! let config = KlondikeConfig::from_json_str(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.scoring.foundation_bonus, 10);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;
/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;
/// Cards dealt to the tableau (1 + 2 + .. + 7).
pub const TABLEAU_DEAL: usize = TABLEAU_PILES * (TABLEAU_PILES + 1) / 2;
/// Cards in a complete foundation (Ace through King).
pub const FOUNDATION_COMPLETE: usize = 13;

/// Score adjustments applied after successful moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Added when a tableau move exposes a face-down card.
    pub reveal_bonus: i32,
    /// Added when a card lands on a foundation.
    pub foundation_bonus: i32,
    /// Subtracted when a card leaves a foundation.
    pub foundation_withdraw_penalty: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            reveal_bonus: 5,
            foundation_bonus: 10,
            foundation_withdraw_penalty: 10,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlondikeConfig {
    /// Fixed shuffle seed. `None` picks a fresh seed on every reset.
    pub seed: Option<u64>,

    /// Score values.
    pub scoring: ScoringConfig,
}

impl KlondikeConfig {
    /// Create the default configuration (random seed, standard scoring).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed so every reset deals the same layout.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the score values.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
