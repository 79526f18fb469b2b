//! Error types.
//!
//! None of these are fatal: a rejected move leaves the game untouched, and
//! the engine always has a well-formed state to report.

use thiserror::Error;

use crate::cards::Card;
use crate::zones::PileKind;

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{kind} pile {index} does not exist")]
    NoSuchPile { kind: PileKind, index: usize },

    #[error("{kind} pile {index} is empty")]
    EmptySource { kind: PileKind, index: usize },

    #[error("card index {card_index} is out of range for a pile of {len} cards")]
    CardIndexOutOfRange { card_index: usize, len: usize },

    #[error("lead card {card} is face down")]
    FaceDownLead { card: Card },

    #[error("source and destination are the same pile")]
    SamePile,

    #[error("cards cannot be moved onto the {kind}")]
    InvalidDestination { kind: PileKind },

    #[error("only a single card may move onto a foundation, not a run of {count}")]
    RunToFoundation { count: usize },

    #[error("{card} cannot be placed on {kind} pile {index}")]
    IllegalPlacement {
        card: Card,
        kind: PileKind,
        index: usize,
    },
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A layout breaks one of the structural invariants of a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("expected 52 cards across all piles, found {found}")]
    CardCount { found: usize },

    #[error("{card} appears more than once")]
    DuplicateCard { card: Card },

    #[error("stock card {card} is face up")]
    FaceUpInStock { card: Card },

    #[error("waste card {card} is face down")]
    FaceDownInWaste { card: Card },

    #[error("foundation {index} is not an ascending single-suit run from Ace")]
    BrokenFoundation { index: usize },
}
