//! # klondike-engine
//!
//! A Klondike solitaire game-state engine: deck construction and
//! shuffling, the cascading deal, stock/waste cycling, move validation,
//! scoring, and win detection.
//!
//! ## Design Principles
//!
//! 1. **No Global Game**: Callers construct and own a `KlondikeEngine`
//!    (or a lock-guarded `GameSession`). There is no process-wide state.
//!
//! 2. **Closed Vocabularies**: Suits, ranks, and pile kinds are enums.
//!    Rank comparisons use the rank's ordinal.
//!
//! 3. **Rejected Moves Are Values**: An illegal move is a `MoveError`
//!    (or `false`), never a panic, and never a partial state change.
//!
//! ## Modules
//!
//! - `cards`: Suits, ranks, cards, the standard deck
//! - `core`: Game state, moves, snapshots, RNG, configuration, errors
//! - `zones`: Piles and the table layout
//! - `rules`: Placement predicates, win condition, legal-move enumeration
//! - `games`: The Klondike engine
//! - `session`: Lock-serialized session with the transport wire types
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{KlondikeBuilder, DrawOutcome};
//!
//! let mut engine = KlondikeBuilder::new().seed(42).build();
//! assert!(matches!(engine.draw(), DrawOutcome::Drew(_)));
//!
//! for mv in engine.legal_moves() {
//!     assert!(engine.clone().move_cards(mv));
//! }
//! assert!(!engine.check_win());
//! ```

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, Color, Rank, Suit};

pub use crate::core::{
    CardView, ConfigError, GameRng, GameSnapshot, GameState, KlondikeConfig, Move,
    MoveError, ScoringConfig, StateError,
};

pub use crate::zones::{Layout, Pile, PileKind};

pub use crate::rules::{can_place_on_foundation, can_place_on_tableau, is_won, legal_moves};

pub use crate::games::klondike::{DrawOutcome, KlondikeBuilder, KlondikeEngine, MoveOutcome};

pub use crate::session::{GameSession, MoveRequest, MoveResponse};
