//! Core engine types: state, moves, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::Move;
pub use config::{
    KlondikeConfig, ScoringConfig, FOUNDATION_COMPLETE, FOUNDATION_PILES, TABLEAU_DEAL,
    TABLEAU_PILES,
};
pub use error::{ConfigError, MoveError, StateError};
pub use rng::GameRng;
pub use snapshot::{CardView, GameSnapshot};
pub use state::GameState;
