//! Klondike rules.
//!
//! - `placement`: foundation and tableau legality, win condition
//! - `hints`: enumeration of every currently legal move
//!
//! The engine calls into these but never re-implements them.

pub mod hints;
pub mod placement;

pub use hints::legal_moves;
pub use placement::{can_place_on_foundation, can_place_on_tableau, is_won};
