//! Card locations.
//!
//! ## Key Types
//!
//! - `Pile`: ordered card sequence, top = last
//! - `PileKind`: the pile kinds a move can name (tableau, waste, foundation)
//! - `Layout`: every pile of one game, with bounds-checked lookup
//! - `Run`: cards lifted off a pile as a unit

pub mod layout;
pub mod pile;

pub use layout::Layout;
pub use pile::{Pile, PileKind, Run};
