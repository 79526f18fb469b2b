//! Legal-move enumeration.
//!
//! `legal_moves` lists every move the engine would accept from a layout.
//! Draws are not included; a draw is always possible.

use super::placement::{can_place_on_foundation, can_place_on_tableau};
use crate::core::Move;
use crate::zones::Layout;

/// Enumerate every move that would succeed from `layout`.
///
/// Order: tableau runs onto tableau, tableau tops onto foundations, waste
/// top, then foundation tops back onto the tableau.
#[must_use]
pub fn legal_moves(layout: &Layout) -> Vec<Move> {
    let mut moves = Vec::new();

    for (src, pile) in layout.tableau.iter().enumerate() {
        for (start, lead) in pile.iter().enumerate().filter(|(_, c)| c.face_up) {
            for (dst, target) in layout.tableau.iter().enumerate() {
                if dst != src && can_place_on_tableau(lead, target) {
                    moves.push(Move::tableau_run(src, start, dst));
                }
            }
        }

        if let Some(top) = pile.top().filter(|c| c.face_up) {
            for (dst, foundation) in layout.foundations.iter().enumerate() {
                if can_place_on_foundation(top, foundation) {
                    moves.push(Move::tableau_to_foundation(src, dst));
                }
            }
        }
    }

    if let Some(top) = layout.waste.top() {
        for (dst, target) in layout.tableau.iter().enumerate() {
            if can_place_on_tableau(top, target) {
                moves.push(Move::waste_to_tableau(dst));
            }
        }
        for (dst, foundation) in layout.foundations.iter().enumerate() {
            if can_place_on_foundation(top, foundation) {
                moves.push(Move::waste_to_foundation(dst));
            }
        }
    }

    for (src, foundation) in layout.foundations.iter().enumerate() {
        if let Some(top) = foundation.top() {
            for (dst, target) in layout.tableau.iter().enumerate() {
                if can_place_on_tableau(top, target) {
                    moves.push(Move::foundation_to_tableau(src, dst));
                }
            }
        }
    }

    moves
}
