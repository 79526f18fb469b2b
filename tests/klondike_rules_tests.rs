//! Klondike move, scoring, and win tests on hand-built layouts.
//!
//! Each test places the cards it cares about and puts the rest of the deck
//! in the stock, so every layout is a legal 52-card game.

use klondike_engine::cards::{standard_deck, Card, Rank, Suit};
use klondike_engine::core::{GameState, KlondikeConfig, Move, MoveError, ScoringConfig};
use klondike_engine::games::klondike::{KlondikeEngine, MoveOutcome};
use klondike_engine::zones::{Layout, PileKind};

fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn engine_with_config(config: KlondikeConfig, setup: impl FnOnce(&mut Layout)) -> KlondikeEngine {
    let mut layout = Layout::new();
    setup(&mut layout);

    let placed: Vec<Card> = layout.cards().copied().collect();
    for card in standard_deck() {
        if !placed.iter().any(|p| p.same_identity(&card)) {
            layout.stock.push(card);
        }
    }

    KlondikeEngine::with_state(config, GameState::new(layout, 0)).expect("layout should be valid")
}

fn engine_with(setup: impl FnOnce(&mut Layout)) -> KlondikeEngine {
    engine_with_config(KlondikeConfig::default(), setup)
}

/// Foundations filled with every card except the King of hearts, which is
/// on the waste.
fn one_card_from_win() -> KlondikeEngine {
    engine_with(|layout| {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            for rank in Rank::ALL {
                if *suit == Suit::Hearts && rank == Rank::King {
                    continue;
                }
                layout.foundations[i].push(up(*suit, rank));
            }
        }
        layout.waste.push(up(Suit::Hearts, Rank::King));
    })
}

// =============================================================================
// Tableau Placement
// =============================================================================

/// Test that a black seven can be placed on a red eight.
#[test]
fn test_black_seven_on_red_eight() {
    let mut engine = engine_with(|layout| {
        layout.tableau[0].push(up(Suit::Hearts, Rank::Eight));
        layout.tableau[1].push(up(Suit::Clubs, Rank::Seven));
    });

    let outcome = engine.try_move(Move::new(PileKind::Tableau, 1, PileKind::Tableau, 0));

    assert_eq!(
        outcome,
        Ok(MoveOutcome {
            moved: 1,
            revealed: None,
            score_delta: 0,
        })
    );
    assert_eq!(engine.layout().tableau[0].top(), Some(&up(Suit::Clubs, Rank::Seven)));
    assert!(engine.layout().tableau[1].is_empty());
    assert_eq!(engine.score(), 0);
}

/// Test that a card cannot be placed on a same-color card one rank higher.
#[test]
fn test_red_eight_on_red_nine_fails() {
    let mut engine = engine_with(|layout| {
        layout.tableau[0].push(up(Suit::Diamonds, Rank::Nine));
        layout.tableau[1].push(up(Suit::Hearts, Rank::Eight));
    });
    let before = engine.snapshot();

    assert!(!engine.move_cards(Move::new(PileKind::Tableau, 1, PileKind::Tableau, 0)));
    assert_eq!(engine.snapshot(), before);
}

/// Test that nothing can be placed on a face-down tableau top.
#[test]
fn test_placing_on_face_down_top_fails() {
    let mut engine = engine_with(|layout| {
        layout.tableau[0].push(down(Suit::Hearts, Rank::Eight));
        layout.tableau[1].push(up(Suit::Clubs, Rank::Seven));
    });

    assert!(matches!(
        engine.try_move(Move::new(PileKind::Tableau, 1, PileKind::Tableau, 0)),
        Err(MoveError::IllegalPlacement { .. })
    ));
}

/// Test that only a King can fill an empty tableau pile.
#[test]
fn test_only_king_on_empty_tableau() {
    let mut engine = engine_with(|layout| {
        layout.tableau[0].push(down(Suit::Clubs, Rank::Two));
        layout.tableau[0].push(up(Suit::Spades, Rank::Queen));
        layout.waste.push(up(Suit::Diamonds, Rank::King));
    });

    assert!(!engine.move_cards(Move::new(PileKind::Tableau, 0, PileKind::Tableau, 3)));
    assert!(engine.move_cards(Move::waste_to_tableau(3)));
    assert_eq!(engine.layout().tableau[3].len(), 1);
    assert!(engine.layout().waste.is_empty());
    assert_eq!(engine.score(), 0);
}

// =============================================================================
// Multi-Card Runs
// =============================================================================

fn run_layout(layout: &mut Layout) {
    layout.tableau[0].push(down(Suit::Clubs, Rank::Two));
    layout.tableau[0].push(up(Suit::Hearts, Rank::Nine));
    layout.tableau[0].push(up(Suit::Spades, Rank::Eight));
    layout.tableau[0].push(up(Suit::Diamonds, Rank::Seven));
    layout.tableau[1].push(up(Suit::Clubs, Rank::Ten));
}

/// Test that moving a run of three keeps the cards in order.
#[test]
fn test_run_of_three_preserves_order() {
    let mut engine = engine_with(run_layout);

    let outcome = engine.try_move(Move::tableau_run(0, 1, 1)).unwrap();
    assert_eq!(outcome.moved, 3);
    assert_eq!(outcome.revealed, Some(up(Suit::Clubs, Rank::Two)));

    let dest: Vec<_> = engine.layout().tableau[1].iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(
        dest,
        vec![
            (Suit::Clubs, Rank::Ten),
            (Suit::Hearts, Rank::Nine),
            (Suit::Spades, Rank::Eight),
            (Suit::Diamonds, Rank::Seven),
        ]
    );

    assert_eq!(engine.layout().tableau[0].cards(), &[up(Suit::Clubs, Rank::Two)]);
    assert_eq!(engine.score(), 5);
}

/// Test that a multi-card run cannot go to a foundation.
#[test]
fn test_run_onto_foundation_fails_even_with_legal_lead() {
    let mut engine = engine_with(|layout| {
        layout.tableau[2].push(up(Suit::Hearts, Rank::Ace));
        layout.tableau[2].push(up(Suit::Clubs, Rank::Queen));
        layout.tableau[2].push(up(Suit::Diamonds, Rank::Jack));
    });
    let before = engine.snapshot();

    let mv = Move::new(PileKind::Tableau, 2, PileKind::Foundation, 0).with_card_index(0);
    assert_eq!(engine.try_move(mv), Err(MoveError::RunToFoundation { count: 3 }));
    assert_eq!(engine.snapshot(), before);
}

/// Test that a run cannot start at a face-down card.
#[test]
fn test_run_with_face_down_lead_fails() {
    let mut engine = engine_with(run_layout);
    assert!(matches!(
        engine.try_move(Move::tableau_run(0, 0, 1)),
        Err(MoveError::FaceDownLead { .. })
    ));
}

// =============================================================================
// Foundations and Scoring
// =============================================================================

/// Test that an empty foundation accepts only an Ace.
#[test]
fn test_empty_foundation_rejects_non_ace() {
    let mut engine = engine_with(|layout| {
        layout.waste.push(up(Suit::Spades, Rank::Two));
    });

    assert!(!engine.move_cards(Move::waste_to_foundation(0)));
    assert!(engine.layout().foundations[0].is_empty());
    assert_eq!(engine.layout().waste.len(), 1);
}

/// Test that playing to a foundation scores ten points.
#[test]
fn test_foundation_play_scores_ten() {
    let mut engine = engine_with(|layout| {
        layout.waste.push(up(Suit::Spades, Rank::Ace));
    });

    assert!(engine.move_cards(Move::waste_to_foundation(2)));
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.layout().foundations[2].len(), 1);
}

/// Test that a foundation play that reveals a card scores fifteen.
#[test]
fn test_foundation_play_with_reveal_scores_fifteen() {
    let mut engine = engine_with(|layout| {
        layout.tableau[4].push(down(Suit::Hearts, Rank::Five));
        layout.tableau[4].push(up(Suit::Diamonds, Rank::Ace));
    });

    let outcome = engine.try_move(Move::tableau_to_foundation(4, 0)).unwrap();
    assert_eq!(outcome.score_delta, 15);
    assert_eq!(engine.score(), 15);
    assert!(engine.layout().tableau[4].top().unwrap().face_up);
}

/// Test that taking a card off a foundation costs ten points.
#[test]
fn test_foundation_withdrawal_costs_ten() {
    let mut engine = engine_with(|layout| {
        layout.foundations[1].push(up(Suit::Spades, Rank::Ace));
        layout.foundations[1].push(up(Suit::Spades, Rank::Two));
        layout.tableau[0].push(up(Suit::Hearts, Rank::Three));
    });

    assert!(engine.move_cards(Move::foundation_to_tableau(1, 0)));
    assert_eq!(engine.score(), -10);
    assert_eq!(engine.layout().foundations[1].len(), 1);
    assert_eq!(engine.layout().tableau[0].len(), 2);
}

/// Test that moving between foundations leaves the score unchanged.
#[test]
fn test_foundation_to_foundation_nets_zero() {
    let mut engine = engine_with(|layout| {
        layout.foundations[0].push(up(Suit::Clubs, Rank::Ace));
    });

    let outcome = engine.try_move(Move::new(PileKind::Foundation, 0, PileKind::Foundation, 3));
    assert_eq!(outcome.map(|o| o.score_delta), Ok(0));
    assert_eq!(engine.layout().foundations[3].len(), 1);
}

/// Test that a tableau move that reveals nothing scores zero.
#[test]
fn test_tableau_move_without_reveal_scores_nothing() {
    let mut engine = engine_with(|layout| {
        layout.tableau[0].push(up(Suit::Hearts, Rank::Jack));
        layout.tableau[0].push(up(Suit::Spades, Rank::Ten));
        layout.tableau[1].push(up(Suit::Diamonds, Rank::Jack));
    });

    assert!(engine.move_cards(Move::new(PileKind::Tableau, 0, PileKind::Tableau, 1)));
    assert_eq!(engine.score(), 0);
}

/// Test that configured scoring values replace the defaults.
#[test]
fn test_custom_scoring() {
    let config = KlondikeConfig::new().with_scoring(ScoringConfig {
        reveal_bonus: 1,
        foundation_bonus: 2,
        foundation_withdraw_penalty: 3,
    });
    let mut engine = engine_with_config(config, |layout| {
        layout.tableau[0].push(down(Suit::Clubs, Rank::Nine));
        layout.tableau[0].push(up(Suit::Hearts, Rank::Ace));
        layout.tableau[1].push(up(Suit::Spades, Rank::Two));
    });

    assert!(engine.move_cards(Move::tableau_to_foundation(0, 0)));
    assert_eq!(engine.score(), 3);
    assert!(engine.move_cards(Move::foundation_to_tableau(0, 1)));
    assert_eq!(engine.score(), 0);
}

// =============================================================================
// Win Detection
// =============================================================================

/// Test that a game is not won while one foundation is short.
#[test]
fn test_twelve_thirteen_thirteen_thirteen_is_not_won() {
    let engine = one_card_from_win();
    let counts: Vec<_> = engine.layout().foundations.iter().map(|f| f.len()).collect();
    assert_eq!(counts, vec![12, 13, 13, 13]);
    assert!(!engine.check_win());
}

/// Test that playing the last card to a foundation wins the game.
#[test]
fn test_final_card_wins() {
    let mut engine = one_card_from_win();

    assert!(engine.move_cards(Move::waste_to_foundation(0)));
    assert!(engine.check_win());
    assert_eq!(engine.score(), 10);
    assert!(engine.legal_moves().iter().all(|m| m.from == PileKind::Foundation));
}

/// Test that a King only goes onto a Queen of its own suit.
#[test]
fn test_king_needs_matching_foundation() {
    let mut engine = one_card_from_win();
    assert!(!engine.move_cards(Move::waste_to_foundation(1)));
    assert!(!engine.check_win());
}
