//! Klondike engine implementation.

use tracing::{debug, info};

use crate::cards::{standard_deck, Card, DECK_SIZE};
use crate::core::{
    GameRng, GameSnapshot, GameState, KlondikeConfig, Move, MoveError, ScoringConfig, StateError,
    TABLEAU_DEAL, TABLEAU_PILES,
};
use crate::rules::{can_place_on_foundation, can_place_on_tableau, is_won, legal_moves};
use crate::zones::{Layout, Pile, PileKind};

/// What a draw did. Drawing never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The stock's top card was turned onto the waste.
    Drew(Card),
    /// The stock was empty; the waste was turned back over into it.
    Recycled { cards: usize },
    /// Stock and waste were both empty. Nothing changed.
    Idle,
}

/// Effects of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Number of cards transferred.
    pub moved: usize,
    /// Tableau card turned face up by the move, if any.
    pub revealed: Option<Card>,
    /// Net score change.
    pub score_delta: i32,
}

/// The Klondike game-state engine.
///
/// Owns one game. Callers hold the engine directly; there is no global
/// instance. Every operation runs to completion synchronously, and a
/// rejected move leaves the state exactly as it was.
#[derive(Clone, Debug)]
pub struct KlondikeEngine {
    config: KlondikeConfig,
    /// Seed of the current deal; `None` for a restored state.
    deal_seed: Option<u64>,
    state: GameState,
}

/// Builder for creating a `KlondikeEngine`.
#[derive(Clone, Debug, Default)]
pub struct KlondikeBuilder {
    config: KlondikeConfig,
}

impl KlondikeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: KlondikeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Build the engine and deal the first game.
    pub fn build(self) -> KlondikeEngine {
        KlondikeEngine::new(self.config)
    }
}

/// Shuffle a fresh deck and lay it out.
///
/// Tableau pile `j` receives one card on each pass `i <= j`; the card dealt
/// on pass `i == j` is the pile's top and is turned face up. The 24 cards
/// left over become the stock, face down, in deck order.
fn deal(rng: &mut GameRng) -> Layout {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);

    let mut layout = Layout::new();
    for i in 0..TABLEAU_PILES {
        for j in i..TABLEAU_PILES {
            if let Some(mut card) = deck.pop() {
                if i == j {
                    card.turn_face_up();
                }
                layout.tableau[j].push(card);
            }
        }
    }
    debug_assert_eq!(deck.len(), DECK_SIZE - TABLEAU_DEAL);
    layout.stock = Pile::from_cards(deck);

    layout
}

fn rng_for(config: &KlondikeConfig) -> GameRng {
    match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    }
}

impl KlondikeEngine {
    /// Create an engine and deal a game.
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        let mut engine = Self {
            config,
            deal_seed: None,
            state: GameState::default(),
        };
        engine.reset();
        engine
    }

    /// Create an engine around an existing state, e.g. a restored checkpoint.
    ///
    /// The state must pass `GameState::validate`. How the restored deal
    /// was shuffled is unknown, so `seed` reports `None` until the next
    /// `reset`.
    pub fn with_state(config: KlondikeConfig, state: GameState) -> Result<Self, StateError> {
        state.validate()?;
        Ok(Self {
            config,
            deal_seed: None,
            state,
        })
    }

    /// Deal a fresh game.
    ///
    /// With a fixed seed every reset deals the same layout; otherwise a new
    /// seed is drawn (see `seed`).
    pub fn reset(&mut self) {
        let mut rng = rng_for(&self.config);
        self.state = GameState::new(deal(&mut rng), 0);
        self.deal_seed = Some(rng.seed());
        info!(seed = rng.seed(), "dealt new game");
    }

    /// Seed of the current deal. Passing it to `KlondikeConfig::with_seed`
    /// reproduces the deal. `None` after `with_state`.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.deal_seed
    }

    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.state.layout
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.state.score
    }

    /// Capture a render snapshot of the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Turn the stock's top card onto the waste.
    ///
    /// With an empty stock, the waste is reversed into a new face-down
    /// stock instead. With both empty this is a no-op.
    pub fn draw(&mut self) -> DrawOutcome {
        let layout = &mut self.state.layout;

        let outcome = if let Some(mut card) = layout.stock.pop() {
            card.turn_face_up();
            layout.waste.push(card);
            DrawOutcome::Drew(card)
        } else if layout.waste.is_empty() {
            DrawOutcome::Idle
        } else {
            let mut cards = layout.waste.take_all();
            cards.reverse();
            cards.iter_mut().for_each(Card::turn_face_down);
            let count = cards.len();
            layout.stock = Pile::from_cards(cards);
            DrawOutcome::Recycled { cards: count }
        };

        debug!(?outcome, "draw");
        outcome
    }

    /// Execute a move, reporting only whether it succeeded.
    ///
    /// On `false` nothing changed.
    pub fn move_cards(&mut self, mv: Move) -> bool {
        match self.try_move(mv) {
            Ok(_) => true,
            Err(err) => {
                debug!(%mv, %err, "move rejected");
                false
            }
        }
    }

    /// Validate and execute a move.
    ///
    /// All checks run before any pile is touched, so an `Err` leaves the
    /// state unchanged.
    pub fn try_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let start = self.check_move(&mv)?;
        let scoring = self.config.scoring;
        let layout = &mut self.state.layout;

        let source = layout.pile_mut(mv.from, mv.from_index)?;
        let len = source.len();
        let run = source
            .take_run(start)
            .ok_or(MoveError::CardIndexOutOfRange { card_index: start, len })?;
        let moved = run.len();

        let mut score_delta = 0;
        let mut revealed = None;
        if mv.from == PileKind::Tableau {
            if let Some(top) = source.top_mut().filter(|c| !c.face_up) {
                top.turn_face_up();
                revealed = Some(*top);
                score_delta += scoring.reveal_bonus;
            }
        }

        layout.pile_mut(mv.to, mv.to_index)?.place_run(run);

        // Independent adjustments, so foundation to foundation nets zero
        // rather than the +10 an else-if chain would give it.
        if mv.to == PileKind::Foundation {
            score_delta += scoring.foundation_bonus;
        }
        if mv.from == PileKind::Foundation {
            score_delta -= scoring.foundation_withdraw_penalty;
        }
        self.state.adjust_score(score_delta);

        debug!(%mv, moved, score_delta, score = self.state.score, "move executed");
        if self.check_win() {
            info!(score = self.state.score, "game won");
        }

        Ok(MoveOutcome {
            moved,
            revealed,
            score_delta,
        })
    }

    /// Run every legality check for `mv` and return where the moving run
    /// starts in the source pile.
    fn check_move(&self, mv: &Move) -> Result<usize, MoveError> {
        let layout = &self.state.layout;
        let source = layout.pile(mv.from, mv.from_index)?;
        let target = layout.pile(mv.to, mv.to_index)?;

        if source.is_empty() {
            return Err(MoveError::EmptySource {
                kind: mv.from,
                index: mv.from_index,
            });
        }
        let top_index = source.len() - 1;
        let start = match mv.from {
            PileKind::Tableau => mv.card_index.unwrap_or(top_index),
            PileKind::Waste | PileKind::Foundation => top_index,
        };
        let lead = source.get(start).ok_or(MoveError::CardIndexOutOfRange {
            card_index: start,
            len: source.len(),
        })?;

        if !lead.face_up {
            return Err(MoveError::FaceDownLead { card: *lead });
        }
        if mv.from == mv.to && mv.from_index == mv.to_index {
            return Err(MoveError::SamePile);
        }

        let illegal = MoveError::IllegalPlacement {
            card: *lead,
            kind: mv.to,
            index: mv.to_index,
        };
        match mv.to {
            PileKind::Tableau => {
                if !can_place_on_tableau(lead, target) {
                    return Err(illegal);
                }
            }
            PileKind::Foundation => {
                let count = source.len() - start;
                if count > 1 {
                    return Err(MoveError::RunToFoundation { count });
                }
                if !can_place_on_foundation(lead, target) {
                    return Err(illegal);
                }
            }
            PileKind::Waste => return Err(MoveError::InvalidDestination { kind: mv.to }),
        }

        Ok(start)
    }

    /// Check whether all four foundations are complete.
    #[must_use]
    pub fn check_win(&self) -> bool {
        is_won(&self.state.layout)
    }

    /// Every move that would currently succeed.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.state.layout)
    }
}
