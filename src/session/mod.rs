//! Caller-owned game session for transport layers.
//!
//! A `GameSession` holds exactly one `KlondikeEngine` behind a lock, so a
//! concurrent transport (an HTTP server, a socket loop) can share it while
//! every operation still runs to completion before the next one starts.
//!
//! It exposes the four transport operations and their wire types:
//!
//! | Operation | Returns |
//! |---|---|
//! | `reset_game` | `GameSnapshot` |
//! | `get_state` | `GameSnapshot` |
//! | `draw_card` | `GameSnapshot` |
//! | `move_card` | `MoveResponse` (snapshot + `success` + `won`) |
//!
//! ```
//! use klondike_engine::core::KlondikeConfig;
//! use klondike_engine::session::{GameSession, MoveRequest};
//!
//! let session = GameSession::new(KlondikeConfig::new().with_seed(1));
//! let request = MoveRequest::from_json(
//!     r#"{ "fromType": "waste", "fromIndex": 0, "toType": "foundation", "toIndex": 0 }"#,
//! ).unwrap();
//!
//! let response = session.move_card(&request);
//! assert!(!response.success); // waste is empty right after a deal
//! assert_eq!(response.state, session.get_state());
//! ```

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, KlondikeConfig, Move};
use crate::games::klondike::KlondikeEngine;
use crate::zones::PileKind;

/// Body of a move request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    #[serde(alias = "fromKind")]
    pub from_type: PileKind,
    #[serde(default)]
    pub from_index: usize,
    #[serde(alias = "toKind")]
    pub to_type: PileKind,
    #[serde(default)]
    pub to_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_index: Option<usize>,
}

impl MoveRequest {
    /// Parse a request body.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&MoveRequest> for Move {
    fn from(req: &MoveRequest) -> Self {
        Move {
            from: req.from_type,
            from_index: req.from_index,
            to: req.to_type,
            to_index: req.to_index,
            card_index: req.card_index,
        }
    }
}

/// Reply to a move request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(flatten)]
    pub state: GameSnapshot,
    pub success: bool,
    pub won: bool,
}

/// One game, shared by every request.
#[derive(Debug)]
pub struct GameSession {
    engine: Mutex<KlondikeEngine>,
}

impl GameSession {
    /// Create a session and deal its first game.
    #[must_use]
    pub fn new(config: KlondikeConfig) -> Self {
        Self::from_engine(KlondikeEngine::new(config))
    }

    /// Wrap an existing engine.
    #[must_use]
    pub fn from_engine(engine: KlondikeEngine) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    /// Deal a new game.
    pub fn reset_game(&self) -> GameSnapshot {
        let mut engine = self.engine.lock();
        engine.reset();
        engine.snapshot()
    }

    /// Current state, unchanged.
    pub fn get_state(&self) -> GameSnapshot {
        self.engine.lock().snapshot()
    }

    /// Draw from the stock (or recycle the waste).
    pub fn draw_card(&self) -> GameSnapshot {
        let mut engine = self.engine.lock();
        engine.draw();
        engine.snapshot()
    }

    /// Attempt a move and report the outcome with the resulting state.
    pub fn move_card(&self, request: &MoveRequest) -> MoveResponse {
        let mut engine = self.engine.lock();
        let success = engine.move_cards(Move::from(request));
        MoveResponse {
            state: engine.snapshot(),
            success,
            won: engine.check_win(),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut KlondikeEngine) -> R) -> R {
        f(&mut self.engine.lock())
    }

    /// Consume the session, returning its engine.
    #[must_use]
    pub fn into_engine(self) -> KlondikeEngine {
        self.engine.into_inner()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(KlondikeConfig::default())
    }
}
