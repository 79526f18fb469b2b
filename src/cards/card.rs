//! Playing cards: suit, rank, and orientation.
//!
//! A `Card`'s identity is its `(suit, rank)` pair, which never changes.
//! Only its orientation (`face_up`) is mutable.
//!
//! ## Rank Ordering
//!
//! `Rank` carries an intrinsic ordinal (Ace = 0 .. King = 12), so
//! successor/predecessor checks are plain integer arithmetic:
//!
//! ```
//! use klondike_engine::cards::Rank;
//!
//! assert_eq!(Rank::Ace.successor(), Some(Rank::Two));
//! assert_eq!(Rank::King.successor(), None);
//! assert!(Rank::Ten < Rank::Jack);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Suit color. Hearts and diamonds are red, clubs and spades black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Lowercase name, as used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Suit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, Ace lowest and King highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace = 0,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in the rank sequence (Ace = 0, King = 12).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Rank at the given ordinal, if any.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// The next rank up. No wraparound: King has no successor.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// The next rank down. Ace has no predecessor.
    #[must_use]
    pub fn predecessor(self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }

    /// Face value label, as used on the wire ("A", "2" .. "10", "J", "Q", "K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// Equality compares orientation too; use `same_identity` to compare only
/// `(suit, rank)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Check whether two cards are the same card, ignoring orientation.
    #[must_use]
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Stable identifier derived from `(rank, suit)`, e.g. `"10_hearts"`.
    ///
    /// Only renderers use this; game logic compares `suit` and `rank`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}_{}", self.rank.label(), self.suit.name())
    }

    pub fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    pub fn turn_face_down(&mut self) {
        self.face_up = false;
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
