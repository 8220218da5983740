//! Card and suit value types.
//!
//! Cards are immutable `Copy` values. A "flip" never mutates a card in
//! place; it produces a new `Card` with the opposite `face_up` flag. Exact
//! structural equality (including `face_up`) is what lets piles detect
//! no-op updates cheaply.
//!
//! ## Ranks
//!
//! `value` is zero-based: `0` is the Ace, `12` the King.
//!
//! ```
//! use solitaire_engine::core::{Card, Suit};
//!
//! let ace = Card::new(0, Suit::Spades);
//! assert!(!ace.face_up);
//! assert!(ace.flipped().face_up);
//! assert_eq!(ace.to_string(), "AS");
//! ```

use serde::{Deserialize, Serialize};

/// Highest card value (King).
pub const KING: u8 = 12;

/// Lowest card value (Ace).
pub const ACE: u8 = 0;

/// Number of ranks in a suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Card color, used by alternating-color tableau rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitColor {
    Black,
    Red,
}

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// The suit's color.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Suit::Clubs | Suit::Spades => SuitColor::Black,
            Suit::Diamonds | Suit::Hearts => SuitColor::Red,
        }
    }

    /// Single-letter label.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank, 0 (Ace) through 12 (King).
    pub value: u8,
    /// Suit.
    pub suit: Suit,
    /// Whether the card is showing its face.
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// Panics if `value` is not a valid rank.
    #[must_use]
    pub const fn new(value: u8, suit: Suit) -> Self {
        assert!(value <= KING, "Card value must be 0..=12");
        Self {
            value,
            suit,
            face_up: false,
        }
    }

    /// Same card with the opposite face.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            face_up: !self.face_up,
            ..self
        }
    }

    /// Same card, face up.
    #[must_use]
    pub const fn face_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// Same card, face down.
    #[must_use]
    pub const fn face_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    /// The card's color.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        self.suit.color()
    }

    /// Identity comparison ignoring the face flag.
    #[must_use]
    pub fn same_card(self, other: Card) -> bool {
        self.value == other.value && self.suit == other.suit
    }

    /// Rank label: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub fn rank_label(self) -> &'static str {
        const LABELS: [&str; RANKS_PER_SUIT] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[self.value as usize]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.short())
    }
}

/// Deck builders.
///
/// Every builder returns face-down cards, suit-major in `Suit::ALL` order.
pub struct Deck;

impl Deck {
    /// The standard 52-card deck.
    #[must_use]
    pub fn standard() -> Vec<Card> {
        Self::suits(&Suit::ALL, 1)
    }

    /// `count` standard decks concatenated.
    #[must_use]
    pub fn decks(count: usize) -> Vec<Card> {
        Self::suits(&Suit::ALL, count)
    }

    /// `copies` full runs of each listed suit.
    ///
    /// Spider one-suit is `suits(&[Suit::Spades], 8)`.
    #[must_use]
    pub fn suits(suits: &[Suit], copies: usize) -> Vec<Card> {
        let mut deck = Vec::with_capacity(suits.len() * copies * RANKS_PER_SUIT);
        for _ in 0..copies {
            for &suit in suits {
                for value in ACE..=KING {
                    deck.push(Card::new(value, suit));
                }
            }
        }
        deck
    }

    /// Drop every card whose rank is listed.
    #[must_use]
    pub fn without_ranks(deck: Vec<Card>, ranks: &[u8]) -> Vec<Card> {
        deck.into_iter().filter(|c| !ranks.contains(&c.value)).collect()
    }

    /// Drop the first copy of `card` (face ignored).
    #[must_use]
    pub fn without_card(mut deck: Vec<Card>, card: Card) -> Vec<Card> {
        if let Some(pos) = deck.iter().position(|c| c.same_card(card)) {
            deck.remove(pos);
        }
        deck
    }
}

/// Convenience for the 52-card deck.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Deck::standard()
}
