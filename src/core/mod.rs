//! Core value types: cards, shuffling, configuration, errors.
//!
//! This module contains the leaf building blocks shared by every variant.
//! Nothing here knows about piles or rules.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{standard_deck, Card, Deck, Suit, SuitColor, ACE, KING, RANKS_PER_SUIT};
pub use config::{AnimationMode, CorrectionPolicy, EngineConfig};
pub use error::{EngineError, Result};
pub use rng::{GameRng, PresetShuffle, SeededShuffle, ShuffleSource};
