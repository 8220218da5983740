//! # solitaire-engine
//!
//! A rule-driven, multi-variant solitaire engine.
//!
//! ## Design Principles
//!
//! 1. **Rules as Data**: Every game is an immutable `GameVariant` descriptor
//!    composed from shared predicate functions. The engine never branches on
//!    which game is being played.
//!
//! 2. **True vs. Display State**: Piles keep an authoritative true pile and a
//!    display pile for the animation layer. Moves change the former at once;
//!    the latter converges through explicit reconciliation hooks.
//!
//! 3. **Plain-Data History**: Undo records name piles, never hold them.
//!    Each pile keeps its own bounded snapshot log.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) pile snapshots via `im-rs`, used
//!   for undo logs and display piles.
//!
//! - **Injected Randomness**: Shuffling goes through a `ShuffleSource`,
//!   consumed once per new game.
//!
//! - **Steppable Autocomplete**: The autocomplete loop is a synchronous step
//!   function plus blocking and tokio drivers with a cancellation token.
//!
//! ## Modules
//!
//! - `core`: Cards, decks, shuffling, configuration, errors
//! - `piles`: Stock, waste, foundation and tableau piles; the `Table`
//! - `rules`: `Rules` trait, shared predicates, deal procedures
//! - `variants`: The supported games and their families
//! - `engine`: Move resolution, history, scoring, autocomplete, animation
//!   hand-off, statistics, snapshots

pub mod core;
pub mod piles;
pub mod rules;
pub mod variants;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Card, Deck, Suit, SuitColor,
    EngineConfig, AnimationMode, CorrectionPolicy,
    EngineError, Result,
    GameRng, ShuffleSource, SeededShuffle, PresetShuffle,
};

pub use crate::piles::{Pile, PileId, PileKind, Table};

pub use crate::rules::{Rules, TableauLayout};

pub use crate::variants::{Family, GameVariant, Redeals, StockMode, VariantId};

pub use crate::engine::{
    Engine, EngineBuilder, ResetOption, GameView,
    MoveResult, MoveKind, MoveRecord, History, Scoreboard,
    AnimationId, AnimationKind, AnimationRequest,
    AutocompleteOutcome, AutocompleteStep, CancelToken, run_autocomplete,
    GameSummary, StatsSink, RecordingSink,
    SessionSnapshot,
};
