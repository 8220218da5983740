//! Rules layer: the `Rules` capability trait and its building blocks.
//!
//! Variants implement `Rules` to define:
//! - How the tableau and foundations are dealt
//! - Which tableau suffixes can be lifted
//! - Where cards may be placed
//! - Win and autocomplete readiness conditions
//!
//! The engine calls into `Rules` but never interprets variant-specific
//! concepts directly.

pub mod deal;
pub mod engine;
pub mod predicates;

pub use deal::{deal_tableau, FoundationReset, PileDeal, TableauLayout};
pub use engine::Rules;
pub use predicates::{LiftRule, PileGroupRule, PlacementRule};
