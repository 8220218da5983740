//! Pile model: stock, waste, foundations and tableau.
//!
//! ## Key Types
//!
//! - `PileId`: which pile (kind + index)
//! - `Pile`: true pile, display pile, bounded local undo log
//! - `Table`: every pile of one game session

pub mod pile;
pub mod table;

pub use pile::{Pile, PileId, PileKind, MAX_PILES};
pub use table::{Table, TouchedPiles};
