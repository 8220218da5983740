//! Destination resolution for a tapped selection.
//!
//! ## Precedence
//!
//! 1. Foundations, when a single card is selected (or a whole run, for
//!    variants whose foundations take runs)
//! 2. Non-empty tableau piles, left to right
//! 3. Empty tableau piles, left to right
//!
//! The first pile whose predicate accepts wins. The source pile is never a
//! candidate, and cards taken from a foundation only look at the tableau.

use crate::core::Card;
use crate::piles::{PileId, Table};
use crate::rules::Rules;
use crate::variants::GameVariant;

/// Find the destination for `cards` lifted from `source`.
#[must_use]
pub fn resolve(variant: &GameVariant, table: &Table, source: PileId, cards: &[Card]) -> Option<PileId> {
    if cards.is_empty() {
        return None;
    }

    if !source.is_foundation() && (cards.len() == 1 || variant.foundation_takes_runs()) {
        if let Some(foundation) = foundation_destination(variant, table, cards) {
            return Some(foundation);
        }
    }

    tableau_destination(variant, table, source, cards)
}

/// First foundation accepting `cards`.
#[must_use]
pub fn foundation_destination(variant: &GameVariant, table: &Table, cards: &[Card]) -> Option<PileId> {
    table
        .foundations()
        .iter()
        .find(|f| variant.can_add_to_foundation(table, f, cards))
        .map(|f| f.id())
}

/// First tableau pile accepting `cards`: non-empty piles, then empty ones.
#[must_use]
pub fn tableau_destination(
    variant: &GameVariant,
    table: &Table,
    source: PileId,
    cards: &[Card],
) -> Option<PileId> {
    let candidates = || table.tableau().iter().filter(move |p| p.id() != source);

    candidates()
        .filter(|p| !p.is_empty())
        .find(|p| variant.can_add_to_tableau_non_empty_rule(table, p, cards))
        .or_else(|| {
            candidates()
                .filter(|p| p.is_empty())
                .find(|p| variant.can_add_to_tableau_empty_rule(table, p, cards))
        })
        .map(|p| p.id())
}
