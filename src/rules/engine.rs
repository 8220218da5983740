//! Rules trait implemented by every variant descriptor.
//!
//! The engine calls these methods during dealing, move resolution, win
//! detection and autocomplete. It never interprets variant-specific
//! concepts directly.

use crate::core::Card;
use crate::piles::{Pile, Table};

/// The shared capability interface of a solitaire ruleset.
///
/// ## Implementation Notes
///
/// - Predicates must be pure: they read the table, never mutate it
/// - `reset_tableau` and `reset_foundation` deal from the stock's top
/// - `autocomplete_tableau_check` must only hold for tableau states in which
///   every pile's top card can eventually reach a foundation
pub trait Rules {
    /// Deal the tableau from the stock.
    fn reset_tableau(&self, tableau: &mut [Pile], stock: &mut Pile);

    /// Prepare foundations for a new deal (usually: leave them empty).
    fn reset_foundation(&self, foundations: &mut [Pile], stock: &mut Pile);

    /// Whether the suffix of `tableau` starting at `from` may be picked up.
    fn can_lift(&self, tableau: &Pile, from: usize) -> bool;

    /// Legality of adding `cards` onto a non-empty tableau pile.
    fn can_add_to_tableau_non_empty_rule(&self, table: &Table, tableau: &Pile, cards: &[Card]) -> bool;

    /// Legality of adding `cards` onto an empty tableau pile.
    fn can_add_to_tableau_empty_rule(&self, table: &Table, tableau: &Pile, cards: &[Card]) -> bool;

    /// Legality of adding `cards` onto a foundation pile.
    fn can_add_to_foundation(&self, table: &Table, foundation: &Pile, cards: &[Card]) -> bool;

    /// Win predicate over the foundations.
    fn game_won(&self, foundations: &[Pile]) -> bool;

    /// Readiness gate for autocomplete.
    fn autocomplete_tableau_check(&self, tableau: &[Pile]) -> bool;

    // === Convenience Methods ===

    /// Dispatch to the empty or non-empty tableau rule.
    fn can_add_to_tableau(&self, table: &Table, tableau: &Pile, cards: &[Card]) -> bool {
        if cards.is_empty() {
            return false;
        }
        if tableau.is_empty() {
            self.can_add_to_tableau_empty_rule(table, tableau, cards)
        } else {
            self.can_add_to_tableau_non_empty_rule(table, tableau, cards)
        }
    }
}
