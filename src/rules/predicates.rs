//! Reusable rule predicates shared across variant families.
//!
//! Families compose these into their descriptors; concrete variants swap
//! individual predicates. All functions are plain `fn`s so a descriptor can
//! store them as function pointers.

use crate::core::{Card, ACE, KING, RANKS_PER_SUIT};
use crate::piles::{Pile, Table};

/// Rule for placing cards onto a tableau or foundation pile.
pub type PlacementRule = fn(&Table, &Pile, &[Card]) -> bool;

/// Rule for picking up a tableau suffix.
pub type LiftRule = fn(&Pile, usize) -> bool;

/// Predicate over a group of piles (win check, autocomplete readiness).
pub type PileGroupRule = fn(&[Pile]) -> bool;

// =============================================================================
// Tableau: non-empty destination
// =============================================================================

/// Descending by one, alternating colors (Klondike, Yukon).
pub fn alternating_descending(_table: &Table, tableau: &Pile, cards: &[Card]) -> bool {
    on_face_up_top(tableau, cards, |top, first| {
        top.color() != first.color() && first.value + 1 == top.value
    })
}

/// Descending by one in the same suit (Russian, Forty Thieves).
pub fn same_suit_descending(_table: &Table, tableau: &Pile, cards: &[Card]) -> bool {
    on_face_up_top(tableau, cards, |top, first| {
        top.suit == first.suit && first.value + 1 == top.value
    })
}

/// Descending by one regardless of suit (Spider).
pub fn any_suit_descending(_table: &Table, tableau: &Pile, cards: &[Card]) -> bool {
    on_face_up_top(tableau, cards, |top, first| first.value + 1 == top.value)
}

/// Descending by one in any suit but the top's own (Thumb and Pouch, Moosehide).
pub fn other_suit_descending(_table: &Table, tableau: &Pile, cards: &[Card]) -> bool {
    on_face_up_top(tableau, cards, |top, first| {
        top.suit != first.suit && first.value + 1 == top.value
    })
}

/// Same suit, one rank up or down (Alaska).
pub fn same_suit_adjacent(_table: &Table, tableau: &Pile, cards: &[Card]) -> bool {
    on_face_up_top(tableau, cards, |top, first| {
        top.suit == first.suit && top.value.abs_diff(first.value) == 1
    })
}

/// Nothing may be built on this pile.
pub fn never(_table: &Table, _pile: &Pile, _cards: &[Card]) -> bool {
    false
}

fn on_face_up_top(tableau: &Pile, cards: &[Card], accept: impl Fn(Card, Card) -> bool) -> bool {
    match (tableau.top(), cards.first()) {
        (Some(top), Some(&first)) => top.face_up && accept(top, first),
        _ => false,
    }
}

// =============================================================================
// Tableau: empty destination
// =============================================================================

/// Only a King (or a run starting with one) fills a gap.
pub fn king_only(_table: &Table, _tableau: &Pile, cards: &[Card]) -> bool {
    cards.first().is_some_and(|c| c.value == KING)
}

/// Any card or run fills a gap.
pub fn any_card(_table: &Table, _tableau: &Pile, cards: &[Card]) -> bool {
    !cards.is_empty()
}

// =============================================================================
// Foundation
// =============================================================================

/// Single card, same suit, next rank up; Aces start empty piles.
pub fn ascending_same_suit(_table: &Table, foundation: &Pile, cards: &[Card]) -> bool {
    let [card] = cards else {
        return false;
    };
    match foundation.top() {
        None => card.value == ACE,
        Some(top) => top.suit == card.suit && card.value == top.value + 1,
    }
}

/// A complete King-to-Ace run of one suit onto an empty pile (Spider).
pub fn complete_run(_table: &Table, foundation: &Pile, cards: &[Card]) -> bool {
    foundation.is_empty()
        && cards.len() == RANKS_PER_SUIT
        && cards[0].value == KING
        && is_same_suit_run(cards)
}

/// Single card one rank above or below the top, King and Ace adjacent (Golf).
pub fn adjacent_wrapping(_table: &Table, foundation: &Pile, cards: &[Card]) -> bool {
    let ([card], Some(top)) = (cards, foundation.top()) else {
        return false;
    };
    let diff = top.value.abs_diff(card.value);
    diff == 1 || diff == KING
}

/// Any single card that is outranked by a same-suit card showing on
/// another tableau pile, Aces high (Aces Up discard).
pub fn outranked_discard(table: &Table, _foundation: &Pile, cards: &[Card]) -> bool {
    let [card] = cards else {
        return false;
    };
    table
        .tableau()
        .iter()
        .filter_map(Pile::top)
        .any(|top| top.suit == card.suit && ace_high(top) > ace_high(*card))
}

fn ace_high(card: Card) -> u8 {
    if card.value == ACE {
        KING + 1
    } else {
        card.value
    }
}

// =============================================================================
// Lift
// =============================================================================

/// Any face-up card together with everything above it (Klondike, Yukon).
pub fn face_up_suffix(tableau: &Pile, from: usize) -> bool {
    from < tableau.len() && tableau.cards().iter().skip(from).all(|c| c.face_up)
}

/// Only the top card moves (Forty Thieves, Golf, Aces Up).
pub fn top_card_only(tableau: &Pile, from: usize) -> bool {
    !tableau.is_empty() && from + 1 == tableau.len() && tableau.top().is_some_and(|c| c.face_up)
}

/// A face-up descending same-suit run (Spider).
pub fn same_suit_run(tableau: &Pile, from: usize) -> bool {
    face_up_suffix(tableau, from) && is_same_suit_run(&tableau.suffix(from))
}

/// A face-up run descending by one in alternating colors (Easthaven).
pub fn alternating_run(tableau: &Pile, from: usize) -> bool {
    face_up_suffix(tableau, from)
        && tableau
            .suffix(from)
            .windows(2)
            .all(|w| w[0].color() != w[1].color() && w[1].value + 1 == w[0].value)
}

/// Whether cards form a same-suit run descending by one.
#[must_use]
pub fn is_same_suit_run(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|w| w[0].suit == w[1].suit && w[1].value + 1 == w[0].value)
}

fn is_descending(cards: impl Iterator<Item = Card>) -> bool {
    let cards: Vec<Card> = cards.collect();
    cards.windows(2).all(|w| w[1].value + 1 == w[0].value)
}

// =============================================================================
// Win
// =============================================================================

/// Every foundation holds exactly one full suit.
pub fn all_foundations_full(foundations: &[Pile]) -> bool {
    foundations.iter().all(|f| f.len() == RANKS_PER_SUIT)
}

/// The single foundation holds the whole 52-card deck (Golf, Black Hole).
pub fn single_pile_52(foundations: &[Pile]) -> bool {
    foundations.first().is_some_and(|f| f.len() == 52)
}

/// The single foundation holds everything but the four Aces (Aces Up).
pub fn single_pile_48(foundations: &[Pile]) -> bool {
    foundations.first().is_some_and(|f| f.len() == 48)
}

// =============================================================================
// Autocomplete readiness
// =============================================================================

/// No face-down card anywhere on the tableau (Klondike).
pub fn no_face_down(tableau: &[Pile]) -> bool {
    tableau.iter().all(|p| p.cards().iter().all(|c| c.face_up))
}

/// Every pile face up and strictly descending by one (Easthaven, Streets).
pub fn descending_runs(tableau: &[Pile]) -> bool {
    no_face_down(tableau) && tableau.iter().all(|p| is_descending(p.cards().iter().copied()))
}

/// Every pile face up, single suit and strictly descending (Yukon family).
pub fn single_suit_descending(tableau: &[Pile]) -> bool {
    no_face_down(tableau)
        && tableau.iter().all(|p| is_same_suit_run(&p.suffix(0)))
}

/// Autocomplete is never offered (Spider, Golf, Aces Up).
pub fn never_ready(_tableau: &[Pile]) -> bool {
    false
}
