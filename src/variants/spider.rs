//! Spider family: build down regardless of suit, clear complete suits.

use super::{Family, GameVariant, Redeals, StockMode, VariantId};
use crate::core::{Card, Deck, Suit};
use crate::rules::predicates;
use crate::rules::TableauLayout;

fn spider(id: VariantId, deck: Vec<Card>, layout: TableauLayout, foundations: usize) -> GameVariant {
    let piles = layout.pile_count();
    GameVariant::new(id, Family::Spider, deck, layout, foundations)
        .with_stock(StockMode::DealToTableau { require_filled: true }, piles, Redeals::None)
        .with_tableau_rule(predicates::any_suit_descending)
        .with_empty_tableau_rule(predicates::any_card)
        .with_lift_rule(predicates::same_suit_run)
        .with_foundation_rule(predicates::complete_run)
        .with_foundation_runs(true)
        .with_foundation_withdrawal(false)
        .without_autocomplete()
}

pub(super) fn descriptor(id: VariantId) -> GameVariant {
    match id {
        VariantId::Spider => spider(id, Deck::decks(2), TableauLayout::spider(), 8),
        VariantId::SpiderTwoSuit => spider(
            id,
            Deck::suits(&[Suit::Spades, Suit::Hearts], 4),
            TableauLayout::spider(),
            8,
        ),
        VariantId::SpiderOneSuit => spider(id, Deck::suits(&[Suit::Spades], 8), TableauLayout::spider(), 8),
        VariantId::Spiderette => spider(id, Deck::standard(), TableauLayout::spiderette(), 4),
        other => unreachable!("{other:?} is not a Spider-family variant"),
    }
}
