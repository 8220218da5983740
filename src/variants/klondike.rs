//! Klondike family: waste-based games that build down in the tableau.

use super::{Family, GameVariant, Redeals, StockMode, VariantId};
use crate::core::Deck;
use crate::rules::deal;
use crate::rules::predicates;
use crate::rules::TableauLayout;

fn klondike(id: VariantId) -> GameVariant {
    GameVariant::new(id, Family::Klondike, Deck::standard(), TableauLayout::klondike(7), 4)
}

fn westcliff(id: VariantId) -> GameVariant {
    klondike(id)
        .with_layout(TableauLayout::uniform(10, 2, 1))
        .with_stock(StockMode::ToWaste, 1, Redeals::None)
        .with_empty_tableau_rule(predicates::any_card)
}

/// Two decks, ten piles of four face-up cards, only single cards move.
fn forty_thieves(id: VariantId) -> GameVariant {
    GameVariant::new(id, Family::Klondike, Deck::decks(2), TableauLayout::uniform(10, 0, 4), 8)
        .with_stock(StockMode::ToWaste, 1, Redeals::None)
        .with_face_up_amount(4)
        .with_lift_rule(predicates::top_card_only)
        .with_empty_tableau_rule(predicates::any_card)
}

pub(super) fn descriptor(id: VariantId) -> GameVariant {
    match id {
        VariantId::KlondikeTurnOne => klondike(id),
        VariantId::KlondikeTurnThree => klondike(id).with_stock(StockMode::ToWaste, 3, Redeals::Unlimited),
        VariantId::Gargantua => {
            GameVariant::new(id, Family::Klondike, Deck::decks(2), TableauLayout::klondike(9), 8)
                .with_stock(StockMode::ToWaste, 1, Redeals::Once)
        }
        VariantId::ClassicWestcliff => westcliff(id).with_foundation_reset(deal::seed_aces, 4),
        VariantId::AmericanWestcliff => westcliff(id),
        VariantId::Easthaven => klondike(id)
            .with_layout(TableauLayout::uniform(7, 2, 1))
            .with_stock(StockMode::DealToTableau { require_filled: false }, 7, Redeals::None)
            .with_lift_rule(predicates::alternating_run)
            .with_readiness_rule(predicates::descending_runs),
        VariantId::ThumbAndPouch => klondike(id)
            .with_stock(StockMode::ToWaste, 1, Redeals::None)
            .with_tableau_rule(predicates::other_suit_descending)
            .with_empty_tableau_rule(predicates::any_card),
        VariantId::FortyThieves => forty_thieves(id)
            .with_tableau_rule(predicates::same_suit_descending)
            .with_readiness_rule(predicates::single_suit_descending),
        VariantId::Streets => forty_thieves(id).with_readiness_rule(predicates::descending_runs),
        other => unreachable!("{other:?} is not a Klondike-family variant"),
    }
}
