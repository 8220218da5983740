//! Golf family: one shared foundation, only top cards move, no building.

use super::{Family, GameVariant, Redeals, StockMode, VariantId};
use crate::core::Deck;
use crate::rules::deal;
use crate::rules::predicates;
use crate::rules::TableauLayout;

fn golf_like(id: VariantId, layout: TableauLayout, face_up: usize) -> GameVariant {
    GameVariant::new(id, Family::Golf, Deck::standard(), layout, 1)
        .with_face_up_amount(face_up)
        .with_lift_rule(predicates::top_card_only)
        .with_tableau_rule(predicates::never)
        .with_empty_tableau_rule(predicates::never)
        .with_foundation_rule(predicates::adjacent_wrapping)
        .with_win_rule(predicates::single_pile_52)
        .with_foundation_withdrawal(false)
        .without_autocomplete()
}

pub(super) fn descriptor(id: VariantId) -> GameVariant {
    match id {
        VariantId::Golf => golf_like(id, TableauLayout::uniform(7, 0, 5), 5)
            .with_stock(StockMode::ToFoundation, 1, Redeals::None)
            .with_foundation_reset(deal::seed_from_stock, 1),
        VariantId::BlackHole => golf_like(id, TableauLayout::uniform(17, 0, 3), 3)
            .with_stock(StockMode::None, 0, Redeals::None)
            .with_foundation_reset(deal::seed_ace_of_spades, 1),
        VariantId::AcesUp => golf_like(id, TableauLayout::uniform(4, 0, 1), 1)
            .with_stock(StockMode::DealToTableau { require_filled: false }, 4, Redeals::None)
            .with_foundation_rule(predicates::outranked_discard)
            .with_empty_tableau_rule(predicates::any_card)
            .with_win_rule(predicates::single_pile_48)
            .with_max_score(48),
        other => unreachable!("{other:?} is not a Golf-family variant"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golf_seeds_foundation() {
        let golf = descriptor(VariantId::Golf);
        assert_eq!(golf.foundation_count(), 1);
        assert_eq!(golf.starting_score(), 1);
        assert_eq!(golf.required_cards(), 36);
        assert_eq!(golf.stock_mode(), StockMode::ToFoundation);
    }

    #[test]
    fn test_black_hole_uses_whole_deck() {
        let black_hole = descriptor(VariantId::BlackHole);
        assert_eq!(black_hole.required_cards(), 52);
        assert_eq!(black_hole.tableau_count(), 17);
        assert!(black_hole.validate().is_ok());
    }

    #[test]
    fn test_aces_up() {
        let aces_up = descriptor(VariantId::AcesUp);
        assert_eq!(aces_up.max_score(), 48);
        assert_eq!(aces_up.starting_score(), 0);
        assert_eq!(aces_up.draw_amount(), 4);
        assert!(!aces_up.foundation_withdrawal());
    }
}
