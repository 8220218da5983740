//! Yukon family: everything dealt, any face-up card can be lifted with the
//! cards above it.

use super::{Family, GameVariant, Redeals, StockMode, VariantId};
use crate::core::Deck;
use crate::rules::predicates;
use crate::rules::TableauLayout;

fn yukon(id: VariantId) -> GameVariant {
    GameVariant::new(id, Family::Yukon, Deck::standard(), TableauLayout::yukon(), 4)
        .with_stock(StockMode::None, 0, Redeals::None)
        .with_face_up_amount(5)
        .with_readiness_rule(predicates::single_suit_descending)
}

/// Seven piles of four face-up cards with a draw-one stock.
fn australian(id: VariantId, redeals: Redeals) -> GameVariant {
    yukon(id)
        .with_layout(TableauLayout::uniform(7, 0, 4))
        .with_stock(StockMode::ToWaste, 1, redeals)
        .with_face_up_amount(4)
        .with_tableau_rule(predicates::same_suit_descending)
}

pub(super) fn descriptor(id: VariantId) -> GameVariant {
    match id {
        VariantId::Yukon => yukon(id),
        VariantId::Russian => yukon(id).with_tableau_rule(predicates::same_suit_descending),
        VariantId::Alaska => yukon(id).with_tableau_rule(predicates::same_suit_adjacent),
        VariantId::Moosehide => yukon(id).with_tableau_rule(predicates::other_suit_descending),
        VariantId::AustralianPatience => australian(id, Redeals::None),
        VariantId::Canberra => australian(id, Redeals::Once),
        other => unreachable!("{other:?} is not a Yukon-family variant"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yukon_has_no_stock_play() {
        for id in [VariantId::Yukon, VariantId::Russian, VariantId::Alaska, VariantId::Moosehide] {
            let variant = descriptor(id);
            assert_eq!(variant.stock_mode(), StockMode::None);
            assert_eq!(variant.draw_amount(), 0);
            assert_eq!(variant.redeals(), Redeals::None);
            assert_eq!(variant.required_cards(), 52);
        }
    }

    #[test]
    fn test_australian_and_canberra() {
        let australian = descriptor(VariantId::AustralianPatience);
        let canberra = descriptor(VariantId::Canberra);

        assert_eq!(australian.required_cards(), 28);
        assert_eq!(australian.redeals(), Redeals::None);
        assert_eq!(canberra.redeals(), Redeals::Once);
        assert_eq!(canberra.stock_mode(), StockMode::ToWaste);
    }
}
