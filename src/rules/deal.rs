//! Deal procedures: tableau layouts and foundation seeding.
//!
//! Every procedure pops cards from the top of the stock (the last element)
//! and writes piles through the unrecorded deal helpers, so a fresh deal
//! starts with empty undo logs.

use smallvec::SmallVec;

use crate::core::{Card, Suit, ACE};
use crate::piles::Pile;

/// Function that prepares the foundations for a new deal.
pub type FoundationReset = fn(&mut [Pile], &mut Pile);

/// Face-down and face-up counts for one tableau pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PileDeal {
    pub face_down: usize,
    pub face_up: usize,
}

impl PileDeal {
    #[must_use]
    pub const fn new(face_down: usize, face_up: usize) -> Self {
        Self { face_down, face_up }
    }

    #[must_use]
    pub const fn total(self) -> usize {
        self.face_down + self.face_up
    }
}

/// The shape of a tableau deal, one entry per pile.
///
/// ```
/// use solitaire_engine::rules::TableauLayout;
///
/// let klondike = TableauLayout::klondike(7);
/// assert_eq!(klondike.pile_count(), 7);
/// assert_eq!(klondike.total_cards(), 28);
///
/// assert_eq!(TableauLayout::yukon().total_cards(), 52);
/// assert_eq!(TableauLayout::spider().total_cards(), 54);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableauLayout {
    piles: SmallVec<[PileDeal; 10]>,
}

impl TableauLayout {
    /// Build from explicit per-pile counts.
    #[must_use]
    pub fn from_piles(piles: impl IntoIterator<Item = PileDeal>) -> Self {
        Self {
            piles: piles.into_iter().collect(),
        }
    }

    /// Staircase: pile `i` has `i` face-down cards under one face-up card.
    #[must_use]
    pub fn klondike(pile_count: usize) -> Self {
        Self::from_piles((0..pile_count).map(|i| PileDeal::new(i, 1)))
    }

    /// Every pile dealt the same.
    #[must_use]
    pub fn uniform(pile_count: usize, face_down: usize, face_up: usize) -> Self {
        Self::from_piles((0..pile_count).map(|_| PileDeal::new(face_down, face_up)))
    }

    /// Seven piles: one lone face-up card, then `i` face-down under five up.
    #[must_use]
    pub fn yukon() -> Self {
        Self::from_piles((0..7).map(|i| {
            if i == 0 {
                PileDeal::new(0, 1)
            } else {
                PileDeal::new(i, 5)
            }
        }))
    }

    /// Ten piles: four of six cards and six of five, one face up each.
    #[must_use]
    pub fn spider() -> Self {
        Self::from_piles((0..10).map(|i| if i < 4 { PileDeal::new(5, 1) } else { PileDeal::new(4, 1) }))
    }

    /// Spiderette: the Klondike staircase with seven piles.
    #[must_use]
    pub fn spiderette() -> Self {
        Self::klondike(7)
    }

    #[must_use]
    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// Cards the layout takes from the stock.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(|p| p.total()).sum()
    }

    #[must_use]
    pub fn piles(&self) -> &[PileDeal] {
        &self.piles
    }
}

/// Deal `layout` onto `tableau`, pile by pile, bottom card first.
///
/// Face-down cards go under face-up ones. Stops quietly if the stock runs
/// out; variants validate their deck size up front.
pub fn deal_tableau(layout: &TableauLayout, tableau: &mut [Pile], stock: &mut Pile) {
    for (pile, deal) in tableau.iter_mut().zip(layout.piles()) {
        for n in 0..deal.total() {
            let Some(card) = stock.deal_top() else {
                return;
            };
            let card = if n < deal.face_down {
                card.face_down()
            } else {
                card.face_up()
            };
            pile.deal_push(card);
        }
    }
}

// =============================================================================
// Foundation resets
// =============================================================================

/// Foundations start empty.
pub fn clear_foundations(_foundations: &mut [Pile], _stock: &mut Pile) {}

/// One Ace per foundation, in suit order (Classic Westcliff).
pub fn seed_aces(foundations: &mut [Pile], stock: &mut Pile) {
    for (foundation, suit) in foundations.iter_mut().zip(Suit::ALL.iter().cycle()) {
        if let Some(ace) = stock.deal_take(|c| c.value == ACE && c.suit == *suit) {
            foundation.deal_push(ace.face_up());
        }
    }
}

/// The Ace of Spades starts the single foundation (Black Hole).
pub fn seed_ace_of_spades(foundations: &mut [Pile], stock: &mut Pile) {
    let target = Card::new(ACE, Suit::Spades);
    if let Some(foundation) = foundations.first_mut() {
        if let Some(ace) = stock.deal_take(|c| c.same_card(target)) {
            foundation.deal_push(ace.face_up());
        }
    }
}

/// The stock's top card starts the single foundation (Golf).
pub fn seed_from_stock(foundations: &mut [Pile], stock: &mut Pile) {
    if let Some(foundation) = foundations.first_mut() {
        if let Some(card) = stock.deal_top() {
            foundation.deal_push(card.face_up());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::standard_deck;
    use crate::piles::{PileId, Table};

    fn loaded_table(foundations: usize, tableau: usize) -> Table {
        let mut table = Table::new(foundations, tableau, 15);
        table.load_stock(&standard_deck());
        table
    }

    #[test]
    fn test_layout_totals() {
        assert_eq!(TableauLayout::klondike(9).total_cards(), 45);
        assert_eq!(TableauLayout::uniform(17, 0, 3).total_cards(), 51);
        assert_eq!(TableauLayout::uniform(10, 2, 1).pile_count(), 10);
        assert_eq!(TableauLayout::spiderette().total_cards(), 28);
    }

    #[test]
    fn test_deal_tableau_order_and_faces() {
        let deck = standard_deck();
        let mut table = loaded_table(4, 7);
        let layout = TableauLayout::klondike(7);

        let (stock, _, tableau) = table.deal_parts();
        deal_tableau(&layout, tableau, stock);

        let t0 = &table.tableau()[0];
        assert_eq!(t0.len(), 1);
        assert_eq!(t0.top(), Some(deck[51].face_up()));

        let t1 = &table.tableau()[1];
        assert_eq!(t1.get(0), Some(deck[50].face_down()));
        assert_eq!(t1.get(1), Some(deck[49].face_up()));

        let t3 = &table.tableau()[3];
        assert_eq!(t3.top(), Some(deck[42].face_up()));
        assert_eq!(table.tableau()[6].top(), Some(deck[24].face_up()));

        assert_eq!(table.stock().len(), 24);
        assert_eq!(table.stock().top(), Some(deck[23].face_down()));
        assert!(table.tableau().iter().all(|p| p.undo_depth() == 0));
    }

    #[test]
    fn test_deal_stops_when_stock_runs_out() {
        let mut tableau = vec![Pile::new(PileId::Tableau(0), 15), Pile::new(PileId::Tableau(1), 15)];
        let mut stock = Pile::new(PileId::Stock, 15);
        stock.reset(standard_deck().into_iter().take(3));

        deal_tableau(&TableauLayout::uniform(2, 1, 1), &mut tableau, &mut stock);

        assert_eq!(tableau[0].len(), 2);
        assert_eq!(tableau[1].len(), 1);
        assert!(stock.is_empty());
    }

    #[test]
    fn test_seed_aces() {
        let mut table = loaded_table(4, 0);
        let (stock, foundations, _) = table.deal_parts();
        seed_aces(foundations, stock);

        assert_eq!(table.stock().len(), 48);
        for (foundation, suit) in table.foundations().iter().zip(Suit::ALL) {
            let top = foundation.top().unwrap();
            assert_eq!(top.value, ACE);
            assert_eq!(top.suit, suit);
            assert!(top.face_up);
        }
    }

    #[test]
    fn test_seed_ace_of_spades_and_stock_top() {
        let mut table = loaded_table(1, 0);
        let (stock, foundations, _) = table.deal_parts();
        seed_ace_of_spades(foundations, stock);
        assert!(table.foundations()[0].top().unwrap().same_card(Card::new(ACE, Suit::Spades)));
        assert_eq!(table.stock().len(), 51);

        let mut table = loaded_table(1, 0);
        let expected = table.stock().top().unwrap().face_up();
        let (stock, foundations, _) = table.deal_parts();
        seed_from_stock(foundations, stock);
        assert_eq!(table.foundations()[0].top(), Some(expected));
    }
}
