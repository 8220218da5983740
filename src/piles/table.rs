//! The full set of piles for one game session.
//!
//! `Table` owns the stock, the waste, the foundations and the tableau piles
//! and resolves `PileId`s to piles. Cards are owned by exactly one pile at
//! rest; moves transfer them by value.

use smallvec::SmallVec;

use super::pile::{Pile, PileId};
use crate::core::Card;

/// Piles touched by one logical move (usually a source and a destination).
pub type TouchedPiles = SmallVec<[PileId; 2]>;

/// All piles of a game.
///
/// ```
/// use solitaire_engine::piles::{PileId, Table};
///
/// let table = Table::new(4, 7, 15);
/// assert_eq!(table.foundations().len(), 4);
/// assert_eq!(table.tableau().len(), 7);
/// assert!(table.get(PileId::Tableau(6)).is_some());
/// assert!(table.get(PileId::Tableau(7)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    stock: Pile,
    waste: Pile,
    foundations: Vec<Pile>,
    tableau: Vec<Pile>,
}

impl Table {
    /// Create empty piles.
    ///
    /// Counts above [`MAX_PILES`](super::MAX_PILES) are cut to it; variants
    /// reject such layouts in `validate`.
    #[must_use]
    pub fn new(foundation_count: usize, tableau_count: usize, undo_capacity: usize) -> Self {
        Self {
            stock: Pile::new(PileId::Stock, undo_capacity),
            waste: Pile::new(PileId::Waste, undo_capacity),
            foundations: (0..=u8::MAX)
                .take(foundation_count)
                .map(|i| Pile::new(PileId::Foundation(i), undo_capacity))
                .collect(),
            tableau: (0..=u8::MAX)
                .take(tableau_count)
                .map(|i| Pile::new(PileId::Tableau(i), undo_capacity))
                .collect(),
        }
    }

    // === Lookup ===

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau(&self) -> &[Pile] {
        &self.tableau
    }

    pub fn stock_mut(&mut self) -> &mut Pile {
        &mut self.stock
    }

    pub fn waste_mut(&mut self) -> &mut Pile {
        &mut self.waste
    }

    pub fn foundations_mut(&mut self) -> &mut [Pile] {
        &mut self.foundations
    }

    pub fn tableau_mut(&mut self) -> &mut [Pile] {
        &mut self.tableau
    }

    /// Disjoint mutable access for deal procedures: (stock, foundations, tableau).
    pub fn deal_parts(&mut self) -> (&mut Pile, &mut [Pile], &mut [Pile]) {
        (&mut self.stock, &mut self.foundations, &mut self.tableau)
    }

    /// Resolve a pile ID.
    #[must_use]
    pub fn get(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(i) => self.foundations.get(i as usize),
            PileId::Tableau(i) => self.tableau.get(i as usize),
        }
    }

    /// Resolve a pile ID mutably.
    pub fn get_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(i) => self.foundations.get_mut(i as usize),
            PileId::Tableau(i) => self.tableau.get_mut(i as usize),
        }
    }

    /// Iterate every pile: stock, waste, foundations, tableau.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.tableau.iter())
    }

    fn piles_mut(&mut self) -> impl Iterator<Item = &mut Pile> {
        std::iter::once(&mut self.stock)
            .chain(std::iter::once(&mut self.waste))
            .chain(self.foundations.iter_mut())
            .chain(self.tableau.iter_mut())
    }

    // === Whole-table operations ===

    /// Total number of cards across every pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// Number of cards on foundations.
    #[must_use]
    pub fn foundation_cards(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// Number of cards on the tableau.
    #[must_use]
    pub fn tableau_cards(&self) -> usize {
        self.tableau.iter().map(Pile::len).sum()
    }

    /// Clear every pile and load `deck` into the stock, face down.
    pub fn load_stock(&mut self, deck: &[Card]) {
        for pile in self.piles_mut() {
            pile.reset(std::iter::empty::<Card>());
        }
        self.stock.reset(deck.iter().map(|c| c.face_down()));
    }

    /// Undo the listed piles. Returns how many had a prior state.
    pub fn undo_piles(&mut self, ids: &[PileId]) -> usize {
        let mut undone = 0;
        for &id in ids {
            if self.get_mut(id).is_some_and(Pile::undo) {
                undone += 1;
            }
        }
        undone
    }

    /// Reconcile the listed piles' display state. Returns how many changed.
    pub fn reconcile(&mut self, ids: &[PileId]) -> usize {
        let mut changed = 0;
        for &id in ids {
            if self.get_mut(id).is_some_and(Pile::update_display_pile) {
                changed += 1;
            }
        }
        changed
    }

    /// Reconcile every pile's display state.
    pub fn reconcile_all(&mut self) -> usize {
        self.piles_mut()
            .map(Pile::update_display_pile)
            .filter(|&changed| changed)
            .count()
    }

    /// Whether every display pile matches its true pile.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.piles().all(Pile::is_settled)
    }

    /// True contents of every pile, in `piles()` order.
    #[must_use]
    pub fn true_contents(&self) -> Vec<Vec<Card>> {
        self.piles().map(|p| p.cards().iter().copied().collect()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{standard_deck, Suit};

    #[test]
    fn test_new_table_shape() {
        let table = Table::new(8, 10, 15);
        assert_eq!(table.foundations().len(), 8);
        assert_eq!(table.tableau().len(), 10);
        assert_eq!(table.total_cards(), 0);
        assert_eq!(table.piles().count(), 20);
    }

    #[test]
    fn test_get_and_get_mut() {
        let mut table = Table::new(4, 7, 15);
        table
            .get_mut(PileId::Tableau(2))
            .unwrap()
            .add([Card::new(3, Suit::Clubs).face_up()]);

        assert_eq!(table.get(PileId::Tableau(2)).unwrap().len(), 1);
        assert!(table.get(PileId::Foundation(4)).is_none());
        assert!(table.get_mut(PileId::Tableau(9)).is_none());
    }

    #[test]
    fn test_load_stock() {
        let mut table = Table::new(4, 7, 15);
        table.waste_mut().add([Card::new(0, Suit::Hearts)]);

        table.load_stock(&standard_deck());

        assert_eq!(table.stock().len(), 52);
        assert!(table.waste().is_empty());
        assert!(table.stock().cards().iter().all(|c| !c.face_up));
        assert_eq!(table.total_cards(), 52);
    }

    #[test]
    fn test_reconcile() {
        let mut table = Table::new(4, 7, 15);
        table.waste_mut().add([Card::new(0, Suit::Hearts)]);
        table.tableau_mut()[0].add([Card::new(5, Suit::Hearts).face_up()]);

        assert!(!table.is_settled());
        assert_eq!(table.reconcile(&[PileId::Waste]), 1);
        assert!(!table.is_settled());
        assert_eq!(table.reconcile_all(), 1);
        assert!(table.is_settled());
    }

    #[test]
    fn test_undo_piles() {
        let mut table = Table::new(4, 7, 15);
        let card = table_card();
        table.waste_mut().add([card]);
        let moved = table.waste_mut().remove_top(1);
        table.foundations_mut()[0].add(moved);

        assert_eq!(table.undo_piles(&[PileId::Waste, PileId::Foundation(0)]), 2);
        assert_eq!(table.waste().len(), 1);
        assert!(table.foundations()[0].is_empty());
    }

    fn table_card() -> Card {
        Card::new(0, Suit::Clubs)
    }
}
