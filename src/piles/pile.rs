//! A single card pile with a true state, a display state and an undo log.
//!
//! ## True vs. display
//!
//! - `true_pile` is authoritative. Rules and the move resolver only read it.
//! - `display_pile` is what the animation layer currently shows. It only
//!   changes through [`Pile::update_display_pile`], which the animation
//!   completion hooks call. After every update cycle the two are equal.
//!
//! Both are `im::Vector`s, so reconciling and snapshotting are O(1) clones.
//!
//! ## Kinds
//!
//! The four pile kinds share one value type and differ only in how they
//! normalize faces on `add` and what `remove` does to the new top card:
//!
//! | Kind       | `add`                 | `remove`                         |
//! |------------|-----------------------|----------------------------------|
//! | Stock      | forces face down      | suffix                           |
//! | Waste      | forces face up        | suffix                           |
//! | Foundation | forces face up        | suffix                           |
//! | Tableau    | keeps caller's faces  | suffix, then reveals the new top |

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Most foundation or tableau piles one kind can hold; indexes are `u8`.
pub const MAX_PILES: usize = u8::MAX as usize + 1;

/// Identity of a pile on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(u8),
    Tableau(u8),
}

impl PileId {
    /// The kind of pile this identifies.
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }

    /// Index within its kind (0 for stock and waste).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PileId::Stock | PileId::Waste => 0,
            PileId::Foundation(i) | PileId::Tableau(i) => i as usize,
        }
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PileId::Foundation(_))
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PileId::Tableau(_))
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
            PileId::Foundation(i) => write!(f, "Foundation({})", i),
            PileId::Tableau(i) => write!(f, "Tableau({})", i),
        }
    }
}

/// The four pile kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

/// A pile of cards. Index 0 is the bottom, the last card is the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    id: PileId,
    true_pile: Vector<Card>,
    display_pile: Vector<Card>,
    /// Prior true piles, most recent last.
    undo_log: Vector<Vector<Card>>,
    undo_capacity: usize,
}

impl Pile {
    /// Create an empty pile.
    ///
    /// `undo_capacity` bounds the local undo log; it must be at least the
    /// engine's history limit for undo to stay consistent.
    #[must_use]
    pub fn new(id: PileId, undo_capacity: usize) -> Self {
        Self {
            id,
            true_pile: Vector::new(),
            display_pile: Vector::new(),
            undo_log: Vector::new(),
            undo_capacity: undo_capacity.max(1),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    /// Authoritative contents.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.true_pile
    }

    /// Contents as currently shown by the animation layer.
    #[must_use]
    pub fn display(&self) -> &Vector<Card> {
        &self.display_pile
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.true_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.true_pile.is_empty()
    }

    /// Top card of the true pile.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.true_pile.last().copied()
    }

    /// Card at `index` of the true pile.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.true_pile.get(index).copied()
    }

    /// Cards from `from` to the top, as a plain vector.
    #[must_use]
    pub fn suffix(&self, from: usize) -> Vec<Card> {
        self.true_pile.iter().skip(from).copied().collect()
    }

    /// Number of locally recorded prior states.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    /// Whether display and true piles agree.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.display_pile == self.true_pile
    }

    // === Mutation ===

    /// Append cards, normalizing faces for this pile's kind.
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.record();
        let kind = self.kind();
        self.true_pile.extend(cards.into_iter().map(|c| normalize(kind, c)));
    }

    /// Remove and return the suffix starting at `from_index`.
    ///
    /// Tableau piles reveal their new top card. An index past the top
    /// removes nothing.
    pub fn remove(&mut self, from_index: usize) -> Vector<Card> {
        self.record();
        let from = from_index.min(self.true_pile.len());
        let removed = self.true_pile.split_off(from);

        if self.kind() == PileKind::Tableau {
            if let Some(top) = self.true_pile.back_mut() {
                if !top.face_up {
                    *top = top.face_up();
                }
            }
        }

        removed
    }

    /// Remove the top `count` cards (fewer if the pile is shorter).
    pub fn remove_top(&mut self, count: usize) -> Vector<Card> {
        let from = self.true_pile.len().saturating_sub(count);
        self.remove(from)
    }

    /// Replace the true pile for a new deal and clear the undo log.
    ///
    /// Faces are taken as given; deal procedures decide them.
    pub fn reset(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.true_pile = cards.into_iter().collect();
        self.undo_log.clear();
    }

    /// Restore the most recently recorded prior state.
    ///
    /// Returns `false` if the log is empty.
    pub fn undo(&mut self) -> bool {
        match self.undo_log.pop_back() {
            Some(previous) => {
                self.true_pile = previous;
                true
            }
            None => false,
        }
    }

    /// Copy the true pile into the display pile.
    ///
    /// Returns `true` if the display changed.
    pub fn update_display_pile(&mut self) -> bool {
        if self.display_pile == self.true_pile {
            return false;
        }
        self.display_pile = self.true_pile.clone();
        true
    }

    // === Deal helpers (not recorded) ===

    /// Take the top card without recording an undo state. Used by deals.
    pub(crate) fn deal_top(&mut self) -> Option<Card> {
        self.true_pile.pop_back()
    }

    /// Push a card without normalization or recording. Used by deals.
    pub(crate) fn deal_push(&mut self, card: Card) {
        self.true_pile.push_back(card);
    }

    /// Take the first card matching `pred` without recording. Used by deals
    /// that seed foundations.
    pub(crate) fn deal_take(&mut self, pred: impl Fn(&Card) -> bool) -> Option<Card> {
        let pos = self.true_pile.iter().position(pred)?;
        Some(self.true_pile.remove(pos))
    }

    fn record(&mut self) {
        if self.undo_log.len() == self.undo_capacity {
            self.undo_log.pop_front();
        }
        self.undo_log.push_back(self.true_pile.clone());
    }
}

fn normalize(kind: PileKind, card: Card) -> Card {
    match kind {
        PileKind::Stock => card.face_down(),
        PileKind::Waste | PileKind::Foundation => card.face_up(),
        PileKind::Tableau => card,
    }
}
