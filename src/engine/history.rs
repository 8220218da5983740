//! Bounded move history.
//!
//! Each record is plain data: what kind of move it was, which piles it
//! touched and which cards moved. Undoing a record asks exactly those piles
//! to pop their local undo log, so no record ever holds a pile reference.
//!
//! With deferred animation a record is staged under its animation ID and
//! only enters the undo stack once that animation has finished. Staged
//! records settle in the order their moves were made, which is the order
//! the piles pushed their undo snapshots.

use std::collections::VecDeque;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::animation::AnimationId;
use super::scoring::MoveResult;
use crate::core::Card;
use crate::piles::{PileId, TouchedPiles};

/// Kind of a recorded move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Stock to waste.
    Draw,
    /// Waste back into the stock.
    Recycle,
    /// Stock dealt across the tableau.
    Deal,
    /// Cards moved between waste, foundation and tableau piles.
    Transfer,
}

/// One reversible move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub kind: MoveKind,
    pub source: PileId,
    pub destinations: TouchedPiles,
    /// Moved cards as they were before the move, bottom first.
    pub cards: Vec<Card>,
    /// Whether the move turned up a face-down tableau card.
    pub revealed: bool,
    pub result: MoveResult,
    pub score_delta: i32,
    /// Made by the autocomplete driver.
    pub autocomplete: bool,
}

impl MoveRecord {
    /// Every pile whose undo log this record pushed.
    #[must_use]
    pub fn piles(&self) -> TouchedPiles {
        let mut piles = TouchedPiles::new();
        piles.push(self.source);
        piles.extend(self.destinations.iter().copied());
        piles
    }
}

#[derive(Clone, Debug)]
struct Staged {
    animation: AnimationId,
    record: MoveRecord,
    finished: bool,
}

/// FIFO-bounded undo stack.
#[derive(Clone, Debug)]
pub struct History {
    records: Vector<MoveRecord>,
    staged: VecDeque<Staged>,
    limit: usize,
}

impl History {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            records: Vector::new(),
            staged: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Append a record, evicting the oldest one at the cap.
    pub fn push(&mut self, record: MoveRecord) {
        if self.records.len() == self.limit {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Hold a record until `animation` finishes.
    pub fn stage(&mut self, animation: AnimationId, record: MoveRecord) {
        self.staged.push_back(Staged {
            animation,
            record,
            finished: false,
        });
    }

    /// Mark `animation` finished and push every leading finished record.
    ///
    /// Returns how many records entered the stack.
    pub fn settle(&mut self, animation: AnimationId) -> usize {
        let Some(staged) = self.staged.iter_mut().find(|s| s.animation == animation) else {
            return 0;
        };
        staged.finished = true;

        let mut settled = 0;
        while self.staged.front().is_some_and(|s| s.finished) {
            if let Some(staged) = self.staged.pop_front() {
                self.push(staged.record);
                settled += 1;
            }
        }
        settled
    }

    /// Records still waiting on their animation.
    #[must_use]
    pub fn staged(&self) -> usize {
        self.staged.len()
    }

    /// Remove the most recent record.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.staged.clear();
    }

    /// Records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn record(source: u8) -> MoveRecord {
        MoveRecord {
            kind: MoveKind::Transfer,
            source: PileId::Tableau(source),
            destinations: smallvec![PileId::Tableau(0)],
            cards: Vec::new(),
            revealed: false,
            result: MoveResult::Move,
            score_delta: 0,
            autocomplete: false,
        }
    }

    #[test]
    fn test_push_and_pop() {
        let mut history = History::new(15);
        history.push(record(1));
        history.push(record(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().unwrap().source, PileId::Tableau(2));
        assert_eq!(history.last().unwrap().source, PileId::Tableau(1));
    }

    #[test]
    fn test_oldest_record_is_evicted() {
        let mut history = History::new(3);
        for source in 1..=5 {
            history.push(record(source));
        }

        assert_eq!(history.len(), 3);
        let sources: Vec<PileId> = history.iter().map(|r| r.source).collect();
        assert_eq!(
            sources,
            vec![PileId::Tableau(3), PileId::Tableau(4), PileId::Tableau(5)]
        );
    }

    #[test]
    fn test_staged_records_settle_in_move_order() {
        let mut history = History::new(15);
        history.stage(7, record(1));
        history.stage(8, record(2));
        assert!(history.is_empty());
        assert_eq!(history.staged(), 2);

        // The later move finishing first waits for the earlier one.
        assert_eq!(history.settle(8), 0);
        assert!(history.is_empty());

        assert_eq!(history.settle(7), 2);
        assert_eq!(history.staged(), 0);
        let sources: Vec<PileId> = history.iter().map(|r| r.source).collect();
        assert_eq!(sources, vec![PileId::Tableau(1), PileId::Tableau(2)]);

        assert_eq!(history.settle(99), 0);
    }

    #[test]
    fn test_clear_drops_staged_records() {
        let mut history = History::new(15);
        history.stage(0, record(1));
        history.clear();
        assert_eq!(history.staged(), 0);
        assert_eq!(history.settle(0), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_piles() {
        let mut deal = record(0);
        deal.source = PileId::Stock;
        deal.destinations = (0..10).map(PileId::Tableau).collect();
        assert_eq!(deal.piles().len(), 11);
        assert_eq!(deal.piles()[0], PileId::Stock);
    }
}
