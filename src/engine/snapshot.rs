//! Save and restore of a running session.
//!
//! A snapshot holds the true piles, the counters and the dealt deck, so a
//! restored session can still be restarted. History, pending animations and
//! a running autocomplete are not part of it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Engine;
use crate::core::{Card, EngineError, Result};
use crate::piles::Pile;
use crate::variants::VariantId;

/// Serializable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub variant: VariantId,
    pub seed: u64,
    /// Shuffled deck the current game was dealt from.
    pub dealt_deck: Vec<Card>,
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: Vec<Vec<Card>>,
    pub tableau: Vec<Vec<Card>>,
    pub score: i32,
    pub moves: u32,
    pub autocomplete_moves: u32,
    pub redeals_used: u32,
    pub won: bool,
    pub elapsed: Duration,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Cards across every pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
    }
}

impl Engine {
    /// Capture the current game.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let cards = |pile: &Pile| pile.cards().iter().copied().collect::<Vec<_>>();
        SessionSnapshot {
            variant: self.variant.id(),
            seed: self.seed,
            dealt_deck: self.dealt_deck.clone(),
            stock: cards(self.table.stock()),
            waste: cards(self.table.waste()),
            foundations: self.table.foundations().iter().map(cards).collect(),
            tableau: self.table.tableau().iter().map(cards).collect(),
            score: self.scoreboard.score(),
            moves: self.scoreboard.raw_moves(),
            autocomplete_moves: self.scoreboard.autocomplete_moves(),
            redeals_used: self.redeals_used,
            won: self.won,
            elapsed: self.clock.elapsed(),
        }
    }

    /// Replace the current game with `snapshot`.
    ///
    /// Fails without touching the engine if the snapshot was taken from a
    /// different variant or does not hold the variant's whole deck.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<()> {
        self.check_snapshot(&snapshot)?;

        self.autocomplete.cancel();
        self.animations.clear();
        self.history.clear();

        self.table.stock_mut().reset(snapshot.stock);
        self.table.waste_mut().reset(snapshot.waste);
        for (pile, cards) in self.table.foundations_mut().iter_mut().zip(snapshot.foundations) {
            pile.reset(cards);
        }
        for (pile, cards) in self.table.tableau_mut().iter_mut().zip(snapshot.tableau) {
            pile.reset(cards);
        }
        self.table.reconcile_all();

        self.seed = snapshot.seed;
        self.dealt_deck = snapshot.dealt_deck;
        self.scoreboard
            .restore(snapshot.score, snapshot.moves, snapshot.autocomplete_moves);
        self.redeals_used = snapshot.redeals_used;
        self.won = snapshot.won;
        self.reported = snapshot.won;
        self.clock.resume_from(snapshot.elapsed);

        tracing::info!(
            variant = self.variant.id().id(),
            moves = snapshot.moves,
            score = snapshot.score,
            "Session restored"
        );

        self.check_autocomplete();
        Ok(())
    }

    fn check_snapshot(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let variant = self.variant.id();
        if snapshot.variant != variant {
            return Err(EngineError::SnapshotMismatch(format!(
                "snapshot is for {}, engine plays {}",
                snapshot.variant.id(),
                variant.id()
            )));
        }
        if snapshot.foundations.len() != self.variant.foundation_count()
            || snapshot.tableau.len() != self.variant.tableau_count()
        {
            return Err(EngineError::SnapshotMismatch(format!(
                "expected {} foundations and {} tableau piles, got {} and {}",
                self.variant.foundation_count(),
                self.variant.tableau_count(),
                snapshot.foundations.len(),
                snapshot.tableau.len()
            )));
        }
        let deck = self.variant.deck().len();
        if snapshot.total_cards() != deck || snapshot.dealt_deck.len() != deck {
            return Err(EngineError::SnapshotMismatch(format!(
                "expected {deck} cards, snapshot holds {}",
                snapshot.total_cards()
            )));
        }
        Ok(())
    }
}
