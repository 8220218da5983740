//! The game engine: one state owner per session.
//!
//! ## Flow of a tap
//!
//! 1. The tapped selection is validated against the variant's lift rule
//! 2. [`resolver::resolve`] picks the destination
//! 3. True piles are mutated (each touched pile records one undo snapshot)
//! 4. Score and counters are updated, the win predicate is evaluated
//! 5. The move is handed to the animation layer (or reconciled at once in
//!    [`AnimationMode::Immediate`])
//! 6. Once the animation finishes, the [`MoveRecord`] is pushed to the
//!    bounded [`History`] and autocomplete readiness is re-evaluated
//!
//! Undo is unavailable while a move's animation is still playing.
//!
//! Rejected taps return [`MoveResult::Illegal`] and leave every pile as it
//! was.
//!
//! ```
//! use solitaire_engine::core::EngineConfig;
//! use solitaire_engine::engine::{EngineBuilder, MoveResult};
//! use solitaire_engine::variants::VariantId;
//!
//! let mut engine = EngineBuilder::new(VariantId::KlondikeTurnOne)
//!     .config(EngineConfig::headless())
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(engine.on_stock_click(), MoveResult::Move);
//! assert_eq!(engine.moves(), 1);
//! assert!(engine.undo());
//! assert_eq!(engine.table().waste().len(), 0);
//! ```

pub mod animation;
pub mod autocomplete;
pub mod clock;
pub mod history;
pub mod resolver;
pub mod scoring;
pub mod snapshot;
pub mod stats;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::{debug, info, trace, warn};

use crate::core::{AnimationMode, Card, EngineConfig, Result, SeededShuffle, ShuffleSource};
use crate::piles::{Pile, PileId, Table, TouchedPiles};
use crate::rules::Rules;
use crate::variants::{GameVariant, StockMode, VariantId};

pub use animation::{AnimationId, AnimationKind, AnimationQueue, AnimationRequest};
pub use autocomplete::{run_autocomplete, AutocompleteOutcome, AutocompleteState, AutocompleteStep, CancelToken};
pub use clock::GameClock;
pub use history::{History, MoveKind, MoveRecord};
pub use scoring::{MoveResult, Scoreboard};
pub use snapshot::SessionSnapshot;
pub use stats::{GameSummary, RecordingSink, StatsSink};

/// How `reset_all` obtains its deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResetOption {
    /// Deal the previous shuffle again.
    Restart,
    /// Draw a fresh shuffle from the seed provider.
    New,
}

/// Observable state for the presentation layer.
///
/// Pile contents are the display piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub variant: VariantId,
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: Vec<Vec<Card>>,
    pub tableau: Vec<Vec<Card>>,
    pub moves: u32,
    pub score: i32,
    pub elapsed: Duration,
    pub undo_available: bool,
    pub autocomplete_active: bool,
    pub won: bool,
    pub undo_in_flight: bool,
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`Engine`].
pub struct EngineBuilder {
    variant: GameVariant,
    config: EngineConfig,
    shuffle: Option<Box<dyn ShuffleSource>>,
    stats: Option<Box<dyn StatsSink>>,
}

impl EngineBuilder {
    /// Start from a built-in variant.
    #[must_use]
    pub fn new(variant: VariantId) -> Self {
        Self::with_variant(variant.descriptor())
    }

    /// Start from an explicit descriptor.
    #[must_use]
    pub fn with_variant(variant: GameVariant) -> Self {
        Self {
            variant,
            config: EngineConfig::default(),
            shuffle: None,
            stats: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a ChaCha8 shuffle source with this master seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.shuffle = Some(Box::new(SeededShuffle::new(seed)));
        self
    }

    /// Inject the shuffle source.
    #[must_use]
    pub fn shuffle(mut self, source: impl ShuffleSource + 'static) -> Self {
        self.shuffle = Some(Box::new(source));
        self
    }

    /// Report finished games to `sink`.
    #[must_use]
    pub fn stats(mut self, sink: impl StatsSink + 'static) -> Self {
        self.stats = Some(Box::new(sink));
        self
    }

    /// Validate configuration and variant, then deal the first game.
    pub fn build(self) -> Result<Engine> {
        self.config.validate()?;
        self.variant.validate()?;

        let limit = self.config.history_limit;
        let table = Table::new(self.variant.foundation_count(), self.variant.tableau_count(), limit);
        let scoreboard = Scoreboard::new(self.variant.starting_score(), self.variant.max_score());
        let shuffle = self
            .shuffle
            .unwrap_or_else(|| Box::new(SeededShuffle::new(rand::random())));

        let mut engine = Engine {
            variant: self.variant,
            config: self.config,
            shuffle,
            stats: self.stats,
            table,
            dealt_deck: Vec::new(),
            seed: 0,
            history: History::new(limit),
            scoreboard,
            redeals_used: 0,
            won: false,
            reported: false,
            clock: GameClock::new(),
            autocomplete: AutocompleteState::default(),
            animations: AnimationQueue::new(),
        };
        engine.reset_all(ResetOption::New);
        Ok(engine)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// A solitaire game session.
pub struct Engine {
    variant: GameVariant,
    config: EngineConfig,
    shuffle: Box<dyn ShuffleSource>,
    stats: Option<Box<dyn StatsSink>>,
    table: Table,
    /// Shuffled deck of the current game, reused by `Restart`.
    dealt_deck: Vec<Card>,
    seed: u64,
    history: History,
    scoreboard: Scoreboard,
    redeals_used: u32,
    won: bool,
    /// The current game has been reported to the stats sink.
    reported: bool,
    clock: GameClock,
    autocomplete: AutocompleteState,
    animations: AnimationQueue,
}

impl Engine {
    /// Engine for a built-in variant with default configuration.
    pub fn new(variant: VariantId) -> Result<Self> {
        EngineBuilder::new(variant).build()
    }

    // === Reset ===

    /// Deal a new game.
    ///
    /// An abandoned game with at least one move is reported first. Any
    /// running autocomplete is cancelled and pending animations dropped.
    pub fn reset_all(&mut self, option: ResetOption) {
        self.report_abandoned();
        self.autocomplete.cancel();

        if option == ResetOption::New || self.dealt_deck.is_empty() {
            let seed = self.shuffle.next_seed();
            let mut deck = self.variant.deck().to_vec();
            self.shuffle.shuffle(&mut deck, seed);
            self.seed = seed;
            self.dealt_deck = deck;
        }

        self.table.load_stock(&self.dealt_deck);
        let (stock, foundations, tableau) = self.table.deal_parts();
        self.variant.reset_foundation(foundations, stock);
        self.variant.reset_tableau(tableau, stock);
        self.table.reconcile_all();

        self.history.clear();
        self.scoreboard = Scoreboard::new(self.variant.starting_score(), self.variant.max_score());
        self.redeals_used = 0;
        self.won = false;
        self.reported = false;
        self.clock.reset();
        self.animations.clear();

        info!(
            variant = self.variant.id().id(),
            option = ?option,
            seed = self.seed,
            "Game dealt"
        );
    }

    // === Taps ===

    /// Draw from the stock, recycle the waste, or deal a row, depending on
    /// the variant's stock mode.
    pub fn on_stock_click(&mut self) -> MoveResult {
        if self.won {
            return self.reject(PileId::Stock);
        }
        match self.variant.stock_mode() {
            StockMode::ToWaste => self.draw_or_recycle(),
            StockMode::DealToTableau { require_filled } => self.deal_row(require_filled),
            StockMode::ToFoundation => self.turn_to_foundation(),
            StockMode::None => self.reject(PileId::Stock),
        }
    }

    /// Play the waste's top card.
    pub fn on_waste_click(&mut self) -> MoveResult {
        let Some(top) = self.table.waste().top().filter(|_| !self.won) else {
            return self.reject(PileId::Waste);
        };
        match resolver::resolve(&self.variant, &self.table, PileId::Waste, &[top]) {
            Some(destination) => {
                let from = self.table.waste().len() - 1;
                self.transfer(PileId::Waste, from, destination, false)
            }
            None => self.reject(PileId::Waste),
        }
    }

    /// Play a foundation's top card back onto the tableau.
    pub fn on_foundation_click(&mut self, index: usize) -> MoveResult {
        let Some(id) = self.table.foundations().get(index).map(Pile::id) else {
            trace!(index, "Foundation tap out of range");
            return MoveResult::Illegal;
        };
        if self.won || !self.variant.foundation_withdrawal() {
            return self.reject(id);
        }
        let Some(top) = self.table.foundations()[index].top() else {
            return self.reject(id);
        };
        match resolver::tableau_destination(&self.variant, &self.table, id, &[top]) {
            Some(destination) => {
                let from = self.table.foundations()[index].len() - 1;
                self.transfer(id, from, destination, false)
            }
            None => self.reject(id),
        }
    }

    /// Lift the tableau suffix starting at `card_index` and play it.
    ///
    /// An index past the top is clamped to the top card.
    pub fn on_tableau_click(&mut self, tableau_index: usize, card_index: usize) -> MoveResult {
        self.tap_tableau(tableau_index, card_index, false)
    }

    pub(crate) fn tap_tableau(&mut self, index: usize, card_index: usize, autocomplete: bool) -> MoveResult {
        let Some(pile) = self.table.tableau().get(index) else {
            trace!(index, "Tableau tap out of range");
            return MoveResult::Illegal;
        };
        let id = pile.id();
        if pile.is_empty() || self.won {
            return self.reject(id);
        }
        let from = card_index.min(pile.len() - 1);
        if !self.variant.can_lift(pile, from) {
            return self.reject(id);
        }
        let cards = pile.suffix(from);
        match resolver::resolve(&self.variant, &self.table, id, &cards) {
            Some(destination) => self.transfer(id, from, destination, autocomplete),
            None => self.reject(id),
        }
    }

    // === Undo ===

    /// Reverse the most recent move.
    ///
    /// Returns `false` (and changes nothing) when the history is empty, a
    /// move is still animating, or the game is already won.
    pub fn undo(&mut self) -> bool {
        if self.won {
            trace!("Undo ignored after win");
            return false;
        }
        if self.history.staged() > 0 {
            trace!(staged = self.history.staged(), "Undo ignored during move animation");
            return false;
        }
        let Some(record) = self.history.pop() else {
            return false;
        };
        self.autocomplete.cancel();

        let piles = record.piles();
        let restored = self.table.undo_piles(&piles);
        if restored != piles.len() {
            warn!(expected = piles.len(), restored, "Undo log shorter than history");
        }

        self.scoreboard.apply(-record.score_delta);
        if record.kind == MoveKind::Recycle {
            self.redeals_used = self.redeals_used.saturating_sub(1);
        }
        if self.config.undo_counts_as_move {
            self.scoreboard.count_move(false);
        }

        debug!(
            kind = ?record.kind,
            source = %record.source,
            cards = record.cards.len(),
            remaining = self.history.len(),
            "Undo"
        );

        self.announce(
            AnimationKind::Undo,
            record.destinations,
            smallvec![record.source],
            record.cards,
        );
        true
    }

    // === Animation hooks ===

    /// Requests queued since the last drain.
    pub fn drain_animations(&mut self) -> Vec<AnimationRequest> {
        self.animations.drain()
    }

    /// Called before an animation plays: the piles the cards leave are
    /// reconciled. Returns `false` for an unknown ID.
    pub fn animation_started(&mut self, id: AnimationId) -> bool {
        let Some(from) = self.animations.get(id).map(|r| r.from.clone()) else {
            return false;
        };
        let changed = self.table.reconcile(&from);
        trace!(id, changed, "Animation started");
        true
    }

    /// Called after an animation ends: every touched pile is reconciled, the
    /// move's record joins the history and autocomplete readiness is
    /// checked. Returns `false` for an unknown ID.
    pub fn animation_finished(&mut self, id: AnimationId) -> bool {
        let Some(request) = self.animations.finish(id) else {
            return false;
        };
        let changed = self.table.reconcile(&request.from) + self.table.reconcile(&request.to);
        trace!(id, changed, kind = ?request.kind, "Animation finished");
        if request.kind == AnimationKind::Forward {
            self.history.settle(id);
            self.check_autocomplete();
        }
        true
    }

    /// Whether an undo animation is still playing; input should be held.
    #[must_use]
    pub fn undo_in_flight(&self) -> bool {
        self.animations.undo_in_flight()
    }

    // === Observable state ===

    #[must_use]
    pub fn variant(&self) -> &GameVariant {
        &self.variant
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True pile state.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.scoreboard.score()
    }

    /// Move count under the configured correction policy.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.scoreboard.published_moves(self.config.correction)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn undo_available(&self) -> bool {
        !self.won && self.history.staged() == 0 && !self.history.is_empty()
    }

    #[must_use]
    pub fn autocomplete_active(&self) -> bool {
        self.autocomplete.is_active()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Seed of the current deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn dealt_deck(&self) -> &[Card] {
        &self.dealt_deck
    }

    #[must_use]
    pub fn redeals_used(&self) -> u32 {
        self.redeals_used
    }

    /// Snapshot of everything the presentation layer shows.
    #[must_use]
    pub fn view(&self) -> GameView {
        let shown = |pile: &Pile| pile.display().iter().copied().collect::<Vec<_>>();
        GameView {
            variant: self.variant.id(),
            stock: shown(self.table.stock()),
            waste: shown(self.table.waste()),
            foundations: self.table.foundations().iter().map(shown).collect(),
            tableau: self.table.tableau().iter().map(shown).collect(),
            moves: self.moves(),
            score: self.score(),
            elapsed: self.elapsed(),
            undo_available: self.undo_available(),
            autocomplete_active: self.autocomplete_active(),
            won: self.won,
            undo_in_flight: self.undo_in_flight(),
        }
    }

    // =========================================================================
    // Stock modes
    // =========================================================================

    fn draw_or_recycle(&mut self) -> MoveResult {
        if !self.table.stock().is_empty() {
            let drawn: Vec<Card> = self
                .table
                .stock_mut()
                .remove_top(self.variant.draw_amount().max(1))
                .into_iter()
                .collect();
            self.table.waste_mut().add(drawn.iter().rev().copied());
            return self.commit(MoveRecord {
                kind: MoveKind::Draw,
                source: PileId::Stock,
                destinations: smallvec![PileId::Waste],
                cards: drawn,
                revealed: false,
                result: MoveResult::Move,
                score_delta: 0,
                autocomplete: false,
            });
        }

        if self.table.waste().is_empty() || !self.variant.redeals().allows(self.redeals_used) {
            return self.reject(PileId::Stock);
        }

        let recycled: Vec<Card> = self.table.waste_mut().remove(0).into_iter().collect();
        self.table.stock_mut().add(recycled.iter().rev().copied());
        self.redeals_used += 1;
        self.commit(MoveRecord {
            kind: MoveKind::Recycle,
            source: PileId::Waste,
            destinations: smallvec![PileId::Stock],
            cards: recycled,
            revealed: false,
            result: MoveResult::Move,
            score_delta: 0,
            autocomplete: false,
        })
    }

    fn deal_row(&mut self, require_filled: bool) -> MoveResult {
        if self.table.stock().is_empty()
            || (require_filled && self.table.tableau().iter().any(Pile::is_empty))
        {
            return self.reject(PileId::Stock);
        }

        let count = self.table.tableau().len().min(self.table.stock().len());
        let dealt: Vec<Card> = self.table.stock_mut().remove_top(count).into_iter().collect();
        let mut destinations = TouchedPiles::new();
        for (pile, card) in self.table.tableau_mut().iter_mut().zip(dealt.iter().rev()) {
            pile.add([card.face_up()]);
            destinations.push(pile.id());
        }

        self.commit(MoveRecord {
            kind: MoveKind::Deal,
            source: PileId::Stock,
            destinations,
            cards: dealt,
            revealed: false,
            result: MoveResult::Move,
            score_delta: 0,
            autocomplete: false,
        })
    }

    fn turn_to_foundation(&mut self) -> MoveResult {
        if self.table.stock().is_empty() {
            return self.reject(PileId::Stock);
        }
        let from = self.table.stock().len() - 1;
        self.transfer(PileId::Stock, from, PileId::Foundation(0), false)
    }

    // =========================================================================
    // Mutation core
    // =========================================================================

    /// Move the suffix of `source` from `from` onto `destination`.
    fn transfer(&mut self, source: PileId, from: usize, destination: PileId, autocomplete: bool) -> MoveResult {
        let Some(source_pile) = self.table.get_mut(source) else {
            return self.reject(source);
        };
        let revealed = source.is_tableau()
            && from > 0
            && source_pile.get(from - 1).is_some_and(|c| !c.face_up);
        let moved = source_pile.remove(from);
        let cards: Vec<Card> = moved.iter().copied().collect();

        match self.table.get_mut(destination) {
            Some(pile) => pile.add(moved),
            None => {
                self.table.undo_piles(&[source]);
                return self.reject(destination);
            }
        }

        self.commit(MoveRecord {
            kind: MoveKind::Transfer,
            source,
            destinations: smallvec![destination],
            revealed,
            result: MoveResult::for_transfer(source, destination),
            score_delta: scoring::score_delta(source, destination, cards.len()),
            cards,
            autocomplete,
        })
    }

    /// Book a completed mutation: score, counters, history, win check,
    /// animation hand-off.
    fn commit(&mut self, record: MoveRecord) -> MoveResult {
        let result = record.result;
        self.scoreboard.apply(record.score_delta);
        self.scoreboard.count_move(record.autocomplete);
        self.clock.start();

        debug!(
            kind = ?record.kind,
            source = %record.source,
            destinations = ?record.destinations,
            cards = record.cards.len(),
            revealed = record.revealed,
            result = ?result,
            score = self.scoreboard.score(),
            "Move"
        );

        let check_win = !record.source.is_foundation();
        let animation = self.announce(
            AnimationKind::Forward,
            smallvec![record.source],
            record.destinations.clone(),
            record.cards.clone(),
        );
        match animation {
            Some(id) => self.history.stage(id, record),
            None => self.history.push(record),
        }

        if check_win {
            self.check_win();
        }
        if self.config.animation == AnimationMode::Immediate {
            self.check_autocomplete();
        }
        result
    }

    /// Reconcile at once, or queue an animation and return its ID.
    fn announce(
        &mut self,
        kind: AnimationKind,
        from: TouchedPiles,
        to: TouchedPiles,
        cards: Vec<Card>,
    ) -> Option<AnimationId> {
        match self.config.animation {
            AnimationMode::Immediate => {
                self.table.reconcile(&from);
                self.table.reconcile(&to);
                None
            }
            AnimationMode::Deferred => Some(self.animations.enqueue(kind, from, to, cards)),
        }
    }

    fn reject(&self, pile: PileId) -> MoveResult {
        trace!(pile = %pile, "Illegal tap");
        MoveResult::Illegal
    }

    fn check_win(&mut self) {
        if self.won || !self.variant.game_won(self.table.foundations()) {
            return;
        }
        self.won = true;
        self.clock.stop();
        info!(
            variant = self.variant.id().id(),
            moves = self.moves(),
            score = self.score(),
            elapsed_ms = self.clock.elapsed().as_millis() as u64,
            "Game won"
        );
        self.report(true);
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    fn report_abandoned(&mut self) {
        if !self.reported && self.scoreboard.raw_moves() > 0 {
            self.report(false);
        }
    }

    fn report(&mut self, won: bool) {
        if self.reported {
            return;
        }
        self.reported = true;
        let summary = GameSummary {
            variant: self.variant.id(),
            won,
            moves: self.moves(),
            elapsed: self.clock.elapsed(),
            score: self.score(),
        };
        if let Some(sink) = self.stats.as_mut() {
            sink.record(summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{standard_deck, PresetShuffle};

    fn headless(variant: VariantId) -> Engine {
        EngineBuilder::new(variant)
            .config(EngineConfig::headless())
            .seed(11)
            .build()
            .unwrap()
    }

    fn preset(variant: VariantId, order: Vec<Card>) -> Engine {
        EngineBuilder::new(variant)
            .config(EngineConfig::headless())
            .shuffle(PresetShuffle::new(order))
            .build()
            .unwrap()
    }

    // =========================================================================
    // Reset
    // =========================================================================

    #[test]
    fn test_new_game_deals_klondike() {
        let engine = headless(VariantId::KlondikeTurnOne);
        let table = engine.table();

        for (i, pile) in table.tableau().iter().enumerate() {
            assert_eq!(pile.len(), i + 1);
            assert!(pile.top().unwrap().face_up);
            assert_eq!(pile.cards().iter().filter(|c| c.face_up).count(), 1);
        }
        assert_eq!(table.stock().len(), 24);
        assert_eq!(table.total_cards(), 52);
        assert!(table.is_settled());
        assert!(!engine.undo_available());
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_restart_reuses_shuffle() {
        let mut engine = headless(VariantId::Yukon);
        let first = engine.table().true_contents();
        let seed = engine.seed();

        engine.reset_all(ResetOption::Restart);
        assert_eq!(engine.table().true_contents(), first);
        assert_eq!(engine.seed(), seed);

        engine.reset_all(ResetOption::New);
        assert_ne!(engine.table().true_contents(), first);
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let result = EngineBuilder::new(VariantId::Golf)
            .config(EngineConfig::headless().with_history_limit(0))
            .build();
        assert!(result.is_err());
    }

    // =========================================================================
    // Stock
    // =========================================================================

    #[test]
    fn test_draw_three_order() {
        let deck = standard_deck();
        let mut engine = preset(VariantId::KlondikeTurnThree, deck.clone());

        assert_eq!(engine.on_stock_click(), MoveResult::Move);
        let waste: Vec<Card> = engine.table().waste().cards().iter().copied().collect();
        assert_eq!(
            waste,
            vec![deck[23].face_up(), deck[22].face_up(), deck[21].face_up()]
        );
        assert_eq!(engine.table().stock().len(), 21);
    }

    #[test]
    fn test_recycle_respects_redeals() {
        let mut engine = headless(VariantId::AustralianPatience);
        let stock = engine.table().stock().len();
        for _ in 0..stock {
            assert_eq!(engine.on_stock_click(), MoveResult::Move);
        }
        assert!(engine.table().stock().is_empty());
        assert_eq!(engine.on_stock_click(), MoveResult::Illegal);

        let mut canberra = headless(VariantId::Canberra);
        let stock = canberra.table().stock().len();
        for _ in 0..stock {
            canberra.on_stock_click();
        }
        let waste_before: Vec<Card> = canberra.table().waste().cards().iter().copied().collect();
        assert_eq!(canberra.on_stock_click(), MoveResult::Move);
        assert_eq!(canberra.redeals_used(), 1);
        assert!(canberra.table().waste().is_empty());
        assert_eq!(
            canberra.table().stock().top().map(|c| c.same_card(waste_before[0])),
            Some(true)
        );

        assert!(canberra.undo());
        assert_eq!(canberra.redeals_used(), 0);
        assert_eq!(canberra.table().waste().len(), waste_before.len());
    }

    #[test]
    fn test_spider_deal_requires_filled_piles() {
        let mut engine = headless(VariantId::SpiderOneSuit);
        let before: Vec<usize> = engine.table().tableau().iter().map(Pile::len).collect();

        assert_eq!(engine.on_stock_click(), MoveResult::Move);
        for (pile, len) in engine.table().tableau().iter().zip(&before) {
            assert_eq!(pile.len(), len + 1);
            assert!(pile.top().unwrap().face_up);
        }
        assert_eq!(engine.table().stock().len(), 40);

        assert!(engine.undo());
        let after: Vec<usize> = engine.table().tableau().iter().map(Pile::len).collect();
        assert_eq!(after, before);
    }

    #[test]
    fn test_golf_stock_goes_to_foundation() {
        let mut engine = headless(VariantId::Golf);
        assert_eq!(engine.score(), 1);
        let top = engine.table().stock().top().unwrap();

        assert_eq!(engine.on_stock_click(), MoveResult::MoveScore);
        assert_eq!(engine.table().foundations()[0].top(), Some(top.face_up()));
        assert_eq!(engine.score(), 2);
    }

    #[test]
    fn test_stockless_variant_rejects_stock() {
        let mut engine = headless(VariantId::BlackHole);
        assert_eq!(engine.on_stock_click(), MoveResult::Illegal);
        assert_eq!(engine.moves(), 0);
    }

    // =========================================================================
    // Taps
    // =========================================================================

    #[test]
    fn test_out_of_range_taps_are_illegal() {
        let mut engine = headless(VariantId::KlondikeTurnOne);
        let before = engine.table().true_contents();

        assert_eq!(engine.on_tableau_click(99, 0), MoveResult::Illegal);
        assert_eq!(engine.on_foundation_click(99), MoveResult::Illegal);
        assert_eq!(engine.on_foundation_click(0), MoveResult::Illegal);
        assert_eq!(engine.on_waste_click(), MoveResult::Illegal);
        assert_eq!(engine.table().true_contents(), before);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_face_down_card_cannot_be_lifted() {
        let mut engine = headless(VariantId::KlondikeTurnOne);
        let before = engine.table().true_contents();
        assert_eq!(engine.on_tableau_click(6, 0), MoveResult::Illegal);
        assert_eq!(engine.table().true_contents(), before);
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut engine = headless(VariantId::KlondikeTurnOne);
        assert!(!engine.undo());
        assert_eq!(engine.moves(), 0);
    }

    // =========================================================================
    // Deferred animation
    // =========================================================================

    #[test]
    fn test_deferred_display_lags_until_finished() {
        let mut engine = EngineBuilder::new(VariantId::KlondikeTurnOne)
            .seed(3)
            .build()
            .unwrap();

        engine.on_stock_click();
        assert!(!engine.table().is_settled());
        assert!(engine.view().waste.is_empty());

        let requests = engine.drain_animations();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.kind, AnimationKind::Forward);
        assert_eq!(request.from.as_slice(), &[PileId::Stock]);
        assert_eq!(request.to.as_slice(), &[PileId::Waste]);

        assert!(engine.animation_started(request.id));
        assert_eq!(engine.view().stock.len(), 23);
        assert!(engine.view().waste.is_empty());

        assert!(engine.animation_finished(request.id));
        assert_eq!(engine.view().waste.len(), 1);
        assert!(engine.table().is_settled());
        assert!(!engine.animation_finished(request.id));
    }

    #[test]
    fn test_history_waits_for_move_animation() {
        let mut engine = EngineBuilder::new(VariantId::KlondikeTurnOne)
            .seed(3)
            .build()
            .unwrap();

        assert_eq!(engine.on_stock_click(), MoveResult::Move);
        assert!(engine.history().is_empty());
        assert!(!engine.undo_available());
        assert!(!engine.view().undo_available);
        assert!(!engine.undo());
        assert_eq!(engine.table().waste().len(), 1);

        let requests = engine.drain_animations();
        assert!(engine.animation_finished(requests[0].id));
        assert_eq!(engine.history().len(), 1);
        assert!(engine.undo_available());
        assert!(engine.undo());
        assert!(engine.table().waste().is_empty());
    }

    #[test]
    fn test_undo_animation_sets_in_flight_flag() {
        let mut engine = EngineBuilder::new(VariantId::KlondikeTurnOne)
            .seed(3)
            .build()
            .unwrap();

        engine.on_stock_click();
        for request in engine.drain_animations() {
            engine.animation_finished(request.id);
        }

        assert!(engine.undo());
        assert!(engine.undo_in_flight());
        assert!(engine.view().undo_in_flight);

        let undo = engine.drain_animations();
        assert_eq!(undo[0].kind, AnimationKind::Undo);
        assert_eq!(undo[0].from.as_slice(), &[PileId::Waste]);
        engine.animation_finished(undo[0].id);
        assert!(!engine.undo_in_flight());
        assert!(engine.table().is_settled());
    }
}
