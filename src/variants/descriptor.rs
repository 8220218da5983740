//! The `GameVariant` rule descriptor.
//!
//! A descriptor is an immutable value: deck composition, deal layout, stock
//! behaviour, scoring bounds and a set of predicate function pointers. Every
//! variant starts from [`GameVariant::new`], which carries the default
//! (Klondike) rules, and swaps individual pieces with the `with_*` methods.

use serde::{Deserialize, Serialize};

use super::{Family, VariantId};
use crate::core::{Card, EngineError, Result};
use crate::piles::{Pile, Table, MAX_PILES};
use crate::rules::deal::{self, FoundationReset};
use crate::rules::predicates::{self, LiftRule, PileGroupRule, PlacementRule};
use crate::rules::{Rules, TableauLayout};

/// How many times the waste may be recycled into the stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Redeals {
    None,
    Once,
    Unlimited,
}

impl Redeals {
    /// Whether another recycle is allowed after `used` recycles.
    #[must_use]
    pub const fn allows(self, used: u32) -> bool {
        match self {
            Redeals::None => false,
            Redeals::Once => used < 1,
            Redeals::Unlimited => true,
        }
    }
}

/// What a stock tap does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockMode {
    /// Draw `draw_amount` cards onto the waste; recycle when empty.
    ToWaste,
    /// Deal one face-up card onto each tableau pile.
    DealToTableau {
        /// Refuse to deal while any tableau pile is empty.
        require_filled: bool,
    },
    /// Turn the top card onto the single foundation.
    ToFoundation,
    /// The variant has no stock play.
    None,
}

#[derive(Clone, Copy)]
struct RuleSet {
    tableau_non_empty: PlacementRule,
    tableau_empty: PlacementRule,
    foundation: PlacementRule,
    lift: LiftRule,
    won: PileGroupRule,
    ready: PileGroupRule,
    foundation_reset: FoundationReset,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            tableau_non_empty: predicates::alternating_descending,
            tableau_empty: predicates::king_only,
            foundation: predicates::ascending_same_suit,
            lift: predicates::face_up_suffix,
            won: predicates::all_foundations_full,
            ready: predicates::no_face_down,
            foundation_reset: deal::clear_foundations,
        }
    }
}

/// Immutable rule descriptor of one solitaire game.
///
/// ```
/// use solitaire_engine::variants::{StockMode, VariantId};
///
/// let spider = VariantId::Spider.descriptor();
/// assert_eq!(spider.deck().len(), 104);
/// assert_eq!(spider.tableau_count(), 10);
/// assert_eq!(spider.stock_mode(), StockMode::DealToTableau { require_filled: true });
/// assert!(spider.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct GameVariant {
    id: VariantId,
    family: Family,
    deck: Vec<Card>,
    layout: TableauLayout,
    foundation_count: usize,
    reset_face_up_amount: usize,
    stock_mode: StockMode,
    draw_amount: usize,
    redeals: Redeals,
    starting_score: i32,
    max_score: i32,
    seeded_cards: usize,
    autocomplete_available: bool,
    foundation_takes_runs: bool,
    foundation_withdrawal: bool,
    rules: RuleSet,
}

impl GameVariant {
    /// Create a descriptor with the default rules.
    ///
    /// Defaults: alternating-color descending tableau, Kings into gaps,
    /// same-suit ascending foundations, draw-one stock with unlimited
    /// redeals, "no face-down cards" autocomplete readiness.
    #[must_use]
    pub fn new(
        id: VariantId,
        family: Family,
        deck: Vec<Card>,
        layout: TableauLayout,
        foundation_count: usize,
    ) -> Self {
        let max_score = deck.len() as i32;
        Self {
            id,
            family,
            deck,
            layout,
            foundation_count,
            reset_face_up_amount: 1,
            stock_mode: StockMode::ToWaste,
            draw_amount: 1,
            redeals: Redeals::Unlimited,
            starting_score: 0,
            max_score,
            seeded_cards: 0,
            autocomplete_available: true,
            foundation_takes_runs: false,
            foundation_withdrawal: true,
            rules: RuleSet::default(),
        }
    }

    // === Builder ===

    #[must_use]
    pub fn with_layout(mut self, layout: TableauLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_stock(mut self, mode: StockMode, draw_amount: usize, redeals: Redeals) -> Self {
        self.stock_mode = mode;
        self.draw_amount = draw_amount;
        self.redeals = redeals;
        self
    }

    #[must_use]
    pub fn with_face_up_amount(mut self, amount: usize) -> Self {
        self.reset_face_up_amount = amount;
        self
    }

    #[must_use]
    pub fn with_tableau_rule(mut self, rule: PlacementRule) -> Self {
        self.rules.tableau_non_empty = rule;
        self
    }

    #[must_use]
    pub fn with_empty_tableau_rule(mut self, rule: PlacementRule) -> Self {
        self.rules.tableau_empty = rule;
        self
    }

    #[must_use]
    pub fn with_foundation_rule(mut self, rule: PlacementRule) -> Self {
        self.rules.foundation = rule;
        self
    }

    #[must_use]
    pub fn with_lift_rule(mut self, rule: LiftRule) -> Self {
        self.rules.lift = rule;
        self
    }

    #[must_use]
    pub fn with_win_rule(mut self, rule: PileGroupRule) -> Self {
        self.rules.won = rule;
        self
    }

    /// Set the autocomplete readiness gate (enables autocomplete).
    #[must_use]
    pub fn with_readiness_rule(mut self, rule: PileGroupRule) -> Self {
        self.rules.ready = rule;
        self.autocomplete_available = true;
        self
    }

    /// Disable autocomplete entirely.
    #[must_use]
    pub fn without_autocomplete(mut self) -> Self {
        self.rules.ready = predicates::never_ready;
        self.autocomplete_available = false;
        self
    }

    /// Seed foundations at deal time. `seeded` cards count toward the
    /// starting score.
    #[must_use]
    pub fn with_foundation_reset(mut self, reset: FoundationReset, seeded: usize) -> Self {
        self.rules.foundation_reset = reset;
        self.seeded_cards = seeded;
        self.starting_score = seeded as i32;
        self
    }

    #[must_use]
    pub fn with_max_score(mut self, max: i32) -> Self {
        self.max_score = max;
        self
    }

    /// Complete runs (rather than single cards) go to the foundations.
    #[must_use]
    pub fn with_foundation_runs(mut self, takes_runs: bool) -> Self {
        self.foundation_takes_runs = takes_runs;
        self
    }

    /// Whether foundation cards may be played back to the tableau.
    #[must_use]
    pub fn with_foundation_withdrawal(mut self, allowed: bool) -> Self {
        self.foundation_withdrawal = allowed;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> VariantId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    #[must_use]
    pub fn family(&self) -> Family {
        self.family
    }

    /// Base deck, face down, in builder order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn layout(&self) -> &TableauLayout {
        &self.layout
    }

    #[must_use]
    pub fn tableau_count(&self) -> usize {
        self.layout.pile_count()
    }

    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundation_count
    }

    /// Face-up cards per tableau pile right after the deal.
    #[must_use]
    pub fn reset_face_up_amount(&self) -> usize {
        self.reset_face_up_amount
    }

    #[must_use]
    pub fn stock_mode(&self) -> StockMode {
        self.stock_mode
    }

    /// Cards revealed per stock tap.
    #[must_use]
    pub fn draw_amount(&self) -> usize {
        self.draw_amount
    }

    #[must_use]
    pub fn redeals(&self) -> Redeals {
        self.redeals
    }

    #[must_use]
    pub fn starting_score(&self) -> i32 {
        self.starting_score
    }

    #[must_use]
    pub fn max_score(&self) -> i32 {
        self.max_score
    }

    /// Cards placed on foundations by the deal.
    #[must_use]
    pub fn seeded_cards(&self) -> usize {
        self.seeded_cards
    }

    #[must_use]
    pub fn autocomplete_available(&self) -> bool {
        self.autocomplete_available
    }

    #[must_use]
    pub fn foundation_takes_runs(&self) -> bool {
        self.foundation_takes_runs
    }

    #[must_use]
    pub fn foundation_withdrawal(&self) -> bool {
        self.foundation_withdrawal
    }

    /// Cards the deal takes out of the stock.
    #[must_use]
    pub fn required_cards(&self) -> usize {
        self.layout.total_cards() + self.seeded_cards
    }

    /// Check the deck can support the layout.
    pub fn validate(&self) -> Result<()> {
        let required = self.required_cards();
        if required > self.deck.len() || self.foundation_count == 0 || self.layout.pile_count() == 0 {
            return Err(EngineError::DeckTooSmall {
                variant: self.id.id(),
                required,
                available: self.deck.len(),
            });
        }
        for (kind, piles) in [("foundation", self.foundation_count), ("tableau", self.layout.pile_count())] {
            if piles > MAX_PILES {
                return Err(EngineError::TooManyPiles {
                    variant: self.id.id(),
                    kind,
                    piles,
                    max: MAX_PILES,
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameVariant")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("deck", &self.deck.len())
            .field("tableau", &self.layout.pile_count())
            .field("foundations", &self.foundation_count)
            .field("stock_mode", &self.stock_mode)
            .field("draw_amount", &self.draw_amount)
            .field("redeals", &self.redeals)
            .finish_non_exhaustive()
    }
}

impl Rules for GameVariant {
    fn reset_tableau(&self, tableau: &mut [Pile], stock: &mut Pile) {
        deal::deal_tableau(&self.layout, tableau, stock);
    }

    fn reset_foundation(&self, foundations: &mut [Pile], stock: &mut Pile) {
        (self.rules.foundation_reset)(foundations, stock);
    }

    fn can_lift(&self, tableau: &Pile, from: usize) -> bool {
        (self.rules.lift)(tableau, from)
    }

    fn can_add_to_tableau_non_empty_rule(&self, table: &Table, tableau: &Pile, cards: &[Card]) -> bool {
        (self.rules.tableau_non_empty)(table, tableau, cards)
    }

    fn can_add_to_tableau_empty_rule(&self, table: &Table, tableau: &Pile, cards: &[Card]) -> bool {
        (self.rules.tableau_empty)(table, tableau, cards)
    }

    fn can_add_to_foundation(&self, table: &Table, foundation: &Pile, cards: &[Card]) -> bool {
        (self.rules.foundation)(table, foundation, cards)
    }

    fn game_won(&self, foundations: &[Pile]) -> bool {
        (self.rules.won)(foundations)
    }

    fn autocomplete_tableau_check(&self, tableau: &[Pile]) -> bool {
        self.autocomplete_available && (self.rules.ready)(tableau)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Deck;

    fn custom() -> GameVariant {
        GameVariant::new(
            VariantId::KlondikeTurnOne,
            Family::Klondike,
            Deck::standard(),
            TableauLayout::klondike(7),
            4,
        )
    }

    #[test]
    fn test_redeals_allow() {
        assert!(!Redeals::None.allows(0));
        assert!(Redeals::Once.allows(0));
        assert!(!Redeals::Once.allows(1));
        assert!(Redeals::Unlimited.allows(100));
    }

    #[test]
    fn test_defaults() {
        let variant = custom();
        assert_eq!(variant.stock_mode(), StockMode::ToWaste);
        assert_eq!(variant.draw_amount(), 1);
        assert_eq!(variant.redeals(), Redeals::Unlimited);
        assert_eq!(variant.starting_score(), 0);
        assert_eq!(variant.max_score(), 52);
        assert!(variant.autocomplete_available());
        assert!(variant.foundation_withdrawal());
        assert!(!variant.foundation_takes_runs());
        assert_eq!(variant.required_cards(), 28);
    }

    #[test]
    fn test_validate_rejects_unaddressable_piles() {
        let wide = custom().with_layout(TableauLayout::uniform(MAX_PILES + 1, 0, 0));
        match wide.validate() {
            Err(EngineError::TooManyPiles { kind, piles, max, .. }) => {
                assert_eq!(kind, "tableau");
                assert_eq!(piles, 257);
                assert_eq!(max, 256);
            }
            other => panic!("expected TooManyPiles, got {other:?}"),
        }

        let foundations = GameVariant::new(
            VariantId::KlondikeTurnOne,
            Family::Klondike,
            Deck::standard(),
            TableauLayout::klondike(7),
            MAX_PILES + 1,
        );
        assert!(matches!(
            foundations.validate(),
            Err(EngineError::TooManyPiles { kind: "foundation", .. })
        ));

        assert!(custom().with_layout(TableauLayout::uniform(MAX_PILES, 0, 0)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_layout() {
        let variant = custom().with_layout(TableauLayout::uniform(10, 5, 1));
        match variant.validate() {
            Err(EngineError::DeckTooSmall { required, available, .. }) => {
                assert_eq!(required, 60);
                assert_eq!(available, 52);
            }
            other => panic!("expected DeckTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn test_foundation_reset_sets_starting_score() {
        let variant = custom().with_foundation_reset(deal::seed_aces, 4);
        assert_eq!(variant.starting_score(), 4);
        assert_eq!(variant.required_cards(), 32);
    }

    #[test]
    fn test_without_autocomplete_blocks_readiness() {
        let variant = custom().without_autocomplete();
        let table = Table::new(4, 7, 15);
        assert!(!variant.autocomplete_available());
        assert!(!variant.autocomplete_tableau_check(table.tableau()));
        assert!(custom().autocomplete_tableau_check(table.tableau()));
    }

    #[test]
    fn test_rules_dispatch_empty_and_non_empty() {
        let variant = custom();
        let mut table = Table::new(4, 7, 15);
        table.tableau_mut()[0].reset([Card::new(5, crate::core::Suit::Spades).face_up()]);
        let king = [Card::new(12, crate::core::Suit::Hearts).face_up()];
        let four = [Card::new(4, crate::core::Suit::Hearts).face_up()];

        assert!(variant.can_add_to_tableau(&table, &table.tableau()[0], &four));
        assert!(!variant.can_add_to_tableau(&table, &table.tableau()[0], &king));
        assert!(variant.can_add_to_tableau(&table, &table.tableau()[1], &king));
        assert!(!variant.can_add_to_tableau(&table, &table.tableau()[1], &[]));
    }
}
