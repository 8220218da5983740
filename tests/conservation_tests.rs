//! Property tests over random tap sequences for every variant.
//!
//! Taps are generated blindly (most of them are illegal), which exercises
//! both the legal paths and the rejection paths of the resolver.

use proptest::collection::vec;
use proptest::prelude::*;

use solitaire_engine::core::EngineConfig;
use solitaire_engine::engine::{Engine, EngineBuilder, MoveResult};
use solitaire_engine::rules::predicates;
use solitaire_engine::variants::{Family, VariantId};

#[derive(Clone, Debug)]
enum Tap {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize, usize),
    Undo,
}

fn play_strategy() -> impl Strategy<Value = Tap> {
    prop_oneof![
        3 => Just(Tap::Stock),
        2 => Just(Tap::Waste),
        1 => (0..8usize).prop_map(Tap::Foundation),
        6 => (0..17usize, 0..24usize).prop_map(|(t, c)| Tap::Tableau(t, c)),
    ]
}

fn tap_strategy() -> impl Strategy<Value = Tap> {
    prop_oneof![
        9 => play_strategy(),
        1 => Just(Tap::Undo),
    ]
}

fn variant_strategy() -> impl Strategy<Value = VariantId> {
    (0..VariantId::ALL.len()).prop_map(|i| VariantId::ALL[i])
}

fn engine(variant: VariantId, seed: u64) -> Engine {
    EngineBuilder::new(variant)
        .config(EngineConfig::headless())
        .seed(seed)
        .build()
        .unwrap()
}

fn apply(engine: &mut Engine, tap: &Tap) -> MoveResult {
    match *tap {
        Tap::Stock => engine.on_stock_click(),
        Tap::Waste => engine.on_waste_click(),
        Tap::Foundation(i) => engine.on_foundation_click(i),
        Tap::Tableau(t, c) => engine.on_tableau_click(t, c),
        Tap::Undo => {
            if engine.undo() {
                MoveResult::Move
            } else {
                MoveResult::Illegal
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No card is ever created or lost.
    #[test]
    fn prop_card_count_is_conserved(
        variant in variant_strategy(),
        seed in any::<u64>(),
        taps in vec(tap_strategy(), 0..150),
    ) {
        let mut engine = engine(variant, seed);
        let total = variant.descriptor().deck().len();
        prop_assert_eq!(engine.table().total_cards(), total);

        for tap in &taps {
            apply(&mut engine, tap);
            prop_assert_eq!(engine.table().total_cards(), total);
        }
    }

    /// Rejected taps leave piles, score, counters and history untouched.
    #[test]
    fn prop_illegal_taps_change_nothing(
        variant in variant_strategy(),
        seed in any::<u64>(),
        taps in vec(tap_strategy(), 0..150),
    ) {
        let mut engine = engine(variant, seed);

        for tap in &taps {
            let before = engine.table().true_contents();
            let score = engine.score();
            let moves = engine.moves();
            let history = engine.history().len();

            if apply(&mut engine, tap) == MoveResult::Illegal {
                prop_assert_eq!(engine.table().true_contents(), before);
                prop_assert_eq!(engine.score(), score);
                prop_assert_eq!(engine.moves(), moves);
                prop_assert_eq!(engine.history().len(), history);
            }
        }
    }

    /// Up to fifteen legal moves undo back to the exact starting piles.
    #[test]
    fn prop_undo_restores_exact_piles(
        variant in variant_strategy(),
        seed in any::<u64>(),
        taps in vec(play_strategy(), 0..120),
    ) {
        let mut engine = engine(variant, seed);
        let start = engine.table().true_contents();
        let start_score = engine.score();

        let mut legal = 0;
        for tap in &taps {
            if legal == 15 {
                break;
            }
            if apply(&mut engine, tap).is_legal() {
                legal += 1;
            }
        }
        prop_assume!(!engine.is_won());

        for _ in 0..legal {
            prop_assert!(engine.undo());
        }
        prop_assert_eq!(engine.table().true_contents(), start);
        prop_assert_eq!(engine.score(), start_score);
        prop_assert!(!engine.undo_available());
        prop_assert_eq!(engine.redeals_used(), 0);
    }

    /// Score always equals the number of cards on the foundations.
    #[test]
    fn prop_score_tracks_foundations(
        variant in variant_strategy(),
        seed in any::<u64>(),
        taps in vec(tap_strategy(), 0..150),
    ) {
        let mut engine = engine(variant, seed);
        prop_assert_eq!(engine.score() as usize, engine.table().foundation_cards());

        for tap in &taps {
            apply(&mut engine, tap);
            prop_assert_eq!(engine.score() as usize, engine.table().foundation_cards());
        }
    }

    /// Same-suit foundations always hold Ace..n of one suit, in order.
    #[test]
    fn prop_foundations_stay_monotonic(
        variant in variant_strategy(),
        seed in any::<u64>(),
        taps in vec(tap_strategy(), 0..150),
    ) {
        prop_assume!(matches!(variant.family(), Family::Klondike | Family::Yukon));
        let mut engine = engine(variant, seed);

        for tap in &taps {
            apply(&mut engine, tap);
            for foundation in engine.table().foundations() {
                let cards = foundation.suffix(0);
                for (rank, card) in cards.iter().enumerate() {
                    prop_assert_eq!(card.value as usize, rank);
                    prop_assert_eq!(card.suit, cards[0].suit);
                    prop_assert!(card.face_up);
                }
            }
        }
    }

    /// Display piles match true piles after every headless move.
    #[test]
    fn prop_headless_display_is_settled(
        variant in variant_strategy(),
        seed in any::<u64>(),
        taps in vec(tap_strategy(), 0..80),
    ) {
        let mut engine = engine(variant, seed);
        for tap in &taps {
            apply(&mut engine, tap);
            prop_assert!(engine.table().is_settled());
        }
    }

    /// Spider-family tableau runs that reach a foundation are complete suits.
    #[test]
    fn prop_spider_foundations_hold_complete_runs(
        seed in any::<u64>(),
        taps in vec(tap_strategy(), 0..150),
    ) {
        let mut engine = engine(VariantId::SpiderOneSuit, seed);
        for tap in &taps {
            apply(&mut engine, tap);
            for foundation in engine.table().foundations() {
                let cards = foundation.suffix(0);
                prop_assert!(cards.is_empty() || (cards.len() == 13 && predicates::is_same_suit_run(&cards)));
            }
        }
    }
}
