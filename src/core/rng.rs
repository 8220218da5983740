//! Deterministic shuffling and the injected seed provider.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed always produces the same deal
//! - **Opaque to the engine**: the engine only ever calls
//!   [`ShuffleSource::next_seed`] and [`ShuffleSource::shuffle`], once each per
//!   new game, and never re-seeds the source
//! - **Replaceable**: tests and replays inject a [`PresetShuffle`]
//!
//! ```
//! use solitaire_engine::core::{standard_deck, SeededShuffle, ShuffleSource};
//!
//! let mut a = SeededShuffle::new(7);
//! let mut b = SeededShuffle::new(7);
//!
//! let mut deck_a = standard_deck();
//! let mut deck_b = standard_deck();
//! let seed = a.next_seed();
//! assert_eq!(seed, b.next_seed());
//!
//! a.shuffle(&mut deck_a, seed);
//! b.shuffle(&mut deck_b, seed);
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::Card;

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// The external shuffle-seed provider.
///
/// Consumed exactly once per "new game" reset: one `next_seed()` followed by
/// one `shuffle(deck, seed)`.
pub trait ShuffleSource: Send {
    /// Produce the seed for the next new game.
    fn next_seed(&mut self) -> u64;

    /// Reorder `deck` for `seed`. Must be a permutation of the input.
    fn shuffle(&mut self, deck: &mut Vec<Card>, seed: u64);
}

/// ChaCha8-backed shuffle source.
///
/// Seeds are drawn from a master RNG, so a session started from the same
/// master seed replays the same sequence of deals.
#[derive(Clone, Debug)]
pub struct SeededShuffle {
    master: GameRng,
}

impl SeededShuffle {
    /// Create a source from a master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master: GameRng::new(master_seed),
        }
    }
}

impl ShuffleSource for SeededShuffle {
    fn next_seed(&mut self) -> u64 {
        self.master.next_u64()
    }

    fn shuffle(&mut self, deck: &mut Vec<Card>, seed: u64) {
        GameRng::new(seed).shuffle(deck);
    }
}

/// Shuffle source that always produces a fixed deck order.
///
/// Used for reproducible scenarios and for replaying a known deal. If the
/// preset is not a permutation of the variant's deck the input deck is
/// left untouched.
#[derive(Clone, Debug)]
pub struct PresetShuffle {
    order: Vec<Card>,
    seed: u64,
}

impl PresetShuffle {
    /// Create a preset from the exact deck order to deal.
    ///
    /// The last card is the top of the stock before dealing.
    #[must_use]
    pub fn new(order: Vec<Card>) -> Self {
        Self { order, seed: 0 }
    }

    fn is_permutation_of(&self, deck: &[Card]) -> bool {
        if self.order.len() != deck.len() {
            return false;
        }
        let mut remaining: Vec<Card> = deck.iter().map(|c| c.face_down()).collect();
        for card in &self.order {
            match remaining.iter().position(|c| c.same_card(*card)) {
                Some(pos) => {
                    remaining.swap_remove(pos);
                }
                None => return false,
            }
        }
        true
    }
}

impl ShuffleSource for PresetShuffle {
    fn next_seed(&mut self) -> u64 {
        self.seed += 1;
        self.seed
    }

    fn shuffle(&mut self, deck: &mut Vec<Card>, _seed: u64) {
        if self.is_permutation_of(deck) {
            *deck = self.order.iter().map(|c| c.face_down()).collect();
        } else {
            tracing::warn!(
                preset = self.order.len(),
                deck = deck.len(),
                "Preset order is not a permutation of the deck, leaving deck unshuffled"
            );
        }
    }
}
