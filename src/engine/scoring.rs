//! Move outcomes, score and move counters.

use serde::{Deserialize, Serialize};

use crate::core::CorrectionPolicy;
use crate::piles::PileId;

/// Outcome of one tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// Legal move with no score change.
    Move,
    /// Cards reached a foundation.
    MoveScore,
    /// Cards left a foundation.
    MoveMinusScore,
    /// Rejected; nothing changed.
    Illegal,
}

impl MoveResult {
    /// Classify a transfer by its endpoints.
    #[must_use]
    pub fn for_transfer(source: PileId, destination: PileId) -> Self {
        if destination.is_foundation() {
            MoveResult::MoveScore
        } else if source.is_foundation() {
            MoveResult::MoveMinusScore
        } else {
            MoveResult::Move
        }
    }

    #[must_use]
    pub const fn is_legal(self) -> bool {
        !matches!(self, MoveResult::Illegal)
    }
}

/// Score delta of moving `count` cards from `source` to `destination`.
#[must_use]
pub fn score_delta(source: PileId, destination: PileId, count: usize) -> i32 {
    let count = count as i32;
    match (source.is_foundation(), destination.is_foundation()) {
        (false, true) => count,
        (true, false) => -count,
        _ => 0,
    }
}

/// Score and move counters of the current game.
///
/// ```
/// use solitaire_engine::core::CorrectionPolicy;
/// use solitaire_engine::engine::Scoreboard;
///
/// let mut board = Scoreboard::new(0, 52);
/// board.apply(1);
/// board.count_move(false);
/// board.count_move(true);
/// assert_eq!(board.score(), 1);
/// assert_eq!(board.published_moves(CorrectionPolicy::CountAll), 2);
/// assert_eq!(board.published_moves(CorrectionPolicy::ExcludeAutocomplete), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    score: i32,
    max_score: i32,
    moves: u32,
    autocomplete_moves: u32,
}

impl Scoreboard {
    #[must_use]
    pub fn new(starting_score: i32, max_score: i32) -> Self {
        Self {
            score: starting_score.clamp(0, max_score.max(0)),
            max_score,
            moves: 0,
            autocomplete_moves: 0,
        }
    }

    /// Apply a score delta, clamped to `[0, max_score]`.
    pub fn apply(&mut self, delta: i32) {
        self.score = (self.score + delta).clamp(0, self.max_score.max(0));
    }

    /// Count one successful tap or undo.
    pub fn count_move(&mut self, autocomplete: bool) {
        self.moves += 1;
        if autocomplete {
            self.autocomplete_moves += 1;
        }
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn max_score(&self) -> i32 {
        self.max_score
    }

    /// Every counted move, autocomplete included.
    #[must_use]
    pub fn raw_moves(&self) -> u32 {
        self.moves
    }

    /// Moves made by the autocomplete driver (the correction counter).
    #[must_use]
    pub fn autocomplete_moves(&self) -> u32 {
        self.autocomplete_moves
    }

    /// Move count as published under `policy`.
    #[must_use]
    pub fn published_moves(&self, policy: CorrectionPolicy) -> u32 {
        match policy {
            CorrectionPolicy::CountAll => self.moves,
            CorrectionPolicy::ExcludeAutocomplete => self.moves.saturating_sub(self.autocomplete_moves),
        }
    }

    /// Overwrite every counter (session restore).
    pub(crate) fn restore(&mut self, score: i32, moves: u32, autocomplete_moves: u32) {
        self.score = score.clamp(0, self.max_score.max(0));
        self.moves = moves;
        self.autocomplete_moves = autocomplete_moves.min(moves);
    }
}
