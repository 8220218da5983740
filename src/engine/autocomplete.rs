//! Autocomplete: draining the tableau onto the foundations.
//!
//! ## Lifecycle
//!
//! After every successful move (once its animation has finished, in
//! deferred mode) the engine checks readiness: stock and waste empty, the
//! variant's tableau check holds and no run is active. A ready engine
//! starts a run, and a driver then calls [`Engine::autocomplete_step`]
//! repeatedly with the configured delay between taps.
//!
//! Each step taps the top card of the next tableau pile (in pass order)
//! that has a foundation destination. A full pass without such a pile ends
//! the run with [`AutocompleteOutcome::NoProgress`]. Every tap moves one
//! card to a foundation, so a run takes at most as many taps as there are
//! tableau cards.
//!
//! Two drivers are provided: [`Engine::run_autocomplete_blocking`] with an
//! injectable sleep, and the async [`run_autocomplete`] for tokio hosts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::resolver;
use super::scoring::MoveResult;
use super::Engine;

/// Shared cancellation flag of one autocomplete run.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How an autocomplete run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutocompleteOutcome {
    /// The game is won.
    Won,
    /// A full pass found nothing to move.
    NoProgress,
    /// Cancelled by a reset, an undo or a restore.
    Cancelled,
    /// No run was active.
    Inactive,
}

/// Result of one driver step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutocompleteStep {
    /// One tableau top card was tapped.
    Tapped { tableau: usize, result: MoveResult },
    /// The run is over.
    Finished(AutocompleteOutcome),
}

/// Run bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct AutocompleteState {
    active: bool,
    token: CancelToken,
    cursor: usize,
    taps: u32,
}

impl AutocompleteState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Taps made by the current or last run.
    #[must_use]
    pub fn taps(&self) -> u32 {
        self.taps
    }

    #[must_use]
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    fn start(&mut self) {
        self.active = true;
        self.token = CancelToken::new();
        self.cursor = 0;
        self.taps = 0;
    }

    /// Abandon the active run, if any.
    pub fn cancel(&mut self) {
        if self.active {
            self.token.cancel();
            self.active = false;
            info!(taps = self.taps, "Autocomplete cancelled");
        }
    }

    fn finish(&mut self, outcome: AutocompleteOutcome) -> AutocompleteStep {
        self.active = false;
        info!(taps = self.taps, outcome = ?outcome, "Autocomplete finished");
        AutocompleteStep::Finished(outcome)
    }
}

impl Engine {
    /// Whether the table is in a state autocomplete can finish.
    #[must_use]
    pub fn autocomplete_ready(&self) -> bool {
        use crate::rules::Rules;

        !self.won
            && self.variant.autocomplete_available()
            && self.table.stock().is_empty()
            && self.table.waste().is_empty()
            && self.variant.autocomplete_tableau_check(self.table.tableau())
    }

    /// Start a run if the table is ready and none is active.
    ///
    /// Returns `true` if a run was started.
    pub fn check_autocomplete(&mut self) -> bool {
        if self.autocomplete.is_active() || !self.autocomplete_ready() {
            return false;
        }
        self.autocomplete.start();
        info!(variant = self.variant.id().id(), "Autocomplete started");
        true
    }

    /// Token of the active run, if any.
    #[must_use]
    pub fn autocomplete_token(&self) -> Option<CancelToken> {
        self.autocomplete.is_active().then(|| self.autocomplete.token())
    }

    /// Perform one autocomplete tap.
    pub fn autocomplete_step(&mut self) -> AutocompleteStep {
        if !self.autocomplete.is_active() {
            return AutocompleteStep::Finished(AutocompleteOutcome::Inactive);
        }
        if self.autocomplete.token.is_cancelled() {
            return self.autocomplete.finish(AutocompleteOutcome::Cancelled);
        }
        if self.won {
            return self.autocomplete.finish(AutocompleteOutcome::Won);
        }

        let Some(tableau) = self.next_autocomplete_pile() else {
            return self.autocomplete.finish(AutocompleteOutcome::NoProgress);
        };

        let top = self.table.tableau()[tableau].len() - 1;
        let result = self.tap_tableau(tableau, top, true);
        self.autocomplete.taps += 1;
        self.autocomplete.cursor = tableau + 1;

        if self.won {
            return self.autocomplete.finish(AutocompleteOutcome::Won);
        }
        AutocompleteStep::Tapped { tableau, result }
    }

    /// Next pile, in pass order from the cursor, whose top card has a
    /// foundation destination.
    fn next_autocomplete_pile(&self) -> Option<usize> {
        let count = self.table.tableau().len();
        (0..count)
            .map(|offset| (self.autocomplete.cursor + offset) % count)
            .find(|&index| {
                let pile = &self.table.tableau()[index];
                pile.top().is_some_and(|top| {
                    resolver::foundation_destination(&self.variant, &self.table, &[top]).is_some()
                })
            })
    }

    /// Drive the active run to completion, calling `sleep` between taps.
    pub fn run_autocomplete_blocking(&mut self, mut sleep: impl FnMut(Duration)) -> AutocompleteOutcome {
        let delay = self.config.autocomplete_delay();
        loop {
            match self.autocomplete_step() {
                AutocompleteStep::Tapped { .. } => sleep(delay),
                AutocompleteStep::Finished(outcome) => return outcome,
            }
        }
    }
}

/// Drive the active run of a shared engine on the tokio runtime.
///
/// The lock is released while waiting between taps, so other tasks can
/// reset or undo; either cancels the run.
pub async fn run_autocomplete(engine: Arc<tokio::sync::Mutex<Engine>>) -> AutocompleteOutcome {
    let (token, delay) = {
        let guard = engine.lock().await;
        match guard.autocomplete_token() {
            Some(token) => (token, guard.config.autocomplete_delay()),
            None => return AutocompleteOutcome::Inactive,
        }
    };

    loop {
        if token.is_cancelled() {
            return AutocompleteOutcome::Cancelled;
        }
        let step = engine.lock().await.autocomplete_step();
        match step {
            AutocompleteStep::Tapped { .. } => tokio::time::sleep(delay).await,
            AutocompleteStep::Finished(outcome) => return outcome,
        }
    }
}
