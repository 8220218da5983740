//! Engine configuration.
//!
//! Hosts configure the engine at startup through `EngineConfig`, either with
//! the builder methods or by loading a TOML document:
//!
//! ```
//! use solitaire_engine::core::{AnimationMode, EngineConfig};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     history_limit = 20
//!     autocomplete_delay_ms = 150
//!     animation = "immediate"
//! "#).unwrap();
//!
//! assert_eq!(config.history_limit, 20);
//! assert_eq!(config.animation, AnimationMode::Immediate);
//! ```
//!
//! Variant rules are not configuration: they live in
//! [`crate::variants`] as a closed set.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Default number of undoable moves.
pub const DEFAULT_HISTORY_LIMIT: usize = 15;

/// Default pause between autocomplete taps.
pub const DEFAULT_AUTOCOMPLETE_DELAY_MS: u64 = 300;

/// How display piles are reconciled with true piles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// An external animation layer calls the before/after hooks.
    #[default]
    Deferred,
    /// No animation layer: the engine reconciles immediately after each move.
    Immediate,
}

/// How autocomplete taps are reflected in the move counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionPolicy {
    /// Autocomplete taps count exactly like manual taps.
    CountAll,
    /// Autocomplete taps are subtracted from the published move count.
    #[default]
    ExcludeAutocomplete,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Maximum number of undoable moves (also the per-pile undo log cap).
    pub history_limit: usize,

    /// Delay between autocomplete taps, in milliseconds.
    pub autocomplete_delay_ms: u64,

    /// Display reconciliation mode.
    pub animation: AnimationMode,

    /// Autocomplete move-count correction.
    pub correction: CorrectionPolicy,

    /// Whether an undo increments the move counter.
    pub undo_counts_as_move: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            autocomplete_delay_ms: DEFAULT_AUTOCOMPLETE_DELAY_MS,
            animation: AnimationMode::Deferred,
            correction: CorrectionPolicy::ExcludeAutocomplete,
            undo_counts_as_move: true,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Headless configuration: immediate reconciliation, no autocomplete delay.
    #[must_use]
    pub fn headless() -> Self {
        Self::default()
            .with_animation(AnimationMode::Immediate)
            .with_autocomplete_delay(Duration::ZERO)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(EngineError::InvalidConfig(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the history cap.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the autocomplete delay.
    #[must_use]
    pub fn with_autocomplete_delay(mut self, delay: Duration) -> Self {
        self.autocomplete_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the animation mode.
    #[must_use]
    pub fn with_animation(mut self, mode: AnimationMode) -> Self {
        self.animation = mode;
        self
    }

    /// Set the correction policy.
    #[must_use]
    pub fn with_correction(mut self, policy: CorrectionPolicy) -> Self {
        self.correction = policy;
        self
    }

    /// Set whether undo counts as a move.
    #[must_use]
    pub fn with_undo_counts_as_move(mut self, counts: bool) -> Self {
        self.undo_counts_as_move = counts;
        self
    }

    /// Autocomplete delay as a `Duration`.
    #[must_use]
    pub fn autocomplete_delay(&self) -> Duration {
        Duration::from_millis(self.autocomplete_delay_ms)
    }
}
