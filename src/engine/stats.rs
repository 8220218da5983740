//! Hand-off of finished games to a statistics service.
//!
//! The engine reports each game once: when it is won, or when it is
//! abandoned by a reset after at least one move.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::variants::VariantId;

/// Summary of one completed or abandoned game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub variant: VariantId,
    pub won: bool,
    pub moves: u32,
    pub elapsed: Duration,
    pub score: i32,
}

/// Receiver of game summaries.
pub trait StatsSink: Send {
    fn record(&mut self, summary: GameSummary);
}

/// Sink that keeps every summary in memory.
///
/// Clones share storage, so a test can keep one handle and give the
/// engine another.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    summaries: Arc<Mutex<Vec<GameSummary>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Summaries recorded so far, oldest first.
    #[must_use]
    pub fn summaries(&self) -> Vec<GameSummary> {
        match self.summaries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl StatsSink for RecordingSink {
    fn record(&mut self, summary: GameSummary) {
        match self.summaries.lock() {
            Ok(mut guard) => guard.push(summary),
            Err(poisoned) => poisoned.into_inner().push(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_shares_storage() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();

        handle.record(GameSummary {
            variant: VariantId::Golf,
            won: true,
            moves: 40,
            elapsed: Duration::from_secs(120),
            score: 52,
        });

        let summaries = sink.summaries();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].variant, VariantId::Golf);
        assert!(summaries[0].won);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = GameSummary {
            variant: VariantId::Yukon,
            won: false,
            moves: 3,
            elapsed: Duration::from_millis(1500),
            score: 0,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"yukon\""));
        let back: GameSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
