//! Error types for the solitaire engine.
//!
//! Gameplay never produces errors: taps that the rules reject come back as
//! [`MoveResult::Illegal`](crate::engine::MoveResult::Illegal). Errors are
//! reserved for configuration, variant validation and session persistence.

use thiserror::Error;

/// Main error type for engine setup and persistence.
#[derive(Debug, Error)]
pub enum EngineError {
    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A variant's layout needs more cards than its deck provides.
    #[error("Variant {variant} needs {required} cards but its deck has {available}")]
    DeckTooSmall {
        variant: &'static str,
        required: usize,
        available: usize,
    },

    /// A variant asks for more piles of one kind than pile IDs can address.
    #[error("Variant {variant} has {piles} {kind} piles, at most {max} are supported")]
    TooManyPiles {
        variant: &'static str,
        kind: &'static str,
        piles: usize,
        max: usize,
    },

    /// No variant with the given identifier.
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// Session snapshot could not be encoded or decoded.
    #[error("Snapshot codec error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// Snapshot does not fit the engine it is restored into.
    #[error("Snapshot mismatch: {0}")]
    SnapshotMismatch(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_too_small_message() {
        let err = EngineError::DeckTooSmall {
            variant: "yukon",
            required: 60,
            available: 52,
        };
        assert_eq!(
            err.to_string(),
            "Variant yukon needs 60 cards but its deck has 52"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("history_limit = ");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::Toml(_)));
    }
}
