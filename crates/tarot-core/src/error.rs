//! Error types for the tarot engine.

use thiserror::Error;

/// Result type for tarot operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur while loading a deck or drawing from it.
#[derive(Debug, Error)]
pub enum TarotError {
    /// More cards were requested than the catalog holds.
    #[error("cannot draw {requested} cards from a deck of {available}")]
    OversizedDraw {
        /// Number of cards requested.
        requested: usize,
        /// Size of the full catalog.
        available: usize,
    },

    /// The embedded card data violates a catalog invariant.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The embedded card data could not be parsed.
    #[error("malformed card data: {0}")]
    Data(#[from] serde_json::Error),

    /// Unknown deck name.
    #[error("unknown deck: \"{0}\" (expected systems or risk)")]
    UnknownDeck(String),

    /// Unknown spread key.
    #[error("unknown spread: \"{0}\"")]
    UnknownSpread(String),

    /// No card with the given name.
    #[error("card not found: \"{0}\"")]
    CardNotFound(String),

    /// Invalid menu choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
}
