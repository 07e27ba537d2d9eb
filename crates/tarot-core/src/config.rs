//! Configuration for an oracle session.

use crate::catalog::DeckKind;
use crate::deck::LOW_WATER_MARK;

/// Configuration for an oracle session.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Which built-in deck to read from.
    pub deck: DeckKind,
    /// RNG seed for reproducible shuffles. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Remaining-count below which the deck is reshuffled.
    pub low_water_mark: usize,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            deck: DeckKind::Systems,
            seed: None,
            low_water_mark: LOW_WATER_MARK,
        }
    }
}

impl OracleConfig {
    /// Set the deck.
    pub fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the low-water mark.
    pub fn with_low_water_mark(mut self, mark: usize) -> Self {
        self.low_water_mark = mark;
        self
    }
}
