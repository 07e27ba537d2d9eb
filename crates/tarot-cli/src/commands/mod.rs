pub mod draw;
pub mod export;
pub mod list;
pub mod menu;
pub mod prompts;
pub mod read;
pub mod show;
pub mod spreads;

use tarot_core::{Catalog, DeckKind, OracleConfig};

/// Resolve a deck name and load its catalog.
fn load(deck: &str) -> Result<(DeckKind, Catalog), String> {
    let kind = DeckKind::parse(deck).map_err(|e| e.to_string())?;
    let catalog = Catalog::load(kind).map_err(|e| format!("failed to load deck: {e}"))?;
    tracing::debug!(deck = %kind, cards = catalog.len(), "catalog loaded");
    Ok((kind, catalog))
}

/// Session config for a deck and optional seed.
fn config(kind: DeckKind, seed: Option<u64>) -> OracleConfig {
    let config = OracleConfig::default().with_deck(kind);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

/// Truncate to at most `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
