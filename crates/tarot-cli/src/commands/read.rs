use tarot_core::{Oracle, TarotError};
use tarot_core::spread::spreads;

pub fn run(deck: &str, spread: &str, seed: Option<u64>) -> Result<(), String> {
    let (kind, catalog) = super::load(deck)?;
    let mut oracle = Oracle::new(&catalog, &super::config(kind, seed));

    let reading = oracle.read(spread).map_err(|e| match e {
        TarotError::UnknownSpread(_) => {
            let keys: Vec<&str> = spreads(kind).iter().map(|s| s.key).collect();
            format!("{e}. Use: {}", keys.join(", "))
        }
        other => other.to_string(),
    })?;

    tracing::info!(spread = reading.spread.key, cards = reading.cards.len(), "reading dealt");
    println!("{reading}");
    Ok(())
}
