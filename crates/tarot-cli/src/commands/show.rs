use colored::Colorize;

use tarot_core::card::rank_name;
use tarot_core::render::card_box;

pub fn run(deck: &str, name: &str, json: bool) -> Result<(), String> {
    let (kind, catalog) = super::load(deck)?;

    let card = catalog
        .find_by_name(name)
        .ok_or_else(|| format!("card not found: \"{name}\""))?;

    if json {
        let text = serde_json::to_string_pretty(card)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    let placement = match card.rank().and_then(rank_name) {
        Some(rank) => format!("{}, {rank}", card.category()),
        None => card.category(),
    };
    println!("  {} [{}]", card.name.bold(), placement.dimmed());
    println!("  {} deck", kind.key().dimmed());
    println!();
    println!("{}", card_box(kind, card));

    Ok(())
}
