use colored::Colorize;

use tarot_core::Oracle;
use tarot_core::render::card_box;

pub fn run(deck: &str, count: usize, seed: Option<u64>) -> Result<(), String> {
    let (kind, catalog) = super::load(deck)?;
    let mut oracle = Oracle::new(&catalog, &super::config(kind, seed));

    let cards = oracle.draw(count).map_err(|e| e.to_string())?;
    if cards.is_empty() {
        println!("  No cards drawn.");
        return Ok(());
    }

    for (i, card) in cards.iter().enumerate() {
        println!("{}", format!("{}. {}", i + 1, card.name).bold());
        println!("{}", card_box(kind, card));
        println!();
    }
    println!(
        "  {} drawn, {} left in the deck",
        cards.len(),
        oracle.deck().remaining()
    );
    Ok(())
}
