use comfy_table::{ContentArrangement, Table};

use tarot_core::card::rank_name;
use tarot_core::{Card, Suit};

pub fn run(deck: &str, suit: Option<&str>) -> Result<(), String> {
    let (_, catalog) = super::load(deck)?;

    let cards: Vec<&Card> = match suit {
        None => catalog.iter().collect(),
        Some(s) if s.eq_ignore_ascii_case("major") => catalog.majors().collect(),
        Some(s) => {
            let suit = Suit::parse(s).ok_or_else(|| {
                format!("unknown suit: \"{s}\". Use: major, networks, events, agents, resources")
            })?;
            catalog.suit(suit).collect()
        }
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Arcana", "Rank", "Pattern"]);

    for card in &cards {
        let rank = card
            .rank()
            .and_then(rank_name)
            .unwrap_or("—")
            .to_string();
        table.add_row(vec![
            card.name.clone(),
            card.category(),
            rank,
            super::truncate(&card.pattern, 60),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}
