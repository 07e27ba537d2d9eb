use comfy_table::{ContentArrangement, Table};

use tarot_core::spread::spreads;

pub fn run(deck: &str) -> Result<(), String> {
    let (kind, _) = super::load(deck)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Name", "Cards", "Positions"]);

    for spread in spreads(kind) {
        let labels: Vec<&str> = spread.positions.iter().map(|p| p.label).collect();
        table.add_row(vec![
            spread.key.to_string(),
            spread.name.to_string(),
            spread.size().to_string(),
            labels.join(" / "),
        ]);
    }

    println!("{table}");
    Ok(())
}
