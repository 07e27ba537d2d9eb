use std::path::Path;

use tarot_core::{Card, Catalog, DeckKind, Suit};

pub fn run(deck: &str, format: &str, output: Option<&Path>) -> Result<(), String> {
    let (kind, catalog) = super::load(deck)?;

    let content = match format {
        "json" => export_json(kind, &catalog)?,
        "markdown" | "md" => export_markdown(kind, &catalog),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), format, "deck exported");
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(kind: DeckKind, catalog: &Catalog) -> Result<String, String> {
    let export = serde_json::json!({
        "deck": kind.key(),
        "title": kind.title(),
        "subtitle": kind.subtitle(),
        "cards": catalog.cards(),
    });

    serde_json::to_string_pretty(&export)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("JSON serialization error: {e}"))
}

fn export_markdown(kind: DeckKind, catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", kind.title()));
    out.push_str(&format!("*{}*\n\n", kind.subtitle()));
    out.push_str("---\n\n");

    out.push_str("## Major Arcana\n\n");
    for card in catalog.majors() {
        push_card(&mut out, card);
    }

    for suit in Suit::ALL {
        out.push_str(&format!("## {suit}\n\n"));
        for card in catalog.suit(suit) {
            push_card(&mut out, card);
        }
    }

    out
}

fn push_card(out: &mut String, card: &Card) {
    out.push_str(&format!("### {}\n\n", card.name));
    out.push_str(&format!("{}\n\n", card.pattern));

    if let Some(ref context) = card.context {
        out.push_str(&format!("**Context:** {context}\n\n"));
    }

    let sections = [
        ("Questions", &card.questions),
        ("Examples", &card.examples),
        ("Failure modes", &card.failure_modes),
        ("Emergence patterns", &card.emergence_patterns),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("**{title}:**\n\n"));
        for item in items {
            out.push_str(&format!("- {item}\n"));
        }
        out.push('\n');
    }
}
