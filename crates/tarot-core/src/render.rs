//! Plain-text rendering of cards, banners and the deck listing.
//!
//! Everything here returns a `String`; callers decide where it goes.

use crate::card::{Card, Suit};
use crate::catalog::{Catalog, DeckKind};

const MAJOR_TAIL: usize = 47;
const MINOR_TAIL: usize = 46;

/// Render a card inside a box-drawn frame, using the deck's own headings.
///
/// ```text
/// ╔═══ The Cascade (Major Arcana) ═══════════╗
/// ║ Pattern: Small triggers ...
/// ║
/// ║ Questions to ask:
/// ║   • What small change could trigger large consequences?
/// ╚══════════════════════════════════════════╝
/// ```
pub fn card_box(kind: DeckKind, card: &Card) -> String {
    let header = if card.is_major() {
        format!("╔═══ {} (Major Arcana) {}╗", card.name, "═".repeat(MAJOR_TAIL))
    } else {
        format!("╔═══ {} {}╗", card.name, "═".repeat(MINOR_TAIL))
    };

    let mut out = String::new();
    out.push_str(&format!("{header}\n"));
    out.push_str(&format!("║ Pattern: {}\n", card.pattern));
    if let Some(ref context) = card.context {
        out.push_str(&format!("║ Context: {context}\n"));
    }

    section(&mut out, kind.questions_heading(), &card.questions);
    section(&mut out, "Examples across domains:", &card.examples);
    section(&mut out, "Failure modes:", &card.failure_modes);
    section(&mut out, "Emergence patterns:", &card.emergence_patterns);

    let width = header.chars().count();
    out.push_str(&format!("╚{}╝", "═".repeat(width.saturating_sub(2))));
    out
}

fn section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str("║\n");
    out.push_str(&format!("║ {title}\n"));
    for item in items {
        out.push_str(&format!("║   • {item}\n"));
    }
}

/// A full-width rule of `ch`.
pub fn rule(kind: DeckKind, ch: char) -> String {
    ch.to_string().repeat(kind.rule_width())
}

/// The boxed title banner shown when the interactive menu starts.
pub fn banner(kind: DeckKind) -> String {
    let inner = kind.rule_width() - 2;
    let blank = format!("║{}║", " ".repeat(inner));

    let mut lines = vec![format!("╔{}╗", "═".repeat(inner)), blank.clone()];
    lines.push(format!("║{:^inner$}║", kind.title()));
    lines.push(format!("║{:^inner$}║", kind.subtitle()));
    lines.push(blank.clone());
    let text_width = inner - 2;
    for line in kind.blurb() {
        lines.push(format!("║  {line:<text_width$}║"));
    }
    lines.push(blank);
    lines.push(format!("╚{}╝", "═".repeat(inner)));
    lines.join("\n")
}

/// The complete deck listing: Major names with patterns, then each suit.
pub fn deck_listing(kind: DeckKind, catalog: &Catalog) -> String {
    let heavy = rule(kind, '=');
    let light = rule(kind, '-');
    let mut out = String::new();

    out.push_str(&format!("{heavy}\n{}\n{heavy}\n\n", kind.listing_title()));

    let majors: Vec<&Card> = catalog.majors().collect();
    out.push_str(&format!("MAJOR ARCANA ({} cards):\n", majors.len()));
    out.push_str(&format!("{light}\n"));
    for card in &majors {
        out.push_str(&format!("  • {}\n", card.name));
        out.push_str(&format!("    {}\n\n", card.pattern));
    }

    let mut minors = 0;
    for suit in Suit::ALL {
        let cards: Vec<&Card> = catalog.suit(suit).collect();
        minors += cards.len();
        out.push_str(&format!(
            "\n{} ({} cards):\n",
            kind.suit_heading(suit),
            cards.len()
        ));
        out.push_str(&format!("{light}\n"));
        for card in cards {
            out.push_str(&format!("  • {}\n", card.name));
        }
    }

    out.push_str(&format!("\n{heavy}\n"));
    out.push_str(&format!(
        "{}\n",
        kind.totals_line(catalog.len(), majors.len(), minors)
    ));
    out.push_str(&heavy);
    out
}
