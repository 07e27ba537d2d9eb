use tarot_core::{Arcana, Card, Catalog, Suit};

use crate::slug::slugify;
use crate::style::{FORMAT_LINE, MAJOR_STYLE, rank_cue, suit_style};

/// Most example snippets folded into one prompt.
pub const MAX_VISUALS: usize = 3;

/// A generated prompt and the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPrompt {
    /// File name, e.g. `major_01_the_cascade.txt`.
    pub filename: String,
    /// Name of the card the prompt describes.
    pub card_name: String,
    /// Prompt body, without trailing newline.
    pub text: String,
}

/// Concrete details from examples: the text after the first colon,
/// trimmed and lower-cased, for up to [`MAX_VISUALS`] examples.
pub fn visual_grounding(examples: &[String]) -> String {
    examples
        .iter()
        .filter_map(|ex| ex.split_once(':'))
        .map(|(_, detail)| detail.trim().to_lowercase())
        .take(MAX_VISUALS)
        .collect::<Vec<_>>()
        .join("; ")
}

// Cards without examples fall back to their emergence patterns.
fn grounding(card: &Card) -> String {
    if card.examples.is_empty() {
        card.emergence_patterns
            .iter()
            .take(MAX_VISUALS)
            .map(|p| p.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join("; ")
    } else {
        visual_grounding(&card.examples)
    }
}

/// File name for a Major card at 1-based `index` in the Major Arcana.
pub fn major_filename(index: usize, card: &Card) -> String {
    format!("major_{index:02}_{}.txt", slugify(&card.name))
}

/// File name for a Minor card.
pub fn minor_filename(suit: Suit, rank: u8, card: &Card) -> String {
    format!("{}_{rank:02}_{}.txt", suit.slug(), slugify(&card.name))
}

/// Prompt body for a Major Arcana card.
pub fn major_prompt(card: &Card) -> String {
    let mut lines = vec![
        format!("{MAJOR_STYLE}."),
        format!("Card title at bottom: \"{}\" — Major Arcana.", card.name),
        format!("Central image: {}", card.pattern),
    ];
    let visuals = grounding(card);
    if !visuals.is_empty() {
        lines.push(format!("Visual references woven into the scene: {visuals}."));
    }
    let mood = card.questions.first().map(String::as_str).unwrap_or("");
    lines.push(format!("Philosophical mood: \"{mood}\""));
    lines.push(FORMAT_LINE.to_string());
    lines.join("\n")
}

/// Prompt body for a Minor Arcana card.
pub fn minor_prompt(suit: Suit, rank: u8, card: &Card) -> String {
    let mut lines = vec![
        format!("{}.", suit_style(suit)),
        format!("Card title at bottom: \"{}\" — {suit}, card {rank}.", card.name),
        format!("Central image: {}", card.pattern),
    ];
    if let Some(cue) = rank_cue(rank) {
        lines.push(format!("Compositional anchor: {cue}."));
    }
    let visuals = grounding(card);
    if !visuals.is_empty() {
        lines.push(format!("Scene details drawn from: {visuals}."));
    }
    lines.push(FORMAT_LINE.to_string());
    lines.join("\n")
}

/// Build prompts for every card: Major Arcana first, then each suit by rank.
pub fn build_prompts(catalog: &Catalog) -> Vec<CardPrompt> {
    let mut prompts: Vec<CardPrompt> = catalog
        .majors()
        .enumerate()
        .map(|(i, card)| CardPrompt {
            filename: major_filename(i + 1, card),
            card_name: card.name.clone(),
            text: major_prompt(card),
        })
        .collect();

    for suit in Suit::ALL {
        for card in catalog.suit(suit) {
            if let Arcana::Minor { suit, rank } = card.arcana {
                prompts.push(CardPrompt {
                    filename: minor_filename(suit, rank, card),
                    card_name: card.name.clone(),
                    text: minor_prompt(suit, rank, card),
                });
            }
        }
    }

    prompts
}
