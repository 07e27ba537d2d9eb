//! The immutable card catalog and the built-in decks.
//!
//! Card text is compiled into the binary as JSON and parsed once at startup.
//! [`Catalog::load`] checks the deck shape: 22 Major cards, and for each suit
//! every rank from 1 to 14 exactly once.

use std::collections::HashSet;

use crate::card::{Arcana, Card, MAX_RANK, Suit};
use crate::error::{TarotError, TarotResult};

/// Number of Major Arcana cards in a full deck.
pub const MAJOR_COUNT: usize = 22;

/// Number of cards in a full deck.
pub const FULL_DECK_SIZE: usize = MAJOR_COUNT + Suit::ALL.len() * MAX_RANK as usize;

const SYSTEMS_DATA: &str = include_str!("../data/systems.json");
const RISK_DATA: &str = include_str!("../data/risk.json");

/// The built-in decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeckKind {
    /// Systems Thinking Tarot: patterns with cross-domain examples.
    #[default]
    Systems,
    /// Risk Tarot: patterns with failure modes and emergence patterns.
    Risk,
}

impl DeckKind {
    /// All built-in decks.
    pub const ALL: [DeckKind; 2] = [Self::Systems, Self::Risk];

    /// Parse a deck name (case-insensitive).
    pub fn parse(s: &str) -> TarotResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "systems" | "system" => Ok(Self::Systems),
            "risk" => Ok(Self::Risk),
            _ => Err(TarotError::UnknownDeck(s.to_string())),
        }
    }

    /// Short key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Systems => "systems",
            Self::Risk => "risk",
        }
    }

    /// Deck title, upper case.
    pub fn title(self) -> &'static str {
        match self {
            Self::Systems => "SYSTEMS THINKING TAROT",
            Self::Risk => "RISK TAROT",
        }
    }

    /// Subtitle shown under the title.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Systems => "Universal Pattern Oracle",
            Self::Risk => "Systems Thinking Oracle",
        }
    }

    /// Lines describing what the deck is for.
    pub fn blurb(self) -> &'static [&'static str] {
        match self {
            Self::Systems => &[
                "Structured randomization forcing novel combinations of systems patterns.",
                "Applicable across any domain: engineering, ecology, business, society.",
            ],
            Self::Risk => &[
                "Not divination. Structured randomization forcing novel",
                "combinations of hard-won domain expertise.",
            ],
        }
    }

    /// Closing reflection printed after every reading.
    pub fn reflection(self) -> [&'static str; 2] {
        match self {
            Self::Systems => [
                "REFLECTION: How do these patterns inform your thinking?",
                "What connections emerge? What questions arise?",
            ],
            Self::Risk => [
                "Synthesis: How do these cards inform your thinking?",
                "What connections emerge? What questions arise?",
            ],
        }
    }

    /// Parting line for the interactive menu.
    pub fn farewell(self) -> &'static str {
        match self {
            Self::Systems => "May your systems be resilient and your patterns generative.",
            Self::Risk => "May your systems be resilient and your cascades benign.",
        }
    }

    /// Heading above a card's questions in the card box.
    pub fn questions_heading(self) -> &'static str {
        match self {
            Self::Systems => "Questions to ask:",
            Self::Risk => "Questions this card raises:",
        }
    }

    /// Title line of the complete deck listing.
    pub fn listing_title(self) -> &'static str {
        match self {
            Self::Systems => "COMPLETE DECK",
            Self::Risk => "COMPLETE DECK LISTING",
        }
    }

    /// Heading for one suit in the deck listing, without the card count.
    pub fn suit_heading(self, suit: Suit) -> String {
        let name = suit.to_string().to_uppercase();
        match self {
            Self::Systems => format!("MINOR ARCANA - {name}"),
            Self::Risk => format!("MINOR ARCANA - SUIT OF {name}"),
        }
    }

    /// Closing total line of the deck listing.
    pub fn totals_line(self, total: usize, majors: usize, minors: usize) -> String {
        match self {
            Self::Systems => format!("TOTAL: {total} cards ({majors} Major + {minors} Minor)"),
            Self::Risk => format!(
                "TOTAL: {total} cards ({majors} Major Arcana + {minors} Minor Arcana)"
            ),
        }
    }

    /// Width of the horizontal rules in rendered output.
    pub fn rule_width(self) -> usize {
        match self {
            Self::Systems => 80,
            Self::Risk => 70,
        }
    }

    fn data(self) -> &'static str {
        match self {
            Self::Systems => SYSTEMS_DATA,
            Self::Risk => RISK_DATA,
        }
    }
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A read-only, ordered set of cards.
///
/// Built-in catalogs list the Major Arcana first, then the suits in
/// [`Suit::ALL`] order, each ascending by rank.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Parse and validate a built-in deck.
    pub fn load(kind: DeckKind) -> TarotResult<Self> {
        let catalog = Self::from_json(kind.data())?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON array of cards without validating it.
    pub fn from_json(json: &str) -> TarotResult<Self> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Ok(Self { cards })
    }

    /// Build a catalog from arbitrary cards without validating it.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Check the full-deck invariants.
    pub fn validate(&self) -> TarotResult<()> {
        let mut names = HashSet::new();
        for card in &self.cards {
            if !names.insert(card.name.as_str()) {
                return Err(TarotError::InvalidCatalog(format!(
                    "duplicate card name \"{}\"",
                    card.name
                )));
            }
        }

        let majors = self.majors().count();
        if majors != MAJOR_COUNT {
            return Err(TarotError::InvalidCatalog(format!(
                "expected {MAJOR_COUNT} Major Arcana cards, found {majors}"
            )));
        }

        for suit in Suit::ALL {
            let mut ranks: Vec<u8> = self.suit(suit).filter_map(Card::rank).collect();
            ranks.sort_unstable();
            if !ranks.iter().copied().eq(1..=MAX_RANK) {
                return Err(TarotError::InvalidCatalog(format!(
                    "suit {suit} must hold ranks 1-{MAX_RANK} exactly once, found {ranks:?}"
                )));
            }
        }

        if self.cards.len() != FULL_DECK_SIZE {
            return Err(TarotError::InvalidCatalog(format!(
                "expected {FULL_DECK_SIZE} cards, found {}",
                self.cards.len()
            )));
        }

        Ok(())
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over all cards in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Major Arcana cards in catalog order.
    pub fn majors(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| c.is_major())
    }

    /// Cards of one suit in catalog order.
    pub fn suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit() == Some(suit))
    }

    /// Find a card by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        let needle = name.trim();
        self.cards
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(needle))
    }

    /// Find a Minor card by suit and rank.
    pub fn find_minor(&self, suit: Suit, rank: u8) -> Option<&Card> {
        self.cards
            .iter()
            .find(|c| c.arcana == Arcana::Minor { suit, rank })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
