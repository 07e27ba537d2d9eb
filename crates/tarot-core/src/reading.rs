//! A completed reading: a spread and the cards dealt into it.

use crate::card::Card;
use crate::catalog::DeckKind;
use crate::deck::Deck;
use crate::error::TarotResult;
use crate::render::{card_box, rule};
use crate::spread::{Position, Spread};

/// Cards dealt into a spread, in position order.
#[derive(Debug, Clone)]
pub struct Reading<'c> {
    /// Deck the cards came from.
    pub deck: DeckKind,
    /// The spread that was laid out.
    pub spread: &'static Spread,
    /// One card per position.
    pub cards: Vec<&'c Card>,
}

impl<'c> Reading<'c> {
    /// Deal a spread from a deck.
    pub fn deal<R: rand::Rng>(
        kind: DeckKind,
        spread: &'static Spread,
        deck: &mut Deck<'c, R>,
    ) -> TarotResult<Self> {
        let cards = deck.draw(spread.size())?;
        Ok(Self {
            deck: kind,
            spread,
            cards,
        })
    }

    /// Positions paired with their cards.
    pub fn placements(&self) -> impl Iterator<Item = (&'static Position, &'c Card)> {
        self.spread.positions.iter().zip(self.cards.iter().copied())
    }
}

impl std::fmt::Display for Reading<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let heavy = rule(self.deck, '=');
        let light = rule(self.deck, '-');

        writeln!(f, "{heavy}")?;
        writeln!(f, "{}: {}", self.deck.title(), self.deck.subtitle())?;
        writeln!(f, "{heavy}")?;
        writeln!(f)?;
        writeln!(f, "{}", self.spread.heading)?;

        // One-card spreads print the card straight under the heading.
        let numbered = self.spread.size() > 1;
        for (i, (position, card)) in self.placements().enumerate() {
            writeln!(f)?;
            if numbered {
                writeln!(f, "{}. {} - {}", i + 1, position.label, position.question)?;
                writeln!(f, "{light}")?;
            }
            writeln!(f, "{}", card_box(self.deck, card))?;
        }

        let [first, second] = self.deck.reflection();
        writeln!(f)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "{first}")?;
        writeln!(f, "{second}")?;
        write!(f, "{heavy}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn deal_fills_every_position() {
        let catalog = Catalog::load(DeckKind::Systems).unwrap();
        let mut deck = Deck::seeded(&catalog, 5);
        let spread = Spread::find(DeckKind::Systems, "system").unwrap();
        let reading = Reading::deal(DeckKind::Systems, spread, &mut deck).unwrap();
        assert_eq!(reading.cards.len(), 5);
        assert_eq!(reading.placements().count(), 5);
        assert_eq!(deck.remaining(), 73);
    }

    #[test]
    fn display_numbers_positions() {
        let catalog = Catalog::load(DeckKind::Systems).unwrap();
        let mut deck = Deck::seeded(&catalog, 5);
        let spread = Spread::find(DeckKind::Systems, "three").unwrap();
        let reading = Reading::deal(DeckKind::Systems, spread, &mut deck).unwrap();
        let text = reading.to_string();
        assert!(text.contains("SYSTEMS THINKING TAROT: Universal Pattern Oracle"));
        assert!(text.contains("1. CONTEXT - What system am I in?"));
        assert!(text.contains("2. CHALLENGE - What constraint am I facing?"));
        assert!(text.contains("3. OPPORTUNITY - What leverage point exists?"));
        assert!(text.contains("REFLECTION: How do these patterns inform your thinking?"));
        for card in &reading.cards {
            assert!(text.contains(&card.name));
        }
    }

    #[test]
    fn risk_reading_uses_risk_footer() {
        let catalog = Catalog::load(DeckKind::Risk).unwrap();
        let mut deck = Deck::seeded(&catalog, 8);
        let spread = Spread::find(DeckKind::Risk, "strategy").unwrap();
        let text = Reading::deal(DeckKind::Risk, spread, &mut deck)
            .unwrap()
            .to_string();
        assert!(text.contains("6. LONG-TERM PATTERN - What's the trajectory?"));
        assert!(text.contains("Synthesis: How do these cards inform your thinking?"));
        assert!(text.contains("║ Context: "));
        assert!(text.contains("║ Questions this card raises:"));
        assert!(!text.contains("Questions to ask:"));
    }

    #[test]
    fn single_card_goes_straight_under_heading() {
        let catalog = Catalog::load(DeckKind::Systems).unwrap();
        let mut deck = Deck::seeded(&catalog, 2);
        let spread = Spread::find(DeckKind::Systems, "single").unwrap();
        let text = Reading::deal(DeckKind::Systems, spread, &mut deck)
            .unwrap()
            .to_string();
        let lines: Vec<&str> = text.lines().collect();
        let heading = lines
            .iter()
            .position(|l| *l == "SINGLE CARD: What perspective do I need now?")
            .unwrap();
        assert_eq!(lines[heading + 1], "");
        assert!(lines[heading + 2].starts_with("╔═══ "));
        assert!(!text.contains("1. PERSPECTIVE"));
    }
}
