//! Oracle session management.
//!
//! An `Oracle` owns the one [`Deck`] for a session and answers menu input:
//! spread readings, raw draws, the deck listing, and exit.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::Card;
use crate::catalog::{Catalog, DeckKind};
use crate::config::OracleConfig;
use crate::deck::Deck;
use crate::error::{TarotError, TarotResult};
use crate::reading::Reading;
use crate::render::deck_listing;
use crate::spread::{Spread, spreads};

/// What the session produced for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Text to show; the session continues.
    Output(String),
    /// Parting text; the session is over.
    Farewell(String),
}

/// An interactive reading session over one catalog.
pub struct Oracle<'c> {
    kind: DeckKind,
    deck: Deck<'c, StdRng>,
}

impl<'c> Oracle<'c> {
    /// Start a session. `catalog` should be the catalog for `config.deck`.
    pub fn new(catalog: &'c Catalog, config: &OracleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let deck = Deck::with_rng(catalog, rng).with_low_water_mark(config.low_water_mark);
        Self {
            kind: config.deck,
            deck,
        }
    }

    /// The deck being read.
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// The session's draw state.
    pub fn deck(&self) -> &Deck<'c, StdRng> {
        &self.deck
    }

    /// Lay out a spread by key.
    pub fn read(&mut self, spread_key: &str) -> TarotResult<Reading<'c>> {
        let spread = Spread::find(self.kind, spread_key)?;
        Reading::deal(self.kind, spread, &mut self.deck)
    }

    /// Draw `n` cards without a spread.
    pub fn draw(&mut self, n: usize) -> TarotResult<Vec<&'c Card>> {
        self.deck.draw(n)
    }

    /// The numbered menu: one entry per spread, then list and exit.
    pub fn menu(&self) -> String {
        let list = spreads(self.kind);
        let mut out = String::from("CHOOSE YOUR READING:\n");
        for (i, spread) in list.iter().enumerate() {
            out.push_str(&format!("  {}. {} - {}\n", i + 1, spread.name, spread.summary));
        }
        out.push_str(&format!("  {}. List All Cards - See complete deck\n", list.len() + 1));
        out.push_str(&format!("  {}. Exit", list.len() + 2));
        out
    }

    /// Number of menu entries.
    pub fn menu_len(&self) -> usize {
        spreads(self.kind).len() + 2
    }

    /// Process one line of menu input.
    ///
    /// Accepts a menu number, a spread key, `list`, `help`, or `quit`.
    pub fn process(&mut self, input: &str) -> TarotResult<Response> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Response::Output(String::new()));
        }

        let count = spreads(self.kind).len();
        if let Ok(choice) = trimmed.parse::<usize>() {
            return match choice {
                n if (1..=count).contains(&n) => {
                    let key = spreads(self.kind)[n - 1].key;
                    Ok(Response::Output(self.read(key)?.to_string()))
                }
                n if n == count + 1 => Ok(Response::Output(self.listing())),
                n if n == count + 2 => Ok(Response::Farewell(self.kind.farewell().to_string())),
                _ => Err(self.invalid(trimmed)),
            };
        }

        match trimmed.to_lowercase().as_str() {
            "list" => Ok(Response::Output(self.listing())),
            "help" | "menu" => Ok(Response::Output(self.menu())),
            "quit" | "exit" | "q" => Ok(Response::Farewell(self.kind.farewell().to_string())),
            _ => match self.read(trimmed) {
                Ok(reading) => Ok(Response::Output(reading.to_string())),
                Err(TarotError::UnknownSpread(_)) => Err(self.invalid(trimmed)),
                Err(e) => Err(e),
            },
        }
    }

    fn listing(&self) -> String {
        deck_listing(self.kind, self.deck.catalog())
    }

    fn invalid(&self, input: &str) -> TarotError {
        TarotError::InvalidChoice(format!(
            "\"{input}\" (enter 1-{} or a spread name)",
            self.menu_len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn systems() -> Catalog {
        Catalog::load(DeckKind::Systems).unwrap()
    }

    fn output(response: Response) -> String {
        match response {
            Response::Output(text) => text,
            Response::Farewell(text) => panic!("unexpected farewell: {text}"),
        }
    }

    #[test]
    fn menu_lists_spreads_then_list_and_exit() {
        let catalog = systems();
        let oracle = Oracle::new(&catalog, &OracleConfig::default().with_seed(1));
        let menu = oracle.menu();
        assert!(menu.contains("1. Single Card - Quick perspective"));
        assert!(menu.contains("5. Threat Assessment - Full risk analysis"));
        assert!(menu.contains("6. List All Cards"));
        assert!(menu.contains("7. Exit"));
        assert_eq!(oracle.menu_len(), 7);
    }

    #[test]
    fn numbered_choice_reads_spread() {
        let catalog = systems();
        let mut oracle = Oracle::new(&catalog, &OracleConfig::default().with_seed(1));
        let text = output(oracle.process("2").unwrap());
        assert!(text.contains("THREE CARD READING"));
        assert_eq!(oracle.deck().remaining(), 75);
    }

    #[test]
    fn spread_key_reads_spread() {
        let catalog = systems();
        let mut oracle = Oracle::new(&catalog, &OracleConfig::default().with_seed(1));
        let text = output(oracle.process("decision").unwrap());
        assert!(text.contains("4. INTEGRATION - What pattern connects them?"));
    }

    #[test]
    fn list_choice_shows_catalog() {
        let catalog = systems();
        let mut oracle = Oracle::new(&catalog, &OracleConfig::default().with_seed(1));
        let text = output(oracle.process("6").unwrap());
        assert!(text.contains("COMPLETE DECK"));
        assert_eq!(oracle.deck().remaining(), 78);
    }

    #[test]
    fn exit_choice_says_farewell() {
        let catalog = systems();
        let mut oracle = Oracle::new(&catalog, &OracleConfig::default().with_seed(1));
        assert_eq!(
            oracle.process("7").unwrap(),
            Response::Farewell(DeckKind::Systems.farewell().to_string())
        );
        assert!(matches!(
            oracle.process("quit").unwrap(),
            Response::Farewell(_)
        ));
    }

    #[test]
    fn invalid_choice_is_an_error() {
        let catalog = systems();
        let mut oracle = Oracle::new(&catalog, &OracleConfig::default().with_seed(1));
        assert!(matches!(
            oracle.process("9"),
            Err(TarotError::InvalidChoice(_))
        ));
        assert!(matches!(
            oracle.process("tea leaves"),
            Err(TarotError::InvalidChoice(_))
        ));
        assert_eq!(oracle.deck().remaining(), 78);
    }

    #[test]
    fn empty_input_is_ignored() {
        let catalog = systems();
        let mut oracle = Oracle::new(&catalog, &OracleConfig::default().with_seed(1));
        assert_eq!(
            oracle.process("   ").unwrap(),
            Response::Output(String::new())
        );
    }

    #[test]
    fn risk_menu_uses_risk_spreads() {
        let catalog = Catalog::load(DeckKind::Risk).unwrap();
        let config = OracleConfig::default().with_deck(DeckKind::Risk).with_seed(4);
        let mut oracle = Oracle::new(&catalog, &config);
        assert!(oracle.menu().contains("4. Archipelago Reading"));
        let text = output(oracle.process("4").unwrap());
        assert!(text.contains("1. ISLAND CALLING - What wants attention now?"));
    }

    #[test]
    fn seeded_sessions_repeat() {
        let catalog = systems();
        let config = OracleConfig::default().with_seed(99);
        let mut a = Oracle::new(&catalog, &config);
        let mut b = Oracle::new(&catalog, &config);
        let names = |cards: Vec<&Card>| cards.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(a.draw(6).unwrap()), names(b.draw(6).unwrap()));
    }

    #[test]
    fn low_water_mark_from_config() {
        let catalog = systems();
        let config = OracleConfig::default().with_seed(2).with_low_water_mark(70);
        let mut oracle = Oracle::new(&catalog, &config);
        oracle.draw(6).unwrap();
        assert_eq!(oracle.deck().remaining(), 72);
        oracle.draw(3).unwrap();
        assert_eq!(oracle.deck().remaining(), 78);
        assert_eq!(oracle.deck().epoch(), 2);
    }
}
