//! The shuffled draw order and the draw-and-replenish rule.
//!
//! A [`Deck`] deals cards from the front of a shuffled permutation of its
//! catalog. If a request cannot be met from what is left, the whole catalog
//! is reshuffled first. After every draw, if fewer than the low-water mark
//! remain, the leftover cards are discarded and the whole catalog is
//! reshuffled. Within one shuffle (an epoch) no card is dealt twice.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::Card;
use crate::catalog::Catalog;
use crate::error::{TarotError, TarotResult};

/// Remaining-count below which the draw order is replaced with a fresh shuffle.
pub const LOW_WATER_MARK: usize = 10;

/// A session's draw order over a borrowed catalog.
///
/// The random generator is owned by the deck, so independent decks never
/// share shuffle state. Pass a seeded generator for reproducible draws.
#[derive(Debug)]
pub struct Deck<'c, R = StdRng> {
    catalog: &'c Catalog,
    order: Vec<&'c Card>,
    rng: R,
    low_water_mark: usize,
    epoch: u64,
}

impl<'c> Deck<'c, StdRng> {
    /// Create a deck shuffled by an OS-seeded generator.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Create a deck with a deterministic seed.
    pub fn seeded(catalog: &'c Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<'c, R: Rng> Deck<'c, R> {
    /// Create a deck driven by the given generator.
    pub fn with_rng(catalog: &'c Catalog, rng: R) -> Self {
        let mut deck = Self {
            catalog,
            order: Vec::with_capacity(catalog.len()),
            rng,
            low_water_mark: LOW_WATER_MARK,
            epoch: 0,
        };
        deck.reshuffle();
        deck
    }

    /// Override the low-water mark.
    pub fn with_low_water_mark(mut self, mark: usize) -> Self {
        self.low_water_mark = mark;
        self
    }

    /// Draw `n` distinct cards from the front of the draw order.
    ///
    /// Cards come back in dealt order; callers assign positional meaning.
    /// `draw(0)` is a no-op. Requests larger than the catalog fail with
    /// [`TarotError::OversizedDraw`] and leave the deck untouched.
    pub fn draw(&mut self, n: usize) -> TarotResult<Vec<&'c Card>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        if n > self.catalog.len() {
            return Err(TarotError::OversizedDraw {
                requested: n,
                available: self.catalog.len(),
            });
        }

        if n > self.order.len() {
            self.reshuffle();
        }

        let drawn: Vec<&'c Card> = self.order.drain(..n).collect();

        if self.order.len() < self.low_water_mark {
            self.reshuffle();
        }

        Ok(drawn)
    }

    /// Replace the draw order with a fresh shuffle of the full catalog.
    pub fn reshuffle(&mut self) {
        let catalog = self.catalog;
        self.order.clear();
        self.order.extend(catalog.iter());
        self.order.shuffle(&mut self.rng);
        self.epoch += 1;
    }

    /// Cards left before the next forced reshuffle.
    pub fn remaining(&self) -> usize {
        self.order.len()
    }

    /// Number of full shuffles so far, starting at 1 for the initial shuffle.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The current low-water mark.
    pub fn low_water_mark(&self) -> usize {
        self.low_water_mark
    }

    /// The catalog this deck deals from.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::card::{Arcana, Suit};
    use crate::catalog::DeckKind;

    fn full() -> Catalog {
        Catalog::load(DeckKind::Systems).unwrap()
    }

    fn small(size: u8) -> Catalog {
        let cards = (1..=size)
            .map(|rank| {
                Card::new(
                    format!("Card {rank}"),
                    Arcana::Minor {
                        suit: Suit::Networks,
                        rank,
                    },
                    "pattern",
                )
            })
            .collect();
        Catalog::from_cards(cards)
    }

    fn names(cards: &[&Card]) -> Vec<String> {
        cards.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn new_deck_holds_whole_catalog() {
        let catalog = full();
        let deck = Deck::seeded(&catalog, 1);
        assert_eq!(deck.remaining(), 78);
        assert_eq!(deck.epoch(), 1);
    }

    #[test]
    fn draw_zero_is_noop() {
        let catalog = full();
        let mut deck = Deck::seeded(&catalog, 1);
        deck.draw(5).unwrap();
        let drawn = deck.draw(0).unwrap();
        assert!(drawn.is_empty());
        assert_eq!(deck.remaining(), 73);
        assert_eq!(deck.epoch(), 1);
    }

    #[test]
    fn draw_returns_distinct_catalog_cards() {
        let catalog = full();
        let mut deck = Deck::seeded(&catalog, 7);
        let drawn = deck.draw(6).unwrap();
        assert_eq!(drawn.len(), 6);
        let unique: HashSet<_> = names(&drawn).into_iter().collect();
        assert_eq!(unique.len(), 6);
        for card in drawn {
            assert!(catalog.find_by_name(&card.name).is_some());
        }
    }

    #[test]
    fn oversized_draw_is_rejected_without_state_change() {
        let catalog = full();
        let mut deck = Deck::seeded(&catalog, 3);
        deck.draw(3).unwrap();
        let err = deck.draw(79).unwrap_err();
        assert!(matches!(
            err,
            TarotError::OversizedDraw {
                requested: 79,
                available: 78
            }
        ));
        assert_eq!(deck.remaining(), 75);
        assert_eq!(deck.epoch(), 1);
    }

    #[test]
    fn drawing_the_whole_catalog_is_allowed() {
        let catalog = full();
        let mut deck = Deck::seeded(&catalog, 3);
        deck.draw(1).unwrap();
        let all = deck.draw(78).unwrap();
        let unique: HashSet<_> = names(&all).into_iter().collect();
        assert_eq!(unique.len(), 78);
        // 77 left was not enough, and 0 left is under the mark
        assert_eq!(deck.epoch(), 3);
        assert_eq!(deck.remaining(), 78);
    }

    #[test]
    fn three_card_draws_count_down_then_replenish() {
        let catalog = full();
        let mut deck = Deck::seeded(&catalog, 11);

        deck.draw(3).unwrap();
        assert_eq!(deck.remaining(), 75);
        for _ in 0..5 {
            deck.draw(3).unwrap();
        }
        assert_eq!(deck.remaining(), 60);

        // 60 -> 12 in sixteen more draws
        for _ in 0..16 {
            deck.draw(3).unwrap();
        }
        assert_eq!(deck.remaining(), 12);
        assert_eq!(deck.epoch(), 1);

        // 12 -> 9 falls under the mark and triggers a full reshuffle
        deck.draw(3).unwrap();
        assert_eq!(deck.remaining(), 78);
        assert_eq!(deck.epoch(), 2);

        deck.draw(3).unwrap();
        assert_eq!(deck.remaining(), 75);
    }

    #[test]
    fn request_larger_than_remaining_reshuffles_first() {
        let catalog = small(20);
        let mut deck = Deck::seeded(&catalog, 5).with_low_water_mark(0);
        deck.draw(15).unwrap();
        assert_eq!(deck.remaining(), 5);

        let drawn = deck.draw(8).unwrap();
        assert_eq!(drawn.len(), 8);
        assert_eq!(deck.epoch(), 2);
        assert_eq!(deck.remaining(), 12);
    }

    #[test]
    fn no_repeats_within_an_epoch() {
        let catalog = small(30);
        let mut deck = Deck::seeded(&catalog, 9).with_low_water_mark(0);
        let mut seen = HashSet::new();
        for _ in 0..10 {
            for card in deck.draw(3).unwrap() {
                assert!(seen.insert(card.name.clone()), "repeat: {}", card.name);
            }
        }
        assert_eq!(seen.len(), 30);
        assert_eq!(deck.epoch(), 1);
    }

    #[test]
    fn same_seed_same_order() {
        let catalog = full();
        let mut a = Deck::seeded(&catalog, 42);
        let mut b = Deck::seeded(&catalog, 42);
        assert_eq!(names(&a.draw(10).unwrap()), names(&b.draw(10).unwrap()));
    }

    #[test]
    fn independent_sessions_each_avoid_repeats() {
        let catalog = full();
        let mut a = Deck::seeded(&catalog, 1);
        let mut b = Deck::seeded(&catalog, 2);
        let mut seen_a = HashSet::new();
        let mut seen_b = HashSet::new();
        for _ in 0..22 {
            for card in a.draw(3).unwrap() {
                assert!(seen_a.insert(card.name.clone()));
            }
            for card in b.draw(3).unwrap() {
                assert!(seen_b.insert(card.name.clone()));
            }
        }
        assert_eq!(a.epoch(), 1);
        assert_eq!(b.epoch(), 1);
        assert_ne!(a.order, b.order);
    }

    #[test]
    fn injected_generator_drives_the_shuffle() {
        let catalog = small(12);
        let mut injected = Deck::with_rng(&catalog, StdRng::seed_from_u64(3));
        let mut seeded = Deck::seeded(&catalog, 3);
        assert_eq!(
            names(&injected.draw(12).unwrap()),
            names(&seeded.draw(12).unwrap())
        );
    }

    proptest! {
        #[test]
        fn draw_yields_n_distinct_cards(seed in any::<u64>(), n in 0usize..=78) {
            let catalog = full();
            let mut deck = Deck::seeded(&catalog, seed);
            let drawn = deck.draw(n).unwrap();
            prop_assert_eq!(drawn.len(), n);
            let unique: HashSet<_> = names(&drawn).into_iter().collect();
            prop_assert_eq!(unique.len(), n);
        }

        #[test]
        fn remaining_never_drops_under_mark(
            seed in any::<u64>(),
            requests in proptest::collection::vec(0usize..=6, 1..60),
        ) {
            let catalog = full();
            let mut deck = Deck::seeded(&catalog, seed);
            for n in requests {
                let before = deck.remaining();
                deck.draw(n).unwrap();
                prop_assert!(deck.remaining() >= LOW_WATER_MARK);
                if n > 0 && before - n >= LOW_WATER_MARK {
                    prop_assert_eq!(deck.remaining(), before - n);
                }
            }
        }
    }
}
