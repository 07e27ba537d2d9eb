//! Card catalog, shuffled deck and spreads for the Systems Thinking Tarot.
//!
//! A [`Catalog`] holds the 78 immutable cards of a deck. A [`Deck`] borrows
//! the catalog and deals distinct cards from a shuffled draw order, replacing
//! the whole order with a fresh shuffle whenever it runs low. Spreads,
//! readings and the menu-driven [`Oracle`] session sit on top.

pub mod card;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod error;
pub mod oracle;
pub mod reading;
pub mod render;
pub mod spread;

pub use card::{Arcana, Card, Suit};
pub use catalog::{Catalog, DeckKind};
pub use config::OracleConfig;
pub use deck::{Deck, LOW_WATER_MARK};
pub use error::{TarotError, TarotResult};
pub use oracle::{Oracle, Response};
pub use reading::Reading;
pub use spread::{Position, Spread};
