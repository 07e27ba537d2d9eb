//! Card records: suits, arcana and the static text each card carries.

use serde::{Deserialize, Serialize};

/// The four thematic suits of the Minor Arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Structure, connectivity, relationships.
    Networks,
    /// Dynamics, causality, timing.
    Events,
    /// Agency, coordination, intelligence.
    Agents,
    /// Constraints, allocation, flow.
    Resources,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Self::Networks, Self::Events, Self::Agents, Self::Resources];

    /// Parse a suit from a user-supplied string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "networks" | "network" => Some(Self::Networks),
            "events" | "event" => Some(Self::Events),
            "agents" | "agent" => Some(Self::Agents),
            "resources" | "resource" => Some(Self::Resources),
            _ => None,
        }
    }

    /// Lower-case name used in file names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Networks => "networks",
            Self::Events => "events",
            Self::Agents => "agents",
            Self::Resources => "resources",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Networks => write!(f, "Networks"),
            Self::Events => write!(f, "Events"),
            Self::Agents => write!(f, "Agents"),
            Self::Resources => write!(f, "Resources"),
        }
    }
}

/// Where a card sits in the deck: a Major archetype, or a ranked suit card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arcana {
    /// One of the 22 universal archetypes. Major cards carry no rank.
    Major,
    /// A suit card ranked 1 (Ace) through 14 (King).
    Minor {
        /// The card's suit.
        suit: Suit,
        /// Rank within the suit, 1..=14.
        rank: u8,
    },
}

/// Highest rank in a suit.
pub const MAX_RANK: u8 = 14;

const RANK_NAMES: [&str; MAX_RANK as usize] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

/// Traditional name of a Minor Arcana rank (1 = Ace, 14 = King).
pub fn rank_name(rank: u8) -> Option<&'static str> {
    rank.checked_sub(1)
        .and_then(|i| RANK_NAMES.get(usize::from(i)))
        .copied()
}

/// An immutable card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique display name, e.g. "The Cascade" or "Ace of Networks".
    pub name: String,
    /// Major or Minor placement.
    pub arcana: Arcana,
    /// The systems pattern the card names.
    pub pattern: String,
    /// Reflective questions, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<String>,
    /// Cross-domain examples, each usually "Domain: description".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Ways the pattern goes wrong.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failure_modes: Vec<String>,
    /// Where the pattern shows up at scale.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emergence_patterns: Vec<String>,
    /// Short situational context line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Card {
    /// Create a card with only a name, placement and pattern.
    pub fn new(name: impl Into<String>, arcana: Arcana, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arcana,
            pattern: pattern.into(),
            questions: Vec::new(),
            examples: Vec::new(),
            failure_modes: Vec::new(),
            emergence_patterns: Vec::new(),
            context: None,
        }
    }

    /// Whether this is a Major Arcana card.
    pub fn is_major(&self) -> bool {
        matches!(self.arcana, Arcana::Major)
    }

    /// The suit, or `None` for Major cards.
    pub fn suit(&self) -> Option<Suit> {
        match self.arcana {
            Arcana::Major => None,
            Arcana::Minor { suit, .. } => Some(suit),
        }
    }

    /// The rank, or `None` for Major cards.
    pub fn rank(&self) -> Option<u8> {
        match self.arcana {
            Arcana::Major => None,
            Arcana::Minor { rank, .. } => Some(rank),
        }
    }

    /// Category label: "Major Arcana" or the suit name.
    pub fn category(&self) -> String {
        match self.arcana {
            Arcana::Major => "Major Arcana".to_string(),
            Arcana::Minor { suit, .. } => suit.to_string(),
        }
    }
}
