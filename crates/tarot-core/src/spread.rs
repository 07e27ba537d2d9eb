//! Named spreads: fixed-size draws with positional labels.

use crate::catalog::DeckKind;
use crate::error::{TarotError, TarotResult};

/// One slot in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Upper-case label, e.g. "CONTEXT".
    pub label: &'static str,
    /// The question the card in this slot answers.
    pub question: &'static str,
}

/// A named layout. Its size is the number of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    /// Lookup key, e.g. "three".
    pub key: &'static str,
    /// Menu name, e.g. "Three Card".
    pub name: &'static str,
    /// Short menu description.
    pub summary: &'static str,
    /// Heading printed above the cards.
    pub heading: &'static str,
    /// Slots in draw order.
    pub positions: &'static [Position],
}

impl Spread {
    /// Number of cards the spread draws.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Find a spread by key for the given deck (case-insensitive).
    ///
    /// Accepts `three_card` as well as `three`.
    pub fn find(kind: DeckKind, key: &str) -> TarotResult<&'static Spread> {
        let wanted = key.trim().to_lowercase().replace('-', "_");
        let wanted = match wanted.as_str() {
            "three_card" => "three",
            other => other,
        };
        spreads(kind)
            .iter()
            .find(|s| s.key == wanted)
            .ok_or_else(|| TarotError::UnknownSpread(key.to_string()))
    }
}

const fn pos(label: &'static str, question: &'static str) -> Position {
    Position { label, question }
}

const SYSTEMS_SPREADS: &[Spread] = &[
    Spread {
        key: "single",
        name: "Single Card",
        summary: "Quick perspective",
        heading: "SINGLE CARD: What perspective do I need now?",
        positions: &[pos("PERSPECTIVE", "What perspective do I need now?")],
    },
    Spread {
        key: "three",
        name: "Three Card",
        summary: "Context/Challenge/Opportunity",
        heading: "THREE CARD READING: Context / Challenge / Opportunity",
        positions: &[
            pos("CONTEXT", "What system am I in?"),
            pos("CHALLENGE", "What constraint am I facing?"),
            pos("OPPORTUNITY", "What leverage point exists?"),
        ],
    },
    Spread {
        key: "decision",
        name: "Decision",
        summary: "Comparing two paths",
        heading: "DECISION READING: Current / Path A / Path B / Integration",
        positions: &[
            pos("CURRENT STATE", "Where am I now?"),
            pos("PATH A", "First option's dynamics"),
            pos("PATH B", "Second option's dynamics"),
            pos("INTEGRATION", "What pattern connects them?"),
        ],
    },
    Spread {
        key: "system",
        name: "System Analysis",
        summary: "Structure/Dynamics/Agents/Resources/Emergence",
        heading: "SYSTEM ANALYSIS: Structure / Dynamics / Agents / Resources / Emergence",
        positions: &[
            pos("STRUCTURE", "What's the network topology?"),
            pos("DYNAMICS", "What events are unfolding?"),
            pos("AGENTS", "Who has agency here?"),
            pos("RESOURCES", "What's scarce or abundant?"),
            pos("EMERGENCE", "What's trying to emerge?"),
        ],
    },
    Spread {
        key: "threat",
        name: "Threat Assessment",
        summary: "Full risk analysis",
        heading: "THREAT ASSESSMENT: Primary / Cascade / Resilience / Blind Spot / Response / Trajectory",
        positions: &[
            pos("PRIMARY THREAT", "What matters most?"),
            pos("CASCADE RISK", "What could amplify this?"),
            pos("RESILIENCE", "What provides stability?"),
            pos("BLIND SPOT", "What am I missing?"),
            pos("RESPONSE", "What action pattern fits?"),
            pos("TRAJECTORY", "What's the long-term pattern?"),
        ],
    },
];

const RISK_SPREADS: &[Spread] = &[
    Spread {
        key: "single",
        name: "Single Card",
        summary: "Quick perspective",
        heading: "SINGLE CARD READING: What perspective do I need right now?",
        positions: &[pos("PERSPECTIVE", "What perspective do I need right now?")],
    },
    Spread {
        key: "three",
        name: "Three Card",
        summary: "Context/Challenge/Opportunity",
        heading: "THREE CARD READING: Context / Challenge / Opportunity",
        positions: &[
            pos("CONTEXT", "What system am I operating in?"),
            pos("CHALLENGE", "What constraint or failure mode am I facing?"),
            pos("OPPORTUNITY", "What emergence or leverage point exists?"),
        ],
    },
    Spread {
        key: "decision",
        name: "Decision Reading",
        summary: "Comparing two paths",
        heading: "DECISION READING: Current State / Path A / Path B / Synthesis",
        positions: &[
            pos("CURRENT STATE", "Where am I now?"),
            pos("PATH A", "First option's dynamics"),
            pos("PATH B", "Second option's dynamics"),
            pos("SYNTHESIS", "What pattern connects them?"),
        ],
    },
    Spread {
        key: "archipelago",
        name: "Archipelago Reading",
        summary: "Which island wants attention?",
        heading: "ARCHIPELAGO READING: Which island wants attention?",
        positions: &[
            pos("ISLAND CALLING", "What wants attention now?"),
            pos("CURRENT ENERGY", "What fuels this work?"),
            pos("OBSTACLE", "What blocks progress?"),
            pos("GIFT", "What emerges if you engage?"),
            pos("INTEGRATION", "How does this connect to other islands?"),
        ],
    },
    Spread {
        key: "strategy",
        name: "Strategy Reading",
        summary: "Threat assessment & strategy",
        heading: "STRATEGY READING: Threat Assessment & Strategic Response",
        positions: &[
            pos("PRIMARY THREAT", "What system stress matters most?"),
            pos("CASCADE RISK", "What could amplify this?"),
            pos("RESILIENCE FACTOR", "What provides stability?"),
            pos("BLIND SPOT", "What am I missing?"),
            pos("STRATEGIC RESPONSE", "What action pattern fits?"),
            pos("LONG-TERM PATTERN", "What's the trajectory?"),
        ],
    },
];

/// The spreads offered for a deck, in menu order.
pub fn spreads(kind: DeckKind) -> &'static [Spread] {
    match kind {
        DeckKind::Systems => SYSTEMS_SPREADS,
        DeckKind::Risk => RISK_SPREADS,
    }
}
