use tarot_core::Suit;

/// Style sentence shared by every Major Arcana prompt.
pub const MAJOR_STYLE: &str = "mystical tarot card illustration, intricate Art Nouveau border with celestial motifs, \
deep indigo and gold palette, cosmic starfield background, symbolic and archetypal imagery, \
richly detailed, dramatic chiaroscuro lighting";

/// Closing line shared by every prompt.
pub const FORMAT_LINE: &str = "Portrait orientation, tarot card proportions (2:3.5), \
no text except the card title in an elegant serif at the base.";

/// Style sentence for a suit.
pub fn suit_style(suit: Suit) -> &'static str {
    match suit {
        Suit::Networks => {
            "tarot card illustration, ornate geometric border, deep cerulean and cyan palette, \
luminous node-and-thread motifs, structural and crystalline aesthetic, \
glowing filaments on dark ground, detailed linework"
        }
        Suit::Events => {
            "tarot card illustration, dynamic Art Deco border with chevron motifs, \
amber and vermillion palette, kinetic energy, motion lines and lightning, \
dramatic directional lighting, sense of urgency and change"
        }
        Suit::Agents => {
            "tarot card illustration, organic border of intertwining figures and vines, \
emerald and forest-green palette, populated with symbolic figures or creatures, \
warm candlelit atmosphere, sense of intelligence and coordination"
        }
        Suit::Resources => {
            "tarot card illustration, earthy border of roots and mineral veins, \
ochre and burnished-gold palette, tactile materials and flowing substances, \
rich textures of wood, stone, water, and soil, abundance or scarcity made visible"
        }
    }
}

/// Compositional cue for a Minor Arcana rank, or `None` outside 1..=14.
pub fn rank_cue(rank: u8) -> Option<&'static str> {
    let cue = match rank {
        1 => "a single seed, spark, or origin point — pure potential, void about to bloom",
        2 => "two elements in direct dialogue — a bridge, a handshake, or mirrored forms",
        3 => "three points forming a triangle — stability, redundancy, the first structure",
        4 => "a hub at centre with spokes radiating outward — centrality, hierarchy",
        5 => "fracture lines and diverging paths — tension, breakage, conflict",
        6 => "a web or lattice of equal nodes — distributed resilience, many equal paths",
        7 => "congestion, bottleneck, or overflow — too much pressing through too little",
        8 => "a growing spiral or compounding cascade — scale and network effects",
        9 => "over-abundance or entanglement — complexity at its limit",
        10 => "a completed ring or full circle — maturity, the cycle closed",
        11 => "a youthful or apprentice figure exploring the scene — curiosity, discovery",
        12 => "an armoured or swift figure in motion — defender, executor, quick response",
        13 => "a wise seated figure tending or guiding — nurture, deep understanding",
        14 => "a commanding figure surveying the domain — mastery, strategic overview",
        _ => return None,
    };
    Some(cue)
}
