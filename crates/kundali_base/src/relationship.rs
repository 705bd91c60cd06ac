//! Planetary relationship and dignity calculator.
//!
//! A planet's standing in the sign it occupies combines two independent
//! relations with that sign's lord:
//! - natural (fixed table, includes rows for the nodes)
//! - temporal (sign distance between the two planets)
//!
//! into one of five compound grades. A planet in a sign it rules is simply
//! in its own sign.

use serde::{Deserialize, Serialize};

use crate::graha::{ALL_GRAHAS, Graha, rashi_lord};
use crate::rashi::Rashi;

// ---------------------------------------------------------------------------
// Natural relationship
// ---------------------------------------------------------------------------

/// Natural relationship of one graha toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaturalRelation {
    Friend,
    Neutral,
    Enemy,
}

impl NaturalRelation {
    const fn score(self) -> i8 {
        match self {
            Self::Friend => 1,
            Self::Neutral => 0,
            Self::Enemy => -1,
        }
    }
}

/// Natural relationship of `graha` toward `other`. Not symmetric in general
/// (Sun is neutral to Mercury, Mercury is friendly to Sun).
pub const fn natural_relation(graha: Graha, other: Graha) -> NaturalRelation {
    use Graha::*;
    use NaturalRelation::*;

    match (graha, other) {
        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemies=Mercury
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        // Mercury: friends=Sun,Venus; enemies=Moon
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        // Rahu behaves like Saturn
        (Rahu, Buddh | Shukra | Shani) => Friend,
        (Rahu, Surya | Chandra | Mangal) => Enemy,

        // Ketu behaves like Mars
        (Ketu, Surya | Chandra | Mangal | Guru) => Friend,
        (Ketu, Buddh) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// Temporal relationship
// ---------------------------------------------------------------------------

/// Temporal relationship from sign placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalRelation {
    Friend,
    Enemy,
}

/// Friend if `other` sits 2nd/3rd/4th/10th/11th/12th from `graha`.
pub const fn temporal_relation(graha_sign: Rashi, other_sign: Rashi) -> TemporalRelation {
    // 0-based offsets 1,2,3,9,10,11; symmetric under negation
    let dist = (other_sign.index() + 12 - graha_sign.index()) % 12;
    match dist {
        1 | 2 | 3 | 9 | 10 | 11 => TemporalRelation::Friend,
        _ => TemporalRelation::Enemy,
    }
}

// ---------------------------------------------------------------------------
// Compound relationship
// ---------------------------------------------------------------------------

/// Five-fold compound relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundRelation {
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
}

impl CompoundRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::GreatFriend => "Great Friend",
            Self::Friend => "Friend",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::GreatEnemy => "Great Enemy",
        }
    }
}

/// Combine natural and temporal relations.
///
/// | natural \ temporal | Friend       | Enemy       |
/// |--------------------|--------------|-------------|
/// | Friend             | Great Friend | Neutral     |
/// | Neutral            | Friend       | Enemy       |
/// | Enemy              | Neutral      | Great Enemy |
pub const fn compound_relation(
    natural: NaturalRelation,
    temporal: TemporalRelation,
) -> CompoundRelation {
    let t = match temporal {
        TemporalRelation::Friend => 1,
        TemporalRelation::Enemy => -1,
    };
    match natural.score() + t {
        2 => CompoundRelation::GreatFriend,
        1 => CompoundRelation::Friend,
        0 => CompoundRelation::Neutral,
        -1 => CompoundRelation::Enemy,
        _ => CompoundRelation::GreatEnemy,
    }
}

/// Standing of a chart body in the sign it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    /// The graha rules the sign it occupies.
    OwnSign,
    /// Compound relationship with the sign's lord.
    Compound(CompoundRelation),
    /// Not a graha (the ascendant).
    NotApplicable,
}

impl Relationship {
    pub const fn name(self) -> &'static str {
        match self {
            Self::OwnSign => "Own Sign",
            Self::Compound(c) => c.name(),
            Self::NotApplicable => "-",
        }
    }
}

/// Relationship of `graha` in `sign`, given where every graha sits.
///
/// `placements` is indexed by [`Graha::index`]. The sign lord is a direct
/// table lookup, so the whole chart costs one pass over the planets.
pub fn sign_relationship(graha: Graha, sign: Rashi, placements: &[Rashi; 9]) -> Relationship {
    let lord = rashi_lord(sign);
    if lord == graha {
        return Relationship::OwnSign;
    }
    let lord_sign = placements[lord.index() as usize];
    let natural = natural_relation(graha, lord);
    let temporal = temporal_relation(lord_sign, sign);
    Relationship::Compound(compound_relation(natural, temporal))
}

/// Relationships for all nine grahas, indexed by [`Graha::index`].
pub fn chart_relationships(placements: &[Rashi; 9]) -> [Relationship; 9] {
    ALL_GRAHAS.map(|g| sign_relationship(g, placements[g.index() as usize], placements))
}
