//! Jaimini chara karaka ranking.
//!
//! Candidates are ordered by degree within sign (descending), ties broken
//! by English planet name (ascending), and handed roles in rank order.
//! There are eight role labels but only seven planets take part, so
//! the last role has no holder.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;

/// The eight chara karaka roles in assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KarakaRole {
    Atmakaraka,
    Amatyakaraka,
    Bhratrikaraka,
    Matrikaraka,
    Putrakaraka,
    Gnatikaraka,
    Darakaraka,
    Pitrikaraka,
}

pub const ALL_KARAKA_ROLES: [KarakaRole; 8] = [
    KarakaRole::Atmakaraka,
    KarakaRole::Amatyakaraka,
    KarakaRole::Bhratrikaraka,
    KarakaRole::Matrikaraka,
    KarakaRole::Putrakaraka,
    KarakaRole::Gnatikaraka,
    KarakaRole::Darakaraka,
    KarakaRole::Pitrikaraka,
];

impl KarakaRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Atmakaraka => "Atmakaraka",
            Self::Amatyakaraka => "Amatyakaraka",
            Self::Bhratrikaraka => "Bhratrikaraka",
            Self::Matrikaraka => "Matrikaraka",
            Self::Putrakaraka => "Putrakaraka",
            Self::Gnatikaraka => "Gnatikaraka",
            Self::Darakaraka => "Darakaraka",
            Self::Pitrikaraka => "Pitrikaraka",
        }
    }

    /// Short label used in chart tables ("AK", "AmK", ...).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Atmakaraka => "AK",
            Self::Amatyakaraka => "AmK",
            Self::Bhratrikaraka => "BK",
            Self::Matrikaraka => "MK",
            Self::Putrakaraka => "PK",
            Self::Gnatikaraka => "GK",
            Self::Darakaraka => "DK",
            Self::Pitrikaraka => "PiK",
        }
    }
}

/// Ranked karaka roles for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KarakaAssignment {
    ranking: Vec<(Graha, KarakaRole)>,
}

impl KarakaAssignment {
    /// `(graha, role)` pairs in rank order (Atmakaraka first).
    pub fn ranking(&self) -> &[(Graha, KarakaRole)] {
        &self.ranking
    }

    pub fn role_of(&self, graha: Graha) -> Option<KarakaRole> {
        self.ranking
            .iter()
            .find(|(g, _)| *g == graha)
            .map(|(_, r)| *r)
    }

    /// Holder of a role; `None` when fewer candidates than roles were ranked.
    pub fn holder(&self, role: KarakaRole) -> Option<Graha> {
        self.ranking
            .iter()
            .find(|(_, r)| *r == role)
            .map(|(g, _)| *g)
    }
}

/// Rank candidates `(graha, degree_in_sign)` into karaka roles.
pub fn rank_karakas(candidates: &[(Graha, f64)]) -> Result<KarakaAssignment, VedicError> {
    if let Some((_, bad)) = candidates.iter().find(|(_, d)| !d.is_finite()) {
        return Err(VedicError::InvalidLongitude(*bad));
    }
    let mut ordered = candidates.to_vec();
    ordered.sort_by(|(ga, da), (gb, db)| match db.total_cmp(da) {
        Ordering::Equal => ga.english_name().cmp(gb.english_name()),
        other => other,
    });
    let ranking = ordered
        .into_iter()
        .zip(ALL_KARAKA_ROLES)
        .map(|((g, _), role)| (g, role))
        .collect();
    Ok(KarakaAssignment { ranking })
}
