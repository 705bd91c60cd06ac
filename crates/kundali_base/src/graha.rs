//! Vedic planet (graha) enum and rashi lordship.
//!
//! The 9 grahas plus the lordship table (each sign has one traditional
//! ruling planet; the nodes rule no sign).

use serde::{Deserialize, Serialize};

use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter code used in compact payloads.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Surya => "Su",
            Self::Chandra => "Mo",
            Self::Mangal => "Ma",
            Self::Buddh => "Me",
            Self::Guru => "Ju",
            Self::Shukra => "Ve",
            Self::Shani => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Rashis ruled by this graha (empty for the nodes).
    pub const fn owned_rashis(self) -> &'static [Rashi] {
        match self {
            Self::Surya => &[Rashi::Simha],
            Self::Chandra => &[Rashi::Karka],
            Self::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
            Self::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
            Self::Guru => &[Rashi::Dhanu, Rashi::Meena],
            Self::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
            Self::Shani => &[Rashi::Makara, Rashi::Kumbha],
            Self::Rahu | Self::Ketu => &[],
        }
    }

    /// Case-insensitive lookup by Sanskrit name, English name, or code.
    pub fn from_name(name: &str) -> Option<Graha> {
        let name = name.trim();
        ALL_GRAHAS.into_iter().find(|g| {
            g.name().eq_ignore_ascii_case(name)
                || g.english_name().eq_ignore_ascii_case(name)
                || g.code().eq_ignore_ascii_case(name)
        })
    }
}

/// One of the ten chart points: the nine grahas plus the ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartPoint {
    Graha(Graha),
    Ascendant,
}

/// The ten chart points in output order (Sun .. Ketu, then Ascendant).
pub const ALL_CHART_POINTS: [ChartPoint; 10] = [
    ChartPoint::Graha(Graha::Surya),
    ChartPoint::Graha(Graha::Chandra),
    ChartPoint::Graha(Graha::Mangal),
    ChartPoint::Graha(Graha::Buddh),
    ChartPoint::Graha(Graha::Guru),
    ChartPoint::Graha(Graha::Shukra),
    ChartPoint::Graha(Graha::Shani),
    ChartPoint::Graha(Graha::Rahu),
    ChartPoint::Graha(Graha::Ketu),
    ChartPoint::Ascendant,
];

impl ChartPoint {
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Ascendant => "Ascendant",
        }
    }

    /// Compact code: `Su`, `Mo`, ... `Ke`, `Asc`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Graha(g) => g.code(),
            Self::Ascendant => "Asc",
        }
    }

    /// Lower-case key used in serialized charts (`"sun"`, `"ascendant"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Graha(Graha::Surya) => "sun",
            Self::Graha(Graha::Chandra) => "moon",
            Self::Graha(Graha::Mangal) => "mars",
            Self::Graha(Graha::Buddh) => "mercury",
            Self::Graha(Graha::Guru) => "jupiter",
            Self::Graha(Graha::Shukra) => "venus",
            Self::Graha(Graha::Shani) => "saturn",
            Self::Graha(Graha::Rahu) => "rahu",
            Self::Graha(Graha::Ketu) => "ketu",
            Self::Ascendant => "ascendant",
        }
    }

    pub const fn graha(self) -> Option<Graha> {
        match self {
            Self::Graha(g) => Some(g),
            Self::Ascendant => None,
        }
    }

    pub fn from_name(name: &str) -> Option<ChartPoint> {
        let name = name.trim();
        if ["ascendant", "asc", "lagna"]
            .iter()
            .any(|a| a.eq_ignore_ascii_case(name))
        {
            return Some(Self::Ascendant);
        }
        Graha::from_name(name).map(Self::Graha)
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the lord of a rashi by 0-based index.
///
/// Returns None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    if rashi_index >= 12 {
        return None;
    }
    Some(rashi_lord(ALL_RASHIS[rashi_index as usize]))
}

/// Compute the n-th rashi from a given rashi (0-based indices, 1-based offset).
///
/// `nth_rashi_from(0, 1)` = 0 (same rashi), `nth_rashi_from(0, 2)` = 1 (next rashi).
pub fn nth_rashi_from(rashi_index: u8, offset: u8) -> u8 {
    ((rashi_index as u16 + offset as u16 + 11) % 12) as u8
}
