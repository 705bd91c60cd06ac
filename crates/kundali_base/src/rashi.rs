//! Rashi (zodiac sign) classification and DMS formatting.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Signs carry two categorizations
//! used by the divisional charts: modality (movable/fixed/dual, `index % 3`)
//! and element (fire/earth/air/water, `index % 4`).

use serde::{Deserialize, Serialize};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Movable / fixed / dual classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

/// Fire / earth / air / water classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Three-letter code used in compact payloads.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mesha => "Ari",
            Self::Vrishabha => "Tau",
            Self::Mithuna => "Gem",
            Self::Karka => "Can",
            Self::Simha => "Leo",
            Self::Kanya => "Vir",
            Self::Tula => "Lib",
            Self::Vrischika => "Sco",
            Self::Dhanu => "Sag",
            Self::Makara => "Cap",
            Self::Kumbha => "Aqu",
            Self::Meena => "Pis",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// The sign `offset` places forward (0 = same sign).
    pub const fn add(self, offset: u8) -> Rashi {
        Self::from_index(((self.index() as u16 + offset as u16) % 12) as u8)
    }

    /// Odd signs in 1-based counting: Mesha, Mithuna, Simha ...
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Case-insensitive lookup by Sanskrit name, English name, or code.
    pub fn from_name(name: &str) -> Option<Rashi> {
        let name = name.trim();
        ALL_RASHIS.into_iter().find(|r| {
            r.name().eq_ignore_ascii_case(name)
                || r.western_name().eq_ignore_ascii_case(name)
                || r.code().eq_ignore_ascii_case(name)
        })
    }
}

/// An angle split into degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Fractional arc-seconds in [0, 60).
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Split an angle into degrees, minutes and seconds. The sign is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let arcsec = deg.abs() * 3600.0;
    let whole_minutes = (arcsec / 60.0).floor();
    Dms {
        degrees: (whole_minutes / 60.0).floor() as u16,
        minutes: (whole_minutes % 60.0) as u8,
        seconds: arcsec - whole_minutes * 60.0,
    }
}
