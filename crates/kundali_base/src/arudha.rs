//! Arudha Pada (house image) state machine.
//!
//! For house H whose lord sits in house L, the distance is
//! `D = (L - H) mod 12`. Three states:
//! - `D == 0`, lord in its own house: Arudha is the 10th from H.
//! - `D == 6`, lord in the 7th from H: Arudha is the 4th from H.
//! - anything else: Arudha is house `H + D`, wrapped into 1..=12.

use serde::{Deserialize, Serialize};

use crate::graha::rashi_lord;
use crate::rashi::Rashi;
use crate::sidereal::{sign_of_house, whole_sign_house};

/// The 12 Arudha Padas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArudhaPada {
    ArudhaLagna, // A1/AL
    DhanaPada,   // A2
    VikramaPada, // A3
    MatriPada,   // A4
    MantraPada,  // A5
    RogaPada,    // A6
    DaraPada,    // A7
    MrityuPada,  // A8
    PitriPada,   // A9
    RajyaPada,   // A10
    LabhaPada,   // A11
    Upapada,     // A12/UL
}

/// All 12 arudha padas in order (A1 through A12).
pub const ALL_ARUDHA_PADAS: [ArudhaPada; 12] = [
    ArudhaPada::ArudhaLagna,
    ArudhaPada::DhanaPada,
    ArudhaPada::VikramaPada,
    ArudhaPada::MatriPada,
    ArudhaPada::MantraPada,
    ArudhaPada::RogaPada,
    ArudhaPada::DaraPada,
    ArudhaPada::MrityuPada,
    ArudhaPada::PitriPada,
    ArudhaPada::RajyaPada,
    ArudhaPada::LabhaPada,
    ArudhaPada::Upapada,
];

impl ArudhaPada {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArudhaLagna => "Arudha Lagna",
            Self::DhanaPada => "Dhana Pada",
            Self::VikramaPada => "Vikrama Pada",
            Self::MatriPada => "Matri Pada",
            Self::MantraPada => "Mantra Pada",
            Self::RogaPada => "Roga Pada",
            Self::DaraPada => "Dara Pada",
            Self::MrityuPada => "Mrityu Pada",
            Self::PitriPada => "Pitri Pada",
            Self::RajyaPada => "Rajya Pada",
            Self::LabhaPada => "Labha Pada",
            Self::Upapada => "Upapada",
        }
    }

    /// 0-based index (0=A1, 11=A12).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// House whose image this pada is (1-12).
    pub const fn bhava_number(self) -> u8 {
        self.index() + 1
    }
}

/// Which branch of the state machine produced an Arudha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArudhaRule {
    /// General case: `H + D`.
    Direct,
    /// `D == 0`: 10th from H.
    LordInOwnHouse,
    /// `D == 6`: 4th from H.
    LordInSeventh,
}

/// Result of one Arudha transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArudhaOutcome {
    /// Arudha house (1-12).
    pub house: u8,
    /// Raw distance `(lord_house - house) mod 12`.
    pub distance: u8,
    pub rule: ArudhaRule,
}

/// Wrap any house number into 1..=12 (0 is the 12th).
const fn wrap_house(h: u8) -> u8 {
    ((h as u16 + 11) % 12 + 1) as u8
}

/// The `n`-th house counted from `house` (n = 1 is `house` itself).
const fn nth_house_from(house: u8, n: u8) -> u8 {
    wrap_house(house + n - 1)
}

/// Arudha of `house` given the house its lord occupies. Total for any input.
pub const fn arudha_house(house: u8, lord_house: u8) -> ArudhaOutcome {
    let house = wrap_house(house);
    let lord_house = wrap_house(lord_house);
    let distance = (lord_house + 12 - house) % 12;
    match distance {
        0 => ArudhaOutcome {
            house: nth_house_from(house, 10),
            distance,
            rule: ArudhaRule::LordInOwnHouse,
        },
        6 => ArudhaOutcome {
            house: nth_house_from(house, 4),
            distance,
            rule: ArudhaRule::LordInSeventh,
        },
        d => ArudhaOutcome {
            house: wrap_house(house + d),
            distance,
            rule: ArudhaRule::Direct,
        },
    }
}

/// One computed pada placed in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArudhaResult {
    pub pada: ArudhaPada,
    pub house: u8,
    pub sign: Rashi,
    pub rule: ArudhaRule,
}

/// All 12 padas from whole-sign house lords.
///
/// `placements` gives the sign of each graha, indexed by `Graha::index`.
pub fn all_arudha_padas(ascendant: Rashi, placements: &[Rashi; 9]) -> [ArudhaResult; 12] {
    ALL_ARUDHA_PADAS.map(|pada| {
        let house = pada.bhava_number();
        let lord = rashi_lord(sign_of_house(ascendant, house));
        let lord_house = whole_sign_house(placements[lord.index() as usize], ascendant);
        let outcome = arudha_house(house, lord_house);
        ArudhaResult {
            pada,
            house: outcome.house,
            sign: sign_of_house(ascendant, outcome.house),
            rule: outcome.rule,
        }
    })
}
