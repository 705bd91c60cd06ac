//! Krishnamurti Paddhati (KP) star-lord and sub-lord resolution.
//!
//! Each nakshatra is split into 9 unequal subs proportional to the
//! Vimshottari dasha years (Ketu 7, Venus 20, Sun 6, Moon 10, Mars 7,
//! Rahu 18, Jupiter 16, Saturn 19, Mercury 17; total 120), cyclically
//! starting from the nakshatra's own lord.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, ChartPoint, Graha, rashi_lord};
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::Rashi;
use crate::sidereal::sign_of_house;
use crate::util::{normalize_360, round_to};

/// Total length of one Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Vimshottari lords in dasha order with their full periods in years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Slack allowed when comparing a projected position against a sub boundary.
const SUB_BOUNDARY_EPS: f64 = 1e-12;

/// Position of a graha in the Vimshottari sequence (0 = Ketu).
pub const fn vimshottari_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full Vimshottari period of a graha in years.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[vimshottari_position(graha)].1
}

/// The 9 lords starting from `first` and cycling through the sequence.
pub fn vimshottari_cycle_from(first: Graha) -> impl Iterator<Item = (Graha, f64)> {
    let start = vimshottari_position(first);
    (0..9).map(move |i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}

/// Sub-lord for a point that has traversed `fraction` of a nakshatra ruled by
/// `star_lord`.
///
/// The fraction is projected onto the 120-year cycle and located among the
/// subs starting at the star lord.
pub fn sub_lord_from_fraction(star_lord: Graha, fraction: f64) -> Graha {
    let projected = fraction * VIMSHOTTARI_TOTAL_YEARS;
    let mut cumulative = 0.0;
    let mut last = star_lord;
    for (lord, years) in vimshottari_cycle_from(star_lord) {
        if projected < cumulative + years + SUB_BOUNDARY_EPS {
            return lord;
        }
        cumulative += years;
        last = lord;
    }
    last
}

/// Star and sub lords of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpLords {
    pub nakshatra: Nakshatra,
    pub star_lord: Graha,
    pub sub_lord: Graha,
}

/// Resolve the star lord and sub-lord of a sidereal longitude.
pub fn kp_lords(sidereal_lon_deg: f64) -> Result<KpLords, VedicError> {
    let info = nakshatra_from_longitude(sidereal_lon_deg)?;
    let star_lord = info.nakshatra.lord();
    Ok(KpLords {
        nakshatra: info.nakshatra,
        star_lord,
        sub_lord: sub_lord_from_fraction(star_lord, info.elapsed_fraction()),
    })
}

/// One annotated house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuspSubLord {
    /// House number 1..=12.
    pub house: u8,
    pub sign: Rashi,
    /// Sidereal cusp longitude, rounded to 4 decimals.
    pub cusp_degree: f64,
    /// Degree within the sign, rounded to 4 decimals.
    pub degree_in_sign: f64,
    pub star_lord: Graha,
    pub sub_lord: Graha,
}

/// Annotate a sidereal cusp longitude with its sign, star lord and sub-lord.
///
/// Lords are resolved from the rounded cusp degree, so the reported degree
/// and lords always agree.
pub fn cusp_sub_lord(house: u8, sidereal_cusp_deg: f64) -> Result<CuspSubLord, VedicError> {
    if !sidereal_cusp_deg.is_finite() {
        return Err(VedicError::InvalidLongitude(sidereal_cusp_deg));
    }
    let cusp = normalize_360(round_to(normalize_360(sidereal_cusp_deg), 4));
    let sign_idx = ((cusp / 30.0).floor() as u8).min(11);
    let lords = kp_lords(cusp)?;
    Ok(CuspSubLord {
        house,
        sign: Rashi::from_index(sign_idx),
        cusp_degree: cusp,
        degree_in_sign: round_to(cusp - sign_idx as f64 * 30.0, 4),
        star_lord: lords.star_lord,
        sub_lord: lords.sub_lord,
    })
}

// ---------------------------------------------------------------------------
// Significators
// ---------------------------------------------------------------------------

/// Houses a chart point signifies under the four KP levels:
///
/// 1. houses occupied by its star lord
/// 2. the house it occupies
/// 3. houses owned by its star lord
/// 4. houses it owns
///
/// `graha_houses` holds the whole-sign house of each graha in `ALL_GRAHAS`
/// order; house ownership follows the sign on each whole-sign house from
/// `ascendant`. The ascendant always occupies house 1 and owns nothing.
/// Returns house numbers sorted and deduplicated.
pub fn kp_significators(
    point: ChartPoint,
    star_lord: Graha,
    ascendant: Rashi,
    graha_houses: &[u8; 9],
) -> Vec<u8> {
    let mut houses = Vec::with_capacity(8);

    for (g, h) in ALL_GRAHAS.iter().zip(graha_houses) {
        if *g == star_lord && (1..=12).contains(h) {
            houses.push(*h);
        }
    }

    match point {
        ChartPoint::Graha(g) => houses.push(graha_houses[g.index() as usize]),
        ChartPoint::Ascendant => houses.push(1),
    }

    for house in 1..=12u8 {
        let owner = rashi_lord(sign_of_house(ascendant, house));
        if owner == star_lord || point == ChartPoint::Graha(owner) {
            houses.push(house);
        }
    }

    houses.retain(|h| (1..=12).contains(h));
    houses.sort_unstable();
    houses.dedup();
    houses
}
