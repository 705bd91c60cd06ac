//! Sidereal position resolver and whole-sign houses.
//!
//! Tropical longitude minus ayanamsa, normalized, split into sign and
//! degree, then rounded to display precision. A degree that would round up
//! to 30 stays in its sign (59.999 is Vrishabha 29.99, never 30.00).

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::{Dms, Rashi, deg_to_dms};
use crate::util::{normalize_360, ordinal, round_to};

/// Decimal places used for chart positions unless configured otherwise.
pub const DEFAULT_PRECISION: u32 = 2;

/// A sign plus the degree inside it, `degree_in_sign` in [0, 30).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiderealPosition {
    pub sign: Rashi,
    pub degree_in_sign: f64,
}

impl SiderealPosition {
    /// Absolute sidereal longitude (sign * 30 + degree).
    pub fn longitude(&self) -> f64 {
        self.sign.index() as f64 * 30.0 + self.degree_in_sign
    }

    pub fn dms(&self) -> Dms {
        deg_to_dms(self.degree_in_sign)
    }

    /// Whole-sign house of this position for an ascendant sign.
    pub fn house_from(&self, ascendant: Rashi) -> u8 {
        whole_sign_house(self.sign, ascendant)
    }
}

/// Resolve a tropical longitude against an ayanamsa offset.
pub fn resolve_sidereal(
    tropical_deg: f64,
    ayanamsa_deg: f64,
    precision: u32,
) -> Result<SiderealPosition, VedicError> {
    if !ayanamsa_deg.is_finite() {
        return Err(VedicError::InvalidLongitude(ayanamsa_deg));
    }
    position_from_longitude(tropical_deg - ayanamsa_deg, precision)
}

/// Split an already-sidereal longitude into sign and degree.
pub fn position_from_longitude(
    sidereal_deg: f64,
    precision: u32,
) -> Result<SiderealPosition, VedicError> {
    if !sidereal_deg.is_finite() {
        return Err(VedicError::InvalidLongitude(sidereal_deg));
    }
    let v = normalize_360(sidereal_deg);
    let sign_idx = ((v / 30.0).floor() as u8).min(11);
    // Rounding may reach the next sign boundary (29.999 -> 30.00); the
    // position stays in its sign at the largest representable degree.
    let ceiling = 30.0 - 10f64.powi(-(precision as i32));
    let degree = round_to(v, precision) - sign_idx as f64 * 30.0;
    let degree = round_to(degree, precision).clamp(0.0, ceiling);
    Ok(SiderealPosition {
        sign: Rashi::from_index(sign_idx),
        degree_in_sign: degree,
    })
}

/// Whole-sign house (1..=12) of `sign` counted from the ascendant's sign.
pub const fn whole_sign_house(sign: Rashi, ascendant: Rashi) -> u8 {
    ((sign.index() + 12 - ascendant.index()) % 12) + 1
}

/// The sign occupying `house` (1..=12) for an ascendant sign.
pub const fn sign_of_house(ascendant: Rashi, house: u8) -> Rashi {
    ascendant.add((house + 11) % 12)
}

/// Houses (sorted, 1..=12) whose signs `graha` rules.
pub fn houses_ruled(graha: Graha, ascendant: Rashi) -> Vec<u8> {
    let mut houses: Vec<u8> = graha
        .owned_rashis()
        .iter()
        .map(|r| whole_sign_house(*r, ascendant))
        .collect();
    houses.sort_unstable();
    houses
}

/// Render ruled houses as `"1st, 8th"`, or `"-"` when there are none.
pub fn format_houses(houses: &[u8]) -> String {
    if houses.is_empty() {
        return "-".to_string();
    }
    houses
        .iter()
        .map(|h| ordinal(*h))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_ayanamsa() {
        // 280.5 - 23.85 = 256.65 -> Dhanu 16.65
        let p = resolve_sidereal(280.5, 23.85, 2).unwrap();
        assert_eq!(p.sign, Rashi::Dhanu);
        assert!((p.degree_in_sign - 16.65).abs() < 1e-9);
    }

    #[test]
    fn rounding_at_boundary_clamps_inside_sign() {
        // 59.996 rounds to 60.00; stays Vrishabha at 29.99, never 30.00
        let p = position_from_longitude(59.996, 2).unwrap();
        assert_eq!(p.sign, Rashi::Vrishabha);
        assert!((p.degree_in_sign - 29.99).abs() < 1e-12);
    }

    #[test]
    fn full_circle_stays_in_meena() {
        let p = position_from_longitude(359.999, 2).unwrap();
        assert_eq!(p.sign, Rashi::Meena);
        assert!((p.degree_in_sign - 29.99).abs() < 1e-12);
    }

    #[test]
    fn higher_precision_ceiling() {
        let p = position_from_longitude(29.99999, 4).unwrap();
        assert_eq!(p.sign, Rashi::Mesha);
        assert!((p.degree_in_sign - 29.9999).abs() < 1e-12);
    }

    #[test]
    fn negative_wraps() {
        let p = resolve_sidereal(10.0, 20.0, 2).unwrap();
        assert_eq!(p.sign, Rashi::Meena);
        assert!((p.degree_in_sign - 20.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_rejected() {
        assert!(matches!(
            resolve_sidereal(f64::NAN, 23.0, 2),
            Err(VedicError::InvalidLongitude(_))
        ));
        assert!(matches!(
            resolve_sidereal(100.0, f64::INFINITY, 2),
            Err(VedicError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn degree_always_below_thirty() {
        let mut lon = -720.0;
        while lon < 720.0 {
            let p = position_from_longitude(lon, 2).unwrap();
            assert!(p.degree_in_sign >= 0.0 && p.degree_in_sign < 30.0, "lon={lon}");
            lon += 0.0137;
        }
    }

    #[test]
    fn house_counts_from_ascendant() {
        assert_eq!(whole_sign_house(Rashi::Karka, Rashi::Karka), 1);
        assert_eq!(whole_sign_house(Rashi::Mesha, Rashi::Karka), 10);
        assert_eq!(whole_sign_house(Rashi::Mithuna, Rashi::Karka), 12);
        assert_eq!(sign_of_house(Rashi::Karka, 10), Rashi::Mesha);
        assert_eq!(sign_of_house(Rashi::Karka, 1), Rashi::Karka);
    }

    #[test]
    fn ruled_houses_for_mars_from_aries() {
        // Mars rules Mesha (1st) and Vrischika (8th)
        let h = houses_ruled(Graha::Mangal, Rashi::Mesha);
        assert_eq!(h, vec![1, 8]);
        assert_eq!(format_houses(&h), "1st, 8th");
        assert_eq!(format_houses(&houses_ruled(Graha::Rahu, Rashi::Mesha)), "-");
    }
}
