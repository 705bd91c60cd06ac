//! Birth balance calculation for the Vimshottari dasha.
//!
//! The Moon's position inside its nakshatra decides how much of the first
//! Mahadasha has already elapsed at birth.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::kp::{VIMSHOTTARI_SEQUENCE, vimshottari_position, vimshottari_years};
use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_from_longitude};
use crate::util::normalize_360;

use super::types::DAYS_PER_YEAR;

/// Compute nakshatra birth balance for a nakshatra-based dasha.
///
/// Returns `(nakshatra_index, balance_days, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index (0=Ashwini..26=Revati) of the Moon's nakshatra
/// - `balance_days`: remaining days in the starting graha's period
/// - `elapsed_fraction`: fraction of nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let position_in_nak = lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    let elapsed_fraction = position_in_nak / NAKSHATRA_SPAN_27;
    let balance_days = entry_period_days * (1.0 - elapsed_fraction);
    (nak_idx, balance_days, elapsed_fraction)
}

/// Dasha state at the moment of birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthBalance {
    pub nakshatra_index: u8,
    /// Lord of the Moon's nakshatra and of the first Mahadasha.
    pub lord: Graha,
    /// Full Mahadasha length of `lord` in years.
    pub period_years: f64,
    /// Years of the first Mahadasha remaining after birth.
    pub balance_years: f64,
    /// Fraction of the nakshatra already traversed by the Moon.
    pub elapsed_fraction: f64,
}

impl BirthBalance {
    pub fn balance_days(&self) -> f64 {
        self.balance_years * DAYS_PER_YEAR
    }

    /// Years of the 120-year cycle (counted from the start of Ketu) that
    /// precede birth.
    pub fn cycle_years_before_birth(&self) -> f64 {
        let before: f64 = VIMSHOTTARI_SEQUENCE[..vimshottari_position(self.lord)]
            .iter()
            .map(|(_, y)| y)
            .sum();
        before + self.period_years * self.elapsed_fraction
    }
}

/// Vimshottari birth balance from the Moon's sidereal longitude.
pub fn vimshottari_birth_balance(moon_sidereal_lon: f64) -> Result<BirthBalance, VedicError> {
    let info = nakshatra_from_longitude(moon_sidereal_lon)?;
    let lord = info.nakshatra.lord();
    let period_years = vimshottari_years(lord);
    let (_, balance_days, elapsed_fraction) =
        nakshatra_birth_balance(moon_sidereal_lon, period_years * DAYS_PER_YEAR);
    Ok(BirthBalance {
        nakshatra_index: info.nakshatra_index,
        lord,
        period_years,
        balance_years: balance_days / DAYS_PER_YEAR,
        elapsed_fraction,
    })
}
