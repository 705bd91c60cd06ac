//! KP cusps, body sub-lords and significators.
//!
//! Everything here is read under the KP ayanamsa in a single provider
//! session: cusps, bodies, the ascendant and the Moon seed for the dasha.

use kundali_base::dasha::{BirthBalance, vimshottari_birth_balance};
use kundali_base::{
    ALL_CHART_POINTS, ALL_GRAHAS, AyanamshaSystem, ChartPoint, CurrentDasha, CuspSubLord, Graha,
    Rashi, cusp_sub_lord, current_dasha, kp_lords, kp_significators, normalize_360, round_to,
    whole_sign_house,
};
use kundali_time::Instant;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::engine::Engine;
use crate::error::EngineError;
use crate::provider::{ALL_BODIES, Body};

pub const PLACIDUS: &str = "Placidus";

/// Star and sub lords of one chart body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpPlanet {
    pub point: ChartPoint,
    /// Sidereal longitude, rounded to 4 decimals.
    pub longitude: f64,
    pub sign: Rashi,
    /// Whole-sign house from the KP ascendant.
    pub house: u8,
    pub star_lord: Graha,
    pub sub_lord: Graha,
    /// Four-level significations, sorted house numbers.
    pub significators: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpData {
    pub instant: Instant,
    pub ayanamsa: AyanamshaSystem,
    pub ayanamsa_name: String,
    pub ayanamsa_deg: f64,
    pub house_system: String,
    pub cusps: Vec<CuspSubLord>,
    /// Sun .. Ketu, then Ascendant.
    pub planets: Vec<KpPlanet>,
    pub birth_balance: BirthBalance,
    pub current: CurrentDasha,
}

impl KpData {
    pub fn planet(&self, point: ChartPoint) -> Option<&KpPlanet> {
        self.planets.iter().find(|p| p.point == point)
    }

    /// Cusp of house 1..=12.
    pub fn cusp(&self, house: u8) -> Option<&CuspSubLord> {
        self.cusps.iter().find(|c| c.house == house)
    }
}

/// Raw KP readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpReadings {
    pub ayanamsa_deg: f64,
    pub tropical: [f64; 8],
    pub ascendant_tropical: f64,
    pub cusps_tropical: [f64; 12],
}

/// Build KP data from raw readings. Pure.
///
/// `target_jd` selects the instant for the current-dasha drill-down;
/// `None` uses the birth instant.
pub fn assemble_kp(
    instant: Instant,
    system: AyanamshaSystem,
    readings: &KpReadings,
    target_jd: Option<f64>,
) -> Result<KpData, EngineError> {
    let aya = readings.ayanamsa_deg;
    let sidereal = |tropical: f64| round_to(normalize_360(tropical - aya), 4);

    let mut cusps = Vec::with_capacity(12);
    for (i, c) in readings.cusps_tropical.iter().enumerate() {
        cusps.push(cusp_sub_lord(i as u8 + 1, c - aya)?);
    }

    let mut longitudes = [0.0; 10];
    for body in ALL_BODIES {
        longitudes[body.index()] = sidereal(readings.tropical[body.index()]);
    }
    longitudes[Graha::Ketu.index() as usize] =
        round_to(normalize_360(longitudes[Graha::Rahu.index() as usize] + 180.0), 4);
    longitudes[9] = sidereal(readings.ascendant_tropical);

    let sign_of = |lon: f64| Rashi::from_index(((lon / 30.0).floor() as u8).min(11));
    let ascendant = sign_of(longitudes[9]);
    let graha_houses =
        ALL_GRAHAS.map(|g| whole_sign_house(sign_of(longitudes[g.index() as usize]), ascendant));

    let mut planets = Vec::with_capacity(ALL_CHART_POINTS.len());
    for (point, lon) in ALL_CHART_POINTS.iter().zip(longitudes) {
        let lords = kp_lords(lon)?;
        let sign = sign_of(lon);
        planets.push(KpPlanet {
            point: *point,
            longitude: lon,
            sign,
            house: whole_sign_house(sign, ascendant),
            star_lord: lords.star_lord,
            sub_lord: lords.sub_lord,
            significators: kp_significators(*point, lords.star_lord, ascendant, &graha_houses),
        });
    }

    let moon = normalize_360(readings.tropical[Body::Moon.index()] - aya);
    let birth_balance = vimshottari_birth_balance(moon)?;
    let current = current_dasha(moon, instant.jd_ut, target_jd.unwrap_or(instant.jd_ut))?;

    Ok(KpData {
        instant,
        ayanamsa: system,
        ayanamsa_name: system.name().to_string(),
        ayanamsa_deg: round_to(aya, 4),
        house_system: PLACIDUS.to_string(),
        cusps,
        planets,
        birth_balance,
        current,
    })
}

/// Read every KP input under `mode` in one provider session.
pub fn read_kp(
    engine: &Engine,
    instant: &Instant,
    mode: AyanamshaSystem,
) -> Result<KpReadings, EngineError> {
    let session = engine.session(mode);
    Ok(KpReadings {
        ayanamsa_deg: session.ayanamsa_deg(instant.jd_ut)?,
        tropical: session.all_bodies(instant.jd_ut)?,
        ascendant_tropical: session.ascendant(instant)?,
        cusps_tropical: session.house_cusps(instant)?,
    })
}

/// KP cusps, sub-lords, significators and dasha for a birth instant.
pub fn kp_data(
    engine: &Engine,
    instant: Instant,
    target_jd: Option<f64>,
) -> Result<KpData, EngineError> {
    let mode = engine.config().kp_ayanamsa;
    let _span = info_span!("kp_data", jd_ut = instant.jd_ut).entered();
    let readings = read_kp(engine, &instant, mode)?;
    let data = assemble_kp(instant, mode, &readings, target_jd)?;
    info!(
        ayanamsa = data.ayanamsa_name.as_str(),
        birth_lord = data.birth_balance.lord.english_name(),
        "kp data generated"
    );
    Ok(data)
}
