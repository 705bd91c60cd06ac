//! Natal chart assembly.
//!
//! [`generate_chart`] reads raw longitudes inside one provider session,
//! releases the provider, and hands the readings to [`assemble_chart`],
//! which is a pure function of its inputs.

use kundali_base::{
    ALL_CHART_POINTS, ALL_GRAHAS, ArudhaResult, AyanamshaSystem, ChartPoint, Graha,
    KarakaAssignment, KarakaRole, NakshatraInfo, Rashi, Relationship, SAPTA_GRAHAS,
    ShadbalaBreakdown, ShadbalaInputs, SiderealPosition, all_arudha_padas, all_shadbalas,
    chart_relationships, format_houses, houses_ruled, nakshatra_from_longitude,
    position_from_longitude, rank_karakas, resolve_sidereal, round_to, whole_sign_house,
};
use kundali_time::Instant;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::engine::Engine;
use crate::error::EngineError;

/// House system label for natal and divisional charts.
pub const WHOLE_SIGN: &str = "Whole Sign";

/// Raw provider output for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartReadings {
    pub ayanamsa_deg: f64,
    /// Tropical longitudes in `ALL_BODIES` order.
    pub tropical: [f64; 8],
    pub ascendant_tropical: f64,
}

/// One row of the natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub point: ChartPoint,
    pub position: SiderealPosition,
    /// Whole-sign house, 1..=12.
    pub house: u8,
    /// Houses whose signs this graha rules (empty for nodes and the ascendant).
    pub rules_houses: Vec<u8>,
    pub relationship: Relationship,
    pub karaka: Option<KarakaRole>,
    pub nakshatra: NakshatraInfo,
    /// Absolute sidereal longitude (sign * 30 + degree).
    pub longitude: f64,
}

impl PlanetRecord {
    pub fn name(&self) -> &'static str {
        self.point.english_name()
    }

    pub fn sign_name(&self) -> &'static str {
        self.position.sign.western_name()
    }

    /// Ruled houses as `"1st, 8th"`, or `"-"`.
    pub fn rules_houses_label(&self) -> String {
        format_houses(&self.rules_houses)
    }

    pub fn karaka_label(&self) -> &'static str {
        self.karaka.map_or("-", KarakaRole::name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub ayanamsa: AyanamshaSystem,
    pub ayanamsa_name: String,
    /// Ayanamsa at the chart instant, rounded to 2 decimals.
    pub ayanamsa_deg: f64,
    /// e.g. `"Sidereal (Lahiri)"`.
    pub zodiac: String,
    pub house_system: String,
    pub precision: u32,
}

/// A natal chart: ten records sharing one instant and one ayanamsa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub instant: Instant,
    pub metadata: ChartMetadata,
    records: Vec<PlanetRecord>,
    ascendant: SiderealPosition,
    placements: [Rashi; 9],
    karakas: KarakaAssignment,
}

impl Chart {
    /// Records in chart order: Sun .. Ketu, then Ascendant.
    pub fn records(&self) -> &[PlanetRecord] {
        &self.records
    }

    pub fn record(&self, point: ChartPoint) -> Option<&PlanetRecord> {
        self.records.iter().find(|r| r.point == point)
    }

    pub fn graha(&self, graha: Graha) -> Option<&PlanetRecord> {
        self.record(ChartPoint::Graha(graha))
    }

    pub fn ascendant(&self) -> SiderealPosition {
        self.ascendant
    }

    /// Sign of each graha, indexed by `Graha::index`.
    pub fn graha_placements(&self) -> &[Rashi; 9] {
        &self.placements
    }

    /// Whole-sign house of each graha, indexed by `Graha::index`.
    pub fn graha_houses(&self) -> [u8; 9] {
        self.placements
            .map(|sign| whole_sign_house(sign, self.ascendant.sign))
    }

    pub fn karakas(&self) -> &KarakaAssignment {
        &self.karakas
    }

    pub fn moon_longitude(&self) -> Option<f64> {
        self.graha(Graha::Chandra).map(|r| r.longitude)
    }

    /// Arudha padas A1..A12 from whole-sign house lords.
    pub fn arudha_padas(&self) -> [ArudhaResult; 12] {
        all_arudha_padas(self.ascendant.sign, &self.placements)
    }

    /// Sidereal longitudes of the nine grahas and the ascendant.
    pub fn shadbala_inputs(&self) -> Option<ShadbalaInputs> {
        let mut sidereal_lons = [0.0; 9];
        for g in ALL_GRAHAS {
            sidereal_lons[g.index() as usize] = self.graha(g)?.longitude;
        }
        Some(ShadbalaInputs {
            sidereal_lons,
            ascendant_lon: self.ascendant.longitude(),
        })
    }

    /// Shadbala of the seven sapta grahas in graha order.
    pub fn shadbala(&self) -> Vec<ShadbalaBreakdown> {
        self.shadbala_inputs()
            .map(|inputs| all_shadbalas(&inputs))
            .unwrap_or_default()
    }
}

/// Build a chart from raw readings. Pure.
///
/// Ketu is placed opposite Rahu's rounded position, so the two always
/// read as exact opposites at the chart's precision.
pub fn assemble_chart(
    instant: Instant,
    system: AyanamshaSystem,
    readings: &ChartReadings,
    precision: u32,
) -> Result<Chart, EngineError> {
    let aya = readings.ayanamsa_deg;
    let mut positions = Vec::with_capacity(ALL_CHART_POINTS.len());
    for tropical in readings.tropical {
        positions.push(resolve_sidereal(tropical, aya, precision)?);
    }
    let rahu = positions[Graha::Rahu.index() as usize];
    positions.push(position_from_longitude(rahu.longitude() + 180.0, precision)?);
    let ascendant = resolve_sidereal(readings.ascendant_tropical, aya, precision)?;

    let placements = ALL_GRAHAS.map(|g| positions[g.index() as usize].sign);
    let relationships = chart_relationships(&placements);
    let candidates: Vec<(Graha, f64)> = SAPTA_GRAHAS
        .iter()
        .map(|g| (*g, positions[g.index() as usize].degree_in_sign))
        .collect();
    let karakas = rank_karakas(&candidates)?;

    let mut records = Vec::with_capacity(ALL_CHART_POINTS.len());
    for point in ALL_CHART_POINTS {
        let record = match point {
            ChartPoint::Graha(g) => {
                let position = positions[g.index() as usize];
                PlanetRecord {
                    point,
                    position,
                    house: position.house_from(ascendant.sign),
                    rules_houses: houses_ruled(g, ascendant.sign),
                    relationship: relationships[g.index() as usize],
                    karaka: karakas.role_of(g),
                    nakshatra: nakshatra_from_longitude(position.longitude())?,
                    longitude: position.longitude(),
                }
            }
            ChartPoint::Ascendant => PlanetRecord {
                point,
                position: ascendant,
                house: 1,
                rules_houses: Vec::new(),
                relationship: Relationship::NotApplicable,
                karaka: None,
                nakshatra: nakshatra_from_longitude(ascendant.longitude())?,
                longitude: ascendant.longitude(),
            },
        };
        records.push(record);
    }

    Ok(Chart {
        instant,
        metadata: ChartMetadata {
            ayanamsa: system,
            ayanamsa_name: system.name().to_string(),
            ayanamsa_deg: round_to(aya, 2),
            zodiac: format!("Sidereal ({})", system.name()),
            house_system: WHOLE_SIGN.to_string(),
            precision,
        },
        records,
        ascendant,
        placements,
        karakas,
    })
}

/// Read every natal position under `mode` in one provider session.
pub fn read_chart(
    engine: &Engine,
    instant: &Instant,
    mode: AyanamshaSystem,
) -> Result<ChartReadings, EngineError> {
    let session = engine.session(mode);
    Ok(ChartReadings {
        ayanamsa_deg: session.ayanamsa_deg(instant.jd_ut)?,
        tropical: session.all_bodies(instant.jd_ut)?,
        ascendant_tropical: session.ascendant(instant)?,
    })
}

/// Generate the natal chart with the engine's natal ayanamsa.
pub fn generate_chart(engine: &Engine, instant: Instant) -> Result<Chart, EngineError> {
    let config = engine.config();
    let _span = info_span!("generate_chart", jd_ut = instant.jd_ut).entered();
    let readings = read_chart(engine, &instant, config.natal_ayanamsa)?;
    let chart = assemble_chart(
        instant,
        config.natal_ayanamsa,
        &readings,
        config.precision,
    )?;
    info!(
        ayanamsa = chart.metadata.ayanamsa_name.as_str(),
        ascendant = chart.ascendant.sign.western_name(),
        "chart generated"
    );
    Ok(chart)
}
