//! Compact chart serialization for language-model prompts.
//!
//! Bodies are keyed by two-letter codes (`Su Mo Ma Me Ju Ve Sa Ra Ke Asc`)
//! and signs by three-letter codes (`Ari` .. `Pis`). Each entry is a JSON
//! array rather than an object to keep the prompt short:
//!
//! - natal: `[sign, degree, house, [houses ruled]]`
//! - kp planet: `[sign, star lord, sub lord, strength, [significators]]`
//! - kp house: `[cusp sign, sub lord]`
//! - dasha: `[lord, balance years]` per level
//!
//! Strength is the graha's total shadbala in virupas from the natal chart,
//! rounded to two places. Rahu, Ketu and the ascendant carry `null`.

use std::collections::BTreeMap;

use kundali_base::{ALL_CHART_POINTS, ChartPoint, round_to};
use kundali_engine::{Chart, KpData};
use serde::Serialize;
use tracing::warn;

/// `[sign, degree, house, [houses ruled]]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatalEntry(pub &'static str, pub f64, pub u8, pub Vec<u8>);

/// `[sign, star lord, sub lord, strength, [significators]]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpPlanetEntry(
    pub &'static str,
    pub &'static str,
    pub &'static str,
    pub Option<f64>,
    pub Vec<u8>,
);

/// `[cusp sign, sub lord]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpHouseEntry(pub &'static str, pub &'static str);

/// `[lord, balance years]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaEntry(pub &'static str, pub f64);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiMeta {
    pub ayanamsa: String,
    pub house_system: String,
    pub ascendant: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiKp {
    pub planets: BTreeMap<&'static str, KpPlanetEntry>,
    pub houses: BTreeMap<u8, KpHouseEntry>,
    pub dasha: BTreeMap<&'static str, DashaEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiPayload {
    pub meta: AiMeta,
    pub natal: BTreeMap<&'static str, NatalEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kp: Option<AiKp>,
}

impl AiPayload {
    pub fn new(chart: &Chart, kp: Option<&KpData>) -> Self {
        let mut natal = BTreeMap::new();
        for point in ALL_CHART_POINTS {
            let Some(r) = chart.record(point) else {
                warn!(point = point.code(), "chart record missing; omitted from payload");
                continue;
            };
            natal.insert(
                point.code(),
                NatalEntry(
                    r.position.sign.code(),
                    r.position.degree_in_sign,
                    r.house,
                    r.rules_houses.clone(),
                ),
            );
        }
        Self {
            meta: AiMeta {
                ayanamsa: chart.metadata.ayanamsa_name.clone(),
                house_system: chart.metadata.house_system.clone(),
                ascendant: chart.ascendant().sign.code(),
            },
            natal,
            kp: kp.map(|kp| compact_kp(kp, &strengths(chart))),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Total shadbala per graha code.
fn strengths(chart: &Chart) -> BTreeMap<&'static str, f64> {
    chart
        .shadbala()
        .iter()
        .map(|b| (b.graha.code(), round_to(b.total_virupas, 2)))
        .collect()
}

fn compact_kp(kp: &KpData, strengths: &BTreeMap<&'static str, f64>) -> AiKp {
    let planets = kp
        .planets
        .iter()
        .map(|p| {
            let strength = match p.point {
                ChartPoint::Graha(g) => strengths.get(g.code()).copied(),
                ChartPoint::Ascendant => None,
            };
            (
                p.point.code(),
                KpPlanetEntry(
                    p.sign.code(),
                    p.star_lord.code(),
                    p.sub_lord.code(),
                    strength,
                    p.significators.clone(),
                ),
            )
        })
        .collect();
    let houses = kp
        .cusps
        .iter()
        .map(|c| (c.house, KpHouseEntry(c.sign.code(), c.sub_lord.code())))
        .collect();
    let dasha = kp
        .current
        .levels
        .iter()
        .map(|b| {
            (
                b.level.key(),
                DashaEntry(b.lord.code(), (b.balance_years * 1000.0).round() / 1000.0),
            )
        })
        .collect();
    AiKp {
        planets,
        houses,
        dasha,
    }
}
