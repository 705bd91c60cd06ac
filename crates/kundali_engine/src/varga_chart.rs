//! Divisional and derived-lagna charts.
//!
//! Every chart here is a pure function of a natal [`Chart`]: each point's
//! position is transformed independently and houses are counted from the
//! chart's own lagna. No chart depends on another, so callers may build
//! them in any order.

use kundali_base::{
    ALL_VARGAS, ArudhaPada, ChartPoint, Graha, SiderealPosition, Varga, VargaRule,
    position_from_longitude, whole_sign_house,
};
use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::EngineError;

/// Which transform produced a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Varga(Varga),
    /// A caller-supplied rule with the given divisor.
    Custom(u16),
    /// Houses counted from the Moon's sign.
    MoonLagna,
    /// Houses counted from the Sun's sign.
    SunLagna,
    /// Houses counted from the Arudha Lagna sign.
    ArudhaLagna,
}

impl ChartKind {
    pub fn label(self) -> String {
        match self {
            Self::Varga(v) => format!("D{} ({})", v.divisor(), v.name()),
            Self::Custom(n) => format!("D{n}"),
            Self::MoonLagna => "Chandra Lagna".to_string(),
            Self::SunLagna => "Surya Lagna".to_string(),
            Self::ArudhaLagna => "Arudha Lagna".to_string(),
        }
    }
}

/// One point inside a derived chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VargaPlacement {
    pub point: ChartPoint,
    pub position: SiderealPosition,
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VargaChart {
    pub kind: ChartKind,
    pub name: String,
    /// Position houses are counted from.
    pub lagna: SiderealPosition,
    pub placements: Vec<VargaPlacement>,
}

impl VargaChart {
    pub fn placement(&self, point: ChartPoint) -> Option<&VargaPlacement> {
        self.placements.iter().find(|p| p.point == point)
    }

    pub fn graha(&self, graha: Graha) -> Option<&VargaPlacement> {
        self.placement(ChartPoint::Graha(graha))
    }

    /// Points occupying a house, in chart order.
    pub fn occupants(&self, house: u8) -> Vec<ChartPoint> {
        self.placements
            .iter()
            .filter(|p| p.house == house)
            .map(|p| p.point)
            .collect()
    }
}

fn transform<F>(chart: &Chart, kind: ChartKind, f: F) -> Result<VargaChart, EngineError>
where
    F: Fn(SiderealPosition) -> SiderealPosition,
{
    let precision = chart.metadata.precision;
    let mut placements = Vec::with_capacity(chart.records().len());
    for record in chart.records() {
        let mapped = f(record.position);
        placements.push(VargaPlacement {
            point: record.point,
            position: position_from_longitude(mapped.longitude(), precision)?,
            house: 0,
        });
    }
    let lagna = placements
        .iter()
        .find(|p| p.point == ChartPoint::Ascendant)
        .map_or(chart.ascendant(), |p| p.position);
    Ok(relagna(kind, lagna, placements))
}

fn relagna(kind: ChartKind, lagna: SiderealPosition, mut placements: Vec<VargaPlacement>) -> VargaChart {
    for p in &mut placements {
        p.house = whole_sign_house(p.position.sign, lagna.sign);
    }
    VargaChart {
        kind,
        name: kind.label(),
        lagna,
        placements,
    }
}

/// Apply a named divisional scheme to every point of a chart.
pub fn varga_chart(chart: &Chart, varga: Varga) -> Result<VargaChart, EngineError> {
    transform(chart, ChartKind::Varga(varga), |pos| varga.apply(pos))
}

/// Apply an arbitrary rule, e.g. one built with [`VargaRule::new`].
pub fn custom_varga_chart(chart: &Chart, rule: &VargaRule) -> Result<VargaChart, EngineError> {
    transform(chart, ChartKind::Custom(rule.divisor()), |pos| rule.apply(pos))
}

fn lagna_from(chart: &Chart, kind: ChartKind, lagna: SiderealPosition) -> VargaChart {
    let placements = chart
        .records()
        .iter()
        .map(|r| VargaPlacement {
            point: r.point,
            position: r.position,
            house: 0,
        })
        .collect();
    relagna(kind, lagna, placements)
}

fn graha_position(chart: &Chart, graha: Graha) -> Result<SiderealPosition, EngineError> {
    chart
        .graha(graha)
        .map(|r| r.position)
        .ok_or(EngineError::MissingGraha(graha))
}

/// Chandra Lagna: natal positions, houses from the Moon.
pub fn moon_chart(chart: &Chart) -> Result<VargaChart, EngineError> {
    let moon = graha_position(chart, Graha::Chandra)?;
    Ok(lagna_from(chart, ChartKind::MoonLagna, moon))
}

/// Surya Lagna: natal positions, houses from the Sun.
pub fn sun_chart(chart: &Chart) -> Result<VargaChart, EngineError> {
    let sun = graha_position(chart, Graha::Surya)?;
    Ok(lagna_from(chart, ChartKind::SunLagna, sun))
}

/// Natal positions with houses counted from the Arudha Lagna (A1) sign.
pub fn arudha_chart(chart: &Chart) -> VargaChart {
    let padas = chart.arudha_padas();
    let al = padas
        .iter()
        .find(|p| p.pada == ArudhaPada::ArudhaLagna)
        .map_or(chart.ascendant().sign, |p| p.sign);
    let lagna = SiderealPosition {
        sign: al,
        degree_in_sign: 0.0,
    };
    lagna_from(chart, ChartKind::ArudhaLagna, lagna)
}

/// Every named divisional chart followed by the three derived-lagna charts.
pub fn all_vargas(chart: &Chart) -> Result<Vec<VargaChart>, EngineError> {
    let mut out = Vec::with_capacity(ALL_VARGAS.len() + 3);
    for varga in ALL_VARGAS {
        out.push(varga_chart(chart, varga)?);
    }
    out.push(moon_chart(chart)?);
    out.push(sun_chart(chart)?);
    out.push(arudha_chart(chart));
    Ok(out)
}
