//! Table-backed ephemeris provider.
//!
//! Serves precomputed tropical positions keyed by Julian Day. Useful for
//! deterministic tests and for feeding positions exported from an external
//! ephemeris. The ayanamsa comes from the mean precession model of the
//! current sidereal mode.

use kundali_base::AyanamshaSystem;
use kundali_time::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::provider::{Body, EphemerisProvider, ProviderError};

/// Default slack when matching a requested JD against a row (about 0.1 s).
pub const DEFAULT_JD_TOLERANCE: f64 = 1e-6;

/// Tropical positions at one instant, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionRow {
    pub jd_ut: f64,
    pub sun: f64,
    pub moon: f64,
    pub mars: f64,
    pub mercury: f64,
    pub jupiter: f64,
    pub venus: f64,
    pub saturn: f64,
    pub true_node: f64,
    pub ascendant: f64,
    /// Placidus cusps 1..=12; required only for KP queries.
    #[serde(default)]
    pub cusps: Option<[f64; 12]>,
}

impl PositionRow {
    pub fn body(&self, body: Body) -> f64 {
        match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
            Body::Mars => self.mars,
            Body::Mercury => self.mercury,
            Body::Jupiter => self.jupiter,
            Body::Venus => self.venus,
            Body::Saturn => self.saturn,
            Body::TrueNode => self.true_node,
        }
    }
}

/// A list of rows, the serialized form read from TOML or JSON files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionTable {
    #[serde(default, rename = "row")]
    pub rows: Vec<PositionRow>,
}

/// Provider that answers from a [`PositionTable`].
#[derive(Debug, Clone)]
pub struct TableProvider {
    rows: Vec<PositionRow>,
    mode: AyanamshaSystem,
    tolerance: f64,
}

impl TableProvider {
    pub fn new(table: PositionTable) -> Self {
        Self {
            rows: table.rows,
            mode: AyanamshaSystem::Lahiri,
            tolerance: DEFAULT_JD_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance_days: f64) -> Self {
        self.tolerance = tolerance_days.abs();
        self
    }

    pub fn rows(&self) -> &[PositionRow] {
        &self.rows
    }

    fn row(&self, jd_ut: f64) -> Result<&PositionRow, ProviderError> {
        self.rows
            .iter()
            .find(|r| (r.jd_ut - jd_ut).abs() <= self.tolerance)
            .ok_or_else(|| ProviderError(format!("no tabulated positions for JD {jd_ut}")))
    }
}

impl From<PositionTable> for TableProvider {
    fn from(table: PositionTable) -> Self {
        Self::new(table)
    }
}

impl EphemerisProvider for TableProvider {
    fn name(&self) -> &str {
        "table"
    }

    fn set_sidereal_mode(&mut self, system: AyanamshaSystem) {
        self.mode = system;
    }

    fn sidereal_mode(&self) -> AyanamshaSystem {
        self.mode
    }

    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, ProviderError> {
        Ok(self.row(jd_ut)?.body(body))
    }

    fn ascendant(&self, jd_ut: f64, _location: &GeoLocation) -> Result<f64, ProviderError> {
        Ok(self.row(jd_ut)?.ascendant)
    }

    fn house_cusps(
        &self,
        jd_ut: f64,
        _location: &GeoLocation,
    ) -> Result<[f64; 12], ProviderError> {
        self.row(jd_ut)?
            .cusps
            .ok_or_else(|| ProviderError(format!("no house cusps tabulated for JD {jd_ut}")))
    }
}
