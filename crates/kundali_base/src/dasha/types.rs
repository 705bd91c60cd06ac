//! Core types for Vimshottari dasha (planetary period) calculations.
//!
//! Periods are grouped into up to 5 hierarchical levels, from Mahadasha down
//! to Pranadasha. Each level is stored as a flat array; children point back
//! to their parent through `parent_idx`.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Julian year used to turn dasha years into days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Maximum hierarchy depth (Mahadasha through Pranadasha).
pub const MAX_DASHA_DEPTH: u8 = 5;

/// Default depth for timelines (Maha + Antar).
pub const DEFAULT_DASHA_DEPTH: u8 = 2;

/// Default span covered by a generated timeline, in years.
pub const DEFAULT_HORIZON_YEARS: f64 = 120.0;

/// Upper bound on the periods generated for one level.
pub const MAX_PERIODS_PER_LEVEL: usize = 100_000;

/// Longest horizon whose Mahadasha level fits in [`MAX_PERIODS_PER_LEVEL`].
///
/// A horizon of H years yields at most `1 + 9 * ceil(H / 120)` Mahadashas:
/// the birth balance plus nine per started 120-year cycle.
pub const MAX_HORIZON_YEARS: f64 = ((MAX_PERIODS_PER_LEVEL - 1) / 9 * 120) as f64;

/// Depth of a period in the Vimshottari hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

/// All levels, outermost first.
pub const ALL_DASHA_LEVELS: [DashaLevel; 5] = [
    DashaLevel::Mahadasha,
    DashaLevel::Antardasha,
    DashaLevel::Pratyantardasha,
    DashaLevel::Sookshmadasha,
    DashaLevel::Pranadasha,
];

impl DashaLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_DASHA_LEVELS.get(v as usize).copied()
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Short key used in serialized drill-down results.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mahadasha => "maha",
            Self::Antardasha => "antar",
            Self::Pratyantardasha => "pratyantar",
            Self::Sookshmadasha => "sookshma",
            Self::Pranadasha => "prana",
        }
    }

    /// The level one step finer, `None` below Pranadasha.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// One period at one level of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// Position among the children of the same parent, from 1.
    pub order: u16,
    /// Index of the parent in the previous level (0 for Mahadashas).
    pub parent_idx: u32,
    /// Length the period would have if it were not cut short at birth.
    pub nominal_days: f64,
    /// True when the period was already running at birth.
    pub is_partial: bool,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Duration of the period in years.
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Portion of the nominal length that had elapsed before `start_jd`.
    pub fn elapsed_before_start_days(&self) -> f64 {
        (self.nominal_days - self.duration_days()).max(0.0)
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Materialized periods for levels 0..depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashaHierarchy {
    pub birth_jd: f64,
    pub levels: Vec<Vec<DashaPeriod>>,
}

/// Active periods at one instant, outermost first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}

/// One level of a current-dasha drill-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaBalance {
    pub level: DashaLevel,
    pub lord: Graha,
    /// Full length of this period in years.
    pub period_years: f64,
    /// Years remaining in this period at the query instant.
    pub balance_years: f64,
}

/// The running period at every level for a target instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentDasha {
    pub target_jd: f64,
    /// Position inside the 120-year cycle at the target instant.
    pub cycle_offset_years: f64,
    pub levels: Vec<DashaBalance>,
}

impl CurrentDasha {
    pub fn at(&self, level: DashaLevel) -> Option<&DashaBalance> {
        self.levels.iter().find(|b| b.level == level)
    }
}
