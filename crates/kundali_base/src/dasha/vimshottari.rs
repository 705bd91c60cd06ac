//! Vimshottari dasha engine.
//!
//! Computation tiers:
//! - Mahadasha sequence as a lazy, restartable iterator
//! - All children of one parent
//! - Full hierarchy to a chosen depth
//! - Snapshot of the active chain at a query instant
//! - Cycle-offset drill-down with remaining balances

use crate::error::VedicError;
use crate::graha::Graha;
use crate::kp::{VIMSHOTTARI_SEQUENCE, vimshottari_cycle_from, vimshottari_position};

use super::balance::{BirthBalance, vimshottari_birth_balance};
use super::subperiod::proportional_children;
use super::types::{
    ALL_DASHA_LEVELS, CurrentDasha, DAYS_PER_YEAR, DashaBalance, DashaHierarchy, DashaLevel,
    DashaPeriod, DashaSnapshot, MAX_DASHA_DEPTH, MAX_HORIZON_YEARS, MAX_PERIODS_PER_LEVEL,
};

// ---------------------------------------------------------------------------
// Mahadasha sequence
// ---------------------------------------------------------------------------

/// Lazy sequence of Mahadasha periods starting at birth.
///
/// The first period is the birth balance; later ones are full periods in
/// Vimshottari order. Iteration stops once the covered span reaches the
/// horizon, so the final period may extend past it. Cloning before
/// iterating, or calling [`restart`](Self::restart), replays the identical
/// sequence.
#[derive(Debug, Clone)]
pub struct VimshottariTimeline {
    birth_jd: f64,
    balance: BirthBalance,
    horizon_years: f64,
    emitted: usize,
    cursor_jd: f64,
    years_covered: f64,
}

impl VimshottariTimeline {
    pub fn new(
        birth_jd: f64,
        moon_sidereal_lon: f64,
        horizon_years: f64,
    ) -> Result<Self, VedicError> {
        if !birth_jd.is_finite() || birth_jd <= 0.0 {
            return Err(VedicError::InvalidInstant(format!(
                "birth JD must be positive and finite, got {birth_jd}"
            )));
        }
        if !horizon_years.is_finite() || horizon_years <= 0.0 {
            return Err(VedicError::InvalidInstant(format!(
                "dasha horizon must be positive, got {horizon_years}"
            )));
        }
        if horizon_years > MAX_HORIZON_YEARS {
            return Err(VedicError::InvalidInstant(format!(
                "dasha horizon of {horizon_years} years exceeds {MAX_HORIZON_YEARS}"
            )));
        }
        Ok(Self {
            birth_jd,
            balance: vimshottari_birth_balance(moon_sidereal_lon)?,
            horizon_years,
            emitted: 0,
            cursor_jd: birth_jd,
            years_covered: 0.0,
        })
    }

    pub fn birth_jd(&self) -> f64 {
        self.birth_jd
    }

    pub fn balance(&self) -> &BirthBalance {
        &self.balance
    }

    /// Rewind to the first Mahadasha.
    pub fn restart(&mut self) {
        self.emitted = 0;
        self.cursor_jd = self.birth_jd;
        self.years_covered = 0.0;
    }
}

impl Iterator for VimshottariTimeline {
    type Item = DashaPeriod;

    fn next(&mut self) -> Option<DashaPeriod> {
        if self.emitted > 0 && self.years_covered >= self.horizon_years {
            return None;
        }
        let start = vimshottari_position(self.balance.lord);
        let (lord, years) = VIMSHOTTARI_SEQUENCE[(start + self.emitted) % 9];
        let nominal_days = years * DAYS_PER_YEAR;
        let (run_years, is_partial) = if self.emitted == 0 {
            (
                self.balance.balance_years,
                self.balance.elapsed_fraction > 0.0,
            )
        } else {
            (years, false)
        };

        let end = self.cursor_jd + run_years * DAYS_PER_YEAR;
        self.emitted += 1;
        let period = DashaPeriod {
            lord,
            start_jd: self.cursor_jd,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: self.emitted as u16,
            parent_idx: 0,
            nominal_days,
            is_partial,
        };
        self.cursor_jd = end;
        self.years_covered += run_years;
        Some(period)
    }
}

/// All Mahadasha periods within `horizon_years` of birth.
pub fn vimshottari_level0(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    horizon_years: f64,
) -> Result<Vec<DashaPeriod>, VedicError> {
    Ok(VimshottariTimeline::new(birth_jd, moon_sidereal_lon, horizon_years)?.collect())
}

// ---------------------------------------------------------------------------
// Children and hierarchy
// ---------------------------------------------------------------------------

/// All child periods of a single parent period (empty for Pranadasha).
pub fn vimshottari_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    match parent.level.child_level() {
        Some(child_level) => proportional_children(parent, child_level, parent_idx),
        None => Vec::new(),
    }
}

/// Complete level N given all periods at level N-1.
pub fn vimshottari_complete_level(
    parent_level: &[DashaPeriod],
) -> Result<Vec<DashaPeriod>, VedicError> {
    let estimated = parent_level.len() * 9;
    if estimated > MAX_PERIODS_PER_LEVEL {
        return Err(VedicError::InvalidInstant(format!(
            "dasha level would hold {estimated} periods"
        )));
    }
    let mut result = Vec::with_capacity(estimated);
    for (pidx, parent) in parent_level.iter().enumerate() {
        result.extend(vimshottari_children(parent, pidx as u32));
    }
    Ok(result)
}

/// Birth balance plus all levels down to `depth` (1 = Mahadasha only,
/// 5 = down to Pranadasha). Depth is clamped to 1..=5.
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    depth: u8,
    horizon_years: f64,
) -> Result<DashaHierarchy, VedicError> {
    let depth = depth.clamp(1, MAX_DASHA_DEPTH);
    let mut levels = vec![vimshottari_level0(
        birth_jd,
        moon_sidereal_lon,
        horizon_years,
    )?];
    for _ in 1..depth {
        let children = vimshottari_complete_level(&levels[levels.len() - 1])?;
        levels.push(children);
    }
    Ok(DashaHierarchy { birth_jd, levels })
}

/// Find the period containing `jd` in one level.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(jd))
}

impl DashaHierarchy {
    /// Active chain at `query_jd`, following parent links level by level.
    pub fn snapshot(&self, query_jd: f64) -> DashaSnapshot {
        let mut periods = Vec::with_capacity(self.levels.len());
        let mut parent: Option<usize> = None;
        for level in &self.levels {
            let found = level.iter().position(|p| {
                p.contains(query_jd) && parent.is_none_or(|pi| p.parent_idx as usize == pi)
            });
            match found {
                Some(idx) => {
                    periods.push(level[idx]);
                    parent = Some(idx);
                }
                None => break,
            }
        }
        DashaSnapshot { query_jd, periods }
    }
}

/// Active chain at `query_jd` without materializing the full hierarchy.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
    depth: u8,
    horizon_years: f64,
) -> Result<DashaSnapshot, VedicError> {
    let depth = depth.clamp(1, MAX_DASHA_DEPTH);
    let mut periods = Vec::with_capacity(depth as usize);
    let mut current = VimshottariTimeline::new(birth_jd, moon_sidereal_lon, horizon_years)?
        .find(|p| p.contains(query_jd));

    while let Some(p) = current {
        periods.push(p);
        if periods.len() >= depth as usize {
            break;
        }
        current = vimshottari_children(&p, 0)
            .into_iter()
            .find(|c| c.contains(query_jd));
    }
    Ok(DashaSnapshot { query_jd, periods })
}

// ---------------------------------------------------------------------------
// Cycle-offset drill-down
// ---------------------------------------------------------------------------

/// Locate `offset` years inside the nine periods of a parent, starting with
/// `first`. Returns the lord, its length, and the years already spent in it.
fn locate(first: Graha, parent_years: f64, offset: f64) -> (Graha, f64, f64) {
    let mut rem = offset;
    let mut last = (first, 0.0);
    for (lord, years) in vimshottari_cycle_from(first) {
        let span = parent_years * years / 120.0;
        if rem < span {
            return (lord, span, rem.max(0.0));
        }
        rem -= span;
        last = (lord, span);
    }
    // Drift past the final boundary lands at the very end of the last period
    (last.0, last.1, last.1)
}

/// Running period at all 5 levels for `target_jd`, each with its remaining
/// balance in years.
///
/// Birth is placed inside the 120-year cycle (counted from the start of
/// Ketu) using the Moon's nakshatra; the elapsed years since birth are
/// added and the result is taken modulo 120. Targets before birth wrap
/// backwards through the cycle.
pub fn current_dasha(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    target_jd: f64,
) -> Result<CurrentDasha, VedicError> {
    if !birth_jd.is_finite() || !target_jd.is_finite() {
        return Err(VedicError::InvalidInstant(format!(
            "non-finite dasha instants: birth {birth_jd}, target {target_jd}"
        )));
    }
    let balance = vimshottari_birth_balance(moon_sidereal_lon)?;
    let elapsed_years = (target_jd - birth_jd) / DAYS_PER_YEAR;
    let cycle_offset_years = (balance.cycle_years_before_birth() + elapsed_years).rem_euclid(120.0);

    let mut levels = Vec::with_capacity(ALL_DASHA_LEVELS.len());
    // The whole cycle acts as a 120-year parent starting with Ketu
    let (mut lord, mut span, mut spent) = locate(Graha::Ketu, 120.0, cycle_offset_years);
    for level in ALL_DASHA_LEVELS {
        if level != DashaLevel::Mahadasha {
            (lord, span, spent) = locate(lord, span, spent);
        }
        levels.push(DashaBalance {
            level,
            lord,
            period_years: span,
            balance_years: span - spent,
        });
    }

    Ok(CurrentDasha {
        target_jd,
        cycle_offset_years,
        levels,
    })
}
