//! Sub-period generation for the Vimshottari dasha.
//!
//! A child's nominal length is `parent_nominal * child_years / 120`, and the
//! children of a parent start with the parent's own lord. When the parent
//! was already running at birth, the children are laid out from the
//! parent's virtual start and clipped at the birth instant: children that
//! ended before birth are dropped, the one running at birth is truncated.

use crate::kp::{VIMSHOTTARI_TOTAL_YEARS, vimshottari_cycle_from};

use super::types::{DashaLevel, DashaPeriod};

/// Snap the last child's end_jd to parent's end_jd to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Generate the children of one parent period.
///
/// `parent_idx`: index of parent in its level array.
pub fn proportional_children(
    parent: &DashaPeriod,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let virtual_start = parent.start_jd - parent.elapsed_before_start_days();
    let mut children = Vec::with_capacity(9);
    let mut nominal_cursor = virtual_start;
    let mut order: u16 = 0;

    for (lord, years) in vimshottari_cycle_from(parent.lord) {
        let nominal_days = parent.nominal_days * years / VIMSHOTTARI_TOTAL_YEARS;
        let nominal_start = nominal_cursor;
        let nominal_end = nominal_start + nominal_days;
        nominal_cursor = nominal_end;

        if nominal_end <= parent.start_jd {
            continue;
        }
        let is_partial = nominal_start < parent.start_jd;
        order += 1;
        children.push(DashaPeriod {
            lord,
            start_jd: nominal_start.max(parent.start_jd),
            end_jd: nominal_end,
            level: child_level,
            order,
            parent_idx,
            nominal_days,
            is_partial,
        });
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}
