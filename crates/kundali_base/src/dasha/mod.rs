//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year cycle of 9 graha periods, entered at birth from the Moon's
//! nakshatra, with up to 5 hierarchical levels (Mahadasha through
//! Pranadasha).

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance, vimshottari_birth_balance};
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{
    ALL_DASHA_LEVELS, CurrentDasha, DAYS_PER_YEAR, DEFAULT_DASHA_DEPTH, DEFAULT_HORIZON_YEARS,
    DashaBalance, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot, MAX_DASHA_DEPTH,
    MAX_HORIZON_YEARS, MAX_PERIODS_PER_LEVEL,
};
pub use vimshottari::{
    VimshottariTimeline, current_dasha, find_active_period, vimshottari_children,
    vimshottari_complete_level, vimshottari_hierarchy, vimshottari_level0, vimshottari_snapshot,
};
