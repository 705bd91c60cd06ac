//! Pure sidereal chart transforms.
//!
//! This crate provides:
//! - Ayanamsha computation for 20 sidereal reference systems
//! - Sidereal sign/degree resolution and whole-sign houses
//! - The 27-nakshatra table with padas
//! - Natural, temporal and compound graha relationships
//! - A rule-table divisional chart (varga) engine
//! - Jaimini chara karakas and arudha padas
//! - Shadbala planetary strength
//! - KP star/sub lords, significators and the Vimshottari dasha
//!
//! Every function is a deterministic transform of its inputs. Ephemeris
//! access lives elsewhere.

pub mod arudha;
pub mod ayanamsha;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod karaka;
pub mod kp;
pub mod nakshatra;
pub mod rashi;
pub mod relationship;
pub mod shadbala;
pub mod sidereal;
pub mod util;
pub mod varga;

pub use arudha::{
    ALL_ARUDHA_PADAS, ArudhaOutcome, ArudhaPada, ArudhaResult, ArudhaRule, all_arudha_padas,
    arudha_house,
};
pub use ayanamsha::{
    AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg, general_precession_longitude_deg,
    nutation_longitude_arcsec,
};
pub use dasha::{
    CurrentDasha, DashaBalance, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    VimshottariTimeline, current_dasha, vimshottari_hierarchy, vimshottari_snapshot,
};
pub use error::VedicError;
pub use graha::{
    ALL_CHART_POINTS, ALL_GRAHAS, ChartPoint, Graha, SAPTA_GRAHAS, nth_rashi_from, rashi_lord,
    rashi_lord_by_index,
};
pub use karaka::{ALL_KARAKA_ROLES, KarakaAssignment, KarakaRole, rank_karakas};
pub use kp::{
    CuspSubLord, KpLords, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, cusp_sub_lord, kp_lords,
    kp_significators, sub_lord_from_fraction, vimshottari_years,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, Element, Modality, Rashi, deg_to_dms};
pub use relationship::{
    CompoundRelation, NaturalRelation, Relationship, TemporalRelation, chart_relationships,
    compound_relation, natural_relation, sign_relationship, temporal_relation,
};
pub use shadbala::{ShadbalaBreakdown, ShadbalaInputs, all_shadbalas, shadbala};
pub use sidereal::{
    DEFAULT_PRECISION, SiderealPosition, format_houses, houses_ruled, position_from_longitude,
    resolve_sidereal, sign_of_house, whole_sign_house,
};
pub use util::{normalize_360, ordinal, round_to};
pub use varga::{
    ALL_VARGAS, MAX_VARGA_DEGREE, Partition, Segment, StartRule, StartSign, Varga, VargaRule,
};
