//! Chart generation on top of an external ephemeris provider.
//!
//! This crate provides:
//! - The [`EphemerisProvider`] trait and a table-backed implementation
//! - [`Engine`], which serializes every set-mode-then-read sequence behind
//!   one lock
//! - Natal chart assembly, divisional and derived-lagna charts
//! - KP cusps, sub-lords, significators and the Vimshottari dasha

pub mod chart;
pub mod dasha;
pub mod engine;
pub mod error;
pub mod kp;
pub mod provider;
pub mod table;
pub mod varga_chart;

pub use chart::{
    Chart, ChartMetadata, ChartReadings, PlanetRecord, WHOLE_SIGN, assemble_chart,
    generate_chart, read_chart,
};
pub use dasha::{dasha_hierarchy, dasha_snapshot, dasha_timeline, moon_seed};
pub use engine::{Engine, EngineConfig, MAX_PRECISION, ProviderSession};
pub use error::EngineError;
pub use kp::{KpData, KpPlanet, KpReadings, PLACIDUS, assemble_kp, kp_data, read_kp};
pub use provider::{ALL_BODIES, Body, EphemerisProvider, ProviderError};
pub use table::{DEFAULT_JD_TOLERANCE, PositionRow, PositionTable, TableProvider};
pub use varga_chart::{
    ChartKind, VargaChart, VargaPlacement, all_vargas, arudha_chart, custom_varga_chart,
    moon_chart, sun_chart, varga_chart,
};
