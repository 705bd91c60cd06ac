//! Convenience wrapper for the kundali chart engine.
//!
//! Provides a global engine and high-level functions that take
//! [`BirthDetails`] directly, plus the outbound JSON forms.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kundali_rs::*;
//!
//! let table: PositionTable = toml::from_str(&std::fs::read_to_string("positions.toml")?)?;
//! init(EngineConfig::default(), TableProvider::new(table))?;
//!
//! let birth = BirthDetails {
//!     year: 1990, month: 5, day: 15, hour: 10, minute: 30, second: 0.0,
//!     utc_offset_minutes: 330, latitude_deg: 28.61, longitude_deg: 77.21,
//! };
//! let c = chart(&birth)?;
//! println!("{}", c.metadata.zodiac);
//! ```

pub mod convenience;
pub mod error;
pub mod global;
pub mod payload;

pub use convenience::{
    ai_payload, arudha_padas, chart, chart_json, current_dasha_at, custom_varga, dasha,
    dasha_at, kp, varga, vargas,
};
pub use error::KundaliError;
pub use global::{init, init_from_config, is_initialized};
pub use payload::AiPayload;

// Re-export the types callers need so `use kundali_rs::*` is enough.
pub use kundali_base::{
    AyanamshaSystem, ChartPoint, CurrentDasha, DashaHierarchy, DashaLevel, DashaPeriod,
    DashaSnapshot, Graha, Rashi, Varga, VargaRule,
};
pub use kundali_config::KundaliConfig;
pub use kundali_engine::{
    Chart, EngineConfig, EphemerisProvider, KpData, PlanetRecord, PositionRow, PositionTable,
    TableProvider, VargaChart,
};
pub use kundali_time::{BirthDetails, GeoLocation, Instant};
