//! Vimshottari dasha for a birth instant.
//!
//! The Moon seed is read under the KP ayanamsa so the timeline agrees with
//! the drill-down in [`crate::kp::KpData`].

use kundali_base::{
    DashaHierarchy, DashaSnapshot, VimshottariTimeline, normalize_360, vimshottari_hierarchy,
    vimshottari_snapshot,
};
use kundali_time::Instant;
use tracing::debug;

use crate::engine::Engine;
use crate::error::EngineError;
use crate::provider::Body;

/// Moon's sidereal longitude under `engine`'s KP ayanamsa.
pub fn moon_seed(engine: &Engine, instant: &Instant) -> Result<f64, EngineError> {
    let session = engine.session(engine.config().kp_ayanamsa);
    let aya = session.ayanamsa_deg(instant.jd_ut)?;
    let moon = session.tropical_longitude(Body::Moon, instant.jd_ut)?;
    Ok(normalize_360(moon - aya))
}

/// Lazily generated mahadasha sequence over the configured horizon.
pub fn dasha_timeline(
    engine: &Engine,
    instant: &Instant,
) -> Result<VimshottariTimeline, EngineError> {
    let moon = moon_seed(engine, instant)?;
    let timeline =
        VimshottariTimeline::new(instant.jd_ut, moon, engine.config().horizon_years)?;
    debug!(lord = timeline.balance().lord.english_name(), "dasha timeline ready");
    Ok(timeline)
}

/// Levels down to the configured depth.
pub fn dasha_hierarchy(engine: &Engine, instant: &Instant) -> Result<DashaHierarchy, EngineError> {
    let config = engine.config();
    let moon = moon_seed(engine, instant)?;
    Ok(vimshottari_hierarchy(
        instant.jd_ut,
        moon,
        config.dasha_depth,
        config.horizon_years,
    )?)
}

/// Periods running at `query_jd`, outermost first.
pub fn dasha_snapshot(
    engine: &Engine,
    instant: &Instant,
    query_jd: f64,
) -> Result<DashaSnapshot, EngineError> {
    let config = engine.config();
    let moon = moon_seed(engine, instant)?;
    Ok(vimshottari_snapshot(
        instant.jd_ut,
        moon,
        query_jd,
        config.dasha_depth,
        config.horizon_years,
    )?)
}
