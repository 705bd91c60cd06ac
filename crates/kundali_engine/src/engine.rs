//! Engine configuration and scoped provider sessions.
//!
//! The provider's sidereal mode is the only shared mutable state in the
//! pipeline. [`Engine::session`] takes the provider lock, sets the mode and
//! hands back a [`ProviderSession`]; every read for one request happens
//! through that session, and the lock is released when it drops. A second
//! thread cannot change the mode between another thread's set-mode and its
//! reads.

use kundali_base::dasha::{
    DEFAULT_DASHA_DEPTH, DEFAULT_HORIZON_YEARS, MAX_DASHA_DEPTH, MAX_HORIZON_YEARS,
};
use kundali_base::{AyanamshaSystem, DEFAULT_PRECISION, VedicError};
use kundali_time::Instant;
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::provider::{ALL_BODIES, Body, EphemerisProvider, ProviderError};

/// Highest supported display precision (decimal places).
pub const MAX_PRECISION: u32 = 6;

/// Chart computation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Precession mode for natal and divisional charts.
    pub natal_ayanamsa: AyanamshaSystem,
    /// Precession mode for KP cusps, sub-lords and dasha.
    pub kp_ayanamsa: AyanamshaSystem,
    /// Decimal places applied to chart positions.
    pub precision: u32,
    /// Dasha hierarchy depth, 1 (Maha) to 5 (Prana).
    pub dasha_depth: u8,
    pub horizon_years: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            natal_ayanamsa: AyanamshaSystem::Lahiri,
            kp_ayanamsa: AyanamshaSystem::KP,
            precision: DEFAULT_PRECISION,
            dasha_depth: DEFAULT_DASHA_DEPTH,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.precision > MAX_PRECISION {
            return Err(EngineError::InvalidConfig(
                "precision must be at most 6 decimal places",
            ));
        }
        if self.dasha_depth == 0 || self.dasha_depth > MAX_DASHA_DEPTH {
            return Err(EngineError::InvalidConfig(
                "dasha_depth must be between 1 and 5",
            ));
        }
        if !self.horizon_years.is_finite() || self.horizon_years <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "horizon_years must be positive and finite",
            ));
        }
        if self.horizon_years > MAX_HORIZON_YEARS {
            return Err(EngineError::InvalidConfig(
                "horizon_years would exceed the per-level dasha period limit",
            ));
        }
        Ok(())
    }
}

/// Owns the provider and the settings every chart request uses.
pub struct Engine {
    config: EngineConfig,
    provider: Mutex<Box<dyn EphemerisProvider>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Engine {
    pub fn new<P>(provider: P, config: EngineConfig) -> Result<Self, EngineError>
    where
        P: EphemerisProvider + 'static,
    {
        Self::from_boxed(Box::new(provider), config)
    }

    pub fn from_boxed(
        provider: Box<dyn EphemerisProvider>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            provider: Mutex::new(provider),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Acquire the provider exclusively and switch it to `mode`.
    ///
    /// Blocks while another session is open.
    pub fn session(&self, mode: AyanamshaSystem) -> ProviderSession<'_> {
        let mut guard = self.provider.lock();
        guard.set_sidereal_mode(mode);
        debug!(provider = guard.name(), mode = mode.name(), "provider session opened");
        ProviderSession { guard, mode }
    }
}

/// Exclusive access to the provider with a fixed sidereal mode.
pub struct ProviderSession<'a> {
    guard: MutexGuard<'a, Box<dyn EphemerisProvider>>,
    mode: AyanamshaSystem,
}

impl ProviderSession<'_> {
    pub fn mode(&self) -> AyanamshaSystem {
        self.mode
    }

    pub fn ayanamsa_deg(&self, jd_ut: f64) -> Result<f64, EngineError> {
        let v = self
            .guard
            .ayanamsa_deg(jd_ut)
            .map_err(|e| provider_error("ayanamsa", e))?;
        finite("ayanamsa", v)
    }

    pub fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EngineError> {
        let v = self
            .guard
            .tropical_longitude(body, jd_ut)
            .map_err(|e| provider_error(body.name(), e))?;
        debug!(body = body.name(), jd_ut, longitude = v, "body read");
        finite(body.name(), v)
    }

    pub fn ascendant(&self, instant: &Instant) -> Result<f64, EngineError> {
        let v = self
            .guard
            .ascendant(instant.jd_ut, &instant.location)
            .map_err(|e| provider_error("ascendant", e))?;
        finite("ascendant", v)
    }

    pub fn house_cusps(&self, instant: &Instant) -> Result<[f64; 12], EngineError> {
        let cusps = self
            .guard
            .house_cusps(instant.jd_ut, &instant.location)
            .map_err(|e| provider_error("house cusps", e))?;
        for c in cusps {
            finite("house cusps", c)?;
        }
        Ok(cusps)
    }

    /// Tropical longitudes of every provider body, in [`ALL_BODIES`] order.
    pub fn all_bodies(&self, jd_ut: f64) -> Result<[f64; 8], EngineError> {
        let mut out = [0.0; 8];
        for body in ALL_BODIES {
            out[body.index()] = self.tropical_longitude(body, jd_ut)?;
        }
        Ok(out)
    }
}

impl Drop for ProviderSession<'_> {
    fn drop(&mut self) {
        debug!(mode = self.mode.name(), "provider session closed");
    }
}

fn provider_error(body: &'static str, e: ProviderError) -> EngineError {
    EngineError::Provider {
        body,
        message: e.0,
    }
}

fn finite(body: &'static str, v: f64) -> Result<f64, EngineError> {
    if v.is_finite() {
        Ok(v)
    } else {
        warn!(body, value = v, "provider returned a non-finite value");
        Err(VedicError::InvalidLongitude(v).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::GeoLocation;

    struct Fixed {
        mode: AyanamshaSystem,
        value: f64,
    }

    impl EphemerisProvider for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }
        fn set_sidereal_mode(&mut self, system: AyanamshaSystem) {
            self.mode = system;
        }
        fn sidereal_mode(&self) -> AyanamshaSystem {
            self.mode
        }
        fn tropical_longitude(&self, _body: Body, _jd: f64) -> Result<f64, ProviderError> {
            Ok(self.value)
        }
        fn ascendant(&self, _jd: f64, _loc: &GeoLocation) -> Result<f64, ProviderError> {
            Err(ProviderError("no houses".into()))
        }
        fn house_cusps(&self, _jd: f64, _loc: &GeoLocation) -> Result<[f64; 12], ProviderError> {
            Ok([self.value; 12])
        }
    }

    fn engine(value: f64) -> Engine {
        let p = Fixed {
            mode: AyanamshaSystem::Raman,
            value,
        };
        Engine::new(p, EngineConfig::default()).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_depth() {
        let cfg = EngineConfig {
            dasha_depth: 6,
            ..EngineConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn config_rejects_bad_precision_and_horizon() {
        let cfg = EngineConfig {
            precision: 7,
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = EngineConfig {
            horizon_years: 0.0,
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_caps_horizon_at_period_limit() {
        let cfg = EngineConfig {
            horizon_years: MAX_HORIZON_YEARS,
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_ok());
        let cfg = EngineConfig {
            horizon_years: 2.0e9,
            ..EngineConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn session_sets_mode() {
        let e = engine(12.0);
        let s = e.session(AyanamshaSystem::KP);
        assert_eq!(s.mode(), AyanamshaSystem::KP);
        assert_eq!(s.tropical_longitude(Body::Sun, 2_451_545.0).unwrap(), 12.0);
    }

    #[test]
    fn non_finite_read_is_rejected() {
        let e = engine(f64::NAN);
        let s = e.session(AyanamshaSystem::Lahiri);
        assert!(matches!(
            s.tropical_longitude(Body::Moon, 2_451_545.0),
            Err(EngineError::Vedic(VedicError::InvalidLongitude(v))) if v.is_nan()
        ));
    }

    #[test]
    fn infinite_cusp_is_an_invalid_longitude() {
        let e = engine(f64::INFINITY);
        let s = e.session(AyanamshaSystem::KP);
        let instant = Instant::from_jd(2_451_545.0, GeoLocation::new(0.0, 0.0).unwrap()).unwrap();
        assert_eq!(
            s.house_cusps(&instant),
            Err(EngineError::Vedic(VedicError::InvalidLongitude(f64::INFINITY)))
        );
    }

    #[test]
    fn provider_failure_names_the_read() {
        let e = engine(1.0);
        let s = e.session(AyanamshaSystem::Lahiri);
        let instant = Instant::from_jd(2_451_545.0, GeoLocation::new(0.0, 0.0).unwrap()).unwrap();
        assert!(matches!(
            s.ascendant(&instant),
            Err(EngineError::Provider {
                body: "ascendant",
                ..
            })
        ));
    }
}
