//! The ephemeris provider seam.
//!
//! A provider answers tropical longitudes for bodies, the ascendant and
//! house cusps at a Julian Day. It also carries one piece of mutable state,
//! the sidereal (precession) mode, which the engine only touches while it
//! holds the provider's lock.

use kundali_base::{AyanamshaSystem, Graha, ayanamsha_deg};
use kundali_time::GeoLocation;
use thiserror::Error;

/// Bodies a provider must answer for. Ketu is derived from the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    /// True (osculating) lunar node, read as Rahu.
    TrueNode,
}

/// Provider bodies in chart order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::TrueNode,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::TrueNode => "True Node",
        }
    }

    /// The graha this body is read as.
    pub const fn graha(self) -> Graha {
        match self {
            Self::Sun => Graha::Surya,
            Self::Moon => Graha::Chandra,
            Self::Mars => Graha::Mangal,
            Self::Mercury => Graha::Buddh,
            Self::Jupiter => Graha::Guru,
            Self::Venus => Graha::Shukra,
            Self::Saturn => Graha::Shani,
            Self::TrueNode => Graha::Rahu,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Body> {
        let name = name.trim();
        if ["true_node", "truenode", "node", "rahu"]
            .iter()
            .any(|a| a.eq_ignore_ascii_case(name))
        {
            return Some(Self::TrueNode);
        }
        ALL_BODIES
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

/// Failure reported by a provider implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// External source of raw ecliptic longitudes.
///
/// Implementations may keep the sidereal mode in process-global state (as
/// C ephemeris libraries do); the engine serializes every
/// set-mode-then-read sequence behind one lock.
pub trait EphemerisProvider: Send {
    fn name(&self) -> &str;

    fn set_sidereal_mode(&mut self, system: AyanamshaSystem);

    fn sidereal_mode(&self) -> AyanamshaSystem;

    /// Ayanamsa of the current sidereal mode at `jd_ut`, in degrees.
    fn ayanamsa_deg(&self, jd_ut: f64) -> Result<f64, ProviderError> {
        Ok(ayanamsha_deg(self.sidereal_mode(), jd_ut))
    }

    /// Geocentric tropical ecliptic longitude of `body`, in degrees.
    fn tropical_longitude(&self, body: Body, jd_ut: f64) -> Result<f64, ProviderError>;

    /// Tropical longitude of the ascendant for an observer.
    fn ascendant(&self, jd_ut: f64, location: &GeoLocation) -> Result<f64, ProviderError>;

    /// Tropical Placidus cusps 1..=12 for an observer.
    fn house_cusps(&self, jd_ut: f64, location: &GeoLocation)
    -> Result<[f64; 12], ProviderError>;
}
