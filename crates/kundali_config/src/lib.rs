//! Configuration file support.
//!
//! Reads `kundali.toml`. Every field has a default, so an empty file (or
//! no file) yields the standard Lahiri / KP setup.
//!
//! ```toml
//! [calculation]
//! ayanamsa = "lahiri"
//! kp_ayanamsa = "kp"
//! precision = 2
//!
//! [dasha]
//! max_level = 2
//! horizon_years = 120.0
//!
//! [logging]
//! filter = "info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use kundali_base::dasha::{DEFAULT_DASHA_DEPTH, DEFAULT_HORIZON_YEARS};
use kundali_base::{AyanamshaSystem, DEFAULT_PRECISION, VedicError};
use kundali_engine::{EngineConfig, EngineError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File names searched by [`KundaliConfig::from_default_location`], in order.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["kundali.toml", "config/kundali.toml"];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KundaliConfig {
    pub calculation: CalculationSettings,
    pub dasha: DashaSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationSettings {
    /// Natal chart precession mode.
    pub ayanamsa: String,
    /// KP cusp, sub-lord and dasha precession mode.
    pub kp_ayanamsa: String,
    pub precision: u32,
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self {
            ayanamsa: "lahiri".to_string(),
            kp_ayanamsa: "kp".to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaSettings {
    /// 1 = Mahadasha only ... 5 = down to Pranadasha.
    pub max_level: u8,
    pub horizon_years: f64,
}

impl Default for DashaSettings {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_DASHA_DEPTH,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl KundaliConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: KundaliConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the first file in [`DEFAULT_CONFIG_PATHS`] that exists, or the
    /// defaults when none does.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Self::from_search_paths(DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from))
    }

    pub fn from_search_paths<I>(paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }
        Ok(Self::default())
    }

    pub fn natal_ayanamsa(&self) -> Result<AyanamshaSystem, ConfigError> {
        Ok(AyanamshaSystem::from_name(&self.calculation.ayanamsa)?)
    }

    pub fn kp_ayanamsa(&self) -> Result<AyanamshaSystem, ConfigError> {
        Ok(AyanamshaSystem::from_name(&self.calculation.kp_ayanamsa)?)
    }

    /// Check names resolve and numeric ranges hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_engine_config().map(|_| ())
    }

    pub fn to_engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let config = EngineConfig {
            natal_ayanamsa: self.natal_ayanamsa()?,
            kp_ayanamsa: self.kp_ayanamsa()?,
            precision: self.calculation.precision,
            dasha_depth: self.dasha.max_level,
            horizon_years: self.dasha.horizon_years,
        };
        config.validate()?;
        Ok(config)
    }
}
