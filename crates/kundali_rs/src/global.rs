//! Process-wide engine handle.

use std::sync::OnceLock;

use kundali_config::KundaliConfig;
use kundali_engine::{Engine, EngineConfig, EphemerisProvider};
use tracing::info;

use crate::error::KundaliError;

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// Install the global engine. Fails if one is already installed.
pub fn init<P>(config: EngineConfig, provider: P) -> Result<(), KundaliError>
where
    P: EphemerisProvider + 'static,
{
    let engine = Engine::new(provider, config)?;
    ENGINE
        .set(engine)
        .map_err(|_| KundaliError::AlreadyInitialized)?;
    info!(
        natal = config.natal_ayanamsa.name(),
        kp = config.kp_ayanamsa.name(),
        "kundali engine initialized"
    );
    Ok(())
}

/// Install the global engine from a loaded configuration file.
pub fn init_from_config<P>(config: &KundaliConfig, provider: P) -> Result<(), KundaliError>
where
    P: EphemerisProvider + 'static,
{
    init(config.to_engine_config()?, provider)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Result<&'static Engine, KundaliError> {
    ENGINE.get().ok_or(KundaliError::NotInitialized)
}
