//! Error type for the convenience wrapper.

use kundali_config::ConfigError;
use kundali_engine::EngineError;
use kundali_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KundaliError {
    #[error("engine not initialized; call kundali_rs::init first")]
    NotInitialized,
    #[error("engine already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<TimeError> for KundaliError {
    fn from(e: TimeError) -> Self {
        Self::Engine(EngineError::Time(e))
    }
}

impl From<kundali_base::VedicError> for KundaliError {
    fn from(e: kundali_base::VedicError) -> Self {
        Self::Engine(EngineError::Vedic(e))
    }
}
