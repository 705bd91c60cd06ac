//! Engine error type.

use kundali_base::{Graha, VedicError};
use kundali_time::TimeError;
use thiserror::Error;

/// Errors from chart generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// The ephemeris provider failed to answer a read.
    #[error("provider error for {body}: {message}")]
    Provider { body: &'static str, message: String },
    /// A chart was built without one of the nine graha records.
    #[error("chart has no record for {}", .0.name())]
    MissingGraha(Graha),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
