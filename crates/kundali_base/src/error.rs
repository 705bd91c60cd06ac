//! Error types for Vedic calculations.

use kundali_time::TimeError;
use thiserror::Error;

/// Errors from the chart computation pipeline.
///
/// Every variant is a synchronous validation failure; retrying with the same
/// input reproduces it.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Non-finite or out-of-range date, time, or coordinate.
    #[error("invalid instant: {0}")]
    InvalidInstant(String),
    /// A longitude that is not a finite number.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
    /// A divisional scheme with divisor <= 0.
    #[error("invalid varga divisor: {0}")]
    InvalidDivisor(i32),
    /// Unknown precession-mode identifier.
    #[error("unsupported ayanamsa: {0}")]
    UnsupportedAyanamsa(String),
}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInstant(e.to_string())
    }
}
