//! Error types for civil-time normalization.

use thiserror::Error;

/// Errors from normalizing a civil birth date-time-place.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date does not exist (e.g. 2023-02-30).
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Clock time outside 00:00:00..23:59:59.999.
    #[error("invalid time {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// UTC offset outside +-18 hours.
    #[error("invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),
    /// Latitude or longitude outside its range.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(&'static str),
    /// Julian Day at or before the epoch.
    #[error("julian day must be positive, got {0}")]
    InvalidJulianDay(f64),
    /// A Julian Day or coordinate that is NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFinite(&'static str),
    /// Text that could not be parsed as a date, time, or offset.
    #[error("cannot parse {what} from {input:?}")]
    Parse { what: &'static str, input: String },
}
