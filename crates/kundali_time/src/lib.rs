//! Civil birth time normalization.
//!
//! This crate provides:
//! - Julian Day <-> Gregorian calendar conversions
//! - `BirthDetails` validation (calendar, clock, UTC offset, coordinates)
//! - `Instant`, the single continuous time value every chart computation uses
//! - `UtcTime` rendering of Julian Days for period boundaries

pub mod error;
pub mod instant;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use instant::{
    BirthDetails, GeoLocation, Instant, MAX_OFFSET_MINUTES, parse_date, parse_time,
    parse_utc_offset,
};
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use utc_time::UtcTime;
