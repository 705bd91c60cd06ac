//! Birth event normalization: civil date-time + UTC offset + place -> [`Instant`].

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};
use crate::utc_time::UtcTime;

/// Largest accepted UTC offset magnitude (minutes).
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Geographic coordinate in signed degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Validated constructor: latitude in [-90, 90], longitude in [-180, 180].
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, TimeError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(TimeError::NonFinite("coordinate"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TimeError::InvalidCoordinate("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(TimeError::InvalidCoordinate(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// A civil birth event as entered by a person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Local clock offset east of UTC, in minutes (+330 for IST).
    pub utc_offset_minutes: i32,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl BirthDetails {
    /// Normalize to a continuous instant.
    pub fn to_instant(&self) -> Result<Instant, TimeError> {
        let location = GeoLocation::new(self.latitude_deg, self.longitude_deg)?;
        let utc = self.to_utc()?;
        Ok(Instant {
            jd_ut: datetime_to_jd(&utc),
            location,
        })
    }

    /// Civil time shifted to UTC.
    pub fn to_utc(&self) -> Result<NaiveDateTime, TimeError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )?;
        let time = civil_time(self.hour, self.minute, self.second)?;
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::InvalidOffset(self.utc_offset_minutes));
        }
        let offset = FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .ok_or(TimeError::InvalidOffset(self.utc_offset_minutes))?;
        let local = offset
            .from_local_datetime(&NaiveDateTime::new(date, time))
            .single()
            .ok_or(TimeError::InvalidOffset(self.utc_offset_minutes))?;
        Ok(local.naive_utc())
    }
}

fn civil_time(hour: u32, minute: u32, second: f64) -> Result<NaiveTime, TimeError> {
    let invalid = TimeError::InvalidTime {
        hour,
        minute,
        second,
    };
    if !second.is_finite() || !(0.0..60.0).contains(&second) {
        return Err(invalid);
    }
    let whole = second.floor();
    let nanos = ((second - whole) * 1e9).round().min(999_999_999.0) as u32;
    NaiveTime::from_hms_nano_opt(hour, minute, whole as u32, nanos).ok_or(invalid)
}

fn datetime_to_jd(dt: &NaiveDateTime) -> f64 {
    let seconds = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
    calendar_to_jd(dt.year(), dt.month(), dt.day() as f64 + seconds / SECONDS_PER_DAY)
}

/// A single astronomical instant (Julian Day, UT) at a place.
///
/// Immutable once built; every downstream computation takes it by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instant {
    pub jd_ut: f64,
    pub location: GeoLocation,
}

impl Instant {
    /// Build from an already-known Julian Day. JD must be finite and positive.
    pub fn from_jd(jd_ut: f64, location: GeoLocation) -> Result<Self, TimeError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::NonFinite("julian day"));
        }
        if jd_ut <= 0.0 {
            return Err(TimeError::InvalidJulianDay(jd_ut));
        }
        Ok(Self { jd_ut, location })
    }

    /// UTC calendar rendering of this instant.
    pub fn utc(&self) -> Result<UtcTime, TimeError> {
        UtcTime::from_jd(self.jd_ut)
    }
}

// ---------------------------------------------------------------------------
// Text parsing
// ---------------------------------------------------------------------------

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::Parse {
        what: "date",
        input: s.to_string(),
    })?;
    Ok((d.year(), d.month(), d.day()))
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let s = s.trim();
    let t = NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| TimeError::Parse {
            what: "time",
            input: s.to_string(),
        })?;
    Ok((t.hour(), t.minute(), t.second() as f64))
}

/// Parse a UTC offset such as `+05:30`, `-0800`, `Z` into minutes.
pub fn parse_utc_offset(s: &str) -> Result<i32, TimeError> {
    let err = || TimeError::Parse {
        what: "utc offset",
        input: s.to_string(),
    };
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(0);
    }
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(err()),
    };
    if !rest.is_ascii() {
        return Err(err());
    }
    let (hh, mm) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !digits(hh) || !digits(mm) {
        return Err(err());
    }
    let hours: i32 = hh.parse().map_err(|_| err())?;
    let minutes: i32 = mm.parse().map_err(|_| err())?;
    if !(0..60).contains(&minutes) {
        return Err(err());
    }
    if hours > MAX_OFFSET_MINUTES / 60 {
        return Err(TimeError::InvalidOffset(sign * hours.saturating_mul(60)));
    }
    let total = sign * (hours * 60 + minutes);
    if total.abs() > MAX_OFFSET_MINUTES {
        return Err(TimeError::InvalidOffset(total));
    }
    Ok(total)
}
