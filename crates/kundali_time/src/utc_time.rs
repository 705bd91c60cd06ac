//! UTC calendar time with sub-second precision.
//!
//! `UtcTime` is the human-readable face of an [`Instant`](crate::Instant):
//! what gets printed in chart metadata and dasha period boundaries.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Day (UT) of this calendar time.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar time of a Julian Day (UT), rounded to the millisecond.
    ///
    /// A JD near 2.45e6 only resolves ~40 microseconds, so finer digits are noise.
    pub fn from_jd(jd_ut: f64) -> Result<Self, TimeError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::NonFinite("julian day"));
        }
        let (year, month, day_frac) = jd_to_calendar(jd_ut);
        let day = day_frac.floor() as u32;
        let millis = (day_frac.fract() * SECONDS_PER_DAY * 1e3).round() as i64;

        let midnight = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        Ok(Self::from(midnight + TimeDelta::milliseconds(millis)))
    }
}

impl From<NaiveDateTime> for UtcTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(1990, 5, 17, 9, 0, 0.0);
        assert_eq!(t.to_string(), "1990-05-17T09:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(1990, 5, 17, 9, 0, 7.25);
        assert_eq!(t.to_string(), "1990-05-17T09:00:07.250000Z");
    }

    #[test]
    fn j2000_noon_from_jd() {
        let t = UtcTime::from_jd(2_451_545.0).unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2000, 1, 1, 12, 0));
        assert!(t.second.abs() < 1e-6);
    }

    #[test]
    fn roundtrip_through_jd() {
        let t = UtcTime::new(1984, 11, 3, 21, 47, 12.5);
        let back = UtcTime::from_jd(t.to_jd()).unwrap();
        assert_eq!((back.year, back.month, back.day), (1984, 11, 3));
        assert_eq!((back.hour, back.minute), (21, 47));
        assert!((back.second - 12.5).abs() < 1e-9);
    }

    #[test]
    fn midnight_starts_new_year() {
        let jd = calendar_to_jd(2023, 12, 31.0) + 1.0;
        let t = UtcTime::from_jd(jd).unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2024, 1, 1, 0, 0));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(matches!(
            UtcTime::from_jd(f64::NAN),
            Err(TimeError::NonFinite(_))
        ));
    }
}
