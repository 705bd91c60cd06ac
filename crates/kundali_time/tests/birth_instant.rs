use approx::assert_abs_diff_eq;
use kundali_time::{BirthDetails, GeoLocation, Instant, UtcTime, parse_date, parse_time, parse_utc_offset};

fn birth(date: &str, time: &str, offset: &str) -> BirthDetails {
    let (year, month, day) = parse_date(date).unwrap();
    let (hour, minute, second) = parse_time(time).unwrap();
    BirthDetails {
        year,
        month,
        day,
        hour,
        minute,
        second,
        utc_offset_minutes: parse_utc_offset(offset).unwrap(),
        latitude_deg: 19.0760,
        longitude_deg: 72.8777,
    }
}

#[test]
fn same_moment_in_different_zones_is_one_instant() {
    let mumbai = birth("1990-05-17", "14:30", "+05:30").to_instant().unwrap();
    let london = birth("1990-05-17", "10:00", "+01:00").to_instant().unwrap();
    let utc = birth("1990-05-17", "09:00", "Z").to_instant().unwrap();
    assert_abs_diff_eq!(mumbai.jd_ut, london.jd_ut, epsilon = 1e-9);
    assert_abs_diff_eq!(mumbai.jd_ut, utc.jd_ut, epsilon = 1e-9);
}

#[test]
fn instant_renders_back_to_utc() {
    let inst = birth("1990-05-17", "14:30:00", "+05:30").to_instant().unwrap();
    assert_eq!(inst.utc().unwrap().to_string(), "1990-05-17T09:00:00Z");
}

#[test]
fn instants_are_monotonic_in_civil_time() {
    let a = birth("2001-03-01", "00:00", "+00:00").to_instant().unwrap();
    let b = birth("2001-03-01", "00:01", "+00:00").to_instant().unwrap();
    // one minute = 1/1440 day
    assert_abs_diff_eq!(b.jd_ut - a.jd_ut, 1.0 / 1440.0, epsilon = 1e-8);
}

#[test]
fn instant_from_jd_keeps_location() {
    let loc = GeoLocation::new(12.97, 77.59).unwrap();
    let inst = Instant::from_jd(2_451_545.0, loc).unwrap();
    assert_eq!(inst.location, loc);
    let t = UtcTime::from_jd(inst.jd_ut).unwrap();
    assert_eq!(t.hour, 12);
}
