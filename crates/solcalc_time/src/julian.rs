//! Julian Day ↔ calendar conversions and the Julian-century time axis.
//!
//! The forward conversion always applies the Gregorian correction term, so a
//! calendar date is read as proleptic Gregorian. The inverse switches to the
//! Julian calendar for day numbers before the 1582 reform (JDN 2299161).
//!
//! Source: Meeus, *Astronomical Algorithms*, ch. 7, as used by the NOAA
//! solar calculator.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First Julian Day Number of the Gregorian calendar (1582-10-15).
const GREGORIAN_REFORM_JDN: f64 = 2_299_161.0;

/// Julian Date for a calendar date.
///
/// `day` may carry a fraction of a day; an integral `day` yields the JD of
/// that day's 0h UTC (always ending in `.5`).
///
/// January and February are treated as months 13 and 14 of the previous year.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let m = f64::from(m);

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Calendar date for a Julian Date.
///
/// Returns `(year, month, day)` where `day` carries the fraction of the day
/// elapsed since 0h UTC. Dates before JDN 2299161 come back in the Julian
/// calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < GREGORIAN_REFORM_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian Date from Julian centuries since J2000.0.
pub fn centuries_to_jd(t: f64) -> f64 {
    t * DAYS_PER_CENTURY + J2000_JD
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}
