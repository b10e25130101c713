//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the calendar representation handed to and returned
//! by the next-event finder. UTC is treated as a uniform time scale; leap
//! seconds are not modelled.

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, days_in_month, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
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

    /// Midnight (0h UTC) of the given calendar day.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check field ranges, including the day against the month length.
    pub fn validate(&self) -> Result<(), TimeError> {
        let max_day = days_in_month(self.year, self.month)
            .ok_or(TimeError::InvalidMonth(self.month))?;
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
                max_day,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidTimeOfDay("hour must be 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidTimeOfDay("minute must be 0..=59"));
        }
        if !self.second.is_finite() || self.second < 0.0 || self.second >= 61.0 {
            return Err(TimeError::InvalidTimeOfDay("second must be in [0, 61)"));
        }
        Ok(())
    }

    /// Seconds elapsed since 0h UTC of this date.
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.hour) * 3600.0 + f64::from(self.minute) * 60.0 + self.second
    }

    /// Julian Date of 0h UTC on this date.
    pub fn midnight_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, f64::from(self.day))
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = f64::from(self.day) + self.seconds_of_day() / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar date/time for a Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
        Self::from_parts(year, month, day, total_seconds)
    }

    /// Date/time lying `seconds` after 0h UTC of the day starting at `jd_midnight`.
    ///
    /// `seconds` may be negative or exceed one day; the date rolls over into
    /// the neighbouring days. The calendar date is taken from whole days only,
    /// so the seconds keep their full precision.
    pub fn from_day_offset(jd_midnight: f64, seconds: f64) -> Self {
        let mut shift = (seconds / SECONDS_PER_DAY).floor();
        let mut rem = seconds - shift * SECONDS_PER_DAY;
        if rem >= SECONDS_PER_DAY {
            shift += 1.0;
            rem -= SECONDS_PER_DAY;
        }
        let (year, month, day_frac) = jd_to_calendar(jd_midnight + shift);
        Self::from_parts(year, month, day_frac.floor() as u32, rem.max(0.0))
    }

    fn from_parts(year: i32, month: u32, day: u32, total_seconds: f64) -> Self {
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Round to milliseconds before splitting so 59.9996 s carries into
        // the minute instead of printing as 60.000.
        let millis = (self.seconds_of_day() * 1000.0).round();
        let t = Self::from_day_offset(self.midnight_jd(), millis / 1000.0);
        if self.second.fract().abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                t.year,
                t.month,
                t.day,
                t.hour,
                t.minute,
                t.second.round() as u32
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                t.year, t.month, t.day, t.hour, t.minute, t.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 5.25);
        assert_eq!(t.to_string(), "2024-01-15T12:30:05.250Z");
    }

    #[test]
    fn display_carries_rounded_second() {
        let t = UtcTime::new(2024, 1, 15, 16, 13, 59.9996);
        assert_eq!(t.to_string(), "2024-01-15T16:14:00.000Z");
    }

    #[test]
    fn display_carries_into_next_day() {
        let t = UtcTime::new(2024, 12, 31, 23, 59, 59.9999);
        assert_eq!(t.to_string(), "2025-01-01T00:00:00.000Z");
    }

    #[test]
    fn seconds_of_day_noon() {
        let t = UtcTime::new(2024, 1, 15, 12, 0, 0.0);
        assert_eq!(t.seconds_of_day(), 43_200.0);
    }

    #[test]
    fn midnight_jd_matches_calendar() {
        let t = UtcTime::new(2024, 1, 15, 18, 45, 10.0);
        assert_eq!(t.midnight_jd(), 2_460_324.5);
    }

    #[test]
    fn jd_roundtrip() {
        let t = UtcTime::new(2024, 6, 1, 6, 15, 30.0);
        let back = UtcTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (2024, 6, 1));
        assert_eq!((back.hour, back.minute), (6, 15));
        assert!((back.second - 30.0).abs() < 1e-3, "second = {}", back.second);
    }

    #[test]
    fn day_offset_within_day() {
        let t = UtcTime::from_day_offset(2_460_324.5, 973.5 * 60.0);
        assert_eq!((t.year, t.month, t.day), (2024, 1, 15));
        assert_eq!((t.hour, t.minute), (16, 13));
        assert!((t.second - 30.0).abs() < 1e-9);
    }

    #[test]
    fn day_offset_rolls_forward() {
        // 2024-01-31 + 25 h → 2024-02-01 01:00
        let jd = calendar_to_jd(2024, 1, 31.0);
        let t = UtcTime::from_day_offset(jd, 25.0 * 3600.0);
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2024, 2, 1, 1, 0));
    }

    #[test]
    fn day_offset_rolls_backward() {
        // 2024-01-01 − 30 min → 2023-12-31 23:30
        let jd = calendar_to_jd(2024, 1, 1.0);
        let t = UtcTime::from_day_offset(jd, -1800.0);
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2023, 12, 31, 23, 30));
        assert!(t.second.abs() < 1e-9);
    }

    #[test]
    fn validate_accepts_leap_day() {
        assert!(UtcTime::midnight(2024, 2, 29).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        assert_eq!(
            UtcTime::midnight(2023, 2, 29).validate(),
            Err(TimeError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29,
                max_day: 28
            })
        );
        assert_eq!(
            UtcTime::midnight(2023, 0, 1).validate(),
            Err(TimeError::InvalidMonth(0))
        );
        assert!(UtcTime::new(2023, 1, 1, 24, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2023, 1, 1, 0, 60, 0.0).validate().is_err());
        assert!(UtcTime::new(2023, 1, 1, 0, 0, f64::NAN).validate().is_err());
    }
}
