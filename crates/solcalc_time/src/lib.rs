//! Calendar and Julian-day arithmetic.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (Gregorian, with the Julian-calendar
//!   branch before the 1582 reform on the inverse path)
//! - Julian-century mapping used by the solar polynomials
//! - `UtcTime`, the calendar date/time type used at the API boundary

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY, calendar_to_jd,
    centuries_to_jd, days_in_month, is_leap_year, jd_to_calendar, jd_to_centuries,
};
pub use utc_time::UtcTime;
