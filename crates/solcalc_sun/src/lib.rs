//! Sunrise and sunset in UTC from the NOAA low-precision solar pipeline.
//!
//! This crate provides:
//! - Solar position series (declination, equation of time) over Julian centuries
//! - Sunrise/sunset hour angle at the standard 90.833 deg zenith
//! - Two-pass sunrise/sunset time for a given day
//! - A bounded forward search for the next sunrise/sunset, skipping polar
//!   days and nights
//!
//! Latitude is positive north. Longitude is positive WEST, the convention
//! the solar-noon formula `720 + 4·longitude − EqTime` is written in.
//!
//! ```
//! use solcalc_sun::{UtcTime, next_sunset_at};
//!
//! let now = UtcTime::new(2024, 1, 15, 12, 0, 0.0);
//! let sunset = next_sunset_at(&now, 59.9, 10.7).unwrap();
//! assert_eq!((sunset.year, sunset.month, sunset.day), (2024, 1, 15));
//! ```

pub mod error;
pub mod next_event;
pub mod riseset;
pub mod riseset_types;
pub mod solar_position;
pub(crate) mod util;

pub use error::SunError;
pub use next_event::{
    next_event_at, next_event_day, next_sunrise_at, next_sunrise_day, next_sunset_at,
    next_sunset_day,
};
pub use riseset::{
    SUNRISE_ZENITH_DEG, event_time_utc, hour_angle, solar_noon_utc_min, sunrise_utc_min,
    sunset_utc_min,
};
pub use riseset_types::{GeoLocation, HourAngle, RiseSetEvent, RiseSetResult, SearchConfig};
pub use solar_position::{SolarPosition, declination_deg, equation_of_time_min, solar_position};

// Re-export the calendar layer so callers need a single dependency.
pub use solcalc_time::{TimeError, UtcTime, calendar_to_jd, jd_to_calendar, jd_to_centuries};
