//! Next sunrise/sunset search.
//!
//! Steps forward one day at a time from a starting day until
//! [`event_time_utc`] reports an event. Days without one (polar night,
//! midnight sun) are skipped. The date/time variant also skips an event that
//! has already happened at the caller's instant and keeps scanning from the
//! following day.
//!
//! The scan is bounded by [`SearchConfig::max_scan_days`]; running out of
//! days is reported as [`SunError::EventNotFound`].

use solcalc_time::{SECONDS_PER_DAY, UtcTime};
use tracing::{debug, trace};

use crate::error::SunError;
use crate::riseset::event_time_utc;
use crate::riseset_types::{GeoLocation, RiseSetEvent, RiseSetResult, SearchConfig};

const SECONDS_PER_MINUTE: f64 = 60.0;

fn check_inputs(location: &GeoLocation, config: &SearchConfig) -> Result<(), SunError> {
    config.validate().map_err(SunError::InvalidConfig)?;
    location.validate().map_err(SunError::InvalidLocation)?;
    Ok(())
}

/// Julian Day of the first day, starting at `jd`, that has an `event`.
///
/// `jd` is normally a 0h UTC Julian Day; the returned value keeps its
/// fraction and is `jd + n` for the smallest `n` with an event.
pub fn next_event_day(
    event: RiseSetEvent,
    jd: f64,
    location: &GeoLocation,
    config: &SearchConfig,
) -> Result<f64, SunError> {
    check_inputs(location, config)?;

    for offset in 0..config.max_scan_days {
        let day = jd + f64::from(offset);
        let result = event_time_utc(event, day, location)?;
        if result.is_event() {
            trace!(jd = day, event = event.name(), "found day with event");
            return Ok(day);
        }
        debug!(jd = day, ?result, "no {} this day, scanning forward", event.name());
    }

    Err(SunError::EventNotFound {
        event,
        scanned_days: config.max_scan_days,
    })
}

/// Date/time of the first `event` strictly after `date`.
///
/// Scanning starts at 0h UTC of `date`. An event is accepted once its
/// instant, truncated to whole seconds, lies after the caller's time of day
/// (also truncated to whole seconds). The result keeps the fractional
/// seconds of the event time.
pub fn next_event_at(
    event: RiseSetEvent,
    date: &UtcTime,
    location: &GeoLocation,
    config: &SearchConfig,
) -> Result<UtcTime, SunError> {
    date.validate()?;
    check_inputs(location, config)?;

    let jd_midnight = date.midnight_jd();
    let epoch_s = date.seconds_of_day().floor();

    for offset in 0..config.max_scan_days {
        let day = jd_midnight + f64::from(offset);
        match event_time_utc(event, day, location)? {
            RiseSetResult::Event { minutes_utc, .. } => {
                let event_s = minutes_utc * SECONDS_PER_MINUTE;
                let since_start_s = f64::from(offset) * SECONDS_PER_DAY + event_s.floor();
                if since_start_s > epoch_s {
                    let found = UtcTime::from_day_offset(day, event_s);
                    trace!(jd = day, %found, "next {}", event.name());
                    return Ok(found);
                }
                debug!(
                    jd = day,
                    minutes_utc,
                    "{} already past at {date}, scanning from the next day",
                    event.name()
                );
            }
            no_event => {
                debug!(jd = day, ?no_event, "no {} this day, scanning forward", event.name());
            }
        }
    }

    Err(SunError::EventNotFound {
        event,
        scanned_days: config.max_scan_days,
    })
}

/// Julian Day of the next day with a sunrise, starting at `jd`.
pub fn next_sunrise_day(jd: f64, latitude_deg: f64, longitude_deg: f64) -> Result<f64, SunError> {
    next_event_day(
        RiseSetEvent::Sunrise,
        jd,
        &GeoLocation::new(latitude_deg, longitude_deg),
        &SearchConfig::default(),
    )
}

/// Julian Day of the next day with a sunset, starting at `jd`.
pub fn next_sunset_day(jd: f64, latitude_deg: f64, longitude_deg: f64) -> Result<f64, SunError> {
    next_event_day(
        RiseSetEvent::Sunset,
        jd,
        &GeoLocation::new(latitude_deg, longitude_deg),
        &SearchConfig::default(),
    )
}

/// Next sunrise after `date` (UTC).
pub fn next_sunrise_at(
    date: &UtcTime,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<UtcTime, SunError> {
    next_event_at(
        RiseSetEvent::Sunrise,
        date,
        &GeoLocation::new(latitude_deg, longitude_deg),
        &SearchConfig::default(),
    )
}

/// Next sunset after `date` (UTC).
pub fn next_sunset_at(
    date: &UtcTime,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<UtcTime, SunError> {
    next_event_at(
        RiseSetEvent::Sunset,
        date,
        &GeoLocation::new(latitude_deg, longitude_deg),
        &SearchConfig::default(),
    )
}
