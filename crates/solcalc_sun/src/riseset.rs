//! Sunrise/sunset time for a single day.
//!
//! Two-pass algorithm of the NOAA solar calculator: locate solar noon from
//! the equation of time, take the Sun's declination there to get a first
//! rise/set estimate, then re-evaluate declination and equation of time at
//! that estimate.
//!
//! Times are minutes after 0h UTC of the Julian Day passed in. Longitude is
//! positive west (see [`GeoLocation`]).

use solcalc_time::{MINUTES_PER_DAY, jd_to_centuries};

use crate::error::SunError;
use crate::riseset_types::{GeoLocation, HourAngle, RiseSetEvent, RiseSetResult};
use crate::solar_position::{equation_of_time_min, solar_position};

/// Zenith distance of the Sun's centre at apparent sunrise/sunset.
///
/// 90 deg plus 34' of horizontal refraction and 16' of solar semidiameter.
pub const SUNRISE_ZENITH_DEG: f64 = 90.833;

/// Minutes after 0h UTC at which the Sun would transit for zero longitude
/// and zero equation of time.
const MEAN_NOON_MIN: f64 = 720.0;

/// Minutes of time per degree of longitude or hour angle.
const MIN_PER_DEG: f64 = 4.0;

/// Hour angle of the Sun at sunrise or sunset.
///
/// `cos H = cos(z) / (cos φ · cos δ) − tan φ · tan δ` with `z` =
/// [`SUNRISE_ZENITH_DEG`]. An argument above 1 means the Sun never reaches
/// the horizon (polar night); below −1 it never drops under it (midnight sun).
///
/// The sunrise angle is positive and the sunset angle negative, matching
/// `time = noon + 4·(longitude − H)` with longitude positive west.
pub fn hour_angle(event: RiseSetEvent, latitude_deg: f64, declination_deg: f64) -> HourAngle {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();

    let cos_h = SUNRISE_ZENITH_DEG.to_radians().cos() / (phi.cos() * dec.cos())
        - phi.tan() * dec.tan();

    // Polar check
    if cos_h > 1.0 {
        return HourAngle::NeverRises;
    }
    if cos_h < -1.0 {
        return HourAngle::NeverSets;
    }

    let h = cos_h.acos();
    if event.is_rising() {
        HourAngle::Angle(h)
    } else {
        HourAngle::Angle(-h)
    }
}

/// UTC time of local solar noon in minutes after 0h UTC of `jd`.
///
/// The first estimate evaluates the equation of time a longitude-dependent
/// fraction of a day after `jd`; the second re-evaluates it at that estimate.
pub fn solar_noon_utc_min(jd: f64, longitude_deg: f64) -> f64 {
    let t_approx = jd_to_centuries(jd + longitude_deg / 360.0);
    let noon = MEAN_NOON_MIN + longitude_deg * MIN_PER_DEG - equation_of_time_min(t_approx);

    let t_noon = jd_to_centuries(jd - 0.5 + noon / MINUTES_PER_DAY);
    MEAN_NOON_MIN + longitude_deg * MIN_PER_DEG - equation_of_time_min(t_noon)
}

/// One rise/set estimate from the solar quantities at centuries `t`.
fn event_minutes_at(
    event: RiseSetEvent,
    t: f64,
    location: &GeoLocation,
) -> Result<f64, RiseSetResult> {
    let sun = solar_position(t);
    match hour_angle(event, location.latitude_deg, sun.declination_deg) {
        HourAngle::Angle(h) => {
            let delta = location.longitude_deg - h.to_degrees();
            Ok(MEAN_NOON_MIN + MIN_PER_DEG * delta - sun.equation_of_time_min)
        }
        HourAngle::NeverRises => Err(RiseSetResult::NeverRises),
        HourAngle::NeverSets => Err(RiseSetResult::NeverSets),
    }
}

/// Compute a single rise/set event for the day starting at `jd`.
///
/// # Arguments
/// * `event` — sunrise or sunset
/// * `jd` — Julian Day of 0h UTC of the desired date
/// * `location` — observer location (longitude positive west)
///
/// # Returns
/// * `RiseSetResult::Event` with minutes after 0h UTC of `jd`
/// * `RiseSetResult::NeverRises` if the Sun stays below the horizon (polar night)
/// * `RiseSetResult::NeverSets` if the Sun stays above the horizon (midnight sun)
///
/// Fails only for an invalid location.
pub fn event_time_utc(
    event: RiseSetEvent,
    jd: f64,
    location: &GeoLocation,
) -> Result<RiseSetResult, SunError> {
    location.validate().map_err(SunError::InvalidLocation)?;

    let noon = solar_noon_utc_min(jd, location.longitude_deg);
    let t_noon = jd_to_centuries(jd + noon / MINUTES_PER_DAY);

    // First pass: declination at solar noon
    let first = match event_minutes_at(event, t_noon, location) {
        Ok(minutes) => minutes,
        Err(no_event) => return Ok(no_event),
    };

    // Second pass includes the fraction of the day up to the first estimate
    let t_event = jd_to_centuries(jd + first / MINUTES_PER_DAY);
    match event_minutes_at(event, t_event, location) {
        Ok(minutes_utc) => Ok(RiseSetResult::Event { minutes_utc, event }),
        Err(no_event) => Ok(no_event),
    }
}

/// Sunrise in minutes after 0h UTC of `jd`.
pub fn sunrise_utc_min(
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<RiseSetResult, SunError> {
    let location = GeoLocation::new(latitude_deg, longitude_deg);
    event_time_utc(RiseSetEvent::Sunrise, jd, &location)
}

/// Sunset in minutes after 0h UTC of `jd`.
pub fn sunset_utc_min(
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<RiseSetResult, SunError> {
    let location = GeoLocation::new(latitude_deg, longitude_deg);
    event_time_utc(RiseSetEvent::Sunset, jd, &location)
}
