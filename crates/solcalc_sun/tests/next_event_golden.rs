//! Next-event search scenarios: polar seasons, past events, scan limits.

use solcalc_sun::{
    GeoLocation, RiseSetEvent, SearchConfig, SunError, UtcTime, calendar_to_jd, next_event_at,
    next_sunrise_at, next_sunrise_day, next_sunset_at, next_sunset_day, sunrise_utc_min,
    sunset_utc_min,
};

const HAMMERFEST_LAT: f64 = 70.5;
const HAMMERFEST_LON: f64 = -23.5;

fn is_after(a: &UtcTime, b: &UtcTime) -> bool {
    a.to_jd() > b.to_jd()
}

#[test]
fn hammerfest_sunrise_after_midnight_sun() {
    let start = UtcTime::midnight(2024, 6, 1);
    let sunrise = next_sunrise_at(&start, HAMMERFEST_LAT, HAMMERFEST_LON).unwrap();
    assert!(is_after(&sunrise, &start), "{sunrise} not after {start}");
    // Midnight sun at 70.5 N lasts until late July.
    assert_eq!((sunrise.year, sunrise.month), (2024, 7), "sunrise = {sunrise}");
    assert!((27..=31).contains(&sunrise.day), "sunrise = {sunrise}");
}

#[test]
fn hammerfest_sunset_after_midnight_sun() {
    let start = UtcTime::midnight(2024, 6, 1);
    let sunset = next_sunset_at(&start, HAMMERFEST_LAT, HAMMERFEST_LON).unwrap();
    assert!(is_after(&sunset, &start), "{sunset} not after {start}");
    assert_eq!((sunset.year, sunset.month), (2024, 7), "sunset = {sunset}");
    assert!((27..=31).contains(&sunset.day), "sunset = {sunset}");
}

#[test]
fn oslo_sunset_same_evening() {
    let start = UtcTime::new(2024, 1, 15, 12, 0, 0.0);
    let sunset = next_sunset_at(&start, 59.9, 10.7).unwrap();
    assert_eq!((sunset.year, sunset.month, sunset.day), (2024, 1, 15));
    assert_eq!((sunset.hour, sunset.minute), (16, 14), "sunset = {sunset}");

    // Matches the single-day two-pass result to well under a second.
    let jd = calendar_to_jd(2024, 1, 15.0);
    let minutes = sunset_utc_min(jd, 59.9, 10.7).unwrap().minutes_utc().unwrap();
    let diff_s = sunset.seconds_of_day() - minutes * 60.0;
    assert!(diff_s.abs() < 1e-6, "diff = {diff_s} s");
}

#[test]
fn oslo_sunset_after_dark_is_tomorrow() {
    let start = UtcTime::new(2024, 1, 15, 20, 0, 0.0);
    let sunset = next_sunset_at(&start, 59.9, 10.7).unwrap();
    assert_eq!((sunset.year, sunset.month, sunset.day), (2024, 1, 16));
}

#[test]
fn fractional_seconds_are_kept() {
    let start = UtcTime::new(2024, 1, 15, 12, 0, 0.0);
    let sunset = next_sunset_at(&start, 59.9, 10.7).unwrap();
    assert!(sunset.second.fract() > 0.0, "sunset = {sunset}");
    assert!(sunset.second < 60.0);
}

#[test]
fn next_day_result_has_event() {
    let jd = calendar_to_jd(2024, 6, 1.0);
    let day = next_sunrise_day(jd, HAMMERFEST_LAT, HAMMERFEST_LON).unwrap();
    assert!(day > jd);
    assert_eq!((day - jd).fract(), 0.0, "whole-day steps expected");
    assert!(
        sunrise_utc_min(day, HAMMERFEST_LAT, HAMMERFEST_LON)
            .unwrap()
            .is_event()
    );
    // The day before still has midnight sun.
    assert!(
        !sunrise_utc_min(day - 1.0, HAMMERFEST_LAT, HAMMERFEST_LON)
            .unwrap()
            .is_event()
    );
}

#[test]
fn next_sunset_day_idempotent() {
    let jd = calendar_to_jd(2024, 6, 1.0);
    let day = next_sunset_day(jd, HAMMERFEST_LAT, HAMMERFEST_LON).unwrap();
    assert_eq!(next_sunset_day(day, HAMMERFEST_LAT, HAMMERFEST_LON).unwrap(), day);
}

#[test]
fn near_pole_polar_night_ends_in_march() {
    let start = UtcTime::midnight(2024, 12, 1);
    let sunrise = next_sunrise_at(&start, 89.9, 0.0).unwrap();
    assert_eq!((sunrise.year, sunrise.month), (2025, 3), "sunrise = {sunrise}");
    assert!((14..=22).contains(&sunrise.day), "sunrise = {sunrise}");
}

#[test]
fn near_pole_short_scan_gives_up() {
    let start = UtcTime::midnight(2024, 12, 1);
    let loc = GeoLocation::new(89.9, 0.0);
    let config = SearchConfig { max_scan_days: 30 };
    assert_eq!(
        next_event_at(RiseSetEvent::Sunrise, &start, &loc, &config),
        Err(SunError::EventNotFound {
            event: RiseSetEvent::Sunrise,
            scanned_days: 30
        })
    );
}

#[test]
fn new_york_sunset_lands_on_next_utc_date() {
    let start = UtcTime::new(2024, 6, 21, 12, 0, 0.0);
    let sunset = next_sunset_at(&start, 40.71, 74.0).unwrap();
    assert_eq!((sunset.year, sunset.month, sunset.day), (2024, 6, 22));
    assert_eq!((sunset.hour, sunset.minute), (0, 30), "sunset = {sunset}");
}

#[test]
fn far_east_sunrise_on_previous_utc_day_is_skipped_when_past() {
    // At 170 E the sunrise of each UTC day falls at ~18:44 of the day before
    // (minutes_utc ≈ -316). The candidate from the next day's computation,
    // 2024-03-20 18:43, is still before the 20:00 start and must be skipped.
    let start = UtcTime::new(2024, 3, 20, 20, 0, 0.0);
    let sunrise = next_sunrise_at(&start, 0.0, -170.0).unwrap();
    assert!(is_after(&sunrise, &start), "{sunrise} not after {start}");
    assert_eq!((sunrise.year, sunrise.month, sunrise.day), (2024, 3, 21));
    assert_eq!((sunrise.hour, sunrise.minute), (18, 43), "sunrise = {sunrise}");

    let minutes = sunrise_utc_min(calendar_to_jd(2024, 3, 22.0), 0.0, -170.0)
        .unwrap()
        .minutes_utc()
        .unwrap();
    assert!(minutes < 0.0, "minutes = {minutes}");
}
