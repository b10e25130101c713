use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use clap::Parser;
use solcalc_sun::{GeoLocation, RiseSetEvent, SearchConfig, UtcTime, next_event_at};
use tracing_subscriber::EnvFilter;

/// Hammerfest, with longitude positive west.
const DEFAULT_LAT: f64 = 70.5;
const DEFAULT_LON: f64 = -23.5;

#[derive(Parser)]
#[command(
    name = "solcalc",
    version,
    about = "Next sunrise and sunset (UTC) after a given date/time"
)]
struct Cli {
    /// UTC date/time, YYYY-MM-DD[Thh:mm[:ss]] (default: now)
    #[arg(short, long)]
    date: Option<String>,
    /// Latitude in decimal degrees, north positive
    #[arg(long, default_value_t = DEFAULT_LAT, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in decimal degrees, WEST positive
    #[arg(long = "long", default_value_t = DEFAULT_LON, allow_negative_numbers = true)]
    long: f64,
    /// Give up after scanning this many days without an event
    #[arg(long, default_value_t = 400)]
    max_days: u32,
    /// Log the day-by-day scan to stderr (filter with RUST_LOG)
    #[arg(long)]
    log: bool,
}

fn utc_from_naive(dt: NaiveDateTime) -> UtcTime {
    UtcTime::new(
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1e9,
    )
}

fn parse_date(s: &str) -> Result<UtcTime, String> {
    // "YYYY-MM-DD", "YYYY-MM-DDThh:mm" or "YYYY-MM-DDThh:mm:ss[.fff]", optional Z
    let s = s.trim().trim_end_matches('Z');
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(utc_from_naive(dt));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| UtcTime::midnight(d.year(), d.month(), d.day()))
        .map_err(|_| format!("Bad date format: {s} (expected YYYY-MM-DD[Thh:mm[:ss]])"))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.log {
        init_logging();
    }

    let date = match &cli.date {
        Some(s) => parse_date(s).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => utc_from_naive(Utc::now().naive_utc()),
    };
    let location = GeoLocation::new(cli.lat, cli.long);
    let config = SearchConfig {
        max_scan_days: cli.max_days,
    };

    println!("Using latitude {}, longitude {}", cli.lat, cli.long);
    println!("Using date/time {date}");

    for (label, event) in [
        ("Next Sunrise", RiseSetEvent::Sunrise),
        ("Next Sunset", RiseSetEvent::Sunset),
    ] {
        let found = next_event_at(event, &date, &location, &config).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
        println!("{label}: {found}");
    }
}
