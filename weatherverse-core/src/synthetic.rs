//! Randomized stand-in for live weather data.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, seq::SliceRandom};

use crate::model::{SnapshotOrigin, WeatherSnapshot};

/// The eight conditions a synthetic snapshot can report, with their descriptions.
pub const SYNTHETIC_CONDITIONS: [(&str, &str); 8] = [
    ("Clear", "clear sky"),
    ("Clouds", "scattered clouds"),
    ("Rain", "light rain"),
    ("Drizzle", "light intensity drizzle"),
    ("Thunderstorm", "thunderstorm"),
    ("Snow", "light snow"),
    ("Mist", "mist"),
    ("Fog", "fog"),
];

/// Build a well-formed snapshot for `city` without touching the network.
pub fn generate<R: Rng + ?Sized>(city: &str, now: DateTime<Utc>, rng: &mut R) -> WeatherSnapshot {
    let (main, description) = *SYNTHETIC_CONDITIONS
        .choose(rng)
        .unwrap_or(&SYNTHETIC_CONDITIONS[0]);

    let temperature_c = rng.gen_range(10.0..40.0);

    WeatherSnapshot {
        location_name: city.to_string(),
        condition_main: main.to_string(),
        condition_description: description.to_string(),
        temperature_c,
        feels_like_c: temperature_c,
        temp_min_c: temperature_c - 2.0,
        temp_max_c: temperature_c + 2.0,
        humidity_pct: rng.gen_range(40..80),
        pressure_hpa: rng.gen_range(1000..1200),
        wind_speed_mps: rng.gen_range(1.0..11.0),
        wind_degrees: rng.gen_range(0..360),
        visibility_m: 10_000,
        cloud_cover_pct: rng.gen_range(0..100),
        sunrise: now - Duration::hours(6),
        sunset: now + Duration::hours(6),
        country_code: String::new(),
        origin: SnapshotOrigin::Synthetic,
    }
}
