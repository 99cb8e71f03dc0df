use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Static landmark metadata for a recognized city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    pub display_name: &'static str,
    pub landmark_id: &'static str,
    pub description: &'static str,
    pub coordinates: Coordinates,
}

/// Where a [`WeatherSnapshot`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotOrigin {
    Live,
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub condition_main: String,
    pub condition_description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub wind_degrees: u16,
    pub visibility_m: u32,
    pub cloud_cover_pct: u8,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub country_code: String,
    pub origin: SnapshotOrigin,
}

impl WeatherSnapshot {
    pub fn is_synthetic(&self) -> bool {
        self.origin == SnapshotOrigin::Synthetic
    }
}

/// Decorative card shown next to the weather.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceInfoRecord {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub fact: Option<String>,
}

/// One entry of a 5-day / 3-hour forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub time: DateTime<Utc>,
    pub temperature_c: f64,
    pub condition_main: String,
    pub condition_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location_name: String,
    pub entries: Vec<ForecastEntry>,
}
