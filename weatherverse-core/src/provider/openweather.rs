use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Forecast, ForecastEntry, SnapshotOrigin, WeatherSnapshot};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string(), None)
    }

    pub fn with_base_url(api_key: String, base_url: String, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        // Builder only fails on TLS backend init; a default client has the same backend.
        let http = builder.build().unwrap_or_default();

        Self { api_key, base_url: base_url.trim_end_matches('/').to_string(), http }
    }

    async fn get_json(&self, endpoint: &str, city: &str) -> Result<String> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, city, "requesting OpenWeather {endpoint}");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {endpoint} request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot> {
        let body = self.get_json("weather", city).await?;
        parse_current(&body)
    }

    /// 5-day / 3-hour forecast. There is no synthetic fallback for this one.
    pub async fn fetch_forecast(&self, city: &str) -> Result<Forecast> {
        let body = self.get_json("forecast", city).await?;
        parse_forecast(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    #[serde(default)]
    temp_min: Option<f64>,
    #[serde(default)]
    temp_max: Option<f64>,
    #[serde(default)]
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    #[serde(default)]
    deg: u16,
}

#[derive(Debug, Default, Deserialize)]
struct OwClouds {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    clouds: OwClouds,
    #[serde(default)]
    visibility: u32,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn parse_current(body: &str) -> Result<WeatherSnapshot> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather current JSON")?;

    let (condition_main, condition_description) = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| (w.main, w.description))
        .unwrap_or_else(|| ("Unknown".to_string(), "unknown".to_string()));

    let sunrise = unix_to_utc(parsed.sys.sunrise)
        .ok_or_else(|| anyhow!("OpenWeather sunrise out of range: {}", parsed.sys.sunrise))?;
    let sunset = unix_to_utc(parsed.sys.sunset)
        .ok_or_else(|| anyhow!("OpenWeather sunset out of range: {}", parsed.sys.sunset))?;

    Ok(WeatherSnapshot {
        location_name: parsed.name,
        condition_main,
        condition_description,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        temp_min_c: parsed.main.temp_min.unwrap_or(parsed.main.temp),
        temp_max_c: parsed.main.temp_max.unwrap_or(parsed.main.temp),
        humidity_pct: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        wind_speed_mps: parsed.wind.speed,
        wind_degrees: parsed.wind.deg,
        visibility_m: parsed.visibility,
        cloud_cover_pct: parsed.clouds.all,
        sunrise,
        sunset,
        country_code: parsed.sys.country,
        origin: SnapshotOrigin::Live,
    })
}

fn parse_forecast(body: &str) -> Result<Forecast> {
    let parsed: OwForecastResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather forecast JSON")?;

    if parsed.list.is_empty() {
        return Err(anyhow!("OpenWeather forecast response contained no data"));
    }

    let entries = parsed
        .list
        .into_iter()
        .filter_map(|entry| {
            let time = unix_to_utc(entry.dt)?;
            let weather = entry.weather.into_iter().next();
            Some(ForecastEntry {
                time,
                temperature_c: entry.main.temp,
                condition_main: weather
                    .as_ref()
                    .map(|w| w.main.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                condition_description: weather
                    .map(|w| w.description)
                    .unwrap_or_else(|| "unknown".to_string()),
            })
        })
        .collect();

    let location_name = if parsed.city.country.is_empty() {
        parsed.city.name
    } else {
        format!("{}, {}", parsed.city.name, parsed.city.country)
    };

    Ok(Forecast { location_name, entries })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot> {
        self.fetch_current(city).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
