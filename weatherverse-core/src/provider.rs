use crate::model::WeatherSnapshot;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A source of live current-conditions data.
///
/// Implementations are allowed to fail; [`crate::WeatherFetcher`] turns every
/// failure into a synthetic snapshot.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> anyhow::Result<WeatherSnapshot>;
}
