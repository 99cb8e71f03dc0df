use chrono::Utc;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::{
    model::WeatherSnapshot,
    provider::WeatherProvider,
    random::SharedRng,
    synthetic,
};

/// Fetches current weather and never fails.
///
/// Any provider error (bad status, network failure, unparseable body) is logged
/// and replaced by a synthetic snapshot, so callers always get something to render.
#[derive(Debug)]
pub struct WeatherFetcher {
    provider: Option<Box<dyn WeatherProvider>>,
    rng: SharedRng,
}

impl WeatherFetcher {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider: Some(provider), rng: SharedRng::default() }
    }

    /// A fetcher with no provider: every snapshot is synthetic.
    pub fn offline() -> Self {
        Self { provider: None, rng: SharedRng::default() }
    }

    /// Replace the RNG used for synthetic snapshots.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = SharedRng::new(rng);
        self
    }

    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn fetch(&self, city: &str) -> WeatherSnapshot {
        match &self.provider {
            Some(provider) => match provider.current(city).await {
                Ok(snapshot) => return snapshot,
                Err(err) => {
                    warn!(city, error = %format!("{err:#}"), "weather fetch failed, using synthetic data");
                }
            },
            None => debug!(city, "no weather provider configured, using synthetic data"),
        }

        let now = Utc::now();
        self.rng.with(|rng| synthetic::generate(city, now, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::SnapshotOrigin,
        provider::{
            OpenWeatherProvider,
            testing::{FailingProvider, FixedProvider},
        },
        synthetic::SYNTHETIC_CONDITIONS,
    };
    use rand::SeedableRng;
    use std::time::Duration;

    fn is_synthetic_condition(condition: &str) -> bool {
        SYNTHETIC_CONDITIONS.iter().any(|(main, _)| *main == condition)
    }

    #[tokio::test]
    async fn failing_provider_falls_back() {
        let fetcher = WeatherFetcher::new(Box::new(FailingProvider));

        let snapshot = fetcher.fetch("Mumbai").await;
        assert_eq!(snapshot.location_name, "Mumbai");
        assert_eq!(snapshot.origin, SnapshotOrigin::Synthetic);
        assert!(is_synthetic_condition(&snapshot.condition_main));
    }

    #[tokio::test]
    async fn empty_city_still_resolves() {
        let fetcher = WeatherFetcher::new(Box::new(FailingProvider));
        let snapshot = fetcher.fetch("").await;
        assert_eq!(snapshot.location_name, "");
        assert!(snapshot.is_synthetic());
    }

    #[tokio::test]
    async fn network_failure_falls_back() {
        let provider = OpenWeatherProvider::with_base_url(
            "KEY".into(),
            "http://127.0.0.1:9".into(),
            Some(Duration::from_secs(2)),
        );
        let fetcher = WeatherFetcher::new(Box::new(provider));

        let snapshot = fetcher.fetch("Nonexistent Town").await;
        assert_eq!(snapshot.location_name, "Nonexistent Town");
        assert!(snapshot.is_synthetic());
    }

    #[tokio::test]
    async fn error_status_falls_back() {
        use wiremock::{Mock, MockServer, ResponseTemplate, matchers::path};

        let server = MockServer::start().await;
        Mock::given(path("/weather"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"cod":"404","message":"city not found"}"#),
            )
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("KEY".into(), server.uri(), None);
        let fetcher = WeatherFetcher::new(Box::new(provider));

        let snapshot = fetcher.fetch("Mumbai").await;
        assert_eq!(snapshot.origin, SnapshotOrigin::Synthetic);
        assert_eq!(snapshot.location_name, "Mumbai");
        assert!(is_synthetic_condition(&snapshot.condition_main));
    }

    #[tokio::test]
    async fn live_data_passes_through() {
        let fetcher = WeatherFetcher::new(Box::new(FixedProvider { condition: "Haze" }));
        let snapshot = fetcher.fetch("Paris").await;
        assert_eq!(snapshot.condition_main, "Haze");
        assert_eq!(snapshot.origin, SnapshotOrigin::Live);
    }

    #[tokio::test]
    async fn offline_fetcher_is_reproducible_with_seed() {
        let a = WeatherFetcher::offline().with_rng(StdRng::seed_from_u64(5));
        let b = WeatherFetcher::offline().with_rng(StdRng::seed_from_u64(5));
        assert!(!a.is_online());

        let sa = a.fetch("Tokyo").await;
        let sb = b.fetch("Tokyo").await;
        assert_eq!(sa.condition_main, sb.condition_main);
        assert_eq!(sa.temperature_c, sb.temperature_c);
        assert_eq!(sa.humidity_pct, sb.humidity_pct);
    }
}
