//! One search at a time: runs the lookups for a query and keeps the latest result.
//!
//! Every search gets a monotonically increasing request id. When a search
//! finishes, its bundle only replaces the current one if no newer search has
//! been issued in the meantime; otherwise it is dropped as superseded. In-flight
//! searches are never cancelled.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::{
    fetcher::WeatherFetcher,
    location,
    model::{LocationRecord, PlaceInfoRecord, WeatherSnapshot},
    place,
    presentation::{self, Presentation},
    query::CityQuery,
    random::SharedRng,
};

/// Everything the front-end renders for one query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBundle {
    pub request_id: u64,
    pub query: String,
    pub location: Option<&'static LocationRecord>,
    pub weather: WeatherSnapshot,
    pub place: PlaceInfoRecord,
    pub presentation: Presentation,
    pub is_night: bool,
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Accepted(Arc<SearchBundle>),
    /// A newer search was issued while this one was in flight.
    Superseded { request_id: u64, latest: u64 },
}

impl SearchOutcome {
    pub fn accepted(&self) -> Option<&Arc<SearchBundle>> {
        match self {
            Self::Accepted(bundle) => Some(bundle),
            Self::Superseded { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct SearchSession {
    fetcher: WeatherFetcher,
    rng: SharedRng,
    night: Option<bool>,
    issued: AtomicU64,
    current: Mutex<Option<Arc<SearchBundle>>>,
}

impl SearchSession {
    pub fn new(fetcher: WeatherFetcher) -> Self {
        Self {
            fetcher,
            rng: SharedRng::default(),
            night: None,
            issued: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// RNG used for generated place cards.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = SharedRng::new(rng);
        self
    }

    /// Pin day/night instead of reading the local clock.
    pub fn with_night(mut self, is_night: bool) -> Self {
        self.night = Some(is_night);
        self
    }

    pub fn fetcher(&self) -> &WeatherFetcher {
        &self.fetcher
    }

    /// The most recently accepted bundle, if any.
    pub fn current(&self) -> Option<Arc<SearchBundle>> {
        self.lock_current().clone()
    }

    pub async fn search(&self, query: &CityQuery) -> SearchOutcome {
        let request_id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let city = query.as_str();

        let location = location::resolve(city);
        let place = self.rng.with(|rng| place::resolve_place_info(city, rng));
        let weather = self.fetcher.fetch(city).await;

        let is_night = self.night.unwrap_or_else(presentation::is_night_now);
        let presentation = presentation::map_weather_to_presentation(&weather.condition_main, is_night);

        self.commit(SearchBundle {
            request_id,
            query: city.to_string(),
            location,
            weather,
            place,
            presentation,
            is_night,
        })
    }

    fn commit(&self, bundle: SearchBundle) -> SearchOutcome {
        let mut current = self.lock_current();
        let latest = self.issued.load(Ordering::SeqCst);

        if bundle.request_id != latest {
            info!(request_id = bundle.request_id, latest, query = %bundle.query, "discarding stale search result");
            return SearchOutcome::Superseded { request_id: bundle.request_id, latest };
        }

        info!(request_id = bundle.request_id, query = %bundle.query, "search result accepted");
        let bundle = Arc::new(bundle);
        *current = Some(Arc::clone(&bundle));
        SearchOutcome::Accepted(bundle)
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<Arc<SearchBundle>>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Coordinates, SnapshotOrigin},
        place::GENERIC_DESCRIPTIONS,
        provider::{
            WeatherProvider,
            testing::{FailingProvider, FixedProvider},
        },
        synthetic::{self, SYNTHETIC_CONDITIONS},
    };
    use async_trait::async_trait;
    use rand::SeedableRng;
    use tokio::sync::oneshot;

    /// Holds back answers for one city until the gate opens.
    #[derive(Debug)]
    struct GatedProvider {
        slow_city: &'static str,
        gate: tokio::sync::Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl WeatherProvider for GatedProvider {
        async fn current(&self, city: &str) -> anyhow::Result<WeatherSnapshot> {
            if city == self.slow_city {
                let rx = self.gate.lock().await.take();
                if let Some(rx) = rx {
                    let _ = rx.await;
                }
            }
            let mut rng = StdRng::seed_from_u64(0);
            let mut snapshot = synthetic::generate(city, chrono::Utc::now(), &mut rng);
            snapshot.origin = SnapshotOrigin::Live;
            Ok(snapshot)
        }
    }

    fn query(s: &str) -> CityQuery {
        CityQuery::parse(s).unwrap()
    }

    #[tokio::test]
    async fn mumbai_end_to_end_with_failing_provider() {
        let session = SearchSession::new(WeatherFetcher::new(Box::new(FailingProvider)))
            .with_rng(StdRng::seed_from_u64(1))
            .with_night(false);

        let outcome = session.search(&query("Mumbai")).await;
        let bundle = outcome.accepted().expect("only search is accepted");

        let location = bundle.location.expect("Mumbai is in the location table");
        assert_eq!(location.display_name, "Gateway of India");
        assert_eq!(location.coordinates, Coordinates { lat: 18.9220, lon: 72.8347 });

        assert_eq!(bundle.place.name, "Gateway of India");
        assert_eq!(bundle.weather.location_name, "Mumbai");
        assert!(bundle.weather.is_synthetic());
        assert!(SYNTHETIC_CONDITIONS.iter().any(|(m, _)| *m == bundle.weather.condition_main));
        assert_eq!(
            bundle.presentation,
            presentation::map_weather_to_presentation(&bundle.weather.condition_main, false)
        );
    }

    #[tokio::test]
    async fn unknown_town_end_to_end() {
        let session = SearchSession::new(WeatherFetcher::offline()).with_night(true);

        let outcome = session.search(&query("Nonexistent Town")).await;
        let bundle = outcome.accepted().unwrap();

        assert!(bundle.location.is_none());
        assert_eq!(bundle.place.name, "Nonexistent Town");
        assert!(GENERIC_DESCRIPTIONS.contains(&bundle.place.description.as_str()));
        assert!(bundle.is_night);
    }

    #[tokio::test]
    async fn sequential_searches_replace_current() {
        let session = SearchSession::new(WeatherFetcher::new(Box::new(FixedProvider {
            condition: "Snow",
        })))
        .with_night(false);
        assert!(session.current().is_none());

        session.search(&query("Paris")).await;
        assert_eq!(session.current().unwrap().query, "Paris");

        session.search(&query("Tokyo")).await;
        let current = session.current().unwrap();
        assert_eq!(current.query, "Tokyo");
        assert_eq!(current.request_id, 2);
        assert_eq!(current.presentation.effect, presentation::EffectVariant::Snow);
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let (tx, rx) = oneshot::channel();
        let provider =
            GatedProvider { slow_city: "Paris", gate: tokio::sync::Mutex::new(Some(rx)) };
        let session = SearchSession::new(WeatherFetcher::new(Box::new(provider))).with_night(false);

        let (paris, london) = (query("Paris"), query("London"));
        let (s, l) = (&session, &london);

        let (first, second) = tokio::join!(session.search(&paris), async move {
            // Let the Paris search take request id 1 first.
            tokio::task::yield_now().await;
            let out = s.search(l).await;
            let _ = tx.send(());
            out
        });

        match first {
            SearchOutcome::Superseded { request_id, latest } => {
                assert_eq!(request_id, 1);
                assert_eq!(latest, 2);
            }
            SearchOutcome::Accepted(b) => panic!("stale Paris result was accepted: {b:?}"),
        }
        assert_eq!(second.accepted().unwrap().query, "London");

        let current = session.current().unwrap();
        assert_eq!(current.query, "London");
        assert_eq!(current.weather.location_name, "London");
    }
}
