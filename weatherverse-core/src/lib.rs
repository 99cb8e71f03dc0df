//! Core library for WeatherVerse.
//!
//! This crate defines:
//! - Static landmark and place-card tables
//! - Live weather from OpenWeather, with a synthetic fallback that never fails
//! - The mapping from weather conditions to presentation tokens
//! - A search session that keeps only the latest result
//!
//! It is used by `weatherverse-cli`, but can also be reused by other front-ends.

pub mod config;
pub mod fetcher;
pub mod location;
pub mod model;
pub mod place;
pub mod presentation;
pub mod provider;
pub mod query;
pub mod random;
pub mod session;
pub mod synthetic;

pub use config::Config;
pub use fetcher::WeatherFetcher;
pub use location::resolve;
pub use model::{Coordinates, LocationRecord, PlaceInfoRecord, SnapshotOrigin, WeatherSnapshot};
pub use place::{is_indian_village, resolve_place_info};
pub use presentation::{Presentation, map_weather_to_presentation};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use query::{CityQuery, QueryError};
pub use session::{SearchBundle, SearchOutcome, SearchSession};
