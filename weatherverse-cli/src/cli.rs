use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, PasswordDisplayMode, Select, Text};
use tracing::debug;
use weatherverse_core::{
    CityQuery, Config, SearchOutcome, SearchSession, location,
    random::seeded_or_clock,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherverse", version, about = "Weather with a sense of place")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the OpenWeather API key and defaults.
    Configure,

    /// Show weather, landmark and presentation for a city.
    Show {
        /// City name; defaults to the configured default city.
        city: Option<String>,

        /// Seed for generated place text and synthetic weather.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the whole result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the 5-day / 3-hour forecast for a city.
    Forecast {
        city: Option<String>,
    },

    /// List every city with landmark metadata.
    Locations,

    /// Search repeatedly, picking popular cities or typing a name.
    Interactive {
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config),
            Command::Show { city, seed, json } => show(&config, city, seed, json).await,
            Command::Forecast { city } => forecast(&config, city).await,
            Command::Locations => {
                render::print_locations(&location::all_locations());
                Ok(())
            }
            Command::Interactive { seed } => interactive(&config, seed).await,
        }
    }
}

fn session_for(config: &Config, seed: Option<u64>) -> SearchSession {
    let fetcher = config.fetcher().with_rng(seeded_or_clock(seed));
    if !fetcher.is_online() {
        eprintln!(
            "No OpenWeather API key configured; showing simulated weather.\n\
             Hint: run `weatherverse configure` or set {}.",
            weatherverse_core::config::API_KEY_ENV
        );
    }
    // Offset seed: place text and synthetic weather use separate streams.
    SearchSession::new(fetcher).with_rng(seeded_or_clock(seed.map(|s| s.wrapping_add(1))))
}

fn query_or_default(config: &Config, city: Option<String>) -> anyhow::Result<CityQuery> {
    let raw = city.unwrap_or_else(|| config.default_city().to_string());
    CityQuery::parse(&raw).with_context(|| format!("Invalid city name {raw:?}"))
}

async fn show(
    config: &Config,
    city: Option<String>,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let query = query_or_default(config, city)?;
    let session = session_for(config, seed);

    let outcome = session.search(&query).await;
    let bundle = outcome
        .accepted()
        .ok_or_else(|| anyhow!("search for {query} was superseded"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&**bundle)?);
    } else {
        render::print_bundle(bundle);
    }
    Ok(())
}

async fn forecast(config: &Config, city: Option<String>) -> anyhow::Result<()> {
    let query = query_or_default(config, city)?;
    let provider = config.openweather_provider().ok_or_else(|| {
        anyhow!(
            "Forecasts need an OpenWeather API key.\n\
             Hint: run `weatherverse configure` and enter your API key."
        )
    })?;

    let forecast = provider.fetch_forecast(query.as_str()).await?;
    render::print_forecast(&forecast);
    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    println!("Configuring WeatherVerse ({})", path.display());

    let api_key = Password::new("OpenWeather API key (leave empty to keep current):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let default_city = Text::new("Default city:").with_default(config.default_city()).prompt()?;
    config.default_city = Some(default_city.trim().to_string()).filter(|c| !c.is_empty());

    if Confirm::new("Use a custom API base URL?").with_default(false).prompt()? {
        let base_url = Text::new("Base URL:").with_default(config.base_url()).prompt()?;
        config.base_url = Some(base_url.trim().to_string());
    }

    config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

const OTHER_CITY: &str = "Other…";
const QUIT: &str = "Quit";

async fn interactive(config: &Config, seed: Option<u64>) -> anyhow::Result<()> {
    let session = session_for(config, seed);

    let mut options: Vec<&str> = location::POPULAR_CITIES.to_vec();
    options.extend([OTHER_CITY, QUIT]);

    loop {
        let choice = Select::new("City:", options.clone()).prompt()?;
        let raw = match choice {
            QUIT => break,
            OTHER_CITY => Text::new("Search for a city:").prompt()?,
            city => city.to_string(),
        };

        let query = match CityQuery::parse(&raw) {
            Ok(query) => query,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match session.search(&query).await {
            SearchOutcome::Accepted(bundle) => render::print_bundle(&bundle),
            SearchOutcome::Superseded { request_id, latest } => {
                debug!(request_id, latest, "search superseded");
            }
        }
    }

    Ok(())
}
