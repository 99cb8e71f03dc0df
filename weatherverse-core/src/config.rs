use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    fetcher::WeatherFetcher,
    provider::{OpenWeatherProvider, openweather::DEFAULT_BASE_URL},
};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "WEATHERVERSE_API_KEY";

pub const DEFAULT_CITY: &str = "Mumbai";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Paris"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// OpenWeather API key. Without one every snapshot is synthetic.
    pub api_key: Option<String>,

    /// Override for the OpenWeather base URL.
    pub base_url: Option<String>,

    /// City shown when none is given.
    pub default_city: Option<String>,

    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherverse", "weatherverse")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key from the environment, falling back to the stored one. Blank keys count as unset.
    pub fn resolved_api_key(&self) -> Option<String> {
        let non_blank = |key: &String| !key.trim().is_empty();
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(non_blank)
            .or_else(|| self.api_key.clone().filter(non_blank))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn default_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn openweather_provider(&self) -> Option<OpenWeatherProvider> {
        self.resolved_api_key().map(|key| {
            OpenWeatherProvider::with_base_url(key, self.base_url().to_string(), Some(self.timeout()))
        })
    }

    /// Online fetcher when an API key is available, offline otherwise.
    pub fn fetcher(&self) -> WeatherFetcher {
        match self.openweather_provider() {
            Some(provider) => WeatherFetcher::new(Box::new(provider)),
            None => WeatherFetcher::offline(),
        }
    }
}
