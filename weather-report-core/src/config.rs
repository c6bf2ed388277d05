use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::error::ConfigError;

pub const DEFAULT_CITY: &str = "Seoul";
pub const DEFAULT_DISPLAY_NAME: &str = "서울";
pub const DEFAULT_OUTPUT_PATH: &str = "/opt/airflow/data/README.md";
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_UNITS: &str = "metric";

/// Everything one activation needs. Stored on disk as TOML.
///
/// Example TOML:
/// ```toml
/// city = "Seoul"
/// display_name = "서울"
/// api_key = "..."
/// output_path = "/opt/airflow/data/README.md"
/// timezone = "Asia/Seoul"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City name sent to the provider as `q`.
    pub city: String,

    /// Name used in the weather sentence. See [`Config::city_label`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    pub output_path: PathBuf,

    pub base_url: String,

    pub units: String,

    /// IANA zone for the report timestamp. Unset means naive local time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// HTTP timeout in seconds. Unset means no timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            display_name: None,
            api_key: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            units: DEFAULT_UNITS.to_string(),
            timezone: None,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load config from the platform location, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-report", "weather-report")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Explicit display name, else the Korean name for the default city, else the city itself.
    pub fn city_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) => name,
            None if self.city == DEFAULT_CITY => DEFAULT_DISPLAY_NAME,
            None => &self.city,
        }
    }

    /// Replace the city. A display name set for the old city no longer applies.
    pub fn set_city(&mut self, city: String) {
        self.city = city;
        self.display_name = None;
    }

    pub fn report_timezone(&self) -> Result<Option<Tz>, ConfigError> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| ConfigError::UnknownTimezone(name.to_string()))
            })
            .transpose()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
