use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use crate::models::Units;
use crate::services::DEFAULT_API_URL;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub weather: WeatherSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub api_key: String,
    #[serde(default = "default_units")]
    pub default_units: String,
    pub timeout_secs: Option<u64>,
}

impl WeatherSettings {
    pub fn default_units(&self) -> Units {
        Units::from_token(Some(self.default_units.as_str()))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_api_url() -> String { DEFAULT_API_URL.to_string() }
fn default_units() -> String { "metric".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with CITY_WEATHER)
    /// 5. `API_KEY` / `OPENWEATHER_API_KEY` for the provider key
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CITY_WEATHER__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = apply_api_key_override(settings, api_key_from_env())?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.weather.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "weather.api_key is empty; set API_KEY or OPENWEATHER_API_KEY".to_string(),
            ));
        }
        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CITY_WEATHER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// First non-empty of `API_KEY` and `OPENWEATHER_API_KEY`
fn api_key_from_env() -> Option<String> {
    ["API_KEY", "OPENWEATHER_API_KEY"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|key| !key.is_empty())
}

/// Override `weather.api_key` with a key taken from the plain environment
fn apply_api_key_override(
    settings: Config,
    api_key: Option<String>,
) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("weather.api_key", api_key)?;
    }

    builder.build()
}
