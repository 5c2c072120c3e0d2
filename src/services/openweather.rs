use crate::models::{Units, WeatherReading};
use crate::services::provider::{WeatherError, WeatherProvider, UNKNOWN_ERROR};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Default OpenWeatherMap "current weather" endpoint
pub const DEFAULT_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap API client
///
/// Issues exactly one GET per lookup with the `q`, `units` and `appid`
/// query parameters. No retries.
pub struct OpenWeatherClient {
    api_url: String,
    api_key: String,
    client: Client,
}

impl OpenWeatherClient {
    /// Create a new client. Without a timeout the platform defaults apply.
    pub fn new(
        api_url: String,
        api_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            api_url,
            api_key,
            client: builder.build()?,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, city: &str, units: Units) -> Result<WeatherReading, WeatherError> {
        tracing::debug!("Fetching current weather for '{}' ({})", city, units);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", city),
                ("units", units.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let payload: Value = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(_) if !status.is_success() => Value::Null,
            Err(e) => {
                return Err(WeatherError::InvalidResponse(format!(
                    "Failed to parse response body: {}",
                    e
                )))
            }
        };

        if !status.is_success() {
            let message = payload_message(&payload);
            tracing::warn!("Weather lookup for '{}' failed: {} - {}", city, status, message);
            return Err(WeatherError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        reading_from_payload(payload)
    }
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default)]
    id: i64,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    #[serde(default)]
    timezone: i32,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    sys: OwSys,
}

/// Turn a provider payload into a reading
///
/// The payload counts as a success only when its `cod` is 200; the provider
/// sends `cod` as a number on success and as a string on most errors.
pub fn reading_from_payload(payload: Value) -> Result<WeatherReading, WeatherError> {
    match payload_code(&payload) {
        Some(200) => {}
        code => {
            return Err(WeatherError::Provider {
                status: code.unwrap_or(0),
                message: payload_message(&payload),
            })
        }
    }

    let parsed: OwCurrentResponse = serde_json::from_value(payload).map_err(|e| {
        WeatherError::InvalidResponse(format!("Failed to parse current weather: {}", e))
    })?;

    let weather = parsed
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::InvalidResponse("Missing weather array".into()))?;

    let utc_offset = FixedOffset::east_opt(parsed.timezone).ok_or_else(|| {
        WeatherError::InvalidResponse(format!("Invalid timezone offset: {}", parsed.timezone))
    })?;

    Ok(WeatherReading {
        city: parsed.name,
        description: weather.description,
        icon: weather.icon,
        condition_code: weather.id,
        temperature: parsed.main.temp,
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        sunrise: unix_to_utc(parsed.sys.sunrise)?,
        sunset: unix_to_utc(parsed.sys.sunset)?,
        utc_offset,
    })
}

fn payload_code(payload: &Value) -> Option<u16> {
    match payload.get("cod")? {
        Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn payload_message(payload: &Value) -> String {
    payload
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>, WeatherError> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| WeatherError::InvalidResponse(format!("Invalid timestamp: {}", ts)))
}
