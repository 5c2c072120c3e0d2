use crate::models::{Units, WeatherReading};
use async_trait::async_trait;
use thiserror::Error;

/// Message used when the provider gives no reason for a failure
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Errors that can occur when looking up the weather
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    /// Message suitable for showing to a user
    pub fn message(&self) -> String {
        match self {
            WeatherError::Provider { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Source of current weather readings
///
/// The HTTP client is the production implementation; handlers only depend on
/// this trait so they can be driven without network access.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self, city: &str, units: Units) -> Result<WeatherReading, WeatherError>;
}
