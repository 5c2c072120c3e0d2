use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// View-model for the entry form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub min_date: DateTime<Utc>,
    pub max_date: DateTime<Utc>,
}

/// View-model for a single city's current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherView {
    pub date: DateTime<Utc>,
    pub city: String,
    pub description: String,
    pub temp: f64,
    pub humidity: i64,
    pub wind_speed: f64,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    pub units_letter: String,
    pub icon: String,
}

/// View-model for two cities side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub city1: String,
    pub city2: String,
    pub todays_date: DateTime<Utc>,
    pub units: String,
    pub temp_diff: f64,
    pub humidity_diff: i64,
    pub wind_speed_diff: f64,
    pub sunset_diff_hours: f64,
    pub city1_icon: String,
    pub city2_icon: String,
}

/// View-model shown in place of results when a lookup fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorView {
    pub error: String,
}

impl ErrorView {
    pub fn for_city(city: &str) -> Self {
        Self {
            error: format!("Could not retrieve weather data for '{}'. Please try again.", city),
        }
    }
}

/// Either a rendered result or the error view-model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum View<T> {
    Ok(T),
    Error(ErrorView),
}

impl<T> View<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, View::Error(_))
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
