use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Unit system understood by the weather provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Parse a units token. Anything unrecognised (or absent) is the provider
    /// default, `standard`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("metric") => Units::Metric,
            Some("imperial") => Units::Imperial,
            _ => Units::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Single display letter for temperatures in this unit system
    pub fn letter(&self) -> &'static str {
        match self {
            Units::Imperial => "F",
            Units::Metric => "C",
            Units::Standard => "K",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lookup against the provider
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherQuery {
    pub city: String,
    pub units: Units,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>, units: Units) -> Self {
        Self {
            city: city.into(),
            units,
        }
    }
}

/// Current conditions for one location, as reported by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Location name as resolved by the provider
    pub city: String,
    pub description: String,
    pub icon: String,
    pub condition_code: i64,
    pub temperature: f64,
    pub humidity: i64,
    pub wind_speed: f64,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    /// Shift of the location's local time from UTC
    pub utc_offset: FixedOffset,
}

impl WeatherReading {
    pub fn local_sunrise(&self) -> DateTime<FixedOffset> {
        self.sunrise.with_timezone(&self.utc_offset)
    }

    pub fn local_sunset(&self) -> DateTime<FixedOffset> {
        self.sunset.with_timezone(&self.utc_offset)
    }
}

/// Field-by-field difference between two readings
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub city1: String,
    pub city2: String,
    pub temp_diff: f64,
    pub humidity_diff: i64,
    pub wind_speed_diff: f64,
    pub sunset_diff_hours: f64,
    pub city1_icon: String,
    pub city2_icon: String,
}
