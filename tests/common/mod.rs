// Shared test fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use city_weather::models::{Units, WeatherReading};
use city_weather::services::openweather::reading_from_payload;
use city_weather::services::{WeatherError, WeatherProvider};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Provider that answers from canned OpenWeatherMap payloads
///
/// Unknown cities get the provider's "city not found" payload.
#[derive(Default)]
pub struct StubProvider {
    payloads: HashMap<String, Value>,
    calls: Mutex<Vec<(String, Units)>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: &str, payload: Value) -> Self {
        self.payloads.insert(city.to_string(), payload);
        self
    }

    pub fn calls(&self) -> Vec<(String, Units)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn fetch(&self, city: &str, units: Units) -> Result<WeatherReading, WeatherError> {
        self.calls.lock().unwrap().push((city.to_string(), units));

        let payload = self
            .payloads
            .get(city)
            .cloned()
            .unwrap_or_else(|| json!({"cod": "404", "message": "city not found"}));

        reading_from_payload(payload)
    }
}

pub fn city_payload(
    name: &str,
    description: &str,
    icon: &str,
    temp: f64,
    humidity: i64,
    wind: f64,
    sunset: i64,
) -> Value {
    json!({
        "cod": 200,
        "name": name,
        "weather": [{"description": description, "icon": icon}],
        "main": {"temp": temp, "humidity": humidity},
        "wind": {"speed": wind},
        "sys": {"sunrise": sunset - 36_000, "sunset": sunset}
    })
}

pub fn paris_payload() -> Value {
    json!({
        "cod": 200,
        "name": "Paris",
        "weather": [{"description": "clear sky", "icon": "01d"}],
        "main": {"temp": 18, "humidity": 60},
        "wind": {"speed": 3},
        "sys": {"sunrise": 1700000000, "sunset": 1700040000}
    })
}
