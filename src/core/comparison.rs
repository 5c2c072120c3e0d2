use crate::models::{ComparisonResult, WeatherReading};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Compare two readings field by field (first minus second)
///
/// `city1`/`city2` are the names the user asked for, not the provider's
/// resolved names.
pub fn compare_readings(
    city1: &str,
    first: &WeatherReading,
    city2: &str,
    second: &WeatherReading,
) -> ComparisonResult {
    ComparisonResult {
        city1: city1.to_string(),
        city2: city2.to_string(),
        temp_diff: first.temperature - second.temperature,
        humidity_diff: first.humidity - second.humidity,
        wind_speed_diff: first.wind_speed - second.wind_speed,
        sunset_diff_hours: sunset_diff_hours(first, second),
        city1_icon: first.icon.clone(),
        city2_icon: second.icon.clone(),
    }
}

/// Sunset offset in fractional hours; positive when the first city's sunset is later
#[inline]
pub fn sunset_diff_hours(first: &WeatherReading, second: &WeatherReading) -> f64 {
    let diff = first.sunset - second.sunset;
    diff.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_HOUR
}
