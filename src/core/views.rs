use crate::core::comparison::compare_readings;
use crate::models::{
    ComparisonView, CurrentWeatherView, ErrorView, HomeView, Units, View, WeatherQuery,
};
use crate::services::WeatherProvider;
use chrono::{DateTime, Duration, Utc};

/// How far back the entry form's date picker reaches
pub const HISTORY_DAYS: i64 = 5;

/// Date bounds for the entry form
pub fn home_view(now: DateTime<Utc>) -> HomeView {
    HomeView {
        min_date: now - Duration::days(HISTORY_DAYS),
        max_date: now,
    }
}

/// Current conditions for a single city
///
/// Provider failures never escape; they become the error view-model naming
/// the city exactly as requested.
pub async fn results_view(
    provider: &dyn WeatherProvider,
    query: &WeatherQuery,
    now: DateTime<Utc>,
) -> View<CurrentWeatherView> {
    let reading = match provider.fetch(&query.city, query.units).await {
        Ok(reading) => reading,
        Err(e) => {
            tracing::warn!("Weather lookup failed for '{}': {}", query.city, e);
            return View::Error(ErrorView::for_city(&query.city));
        }
    };

    View::Ok(CurrentWeatherView {
        date: now,
        description: capitalize(&reading.description),
        temp: reading.temperature,
        humidity: reading.humidity,
        wind_speed: reading.wind_speed,
        sunrise: reading.local_sunrise(),
        sunset: reading.local_sunset(),
        units_letter: query.units.letter().to_string(),
        icon: reading.icon,
        city: reading.city,
    })
}

/// Relative weather of two cities
///
/// Both lookups run concurrently. If either fails the result is the error
/// view-model for the first city that failed.
pub async fn comparison_view(
    provider: &dyn WeatherProvider,
    city1: &str,
    city2: &str,
    units: Units,
    now: DateTime<Utc>,
) -> View<ComparisonView> {
    let (first, second) = tokio::join!(provider.fetch(city1, units), provider.fetch(city2, units));

    let first = match first {
        Ok(reading) => reading,
        Err(e) => {
            tracing::warn!("Weather lookup failed for '{}': {}", city1, e);
            return View::Error(ErrorView::for_city(city1));
        }
    };
    let second = match second {
        Ok(reading) => reading,
        Err(e) => {
            tracing::warn!("Weather lookup failed for '{}': {}", city2, e);
            return View::Error(ErrorView::for_city(city2));
        }
    };

    let result = compare_readings(city1, &first, city2, &second);

    View::Ok(ComparisonView {
        city1: result.city1,
        city2: result.city2,
        todays_date: now,
        units: units.letter().to_string(),
        temp_diff: result.temp_diff,
        humidity_diff: result.humidity_diff,
        wind_speed_diff: result.wind_speed_diff,
        sunset_diff_hours: result.sunset_diff_hours,
        city1_icon: result.city1_icon,
        city2_icon: result.city2_icon,
    })
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
