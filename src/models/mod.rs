// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Units, WeatherQuery, WeatherReading, ComparisonResult};
pub use requests::{ResultsQuery, ComparisonQuery, MAX_CITY_LEN};
pub use responses::{HomeView, CurrentWeatherView, ComparisonView, ErrorView, View, HealthResponse, ErrorResponse};
