// Service exports
pub mod openweather;
pub mod provider;

pub use openweather::{OpenWeatherClient, DEFAULT_API_URL};
pub use provider::{WeatherError, WeatherProvider, UNKNOWN_ERROR};
