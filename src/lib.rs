//! City Weather - current conditions and two-city comparisons
//!
//! This library looks up current weather from OpenWeatherMap and reshapes it
//! into view-models for a single city, a comparison of two cities, and the
//! entry form.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{units_letter, compare_readings, home_view, results_view, comparison_view};
pub use crate::models::{Units, WeatherQuery, WeatherReading, ComparisonResult, View};
pub use crate::services::{OpenWeatherClient, WeatherProvider, WeatherError};
