use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use std::sync::Arc;
use validator::{Validate, ValidationErrors};
use crate::core::{comparison_view, home_view, resolve_units, results_view};
use crate::models::{ComparisonQuery, ErrorResponse, HealthResponse, ResultsQuery, Units, WeatherQuery};
use crate::services::WeatherProvider;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    /// Units used when a request does not name any
    pub default_units: Units,
}

/// Configure all weather routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/health", web::get().to(health_check))
        .route("/results", web::get().to(results))
        .route("/comparison_results", web::get().to(comparison_results));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Entry form bounds
///
/// GET /
async fn home() -> impl Responder {
    HttpResponse::Ok().json(home_view(Utc::now()))
}

/// Current weather for one city
///
/// GET /results?city={city}&units={metric|imperial|standard}
async fn results(
    state: web::Data<AppState>,
    query: web::Query<ResultsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let units = resolve_units(query.units.as_deref(), state.default_units);
    let weather_query = WeatherQuery::new(query.city.clone().unwrap_or_default(), units);

    tracing::info!("Looking up weather for '{}' ({})", weather_query.city, units);

    let view = results_view(state.provider.as_ref(), &weather_query, Utc::now()).await;

    HttpResponse::Ok().json(view)
}

/// Relative weather for two cities
///
/// GET /comparison_results?city1={city}&city2={city}&units={metric|imperial|standard}
async fn comparison_results(
    state: web::Data<AppState>,
    query: web::Query<ComparisonQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let city1 = query.city1.as_deref().unwrap_or_default();
    let city2 = query.city2.as_deref().unwrap_or_default();
    let units = resolve_units(query.units.as_deref(), state.default_units);

    tracing::info!("Comparing weather for '{}' and '{}' ({})", city1, city2, units);

    let view = comparison_view(state.provider.as_ref(), city1, city2, units, Utc::now()).await;

    HttpResponse::Ok().json(view)
}

fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed for query: {}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
