// Integration tests for City Weather

mod common;

use actix_web::{http::StatusCode, test, web, App};
use chrono::Duration;
use city_weather::models::{ComparisonView, CurrentWeatherView, HomeView, Units};
use city_weather::routes::{configure_routes, handle_query_payload_error, AppState};
use common::{city_payload, paris_payload, StubProvider};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state(provider: Arc<StubProvider>) -> AppState {
    AppState {
        provider,
        default_units: Units::Metric,
    }
}

macro_rules! init_app {
    ($provider:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state($provider)))
                .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_results_end_to_end() {
    let provider = Arc::new(StubProvider::new().with_city("Paris", paris_payload()));
    let app = init_app!(provider.clone());

    let req = test::TestRequest::get()
        .uri("/results?city=Paris&units=metric")
        .to_request();
    let view: CurrentWeatherView = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view.city, "Paris");
    assert_eq!(view.description, "Clear sky");
    assert_eq!(view.units_letter, "C");
    assert_eq!(view.temp, 18.0);
    assert_eq!(view.humidity, 60);
    assert_eq!(view.wind_speed, 3.0);
    assert_eq!(view.icon, "01d");
    assert_eq!(view.sunrise.timestamp(), 1_700_000_000);
    assert_eq!(view.sunset.timestamp(), 1_700_040_000);
    assert_eq!(provider.calls(), vec![("Paris".to_string(), Units::Metric)]);
}

#[actix_web::test]
async fn test_results_empty_city_renders_error_only() {
    let provider = Arc::new(StubProvider::new().with_city("Paris", paris_payload()));
    let app = init_app!(provider);

    let req = test::TestRequest::get()
        .uri("/results?city=&units=metric")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"error": "Could not retrieve weather data for ''. Please try again."})
    );
}

#[actix_web::test]
async fn test_results_missing_params_use_default_units() {
    let provider = Arc::new(StubProvider::new());
    let app = init_app!(provider.clone());

    let req = test::TestRequest::get().uri("/results").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body.get("error").is_some());
    assert_eq!(provider.calls(), vec![(String::new(), Units::Metric)]);
}

#[actix_web::test]
async fn test_results_error_keeps_city_verbatim() {
    let provider = Arc::new(StubProvider::new());
    let app = init_app!(provider);

    let req = test::TestRequest::get()
        .uri("/results?city=S%C3%A3o%20Nowhere&units=imperial")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body["error"],
        "Could not retrieve weather data for 'São Nowhere'. Please try again."
    );
    assert_eq!(body.as_object().map(|o| o.len()), Some(1));
}

#[actix_web::test]
async fn test_comparison_results() {
    let t = 1_700_040_000;
    let provider = Arc::new(
        StubProvider::new()
            .with_city("Berlin", city_payload("Berlin", "few clouds", "02d", 20.0, 55, 4.0, t))
            .with_city("Rome", city_payload("Rome", "clear sky", "01d", 15.0, 65, 1.5, t - 7200)),
    );
    let app = init_app!(provider.clone());

    let req = test::TestRequest::get()
        .uri("/comparison_results?city1=Berlin&city2=Rome")
        .to_request();
    let view: ComparisonView = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view.city1, "Berlin");
    assert_eq!(view.city2, "Rome");
    assert_eq!(view.units, "C");
    assert_eq!(view.temp_diff, 5.0);
    assert_eq!(view.humidity_diff, -10);
    assert_eq!(view.wind_speed_diff, 2.5);
    assert_eq!(view.sunset_diff_hours, 2.0);
    assert_eq!(view.city1_icon, "02d");
    assert_eq!(view.city2_icon, "01d");
    assert_eq!(provider.calls().len(), 2);
}

#[actix_web::test]
async fn test_comparison_results_with_failed_lookup() {
    let provider = Arc::new(StubProvider::new().with_city("Berlin", paris_payload()));
    let app = init_app!(provider);

    let req = test::TestRequest::get()
        .uri("/comparison_results?city1=Berlin&city2=Gondor&units=imperial")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"error": "Could not retrieve weather data for 'Gondor'. Please try again."})
    );
}

#[actix_web::test]
async fn test_home_date_bounds() {
    let app = init_app!(Arc::new(StubProvider::new()));

    let req = test::TestRequest::get().uri("/").to_request();
    let view: HomeView = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view.max_date - view.min_date, Duration::days(5));
}

#[actix_web::test]
async fn test_duplicate_query_param_returns_json_error() {
    let app = init_app!(Arc::new(StubProvider::new()));

    let req = test::TestRequest::get()
        .uri("/results?city=Paris&city=Rome")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_query");
    assert_eq!(body["status_code"], 400);
}
