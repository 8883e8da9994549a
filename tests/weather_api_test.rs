use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use serde_json::{json, Value};
use solar_weather_api::adapters::open_meteo::DEFAULT_REQUEST_TIMEOUT;
use solar_weather_api::{build_router, OpenMeteoClient, WeatherService};
use std::sync::Arc;
use tower::ServiceExt;

fn app_for(server: &MockServer) -> Router {
    let client = OpenMeteoClient::new(&server.url("/v1/forecast"), DEFAULT_REQUEST_TIMEOUT)
        .expect("valid mock endpoint");
    let service = Arc::new(WeatherService::new(Arc::new(client)));
    build_router(service, &["*".to_string()])
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}

// ── /api/weather ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_weather_daily_success() {
    let server = MockServer::start_async().await;
    let raw = json!({
        "latitude": 10.0,
        "longitude": 20.0,
        "daily": {
            "time": ["2025-06-01", "2025-06-02"],
            "sunshine_duration": [3600, 7200],
            "temperature_2m_max": [25, 26],
            "temperature_2m_min": [15, 16],
            "weather_code": [0, 1]
        },
        "daily_units": {
            "sunshine_duration": "s",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C"
        }
    });

    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/forecast")
                .query_param("latitude", "10")
                .query_param("longitude", "20")
                .query_param("start_date", "2025-06-01")
                .query_param("end_date", "2025-06-02")
                .query_param(
                    "daily",
                    "sunshine_duration,temperature_2m_max,temperature_2m_min,weather_code",
                );
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(raw.clone());
        })
        .await;

    let (status, body) = get(app_for(&server), "/api/weather/10/20/2025-06-01/2025-06-02").await;

    api_mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "daily": raw["daily"],
            "daily_units": raw["daily_units"]
        })
    );
}

#[tokio::test]
async fn test_weather_daily_invalid_latlon() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/forecast");
            then.status(200).json_body(json!({}));
        })
        .await;

    let (status, body) = get(app_for(&server), "/api/weather/foo/bar").await;

    // 非數字座標不應觸發上游請求
    api_mock.assert_hits_async(0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("Latitude and longitude must be numeric"));
}

#[tokio::test]
async fn test_weather_daily_out_of_range() {
    let server = MockServer::start_async().await;

    let (status, body) = get(app_for(&server), "/api/weather/95/20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("Latitude must be"));
}

#[tokio::test]
async fn test_weather_daily_no_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/forecast");
            then.status(200).json_body(json!({}));
        })
        .await;

    let (status, body) = get(app_for(&server), "/api/weather/10/20").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(message(&body).contains("No weather data found"));
}

#[tokio::test]
async fn test_weather_daily_bad_date_order() {
    let server = MockServer::start_async().await;

    let (status, body) = get(app_for(&server), "/api/weather/10/20/2025-06-10/2025-06-05").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("start_date cannot be after end_date"));
}

#[tokio::test]
async fn test_weather_daily_bad_date_format() {
    let server = MockServer::start_async().await;

    let (status, body) = get(app_for(&server), "/api/weather/10/20/June-1/2025-06-05").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&body), "Dates must be YYYY-MM-DD.");
}

#[tokio::test]
async fn test_weather_daily_upstream_error_is_forwarded() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/forecast");
            then.status(503);
        })
        .await;

    let (status, body) = get(app_for(&server), "/api/weather/10/20").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(message(&body), "Open-Meteo error");
    assert_eq!(body["status"], 503);
}

#[tokio::test]
async fn test_weather_daily_unreachable_upstream() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = OpenMeteoClient::new(
        &format!("http://127.0.0.1:{}/v1/forecast", port),
        DEFAULT_REQUEST_TIMEOUT,
    )
    .unwrap();
    let app = build_router(
        Arc::new(WeatherService::new(Arc::new(client))),
        &["*".to_string()],
    );

    let (status, body) = get(app, "/api/weather/10/20").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["status"], 502);
    assert_eq!(body["error"], "Bad Gateway");
    assert!(message(&body).starts_with("Open-Meteo request failed"));
}

// ── /api/weekly ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_weather_weekly_success() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/forecast")
                .query_param(
                    "daily",
                    "sunshine_duration,temperature_2m_max,temperature_2m_min,weather_code,pressure_msl_mean",
                );
            then.status(200).json_body(json!({
                "daily": {
                    "time": ["2025-06-01", "2025-06-02"],
                    "pressure_msl_mean": [1000, 1020],
                    "temperature_2m_max": [5, 10],
                    "temperature_2m_min": [2, 0],
                    "sunshine_duration": [3600, 3600],
                    "weather_code": [3, 3, 2]
                }
            }));
        })
        .await;

    let (status, body) = get(app_for(&server), "/api/weekly/10/20/2025-06-01/2025-06-02").await;

    api_mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["avg_pressure_hPa"].as_f64(), Some(1010.0));
    assert_eq!(body["weekly_max_temp"], 10);
    assert_eq!(body["weekly_min_temp"], 0);
    assert_eq!(body["avg_sunshine_hours"].as_f64(), Some(1.0));
    assert_eq!(body["most_frequent_weather_code"], 3);
    assert_eq!(body["start_date"], "2025-06-01");
    assert_eq!(body["end_date"], "2025-06-02");
    // 上游沒給座標時輸出 null
    assert!(body["latitude"].is_null());
}

#[tokio::test]
async fn test_weather_weekly_invalid_latlon() {
    let server = MockServer::start_async().await;

    let (status, body) = get(app_for(&server), "/api/weekly/foo/bar").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message(&body).contains("Latitude and longitude must be numeric"));
}

#[tokio::test]
async fn test_weather_weekly_empty_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/forecast");
            then.status(200).json_body(json!({ "daily": {} }));
        })
        .await;

    let (status, body) = get(app_for(&server), "/api/weekly/10/20").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(message(&body).contains("Weather service returned empty data set"));
}

#[tokio::test]
async fn test_weather_weekly_no_daily() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/forecast");
            then.status(200).json_body(json!({}));
        })
        .await;

    let (status, body) = get(app_for(&server), "/api/weekly/10/20").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(message(&body).contains("No weather data found"));
}

// ── misc ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start_async().await;

    let (status, body) = get(app_for(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "solar-weather-api");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = MockServer::start_async().await;

    let (status, _) = get(app_for(&server), "/api/monthly/10/20").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
