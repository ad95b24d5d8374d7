//! End-to-end aggregation tests against a local mock server
//!
//! Exercises the full pipeline over real HTTP: success, per-source partial
//! failure, total failure, undecodable bodies, and the typeahead path.

use meteopoint::data::{Coordinate, GeocodingClient};
use meteopoint::report::ReportBuilder;
use mockito::Matcher;

const FORECAST_BODY: &str = r#"{
    "latitude": 23.5,
    "longitude": 87.25,
    "generationtime_ms": 0.42,
    "timezone": "UTC",
    "elevation": 77.0,
    "current_weather": {
        "temperature": 31.4,
        "windspeed": 11.2,
        "winddirection": 190.0,
        "weathercode": 2,
        "time": "2024-06-01T09:00"
    },
    "hourly": {
        "time": ["2024-06-01T08:00", "2024-06-01T09:00", "2024-06-01T10:00"],
        "temperature_2m": [30.1, 31.4, 32.0],
        "precipitation_probability": [5, 10, 20],
        "weathercode": [1, 2, 2]
    },
    "daily": {
        "time": ["2024-06-01", "2024-06-02"],
        "weathercode": [2, 61],
        "sunrise": ["2024-05-31T23:55", "2024-06-01T23:55"],
        "sunset": ["2024-06-01T12:40", "2024-06-02T12:41"],
        "temperature_2m_max": [36.5, 33.0]
    }
}"#;

const AIR_QUALITY_BODY: &str = r#"{
    "hourly": {
        "time": ["2024-06-01T08:00", "2024-06-01T09:00"],
        "pm10": [42.0, 44.5],
        "pm2_5": [21.0, 22.5],
        "us_aqi": [70]
    }
}"#;

fn test_location() -> Coordinate {
    Coordinate::new(23.5204, 87.3119, "Durgapur", "West Bengal")
}

fn builder_for(server: &mockito::ServerGuard) -> ReportBuilder {
    ReportBuilder::with_base_urls(
        format!("{}/v1/forecast", server.url()),
        format!("{}/v1/air-quality", server.url()),
    )
}

#[tokio::test]
async fn test_both_sources_succeed() {
    let mut server = mockito::Server::new_async().await;
    let forecast_mock = server
        .mock("GET", "/v1/forecast")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(FORECAST_BODY)
        .create_async()
        .await;
    let air_mock = server
        .mock("GET", "/v1/air-quality")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(AIR_QUALITY_BODY)
        .create_async()
        .await;

    let payload = builder_for(&server).assemble(&test_location()).await;

    forecast_mock.assert_async().await;
    air_mock.assert_async().await;

    assert!(payload.errors.forecast.is_none());
    assert!(payload.errors.air.is_none());

    let current = payload.current.expect("current missing");
    assert_eq!(current.temperature, Some(31.4));
    assert_eq!(current.description, "Partly cloudy");
    assert_eq!(current.time, "2024-06-01 14:30:00");

    assert_eq!(payload.hourly.len(), 3);
    assert_eq!(payload.hourly[0].time, "2024-06-01 13:30:00");

    assert_eq!(payload.daily.len(), 2);
    assert_eq!(
        payload.daily[1].values["description"],
        serde_json::json!("Slight rain")
    );
    assert_eq!(
        payload.daily[0].values["sunrise"],
        serde_json::json!("2024-06-01 05:25:00")
    );

    assert_eq!(payload.air_quality.len(), 2);
    assert_eq!(payload.air_quality[0].values["pm10"], serde_json::json!(42.0));
    // Short us_aqi column pads with null
    assert!(payload.air_quality[1].values["us_aqi"].is_null());

    let today = payload.today.expect("today missing");
    assert_eq!(today.temperature, Some(31.4));
    assert!(!today.temp_alert);

    assert_eq!(payload.meta.timezone.as_deref(), Some("UTC"));
    assert_eq!(payload.meta.elevation, Some(77.0));
    assert!(payload.meta.forecast_url.contains("/v1/forecast?"));
    assert!(payload.meta.air_quality_url.contains("/v1/air-quality?"));
}

#[tokio::test]
async fn test_air_quality_failure_keeps_forecast() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/forecast")
        .match_query(Matcher::Any)
        .with_body(FORECAST_BODY)
        .create_async()
        .await;
    server
        .mock("GET", "/v1/air-quality")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let payload = builder_for(&server).assemble(&test_location()).await;

    assert!(payload.errors.forecast.is_none());
    let air_error = payload.errors.air.expect("air error missing");
    assert!(air_error.contains("503"), "{}", air_error);

    assert!(payload.air_quality.is_empty());
    assert!(payload.current.is_some());
    assert!(payload.today.is_some());
    assert_eq!(payload.hourly.len(), 3);
    assert_eq!(payload.daily.len(), 2);
}

#[tokio::test]
async fn test_forecast_failure_keeps_air_quality() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/forecast")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/v1/air-quality")
        .match_query(Matcher::Any)
        .with_body(AIR_QUALITY_BODY)
        .create_async()
        .await;

    let payload = builder_for(&server).assemble(&test_location()).await;

    assert!(payload.errors.forecast.is_some());
    assert!(payload.errors.air.is_none());

    assert!(payload.current.is_none());
    assert!(payload.today.is_none());
    assert!(payload.hourly.is_empty());
    assert!(payload.daily.is_empty());
    assert_eq!(payload.air_quality.len(), 2);
}

#[tokio::test]
async fn test_total_failure_is_structurally_complete() {
    // Unroutable base URLs: both fetches fail at the transport level
    let builder = ReportBuilder::with_base_urls(
        "http://127.0.0.1:1/v1/forecast",
        "http://127.0.0.1:1/v1/air-quality",
    );

    let payload = builder.assemble(&test_location()).await;

    assert!(payload.errors.forecast.is_some());
    assert!(payload.errors.air.is_some());
    assert!(payload.current.is_none());
    assert!(payload.today.is_none());
    assert!(payload.hourly.is_empty());
    assert!(payload.daily.is_empty());
    assert!(payload.air_quality.is_empty());

    // Every top-level field still serializes
    let json = serde_json::to_value(&payload).expect("Failed to serialize payload");
    for key in [
        "location",
        "meta",
        "current",
        "hourly",
        "daily",
        "air_quality",
        "today",
        "errors",
    ] {
        assert!(json.get(key).is_some(), "missing top-level key {}", key);
    }
    assert_eq!(json["location"]["name"], "Durgapur");
}

#[tokio::test]
async fn test_undecodable_body_is_captured_per_source() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/forecast")
        .match_query(Matcher::Any)
        .with_body("<html>not json</html>")
        .create_async()
        .await;
    server
        .mock("GET", "/v1/air-quality")
        .match_query(Matcher::Any)
        .with_body(AIR_QUALITY_BODY)
        .create_async()
        .await;

    let payload = builder_for(&server).assemble(&test_location()).await;

    let forecast_error = payload.errors.forecast.expect("forecast error missing");
    assert!(forecast_error.contains("decode"), "{}", forecast_error);
    assert!(payload.errors.air.is_none());
    assert_eq!(payload.air_quality.len(), 2);
}

#[tokio::test]
async fn test_typeahead_short_query_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_body(r#"{"results": []}"#)
        .expect(0)
        .create_async()
        .await;

    let client = GeocodingClient::with_base_url(format!("{}/v1/search", server.url()));
    assert!(client.search("Du").await.is_empty());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_typeahead_maps_result_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/search")
        .match_query(Matcher::Any)
        .with_body(
            r#"{"results": [
                {"name": "Durgapur", "admin1": "West Bengal", "country": "India",
                 "latitude": 23.48, "longitude": 87.32},
                {"name": "Durgapur", "country": "Bangladesh",
                 "latitude": 25.17, "longitude": 90.68}
            ]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = GeocodingClient::with_base_url(format!("{}/v1/search", server.url()));
    let matches = client.search("Dur").await;

    mock.assert_async().await;
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].name, "Durgapur");
    assert_eq!(matches[0].region.as_deref(), Some("West Bengal"));
    assert_eq!(matches[0].country.as_deref(), Some("India"));
    assert!((matches[0].latitude - 23.48).abs() < 0.0001);
    assert!((matches[0].longitude - 87.32).abs() < 0.0001);
    assert!(matches[1].region.is_none());
}
