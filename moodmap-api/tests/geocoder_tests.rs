//! Geocoder client tests against local stand-in providers
//!
//! Each test starts a small axum server on 127.0.0.1:0 that answers in the
//! provider's response format, so no external network access is needed.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use moodmap_api::geocoder::{
    self, build_http_client, Coordinates, GeocodeError, Geocoder, NominatimGeocoder,
    OpenMeteoGeocoder,
};
use moodmap_api::{build_router, AppState};
use moodmap_common::config::GeocodingConfig;
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Start `app` on an ephemeral port and return its base URL
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on
async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn nominatim_app() -> Router {
    Router::new().route(
        "/search",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("format").map(String::as_str), Some("json"));
            match params.get("q").map(String::as_str) {
                Some("London") => Json(json!([{ "lat": "51.5073219", "lon": "-0.1276474" }])),
                _ => Json(json!([])),
            }
        }),
    )
}

fn open_meteo_app() -> Router {
    Router::new().route(
        "/v1/search",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            match params.get("name").map(String::as_str) {
                Some("Berlin") => Json(json!({
                    "results": [{ "name": "Berlin", "latitude": 52.52437, "longitude": 13.41053 }]
                })),
                _ => Json(json!({ "generationtime_ms": 0.1 })),
            }
        }),
    )
}

fn failing_app() -> Router {
    Router::new().fallback(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") })
}

/// Accepts the request and never answers within any test's patience
fn stalled_app() -> Router {
    Router::new().fallback(|| async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Json(json!([]))
    })
}

fn client() -> reqwest::Client {
    build_http_client("MoodMapTest/1.0", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_nominatim_hit() {
    let base = spawn(nominatim_app()).await;
    let geocoder = NominatimGeocoder::new(client(), &base);

    let coords = geocoder.geocode("London").await.unwrap();
    assert_eq!(
        coords,
        Some(Coordinates {
            latitude: 51.5073219,
            longitude: -0.1276474
        })
    );
}

#[tokio::test]
async fn test_nominatim_miss() {
    let base = spawn(nominatim_app()).await;
    let geocoder = NominatimGeocoder::new(client(), &base);

    assert_eq!(geocoder.geocode("Atlantis").await.unwrap(), None);
}

#[tokio::test]
async fn test_provider_error_status() {
    let base = spawn(failing_app()).await;
    let geocoder = NominatimGeocoder::new(client(), &base);

    match geocoder.geocode("London").await {
        Err(GeocodeError::Api(status, body)) => {
            assert_eq!(status, 503);
            assert_eq!(body, "try later");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_open_meteo_hit_and_miss() {
    let base = spawn(open_meteo_app()).await;
    let geocoder = OpenMeteoGeocoder::new(client(), &base);

    let berlin = geocoder.geocode("Berlin").await.unwrap().unwrap();
    assert_eq!(berlin.latitude, 52.52437);
    assert_eq!(berlin.longitude, 13.41053);

    assert_eq!(geocoder.geocode("Atlantis").await.unwrap(), None);
}

#[tokio::test]
async fn test_unreachable_provider_is_network_error() {
    let geocoder = OpenMeteoGeocoder::new(client(), &dead_url().await);
    assert!(matches!(
        geocoder.geocode("Berlin").await,
        Err(GeocodeError::Network(_))
    ));
}

fn chain_config(primary_url: String, fallback_url: String) -> GeocodingConfig {
    GeocodingConfig {
        enabled: true,
        primary_url,
        fallback_url,
        timeout_secs: 5,
        user_agent: "MoodMapTest/1.0".to_string(),
    }
}

#[tokio::test]
async fn test_chain_falls_back_when_primary_fails() {
    let config = chain_config(
        spawn(failing_app()).await,
        spawn(open_meteo_app()).await,
    );
    let geocoder = geocoder::from_config(&config).unwrap();

    let coords = geocoder.geocode("Berlin").await.unwrap();
    assert!(coords.is_some());
}

#[tokio::test]
async fn test_chain_returns_none_when_everything_fails() {
    let config = chain_config(dead_url().await, spawn(failing_app()).await);
    let geocoder = geocoder::from_config(&config).unwrap();

    assert_eq!(geocoder.geocode("Berlin").await.unwrap(), None);
}

#[tokio::test]
async fn test_places_endpoint_ignores_geocoder_outcome() {
    let config = chain_config(dead_url().await, dead_url().await);
    let app = build_router(AppState::new(geocoder::from_config(&config).unwrap()));

    let request = Request::builder()
        .uri("/api/places?mood=sad&city=Nowhere")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let places = body.as_array().unwrap();
    assert_eq!(places.len(), 3);
    assert_eq!(places[0]["name"], "Comfort Corner Diner");
    assert_eq!(places[0]["city"], "Nowhere");
}

#[tokio::test]
async fn test_places_endpoint_does_not_wait_for_slow_providers() {
    let config = chain_config(spawn(stalled_app()).await, spawn(stalled_app()).await);
    let app = build_router(AppState::new(geocoder::from_config(&config).unwrap()));

    let request = Request::builder()
        .uri("/api/places?mood=relaxed&city=Slowtown")
        .body(Body::empty())
        .unwrap();
    let response = tokio::time::timeout(Duration::from_secs(2), app.oneshot(request))
        .await
        .expect("places response should not wait for geocoding")
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body[0]["name"], "Serenity Tea House");
    assert_eq!(body[0]["city"], "Slowtown");
}
