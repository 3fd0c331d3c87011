//! City name to coordinates lookup
//!
//! A primary provider is tried first and a fallback provider second. Any
//! failure is logged and swallowed: callers only ever see `Some` or `None`.

mod nominatim;
mod open_meteo;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moodmap_common::config::GeocodingConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub use nominatim::NominatimGeocoder;
pub use open_meteo::OpenMeteoGeocoder;

/// Geocoding provider errors
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Anything that can turn a free-text place name into coordinates
///
/// `Ok(None)` means the provider answered but knows no such place.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError>;

    /// Short provider name for log lines
    fn name(&self) -> &'static str;
}

/// Tries `primary`, then `fallback`; never returns an error
pub struct FallbackGeocoder {
    primary: Box<dyn Geocoder>,
    fallback: Box<dyn Geocoder>,
}

impl FallbackGeocoder {
    pub fn new(primary: Box<dyn Geocoder>, fallback: Box<dyn Geocoder>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Geocoder for FallbackGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError> {
        for provider in [&self.primary, &self.fallback] {
            match provider.geocode(place).await {
                Ok(Some(coords)) => {
                    debug!(
                        provider = provider.name(),
                        place = %place,
                        lat = coords.latitude,
                        lng = coords.longitude,
                        "Geocoded place"
                    );
                    return Ok(Some(coords));
                }
                Ok(None) => {
                    debug!(provider = provider.name(), place = %place, "No geocoding match");
                }
                Err(e) => {
                    warn!(provider = provider.name(), place = %place, "Geocoding failed: {}", e);
                }
            }
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "fallback-chain"
    }
}

/// Geocoder that never makes a request
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledGeocoder;

#[async_trait]
impl Geocoder for DisabledGeocoder {
    async fn geocode(&self, _place: &str) -> Result<Option<Coordinates>, GeocodeError> {
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Build the provider chain described by the configuration
pub fn from_config(config: &GeocodingConfig) -> Result<Arc<dyn Geocoder>, GeocodeError> {
    if !config.enabled {
        return Ok(Arc::new(DisabledGeocoder));
    }

    let http_client = build_http_client(&config.user_agent, Duration::from_secs(config.timeout_secs))?;
    let primary = NominatimGeocoder::new(http_client.clone(), &config.primary_url);
    let fallback = OpenMeteoGeocoder::new(http_client, &config.fallback_url);

    Ok(Arc::new(FallbackGeocoder::new(
        Box::new(primary),
        Box::new(fallback),
    )))
}

/// Shared HTTP client for the providers
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, GeocodeError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
        .map_err(|e| GeocodeError::Network(e.to_string()))
}

/// Fail on non-2xx responses, keeping the body for the error message
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GeocodeError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GeocodeError::Api(status.as_u16(), body))
}
