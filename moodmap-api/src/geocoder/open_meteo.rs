//! Open-Meteo geocoding client, the fallback provider

use async_trait::async_trait;
use serde::Deserialize;

use super::{check_status, Coordinates, GeocodeError, Geocoder};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Absent entirely when nothing matched
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    latitude: f64,
    longitude: f64,
}

pub struct OpenMeteoGeocoder {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http_client: reqwest::Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/v1/search", self.base_url);
        tracing::debug!(place = %place, url = %url, "Querying Open-Meteo geocoding");

        let response = self
            .http_client
            .get(&url)
            .query(&[("name", place), ("count", "1"), ("format", "json")])
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let body: SearchResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;

        Ok(first_result(body))
    }

    fn name(&self) -> &'static str {
        "open-meteo"
    }
}

fn first_result(body: SearchResponse) -> Option<Coordinates> {
    body.results.first().map(|r| Coordinates {
        latitude: r.latitude,
        longitude: r.longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_result_is_used() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"results": [
                {"id": 2988507, "name": "Paris", "latitude": 48.85341, "longitude": 2.3488},
                {"id": 4717560, "name": "Paris", "latitude": 33.66094, "longitude": -95.55551}
            ], "generationtime_ms": 0.5}"#,
        )
        .unwrap();
        assert_eq!(
            first_result(body),
            Some(Coordinates {
                latitude: 48.85341,
                longitude: 2.3488
            })
        );
    }

    #[test]
    fn test_missing_results_means_no_match() {
        let body: SearchResponse = serde_json::from_str(r#"{"generationtime_ms": 0.2}"#).unwrap();
        assert_eq!(first_result(body), None);
    }
}
