//! Nominatim (OpenStreetMap) search client, the primary provider

use async_trait::async_trait;
use serde::Deserialize;

use super::{check_status, Coordinates, GeocodeError, Geocoder};

/// One search hit; Nominatim sends coordinates as strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

pub struct NominatimGeocoder {
    http_client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(http_client: reqwest::Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(place = %place, url = %url, "Querying Nominatim");

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let hits: Vec<NominatimPlace> = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;

        hits.first().map(parse_place).transpose()
    }

    fn name(&self) -> &'static str {
        "nominatim"
    }
}

fn parse_place(hit: &NominatimPlace) -> Result<Coordinates, GeocodeError> {
    let parse = |field: &str, raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|e| GeocodeError::Parse(format!("{} '{}': {}", field, raw, e)))
    };
    Ok(Coordinates {
        latitude: parse("lat", &hit.lat)?,
        longitude: parse("lon", &hit.lon)?,
    })
}
