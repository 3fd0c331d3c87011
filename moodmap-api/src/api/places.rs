//! Place recommendation endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use moodmap_common::PlaceRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::geocoder::Geocoder;
use crate::places;
use crate::AppState;

/// Query parameters for GET /api/places
///
/// `lat`/`lng` are accepted for client compatibility and otherwise unused.
#[derive(Debug, Default, Deserialize)]
pub struct PlacesQuery {
    pub mood: Option<String>,
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl PlacesQuery {
    fn has_coordinates(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.lat) && present(&self.lng)
    }
}

#[derive(Debug, Serialize)]
pub struct MoodCategoriesResponse {
    pub moods: Vec<&'static str>,
}

/// GET /api/places?mood=&city=&lat=&lng=
///
/// When a city is given without coordinates it is geocoded in a background
/// task. The result is only logged and the response never waits for it.
/// An unreadable query string gets the default list.
pub async fn get_places(
    State(state): State<AppState>,
    query: Result<Query<PlacesQuery>, QueryRejection>,
) -> Json<Vec<PlaceRecord>> {
    let query = query.map(|Query(q)| q).unwrap_or_else(|e| {
        debug!("Ignoring unreadable places query: {}", e);
        PlacesQuery::default()
    });
    let city = query.city.as_deref().map(str::trim).filter(|c| !c.is_empty());

    if let Some(city) = city {
        if !query.has_coordinates() {
            tokio::spawn(log_coordinates(Arc::clone(&state.geocoder), city.to_string()));
        }
    }

    Json(places::recommend(query.mood.as_deref(), city))
}

async fn log_coordinates(geocoder: Arc<dyn Geocoder>, city: String) {
    match geocoder.geocode(&city).await {
        Ok(Some(coords)) => info!(
            city = %city,
            lat = coords.latitude,
            lng = coords.longitude,
            "Resolved city coordinates"
        ),
        Ok(None) => debug!(city = %city, "No coordinates for city"),
        Err(e) => warn!(city = %city, "Geocoding failed: {}", e),
    }
}

/// GET /api/places/moods
pub async fn list_mood_categories() -> Json<MoodCategoriesResponse> {
    Json(MoodCategoriesResponse {
        moods: places::categories(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: Option<&str>, lng: Option<&str>) -> PlacesQuery {
        PlacesQuery {
            lat: lat.map(String::from),
            lng: lng.map(String::from),
            ..PlacesQuery::default()
        }
    }

    #[test]
    fn test_has_coordinates_needs_both() {
        assert!(query(Some("48.85"), Some("2.35")).has_coordinates());
        assert!(!query(Some("48.85"), None).has_coordinates());
        assert!(!query(None, Some("2.35")).has_coordinates());
        assert!(!query(Some(""), Some("2.35")).has_coordinates());
    }
}
