//! moodmap-api library
//!
//! REST backend for MoodMap: mood logging, user preferences and
//! mood-based place recommendations. All state is in memory.

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod geocoder;
pub mod places;
pub mod store;

use geocoder::{DisabledGeocoder, Geocoder};
use store::{MoodStore, UserStore};

/// Application state shared across HTTP handlers
///
/// Stores are owned here and live as long as the router does, so every
/// test gets its own isolated data by building its own state.
#[derive(Clone)]
pub struct AppState {
    pub moods: Arc<MoodStore>,
    pub users: Arc<UserStore>,
    /// Used only to log where a requested city is
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Create new application state with empty stores
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            moods: Arc::new(MoodStore::new()),
            users: Arc::new(UserStore::new()),
            geocoder,
        }
    }

    /// Empty stores and no outbound geocoding
    pub fn offline() -> Self {
        Self::new(Arc::new(DisabledGeocoder))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/mood", get(api::list_moods).post(api::record_mood))
        .route("/api/mood/current", get(api::current_mood))
        .route("/api/mood/stats", get(api::mood_stats))
        .route("/api/user", get(api::list_users).post(api::upsert_user))
        .route("/api/user/:id", get(api::get_user))
        .route("/api/places", get(api::get_places))
        .route("/api/places/moods", get(api::list_mood_categories));

    Router::new()
        .route("/", get(api::root))
        .merge(api::health_routes())
        .merge(api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
