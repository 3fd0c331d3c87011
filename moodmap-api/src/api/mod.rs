//! HTTP API handlers for moodmap-api

pub mod health;
pub mod mood;
pub mod places;
pub mod user;

pub use health::{health_routes, root};
pub use mood::{current_mood, list_moods, mood_stats, record_mood};
pub use places::{get_places, list_mood_categories};
pub use user::{get_user, list_users, upsert_user};
