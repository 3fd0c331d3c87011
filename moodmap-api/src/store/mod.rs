//! Process-lifetime in-memory stores
//!
//! Each store owns its list behind a `tokio::sync::RwLock` and is handed to
//! handlers through `AppState`. Nothing is persisted.

pub mod mood;
pub mod user;

pub use mood::{parse_limit, MoodStore, DEFAULT_RECENT_LIMIT};
pub use user::{Upsert, UserStore};
