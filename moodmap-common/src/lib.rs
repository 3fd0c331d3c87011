//! # MoodMap Common Library
//!
//! Shared code for the MoodMap backend:
//! - Record types (moods, users, places)
//! - Configuration loading
//! - Error types
//! - Timestamp and id helpers

pub mod config;
pub mod error;
pub mod models;
pub mod time;
pub mod uuid_utils;

pub use error::{Error, Result};
pub use models::{MoodRecord, PlaceRecord, UserRecord};
