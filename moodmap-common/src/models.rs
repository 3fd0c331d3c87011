//! Record types shared between the stores, the recommender and the HTTP layer
//!
//! All records serialize with camelCase field names, which is what the
//! frontend reads and writes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::Timestamp;

/// A logged, self-reported mood
///
/// Created once on insert and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRecord {
    pub id: Uuid,
    /// Trimmed, never empty
    pub mood: String,
    /// True when typed in by the user rather than picked from the presets
    pub is_custom: bool,
    /// Client-supplied text, or server time when the client sent none
    pub timestamp: Timestamp,
    /// Server time at insertion
    pub created_at: DateTime<Utc>,
}

/// A stored set of user preferences
///
/// Keyed by case-insensitive (name, city); see the user store for the
/// upsert rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// True if this record is the one addressed by `(name, city)`
    pub fn matches(&self, name: &str, city: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.city.to_lowercase() == city.to_lowercase()
    }

    /// Redacted view used by the user listing
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            city: self.city.clone(),
            preferences: self.preferences.clone(),
            created_at: self.created_at,
        }
    }
}

/// User record without `updatedAt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub preferences: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A recommended point of interest
///
/// Built from static catalog data with `address` and `city` filled in for
/// the caller's city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: String,
    pub rating: f32,
    pub address: String,
    pub city: String,
    pub description: String,
    pub hours: String,
    pub price: String,
    pub phone: String,
    pub website: String,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
}

/// Occurrence count for one mood string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

/// Aggregate counts over every stored mood
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStats {
    pub total_moods: usize,
    pub unique_moods: usize,
    pub custom_mood_count: usize,
    pub preset_mood_count: usize,
    pub most_common_moods: Vec<MoodCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(name: &str, city: &str) -> UserRecord {
        let now = Utc::now();
        UserRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            city: city.to_string(),
            preferences: vec!["Parks & Nature".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_user_matches_ignores_case() {
        let u = user("Ada", "London");
        assert!(u.matches("ada", "LONDON"));
        assert!(!u.matches("Ada", "Paris"));
        assert!(!u.matches("Adam", "London"));
    }

    #[test]
    fn test_user_summary_omits_updated_at() {
        let value = serde_json::to_value(user("Ada", "London").summary()).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_none());
        assert_eq!(value["preferences"], json!(["Parks & Nature"]));
    }

    #[test]
    fn test_mood_record_uses_camel_case() {
        let now = Utc::now();
        let record = MoodRecord {
            id: Uuid::new_v4(),
            mood: "Happy".to_string(),
            is_custom: true,
            timestamp: Timestamp::parse("2025-05-01T11:30:00.000+02:00").unwrap(),
            created_at: now,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["isCustom"], json!(true));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("is_custom").is_none());
        assert_eq!(value["timestamp"], json!("2025-05-01T11:30:00.000+02:00"));
    }

    #[test]
    fn test_place_type_field_name() {
        let place = PlaceRecord {
            id: 1,
            name: "Quiet Cafe".to_string(),
            place_type: "cafe".to_string(),
            rating: 4.5,
            address: "1 Main St, Springfield".to_string(),
            city: "Springfield".to_string(),
            description: String::new(),
            hours: String::new(),
            price: "$".to_string(),
            phone: String::new(),
            website: String::new(),
            amenities: vec![],
            photos: vec![],
        };
        let value = serde_json::to_value(&place).unwrap();
        assert_eq!(value["type"], json!("cafe"));
        assert!(value.get("placeType").is_none());
    }
}
