//! In-memory user preference store with upsert by (name, city)

use moodmap_common::models::UserSummary;
use moodmap_common::{time, uuid_utils, Error, Result, UserRecord};
use tokio::sync::RwLock;
use tracing::info;

/// Outcome of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

/// User records keyed by case-insensitive (name, city)
///
/// At most one record exists per key. The key is a stand-in for identity:
/// near-duplicate spellings are different users.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user, or replace the preferences of the matching one
    ///
    /// An update keeps the stored `id` and `created_at` and refreshes
    /// `updated_at`.
    pub async fn upsert(
        &self,
        name: Option<&str>,
        city: Option<&str>,
        preferences: Option<Vec<String>>,
    ) -> Result<(UserRecord, Upsert)> {
        let (name, city) = match (non_blank(name), non_blank(city)) {
            (Some(name), Some(city)) => (name, city),
            _ => {
                return Err(Error::InvalidInput(
                    "Name and city are required".to_string(),
                ))
            }
        };
        let preferences = dedup_preferences(preferences.unwrap_or_default());
        let now = time::now();

        let mut users = self.users.write().await;

        if let Some(existing) = users.iter_mut().find(|u| u.matches(name, city)) {
            existing.name = name.to_string();
            existing.city = city.to_string();
            existing.preferences = preferences;
            existing.updated_at = now;
            info!("Updated user: {} from {}", existing.name, existing.city);
            return Ok((existing.clone(), Upsert::Updated));
        }

        let user = UserRecord {
            id: uuid_utils::generate(),
            name: name.to_string(),
            city: city.to_string(),
            preferences,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        info!("Created new user: {} from {}", user.name, user.city);

        Ok((user, Upsert::Created))
    }

    /// Redacted records in insertion order
    pub async fn list(&self) -> Vec<UserSummary> {
        self.users.read().await.iter().map(UserRecord::summary).collect()
    }

    pub async fn get_by_id(&self, id: &str) -> Result<UserRecord> {
        let not_found = || Error::NotFound("User not found".to_string());
        let id = uuid_utils::parse(id).ok_or_else(not_found)?;

        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trim entries, drop blanks and repeats, keep first-seen order
fn dedup_preferences(preferences: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(preferences.len());
    for pref in preferences {
        let pref = pref.trim();
        if !pref.is_empty() && !out.iter().any(|p| p == pref) {
            out.push(pref.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[tokio::test]
    async fn test_upsert_creates_trimmed_record() {
        let store = UserStore::new();
        let (user, outcome) = store
            .upsert(Some(" Ada "), Some(" London "), prefs(&["Parks & Nature"]))
            .await
            .unwrap();

        assert_eq!(outcome, Upsert::Created);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.city, "London");
        assert_eq!(user.preferences, ["Parks & Nature"]);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_upsert_same_key_updates_in_place() {
        let store = UserStore::new();
        let (first, _) = store
            .upsert(Some("Ada"), Some("London"), prefs(&["Cafes & Coffee"]))
            .await
            .unwrap();
        let (second, outcome) = store
            .upsert(Some("ADA"), Some("london"), prefs(&["Museums & Culture"]))
            .await
            .unwrap();

        assert_eq!(outcome, Upsert::Updated);
        assert_eq!(store.len().await, 1);
        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(second.preferences, ["Museums & Culture"]);
        assert_eq!(second.name, "ADA");

        let stored = store.get_by_id(&first.id.to_string()).await.unwrap();
        assert_eq!(stored, second);
    }

    #[tokio::test]
    async fn test_different_city_is_different_user() {
        let store = UserStore::new();
        store.upsert(Some("Ada"), Some("London"), None).await.unwrap();
        let (_, outcome) = store.upsert(Some("Ada"), Some("Paris"), None).await.unwrap();
        assert_eq!(outcome, Upsert::Created);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_upsert_requires_name_and_city() {
        let store = UserStore::new();
        for (name, city) in [
            (None, Some("London")),
            (Some("Ada"), None),
            (Some("  "), Some("London")),
            (Some("Ada"), Some("")),
        ] {
            let err = store.upsert(name, city, None).await.unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_missing_preferences_default_to_empty() {
        let store = UserStore::new();
        let (user, _) = store.upsert(Some("Ada"), Some("London"), None).await.unwrap();
        assert!(user.preferences.is_empty());
    }

    #[tokio::test]
    async fn test_list_is_insertion_ordered() {
        let store = UserStore::new();
        store.upsert(Some("Ada"), Some("London"), None).await.unwrap();
        store.upsert(Some("Grace"), Some("Arlington"), None).await.unwrap();

        let names: Vec<_> = store.list().await.into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["Ada", "Grace"]);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_or_malformed() {
        let store = UserStore::new();
        store.upsert(Some("Ada"), Some("London"), None).await.unwrap();

        let unknown = uuid_utils::generate().to_string();
        assert!(matches!(store.get_by_id(&unknown).await, Err(Error::NotFound(_))));
        assert!(matches!(store.get_by_id("42").await, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_dedup_preferences() {
        let out = dedup_preferences(
            ["Shopping", " Nightlife ", "Shopping", "", "Nightlife"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert_eq!(out, ["Shopping", "Nightlife"]);
    }
}
