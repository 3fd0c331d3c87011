//! Place recommender
//!
//! Pure table lookup keyed by lowercased mood. The city only fills in the
//! text fields of the returned records; it never changes which places come
//! back.

pub mod catalog;

use moodmap_common::PlaceRecord;

use catalog::{PlaceTemplate, CATEGORIES, DEFAULT_PLACES};

/// City text used when the caller did not supply one
pub const UNKNOWN_CITY: &str = "your city";

/// Places for a mood, with address and city filled in
///
/// Unknown, blank or missing moods get the default list. The result is never
/// empty.
pub fn recommend(mood: Option<&str>, city: Option<&str>) -> Vec<PlaceRecord> {
    let city = city
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(UNKNOWN_CITY);

    lookup(mood)
        .iter()
        .map(|template| build_record(template, city))
        .collect()
}

/// Known mood keys in catalog order
pub fn categories() -> Vec<&'static str> {
    CATEGORIES.iter().map(|(key, _)| *key).collect()
}

fn lookup(mood: Option<&str>) -> &'static [PlaceTemplate; 3] {
    let key = match mood {
        Some(m) => m.trim().to_lowercase(),
        None => return &DEFAULT_PLACES,
    };

    CATEGORIES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, places)| places)
        .unwrap_or(&DEFAULT_PLACES)
}

fn build_record(template: &PlaceTemplate, city: &str) -> PlaceRecord {
    PlaceRecord {
        id: template.id,
        name: template.name.to_string(),
        place_type: template.place_type.to_string(),
        rating: template.rating,
        address: format!("{}, {}", template.street, city),
        city: city.to_string(),
        description: template.description.to_string(),
        hours: template.hours.to_string(),
        price: template.price.to_string(),
        phone: template.phone.to_string(),
        website: template.website.to_string(),
        amenities: template.amenities.iter().map(|a| a.to_string()).collect(),
        photos: template.photos.iter().map(|p| p.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(places: &[PlaceRecord]) -> Vec<&str> {
        places.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_known_mood_returns_its_category() {
        let places = recommend(Some("relaxed"), Some("Portland"));
        assert_eq!(
            names(&places),
            ["Serenity Tea House", "Lakeside Botanical Garden", "Still Waters Spa"]
        );
    }

    #[test]
    fn test_mood_lookup_ignores_case_and_whitespace() {
        assert_eq!(
            recommend(Some("  ReLaXeD "), None),
            recommend(Some("relaxed"), None)
        );
    }

    #[test]
    fn test_unknown_missing_and_blank_moods_get_default() {
        let default = recommend(None, None);
        assert_eq!(names(&default), ["Quiet Cafe", "City Park", "Town History Museum"]);
        assert_eq!(recommend(Some("unknownxyz"), None), default);
        assert_eq!(recommend(Some(""), None), default);
    }

    #[test]
    fn test_city_is_filled_in() {
        let places = recommend(Some("focused"), Some(" Oslo "));
        for place in &places {
            assert_eq!(place.city, "Oslo");
            assert!(place.address.ends_with(", Oslo"), "{}", place.address);
        }
    }

    #[test]
    fn test_missing_city_uses_placeholder() {
        for city in [None, Some(""), Some("   ")] {
            for place in recommend(Some("happy"), city) {
                assert_eq!(place.city, UNKNOWN_CITY);
                assert!(place.address.ends_with(", your city"));
            }
        }
    }

    #[test]
    fn test_city_does_not_change_selection() {
        let a: Vec<u32> = recommend(Some("social"), Some("Tokyo")).iter().map(|p| p.id).collect();
        let b: Vec<u32> = recommend(Some("social"), None).iter().map(|p| p.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_catalog_shape() {
        let keys = categories();
        assert_eq!(keys.len(), 10);
        assert_eq!(keys.iter().collect::<HashSet<_>>().len(), 10);
        assert!(keys.iter().all(|k| *k == k.to_lowercase()));

        let mut ids = HashSet::new();
        for key in &keys {
            let places = recommend(Some(*key), None);
            assert_eq!(places.len(), 3);
            for place in &places {
                assert!(ids.insert(place.id), "duplicate id {}", place.id);
                assert!((0.0..=5.0).contains(&place.rating));
                assert!(!place.photos.is_empty());
            }
        }
        for place in recommend(None, None) {
            assert!(ids.insert(place.id), "duplicate id {}", place.id);
        }
    }
}
