//! UUID utilities

use uuid::Uuid;

/// Generate a new UUIDv4 record id
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Parse a record id from a path segment
///
/// Only the exact form ids are written in (lowercase, hyphenated) is
/// accepted. Anything else gives `None`, so callers can answer "not found"
/// without a separate validation branch.
pub fn parse(s: &str) -> Option<Uuid> {
    Uuid::parse_str(s)
        .ok()
        .filter(|id| id.hyphenated().to_string() == s)
}
