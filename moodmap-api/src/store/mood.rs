//! Append-only in-memory mood log

use std::collections::HashMap;

use moodmap_common::models::{MoodCount, MoodStats};
use moodmap_common::time::{self, Timestamp};
use moodmap_common::{uuid_utils, Error, MoodRecord, Result};
use tokio::sync::RwLock;
use tracing::info;

/// Number of entries returned by `list_recent` when no usable limit is given
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Number of entries in `MoodStats::most_common_moods`
const TOP_MOODS: usize = 5;

/// Mood log shared by all request handlers
///
/// Records are only ever appended. Nothing is evicted for the lifetime of
/// the process.
#[derive(Debug, Default)]
pub struct MoodStore {
    moods: RwLock<Vec<MoodRecord>>,
}

impl MoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mood entry
    ///
    /// `mood` must be present and non-blank; it is stored trimmed.
    /// `timestamp` defaults to the insertion time.
    pub async fn record(
        &self,
        mood: Option<&str>,
        is_custom: bool,
        timestamp: Option<Timestamp>,
    ) -> Result<MoodRecord> {
        let mood = mood
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| {
                Error::InvalidInput("Mood is required and must be a string".to_string())
            })?;

        let created_at = time::now();
        let record = MoodRecord {
            id: uuid_utils::generate(),
            mood: mood.to_string(),
            is_custom,
            timestamp: timestamp.unwrap_or_else(|| Timestamp::from(created_at)),
            created_at,
        };

        self.moods.write().await.push(record.clone());

        info!(
            "New mood recorded: {} ({})",
            record.mood,
            if record.is_custom { "custom" } else { "preset" }
        );

        Ok(record)
    }

    /// Most recent entries first, at most `limit` of them, plus the total count
    pub async fn list_recent(&self, limit: usize) -> (Vec<MoodRecord>, usize) {
        let moods = self.moods.read().await;
        let mut recent = newest_first(&moods);
        recent.truncate(limit);
        (recent.into_iter().cloned().collect(), moods.len())
    }

    /// The entry with the latest timestamp
    pub async fn current(&self) -> Result<MoodRecord> {
        let moods = self.moods.read().await;
        newest_first(&moods)
            .first()
            .map(|m| (*m).clone())
            .ok_or_else(|| Error::NotFound("No moods recorded yet".to_string()))
    }

    /// Aggregate counts over the whole log
    pub async fn stats(&self) -> MoodStats {
        let moods = self.moods.read().await;

        // Counts kept in first-seen order so ties stay stable after sorting
        let mut counts: Vec<MoodCount> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut custom_mood_count = 0;

        for entry in moods.iter() {
            match index.get(entry.mood.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(entry.mood.as_str(), counts.len());
                    counts.push(MoodCount {
                        mood: entry.mood.clone(),
                        count: 1,
                    });
                }
            }
            if entry.is_custom {
                custom_mood_count += 1;
            }
        }

        let unique_moods = counts.len();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(TOP_MOODS);

        MoodStats {
            total_moods: moods.len(),
            unique_moods,
            custom_mood_count,
            preset_mood_count: moods.len() - custom_mood_count,
            most_common_moods: counts,
        }
    }

    pub async fn len(&self) -> usize {
        self.moods.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.moods.read().await.is_empty()
    }
}

/// Parse a `limit` query value, falling back to the default for anything
/// missing, unparsable or not positive
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&n| n > 0)
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
        .unwrap_or(DEFAULT_RECENT_LIMIT)
}

/// References sorted by timestamp descending; later insertions win ties
fn newest_first(moods: &[MoodRecord]) -> Vec<&MoodRecord> {
    let mut sorted: Vec<(usize, &MoodRecord)> = moods.iter().enumerate().collect();
    sorted.sort_by(|(ia, a), (ib, b)| b.timestamp.cmp(&a.timestamp).then(ib.cmp(ia)));
    sorted.into_iter().map(|(_, m)| m).collect()
}
