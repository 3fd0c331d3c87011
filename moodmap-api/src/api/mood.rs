//! Mood logging endpoints
//!
//! POST /api/mood, GET /api/mood, GET /api/mood/current, GET /api/mood/stats

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use moodmap_common::models::MoodStats;
use moodmap_common::time::Timestamp;
use moodmap_common::MoodRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::store::parse_limit;
use crate::AppState;

/// Body of POST /api/mood
///
/// `mood` stays untyped so a non-string value is reported as a validation
/// error rather than a generic body rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMoodRequest {
    pub mood: Option<Value>,
    #[serde(default)]
    pub is_custom: bool,
    pub timestamp: Option<String>,
}

/// Query parameters for GET /api/mood
#[derive(Debug, Default, Deserialize)]
pub struct ListMoodsQuery {
    /// Kept as text: unparsable values fall back to the default
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub message: String,
    pub mood: MoodRecord,
}

#[derive(Debug, Serialize)]
pub struct MoodListResponse {
    pub message: String,
    pub moods: Vec<MoodRecord>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct MoodStatsResponse {
    pub message: String,
    pub stats: MoodStats,
}

/// POST /api/mood
pub async fn record_mood(
    State(state): State<AppState>,
    payload: Result<Json<RecordMoodRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MoodResponse>)> {
    let Json(request) = payload?;

    let mood = match &request.mood {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            return Err(ApiError::BadRequest(
                "Mood is required and must be a string".to_string(),
            ))
        }
    };

    let timestamp = request
        .timestamp
        .as_deref()
        .filter(|ts| !ts.trim().is_empty())
        .map(Timestamp::parse)
        .transpose()?;

    let record = state
        .moods
        .record(mood, request.is_custom, timestamp)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MoodResponse {
            message: "Mood saved successfully".to_string(),
            mood: record,
        }),
    ))
}

/// GET /api/mood?limit=N
///
/// A query string that does not deserialize (a repeated `limit`, say) is
/// treated like a missing limit.
pub async fn list_moods(
    State(state): State<AppState>,
    query: Result<Query<ListMoodsQuery>, QueryRejection>,
) -> Json<MoodListResponse> {
    let query = query.map(|Query(q)| q).unwrap_or_else(|e| {
        debug!("Ignoring unreadable mood list query: {}", e);
        ListMoodsQuery::default()
    });
    let limit = parse_limit(query.limit.as_deref());
    let (moods, total) = state.moods.list_recent(limit).await;

    Json(MoodListResponse {
        message: "Moods retrieved successfully".to_string(),
        moods,
        total,
    })
}

/// GET /api/mood/current
pub async fn current_mood(State(state): State<AppState>) -> ApiResult<Json<MoodResponse>> {
    let mood = state.moods.current().await?;

    Ok(Json(MoodResponse {
        message: "Current mood retrieved successfully".to_string(),
        mood,
    }))
}

/// GET /api/mood/stats
pub async fn mood_stats(State(state): State<AppState>) -> Json<MoodStatsResponse> {
    Json(MoodStatsResponse {
        message: "Mood statistics retrieved successfully".to_string(),
        stats: state.moods.stats().await,
    })
}
