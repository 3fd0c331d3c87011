//! User preference endpoints
//!
//! POST /api/user, GET /api/user, GET /api/user/:id

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use moodmap_common::models::UserSummary;
use moodmap_common::UserRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::store::Upsert;
use crate::AppState;

/// Body of POST /api/user
#[derive(Debug, Deserialize)]
pub struct UpsertUserRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub preferences: Option<Vec<String>>,
}

/// User fields echoed back after an upsert
#[derive(Debug, Serialize)]
pub struct SavedUser {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub preferences: Vec<String>,
}

impl From<UserRecord> for SavedUser {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            city: user.city,
            preferences: user.preferences,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavedUserResponse {
    pub message: String,
    pub user: SavedUser,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub message: String,
    pub users: Vec<UserSummary>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: String,
    pub user: UserRecord,
}

/// POST /api/user
///
/// Returns 201 for both inserts and updates; the id is always the stored one.
pub async fn upsert_user(
    State(state): State<AppState>,
    payload: Result<Json<UpsertUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SavedUserResponse>)> {
    let Json(request) = payload?;

    let (user, outcome) = state
        .users
        .upsert(
            request.name.as_deref(),
            request.city.as_deref(),
            request.preferences,
        )
        .await?;

    tracing::debug!(user_id = %user.id, ?outcome, "User preferences saved");

    let message = match outcome {
        Upsert::Created => "User preferences saved successfully",
        Upsert::Updated => "User preferences updated successfully",
    };

    Ok((
        StatusCode::CREATED,
        Json(SavedUserResponse {
            message: message.to_string(),
            user: user.into(),
        }),
    ))
}

/// GET /api/user
pub async fn list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    Json(UserListResponse {
        message: "Users retrieved successfully".to_string(),
        users: state.users.list().await,
    })
}

/// GET /api/user/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.get_by_id(&id).await?;

    Ok(Json(UserResponse {
        message: "User retrieved successfully".to_string(),
        user,
    }))
}
