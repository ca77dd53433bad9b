// Announcement proxy routes (all require a credential)
// Same moderation shape as testimonials: CRUD plus a status sub-resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::auth::Credential;
use crate::error::GatewayError;
use crate::{missing_id, require_id, AppState};

/// Create announcements routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/announcements",
            get(list_announcements)
                .post(create_announcement)
                .put(missing_id)
                .delete(missing_id),
        )
        .route(
            "/announcements/{id}",
            put(update_announcement).delete(delete_announcement),
        )
        .route("/announcements/{id}/status", put(update_status))
        .with_state(state)
}

/// GET /announcements - Fetch all announcements
#[utoipa::path(
    get,
    path = "/announcements",
    responses(
        (status = 200, description = "Announcements list"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "announcements"
)]
pub async fn list_announcements(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .get("/announcements", Some(credential.token()))
        .await?;
    Ok(Json(data))
}

/// POST /announcements - Create an announcement
#[utoipa::path(
    post,
    path = "/announcements",
    responses(
        (status = 200, description = "Created announcement relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "announcements"
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .post("/announcements", Some(credential.token()), Some(&body))
        .await?;
    Ok(Json(data))
}

/// PUT /announcements/{id} - Update an announcement
#[utoipa::path(
    put,
    path = "/announcements/{id}",
    params(("id" = String, Path, description = "Announcement id")),
    responses(
        (status = 200, description = "Updated announcement relayed from the backend"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "announcements"
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let id = require_id(&id)?;
    let data = state
        .backend
        .put(
            &format!("/announcements/{id}"),
            Some(credential.token()),
            &body,
        )
        .await?;
    Ok(Json(data))
}

/// PUT /announcements/{id}/status - Publish or retire an announcement
#[utoipa::path(
    put,
    operation_id = "update_announcement_status",
    path = "/announcements/{id}/status",
    params(("id" = String, Path, description = "Announcement id")),
    responses(
        (status = 200, description = "Updated announcement relayed from the backend"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "announcements"
)]
pub async fn update_status(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let id = require_id(&id)?;
    let data = state
        .backend
        .put(
            &format!("/announcements/{id}/status"),
            Some(credential.token()),
            &body,
        )
        .await?;
    Ok(Json(data))
}

/// DELETE /announcements/{id} - Delete an announcement
#[utoipa::path(
    delete,
    path = "/announcements/{id}",
    params(("id" = String, Path, description = "Announcement id")),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "announcements"
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(&format!("/announcements/{id}"), Some(credential.token()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
