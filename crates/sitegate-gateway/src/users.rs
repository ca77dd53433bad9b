// User administration proxy routes (all require a credential)
// The backend hosts user management under /auth/users and enforces the
// admin role itself; the gateway only checks that a credential is present.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::auth::Credential;
use crate::error::GatewayError;
use crate::{missing_id, require_id, AppState};

/// Create users routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            get(list_users).put(update_users).delete(missing_id),
        )
        .route("/users/{id}", axum::routing::delete(delete_user))
        .with_state(state)
}

/// GET /users - List all users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users list, passwords never included"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .get("/auth/users", Some(credential.token()))
        .await?;
    Ok(Json(data))
}

/// PUT /users - Bulk-update user details
#[utoipa::path(
    put,
    path = "/users",
    responses(
        (status = 200, description = "Updated users relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "users"
)]
pub async fn update_users(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .put("/auth/users", Some(credential.token()), &body)
        .await?;
    Ok(Json(data))
}

/// DELETE /users/{id} - Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(&format!("/auth/users/{id}"), Some(credential.token()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
