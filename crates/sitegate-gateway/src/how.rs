// "How it works" section proxy routes (all require a credential)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::auth::Credential;
use crate::error::GatewayError;
use crate::{require_id, AppState};

/// Create how-section routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/how", get(list_sections).post(create_section))
        .route(
            "/how/{id}",
            get(get_section).put(update_section).delete(delete_section),
        )
        .with_state(state)
}

/// GET /how - Fetch all how sections
#[utoipa::path(
    get,
    path = "/how",
    responses(
        (status = 200, description = "How sections, always a JSON array"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "how"
)]
pub async fn list_sections(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Json<Value>, GatewayError> {
    let data = state.backend.get("/how", Some(credential.token())).await?;
    // The dashboard iterates this payload; a single-object reply from the
    // backend is wrapped so callers always see an array.
    let data = match data {
        Value::Array(_) => data,
        other => Value::Array(vec![other]),
    };
    Ok(Json(data))
}

/// GET /how/{id} - Fetch a single how section
#[utoipa::path(
    get,
    path = "/how/{id}",
    params(("id" = String, Path, description = "Section id")),
    responses(
        (status = 200, description = "How section"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "how"
)]
pub async fn get_section(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<Json<Value>, GatewayError> {
    let id = require_id(&id)?;
    let data = state
        .backend
        .get(&format!("/how/{id}"), Some(credential.token()))
        .await?;
    Ok(Json(data))
}

/// POST /how - Create a how section
#[utoipa::path(
    post,
    path = "/how",
    responses(
        (status = 200, description = "Created section relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "how"
)]
pub async fn create_section(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .post("/how", Some(credential.token()), Some(&body))
        .await?;
    Ok(Json(data))
}

/// PUT /how/{id} - Update a how section
#[utoipa::path(
    put,
    operation_id = "update_how_section",
    path = "/how/{id}",
    params(("id" = String, Path, description = "Section id")),
    responses(
        (status = 200, description = "Updated section relayed from the backend"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "how"
)]
pub async fn update_section(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let id = require_id(&id)?;
    let data = state
        .backend
        .put(&format!("/how/{id}"), Some(credential.token()), &body)
        .await?;
    Ok(Json(data))
}

/// DELETE /how/{id} - Delete a how section
#[utoipa::path(
    delete,
    operation_id = "delete_how_section",
    path = "/how/{id}",
    params(("id" = String, Path, description = "Section id")),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "how"
)]
pub async fn delete_section(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(&format!("/how/{id}"), Some(credential.token()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
