// Testimonial proxy routes (all require a credential)
// The dashboard moderates testimonials, so the collection also exposes a
// status sub-resource for approving or hiding an entry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::auth::Credential;
use crate::error::GatewayError;
use crate::{missing_id, require_id, AppState};

/// Create testimonials routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/testimonials",
            get(list_testimonials)
                .post(create_testimonial)
                .put(missing_id)
                .delete(missing_id),
        )
        .route(
            "/testimonials/{id}",
            put(update_testimonial).delete(delete_testimonial),
        )
        .route("/testimonials/{id}/status", put(update_status))
        .with_state(state)
}

/// GET /testimonials - Fetch all testimonials
#[utoipa::path(
    get,
    path = "/testimonials",
    responses(
        (status = 200, description = "Testimonials list"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "testimonials"
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .get("/testimonials", Some(credential.token()))
        .await?;
    Ok(Json(data))
}

/// POST /testimonials - Create a testimonial
#[utoipa::path(
    post,
    path = "/testimonials",
    responses(
        (status = 200, description = "Created testimonial relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "testimonials"
)]
pub async fn create_testimonial(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .post("/testimonials", Some(credential.token()), Some(&body))
        .await?;
    Ok(Json(data))
}

/// PUT /testimonials/{id} - Update a testimonial
#[utoipa::path(
    put,
    path = "/testimonials/{id}",
    params(("id" = String, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Updated testimonial relayed from the backend"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "testimonials"
)]
pub async fn update_testimonial(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let id = require_id(&id)?;
    let data = state
        .backend
        .put(
            &format!("/testimonials/{id}"),
            Some(credential.token()),
            &body,
        )
        .await?;
    Ok(Json(data))
}

/// PUT /testimonials/{id}/status - Approve or hide a testimonial
#[utoipa::path(
    put,
    operation_id = "update_testimonial_status",
    path = "/testimonials/{id}/status",
    params(("id" = String, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Updated testimonial relayed from the backend"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "testimonials"
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
            &format!("/testimonials/{id}/status"),
            Some(credential.token()),
            &body,
        )
        .await?;
    Ok(Json(data))
}

/// DELETE /testimonials/{id} - Delete a testimonial
#[utoipa::path(
    delete,
    path = "/testimonials/{id}",
    params(("id" = String, Path, description = "Testimonial id")),
    responses(
        (status = 204, description = "Testimonial deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "testimonials"
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(&format!("/testimonials/{id}"), Some(credential.token()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
