// Service package proxy routes (all require a credential)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::auth::Credential;
use crate::error::GatewayError;
use crate::{missing_id, require_id, AppState};

/// Create services routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/services",
            get(list_services).post(create_service).delete(missing_id),
        )
        .route("/services/{id}", put(update_service).delete(delete_service))
        .with_state(state)
}

/// GET /services - Fetch the service packages
#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "Service packages"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "services"
)]
pub async fn list_services(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .get("/services", Some(credential.token()))
        .await?;
    Ok(Json(data))
}

/// POST /services - Create a service package
#[utoipa::path(
    post,
    path = "/services",
    responses(
        (status = 200, description = "Created service relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .post("/services", Some(credential.token()), Some(&body))
        .await?;
    Ok(Json(data))
}

/// PUT /services/{id} - Update a service package
#[utoipa::path(
    put,
    path = "/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "Updated service relayed from the backend"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let id = require_id(&id)?;
    let data = state
        .backend
        .put(&format!("/services/{id}"), Some(credential.token()), &body)
        .await?;
    Ok(Json(data))
}

/// DELETE /services/{id} - Delete a service package
#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(&format!("/services/{id}"), Some(credential.token()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
