// Hero section proxy routes (all require a credential)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::auth::Credential;
use crate::error::GatewayError;
use crate::respond::no_store;
use crate::{require_id, AppState};

/// Create hero routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/hero", get(get_hero).post(create_hero))
        .route("/hero/all", get(list_heroes))
        .route("/hero/{id}", put(update_hero).delete(delete_hero))
        .with_state(state)
}

/// GET /hero - Fetch the active hero section
#[utoipa::path(
    get,
    path = "/hero",
    responses(
        (status = 200, description = "Hero content", body = sitegate_contracts::HeroData),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "hero"
)]
pub async fn get_hero(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Response, GatewayError> {
    let data = state.backend.get("/hero", Some(credential.token())).await?;
    Ok(no_store(Json(data)))
}

/// GET /hero/all - Fetch every hero revision for the dashboard
#[utoipa::path(
    get,
    path = "/hero/all",
    responses(
        (status = 200, description = "All hero revisions"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "hero"
)]
pub async fn list_heroes(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Response, GatewayError> {
    let data = state
        .backend
        .get("/hero/all", Some(credential.token()))
        .await?;
    Ok(no_store(Json(data)))
}

/// POST /hero - Create a hero revision
#[utoipa::path(
    post,
    path = "/hero",
    request_body = sitegate_contracts::HeroData,
    responses(
        (status = 200, description = "Created hero relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "hero"
)]
pub async fn create_hero(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .post("/hero", Some(credential.token()), Some(&body))
        .await?;
    Ok(Json(data))
}

/// PUT /hero/{id} - Update a hero revision
#[utoipa::path(
    put,
    path = "/hero/{id}",
    request_body = sitegate_contracts::HeroData,
    params(("id" = String, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Updated hero relayed from the backend"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "hero"
)]
pub async fn update_hero(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let id = require_id(&id)?;
    let data = state
        .backend
        .put(&format!("/hero/{id}"), Some(credential.token()), &body)
        .await?;
    Ok(Json(data))
}

/// DELETE /hero/{id} - Delete a hero revision
#[utoipa::path(
    delete,
    path = "/hero/{id}",
    params(("id" = String, Path, description = "Hero id")),
    responses(
        (status = 204, description = "Hero deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "hero"
)]
pub async fn delete_hero(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(&format!("/hero/{id}"), Some(credential.token()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
