// Footer content proxy routes
// The backend hosts these sections under /company-details/*; the gateway
// keeps the dashboard-facing /footer/* paths.
// Update bodies are forwarded as raw JSON so the relay is byte-faithful.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use serde_json::Value;

use crate::auth::Credential;
use crate::error::GatewayError;
use crate::respond::no_store;
use crate::{missing_id, require_id, AppState};

/// Create footer routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/footer",
            get(get_footer).post(create_footer).delete(missing_id),
        )
        .route("/footer/about", put(update_about))
        .route("/footer/contact", put(update_contact).delete(missing_id))
        .route("/footer/contact/{id}", delete(delete_contact_item))
        .route(
            "/footer/social-links",
            put(update_social_links).delete(missing_id),
        )
        .route("/footer/social-links/{id}", delete(delete_social_link))
        .route(
            "/footer/{id}",
            put(update_section).delete(delete_section),
        )
        .with_state(state)
}

/// GET /footer - Aggregate read of all footer sections
#[utoipa::path(
    get,
    path = "/footer",
    responses(
        (status = 200, description = "Footer sections"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
)]
pub async fn get_footer(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Response, GatewayError> {
    let data = state
        .backend
        .get("/company-details", Some(credential.token()))
        .await?;
    Ok(no_store(Json(data)))
}

/// POST /footer - Create a footer section
#[utoipa::path(
    post,
    path = "/footer",
    responses(
        (status = 200, description = "Created section relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
)]
pub async fn create_footer(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .post("/company-details", Some(credential.token()), Some(&body))
        .await?;
    Ok(Json(data))
}

/// PUT /footer/about - Update the about section
#[utoipa::path(
    put,
    path = "/footer/about",
    responses(
        (status = 200, description = "Updated section relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
)]
pub async fn update_about(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .put("/company-details/about", Some(credential.token()), &body)
        .await?;
    Ok(Json(data))
}

/// PUT /footer/contact - Update the contact section
#[utoipa::path(
    put,
    path = "/footer/contact",
    responses(
        (status = 200, description = "Updated section relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
)]
pub async fn update_contact(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .put("/company-details/contact", Some(credential.token()), &body)
        .await?;
    Ok(Json(data))
}

/// DELETE /footer/contact/{id} - Delete a contact item
#[utoipa::path(
    delete,
    path = "/footer/contact/{id}",
    params(("id" = String, Path, description = "Contact item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
)]
pub async fn delete_contact_item(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(
            &format!("/company-details/contact/{id}"),
            Some(credential.token()),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /footer/social-links - Update the social links section
#[utoipa::path(
    put,
    path = "/footer/social-links",
    responses(
        (status = 200, description = "Updated section relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
)]
pub async fn update_social_links(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<Value>,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .put(
            "/company-details/social-links",
            Some(credential.token()),
            &body,
        )
        .await?;
    Ok(Json(data))
}

/// DELETE /footer/social-links/{id} - Delete a social link
#[utoipa::path(
    delete,
    path = "/footer/social-links/{id}",
    params(("id" = String, Path, description = "Social link id")),
    responses(
        (status = 204, description = "Link deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
)]
pub async fn delete_social_link(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(
            &format!("/company-details/social-links/{id}"),
            Some(credential.token()),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /footer/{id} - Update a footer section by id
/// The named sections (about, contact, social-links) match first; anything
/// else falls through to this id route.
#[utoipa::path(
    put,
    operation_id = "update_footer_section",
    path = "/footer/{id}",
    params(("id" = String, Path, description = "Footer section id")),
    responses(
        (status = 200, description = "Updated section relayed from the backend"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
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
        .put(
            &format!("/company-details/{id}"),
            Some(credential.token()),
            &body,
        )
        .await?;
    Ok(Json(data))
}

/// DELETE /footer/{id} - Delete a footer section by id
#[utoipa::path(
    delete,
    operation_id = "delete_footer_section",
    path = "/footer/{id}",
    params(("id" = String, Path, description = "Footer section id")),
    responses(
        (status = 204, description = "Section deleted"),
        (status = 400, description = "Missing id"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "footer"
)]
pub async fn delete_section(
    State(state): State<AppState>,
    credential: Credential,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = require_id(&id)?;
    state
        .backend
        .delete(
            &format!("/company-details/{id}"),
            Some(credential.token()),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
