// Header navigation proxy routes (all require a credential)
// The backend stores navigation as the "useful links" company-details
// section, so the update reshapes the dashboard payload before forwarding.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use sitegate_contracts::HeaderUpdateRequest;

use crate::auth::Credential;
use crate::error::GatewayError;
use crate::AppState;

/// Create header routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/header", get(get_header).put(update_links))
        .with_state(state)
}

/// GET /header - Company details aggregate, navigation included
#[utoipa::path(
    get,
    path = "/header",
    responses(
        (status = 200, description = "Company details with navigation links"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "header"
)]
pub async fn get_header(
    State(state): State<AppState>,
    credential: Credential,
) -> Result<Json<Value>, GatewayError> {
    let data = state
        .backend
        .get("/company-details", Some(credential.token()))
        .await?;
    Ok(Json(data))
}

/// PUT /header - Replace the navigation links
#[utoipa::path(
    put,
    path = "/header",
    request_body = HeaderUpdateRequest,
    responses(
        (status = 200, description = "Updated links relayed from the backend"),
        (status = 401, description = "Missing credential"),
        (status = 500, description = "Backend failure")
    ),
    tag = "header"
)]
pub async fn update_links(
    State(state): State<AppState>,
    credential: Credential,
    Json(body): Json<HeaderUpdateRequest>,
) -> Result<Json<Value>, GatewayError> {
    let items: Vec<Value> = body
        .navigation_links
        .iter()
        .map(|link| json!({"label": link.label, "href": link.href}))
        .collect();
    let payload = json!({"title": "USEFUL LINKS", "items": items});
    let data = state
        .backend
        .put(
            "/company-details/useful-links",
            Some(credential.token()),
            &payload,
        )
        .await?;
    Ok(Json(data))
}
