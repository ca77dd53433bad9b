// Public website aggregate routes
// Both routes read the backend's /webpages payload; /webpages/stats carves
// out the counters object and relays it verbatim, degrading to zeroes when
// the field is absent.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use sitegate_contracts::StatsResponse;

use crate::error::GatewayError;
use crate::respond::no_store;
use crate::AppState;

/// Create webpages routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/webpages", get(get_webpages))
        .route("/webpages/stats", get(get_stats))
        .with_state(state)
}

/// GET /webpages - Aggregate content for the public website
#[utoipa::path(
    get,
    path = "/webpages",
    responses(
        (status = 200, description = "Aggregate website content"),
        (status = 500, description = "Backend failure")
    ),
    tag = "webpages"
)]
pub async fn get_webpages(State(state): State<AppState>) -> Result<Response, GatewayError> {
    let data = state.backend.get("/webpages", None).await?;
    Ok(no_store(Json(data)))
}

/// GET /webpages/stats - Counters extracted from the aggregate payload
#[utoipa::path(
    get,
    path = "/webpages/stats",
    responses(
        (status = 200, description = "Counters relayed from the backend, zeroed when absent"),
        (status = 500, description = "Backend failure; zeroed counters plus an error field", body = StatsResponse)
    ),
    tag = "webpages"
)]
pub async fn get_stats(State(state): State<AppState>) -> Response {
    match state.backend.get("/webpages", None).await {
        Ok(data) => {
            // Relay the upstream object verbatim so extra counters survive;
            // only an absent or non-object field degrades to zeroes.
            let stats = match data.get("stats") {
                Some(Value::Object(map)) => Value::Object(map.clone()),
                _ => json!({"testimonialCount": 0, "serviceCount": 0, "userCount": 0}),
            };
            no_store(Json(stats))
        }
        Err(err) => {
            tracing::error!("failed to fetch webpages stats: {err}");
            let stats = StatsResponse {
                error: Some("Failed to fetch stats data".to_string()),
                ..StatsResponse::default()
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(stats)).into_response()
        }
    }
}
