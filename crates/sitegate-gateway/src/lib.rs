// Sitegate gateway library
// Decision: Shared library for the server binary and in-process router tests
// Decision: One route module per proxied resource, merged in `app`

pub mod announcements;
pub mod auth;
pub mod config;
pub mod error;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how;
pub mod openapi;
pub mod respond;
pub mod services;
pub mod testimonials;
pub mod upstream;
pub mod users;
pub mod webpages;

use std::sync::Arc;

use axum::http::{header as http_header, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::auth::Credential;
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::upstream::Backend;

/// App state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<Backend>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(backend: Backend, secure_cookies: bool) -> Self {
        Self {
            backend: Arc::new(backend),
            secure_cookies,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

/// Build the gateway router.
pub fn app(state: AppState, config: &GatewayConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/api-doc/openapi.json", get(openapi_spec))
        .merge(auth::routes(state.clone()))
        .merge(hero::routes(state.clone()))
        .merge(footer::routes(state.clone()))
        .merge(header::routes(state.clone()))
        .merge(services::routes(state.clone()))
        .merge(testimonials::routes(state.clone()))
        .merge(announcements::routes(state.clone()))
        .merge(how::routes(state.clone()))
        .merge(users::routes(state.clone()))
        .merge(webpages::routes(state));

    // CORS only when the UI is served from a different origin than the gateway
    if !config.cors_origins.is_empty() {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(config.cors_origins.clone()))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    http_header::CONTENT_TYPE,
                    http_header::AUTHORIZATION,
                    http_header::ACCEPT,
                    http_header::ORIGIN,
                    http_header::CACHE_CONTROL,
                ])
                .allow_credentials(true),
        );
    }

    app.layer(TraceLayer::new_for_http())
}

/// A mutating verb on a collection path means the caller dropped the id
/// segment; answer 400 instead of the router's 404, without an outbound call.
pub(crate) async fn missing_id(_credential: Credential) -> GatewayError {
    GatewayError::bad_request("Missing id")
}

/// Validate a dynamic id segment before it is spliced into an outbound URL.
/// Browsers that lost the id serialize it as the literal string "undefined".
pub(crate) fn require_id(id: &str) -> Result<&str, GatewayError> {
    let id = id.trim();
    if id.is_empty() || id == "undefined" {
        return Err(GatewayError::bad_request("Missing id"));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_id_accepts_plain_segments() {
        assert_eq!(require_id("42").unwrap(), "42");
        assert_eq!(require_id(" 42 ").unwrap(), "42");
    }

    #[test]
    fn require_id_rejects_blank_and_undefined() {
        assert!(require_id("").is_err());
        assert!(require_id("   ").is_err());
        assert!(require_id("undefined").is_err());
    }
}
