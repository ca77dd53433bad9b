// Authentication HTTP routes
// Decision: Signup and login run in relay mode (the backend's own status and
// message reach the caller); logout and check use the opaque policy.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::CookieJar;
use serde_json::{json, Value};
use sitegate_contracts::{
    BackendLoginResponse, CheckResponse, LoginRequest, LoginResponse, LogoutResponse,
    SessionUser, SignupRequest,
};

use super::cookies::{clear_session, set_session};
use super::extract::Credential;
use crate::error::GatewayError;
use crate::upstream::UpstreamError;
use crate::AppState;

/// Create auth routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/check", get(check))
        .with_state(state)
}

/// POST /auth/signup - Forward account creation to the backend
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created, backend payload relayed"),
        (status = 400, description = "Missing field or password too short"),
        (status = 500, description = "Backend unreachable")
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<Value>, GatewayError> {
    if req.username.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(GatewayError::bad_request("All fields are required"));
    }
    if req.password.len() < 6 {
        return Err(GatewayError::bad_request(
            "Password must be at least 6 characters long",
        ));
    }

    let body = serde_json::to_value(&req).map_err(UpstreamError::Decode)?;
    let data = state
        .backend
        .post("/auth/signup", None, Some(&body))
        .await
        .map_err(GatewayError::relay)?;

    Ok(Json(data))
}

/// POST /auth/login - Forward login and establish the session cookie group
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = LoginResponse),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Backend rejected the credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), GatewayError> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(GatewayError::bad_request(
            "Username and password are required",
        ));
    }

    // The backend accepts either a username or an email in one field.
    let body = json!({
        "username_or_email": req.username,
        "password": req.password,
    });
    let value = state
        .backend
        .post("/auth/login", None, Some(&body))
        .await
        .map_err(GatewayError::relay)?;

    let parsed: BackendLoginResponse =
        serde_json::from_value(value).map_err(UpstreamError::Decode)?;

    let user = SessionUser {
        id: parsed.user.id,
        username: parsed.user.username,
        email: parsed.user.email,
        role: parsed.user.role,
    };
    let jar = set_session(jar, &parsed.user.token, &user, state.secure_cookies);

    Ok((
        jar,
        Json(LoginResponse {
            message: parsed.message,
            user,
            token: parsed.user.token,
        }),
    ))
}

/// POST /auth/logout - Forward logout and clear the session cookie group
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Session ended", body = LogoutResponse),
        (status = 401, description = "No active session"),
        (status = 500, description = "Backend logout failed")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    credential: Credential,
    jar: CookieJar,
) -> Result<(CookieJar, Json<LogoutResponse>), GatewayError> {
    state
        .backend
        .post("/auth/logout", Some(credential.token()), None)
        .await?;

    let jar = clear_session(jar);
    Ok((
        jar,
        Json(LogoutResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// GET /auth/check - Verify the session token against the backend
#[utoipa::path(
    get,
    path = "/auth/check",
    responses(
        (status = 200, description = "Session is valid", body = CheckResponse),
        (status = 401, description = "Missing, invalid, or expired token"),
        (status = 500, description = "Backend unreachable")
    ),
    tag = "auth"
)]
pub async fn check(
    State(state): State<AppState>,
    credential: Credential,
    jar: CookieJar,
) -> Response {
    let value = match state
        .backend
        .post("/auth/verify", Some(credential.token()), None)
        .await
    {
        Ok(value) => value,
        Err(UpstreamError::Status { status, message }) => {
            tracing::debug!(status, "token rejected by backend: {message}");
            // Stale session: drop the cookie group along with the 401.
            let jar = clear_session(jar);
            return (jar, GatewayError::unauthenticated("Invalid or expired token"))
                .into_response();
        }
        Err(err) => return GatewayError::from(err).into_response(),
    };

    let user: SessionUser = match serde_json::from_value(value) {
        Ok(user) => user,
        Err(err) => return GatewayError::from(UpstreamError::Decode(err)).into_response(),
    };

    let token = credential.token().to_string();
    let jar = set_session(jar, &token, &user, state.secure_cookies);
    (
        jar,
        Json(CheckResponse {
            is_authenticated: true,
            user,
            token,
        }),
    )
        .into_response()
}
