// Shared request/response DTOs for the Sitegate gateway
//
// These are pure transfer shapes: the gateway never stores them and the
// backend service of record owns all validation beyond basic presence checks.
// Field names follow the wire format (camelCase) used by the dashboard UI.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signup request forwarded to the backend credentials endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request accepted from the dashboard UI.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login payload as returned by the backend.
/// The bearer token is nested inside the user object on the backend side.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendLoginResponse {
    pub message: String,
    pub user: BackendLoginUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendLoginUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub token: String,
}

/// User identity carried in session responses and the readable `user` cookie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Login response produced by the gateway. The token is also set as an
/// HttpOnly cookie; it is echoed in the body for non-browser API callers.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
    pub token: String,
}

/// Session check response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub is_authenticated: bool,
    pub user: SessionUser,
    pub token: String,
}

/// Logout confirmation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Aggregate counters extracted from the backend's `/webpages` payload.
/// Missing or malformed upstream data degrades to zeroed counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsResponse {
    pub testimonial_count: i64,
    pub service_count: i64,
    pub user_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Single navigation entry managed from the dashboard header editor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Header update request; the gateway reshapes this into the backend's
/// useful-links section payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeaderUpdateRequest {
    pub navigation_links: Vec<NavigationLink>,
}

/// Hero section content.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub chat_data: ChatData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Scripted chat preview embedded in the hero section.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatData {
    pub user_message: String,
    pub bot_response: String,
    pub user_name: String,
    pub options: Vec<ChatOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
    pub icon: String,
}
