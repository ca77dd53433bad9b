// Credential extractor
// Decision: Authorization header first (API callers), auth_token cookie
// second (dashboard UI) — same order for every protected route.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use axum_extra::extract::CookieJar;

use super::cookies::AUTH_TOKEN_COOKIE;
use crate::error::GatewayError;

/// Opaque bearer token proving an authenticated session.
///
/// Extraction runs before the handler body, so a missing credential rejects
/// the request with 401 before any outbound call can be made.
#[derive(Debug, Clone)]
pub struct Credential(String);

impl Credential {
    pub fn token(&self) -> &str {
        &self.0
    }
}

fn usable(token: &str) -> bool {
    // Browsers that lost the token serialize it as the literal "undefined".
    !token.is_empty() && token != "undefined"
}

impl<S> FromRequestParts<S> for Credential
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(value) = parts.headers.get(header::AUTHORIZATION) {
            let raw = value
                .to_str()
                .map_err(|_| GatewayError::unauthenticated("Invalid authorization header"))?;
            let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
            if usable(token) {
                return Ok(Self(token.to_string()));
            }
        }

        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(AUTH_TOKEN_COOKIE) {
            let token = cookie.value().trim();
            if usable(token) {
                return Ok(Self(token.to_string()));
            }
        }

        Err(GatewayError::unauthenticated("Authentication required"))
    }
}
