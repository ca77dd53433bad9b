// Session cookie group
// The three cookies travel together: set on login, refreshed on check,
// removed as a group on logout or when the backend rejects the token.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use sitegate_contracts::SessionUser;

pub const AUTH_TOKEN_COOKIE: &str = "auth_token";
pub const USER_COOKIE: &str = "user";
pub const IS_AUTHENTICATED_COOKIE: &str = "isAuthenticated";

/// Matches the backend token lifetime.
const SESSION_TTL: time::Duration = time::Duration::days(7);

/// Set the full session cookie group. Only `auth_token` is HttpOnly; the
/// other two are deliberately readable by the dashboard UI.
pub fn set_session(jar: CookieJar, token: &str, user: &SessionUser, secure: bool) -> CookieJar {
    let token_cookie = Cookie::build((AUTH_TOKEN_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(SESSION_TTL)
        .build();

    let user_value = json!({
        "id": user.id,
        "username": user.username,
        "role": user.role,
    });
    let user_cookie = Cookie::build((USER_COOKIE, user_value.to_string()))
        .path("/")
        .http_only(false)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(SESSION_TTL)
        .build();

    let flag_cookie = Cookie::build((IS_AUTHENTICATED_COOKIE, "true"))
        .path("/")
        .http_only(false)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(SESSION_TTL)
        .build();

    jar.add(token_cookie).add(user_cookie).add(flag_cookie)
}

/// Remove the full session cookie group.
pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(AUTH_TOKEN_COOKIE).path("/"))
        .remove(Cookie::build(USER_COOKIE).path("/"))
        .remove(Cookie::build(IS_AUTHENTICATED_COOKIE).path("/"))
}
