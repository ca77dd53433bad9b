// Authentication: credential extraction, session cookies, and auth routes.
// Decision: Presence of the credential is checked here; validity is the
// backend's job (the gateway never decodes the token).

pub mod cookies;
pub mod extract;
pub mod routes;

pub use extract::Credential;
pub use routes::routes;
