// Gateway configuration loaded from environment variables.
// Decision: Default to loopback backend and insecure cookies for local development

use std::time::Duration;

use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the gateway listens on (`BIND_ADDR`).
    pub bind_addr: String,
    /// Origin of the backend service of record (`BACKEND_URL`).
    pub backend_url: String,
    /// Bound on every outbound backend call (`BACKEND_REQUEST_TIMEOUT_SECS`).
    /// A timeout is treated the same as any other network failure.
    pub request_timeout: Duration,
    /// Whether session cookies carry the `Secure` attribute (`SECURE_COOKIES`).
    pub secure_cookies: bool,
    /// Allowed CORS origins (`CORS_ALLOWED_ORIGINS`, comma-separated).
    pub cors_origins: Vec<HeaderValue>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let backend_url = std::env::var("BACKEND_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let request_timeout = std::env::var("BACKEND_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));

        let secure_cookies = std::env::var("SECURE_COOKIES")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let cors_origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| s.split(',').filter_map(|s| s.trim().parse().ok()).collect())
            .unwrap_or_default();

        Self {
            bind_addr,
            backend_url,
            request_timeout,
            secure_cookies,
            cors_origins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-wide environment is only mutated in one place.
    #[test]
    fn from_env_defaults_and_overrides() {
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("BACKEND_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("SECURE_COOKIES");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");

        let config = GatewayConfig::from_env();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert!(!config.secure_cookies);
        assert!(config.cors_origins.is_empty());

        std::env::set_var("BACKEND_URL", "http://backend:9000");
        std::env::set_var("BACKEND_REQUEST_TIMEOUT_SECS", "3");
        std::env::set_var("SECURE_COOKIES", "true");
        std::env::set_var(
            "CORS_ALLOWED_ORIGINS",
            "https://app.example.com, https://admin.example.com",
        );

        let config = GatewayConfig::from_env();
        assert_eq!(config.backend_url, "http://backend:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(config.secure_cookies);
        assert_eq!(config.cors_origins.len(), 2);

        // Unparseable timeout falls back to the default.
        std::env::set_var("BACKEND_REQUEST_TIMEOUT_SECS", "not-a-number");
        let config = GatewayConfig::from_env();
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );

        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("BACKEND_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("SECURE_COOKIES");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");
    }
}
