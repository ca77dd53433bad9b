// Backend HTTP client wrapper
// Decision: Exactly one outbound call per inbound request, no retries
// Decision: Backend errors carry a `detail` field; fall back to raw body text

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("backend request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Client for the backend service of record.
///
/// Holds a single pooled `reqwest::Client` with a bounded request timeout.
/// Credentials are attached per call; the client itself is stateless.
pub struct Backend {
    base_url: String,
    http: reqwest::Client,
}

impl Backend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str, bearer: Option<&str>) -> Result<Value, UpstreamError> {
        let response = self.request(Method::GET, path, bearer).send().await?;
        Self::read_json(response).await
    }

    pub async fn post(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: Option<&Value>,
    ) -> Result<Value, UpstreamError> {
        let mut request = self.request(Method::POST, path, bearer);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        Self::read_json(response).await
    }

    pub async fn put(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &Value,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .request(Method::PUT, path, bearer)
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn delete(&self, path: &str, bearer: Option<&str>) -> Result<(), UpstreamError> {
        let response = self.request(Method::DELETE, path, bearer).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        Ok(())
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }
        Ok(response.json().await?)
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> UpstreamError {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| {
                if text.trim().is_empty() {
                    status.to_string()
                } else {
                    text
                }
            });
        UpstreamError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("base_url", &self.base_url)
            .finish()
    }
}
