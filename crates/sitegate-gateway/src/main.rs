// Sitegate gateway server
// Decision: Thin binary; router construction lives in the library so tests
// can drive it in-process.

use anyhow::{Context, Result};
use sitegate_gateway::config::GatewayConfig;
use sitegate_gateway::upstream::Backend;
use sitegate_gateway::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitegate_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("sitegate-gateway starting...");

    let config = GatewayConfig::from_env();
    tracing::info!(
        backend = %config.backend_url,
        timeout_secs = config.request_timeout.as_secs(),
        secure_cookies = config.secure_cookies,
        "Backend origin configured"
    );

    if config.cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS origins configured");
    }

    let backend = Backend::new(&config.backend_url, config.request_timeout)
        .context("Failed to build backend client")?;
    let state = AppState::new(backend, config.secure_cookies);

    let router = app(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}
