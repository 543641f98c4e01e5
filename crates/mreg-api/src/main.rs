//! # mreg-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the marriage registry API. Binds to a
//! configurable port (default 8080).

use std::sync::Arc;

use mreg_api::{AppConfig, AppState};
use mreg_identity::{HttpIdentityProvider, IdentityProvider, ProviderConfig, StubIdentityProvider};
use mreg_ledger::SimulatedLedger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = AppConfig { port };

    // Identity provider: HTTP client when configured, stub otherwise.
    let provider: Arc<dyn IdentityProvider> = match ProviderConfig::from_env() {
        Ok(provider_config) => {
            tracing::info!(domain = %provider_config.domain, "identity provider configured");
            Arc::new(HttpIdentityProvider::new(provider_config)?)
        }
        Err(e) => {
            tracing::warn!(
                "identity provider not configured: {e}. Running with the stub provider; \
                 set DEMO_VERIFIED_IDS to control which identifiers verify."
            );
            let ids = std::env::var("DEMO_VERIFIED_IDS")
                .unwrap_or_else(|_| "alice123,bob456".to_string());
            let mut stub = StubIdentityProvider::new("registry.localhost");
            for id in ids.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                stub = stub.with_verified(id);
            }
            Arc::new(stub)
        }
    };

    // The simulated ledger is the only backend; a chain-backed client
    // plugs in behind the same trait.
    let ledger = Arc::new(SimulatedLedger::new());

    let state = AppState::new(config, provider, ledger);
    let app = mreg_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("marriage registry API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
