//! # mreg-api — Axum HTTP Surface
//!
//! Assembles the registry routes into a single application with request
//! tracing and unauthenticated health probes.
//!
//! ## API Surface
//!
//! | Route                  | Module                | Purpose                     |
//! |------------------------|-----------------------|-----------------------------|
//! | `/v1/marriage/check`   | [`routes::marriage`]  | Eligibility check           |
//! | `/v1/marriage/create`  | [`routes::marriage`]  | Certificate issuance        |
//! | `/v1/marriage/verify`  | [`routes::marriage`]  | Certificate verification    |
//! | `/openapi.json`        | [`openapi`]           | OpenAPI 3 document          |
//! | `/health/*`            | `lib.rs`              | Liveness/readiness probes   |
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers — they validate, delegate to
//!   `mreg-registry`, and map outcomes to wire shapes.
//! - All errors map to structured responses via [`AppError`].

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router.
///
/// Health probes are mounted alongside the API routes and carry no state.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::marriage::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    health.merge(api)
}

/// Liveness probe — the process is up.
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Readiness probe — the process can serve traffic. The registry has no
/// startup dependencies to await, so readiness follows liveness.
async fn readiness() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ready"}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mreg_identity::StubIdentityProvider;
    use mreg_ledger::SimulatedLedger;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState::new(
            AppConfig::default(),
            Arc::new(StubIdentityProvider::new("registry.example")),
            Arc::new(SimulatedLedger::new()),
        ))
    }

    #[tokio::test]
    async fn health_probes_respond() {
        for uri in ["/health/liveness", "/health/readiness"] {
            let resp = test_app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/v1/marriage/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
