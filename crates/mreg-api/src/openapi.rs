//! # OpenAPI Document
//!
//! Auto-generated OpenAPI spec for the registry API via utoipa derive
//! macros, served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorDetail};
use crate::routes::marriage::{
    CheckResponse, CreateRequest, CreateResponse, PartySubmission, VerifyRequest, VerifyResponse,
};
use crate::state::AppState;

/// The registry API document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marriage Registry API",
        description = "Privacy-preserving marriage registry: status checks, certificate issuance, and certificate verification."
    ),
    paths(
        crate::routes::marriage::check,
        crate::routes::marriage::create,
        crate::routes::marriage::verify,
    ),
    components(schemas(
        PartySubmission,
        CheckResponse,
        CreateRequest,
        CreateResponse,
        VerifyRequest,
        VerifyResponse,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "marriage", description = "Marriage registry operations")
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
