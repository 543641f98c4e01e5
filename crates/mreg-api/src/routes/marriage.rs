//! # Marriage Registry Routes
//!
//! The three registry operations over HTTP:
//!
//! - POST `/v1/marriage/check` — re-verify one party and report whether
//!   they are already registered.
//! - POST `/v1/marriage/create` — verify both parties and issue the
//!   certificate token plus the ledger contract tuple.
//! - POST `/v1/marriage/verify` — check a certificate token against a
//!   claimed identity.
//!
//! Domain verification outcomes (ownership, structure, dissolved) return
//! 200 with `isValid: false` and a tagged error, matching the token's
//! consumers; transport and collaborator failures use the error body with
//! 4xx/5xx statuses.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use mreg_identity::ProofSubmission;
use mreg_registry::RegistryError;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Build the marriage registry router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/marriage/check", post(check))
        .route("/v1/marriage/create", post(create))
        .route("/v1/marriage/verify", post(verify))
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// One party's proof material, as produced by the provider SDK.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PartySubmission {
    /// Proof results from the provider SDK. Opaque to the registry.
    #[schema(value_type = Vec<Object>)]
    pub proofs: Vec<serde_json::Value>,
    /// The SDK query result the proofs respond to. Opaque to the registry.
    #[serde(rename = "queryResult")]
    #[schema(value_type = Object)]
    pub query_result: serde_json::Value,
}

impl PartySubmission {
    fn into_submission(self) -> ProofSubmission {
        ProofSubmission {
            proofs: self.proofs,
            query_result: self.query_result,
        }
    }
}

/// Response to a status check.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    /// Whether the provider verified the submission.
    pub verified: bool,
    /// Whether the party is already registered. Always `false` when
    /// unverified.
    pub is_married: bool,
    /// The provider-asserted identifier, when verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_identifier: Option<String>,
}

/// Request to create a marriage.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRequest {
    /// The requesting party. The certificate is issued to them.
    #[serde(rename = "spouse1")]
    pub spouse_a: PartySubmission,
    /// The other party.
    #[serde(rename = "spouse2")]
    pub spouse_b: PartySubmission,
}

/// Response to a creation request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    /// Whether the marriage was created.
    pub success: bool,
    /// The couple's marriage identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage_id: Option<String>,
    /// The certificate token, issued to the requesting party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    /// The `createMarriage` argument tuple for ledger submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub contract_data: Option<serde_json::Value>,
    /// The registry prepares the tuple but never signs; the caller submits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_ledger_submission: Option<bool>,
    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable failure tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CreateResponse {
    fn failure(err: &RegistryError) -> Self {
        Self {
            success: false,
            marriage_id: None,
            certificate: None,
            contract_data: None,
            requires_ledger_submission: None,
            error: Some(err.to_string()),
            error_code: Some(err.code().to_string()),
        }
    }
}

/// Request to verify a certificate token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyRequest {
    /// The claimant's proof material; re-verified with the provider before
    /// the ownership check.
    pub claimant: PartySubmission,
    /// The certificate token (starts with `zkproof_`).
    pub certificate: String,
}

/// Response to a verification request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// Whether the certificate is valid for the claimant.
    pub is_valid: bool,
    /// The couple's marriage identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage_id: Option<String>,
    /// Marriage registration time, Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<i64>,
    /// Display placeholder for the other spouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    /// Whether the marriage is active on the ledger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable failure tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl VerifyResponse {
    fn failure(err: &RegistryError) -> Self {
        Self {
            is_valid: false,
            marriage_id: None,
            marriage_date: None,
            spouse_name: None,
            is_active: None,
            error: Some(err.to_string()),
            error_code: Some(err.code().to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl Validate for PartySubmission {
    fn validate(&self) -> Result<(), String> {
        if self.proofs.is_empty() {
            return Err("proofs must not be empty".into());
        }
        Ok(())
    }
}

impl Validate for CreateRequest {
    fn validate(&self) -> Result<(), String> {
        self.spouse_a.validate().map_err(|e| format!("spouse1: {e}"))?;
        self.spouse_b.validate().map_err(|e| format!("spouse2: {e}"))?;
        Ok(())
    }
}

impl Validate for VerifyRequest {
    fn validate(&self) -> Result<(), String> {
        self.claimant.validate().map_err(|e| format!("claimant: {e}"))?;
        if self.certificate.trim().is_empty() {
            return Err("certificate must not be empty".into());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/marriage/check — Re-verify one party and report eligibility.
#[utoipa::path(
    post,
    path = "/v1/marriage/check",
    request_body = PartySubmission,
    responses(
        (status = 200, description = "Status report", body = CheckResponse),
        (status = 422, description = "Malformed or invalid submission", body = ErrorBody),
        (status = 502, description = "Provider or ledger unreachable", body = ErrorBody),
    ),
    tag = "marriage"
)]
pub(crate) async fn check(
    State(state): State<AppState>,
    body: Result<Json<PartySubmission>, JsonRejection>,
) -> Result<Json<CheckResponse>, AppError> {
    let submission = extract_validated_json(body)?.into_submission();
    let report = state.registry.check_status(&submission).await?;
    Ok(Json(CheckResponse {
        verified: report.verified,
        is_married: report.is_married,
        unique_identifier: report.unique_identifier,
    }))
}

/// POST /v1/marriage/create — Verify both parties and issue a certificate.
#[utoipa::path(
    post,
    path = "/v1/marriage/create",
    request_body = CreateRequest,
    responses(
        (status = 200, description = "Certificate issued", body = CreateResponse),
        (status = 409, description = "A party is already married", body = CreateResponse),
        (status = 422, description = "Verification failed or malformed request", body = CreateResponse),
        (status = 502, description = "Provider or ledger unreachable", body = ErrorBody),
    ),
    tag = "marriage"
)]
pub(crate) async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), AppError> {
    let req = extract_validated_json(body)?;
    let (spouse_a, spouse_b) = (
        req.spouse_a.into_submission(),
        req.spouse_b.into_submission(),
    );

    match state.registry.create_certificate(&spouse_a, &spouse_b).await {
        Ok(issue) => {
            let contract_data = serde_json::to_value(&issue.contract_data)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            Ok((
                StatusCode::OK,
                Json(CreateResponse {
                    success: true,
                    marriage_id: Some(issue.marriage_id.as_str().to_string()),
                    certificate: Some(issue.certificate),
                    contract_data: Some(contract_data),
                    requires_ledger_submission: Some(issue.requires_ledger_submission),
                    error: None,
                    error_code: None,
                }),
            ))
        }
        Err(err @ RegistryError::VerificationFailed) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(CreateResponse::failure(&err)),
        )),
        Err(err @ RegistryError::AlreadyMarried) => {
            Ok((StatusCode::CONFLICT, Json(CreateResponse::failure(&err))))
        }
        Err(other) => Err(other.into()),
    }
}

/// POST /v1/marriage/verify — Check a certificate against a claimed
/// identity.
///
/// Runs the five-stage protocol: format, decode, structure, ownership,
/// status. Protocol failures return 200 with `isValid: false` and a tagged
/// error; only collaborator failures surface as 5xx.
#[utoipa::path(
    post,
    path = "/v1/marriage/verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Verification result", body = VerifyResponse),
        (status = 422, description = "Malformed request", body = ErrorBody),
        (status = 502, description = "Provider or ledger unreachable", body = ErrorBody),
    ),
    tag = "marriage"
)]
pub(crate) async fn verify(
    State(state): State<AppState>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let claimant = req.claimant.into_submission();

    match state
        .registry
        .verify_certificate(&claimant, &req.certificate)
        .await
    {
        Ok(verified) => Ok(Json(VerifyResponse {
            is_valid: true,
            marriage_id: Some(verified.marriage_id.as_str().to_string()),
            marriage_date: Some(verified.marriage_date.epoch_millis()),
            spouse_name: Some(verified.spouse_name),
            is_active: Some(verified.is_active),
            error: None,
            error_code: None,
        })),
        Err(err) if err.is_transient() => Err(err.into()),
        Err(RegistryError::Internal(msg)) => Err(AppError::Internal(msg)),
        Err(err) => Ok(Json(VerifyResponse::failure(&err))),
    }
}
