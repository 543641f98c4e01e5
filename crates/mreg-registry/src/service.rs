//! # Registry Service
//!
//! Orchestrates the registry operations over the injected provider and
//! ledger. Each operation re-verifies submitted proof material server-side
//! before trusting anything derived from it; a client-asserted identifier
//! never reaches identifier derivation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use mreg_cert::{codec, CertificatePayload};
use mreg_core::{MarriageId, Timestamp};
use mreg_identity::{binder, IdentityProvider, ProofSubmission, VerifiedIdentity};
use mreg_ledger::{ContractCallData, MarriageLedger};

use crate::error::RegistryError;
use crate::verify::{self, VerifiedCertificate};

/// Result of a `check_status` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Whether the provider verified the submission.
    pub verified: bool,
    /// Whether the derived nullifier is already bound to a marriage.
    /// Always `false` when unverified — no identifier, nothing to look up.
    pub is_married: bool,
    /// The provider-asserted identifier, when verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_identifier: Option<String>,
}

/// Result of a successful `create_certificate` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateIssue {
    /// The couple's canonical marriage identifier.
    pub marriage_id: MarriageId,
    /// The certificate token issued to the requesting party.
    pub certificate: String,
    /// The `createMarriage` argument tuple for ledger submission.
    pub contract_data: ContractCallData,
    /// The registry prepares the tuple but never signs; the caller submits.
    pub requires_ledger_submission: bool,
}

/// The registry's operation surface over its two collaborators.
pub struct RegistryService {
    provider: Arc<dyn IdentityProvider>,
    ledger: Arc<dyn MarriageLedger>,
}

impl RegistryService {
    /// Assemble the service from its collaborators.
    pub fn new(provider: Arc<dyn IdentityProvider>, ledger: Arc<dyn MarriageLedger>) -> Self {
        Self { provider, ledger }
    }

    /// The injected ledger, for callers that need direct queries.
    pub fn ledger(&self) -> &Arc<dyn MarriageLedger> {
        &self.ledger
    }

    /// Re-verify a submission and report eligibility.
    pub async fn check_status(
        &self,
        submission: &ProofSubmission,
    ) -> Result<StatusReport, RegistryError> {
        let outcome = self.provider.verify(submission).await?;
        let Some(identity) = outcome.identity() else {
            return Ok(StatusReport {
                verified: false,
                is_married: false,
                unique_identifier: None,
            });
        };

        let nullifier = binder::derive_nullifier(identity);
        let status = self.ledger.marriage_status(&nullifier).await?;
        tracing::debug!(%nullifier, is_married = status.is_married, "status check");

        Ok(StatusReport {
            verified: true,
            is_married: status.is_married,
            unique_identifier: Some(identity.unique_identifier.clone()),
        })
    }

    /// Verify both parties, enforce eligibility, and issue a certificate
    /// with the contract tuple for ledger submission.
    ///
    /// The certificate is issued to the first party; only that party will
    /// pass the ownership stage of later verification.
    pub async fn create_certificate(
        &self,
        submission_a: &ProofSubmission,
        submission_b: &ProofSubmission,
    ) -> Result<CertificateIssue, RegistryError> {
        let outcome_a = self.provider.verify(submission_a).await?;
        let outcome_b = self.provider.verify(submission_b).await?;
        let (identity_a, identity_b) = match (outcome_a.identity(), outcome_b.identity()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(RegistryError::VerificationFailed),
        };

        let nullifier_a = binder::derive_nullifier(identity_a);
        let nullifier_b = binder::derive_nullifier(identity_b);
        for nullifier in [&nullifier_a, &nullifier_b] {
            if self.ledger.is_married(nullifier).await? {
                return Err(RegistryError::AlreadyMarried);
            }
        }

        let marriage_id = MarriageId::derive(
            &identity_a.unique_identifier,
            &identity_b.unique_identifier,
        );
        let created = Timestamp::now();
        let payload =
            CertificatePayload::new(&marriage_id, &identity_a.unique_identifier, created);
        let certificate =
            codec::encode(&payload).map_err(|e| RegistryError::Internal(e.to_string()))?;

        let contract_data = ContractCallData {
            marriage_id: marriage_id.clone(),
            spouse_a_nullifier: nullifier_a,
            spouse_b_nullifier: nullifier_b,
            proof_digest_a: binder::proof_digest(&submission_a.proofs)
                .map_err(|e| RegistryError::Internal(e.to_string()))?,
            proof_digest_b: binder::proof_digest(&submission_b.proofs)
                .map_err(|e| RegistryError::Internal(e.to_string()))?,
        };

        tracing::info!(%marriage_id, "issued marriage certificate");
        Ok(CertificateIssue {
            marriage_id,
            certificate,
            contract_data,
            requires_ledger_submission: true,
        })
    }

    /// Re-verify the claimant and run the certificate verification
    /// protocol.
    pub async fn verify_certificate(
        &self,
        claimed: &ProofSubmission,
        token: &str,
    ) -> Result<VerifiedCertificate, RegistryError> {
        let outcome = self.provider.verify(claimed).await?;
        let identity: &VerifiedIdentity =
            outcome.identity().ok_or(RegistryError::VerificationFailed)?;
        verify::verify_certificate(self.ledger.as_ref(), identity, token).await
    }
}
