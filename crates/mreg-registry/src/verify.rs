//! # Certificate Verification Protocol
//!
//! A linear state machine over a claimed identity and a certificate token:
//!
//! 1. **Format** — the token must start with the literal tag.
//! 2. **Decode** — the tagged remainder must decode to a payload.
//! 3. **Structure** — non-empty marriage identifier, validity flag set,
//!    three well-formed public signals.
//! 4. **Ownership** — the claimed identity's field hash must match the
//!    embedded requester signal.
//! 5. **Status** — the ledger must report the marriage active.
//!
//! No stage is retried; any failure short-circuits with its own error kind.
//! The payload's validity flag is a structural requirement only — the
//! ledger is the status authority.

use mreg_cert::{codec, PROOF_TAG};
use mreg_core::{hash_to_field, MarriageId, Timestamp};
use mreg_identity::VerifiedIdentity;
use mreg_ledger::MarriageLedger;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// A successfully verified certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedCertificate {
    /// The couple's marriage identifier.
    pub marriage_id: MarriageId,
    /// When the marriage was registered.
    pub marriage_date: Timestamp,
    /// Display placeholder for the other spouse; the registry never learns
    /// names.
    pub spouse_name: String,
    /// Always `true` on success — the ledger confirmed liveness.
    pub is_active: bool,
}

/// Run the verification protocol for a claimed identity and token.
pub async fn verify_certificate(
    ledger: &dyn MarriageLedger,
    claimed: &VerifiedIdentity,
    token: &str,
) -> Result<VerifiedCertificate, RegistryError> {
    // Stage 1: format.
    if !token.starts_with(PROOF_TAG) {
        return Err(RegistryError::InvalidCertificateFormat);
    }

    // Stage 2: decode.
    let payload = codec::decode(token)?;

    // Stage 3: structure.
    let marriage_id = MarriageId::parse(&payload.marriage_id).map_err(|_| {
        RegistryError::InvalidCertificateStructure("empty marriage identifier".to_string())
    })?;
    if !payload.valid {
        return Err(RegistryError::InvalidCertificateStructure(
            "validity flag is not set".to_string(),
        ));
    }
    if !payload.signals_well_formed() {
        return Err(RegistryError::InvalidCertificateStructure(
            "malformed public signals".to_string(),
        ));
    }
    let marriage_date = Timestamp::from_epoch_millis(payload.created_at_ms).map_err(|_| {
        RegistryError::InvalidCertificateStructure("unrepresentable creation time".to_string())
    })?;

    // Stage 4: ownership.
    let claimed_field = hash_to_field(&claimed.unique_identifier);
    if payload.requester_field() != Some(claimed_field.as_str()) {
        return Err(RegistryError::NotCertificateOwner);
    }

    // Stage 5: status.
    if !ledger.is_marriage_active(&marriage_id).await? {
        return Err(RegistryError::MarriageInactive);
    }

    Ok(VerifiedCertificate {
        marriage_id,
        marriage_date,
        spouse_name: "Partner B".to_string(),
        is_active: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mreg_cert::CertificatePayload;
    use mreg_ledger::SimulatedLedger;
    use std::collections::BTreeMap;

    fn identity(id: &str) -> VerifiedIdentity {
        VerifiedIdentity {
            unique_identifier: id.to_string(),
            disclosed_attributes: BTreeMap::new(),
        }
    }

    fn token_for(a: &str, b: &str, requester: &str) -> String {
        let marriage_id = MarriageId::derive(a, b);
        let created = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let payload = CertificatePayload::new(&marriage_id, requester, created);
        codec::encode(&payload).unwrap()
    }

    #[tokio::test]
    async fn valid_certificate_verifies() {
        let ledger = SimulatedLedger::new();
        let token = token_for("alice123", "bob456", "alice123");
        let verified = verify_certificate(&ledger, &identity("alice123"), &token)
            .await
            .unwrap();
        assert!(verified.is_active);
        assert_eq!(verified.marriage_id, MarriageId::derive("alice123", "bob456"));
        assert_eq!(verified.marriage_date.to_iso8601(), "2026-01-15T12:00:00Z");
        assert_eq!(verified.spouse_name, "Partner B");
    }

    #[tokio::test]
    async fn unprefixed_token_fails_format() {
        let ledger = SimulatedLedger::new();
        let err = verify_certificate(&ledger, &identity("alice123"), "not-prefixed")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCertificateFormat));
    }

    #[tokio::test]
    async fn garbage_after_tag_fails_encoding() {
        let ledger = SimulatedLedger::new();
        let err = verify_certificate(
            &ledger,
            &identity("alice123"),
            "zkproof_!!!invalid-base64!!!",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCertificateEncoding(_)));
    }

    #[tokio::test]
    async fn cleared_validity_flag_fails_structure() {
        let ledger = SimulatedLedger::new();
        let marriage_id = MarriageId::derive("alice123", "bob456");
        let created = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let mut payload = CertificatePayload::new(&marriage_id, "alice123", created);
        payload.valid = false;
        let token = codec::encode(&payload).unwrap();

        let err = verify_certificate(&ledger, &identity("alice123"), &token)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCertificateStructure(_)));
    }

    #[tokio::test]
    async fn dropped_signal_fails_structure() {
        let ledger = SimulatedLedger::new();
        let marriage_id = MarriageId::derive("alice123", "bob456");
        let created = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let mut payload = CertificatePayload::new(&marriage_id, "alice123", created);
        payload.public_signals.truncate(2);
        let token = codec::encode(&payload).unwrap();

        let err = verify_certificate(&ledger, &identity("alice123"), &token)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidCertificateStructure(_)));
    }

    #[tokio::test]
    async fn wrong_claimant_fails_ownership() {
        let ledger = SimulatedLedger::new();
        let token = token_for("alice123", "bob456", "alice123");
        let err = verify_certificate(&ledger, &identity("carol789"), &token)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotCertificateOwner));
        assert!(err.to_string().contains("belong"));
    }

    #[tokio::test]
    async fn non_requesting_spouse_fails_ownership() {
        // Only the party the certificate was issued to passes stage 4.
        let ledger = SimulatedLedger::new();
        let token = token_for("alice123", "bob456", "alice123");
        let err = verify_certificate(&ledger, &identity("bob456"), &token)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotCertificateOwner));
    }

    #[tokio::test]
    async fn dissolved_marriage_fails_status_after_ownership() {
        // This couple's identifier char-sums to a multiple of 20, which the
        // oracle reads as dissolved. Structure and ownership still pass.
        let ledger = SimulatedLedger::new();
        let token = token_for("bob456", "carol789", "bob456");
        let err = verify_certificate(&ledger, &identity("bob456"), &token)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::MarriageInactive));
        assert!(err.to_string().contains("dissolved"));
    }
}
