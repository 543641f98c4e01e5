//! # Proof Submission & Verification Outcome Shapes
//!
//! The provider SDK hands back loosely-typed material. This module pins the
//! shapes the registry actually relies on and leaves the rest opaque: proof
//! material is carried as raw JSON and treated as a capability token —
//! forwarded to the provider for re-verification, digested for the ledger
//! tuple, never interpreted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Proof material submitted by a client on behalf of one party.
///
/// `proofs` and `query_result` are opaque provider SDK values. Nothing in
/// this system reads their internals; the provider re-verifies them
/// server-side and asserts the resulting identity. Any client-supplied
/// identifier that may accompany a submission on the wire is deliberately
/// not represented here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofSubmission {
    /// Proof results produced by the provider SDK on the client.
    pub proofs: Vec<serde_json::Value>,
    /// The SDK query result the proofs respond to.
    #[serde(rename = "queryResult")]
    pub query_result: serde_json::Value,
}

/// A provider-verified identity.
///
/// Only produced from a [`VerificationOutcome::Verified`] result, so holding
/// one is evidence that the provider accepted the submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    /// The provider-asserted stable identifier for this person. The sole
    /// input to nullifier derivation.
    #[serde(rename = "uniqueIdentifier")]
    pub unique_identifier: String,
    /// Attributes the party chose to disclose (e.g. first name). Display
    /// only — never part of identifier derivation.
    #[serde(default, rename = "disclosedAttributes")]
    pub disclosed_attributes: BTreeMap<String, String>,
}

/// Terminal outcome of a provider verification round trip.
///
/// Closed set: the intermediate SDK callbacks (request received, generating,
/// generated) surface as progress events, never as outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The provider accepted the proofs and asserted an identity.
    Verified(VerifiedIdentity),
    /// The provider evaluated the proofs and rejected them.
    Rejected,
    /// The provider could not evaluate the proofs.
    Errored {
        /// Provider-reported reason.
        message: String,
    },
}

impl VerificationOutcome {
    /// Whether this outcome is a successful verification.
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified(_))
    }

    /// The verified identity, if this outcome carries one.
    pub fn identity(&self) -> Option<&VerifiedIdentity> {
        match self {
            Self::Verified(identity) => Some(identity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submission_deserializes_from_sdk_wire_shape() {
        let raw = json!({
            "proofs": [{"proof": "0xabc", "vkeyHash": "0xdef"}],
            "queryResult": {"age": {"gte": {"expected": 18, "result": true}}},
            "uniqueIdentifier": "client-asserted-ignored"
        });
        let submission: ProofSubmission = serde_json::from_value(raw).unwrap();
        assert_eq!(submission.proofs.len(), 1);
        // The client-asserted identifier is not part of the shape.
        let back = serde_json::to_value(&submission).unwrap();
        assert!(back.get("uniqueIdentifier").is_none());
    }

    #[test]
    fn outcome_accessors() {
        let verified = VerificationOutcome::Verified(VerifiedIdentity {
            unique_identifier: "alice123".to_string(),
            disclosed_attributes: BTreeMap::new(),
        });
        assert!(verified.is_verified());
        assert_eq!(verified.identity().unwrap().unique_identifier, "alice123");

        assert!(!VerificationOutcome::Rejected.is_verified());
        assert!(VerificationOutcome::Rejected.identity().is_none());

        let errored = VerificationOutcome::Errored {
            message: "timeout".to_string(),
        };
        assert!(!errored.is_verified());
    }
}
