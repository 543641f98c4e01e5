//! # Stub Identity Provider
//!
//! A deterministic in-process provider for tests and demos. It never talks
//! to the network: submissions are matched against a configured set of
//! identifiers, and the full proof-flow event sequence is emitted so
//! observer wiring can be exercised end to end.
//!
//! The stub reads the claimed identifier from the submission's query result
//! (`queryResult.uniqueIdentifier`) — a liberty a real provider does not
//! have, acceptable here because the stub exists precisely to fake the
//! provider's own assertion.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use async_trait::async_trait;
use serde_json::json;

use crate::events::{ProgressObserver, ProofFlowEvent};
use crate::proof::{ProofSubmission, VerificationOutcome, VerifiedIdentity};
use crate::provider::{IdentityProvider, ProviderError};

/// In-process provider that verifies a fixed set of identifiers.
pub struct StubIdentityProvider {
    domain: String,
    verified: BTreeSet<String>,
    attributes: BTreeMap<String, BTreeMap<String, String>>,
    observer: ProgressObserver,
}

impl StubIdentityProvider {
    /// Create a stub scoped to `domain` with no verifiable identities.
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            verified: BTreeSet::new(),
            attributes: BTreeMap::new(),
            observer: ProgressObserver::new(),
        }
    }

    /// Mark an identifier as verifiable.
    pub fn with_verified(mut self, unique_identifier: &str) -> Self {
        self.verified.insert(unique_identifier.to_string());
        self
    }

    /// Mark an identifier as verifiable with disclosed attributes.
    pub fn with_verified_attrs(
        mut self,
        unique_identifier: &str,
        attributes: BTreeMap<String, String>,
    ) -> Self {
        self.verified.insert(unique_identifier.to_string());
        self.attributes
            .insert(unique_identifier.to_string(), attributes);
        self
    }

    /// Attach a progress observer.
    pub fn with_observer(mut self, observer: ProgressObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Build the submission shape this stub recognizes for an identifier.
    pub fn submission_for(unique_identifier: &str) -> ProofSubmission {
        ProofSubmission {
            proofs: vec![json!({"proof": format!("0xstub-{unique_identifier}")})],
            query_result: json!({"uniqueIdentifier": unique_identifier}),
        }
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    fn domain(&self) -> &str {
        &self.domain
    }

    async fn verify(
        &self,
        submission: &ProofSubmission,
    ) -> Result<VerificationOutcome, ProviderError> {
        self.observer.emit(&ProofFlowEvent::RequestReceived);
        self.observer.emit(&ProofFlowEvent::GeneratingProof);
        self.observer.emit(&ProofFlowEvent::ProofGenerated);

        let claimed = submission
            .query_result
            .get("uniqueIdentifier")
            .and_then(serde_json::Value::as_str);

        let outcome = match claimed {
            Some(id) if self.verified.contains(id) => {
                self.observer.emit(&ProofFlowEvent::Result { verified: true });
                VerificationOutcome::Verified(VerifiedIdentity {
                    unique_identifier: id.to_string(),
                    disclosed_attributes: self.attributes.get(id).cloned().unwrap_or_default(),
                })
            }
            Some(_) => {
                self.observer.emit(&ProofFlowEvent::Rejected);
                VerificationOutcome::Rejected
            }
            None => {
                let message = "submission carries no recognizable query result".to_string();
                self.observer.emit(&ProofFlowEvent::Error {
                    message: message.clone(),
                });
                VerificationOutcome::Errored { message }
            }
        };

        Ok(outcome)
    }
}
