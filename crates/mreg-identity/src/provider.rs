//! # Identity Provider Client
//!
//! The [`IdentityProvider`] trait is the seam between the registry and the
//! external identity-proof service. Operations receive a provider as an
//! injected collaborator; the HTTP implementation below is constructed once
//! from explicit configuration at process start.
//!
//! The provider round trip is the registry's only outbound network call
//! besides the ledger. No retry policy lives here — [`ProviderError`]
//! distinguishes the transient kinds so callers can decide.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::events::{ProgressObserver, ProofFlowEvent};
use crate::proof::{ProofSubmission, VerificationOutcome, VerifiedIdentity};

/// Errors from identity provider calls.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The provider returned a non-2xx status.
    #[error("provider {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("provider configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Whether a caller may reasonably retry after this error.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Deserialization { .. } | Self::Config(_) => false,
        }
    }
}

/// The identity-proof verification seam.
///
/// Implementations re-verify submitted proof material server-side and
/// report one terminal outcome. They must never trust a client-asserted
/// identifier.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The domain this provider instance was scoped to at construction.
    fn domain(&self) -> &str;

    /// Verify one party's proof submission.
    ///
    /// Transport-level failures are `Err`; provider-evaluated rejections and
    /// provider-reported flow errors are `Ok` with the matching outcome.
    async fn verify(
        &self,
        submission: &ProofSubmission,
    ) -> Result<VerificationOutcome, ProviderError>;
}

/// Configuration for the HTTP provider client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// The verifying domain, as registered with the provider.
    pub domain: String,
    /// Base URL of the provider's verification API.
    pub base_url: Url,
    /// Request timeout for the verification round trip.
    pub timeout: Duration,
    /// Whether to ask the provider for development-mode verification
    /// (accepts test documents).
    pub dev_mode: bool,
}

impl ProviderConfig {
    const DEFAULT_BASE_URL: &'static str = "https://api.proofpass.id";
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Build configuration from the environment.
    ///
    /// `PROVIDER_DOMAIN` is required. `PROVIDER_BASE_URL`,
    /// `PROVIDER_TIMEOUT_SECS`, and `PROVIDER_DEV_MODE` are optional.
    pub fn from_env() -> Result<Self, ProviderError> {
        let domain = std::env::var("PROVIDER_DOMAIN")
            .map_err(|_| ProviderError::Config("PROVIDER_DOMAIN is not set".to_string()))?;
        let base_url = std::env::var("PROVIDER_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url)
            .map_err(|e| ProviderError::Config(format!("invalid PROVIDER_BASE_URL: {e}")))?;
        let timeout = std::env::var("PROVIDER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);
        let dev_mode = std::env::var("PROVIDER_DEV_MODE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Ok(Self {
            domain,
            base_url,
            timeout: Duration::from_secs(timeout),
            dev_mode,
        })
    }
}

/// Wire shape of the provider's verification response.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    verified: bool,
    #[serde(rename = "uniqueIdentifier")]
    unique_identifier: Option<String>,
    #[serde(default, rename = "disclosedAttributes")]
    disclosed_attributes: std::collections::BTreeMap<String, String>,
    /// Present when the provider could not evaluate the proofs; absent on a
    /// plain rejection.
    reason: Option<String>,
}

/// HTTP client for the identity-proof provider.
///
/// One instance per process, scoped to a verifying domain at construction
/// and injected into every operation that needs verification.
pub struct HttpIdentityProvider {
    config: ProviderConfig,
    client: reqwest::Client,
    observer: ProgressObserver,
}

impl HttpIdentityProvider {
    /// Construct a provider client for the given domain configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            config,
            client,
            observer: ProgressObserver::new(),
        })
    }

    /// Attach a progress observer for proof-flow notifications.
    pub fn with_observer(mut self, observer: ProgressObserver) -> Self {
        self.observer = observer;
        self
    }

    fn verify_endpoint(&self) -> String {
        format!("{}v1/verify", self.config.base_url)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    fn domain(&self) -> &str {
        &self.config.domain
    }

    async fn verify(
        &self,
        submission: &ProofSubmission,
    ) -> Result<VerificationOutcome, ProviderError> {
        let endpoint = self.verify_endpoint();
        self.observer.emit(&ProofFlowEvent::RequestReceived);

        let body = serde_json::json!({
            "domain": self.config.domain,
            "proofs": submission.proofs,
            "queryResult": submission.query_result,
            "devMode": self.config.dev_mode,
        });

        let response = self
            .client
            .post(&endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|source| {
                self.observer.emit(&ProofFlowEvent::Error {
                    message: source.to_string(),
                });
                ProviderError::Http {
                    endpoint: endpoint.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.observer.emit(&ProofFlowEvent::Error {
                message: format!("provider returned {status}"),
            });
            return Err(ProviderError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let parsed: VerifyResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Deserialization {
                    endpoint: endpoint.clone(),
                    source,
                })?;

        let outcome = match parsed {
            VerifyResponse {
                verified: true,
                unique_identifier: Some(unique_identifier),
                disclosed_attributes,
                ..
            } => VerificationOutcome::Verified(VerifiedIdentity {
                unique_identifier,
                disclosed_attributes,
            }),
            VerifyResponse {
                verified: true,
                unique_identifier: None,
                ..
            } => VerificationOutcome::Errored {
                message: "provider verified without asserting an identifier".to_string(),
            },
            VerifyResponse {
                reason: Some(message),
                ..
            } => VerificationOutcome::Errored { message },
            _ => VerificationOutcome::Rejected,
        };

        match &outcome {
            VerificationOutcome::Verified(_) => {
                self.observer.emit(&ProofFlowEvent::Result { verified: true });
            }
            VerificationOutcome::Rejected => self.observer.emit(&ProofFlowEvent::Rejected),
            VerificationOutcome::Errored { message } => {
                tracing::warn!(%endpoint, %message, "provider reported a flow error");
                self.observer.emit(&ProofFlowEvent::Error {
                    message: message.clone(),
                });
            }
        }

        Ok(outcome)
    }
}
