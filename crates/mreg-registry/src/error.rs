//! # Registry Error Taxonomy
//!
//! Every public operation returns a tagged outcome; nothing panics or
//! throws past its boundary. The two `*Unavailable` kinds are the only
//! ones a caller may retry.

use thiserror::Error;

use mreg_cert::CertificateError;
use mreg_identity::ProviderError;
use mreg_ledger::LedgerError;

/// Failures of the registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The identity provider rejected or could not evaluate a party's
    /// proofs. Not retried.
    #[error("identity verification failed")]
    VerificationFailed,

    /// A party's nullifier is already bound to a marriage.
    #[error("party is already registered in an active marriage")]
    AlreadyMarried,

    /// The certificate token does not carry the literal tag.
    #[error("invalid marriage certificate format")]
    InvalidCertificateFormat,

    /// The tagged remainder does not decode to a payload.
    #[error("invalid marriage certificate encoding: {0}")]
    InvalidCertificateEncoding(String),

    /// The decoded payload is missing required content.
    #[error("invalid marriage certificate structure: {0}")]
    InvalidCertificateStructure(String),

    /// The certificate does not belong to the claimed identity.
    #[error("this marriage certificate does not belong to the claimed identity")]
    NotCertificateOwner,

    /// The marriage has been dissolved or is not active on the ledger.
    #[error("marriage has been dissolved or is not active on the ledger")]
    MarriageInactive,

    /// The identity provider could not be reached or answered abnormally.
    /// MAY be retried by the caller.
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The ledger could not be reached. MAY be retried by the caller.
    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(String),

    /// A failure no well-formed input can produce.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Machine-readable tag for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::VerificationFailed => "verification_failed",
            Self::AlreadyMarried => "already_married",
            Self::InvalidCertificateFormat => "invalid_format",
            Self::InvalidCertificateEncoding(_) => "invalid_encoding",
            Self::InvalidCertificateStructure(_) => "invalid_structure",
            Self::NotCertificateOwner => "not_owner",
            Self::MarriageInactive => "marriage_inactive",
            Self::ProviderUnavailable(_) => "provider_unavailable",
            Self::LedgerUnavailable(_) => "ledger_unavailable",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether a caller may reasonably retry the operation.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable(_) | Self::LedgerUnavailable(_)
        )
    }
}

impl From<CertificateError> for RegistryError {
    fn from(err: CertificateError) -> Self {
        match err {
            CertificateError::BadPrefix => Self::InvalidCertificateFormat,
            CertificateError::BadEncoding(msg) => Self::InvalidCertificateEncoding(msg),
        }
    }
}

impl From<ProviderError> for RegistryError {
    fn from(err: ProviderError) -> Self {
        Self::ProviderUnavailable(err.to_string())
    }
}

impl From<LedgerError> for RegistryError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Unavailable(msg) => Self::LedgerUnavailable(msg),
            LedgerError::Rejected(msg) => Self::Internal(msg),
        }
    }
}
