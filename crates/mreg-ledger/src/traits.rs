//! # The Marriage Ledger Seam
//!
//! Abstract interface for the external marriage ledger. Implementations
//! answer with no internally defined timeout or cancellation policy —
//! callers impose their own around the collaborator call.

use async_trait::async_trait;
use thiserror::Error;

use mreg_core::{MarriageId, Nullifier};

use crate::types::{ContractCallData, LedgerReceipt, MarriageRecord, MarriageStatus};

/// Errors from marriage ledger calls.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger could not be reached. The one kind a caller MAY retry.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    /// The ledger evaluated the call and rejected it. Never retried.
    #[error("ledger rejected the call: {0}")]
    Rejected(String),
}

impl LedgerError {
    /// Whether a caller may reasonably retry after this error.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// The marriage ledger contract, as the registry consumes it.
///
/// All query methods are pure with respect to their inputs: same identifier,
/// same answer, no side effects. `create_marriage` is the single write.
#[async_trait]
pub trait MarriageLedger: Send + Sync {
    /// Whether this nullifier is already bound to a marriage.
    async fn is_married(&self, nullifier: &Nullifier) -> Result<bool, LedgerError>;

    /// Whether this marriage is still active (not dissolved).
    async fn is_marriage_active(&self, marriage_id: &MarriageId) -> Result<bool, LedgerError>;

    /// Full status for a nullifier.
    async fn marriage_status(&self, nullifier: &Nullifier)
        -> Result<MarriageStatus, LedgerError>;

    /// The record for a marriage identifier, if one exists.
    async fn get_marriage(
        &self,
        marriage_id: &MarriageId,
    ) -> Result<Option<MarriageRecord>, LedgerError>;

    /// Submit a `createMarriage` transaction.
    async fn create_marriage(&self, call: &ContractCallData)
        -> Result<LedgerReceipt, LedgerError>;
}
