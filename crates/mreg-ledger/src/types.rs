//! # Ledger Contract Shapes
//!
//! Argument and return shapes for the marriage registry contract. Only the
//! shapes are fixed here — transport belongs to the implementation behind
//! [`MarriageLedger`](crate::MarriageLedger).

use serde::{Deserialize, Serialize};

use mreg_core::{MarriageId, Nullifier, ProofDigest, Timestamp};

/// The argument tuple for the contract's `createMarriage` method.
///
/// Prepared by the registry and handed to whoever submits the transaction;
/// the registry itself never signs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCallData {
    /// The couple's canonical marriage identifier.
    pub marriage_id: MarriageId,
    /// First spouse's nullifier.
    pub spouse_a_nullifier: Nullifier,
    /// Second spouse's nullifier.
    pub spouse_b_nullifier: Nullifier,
    /// Digest of the first spouse's proof material.
    pub proof_digest_a: ProofDigest,
    /// Digest of the second spouse's proof material.
    pub proof_digest_b: ProofDigest,
}

/// Result of a status query keyed by nullifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageStatus {
    /// Whether the nullifier is bound to an active marriage.
    pub is_married: bool,
    /// The marriage identifier, when the ledger can name it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage_id: Option<MarriageId>,
    /// The marriage date, when the ledger can name it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<Timestamp>,
}

impl MarriageStatus {
    /// A status with no marriage on record.
    pub fn unmarried() -> Self {
        Self {
            is_married: false,
            marriage_id: None,
            marriage_date: None,
        }
    }
}

/// A full marriage record, keyed by marriage identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageRecord {
    /// First spouse's nullifier.
    pub spouse_a_nullifier: Nullifier,
    /// Second spouse's nullifier.
    pub spouse_b_nullifier: Nullifier,
    /// When the marriage was registered.
    pub marriage_date: Timestamp,
    /// Whether the marriage is still active.
    pub is_active: bool,
    /// The registering jurisdiction.
    pub jurisdiction: String,
}

/// Receipt for a submitted `createMarriage` transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerReceipt {
    /// Transaction hash on the ledger.
    pub transaction_hash: String,
    /// Block the transaction landed in.
    pub block_number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_call_data_serializes_camel_case() {
        let call = ContractCallData {
            marriage_id: MarriageId::derive("alice123", "bob456"),
            spouse_a_nullifier: Nullifier::from_unique_identifier("alice123"),
            spouse_b_nullifier: Nullifier::from_unique_identifier("bob456"),
            proof_digest_a: mreg_core::ProofDigest::of_serialized("[]"),
            proof_digest_b: mreg_core::ProofDigest::of_serialized("[]"),
        };
        let json = serde_json::to_value(&call).unwrap();
        assert!(json.get("marriageId").is_some());
        assert!(json.get("spouseANullifier").is_some());
        assert!(json.get("proofDigestB").is_some());
    }

    #[test]
    fn unmarried_status_omits_optionals() {
        let json = serde_json::to_value(MarriageStatus::unmarried()).unwrap();
        assert_eq!(json["isMarried"], false);
        assert!(json.get("marriageId").is_none());
        assert!(json.get("marriageDate").is_none());
    }
}
