//! # Simulated Ledger (Oracle)
//!
//! A deterministic, in-process stand-in for the chain-backed marriage
//! registry contract. Eligibility and liveness predicates are computed from
//! the identifier's own character content instead of durable state:
//!
//! - a marriage is **active** unless the character-code sum of its
//!   identifier is divisible by 20;
//! - a nullifier reads as **married** when its character-code sum is
//!   divisible by 20 (so the overwhelming majority of fresh identities are
//!   eligible).
//!
//! The formulas are throwaway; the contract — pure function of an opaque
//! identifier, boolean out, total — is what a real implementation must
//! preserve.
//!
//! `create_marriage` keeps an in-memory record so that registered couples
//! are visible to `get_marriage` and `marriage_status` within the process
//! lifetime. Nothing persists.
//!
//! ## Security Warning
//!
//! **NOT A LEDGER.** Anyone can recompute these answers; nothing is
//! attested. Development and demonstration only.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use mreg_core::{hash_to_bytes32, MarriageId, Nullifier, Timestamp};

use crate::traits::{LedgerError, MarriageLedger};
use crate::types::{ContractCallData, LedgerReceipt, MarriageRecord, MarriageStatus};

/// Sum of the UTF-16 code units of an identifier string.
fn char_code_sum(s: &str) -> u64 {
    s.encode_utf16().map(u64::from).sum()
}

/// The deterministic in-process ledger.
#[derive(Debug, Clone)]
pub struct SimulatedLedger {
    jurisdiction: String,
    records: Arc<RwLock<HashMap<String, MarriageRecord>>>,
    by_nullifier: Arc<RwLock<HashMap<String, MarriageId>>>,
    next_block: Arc<AtomicU64>,
}

impl SimulatedLedger {
    /// Create an empty simulated ledger.
    pub fn new() -> Self {
        Self {
            jurisdiction: "demo".to_string(),
            records: Arc::new(RwLock::new(HashMap::new())),
            by_nullifier: Arc::new(RwLock::new(HashMap::new())),
            next_block: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Use a different jurisdiction label on created records.
    pub fn with_jurisdiction(mut self, jurisdiction: &str) -> Self {
        self.jurisdiction = jurisdiction.to_string();
        self
    }

    /// The liveness formula: active unless the char-code sum is divisible
    /// by 20.
    fn formula_active(marriage_id: &MarriageId) -> bool {
        char_code_sum(marriage_id.as_str()) % 20 != 0
    }

    /// The eligibility formula: married when the char-code sum is divisible
    /// by 20.
    fn formula_married(nullifier: &Nullifier) -> bool {
        char_code_sum(nullifier.as_str()) % 20 == 0
    }
}

impl Default for SimulatedLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarriageLedger for SimulatedLedger {
    async fn is_married(&self, nullifier: &Nullifier) -> Result<bool, LedgerError> {
        if self.by_nullifier.read().contains_key(nullifier.as_str()) {
            return Ok(true);
        }
        Ok(Self::formula_married(nullifier))
    }

    async fn is_marriage_active(&self, marriage_id: &MarriageId) -> Result<bool, LedgerError> {
        if let Some(record) = self.records.read().get(marriage_id.as_str()) {
            return Ok(record.is_active);
        }
        Ok(Self::formula_active(marriage_id))
    }

    async fn marriage_status(
        &self,
        nullifier: &Nullifier,
    ) -> Result<MarriageStatus, LedgerError> {
        if let Some(marriage_id) = self.by_nullifier.read().get(nullifier.as_str()) {
            let date = self
                .records
                .read()
                .get(marriage_id.as_str())
                .map(|r| r.marriage_date);
            return Ok(MarriageStatus {
                is_married: true,
                marriage_id: Some(marriage_id.clone()),
                marriage_date: date,
            });
        }
        if Self::formula_married(nullifier) {
            return Ok(MarriageStatus {
                is_married: true,
                marriage_id: None,
                marriage_date: None,
            });
        }
        Ok(MarriageStatus::unmarried())
    }

    async fn get_marriage(
        &self,
        marriage_id: &MarriageId,
    ) -> Result<Option<MarriageRecord>, LedgerError> {
        Ok(self.records.read().get(marriage_id.as_str()).cloned())
    }

    async fn create_marriage(
        &self,
        call: &ContractCallData,
    ) -> Result<LedgerReceipt, LedgerError> {
        for nullifier in [&call.spouse_a_nullifier, &call.spouse_b_nullifier] {
            if self.is_married(nullifier).await? {
                return Err(LedgerError::Rejected(format!(
                    "nullifier {nullifier} is already bound to a marriage"
                )));
            }
        }

        let record = MarriageRecord {
            spouse_a_nullifier: call.spouse_a_nullifier.clone(),
            spouse_b_nullifier: call.spouse_b_nullifier.clone(),
            marriage_date: Timestamp::now(),
            is_active: true,
            jurisdiction: self.jurisdiction.clone(),
        };
        self.records
            .write()
            .insert(call.marriage_id.as_str().to_string(), record);
        for nullifier in [&call.spouse_a_nullifier, &call.spouse_b_nullifier] {
            self.by_nullifier
                .write()
                .insert(nullifier.as_str().to_string(), call.marriage_id.clone());
        }

        let serialized = serde_json::to_string(call)
            .map_err(|e| LedgerError::Rejected(format!("unserializable call data: {e}")))?;
        let receipt = LedgerReceipt {
            transaction_hash: hash_to_bytes32(&serialized),
            block_number: self.next_block.fetch_add(1, Ordering::Relaxed),
        };
        tracing::info!(
            marriage_id = %call.marriage_id,
            tx = %receipt.transaction_hash,
            block = receipt.block_number,
            "recorded simulated marriage"
        );
        Ok(receipt)
    }
}
