//! # mreg-ledger — Marriage Ledger Collaborator
//!
//! The registry's view of the external marriage ledger contract. This crate
//! owns the query/write contract only:
//!
//! - **Types** (`types.rs`): the `createMarriage` call tuple and the status
//!   and record shapes the registry reads back.
//!
//! - **Trait** (`traits.rs`): `MarriageLedger`, the injected seam, with
//!   `LedgerError::Unavailable` as the one transient error kind.
//!
//! - **Simulated oracle** (`simulated.rs`): the in-process implementation
//!   that answers eligibility and liveness queries deterministically from
//!   identifier content, standing in for a chain lookup.
//!
//! A real chain-backed implementation replaces the simulated one behind the
//! same trait; callers never observe the difference in contract.

pub mod simulated;
pub mod traits;
pub mod types;

pub use simulated::SimulatedLedger;
pub use traits::{LedgerError, MarriageLedger};
pub use types::{ContractCallData, LedgerReceipt, MarriageRecord, MarriageStatus};
