//! # mreg-identity — Identity Proof Provider Integration
//!
//! Everything the registry needs from the external identity-proof provider:
//!
//! - **Proof shapes** (`proof.rs`): the opaque submission material and the
//!   closed verification-outcome sum type. Provider results are validated
//!   into explicit structs at this boundary; the raw proof material is
//!   never inspected.
//!
//! - **Binder** (`binder.rs`): derives the stable per-person nullifier from
//!   a verified identity, and the proof digests for the ledger tuple.
//!
//! - **Provider client** (`provider.rs`): the `IdentityProvider` trait and
//!   the HTTP implementation. The client is constructed once from explicit
//!   configuration and injected wherever verification is needed — there is
//!   no ambient singleton.
//!
//! - **Progress events** (`events.rs`): the proof-flow notification enum
//!   and observer. Progress reporting is a presentation concern; operation
//!   contracts only ever see the terminal outcome.
//!
//! - **Stub provider** (`stub.rs`): a deterministic in-process provider for
//!   tests and demos.
//!
//! ## Security Invariant
//!
//! Nullifier derivation keys on the provider-asserted unique identifier
//! ONLY. Client-supplied identifiers and disclosed attributes never reach a
//! hash input, so creation-time and verification-time derivation cannot
//! disagree.

pub mod binder;
pub mod events;
pub mod proof;
pub mod provider;
pub mod stub;

pub use binder::{derive_nullifier, proof_digest};
pub use events::{ProgressObserver, ProofFlowEvent};
pub use proof::{ProofSubmission, VerificationOutcome, VerifiedIdentity};
pub use provider::{HttpIdentityProvider, IdentityProvider, ProviderConfig, ProviderError};
pub use stub::StubIdentityProvider;
