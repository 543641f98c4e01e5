//! # mreg-registry — Registry Operations
//!
//! The three operations the registry exposes to its surrounding system,
//! composed from the lower crates:
//!
//! - **`check_status`** — re-verify a party's proofs with the provider,
//!   derive the nullifier, and ask the ledger whether it is already bound.
//!
//! - **`create_certificate`** — verify both parties, enforce eligibility,
//!   derive the canonical marriage identifier, issue the certificate token,
//!   and prepare the `createMarriage` contract tuple for submission.
//!
//! - **`verify_certificate`** — the five-stage protocol: format → decode →
//!   structure → ownership → status. Linear, no retries, each stage fatal.
//!
//! All operations are request-scoped and idempotent with respect to their
//! inputs. The provider and ledger are injected collaborators; this crate
//! holds no state of its own.

pub mod error;
pub mod service;
pub mod verify;

pub use error::RegistryError;
pub use service::{CertificateIssue, RegistryService, StatusReport};
pub use verify::VerifiedCertificate;
