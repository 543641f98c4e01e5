//! # mreg-core — Foundational Types for the Marriage Registry Stack
//!
//! This crate is the bedrock of the registry. It defines the primitives that
//! every other crate builds on: the rolling field hash, the identifier
//! newtypes, and the UTC-only timestamp type. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `Nullifier`, `MarriageId`,
//!    `ProofDigest` — all newtypes with derivation constructors. No bare
//!    strings for identifiers, so a nullifier cannot be passed where a
//!    marriage identifier is expected.
//!
//! 2. **One hashing pipeline.** All identifier derivation flows through the
//!    rolling hash in [`field`]. The decimal field rendering and the hex
//!    renderings are distinct digests and are never interchangeable.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mreg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod field;
pub mod identity;
pub mod temporal;

pub use error::CoreError;
pub use field::{hash_to_bytes32, hash_to_field, hash_to_hex, FIELD_MODULUS};
pub use identity::{MarriageId, Nullifier, ProofDigest};
pub use temporal::Timestamp;
