//! # Nullifier Binding
//!
//! Derives the uniqueness identifiers the ledger keys on. The functions here
//! are pure and total; the "identity must be verified" precondition is
//! enforced by construction, since a [`VerifiedIdentity`] only exists inside
//! a `Verified` provider outcome.

use mreg_core::{CoreError, Nullifier, ProofDigest};

use crate::proof::VerifiedIdentity;

/// Derive the stable nullifier for a verified identity.
///
/// Keys solely on the provider-asserted unique identifier. The same person
/// always yields the same nullifier, at registration and at every later
/// check alike.
pub fn derive_nullifier(identity: &VerifiedIdentity) -> Nullifier {
    Nullifier::from_unique_identifier(&identity.unique_identifier)
}

/// Digest a party's proof material for the ledger contract tuple.
///
/// The digest covers the serialized proof array verbatim; the material
/// itself remains opaque.
pub fn proof_digest(proofs: &[serde_json::Value]) -> Result<ProofDigest, CoreError> {
    let serialized = serde_json::to_string(proofs)?;
    Ok(ProofDigest::of_serialized(&serialized))
}
