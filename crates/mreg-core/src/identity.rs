//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the registry's identifier namespaces. These prevent
//! accidental identifier confusion — you cannot pass a `Nullifier` where a
//! `MarriageId` is expected.
//!
//! ## Security Invariant
//!
//! A [`Nullifier`] is only ever derived from a provider-asserted unique
//! identifier, never from client-supplied or disclosed data. Substituting
//! one identifier namespace for another is a type error.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::field::hash_to_bytes32;

/// A stable pseudonym for a verified identity.
///
/// Derived one-way from the identity provider's unique identifier; used as
/// the uniqueness key for marriage eligibility without revealing who the
/// party is. Wire shape: `0x` + 64 lowercase hex chars.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nullifier(String);

impl Nullifier {
    /// Derive the nullifier for a provider-asserted unique identifier.
    ///
    /// Deterministic: the same identifier always yields the same nullifier.
    pub fn from_unique_identifier(unique_identifier: &str) -> Self {
        Self(hash_to_bytes32(unique_identifier))
    }

    /// Access the bytes32 string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Nullifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical identifier for a registered couple.
///
/// Derived from the sorted pair of the spouses' unique identifiers, so the
/// same couple always maps to the same identifier regardless of argument
/// order. Creation time is metadata stored alongside, never folded into the
/// identifier — recomputing the identifier later must reproduce it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarriageId(String);

impl MarriageId {
    /// Separator between the sorted pair members.
    const SEPARATOR: &'static str = "_";

    /// Derive the canonical marriage identifier for a couple.
    ///
    /// Commutative: `derive(a, b) == derive(b, a)`.
    pub fn derive(id_a: &str, id_b: &str) -> Self {
        let (first, second) = if id_a <= id_b {
            (id_a, id_b)
        } else {
            (id_b, id_a)
        };
        let combined = format!("{first}{}{second}", Self::SEPARATOR);
        Self(hash_to_bytes32(&combined))
    }

    /// Wrap an identifier received from the wire (a decoded certificate or
    /// a ledger record).
    ///
    /// Only non-emptiness is enforced; the payload shape is versionless and
    /// older encoders may have framed the identifier differently.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.is_empty() {
            return Err(CoreError::Validation(
                "marriage identifier must not be empty".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    /// Access the string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarriageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bytes32 digest of serialized proof material, as submitted to the
/// ledger contract alongside the nullifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofDigest(String);

impl ProofDigest {
    /// Digest serialized proof material.
    pub fn of_serialized(material: &str) -> Self {
        Self(hash_to_bytes32(material))
    }

    /// Access the bytes32 string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProofDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
