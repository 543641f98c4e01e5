//! # Rolling Field Hash
//!
//! The string→bounded-integer mapping used for nullifiers, marriage
//! identifiers, and the certificate's public signals. Three renderings of
//! one 32-bit rolling hash:
//!
//! - [`hash_to_field`] — decimal digits, reduced into the BN254 scalar
//!   field. Feeds the certificate's public signals.
//! - [`hash_to_hex`] — bare lowercase hex. Legacy identity-matching digest.
//! - [`hash_to_bytes32`] — `0x`-prefixed, zero-padded to 64 hex chars. The
//!   framing for nullifiers and marriage identifiers.
//!
//! The field and hex renderings are NOT the same digest and must never be
//! compared against each other.
//!
//! ## Security Invariant
//!
//! This hash is deterministic and total but NOT collision-resistant — the
//! internal state is 32 bits before reduction. It is a simulation stand-in
//! for a circuit-friendly hash, suitable only for demo identifier
//! derivation. Nothing downstream may treat it as a cryptographic binding.

/// The BN254 scalar field modulus, as accepted by common proving systems.
///
/// Every [`hash_to_field`] output is strictly below this bound. The 32-bit
/// accumulator magnitude never reaches it, so the reduction is the identity
/// on the values this hash can produce; the bound is the API contract.
pub const FIELD_MODULUS: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// Run the 32-bit rolling accumulator over the UTF-16 code units of `input`.
///
/// Each step computes `acc = (acc << 5) - acc + unit` with two's-complement
/// wraparound, matching fixed-width integer overflow semantics. Surrogate
/// pairs contribute two code units, one per half.
fn rolling_hash(input: &str) -> i32 {
    let mut acc: i32 = 0;
    for unit in input.encode_utf16() {
        acc = acc
            .wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(i32::from(unit));
    }
    acc
}

/// Absolute value of the accumulator, widened so `i32::MIN` is representable.
fn magnitude(input: &str) -> u32 {
    rolling_hash(input).unsigned_abs()
}

/// Map a string to a field element, rendered as decimal digits.
///
/// Deterministic and total. The result is non-negative and strictly less
/// than [`FIELD_MODULUS`].
pub fn hash_to_field(input: &str) -> String {
    magnitude(input).to_string()
}

/// Map a string to the bare lowercase hex rendering of the rolling hash.
///
/// Used for the legacy identity-matching comparison. Not interchangeable
/// with [`hash_to_field`]: `"255"` and `"ff"` name the same magnitude but
/// will never compare equal as strings.
pub fn hash_to_hex(input: &str) -> String {
    format!("{:x}", magnitude(input))
}

/// Map a string to the fixed-width bytes32 framing: `0x` + 64 hex chars,
/// zero-padded on the left.
///
/// This is the wire shape the ledger contract expects for nullifiers,
/// marriage identifiers, and proof digests.
pub fn hash_to_bytes32(input: &str) -> String {
    format!("0x{:0>64}", hash_to_hex(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn field_known_vectors() {
        assert_eq!(hash_to_field("alice123"), "1715574706");
        // Negative accumulator path: the rolling hash of "bob456" wraps
        // below zero and the magnitude is taken.
        assert_eq!(hash_to_field("bob456"), "1383828480");
        assert_eq!(hash_to_field("carol789"), "2581287");
        assert_eq!(hash_to_field(""), "0");
    }

    #[test]
    fn hex_known_vectors() {
        assert_eq!(hash_to_hex("alice123"), "664197b2");
        assert_eq!(hash_to_hex("bob456"), "527b8c00");
        assert_eq!(hash_to_hex(""), "0");
    }

    #[test]
    fn bytes32_known_vectors() {
        assert_eq!(
            hash_to_bytes32("alice123"),
            "0x00000000000000000000000000000000000000000000000000000000664197b2"
        );
        assert_eq!(
            hash_to_bytes32(""),
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn bytes32_is_fixed_width() {
        for s in ["", "a", "alice123", "a much longer input string"] {
            let b32 = hash_to_bytes32(s);
            assert_eq!(b32.len(), 66);
            assert!(b32.starts_with("0x"));
            assert!(b32[2..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn surrogate_pairs_hash_per_code_unit() {
        // U+1F48D encodes as two UTF-16 units; both contribute.
        assert_eq!(hash_to_field("\u{1F48D}"), "1772528");
        assert_eq!(hash_to_field("ring\u{1F48D}bearer"), "2026465919");
    }

    #[test]
    fn non_ascii_bmp_input() {
        assert_eq!(hash_to_field("héllo"), "103094734");
    }

    #[test]
    fn field_and_hex_are_distinct_digests() {
        // Same magnitude, different renderings — callers must not mix them.
        assert_ne!(hash_to_field("alice123"), hash_to_hex("alice123"));
    }

    proptest! {
        #[test]
        fn field_is_deterministic(s in ".*") {
            prop_assert_eq!(hash_to_field(&s), hash_to_field(&s));
        }

        #[test]
        fn field_is_decimal_and_below_modulus(s in ".*") {
            let f = hash_to_field(&s);
            prop_assert!(!f.is_empty());
            prop_assert!(f.chars().all(|c| c.is_ascii_digit()));
            // The magnitude fits in 32 bits; the modulus has 77 digits.
            prop_assert!(f.len() < FIELD_MODULUS.len());
        }

        #[test]
        fn bytes32_total_and_fixed_width(s in ".*") {
            prop_assert_eq!(hash_to_bytes32(&s).len(), 66);
        }
    }
}
