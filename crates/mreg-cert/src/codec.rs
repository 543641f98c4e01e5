//! # Token Framing
//!
//! Certificate token = literal [`PROOF_TAG`] + standard-alphabet base64 of
//! the UTF-8 JSON payload, with no internal line breaks. Tokens are encoded
//! once at creation and only ever decoded afterwards.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::payload::CertificatePayload;

/// The literal tag every certificate token starts with.
pub const PROOF_TAG: &str = "zkproof_";

/// Errors from certificate decoding.
#[derive(Error, Debug)]
pub enum CertificateError {
    /// The token does not carry the literal tag.
    #[error("certificate token does not start with {PROOF_TAG:?}")]
    BadPrefix,

    /// The tagged remainder is not base64 of a well-formed payload.
    #[error("certificate token is not a valid encoded payload: {0}")]
    BadEncoding(String),
}

/// Encode a payload into a certificate token.
pub fn encode(payload: &CertificatePayload) -> Result<String, CertificateError> {
    let json = serde_json::to_vec(payload)
        .map_err(|e| CertificateError::BadEncoding(e.to_string()))?;
    Ok(format!("{PROOF_TAG}{}", STANDARD.encode(json)))
}

/// Decode a certificate token back into its payload.
///
/// Fails with [`CertificateError::BadPrefix`] when the tag is absent, and
/// [`CertificateError::BadEncoding`] for malformed base64, non-UTF-8 bytes,
/// malformed JSON, or missing required fields. Unknown payload fields are
/// tolerated.
pub fn decode(token: &str) -> Result<CertificatePayload, CertificateError> {
    let encoded = token
        .strip_prefix(PROOF_TAG)
        .ok_or(CertificateError::BadPrefix)?;

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| CertificateError::BadEncoding(format!("invalid base64: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| CertificateError::BadEncoding(format!("invalid payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mreg_core::{MarriageId, Timestamp};

    fn sample() -> CertificatePayload {
        let marriage_id = MarriageId::derive("alice123", "bob456");
        let created = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        CertificatePayload::new(&marriage_id, "alice123", created)
    }

    #[test]
    fn roundtrip_recovers_payload_fields() {
        let payload = sample();
        let token = encode(&payload).unwrap();
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn token_shape() {
        let token = encode(&sample()).unwrap();
        assert!(token.starts_with(PROOF_TAG));
        assert!(token.is_ascii());
        assert!(!token.contains('\n'));
        // Everything after the tag is one base64 run.
        assert!(token[PROOF_TAG.len()..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn missing_prefix_is_bad_prefix() {
        let err = decode("not-prefixed").unwrap_err();
        assert!(matches!(err, CertificateError::BadPrefix));
    }

    #[test]
    fn prefix_is_case_sensitive() {
        let err = decode("ZKPROOF_abcd").unwrap_err();
        assert!(matches!(err, CertificateError::BadPrefix));
    }

    #[test]
    fn invalid_base64_is_bad_encoding() {
        let err = decode("zkproof_!!!invalid-base64!!!").unwrap_err();
        assert!(matches!(err, CertificateError::BadEncoding(_)));
    }

    #[test]
    fn valid_base64_of_garbage_is_bad_encoding() {
        let token = format!("{PROOF_TAG}{}", STANDARD.encode(b"not json"));
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, CertificateError::BadEncoding(_)));
    }

    #[test]
    fn missing_required_field_is_bad_encoding() {
        // No marriageId.
        let json = serde_json::json!({
            "publicSignals": ["1", "2", "3"],
            "isValid": true,
            "createdAt": 1000
        });
        let token = format!(
            "{PROOF_TAG}{}",
            STANDARD.encode(serde_json::to_vec(&json).unwrap())
        );
        let err = decode(&token).unwrap_err();
        assert!(matches!(err, CertificateError::BadEncoding(_)));
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["jurisdiction"] = serde_json::json!("SMP");
        let token = format!(
            "{PROOF_TAG}{}",
            STANDARD.encode(serde_json::to_vec(&json).unwrap())
        );
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded, sample());
    }

    #[test]
    fn empty_remainder_is_bad_encoding() {
        let err = decode(PROOF_TAG).unwrap_err();
        assert!(matches!(err, CertificateError::BadEncoding(_)));
    }
}
