//! # Certificate Payload
//!
//! The structured payload inside a marriage certificate token. The public
//! signals are an ordered sequence; their positions are part of the wire
//! contract:
//!
//! | Index | Content |
//! |-------|---------|
//! | 0     | `hash_to_field(marriage_id)` |
//! | 1     | creation time, Unix seconds, decimal |
//! | 2     | `hash_to_field(requester unique identifier)` |

use serde::{Deserialize, Serialize};

use mreg_core::{hash_to_field, MarriageId, Timestamp};

/// Number of public signals a well-formed payload carries.
pub const PUBLIC_SIGNAL_COUNT: usize = 3;

/// A Groth16-shaped placeholder proof.
///
/// Every field is a fixed literal stand-in. The shape exists so the payload
/// reads like the output of a real proving system; no verifier ever
/// evaluates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedProof {
    /// A ∈ G1 stand-in.
    #[serde(rename = "piA")]
    pub pi_a: Vec<String>,
    /// B ∈ G2 stand-in.
    #[serde(rename = "piB")]
    pub pi_b: Vec<Vec<String>>,
    /// C ∈ G1 stand-in.
    #[serde(rename = "piC")]
    pub pi_c: Vec<String>,
    /// Proving protocol label.
    pub protocol: String,
    /// Curve label.
    pub curve: String,
}

impl SimulatedProof {
    /// The fixed placeholder value every certificate carries.
    pub fn placeholder() -> Self {
        Self {
            pi_a: vec!["0".to_string(), "0".to_string(), "1".to_string()],
            pi_b: vec![
                vec!["0".to_string(), "0".to_string()],
                vec!["0".to_string(), "0".to_string()],
                vec!["1".to_string(), "0".to_string()],
            ],
            pi_c: vec!["0".to_string(), "0".to_string(), "1".to_string()],
            protocol: "groth16".to_string(),
            curve: "bn128".to_string(),
        }
    }
}

impl Default for SimulatedProof {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// The certificate payload.
///
/// Created once at marriage-creation time and immutable thereafter. The
/// payload shape is versionless: decoding tolerates unknown fields and the
/// proof object is defaulted when absent, but the marriage identifier, the
/// validity flag, the signals, and the creation timestamp are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificatePayload {
    /// The simulated proof object.
    #[serde(default)]
    pub proof: SimulatedProof,
    /// Ordered public signals; see the module table.
    #[serde(rename = "publicSignals")]
    pub public_signals: Vec<String>,
    /// The couple's canonical marriage identifier.
    #[serde(rename = "marriageId")]
    pub marriage_id: String,
    /// Fixed to `true` at creation; a structural requirement at
    /// verification, not the status authority.
    #[serde(rename = "isValid")]
    pub valid: bool,
    /// Creation time, Unix milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at_ms: i64,
}

impl CertificatePayload {
    /// Build the payload for a newly created marriage.
    ///
    /// `requester_id` is the unique identifier of the party the certificate
    /// is issued to; only that party passes the ownership check later.
    pub fn new(marriage_id: &MarriageId, requester_id: &str, created: Timestamp) -> Self {
        Self {
            proof: SimulatedProof::placeholder(),
            public_signals: vec![
                hash_to_field(marriage_id.as_str()),
                created.epoch_secs().to_string(),
                hash_to_field(requester_id),
            ],
            marriage_id: marriage_id.as_str().to_string(),
            valid: true,
            created_at_ms: created.epoch_millis(),
        }
    }

    /// The embedded requester field hash, if the signals are present.
    pub fn requester_field(&self) -> Option<&str> {
        self.public_signals.get(2).map(String::as_str)
    }

    /// Whether the public signals have the required count and shapes
    /// (decimal field elements at 0 and 2, decimal seconds at 1).
    pub fn signals_well_formed(&self) -> bool {
        self.public_signals.len() == PUBLIC_SIGNAL_COUNT
            && self
                .public_signals
                .iter()
                .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CertificatePayload {
        let marriage_id = MarriageId::derive("alice123", "bob456");
        let created = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        CertificatePayload::new(&marriage_id, "alice123", created)
    }

    #[test]
    fn new_payload_signal_positions() {
        let payload = sample();
        assert_eq!(payload.public_signals.len(), PUBLIC_SIGNAL_COUNT);
        // hash_to_field of the bytes32 marriage identifier string.
        assert_eq!(payload.public_signals[0], "1049755038");
        assert_eq!(payload.public_signals[1], "1768478400");
        assert_eq!(payload.public_signals[2], "1715574706");
        assert_eq!(payload.requester_field(), Some("1715574706"));
    }

    #[test]
    fn new_payload_is_valid_with_millis() {
        let payload = sample();
        assert!(payload.valid);
        assert_eq!(payload.created_at_ms, 1_768_478_400_000);
        assert!(payload.marriage_id.starts_with("0x"));
    }

    #[test]
    fn signals_well_formed_accepts_fresh_payload() {
        assert!(sample().signals_well_formed());
    }

    #[test]
    fn signals_well_formed_rejects_wrong_count() {
        let mut payload = sample();
        payload.public_signals.pop();
        assert!(!payload.signals_well_formed());
    }

    #[test]
    fn signals_well_formed_rejects_non_decimal() {
        let mut payload = sample();
        payload.public_signals[0] = "0xdeadbeef".to_string();
        assert!(!payload.signals_well_formed());
    }

    #[test]
    fn placeholder_proof_shape() {
        let proof = SimulatedProof::placeholder();
        assert_eq!(proof.protocol, "groth16");
        assert_eq!(proof.curve, "bn128");
        assert_eq!(proof.pi_a.len(), 3);
        assert_eq!(proof.pi_b.len(), 3);
    }

    #[test]
    fn payload_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("publicSignals").is_some());
        assert!(json.get("marriageId").is_some());
        assert!(json.get("isValid").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json["proof"].get("piA").is_some());
    }

    #[test]
    fn payload_decodes_without_proof_object() {
        let json = serde_json::json!({
            "publicSignals": ["1", "2", "3"],
            "marriageId": "0xabc",
            "isValid": true,
            "createdAt": 1000
        });
        let payload: CertificatePayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.proof, SimulatedProof::placeholder());
    }
}
