//! # mreg-cert — Marriage Certificate Tokens
//!
//! Builds and parses the opaque "marriage proof" token: a literal
//! `zkproof_` tag followed by standard-alphabet base64 of a JSON payload.
//!
//! - **Payload** (`payload.rs`): the structured payload — a fixed-shape
//!   simulated proof object, the ordered public signals, the marriage
//!   identifier, a validity flag, and the creation timestamp.
//!
//! - **Codec** (`codec.rs`): token framing. Encoding is the structural
//!   inverse of decoding for well-formed input; decoding tolerates unknown
//!   payload fields so older and newer encoders interoperate.
//!
//! ## Security Notice
//!
//! **The proof object is a simulation.** Every field is a literal stand-in
//! value; nothing here is generated or verified cryptographically. The
//! token binds its claims only as strongly as the rolling hash behind the
//! public signals — which is to say, not at all against an adversary.

pub mod codec;
pub mod payload;

pub use codec::{decode, encode, CertificateError, PROOF_TAG};
pub use payload::{CertificatePayload, SimulatedProof};
