//! # Certificate Inspection
//!
//! Decodes a certificate token and prints the payload as pretty JSON.
//! Inspection is offline: no provider, no ledger, no ownership check.

use anyhow::Context;

/// Arguments for `mreg inspect`.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// The certificate token (starts with `zkproof_`).
    pub token: String,
}

/// Decode and print a certificate payload.
pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let payload = mreg_cert::decode(&args.token).context("failed to decode certificate")?;
    let rendered =
        serde_json::to_string_pretty(&payload).context("failed to render payload")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mreg_core::{MarriageId, Timestamp};

    #[test]
    fn run_accepts_valid_token() {
        let marriage_id = MarriageId::derive("alice123", "bob456");
        let created = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        let payload = mreg_cert::CertificatePayload::new(&marriage_id, "alice123", created);
        let token = mreg_cert::encode(&payload).unwrap();
        assert!(run(&InspectArgs { token }).is_ok());
    }

    #[test]
    fn run_rejects_garbage() {
        let result = run(&InspectArgs {
            token: "garbage".to_string(),
        });
        assert!(result.is_err());
    }
}
