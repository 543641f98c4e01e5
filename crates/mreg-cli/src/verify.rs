//! # Offline Certificate Verification
//!
//! Runs the five-stage verification protocol against the simulated ledger
//! for an asserted owner identifier. The identifier is taken at the
//! operator's word — there is no provider round trip here, which a server
//! deployment never skips.

use std::collections::BTreeMap;

use anyhow::Context;

use mreg_identity::VerifiedIdentity;
use mreg_ledger::SimulatedLedger;
use mreg_registry::verify::verify_certificate;

/// Arguments for `mreg verify`.
#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    /// The certificate token (starts with `zkproof_`).
    pub token: String,

    /// The unique identifier asserted as the certificate's owner.
    #[arg(long)]
    pub owner: String,
}

/// Run the protocol and print the verified certificate as pretty JSON.
pub async fn run(args: &VerifyArgs) -> anyhow::Result<()> {
    let identity = VerifiedIdentity {
        unique_identifier: args.owner.clone(),
        disclosed_attributes: BTreeMap::new(),
    };
    let ledger = SimulatedLedger::new();
    let verified = verify_certificate(&ledger, &identity, &args.token)
        .await
        .context("certificate failed verification")?;
    let rendered =
        serde_json::to_string_pretty(&verified).context("failed to render result")?;
    println!("{rendered}");
    Ok(())
}
