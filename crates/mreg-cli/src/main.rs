//! # mreg CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Marriage registry CLI — offline certificate tooling.
///
/// Inspects and verifies marriage certificate tokens, derives couple
/// identifiers, and renders the registry's rolling hash.
#[derive(Parser, Debug)]
#[command(name = "mreg", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode a certificate token and print its payload.
    Inspect(mreg_cli::inspect::InspectArgs),
    /// Run the verification protocol against the simulated ledger.
    Verify(mreg_cli::verify::VerifyArgs),
    /// Render the rolling hash of a string.
    Hash(mreg_cli::hash::HashArgs),
    /// Derive the canonical identifier for a couple.
    MarriageId(mreg_cli::marriage_id::MarriageIdArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => mreg_cli::inspect::run(&args),
        Commands::Verify(args) => mreg_cli::verify::run(&args).await,
        Commands::Hash(args) => mreg_cli::hash::run(&args),
        Commands::MarriageId(args) => mreg_cli::marriage_id::run(&args),
    }
}
