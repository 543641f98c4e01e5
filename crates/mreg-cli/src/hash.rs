//! # Hash Utilities
//!
//! Renders the registry's rolling hash of a string in any of its three
//! framings. Handy for cross-checking the identifiers embedded in tokens
//! and contract tuples.

use clap::ValueEnum;

use mreg_core::{hash_to_bytes32, hash_to_field, hash_to_hex};

/// Which rendering of the rolling hash to print.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Rendering {
    /// Decimal field element (the public-signal form).
    Field,
    /// Bare lowercase hex (the legacy identity-matching form).
    Hex,
    /// `0x`-prefixed, zero-padded to 64 chars (the contract form).
    Bytes32,
}

/// Arguments for `mreg hash`.
#[derive(clap::Args, Debug)]
pub struct HashArgs {
    /// The string to hash.
    pub input: String,

    /// Rendering to print.
    #[arg(long, value_enum, default_value = "field")]
    pub rendering: Rendering,
}

fn render(input: &str, rendering: Rendering) -> String {
    match rendering {
        Rendering::Field => hash_to_field(input),
        Rendering::Hex => hash_to_hex(input),
        Rendering::Bytes32 => hash_to_bytes32(input),
    }
}

/// Print the requested rendering of the input.
pub fn run(args: &HashArgs) -> anyhow::Result<()> {
    println!("{}", render(&args.input, args.rendering));
    Ok(())
}
