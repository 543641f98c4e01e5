//! # Marriage Identifier Derivation
//!
//! Derives the canonical couple identifier from two unique identifiers.
//! The result is independent of argument order.

use mreg_core::MarriageId;

/// Arguments for `mreg marriage-id`.
#[derive(clap::Args, Debug)]
pub struct MarriageIdArgs {
    /// One spouse's unique identifier.
    pub spouse_a: String,
    /// The other spouse's unique identifier.
    pub spouse_b: String,
}

/// Derive and print the couple's identifier.
pub fn run(args: &MarriageIdArgs) -> anyhow::Result<()> {
    println!("{}", MarriageId::derive(&args.spouse_a, &args.spouse_b));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_order_independent() {
        // Both orders print; the derived value is checked in mreg-core.
        let ab = MarriageIdArgs {
            spouse_a: "alice123".to_string(),
            spouse_b: "bob456".to_string(),
        };
        let ba = MarriageIdArgs {
            spouse_a: "bob456".to_string(),
            spouse_b: "alice123".to_string(),
        };
        assert!(run(&ab).is_ok());
        assert!(run(&ba).is_ok());
        assert_eq!(
            MarriageId::derive(&ab.spouse_a, &ab.spouse_b),
            MarriageId::derive(&ba.spouse_a, &ba.spouse_b)
        );
    }
}
