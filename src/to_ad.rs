//! to-ad command: era name plus in-era year -> Gregorian year.

use anyhow::{bail, Result};
use tracing::debug;

use wareki_core::Era;

use crate::cli::ToAdArgs;

/// Resolves the era and prints the plain Gregorian year.
pub fn run(args: ToAdArgs) -> Result<()> {
    if args.year < 1 {
        bail!("year within era must be >= 1, got {}", args.year);
    }
    let era = Era::new(&args.era)?;
    let ad = era.year(args.year).to_ad();
    debug!(era = era.name(), year = args.year, ad, "converted to AD");
    println!("{ad}");
    Ok(())
}
