//! to-wareki command: Gregorian year or date -> era form.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use wareki_core::{EraYear, WarekiDate};

use crate::cli::ToWarekiArgs;

/// Converts the argument and prints the era-form rendering.
///
/// A value containing `-` is parsed as a full `YYYY-MM-DD` date and printed
/// as `平成32年3月15日`; otherwise it is parsed as a bare year and printed
/// as `平成32年`.
pub fn run(args: ToWarekiArgs) -> Result<()> {
    if args.value.contains('-') {
        let date: NaiveDate = args
            .value
            .parse()
            .with_context(|| format!("not a valid date (expected YYYY-MM-DD): {}", args.value))?;
        debug!(%date, "converting full date");
        let wareki = WarekiDate::from_gregorian(date)?;
        if args.gannen {
            println!("{wareki:#}");
        } else {
            println!("{wareki}");
        }
    } else {
        let year: i32 = args
            .value
            .parse()
            .with_context(|| format!("not a valid year: {}", args.value))?;
        debug!(year, "converting bare year");
        let era_year = EraYear::from_ad(year)?;
        if args.gannen {
            println!("{era_year:#}");
        } else {
            println!("{era_year}");
        }
    }
    Ok(())
}
