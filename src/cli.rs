use clap::{Parser, Subcommand};

/// Wareki Japanese era-calendar converter.
#[derive(Parser)]
#[command(
    name = "wareki",
    version,
    about = "Convert between Gregorian and Japanese era (gengo) dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian year or date to era form.
    ToWareki(ToWarekiArgs),
    /// Convert an era name plus in-era year to a Gregorian year.
    ToAd(ToAdArgs),
    /// List the tabulated eras.
    Eras,
}

/// Arguments for the `to-wareki` subcommand.
#[derive(clap::Args)]
pub struct ToWarekiArgs {
    /// A Gregorian year (2020) or full date (2020-03-15).
    pub value: String,

    /// Render the first year of an era as 元年 instead of 1年.
    #[arg(long)]
    pub gannen: bool,
}

/// Arguments for the `to-ad` subcommand.
#[derive(clap::Args)]
pub struct ToAdArgs {
    /// Era name, romanized (Heisei) or kanji (平成).
    pub era: String,

    /// 1-based year within the era.
    pub year: i32,
}
