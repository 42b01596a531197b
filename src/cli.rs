use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Hebrew calendar dates and numerals.
#[derive(Parser)]
#[command(name = "luach", version, about = "Hebrew calendar dates and numerals")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML configuration file, layered above the default ones.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run; shows today's date if omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show today's Hebrew date.
    Today(DisplayArgs),
    /// Convert a Gregorian date into the Hebrew calendar.
    Convert {
        /// Gregorian date as YYYY-MM-DD.
        date: NaiveDate,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Convert a Hebrew date into the Gregorian calendar.
    ToGregorian {
        year: i32,
        /// Month name (e.g. "Nisan", "Adar II") or civil index (Nisan = 1).
        month: String,
        day: u32,
    },
    /// List the months of a Hebrew year.
    Year { year: i32 },
    /// Write a number in Hebrew letters, or read Hebrew letters as a number.
    Gematriya(GematriyaArgs),
}

/// Output options for commands showing a date.
#[derive(clap::Args, Default)]
pub struct DisplayArgs {
    /// Leave out the year.
    #[arg(long)]
    pub no_year: bool,

    /// Print a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `gematriya` subcommand.
#[derive(clap::Args)]
pub struct GematriyaArgs {
    /// A decimal number to format, or Hebrew letters to parse.
    pub value: String,

    /// Only write the lowest N digits.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Punctuate with ASCII quotes instead of geresh/gershayim.
    #[arg(long)]
    pub no_geresh: bool,

    /// Leave out punctuation.
    #[arg(long)]
    pub no_punctuate: bool,

    /// Read small letters before larger ones as thousands (ה׳תשפ״ד).
    #[arg(long)]
    pub order: bool,

    /// Count unrecognized characters as zero instead of failing.
    #[arg(long)]
    pub lenient: bool,
}
