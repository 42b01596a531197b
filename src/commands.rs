use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use luach::config::Config;
use luach::gematriya::{self, Options};
use luach::hebrew::{HebrewDate, Month, Year, fmt};
use luach::{Date, YearType};

use crate::cli::{DisplayArgs, GematriyaArgs};

/// JSON shape of a converted date.
#[derive(Serialize)]
struct DateReport<'a> {
    gregorian: String,
    hebrew: HebrewDate,
    month_name: Month,
    /// Position of the month counted from Tishri.
    ordinal: u32,
    formatted: &'a str,
}

/// Show today's date in the local timezone.
pub fn today(args: &DisplayArgs, config: &Config) -> Result<()> {
    let today = Local::now().date_naive();
    info!(%today, "using local date");
    convert(today, args, config)
}

/// Show a Gregorian date in the Hebrew calendar.
pub fn convert(gregorian: NaiveDate, args: &DisplayArgs, config: &Config) -> Result<()> {
    let date = Date::from_gregorian(gregorian.year(), gregorian.month(), gregorian.day())?;
    let hebrew = HebrewDate::from_date(date)
        .with_context(|| format!("cannot convert {gregorian} into the Hebrew calendar"))?;
    debug!(jdn = date.jdn(), ?hebrew, "converted");

    let include_year = config.display.include_year && !args.no_year;
    let formatted = fmt::format_with(&hebrew, include_year, &config.display.style());

    if args.json {
        let report = DateReport {
            gregorian: date.iso_gregorian(),
            hebrew,
            month_name: hebrew.month_name(),
            ordinal: hebrew.ordinal(),
            formatted: &formatted,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{formatted}");
    }
    Ok(())
}

/// Show a Hebrew date in the Gregorian calendar.
pub fn to_gregorian(year: i32, month: &str, day: u32) -> Result<()> {
    let civil = match month.parse::<u32>() {
        Ok(index) => index,
        Err(_) => {
            let name: Month = month.parse()?;
            name.civil(YearType::from_hebrew(year))
                .with_context(|| format!("{name} does not occur in year {year}"))?
        }
    };
    let date = HebrewDate::new(year, civil, day)?;
    println!("{}", date.to_date().iso_gregorian());
    Ok(())
}

/// List the months of a Hebrew year with their first days and lengths.
pub fn year(year: i32, config: &Config) -> Result<()> {
    let table = Year::new(year)?;
    let language = config.display.language;
    let leap = if table.year_type.is_leap() { "leap" } else { "common" };
    println!("{}: {} days, {}, {leap}", table.year, table.days(), table.kind);
    for pair in table.months.windows(2) {
        let (start, next) = (pair[0], pair[1]);
        println!(
            "{:<10} {}  {} days",
            start.month.name(language),
            start.date.iso_gregorian(),
            next.date - start.date
        );
    }
    Ok(())
}

/// Format a number, or parse Hebrew letters back into one.
pub fn gematriya(args: &GematriyaArgs, config: &Config) -> Result<()> {
    let punctuate = config.display.punctuate && !args.no_punctuate;
    let options = Options {
        limit: args.limit,
        punctuate,
        geresh: punctuate && config.display.geresh && !args.no_geresh,
        order: args.order,
        lenient: args.lenient,
    };
    match args.value.parse::<u32>() {
        Ok(num) => println!("{}", gematriya::format(num, &options)),
        Err(_) => println!("{}", gematriya::parse(&args.value, &options)?),
    }
    Ok(())
}
