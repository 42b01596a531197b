//! Utilities for converting dates between the Gregorian and Hebrew calendars.
//!
//! The Hebrew calendar is computed with the traditional fixed arithmetic
//! (molad and postponement rules), so any date from 1 Tishrei AM 1 onwards
//! can be converted exactly. Dates can then be rendered with Hebrew month
//! names and Hebrew numerals (gematriya).
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use luach::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Hebrew calendar:
//!
//! ```
//! use luach::{format_hebrew_date, to_jewish_date};
//! use luach::hebrew::Month;
//!
//! let date = to_jewish_date(2024, 9, 3).unwrap();
//!
//! assert_eq!((5784, Month::Av, 30), (date.year(), date.month_name(), date.day()));
//! assert_eq!("ל׳ אב תשפ״ד", format_hebrew_date(&date, true));
//! ```
//!
//! Hebrew numerals:
//!
//! ```
//! use luach::gematriya::Options;
//!
//! assert_eq!("תשפ״ד", luach::gematriya(784, &Options::default()));
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod gematriya;
pub mod hebrew;

pub use date::{Date, YearType};
pub use error::Error;
pub use gematriya::format as gematriya;
pub use hebrew::fmt::format_hebrew_date;
pub use hebrew::{HebrewDate, to_jewish_date};
