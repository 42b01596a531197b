//! Arithmetic model of the Hebrew year.
//!
//! Year starts are reckoned from the mean new moon (molad): months are
//! counted since the epoch, converted into days and "parts" (1/1080 hour),
//! and then deferred according to the postponement rules. Months are numbered
//! in civil order here, Nisan = 1 through Adar (or Adar I) = 12 and Adar II =
//! 13.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Julian day number anchoring the year arithmetic. 1 Tishrei AM 1 falls two
/// days later, on JDN 347998.
pub const HEBREW_EPOCH: i64 = 347_996;

/// Parts (halakim) in a day: 24 hours of 1080 parts.
pub const PARTS_PER_DAY: i64 = 25_920;

/// Fractional part of a mean lunation beyond 29 days, in parts
/// (12 hours 793 parts).
const LUNATION_PARTS: i64 = 13_753;

/// Parts of the first molad, offset for the day count used below.
const FIRST_MOLAD_PARTS: i64 = 12_084;

/// Returns `true` if `year` has thirteen months.
///
/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle are leap years.
///
/// ```
/// use luach::hebrew::molad::is_leap_year;
///
/// assert!(is_leap_year(5784));
/// assert!(!is_leap_year(5785));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    matches!(year.rem_euclid(19), 0 | 3 | 6 | 8 | 11 | 14 | 17)
}

/// 13 for leap years, 12 otherwise.
pub fn months_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad of Tishrei of `year`, deferred by one day
/// when the molad falls on a day 1 Tishrei may not start on.
pub fn year_start_delay(year: i32) -> i64 {
    let months = (235 * i64::from(year) - 234).div_euclid(19);
    let parts = FIRST_MOLAD_PARTS + LUNATION_PARTS * months;
    let mut day = months * 29 + parts.div_euclid(PARTS_PER_DAY);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day += 1;
    }
    day
}

/// Extra deferment (0, 1 or 2 days) keeping the length of `year` and of the
/// year before it within 353..=355 or 383..=385 days.
pub fn year_start_adjacent_delay(year: i32) -> i64 {
    let last = year_start_delay(year - 1);
    let present = year_start_delay(year);
    let next = year_start_delay(year + 1);

    if next - present == 356 {
        2
    } else if present - last == 382 {
        1
    } else {
        0
    }
}

/// Julian day number of 1 Tishrei of `year`.
pub fn new_year(year: i32) -> i64 {
    HEBREW_EPOCH + year_start_delay(year) + year_start_adjacent_delay(year) + 2
}

/// Number of days in `year`, one of 353, 354, 355, 383, 384 or 385.
///
/// ```
/// use luach::hebrew::molad::year_length;
///
/// assert_eq!(383, year_length(5784));
/// assert_eq!(355, year_length(5785));
/// ```
pub fn year_length(year: i32) -> u32 {
    (new_year(year + 1) - new_year(year)) as u32
}

/// Number of days in civil-numbered `month` of `year`.
///
/// Cheshvan (8) and Kislev (9) depend on the [`YearKind`], every other month
/// has a fixed length. Returns 29 for Adar II (13) even in common years; check
/// [`months_in_year`] first.
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 | 4 | 6 | 10 | 13 => 29,
        12 if !is_leap_year(year) => 29,
        8 if YearKind::from_year(year) != YearKind::Complete => 29,
        9 if YearKind::from_year(year) == YearKind::Deficient => 29,
        _ => 30,
    }
}

/// How many days Cheshvan and Kislev have in a year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearKind {
    /// Both months have 29 days (353 or 383 days).
    Deficient,
    /// Cheshvan has 29 days, Kislev 30 (354 or 384 days).
    Regular,
    /// Both months have 30 days (355 or 385 days).
    Complete,
}

impl YearKind {
    /// Classifies `year` by its length.
    pub fn from_year(year: i32) -> Self {
        match year_length(year) % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }
}

impl fmt::Display for YearKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            YearKind::Deficient => "deficient",
            YearKind::Regular => "regular",
            YearKind::Complete => "complete",
        })
    }
}
