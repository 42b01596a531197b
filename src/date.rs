//! Calendar-independant date, and the Gregorian calendar.
//!
//! Every conversion in this crate pivots on the Julian day number (JDN), the
//! count of days since noon, January 1, 4713 BC (proleptic Julian calendar).

use std::ops::{Add, Sub};

use crate::error::{Calendar, Error};
use crate::hebrew::molad;

/// Julian day number of January 1, 1 AD, proleptic Gregorian calendar.
pub const GREGORIAN_EPOCH: i64 = 1_721_426;

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns [`Error::InvalidDate`] if `month` or `day` is out of range for
    /// that year, or if the date precedes the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use luach::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        let invalid = || Error::InvalidDate {
            calendar: Calendar::Gregorian,
            year,
            month,
            day,
        };
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(invalid());
        }
        u32::try_from(gregorian_to_jdn(year, month, day))
            .map(Self::from_jdn)
            .map_err(|_| invalid())
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use luach::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, u32, u32) {
        jdn_to_gregorian(self.jdn.into())
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use luach::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use luach::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Indicates whether a year is a leap year or common year.
///
/// In the Gregorian calendar a leap year has February 29; in the Hebrew
/// calendar it has a thirteenth month (Adar I).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Determines if `year` is a leap year in Hebrew calendar.
    pub fn from_hebrew(year: i32) -> Self {
        if molad::is_leap_year(year) {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in a Gregorian month, or `0` if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if YearType::from_gregorian(year).is_leap() => 29,
        2 => 28,
        _ => 0,
    }
}

/// Converts a proleptic Gregorian date into a Julian day number.
///
/// This does not validate its input: a `day` past the end of the month simply
/// rolls into the following month. Use [`Date::from_gregorian`] for a checked
/// conversion.
///
/// ```
/// use luach::date::gregorian_to_jdn;
///
/// assert_eq!(2460557, gregorian_to_jdn(2024, 9, 3));
/// ```
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - 1;
    let m = i64::from(month);
    // Counted as if the year began in March, so February absorbs the leap day.
    let leap_adj = match month {
        1 | 2 => 0,
        _ if YearType::from_gregorian(year).is_leap() => -1,
        _ => -2,
    };
    GREGORIAN_EPOCH - 1
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        + (367 * m - 362).div_euclid(12)
        + leap_adj
        + i64::from(day)
}

/// Converts a Julian day number into a proleptic Gregorian date, in
/// `(year, month, day)` format.
pub fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let depoch = jdn - GREGORIAN_EPOCH;
    let quadricent = depoch.div_euclid(146_097);
    let dqc = depoch.rem_euclid(146_097);
    let cent = dqc.div_euclid(36_524);
    let dcent = dqc.rem_euclid(36_524);
    let quad = dcent.div_euclid(1_461);
    let dquad = dcent.rem_euclid(1_461);
    let yindex = dquad.div_euclid(365);
    let mut year = quadricent * 400 + cent * 100 + quad * 4 + yindex;
    // The last day of a leap cycle would otherwise spill into the next year.
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }
    let year = year as i32;

    let yearday = jdn - gregorian_to_jdn(year, 1, 1);
    let leap_adj = if jdn < gregorian_to_jdn(year, 3, 1) {
        0
    } else if YearType::from_gregorian(year).is_leap() {
        1
    } else {
        2
    };
    let month = ((yearday + leap_adj) * 12 + 373).div_euclid(367) as u32;
    let day = (jdn - gregorian_to_jdn(year, month, 1) + 1) as u32;
    (year, month, day)
}
