//! Hebrew calendar
//!
//! The calendar is computed arithmetically from the molad, see [`molad`].
//! Conversions go through the Julian day number of [`Date`].
//!
//! Months are stored by their civil index, Nisan = 1 through Adar = 12, with
//! Adar II = 13 in leap years. The year number changes on 1 Tishrei (7), so
//! the months of a year run 7, 8, ..., 12 (or 13), 1, ..., 6. [`Month`] names
//! them and knows their position in that order.

use std::fmt as std_fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date::{Date, YearType};
use crate::error::{Calendar, Error};

pub mod fmt;
pub mod molad;

pub use molad::YearKind;

/// Last Hebrew year supported by the validating constructors.
pub const MAX_YEAR: i32 = 1_000_000;

/// Month name. `Adar` exists only in common years, `AdarI` and `AdarII` only
/// in leap years.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Month {
    Tishri,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarI,
    AdarII,
    Nisan,
    Iyyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

use Month::*;

const COMMON_YEAR: [Month; 12] = [
    Tishri, Cheshvan, Kislev, Tevet, Shevat, Adar, Nisan, Iyyar, Sivan, Tammuz, Av, Elul,
];
const LEAP_YEAR: [Month; 13] = [
    Tishri, Cheshvan, Kislev, Tevet, Shevat, AdarI, AdarII, Nisan, Iyyar, Sivan, Tammuz, Av,
    Elul,
];

impl Month {
    /// All months of a year, from Tishri to Elul.
    ///
    /// ```
    /// use luach::YearType;
    /// use luach::hebrew::Month;
    ///
    /// assert_eq!(12, Month::in_order(YearType::Common).len());
    /// assert_eq!(Month::AdarII, Month::in_order(YearType::Leap)[6]);
    /// ```
    pub fn in_order(year_type: YearType) -> &'static [Month] {
        match year_type {
            YearType::Common => &COMMON_YEAR,
            YearType::Leap => &LEAP_YEAR,
        }
    }

    /// Names the month with civil index `index`.
    ///
    /// Returns `None` if `index` is not in `1..=12` (`1..=13` for leap years).
    ///
    /// ```
    /// use luach::YearType;
    /// use luach::hebrew::Month;
    ///
    /// assert_eq!(Some(Month::Adar), Month::from_civil(12, YearType::Common));
    /// assert_eq!(Some(Month::AdarI), Month::from_civil(12, YearType::Leap));
    /// assert_eq!(None, Month::from_civil(13, YearType::Common));
    /// ```
    pub fn from_civil(index: u32, year_type: YearType) -> Option<Self> {
        let months = if year_type.is_leap() { 13 } else { 12 };
        (1..=months)
            .contains(&index)
            .then(|| civil_name(index, year_type))
    }

    /// Civil index of the month, or `None` if the month does not occur in
    /// years of `year_type`.
    pub fn civil(self, year_type: YearType) -> Option<u32> {
        match (self, year_type) {
            (Adar, YearType::Leap) | (AdarI | AdarII, YearType::Common) => None,
            _ => Some(self.civil_index()),
        }
    }

    /// One-based position of the month counted from Tishri, or `None` if the
    /// month does not occur in years of `year_type`.
    ///
    /// ```
    /// use luach::YearType;
    /// use luach::hebrew::Month;
    ///
    /// assert_eq!(Some(1), Month::Tishri.ordinal(YearType::Common));
    /// assert_eq!(Some(7), Month::Nisan.ordinal(YearType::Common));
    /// assert_eq!(Some(8), Month::Nisan.ordinal(YearType::Leap));
    /// ```
    pub fn ordinal(self, year_type: YearType) -> Option<u32> {
        Month::in_order(year_type)
            .iter()
            .position(|&m| m == self)
            .map(|i| i as u32 + 1)
    }

    /// Returns `true` for the months of the leap-year-only pair.
    pub fn is_leap(&self) -> bool {
        matches!(self, AdarI | AdarII)
    }

    /// Name of the month in `language`.
    pub fn name(&self, language: fmt::Language) -> &'static str {
        fmt::month(*self, language)
    }

    fn civil_index(self) -> u32 {
        match self {
            Nisan => 1,
            Iyyar => 2,
            Sivan => 3,
            Tammuz => 4,
            Av => 5,
            Elul => 6,
            Tishri => 7,
            Cheshvan => 8,
            Kislev => 9,
            Tevet => 10,
            Shevat => 11,
            Adar | AdarI => 12,
            AdarII => 13,
        }
    }
}

fn civil_name(index: u32, year_type: YearType) -> Month {
    match index {
        1 => Nisan,
        2 => Iyyar,
        3 => Sivan,
        4 => Tammuz,
        5 => Av,
        6 => Elul,
        7 => Tishri,
        8 => Cheshvan,
        9 => Kislev,
        10 => Tevet,
        11 => Shevat,
        12 if year_type.is_leap() => AdarI,
        12 => Adar,
        _ => AdarII,
    }
}

impl std_fmt::Display for Month {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(self.name(fmt::Language::English))
    }
}

/// Month name not recognized by [`Month::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown month name {0:?}")]
pub struct UnknownMonth(pub String);

impl FromStr for Month {
    type Err = UnknownMonth;

    /// Parses an English transliteration (case, spaces and dashes ignored,
    /// common spelling variants accepted) or a Hebrew month name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(&month) = LEAP_YEAR
            .iter()
            .chain([&Adar])
            .find(|m| m.name(fmt::Language::Hebrew) == s.trim())
        {
            return Ok(month);
        }
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_' | '\''))
            .collect::<String>()
            .to_lowercase();
        Ok(match key.as_str() {
            "tishri" | "tishrei" => Tishri,
            "cheshvan" | "heshvan" | "marcheshvan" | "chesvan" => Cheshvan,
            "kislev" => Kislev,
            "tevet" | "teves" => Tevet,
            "shevat" | "shvat" => Shevat,
            "adar" => Adar,
            "adari" | "adar1" => AdarI,
            "adarii" | "adar2" => AdarII,
            "nisan" | "nissan" => Nisan,
            "iyyar" | "iyar" => Iyyar,
            "sivan" => Sivan,
            "tammuz" | "tamuz" => Tammuz,
            "av" => Av,
            "elul" => Elul,
            _ => return Err(UnknownMonth(s.to_owned())),
        })
    }
}

/// A date in the Hebrew calendar.
///
/// Always holds a valid date: the month exists in the year and the day exists
/// in the month.
///
/// # Example
///
/// ```
/// use luach::hebrew::{HebrewDate, Month};
/// use luach::Date;
///
/// let date = HebrewDate::from_date(Date::from_gregorian(2024, 3, 24).unwrap()).unwrap();
/// assert_eq!((5784, 13, 14), (date.year(), date.month(), date.day()));
/// assert_eq!(Month::AdarII, date.month_name());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct HebrewDate {
    year: i32,
    month: u32,
    day: u32,
}

impl HebrewDate {
    /// Creates a date from a year, a civil month index and a day.
    ///
    /// Returns [`Error::InvalidDate`] unless `year` is in `1..=MAX_YEAR`,
    /// `month` exists in `year` and `day` exists in `month`.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        if !(1..=MAX_YEAR).contains(&year)
            || !(1..=molad::months_in_year(year)).contains(&month)
            || !(1..=molad::month_length(year, month)).contains(&day)
        {
            return Err(Error::InvalidDate {
                calendar: Calendar::Hebrew,
                year,
                month,
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Converts a date into the Hebrew calendar.
    ///
    /// Returns [`Error::OutOfRange`] for dates before 1 Tishrei AM 1 or after
    /// the end of [`MAX_YEAR`].
    pub fn from_date(date: Date) -> Result<Self, Error> {
        let jdn = i64::from(date.jdn());
        if jdn < molad::new_year(1) || jdn >= molad::new_year(MAX_YEAR + 1) {
            return Err(Error::OutOfRange { jdn: date.jdn() });
        }
        let (year, month, day) = jdn_to_hebrew(jdn);
        Ok(Self { year, month, day })
    }

    /// Converts the date into a calendar-independant [`Date`].
    pub fn to_date(&self) -> Date {
        // years are capped at MAX_YEAR, far below u32::MAX days
        Date::from_jdn(hebrew_to_jdn(self.year, self.month, self.day) as u32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    /// Civil month index, Nisan = 1.
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether the year of this date is a leap year.
    pub fn year_type(&self) -> YearType {
        YearType::from_hebrew(self.year)
    }

    /// Name of the month, with Adar resolved into Adar I in leap years.
    pub fn month_name(&self) -> Month {
        civil_name(self.month, self.year_type())
    }

    /// One-based position of the month in the year, Tishri = 1.
    pub fn ordinal(&self) -> u32 {
        let year_type = self.year_type();
        self.month_name().ordinal(year_type).unwrap_or(0)
    }
}

impl From<HebrewDate> for Date {
    fn from(date: HebrewDate) -> Date {
        date.to_date()
    }
}

impl std_fmt::Display for HebrewDate {
    /// Formats as `30 Av 5784`.
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(&fmt::format_with(self, true, &fmt::Style::latin()))
    }
}

/// Converts a Gregorian date into the Hebrew calendar.
///
/// # Example
///
/// ```
/// use luach::hebrew::{to_jewish_date, Month};
///
/// let date = to_jewish_date(2024, 9, 3).unwrap();
/// assert_eq!(5784, date.year());
/// assert_eq!(Month::Av, date.month_name());
/// assert_eq!(30, date.day());
/// ```
pub fn to_jewish_date(year: i32, month: u32, day: u32) -> Result<HebrewDate, Error> {
    HebrewDate::from_date(Date::from_gregorian(year, month, day)?)
}

/// Converts a Hebrew date into a Julian day number.
///
/// `month` is a civil index. Like [`gregorian_to_jdn`](crate::date::gregorian_to_jdn)
/// this does not validate its input; see [`HebrewDate::new`].
pub fn hebrew_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let preceding: u32 = if month < 7 {
        (7..=molad::months_in_year(year))
            .chain(1..month)
            .map(|m| molad::month_length(year, m))
            .sum()
    } else {
        (7..month).map(|m| molad::month_length(year, m)).sum()
    };
    molad::new_year(year) + i64::from(preceding) + i64::from(day) - 1
}

/// Converts a Julian day number into a Hebrew date, in
/// `(year, civil month, day)` format.
///
/// Defined for days from 1 Tishrei AM 1 (JDN 347998) onwards.
pub fn jdn_to_hebrew(jdn: i64) -> (i32, u32, u32) {
    // mean year of 35975351 / 98496 days
    let estimate = ((jdn - molad::HEBREW_EPOCH) * 98_496).div_euclid(35_975_351) - 1;
    let mut year = estimate as i32;
    while jdn < molad::new_year(year) {
        year -= 1;
    }
    while jdn >= molad::new_year(year + 1) {
        year += 1;
    }
    trace!(jdn, estimate, year, "resolved year");

    let mut month = if jdn < hebrew_to_jdn(year, 1, 1) { 7 } else { 1 };
    while jdn > hebrew_to_jdn(year, month, molad::month_length(year, month)) {
        month += 1;
    }
    let day = jdn - hebrew_to_jdn(year, month, 1) + 1;
    (year, month, day as u32)
}

/// A Hebrew year with the first day of each of its months.
///
/// # Example
///
/// ```
/// use luach::Date;
/// use luach::hebrew::{Month, Year};
///
/// let year = Year::new(5785).unwrap();
/// assert_eq!(355, year.days());
///
/// let date = Date::from_gregorian(2025, 3, 14).unwrap();
/// assert_eq!(Ok((5785, Month::Adar, 14)), year.ymd_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct Year {
    pub year: i32,
    pub year_type: YearType,
    pub kind: YearKind,
    /// All month starts from Tishri to Elul, followed by 1 Tishrei of the next
    /// year to mark the end of this one.
    pub months: Vec<MonthStart>,
}

/// First day of a month.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MonthStart {
    pub month: Month,
    pub date: Date,
}

/// Indicates that a date is not in the year, and on which side of it it
/// lies.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

impl Year {
    /// Builds the month table of `year`.
    ///
    /// Returns [`Error::InvalidDate`] (for 1 Tishrei of `year`) unless `year`
    /// is in `1..=MAX_YEAR`.
    #[tracing::instrument(level = "debug")]
    pub fn new(year: i32) -> Result<Self, Error> {
        let first = HebrewDate::new(year, 7, 1)?.to_date();
        let year_type = YearType::from_hebrew(year);

        let mut date = first;
        let mut months = Vec::with_capacity(14);
        for &month in Month::in_order(year_type) {
            months.push(MonthStart { month, date });
            date = date + molad::month_length(year, month.civil_index()) as i32;
        }
        months.push(MonthStart {
            month: Tishri,
            date,
        });

        Ok(Self {
            year,
            year_type,
            kind: YearKind::from_year(year),
            months,
        })
    }

    /// Finds the year a date falls in.
    ///
    /// Returns [`Error::OutOfRange`] if the date has no Hebrew year.
    pub fn from_date(date: Date) -> Result<Self, Error> {
        Self::new(HebrewDate::from_date(date)?.year())
    }

    /// Number of days in the year.
    pub fn days(&self) -> u32 {
        match (self.months.first(), self.months.last()) {
            (Some(first), Some(last)) => (last.date - first.date) as u32,
            _ => 0,
        }
    }

    /// Returns the `(year, month, day)` of `date` within this year.
    ///
    /// If the date is not in this year, returns `Err` telling whether it lies
    /// before or after.
    pub fn ymd_for(&self, date: Date) -> Result<(i32, Month, u32), OtherYear> {
        let Some(end) = self.months.last() else {
            return Err(OtherYear::After);
        };
        if date >= end.date {
            return Err(OtherYear::After);
        }
        let Some(m) = self.months.iter().rev().find(|m| m.date <= date) else {
            return Err(OtherYear::Before);
        };
        Ok((self.year, m.month, (date - m.date + 1) as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd_of(y: i32, m: u32, d: u32) -> (i32, u32, u32) {
        let date = to_jewish_date(y, m, d).unwrap();
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn from_gregorian() {
        let dataset = [
            ((2024, 9, 3), (5784, 5, 30)),
            ((2024, 9, 4), (5784, 6, 1)),
            ((2024, 10, 2), (5784, 6, 29)),
            ((2024, 10, 3), (5785, 7, 1)),
            ((2023, 9, 16), (5784, 7, 1)),
            ((2024, 3, 11), (5784, 13, 1)),
            ((2024, 3, 24), (5784, 13, 14)),
            ((2024, 4, 9), (5784, 1, 1)),
            ((2025, 3, 14), (5785, 12, 14)),
            ((2000, 1, 1), (5760, 10, 23)),
            ((1970, 1, 1), (5730, 10, 23)),
            ((2026, 10, 16), (5787, 8, 5)),
            ((1, 1, 1), (3761, 10, 18)),
        ];
        for ((y, m, d), std) in dataset {
            assert_eq!(std, ymd_of(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn to_gregorian() {
        for ((y, m, d), std) in [
            ((5784, 1, 15), "2024-04-23"),
            ((5784, 8, 29), "2023-11-13"),
            ((5785, 7, 1), "2024-10-03"),
            ((1, 7, 1), "-3760-09-07"),
        ] {
            let date = HebrewDate::new(y, m, d).unwrap();
            assert_eq!(std, date.to_date().iso_gregorian(), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn epoch() {
        assert_eq!(347998, hebrew_to_jdn(1, 7, 1));
        assert_eq!((1, 7, 1), jdn_to_hebrew(347998));
        assert_eq!(
            Err(Error::OutOfRange { jdn: 347997 }),
            HebrewDate::from_date(Date::from_jdn(347997))
        );
    }

    #[test]
    fn rejects_invalid_dates() {
        for (y, m, d) in [
            (5785, 13, 1),
            (5784, 8, 30),
            (5784, 14, 1),
            (5784, 0, 1),
            (5784, 1, 0),
            (5784, 1, 31),
            (0, 7, 1),
            (MAX_YEAR + 1, 7, 1),
        ] {
            assert_eq!(
                Err(Error::InvalidDate {
                    calendar: Calendar::Hebrew,
                    year: y,
                    month: m,
                    day: d,
                }),
                HebrewDate::new(y, m, d),
                "{y}-{m}-{d}"
            );
        }
        assert!(HebrewDate::new(5785, 8, 30).is_ok());
    }

    #[test]
    fn month_names() {
        for ((y, m), std, ordinal) in [
            ((5784, 7), Tishri, 1),
            ((5784, 12), AdarI, 6),
            ((5784, 13), AdarII, 7),
            ((5784, 1), Nisan, 8),
            ((5784, 6), Elul, 13),
            ((5785, 12), Adar, 6),
            ((5785, 1), Nisan, 7),
            ((5785, 6), Elul, 12),
        ] {
            let date = HebrewDate::new(y, m, 1).unwrap();
            assert_eq!((std, ordinal), (date.month_name(), date.ordinal()), "{y}-{m}");
        }
    }

    #[test]
    fn civil_and_religious_order_agree() {
        for year_type in [YearType::Common, YearType::Leap] {
            for (i, &month) in Month::in_order(year_type).iter().enumerate() {
                let civil = month.civil(year_type).unwrap();
                assert_eq!(Some(month), Month::from_civil(civil, year_type));
                assert_eq!(Some(i as u32 + 1), month.ordinal(year_type));
            }
        }
        assert_eq!(None, Adar.civil(YearType::Leap));
        assert_eq!(None, AdarII.civil(YearType::Common));
        assert_eq!(None, Month::from_civil(0, YearType::Leap));
        assert_eq!(None, AdarII.ordinal(YearType::Common));
    }

    #[test]
    fn parse_month_names() {
        for (text, std) in [
            ("Tishrei", Tishri),
            ("marcheshvan", Cheshvan),
            ("Adar II", AdarII),
            ("adar1", AdarI),
            ("Iyar", Iyyar),
            ("אדר ב", AdarII),
            ("אדר", Adar),
            ("ניסן", Nisan),
        ] {
            assert_eq!(Ok(std), text.parse::<Month>(), "{text}");
        }
        assert_eq!(
            Err(UnknownMonth("Brumaire".to_owned())),
            "Brumaire".parse::<Month>()
        );
    }

    #[test]
    fn months() {
        let year = Year::new(5784).unwrap();
        let stds = [
            (Tishri, "2023-09-16"),
            (Cheshvan, "2023-10-16"),
            (Kislev, "2023-11-14"),
            (Tevet, "2023-12-13"),
            (Shevat, "2024-01-11"),
            (AdarI, "2024-02-10"),
            (AdarII, "2024-03-11"),
            (Nisan, "2024-04-09"),
            (Iyyar, "2024-05-09"),
            (Sivan, "2024-06-07"),
            (Tammuz, "2024-07-07"),
            (Av, "2024-08-05"),
            (Elul, "2024-09-04"),
            (Tishri, "2024-10-03"),
        ];
        assert_eq!(stds.len(), year.months.len());
        for (std, month) in stds.iter().zip(&year.months) {
            assert_eq!(
                (std.0, std.1.to_owned()),
                (month.month, month.date.iso_gregorian())
            );
        }
        assert_eq!(383, year.days());
        assert_eq!(YearKind::Deficient, year.kind);
        assert_eq!(YearType::Leap, year.year_type);
    }

    #[test]
    fn dates() {
        use OtherYear::*;
        let data = [
            ((2024, 10, 3), Ok((5785, Tishri, 1))),
            ((2025, 2, 28), Ok((5785, Shevat, 30))),
            ((2025, 3, 1), Ok((5785, Adar, 1))),
            ((2025, 9, 22), Ok((5785, Elul, 29))),
            ((2024, 10, 2), Err(Before)),
            ((2025, 9, 23), Err(After)),
        ];
        let year = Year::new(5785).unwrap();
        for ((y, m, d), std) in data {
            assert_eq!(std, year.ymd_for(Date::from_gregorian(y, m, d).unwrap()));
        }
    }

    #[test]
    fn year_from_date() {
        for (std, (y, m, d)) in [
            (5784, (2024, 10, 2)),
            (5785, (2024, 10, 3)),
            (5785, (2025, 9, 22)),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(std, Year::from_date(date).unwrap().year);
        }
    }

    #[test]
    fn display() {
        assert_eq!("30 Av 5784", to_jewish_date(2024, 9, 3).unwrap().to_string());
        assert_eq!("1 Adar II 5784", to_jewish_date(2024, 3, 11).unwrap().to_string());
    }
}
