//! Formatting of Hebrew dates.

use serde::{Deserialize, Serialize};

use super::{HebrewDate, Month};
use crate::gematriya;

/// Language of month names.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Hebrew script, e.g. "אדר ב".
    #[default]
    Hebrew,
    /// English transliteration, e.g. "Adar II".
    English,
}

/// How day and year numbers are written.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numerals {
    /// Hebrew letters (gematriya); the year is shown without its thousands.
    #[default]
    Hebrew,
    /// Decimal digits; the year is shown in full.
    Arabic,
}

/// Options for [`format_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub language: Language,
    pub numerals: Numerals,
    /// Used when `numerals` is [`Numerals::Hebrew`].
    pub gematriya: gematriya::Options,
}

impl Style {
    /// English month names with decimal numbers, e.g. "30 Av 5784".
    pub fn latin() -> Self {
        Self {
            language: Language::English,
            numerals: Numerals::Arabic,
            ..Self::default()
        }
    }
}

/// Name of a month.
///
/// # Example
///
/// ```
/// use luach::hebrew::{fmt, Month};
///
/// assert_eq!("אדר ב", fmt::month(Month::AdarII, fmt::Language::Hebrew));
/// assert_eq!("Adar II", fmt::month(Month::AdarII, fmt::Language::English));
/// ```
pub fn month(m: Month, language: Language) -> &'static str {
    use Month::*;
    match language {
        Language::Hebrew => match m {
            Tishri => "תשרי",
            Cheshvan => "חשון",
            Kislev => "כסלו",
            Tevet => "טבת",
            Shevat => "שבט",
            Adar => "אדר",
            AdarI => "אדר א",
            AdarII => "אדר ב",
            Nisan => "ניסן",
            Iyyar => "אייר",
            Sivan => "סיון",
            Tammuz => "תמוז",
            Av => "אב",
            Elul => "אלול",
        },
        Language::English => match m {
            Tishri => "Tishri",
            Cheshvan => "Cheshvan",
            Kislev => "Kislev",
            Tevet => "Tevet",
            Shevat => "Shevat",
            Adar => "Adar",
            AdarI => "Adar I",
            AdarII => "Adar II",
            Nisan => "Nisan",
            Iyyar => "Iyyar",
            Sivan => "Sivan",
            Tammuz => "Tammuz",
            Av => "Av",
            Elul => "Elul",
        },
    }
}

/// Day of month.
///
/// ```
/// use luach::hebrew::fmt::{self, Style};
///
/// assert_eq!("ט״ו", fmt::day(15, &Style::default()));
/// assert_eq!("15", fmt::day(15, &Style::latin()));
/// ```
pub fn day(d: u32, style: &Style) -> String {
    match style.numerals {
        Numerals::Hebrew => gematriya::format(d, &style.gematriya),
        Numerals::Arabic => d.to_string(),
    }
}

/// Year number. In Hebrew numerals the thousands are dropped, as is
/// customary: 5784 is written תשפ״ד.
pub fn year(y: i32, style: &Style) -> String {
    match style.numerals {
        Numerals::Hebrew => gematriya::format(y.rem_euclid(1000) as u32, &style.gematriya),
        Numerals::Arabic => y.to_string(),
    }
}

/// Formats a date as day, month and (optionally) year separated by spaces,
/// in Hebrew letters.
///
/// # Example
///
/// ```
/// use luach::hebrew::{fmt, to_jewish_date};
///
/// let date = to_jewish_date(2024, 9, 3).unwrap();
/// assert_eq!("ל׳ אב תשפ״ד", fmt::format_hebrew_date(&date, true));
/// assert_eq!("ל׳ אב", fmt::format_hebrew_date(&date, false));
/// ```
pub fn format_hebrew_date(date: &HebrewDate, include_year: bool) -> String {
    format_with(date, include_year, &Style::default())
}

/// Formats a date as day, month and (optionally) year separated by spaces.
pub fn format_with(date: &HebrewDate, include_year: bool, style: &Style) -> String {
    let mut rt = day(date.day(), style);
    rt += " ";
    rt += month(date.month_name(), style.language);
    if include_year {
        rt += " ";
        rt += &year(date.year(), style);
    }
    rt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hebrew::to_jewish_date;

    #[test]
    fn test_format() {
        let dataset = [
            ((2024, 9, 3), "ל׳ אב תשפ״ד"),
            ((2024, 3, 24), "י״ד אדר ב תשפ״ד"),
            ((2025, 3, 14), "י״ד אדר תשפ״ה"),
            ((2024, 10, 3), "א׳ תשרי תשפ״ה"),
            ((2024, 4, 23), "ט״ו ניסן תשפ״ד"),
        ];
        for ((y, m, d), std) in dataset {
            let date = to_jewish_date(y, m, d).unwrap();
            assert_eq!(std, format_hebrew_date(&date, true), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_format_styles() {
        let date = to_jewish_date(2024, 2, 10).unwrap();
        assert_eq!("1 Adar I 5784", format_with(&date, true, &Style::latin()));
        assert_eq!("1 Adar I", format_with(&date, false, &Style::latin()));

        let style = Style {
            language: Language::Hebrew,
            numerals: Numerals::Hebrew,
            gematriya: gematriya::Options {
                geresh: false,
                ..Default::default()
            },
        };
        assert_eq!("א' אדר א תשפ\"ד", format_with(&date, true, &style));
    }

    #[test]
    fn test_year() {
        let style = Style::default();
        for (std, y) in [("תשפ״ד", 5784), ("ת״ש", 5700), ("ט״ו", 5015)] {
            assert_eq!(std, year(y, &style), "{y}");
        }
        assert_eq!("5784", year(5784, &Style::latin()));
    }
}
