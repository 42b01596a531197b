//! Error types.

use std::fmt;

/// The calendar a rejected date was given in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Calendar {
    Gregorian,
    Hebrew,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Calendar::Gregorian => "Gregorian",
            Calendar::Hebrew => "Hebrew",
        })
    }
}

/// Error type for all fallible operations of this crate.
///
/// The arithmetic functions in [`date`](crate::date) and
/// [`hebrew`](crate::hebrew) never fail; these errors come from the validating
/// constructors and from the numeral parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Month or day outside the range of the calendar for that year, or a
    /// year the calendar cannot represent.
    #[error("invalid {calendar} date: year {year}, month {month}, day {day}")]
    InvalidDate {
        calendar: Calendar,
        year: i32,
        month: u32,
        day: u32,
    },

    /// The date lies outside the supported range of the Hebrew calendar
    /// (before 1 Tishrei AM 1 or past [`MAX_YEAR`](crate::hebrew::MAX_YEAR)).
    #[error("julian day number {jdn} is outside the supported Hebrew calendar range")]
    OutOfRange { jdn: u32 },

    /// A character with no numeric value was found while parsing a numeral.
    #[error("malformed numeral {text:?}: unrecognized character {ch:?} at position {position}")]
    MalformedNumeral {
        /// The whole text being parsed.
        text: String,
        /// The offending character.
        ch: char,
        /// Character (not byte) offset of `ch` in `text`.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message() {
        let err = Error::InvalidDate {
            calendar: Calendar::Gregorian,
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(
            err.to_string(),
            "invalid Gregorian date: year 2023, month 2, day 29"
        );
    }

    #[test]
    fn malformed_numeral_message() {
        let err = Error::MalformedNumeral {
            text: "תשפx".to_owned(),
            ch: 'x',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed numeral \"תשפx\": unrecognized character 'x' at position 3"
        );
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<Error>();
    }
}
