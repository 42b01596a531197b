//! Hebrew numerals (gematriya).
//!
//! Numbers are written digit by digit with letters for units, tens and
//! hundreds. Hundreds beyond 400 repeat ת (500 is תק, 900 is תתק). Digits
//! past the hundreds are written with the units letters again, so 5784 becomes
//! התשפ״ד. 15 and 16 are written טו and טז instead of spelling a divine name.
//!
//! # Example
//!
//! ```
//! use luach::gematriya::{self, Options};
//!
//! let options = Options::default();
//! assert_eq!("תשפ״ד", gematriya::format(784, &options));
//! assert_eq!(Ok(784), gematriya::parse("תשפ״ד", &options));
//! ```

use tracing::debug;

use crate::error::Error;

/// Hebrew punctuation mark following a single-letter numeral.
pub const GERESH: char = '\u{05F3}';
/// Hebrew punctuation mark before the last letter of a longer numeral.
pub const GERSHAYIM: char = '\u{05F4}';

const ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
const HUNDREDS: [&str; 10] = ["", "ק", "ר", "ש", "ת", "תק", "תר", "תש", "תת", "תתק"];
const THOUSAND: &str = "תתר";

const LETTERS: [(char, u32); 22] = [
    ('א', 1),
    ('ב', 2),
    ('ג', 3),
    ('ד', 4),
    ('ה', 5),
    ('ו', 6),
    ('ז', 7),
    ('ח', 8),
    ('ט', 9),
    ('י', 10),
    ('כ', 20),
    ('ל', 30),
    ('מ', 40),
    ('נ', 50),
    ('ס', 60),
    ('ע', 70),
    ('פ', 80),
    ('צ', 90),
    ('ק', 100),
    ('ר', 200),
    ('ש', 300),
    ('ת', 400),
];

/// Options for [`format`] and [`parse`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Options {
    /// Only write the lowest `limit` decimal digits. `None` or `Some(0)`
    /// writes them all.
    pub limit: Option<usize>,
    /// Add a punctuation mark, ASCII `'`/`"` unless `geresh` is set.
    pub punctuate: bool,
    /// Punctuate with the Hebrew geresh/gershayim. Implies punctuation.
    pub geresh: bool,
    /// When parsing, read a letter worth less than 100 that is followed by a
    /// larger letter as thousands (ה׳תשפ״ד is 5784).
    ///
    /// This is a heuristic: for text that is not a well-formed numeral the
    /// result is not meaningful.
    pub order: bool,
    /// When parsing, count unrecognized characters as zero instead of failing.
    pub lenient: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            limit: None,
            punctuate: true,
            geresh: true,
            order: false,
            lenient: false,
        }
    }
}

/// Writes `num` in Hebrew letters.
///
/// `0` is written as an empty string.
///
/// # Example
///
/// ```
/// use luach::gematriya::{self, Options};
///
/// assert_eq!("ט״ו", gematriya::format(15, &Options::default()));
/// assert_eq!("א׳", gematriya::format(1, &Options::default()));
///
/// let plain = Options { punctuate: false, geresh: false, ..Options::default() };
/// assert_eq!("תשפד", gematriya::format(784, &plain));
///
/// let limited = Options { limit: Some(3), ..Options::default() };
/// assert_eq!("תשפ״ד", gematriya::format(5784, &limited));
/// ```
pub fn format(num: u32, options: &Options) -> String {
    let limit = options.limit.filter(|&l| l > 0).unwrap_or(usize::MAX);
    let digits = num.to_string();
    let groups: Vec<&str> = digits
        .bytes()
        .rev()
        .take(limit)
        .zip(0..)
        .map(|(b, place)| digit_letters(u32::from(b - b'0'), place))
        .collect();
    let letters: String = groups.into_iter().rev().collect();
    let letters = letters.replace("יה", "טו").replace("יו", "טז");

    let mut rt: Vec<char> = letters.chars().collect();
    if options.punctuate || options.geresh {
        match rt.len() {
            0 => {}
            1 => rt.push(if options.geresh { GERESH } else { '\'' }),
            n => rt.insert(n - 1, if options.geresh { GERSHAYIM } else { '"' }),
        }
    }
    rt.into_iter().collect()
}

/// Letters for `digit` at decimal `place`. Values above 1000 wrap around to
/// the units, tens and hundreds letters again.
fn digit_letters(digit: u32, mut place: u32) -> &'static str {
    while u64::from(digit) * 10u64.pow(place) > 1000 {
        place -= 3;
    }
    let digit = digit as usize;
    match place {
        _ if digit == 0 => "",
        0 => ONES[digit],
        1 => TENS[digit],
        2 => HUNDREDS[digit],
        _ => THOUSAND,
    }
}

/// Reads a number written in Hebrew letters.
///
/// Punctuation (`'`, `"`, geresh and gershayim) is ignored. An empty text
/// reads as `0`.
///
/// Returns [`Error::MalformedNumeral`] on any other character that is not a
/// Hebrew letter with a numeric value, unless [`Options::lenient`] is set.
///
/// # Example
///
/// ```
/// use luach::gematriya::{self, Options};
///
/// assert_eq!(Ok(15), gematriya::parse("ט״ו", &Options::default()));
///
/// let ordered = Options { order: true, ..Options::default() };
/// assert_eq!(Ok(5784), gematriya::parse("ה׳תשפ״ד", &ordered));
///
/// assert!(gematriya::parse("12", &Options::default()).is_err());
/// ```
pub fn parse(text: &str, options: &Options) -> Result<u32, Error> {
    let chars: Vec<(usize, char)> = text
        .chars()
        .enumerate()
        .filter(|&(_, ch)| !matches!(ch, '\'' | '"' | GERESH | GERSHAYIM))
        .collect();

    let mut total: u32 = 0;
    let mut prev = None;
    for &(position, ch) in chars.iter().rev() {
        let value = match letter_value(ch) {
            Some(v) => v,
            None if options.lenient => {
                debug!(?ch, position, "unrecognized numeral character counted as zero");
                0
            }
            None => {
                return Err(Error::MalformedNumeral {
                    text: text.to_owned(),
                    ch,
                    position,
                });
            }
        };
        let thousands = options.order && value < 100 && prev.is_some_and(|p| value < p);
        total = total.saturating_add(if thousands { value * 1000 } else { value });
        prev = Some(value);
    }
    Ok(total)
}

fn letter_value(ch: char) -> Option<u32> {
    LETTERS.iter().find(|&&(c, _)| c == ch).map(|&(_, v)| v)
}
