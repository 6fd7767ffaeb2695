use chrono::NaiveDate;

use crate::date_range::DateRange;
use crate::error::RangeError;
use crate::period::{Period, Periods};

/// Default accepted input date formats (parsing only): the ISO value of an
/// HTML date input first, then the day-first form people type by hand.
pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// A slice of `chrono` format strings to try, in order.
    pub formats: Option<&'a [&'a str]>,
}

/// What a single token on the command line or in a query resolved to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RangeToken {
    Period(Period),
    Date(NaiveDate),
}

/// Parses a date typed by a person or sent by a date input.
///
/// Surrounding whitespace is ignored and blank input yields `Ok(None)`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use rango_core::parse_input::parse_date_input;
/// let iso = parse_date_input("2024-03-01", None).unwrap();
/// let by_hand = parse_date_input(" 01/03/2024 ", None).unwrap();
///
/// assert_eq!(iso, NaiveDate::from_ymd_opt(2024, 3, 1));
/// assert_eq!(iso, by_hand);
/// assert_eq!(parse_date_input("   ", None).unwrap(), None);
/// ```
pub fn parse_date_input(
    input: &str,
    options: Option<ParseOptions>,
) -> Result<Option<NaiveDate>, RangeError> {
    let formats = options.unwrap_or_default().formats.unwrap_or(DEFAULT_FORMATS);
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
        .map(Some)
        .ok_or_else(|| RangeError::InvalidDate {
            input: input.to_string(),
            formats: formats.join(", "),
        })
}

/// Resolves a token to a period (name or synonym) or, failing that, a date.
pub fn parse_token(input: &str, options: Option<ParseOptions>) -> Result<RangeToken, RangeError> {
    if let Some(period) = Periods::find(input) {
        return Ok(RangeToken::Period(period));
    }
    match parse_date_input(input, options) {
        Ok(Some(date)) => Ok(RangeToken::Date(date)),
        Ok(None) => Err(RangeError::UnknownPeriod(input.to_string())),
        Err(RangeError::InvalidDate { .. }) if !looks_like_date(input) => {
            Err(RangeError::UnknownPeriod(input.trim().to_string()))
        }
        Err(e) => Err(e),
    }
}

fn looks_like_date(input: &str) -> bool {
    input.trim().starts_with(|c: char| c.is_ascii_digit())
}

/// What a user asked for: a named period, or a range picked by hand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Selection {
    Period(Period),
    Custom(DateRange),
}

impl Selection {
    pub fn label(&self) -> String {
        match self {
            Selection::Period(period) => period.to_string(),
            Selection::Custom(_) => "custom".to_string(),
        }
    }
}

/// Turns one or two tokens into a selection relative to `today`.
///
/// - A period (`week`, `mes`, ...) on its own is kept as that period.
/// - A single date is a one-day range.
/// - A date followed by a date is a custom range; an end before the start
///   is an error.
/// - A date followed by a period ends where that period ends around
///   `today`, so `end = "today"` gives an open range up to today.
/// - A period cannot start a two-token range.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use rango_core::{Period, parse_input::{Selection, parse_selection}};
/// let today = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
///
/// let quarter = parse_selection("trimestre", None, today, None).unwrap();
/// assert_eq!(quarter, Selection::Period(Period::Quarter));
///
/// let Selection::Custom(custom) = parse_selection("01/10/2024", Some("2024-10-15"), today, None).unwrap() else {
///     panic!("two dates make a custom range");
/// };
/// assert_eq!(custom.to_string(), "2024-10-01..2024-10-15");
///
/// let Selection::Custom(open) = parse_selection("2024-10-01", Some("today"), today, None).unwrap() else {
///     panic!("a date and a period make a custom range");
/// };
/// assert_eq!(open.to_string(), "2024-10-01..2024-11-05");
/// ```
pub fn parse_selection(
    start: &str,
    end: Option<&str>,
    today: NaiveDate,
    options: Option<ParseOptions>,
) -> Result<Selection, RangeError> {
    let first = parse_token(start, options)?;
    let second = end.map(|e| parse_token(e, options)).transpose()?;

    match (first, second) {
        (RangeToken::Period(period), None) => Ok(Selection::Period(period)),
        (RangeToken::Date(date), None) => Ok(Selection::Custom(DateRange::single(date))),
        (RangeToken::Date(s), Some(RangeToken::Date(e))) => Ok(Selection::Custom(DateRange::new(s, e)?)),
        (RangeToken::Date(s), Some(RangeToken::Period(period))) => {
            let e = period.range_on(today)?.end();
            Ok(Selection::Custom(DateRange::new(s, e)?))
        }
        (RangeToken::Period(_), Some(_)) => Err(RangeError::InvalidDate {
            input: start.trim().to_string(),
            formats: options
                .unwrap_or_default()
                .formats
                .unwrap_or(DEFAULT_FORMATS)
                .join(", "),
        }),
    }
}
