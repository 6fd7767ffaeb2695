use chrono::NaiveDate;
use thiserror::Error;

use crate::period::Period;

/// Problems turning user input into a [`DateRange`](crate::DateRange).
#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("could not read '{input}' as a date (tried {formats})")]
    InvalidDate { input: String, formats: String },

    #[error("range starts on {start} but ends on {end}")]
    Inverted { start: NaiveDate, end: NaiveDate },

    #[error("'{0}' is not a known period")]
    UnknownPeriod(String),

    #[error("the {period} around {date} falls outside the supported calendar")]
    OutOfRange { period: Period, date: NaiveDate },
}

/// The surrounding document does not have what the binder writes to.
///
/// These are precondition failures: nothing is retried and a form is never
/// submitted after one of them.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("form has no field '{0}'")]
    MissingField(String),

    #[error("no form '{0}' to submit")]
    MissingForm(String),
}

/// Why a filter entry point did not submit.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Form(#[from] FormError),
}
