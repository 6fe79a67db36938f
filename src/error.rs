use crate::prelude::*;

/// Which field of a `(year, month, day)` triple failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidDateReason {
    #[display(fmt = "year out of range")]
    YearOutOfRange,
    #[display(fmt = "month out of range")]
    MonthOutOfRange,
    /// Also covers February 29th on a common year and the skipped
    /// days of October 1582.
    #[display(fmt = "day out of range")]
    DayOutOfRange,
}

/// A `(year, month, day)` triple that is neither a real date nor the null date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Invalid date {year:04}-{month:02}-{day:02}: {reason}")]
pub struct InvalidDate {
    pub year:   i32,
    pub month:  i32,
    pub day:    i32,
    pub reason: InvalidDateReason,
}

impl InvalidDate {
    pub(crate) const fn new(year: i32, month: i32, day: i32, reason: InvalidDateReason) -> Self {
        Self {
            year,
            month,
            day,
            reason,
        }
    }

    /// Returns the reason tag of this error
    pub const fn reason(&self) -> InvalidDateReason {
        self.reason
    }
}

/// Error type for parsing an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input is not three numeric components separated by `-`.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,

    /// The components parsed but do not name a date.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}
