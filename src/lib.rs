//! A calendar date value type backed by milliseconds since
//! 1970-01-01T00:00:00Z.
//!
//! Dates follow the Julian calendar before 1582-10-15 and the Gregorian
//! calendar from then on, always in UTC. The ten days 1582-10-05 through
//! 1582-10-14 do not exist.
//!
//! ```
//! use simple_date::CalendarDate;
//!
//! let date = CalendarDate::from_fields(2000, 1, 1).unwrap();
//! assert_eq!(date.epoch_millis(), 946_684_800_000);
//! assert_eq!(date.to_string(), "2000-01-01");
//! ```

mod consts;
mod epoch;
mod error;
mod prelude;
mod validate;

pub use consts::*;
pub use epoch::{epoch_to_fields, fields_to_epoch, Era};
pub use error::{InvalidDate, InvalidDateReason, ParseError};
pub use validate::{days_in_month, is_leap_year, is_null_fields, validate};

use crate::prelude::*;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// An immutable `(year, month, day)` together with its epoch milliseconds.
///
/// The all-zero date is the *null* date. It encodes to `0` epoch
/// milliseconds, the same value as the real date 1970-01-01; only
/// [`is_null`](Self::is_null) tells them apart. Equality, ordering and
/// hashing all go by epoch milliseconds, so the two compare equal.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    year:         i32,
    month:        u8,
    day:          u8,
    epoch_millis: i64,
}

impl CalendarDate {
    /// The null date, `0000-00-00`.
    pub const NULL: Self = Self {
        year:         0,
        month:        0,
        day:          0,
        epoch_millis: 0,
    };

    /// Creates a date from its fields, validating them first.
    ///
    /// `(0, 0, 0)` yields the null date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the triple is neither null nor a real date,
    /// including February 29th of a common year and 1582-10-05..=14.
    pub fn from_fields(year: i32, month: i32, day: i32) -> Result<Self, InvalidDate> {
        validate(year, month, day).inspect_err(|_err| {
            #[cfg(feature = "log")]
            log::debug!("rejected calendar date ({year}, {month}, {day}): {_err}");
        })?;

        if is_null_fields(year, month, day) {
            return Ok(Self::NULL);
        }

        // validated: month in 1..=12, day in 1..=31
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (month, day) = (month as u8, day as u8);
        Ok(Self {
            year,
            month,
            day,
            epoch_millis: fields_to_epoch(year, month, day),
        })
    }

    /// Creates a date from epoch milliseconds without validating the
    /// decoded fields.
    ///
    /// Never produces the null date: `0` decodes to 1970-01-01. The time of
    /// day is discarded, so the stored value is UTC midnight of that date.
    pub fn from_epoch_millis(epoch_millis: i64) -> Self {
        let (year, month, day) = epoch_to_fields(epoch_millis);
        Self {
            year,
            month,
            day,
            epoch_millis: epoch_millis.div_euclid(MILLIS_PER_DAY) * MILLIS_PER_DAY,
        }
    }

    /// Like [`from_epoch_millis`](Self::from_epoch_millis), but rejects a
    /// decoded year outside `1..=MAX_YEAR`.
    ///
    /// # Errors
    /// Returns `InvalidDate` with `YearOutOfRange` when the instant lies
    /// outside the supported years.
    pub fn checked_from_epoch_millis(epoch_millis: i64) -> Result<Self, InvalidDate> {
        let date = Self::from_epoch_millis(epoch_millis);
        validate(date.year, i32::from(date.month), i32::from(date.day)).inspect_err(|_err| {
            #[cfg(feature = "log")]
            log::debug!("epoch millis {epoch_millis} outside supported dates: {_err}");
        })?;
        Ok(date)
    }

    /// Returns the year component (0 for the null date)
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component, 1-12 (0 for the null date)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day-of-month component (0 for the null date)
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Milliseconds since 1970-01-01T00:00:00Z; `0` for the null date.
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_millis
    }

    /// Returns true iff year, month and day are all zero.
    pub const fn is_null(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    /// ISO 8601 `yyyy-MM-dd`. Years past 9999 print with all their digits.
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }

    /// Orders two dates by epoch milliseconds.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.epoch_millis.cmp(&other.epoch_millis)
    }

    /// UTC midnight of this date, or `None` for the null date or when the
    /// platform cannot represent the instant.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.is_null() {
            return None;
        }
        let offset = Duration::from_millis(self.epoch_millis.unsigned_abs());
        if self.epoch_millis >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        }
    }

    /// Returns `(year, month, day)`
    pub const fn to_fields(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::NULL
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.epoch_millis == other.epoch_millis
    }
}

impl Eq for CalendarDate {}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch_millis.hash(state);
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. `0000-00-00` parses to the null date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let &[year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };
        let parse = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::InvalidFormat(trimmed.to_owned()));
            }
            part.parse::<i32>()
                .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))
        };

        Ok(Self::from_fields(parse(year)?, parse(month)?, parse(day)?)?)
    }
}

impl TryFrom<(i32, i32, i32)> for CalendarDate {
    type Error = InvalidDate;

    fn try_from((year, month, day): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::from_fields(year, month, day)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_fields()
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
