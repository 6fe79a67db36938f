//! Conversion between `(year, month, day)` and milliseconds since
//! 1970-01-01T00:00:00Z.
//!
//! Dates up to 1582-10-25 go through a hybrid Julian/Gregorian day number
//! (Julian before 1582-10-15, Gregorian from it). Later dates use a
//! March-based proleptic Gregorian day count. Both paths agree at
//! 1582-10-26, the first day of the arithmetic path.

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::consts::{
    CUTOVER_EPOCH_MILLIS, DAYS_0_TO_1970, DAYS_PER_100_CYCLE, DAYS_PER_400_CYCLE,
    DAYS_PER_4_CYCLE, DAYS_PER_YEAR, GREGORIAN_CUTOVER_DAY, GREGORIAN_CUTOVER_MONTH,
    GREGORIAN_CUTOVER_YEAR, GREGORIAN_START_JDN, MARCH, MARCH_SHIFT_DAYS, MILLIS_PER_DAY,
    UNIX_EPOCH_JDN,
};
use crate::validate::is_leap_year;

/// Day of October 1582 on which the Gregorian calendar took effect.
const GREGORIAN_FIRST_DAY: u8 = 15;

/// Which encode/decode algorithm applies to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Up to and including 1582-10-25: calendar-table path.
    Cutover,
    /// 1582-10-26 onward: pure arithmetic path.
    Modern,
}

impl Era {
    pub const fn of_fields(year: i32, month: u8, day: u8) -> Self {
        if year < GREGORIAN_CUTOVER_YEAR
            || (year == GREGORIAN_CUTOVER_YEAR
                && (month < GREGORIAN_CUTOVER_MONTH
                    || (month == GREGORIAN_CUTOVER_MONTH && day <= GREGORIAN_CUTOVER_DAY)))
        {
            Self::Cutover
        } else {
            Self::Modern
        }
    }

    pub const fn of_epoch_millis(epoch_millis: i64) -> Self {
        if epoch_millis <= CUTOVER_EPOCH_MILLIS {
            Self::Cutover
        } else {
            Self::Modern
        }
    }
}

/// Encodes validated, non-null fields as epoch milliseconds.
///
/// The result is always a multiple of [`MILLIS_PER_DAY`]. Fields that do
/// not pass [`validate`](crate::validate()) produce an unspecified value.
pub fn fields_to_epoch(year: i32, month: u8, day: u8) -> i64 {
    let days = match Era::of_fields(year, month, day) {
        Era::Cutover => calendar_days_from_fields(year, month, day),
        Era::Modern => arithmetic_days_from_fields(year, month, day),
    };
    days * MILLIS_PER_DAY
}

/// Decodes epoch milliseconds into `(year, month, day)`.
///
/// Any time of day is dropped: the result is the UTC date containing
/// `epoch_millis`. No validation happens here, so years outside
/// `1..=MAX_YEAR` are returned as computed.
pub fn epoch_to_fields(epoch_millis: i64) -> (i32, u8, u8) {
    let days = epoch_millis.div_euclid(MILLIS_PER_DAY);
    match Era::of_epoch_millis(epoch_millis) {
        Era::Cutover => calendar_fields_from_days(days),
        Era::Modern => arithmetic_fields_from_days(days),
    }
}

const fn is_gregorian_side(year: i32, month: u8, day: u8) -> bool {
    year > GREGORIAN_CUTOVER_YEAR
        || (year == GREGORIAN_CUTOVER_YEAR
            && (month > GREGORIAN_CUTOVER_MONTH
                || (month == GREGORIAN_CUTOVER_MONTH && day >= GREGORIAN_FIRST_DAY)))
}

/// Days since 1970-01-01 via the Julian Day Number, switching from the
/// Julian to the Gregorian calendar on 1582-10-15.
fn calendar_days_from_fields(year: i32, month: u8, day: u8) -> i64 {
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;

    let base = i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4);
    let jdn = if is_gregorian_side(year, month, day) {
        base - y.div_euclid(100) + y.div_euclid(400) - 32_045
    } else {
        base - 32_083
    };
    jdn - UNIX_EPOCH_JDN
}

fn calendar_fields_from_days(days: i64) -> (i32, u8, u8) {
    let jdn = days + UNIX_EPOCH_JDN;

    // c: days since March 1st of a Julian-aligned 4-year cycle origin
    let (c, centuries) = if jdn >= GREGORIAN_START_JDN {
        let a = jdn + 32_044;
        let b = (4 * a + 3).div_euclid(DAYS_PER_400_CYCLE);
        (a - (DAYS_PER_400_CYCLE * b).div_euclid(4), 100 * b)
    } else {
        (jdn + 32_082, 0)
    };

    let d = (4 * c + 3).div_euclid(DAYS_PER_4_CYCLE);
    let e = c - (DAYS_PER_4_CYCLE * d).div_euclid(4);
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = centuries + d - 4800 + m / 10;
    (year as i32, month as u8, day as u8)
}

/// Days since 1970-01-01 counted from a computing year that starts on
/// March 1st, so the leap day is the last day of the year.
fn arithmetic_days_from_fields(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year);
    // January and February belong to the previous computing year
    let a = (14 - i64::from(month)) / 12;
    let adj_year = y - a;
    // leap days are counted on the calendar year; the 59/60 below compensates
    let year_days = DAYS_PER_YEAR * adj_year + (y / 4 - y / 100 + y / 400);

    let adj_month = i64::from(month) + 12 * a - 3; // March = 0, February = 11
    let month_days = (153 * adj_month + 2) / 5;

    let adj_days = i64::from(day) - 1
        + if is_leap_year(year) && month < MARCH {
            MARCH_SHIFT_DAYS - 1
        } else {
            MARCH_SHIFT_DAYS
        };

    year_days + month_days + adj_days - DAYS_0_TO_1970
}

fn arithmetic_fields_from_days(days: i64) -> (i32, u8, u8) {
    let total_days = days + DAYS_0_TO_1970 - MARCH_SHIFT_DAYS;

    let cycle400 = total_days.div_euclid(DAYS_PER_400_CYCLE);
    let rem400 = total_days - cycle400 * DAYS_PER_400_CYCLE;
    let cycle100 = (rem400 / DAYS_PER_100_CYCLE).min(3);
    let rem100 = rem400 - cycle100 * DAYS_PER_100_CYCLE;
    let cycle4 = rem100 / DAYS_PER_4_CYCLE;
    let rem4 = rem100 - cycle4 * DAYS_PER_4_CYCLE;
    let cycle1 = (rem4 / DAYS_PER_YEAR).min(3);
    let remainder = rem4 - cycle1 * DAYS_PER_YEAR;

    let computing_year = 400 * cycle400 + 100 * cycle100 + 4 * cycle4 + cycle1;
    let months = (5 * remainder + 2) / 153; // months since March 1st
    let day = remainder - (153 * months + 2) / 5 + 1;

    let year = computing_year + months / 10;
    let month = months + 3 - 12 * (months / 10);
    (year as i32, month as u8, day as u8)
}
