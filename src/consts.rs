/// Smallest valid year of a non-null date (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Largest valid year (inclusive), the range of a signed 16-bit year
pub const MAX_YEAR: i32 = i16::MAX as i32;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the first month of a computing year
pub const MARCH: u8 = 3;
/// Month number for October
pub const OCTOBER: u8 = 10;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// First year evaluated under the Gregorian leap rule.
pub const GREGORIAN_CUTOVER_YEAR: i32 = 1582;
/// Month of the Gregorian cutover (October).
pub const GREGORIAN_CUTOVER_MONTH: u8 = OCTOBER;
/// Last day of October 1582 still encoded by the calendar-table path.
pub const GREGORIAN_CUTOVER_DAY: u8 = 25;

/// 1582-10-05 through 1582-10-14 were skipped when the Gregorian calendar
/// took effect.
pub const CUTOVER_GAP_FIRST_DAY: u8 = 5;
/// Last skipped day of October 1582.
pub const CUTOVER_GAP_LAST_DAY: u8 = 14;

/// 1582-10-26T00:00:00Z in epoch milliseconds. Values at or below it are
/// decoded by the calendar-table path.
pub const CUTOVER_EPOCH_MILLIS: i64 = -12_218_342_400_000;

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Days in a 400 year Gregorian cycle
pub(crate) const DAYS_PER_400_CYCLE: i64 = 146_097;
/// Days in a 100 year cycle whose last year is not a leap year
pub(crate) const DAYS_PER_100_CYCLE: i64 = 36_524;
/// Days in a 4 year cycle
pub(crate) const DAYS_PER_4_CYCLE: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Day count from the 0000-03-01 computing epoch to 1970-01-01, plus the
/// 60 day March shift folded into the arithmetic encoder.
pub(crate) const DAYS_0_TO_1970: i64 = 719_528;
/// Offset that moves a day count from January 1st to March 1st of year 0.
pub(crate) const MARCH_SHIFT_DAYS: i64 = 60;

/// Julian Day Number of 1970-01-01
pub(crate) const UNIX_EPOCH_JDN: i64 = 2_440_588;
/// Julian Day Number of 1582-10-15, the first Gregorian day
pub(crate) const GREGORIAN_START_JDN: i64 = 2_299_161;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
