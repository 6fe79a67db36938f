use crate::consts::{
    CENTURY_CYCLE, CUTOVER_GAP_FIRST_DAY, CUTOVER_GAP_LAST_DAY, DAYS_IN_MONTH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CUTOVER_MONTH, GREGORIAN_CUTOVER_YEAR, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::error::{InvalidDate, InvalidDateReason};

/// Leap year rule of the hybrid Julian/Gregorian calendar.
///
/// Years from 1582 on follow the Gregorian rule, earlier years the Julian
/// rule (every fourth year). The encoder, decoder and validator all use
/// this one function.
pub const fn is_leap_year(year: i32) -> bool {
    if year % LEAP_YEAR_CYCLE != 0 {
        return false;
    }
    if year >= GREGORIAN_CUTOVER_YEAR {
        return year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0;
    }
    true
}

/// Length of `month` in `year`, or `None` if `month` is not in `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        return None;
    }
    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

/// `true` for the reserved all-zero triple.
pub const fn is_null_fields(year: i32, month: i32, day: i32) -> bool {
    year == 0 && month == 0 && day == 0
}

/// `true` for 1582-10-05 ..= 1582-10-14, the days dropped by the cutover.
pub(crate) const fn is_cutover_gap(year: i32, month: u8, day: u8) -> bool {
    year == GREGORIAN_CUTOVER_YEAR
        && month == GREGORIAN_CUTOVER_MONTH
        && day >= CUTOVER_GAP_FIRST_DAY
        && day <= CUTOVER_GAP_LAST_DAY
}

/// Checks that `(year, month, day)` is either the null date or a real date.
///
/// # Errors
/// Returns `InvalidDate` tagged with the first field found out of range,
/// checked in year, month, day order.
pub fn validate(year: i32, month: i32, day: i32) -> Result<(), InvalidDate> {
    if is_null_fields(year, month, day) {
        return Ok(());
    }
    let fail = |reason| Err(InvalidDate::new(year, month, day, reason));

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return fail(InvalidDateReason::YearOutOfRange);
    }
    let Ok(month_u8) = u8::try_from(month) else {
        return fail(InvalidDateReason::MonthOutOfRange);
    };
    let Some(month_len) = days_in_month(year, month_u8) else {
        return fail(InvalidDateReason::MonthOutOfRange);
    };
    let Ok(day_u8) = u8::try_from(day) else {
        return fail(InvalidDateReason::DayOutOfRange);
    };
    if day_u8 < MIN_DAY || day_u8 > month_len {
        return fail(InvalidDateReason::DayOutOfRange);
    }
    if is_cutover_gap(year, month_u8, day_u8) {
        return fail(InvalidDateReason::DayOutOfRange);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2015,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "Gregorian century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "Gregorian century divisible by 400",
            },
            TestCase {
                year:        1584,
                is_leap:     true,
                description: "first leap year after the cutover",
            },
            TestCase {
                year:        1582,
                is_leap:     false,
                description: "cutover year",
            },
            TestCase {
                year:        1580,
                is_leap:     true,
                description: "Julian year divisible by 4",
            },
            TestCase {
                year:        1300,
                is_leap:     true,
                description: "Julian century, every fourth year",
            },
            TestCase {
                year:        1200,
                is_leap:     true,
                description: "Julian century divisible by 400",
            },
            TestCase {
                year:        100,
                is_leap:     true,
                description: "Julian century",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2015, 2), Some(28));
        assert_eq!(days_in_month(2012, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(1300, 2), Some(29));
    }

    #[test]
    fn test_days_in_month_out_of_range_month() {
        assert_eq!(days_in_month(2015, 0), None);
        assert_eq!(days_in_month(2015, 13), None);
        assert_eq!(days_in_month(2015, u8::MAX), None);
    }

    #[test]
    fn test_days_in_month_fixed_lengths() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2015, month),
                Some(expected[month as usize]),
                "Month {month} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_is_null_fields() {
        let cases = [
            ((0, 0, 0), true),
            ((0, 0, 1), false),
            ((0, 1, 0), false),
            ((1, 0, 0), false),
            ((0, 1, 1), false),
            ((1, 0, 1), false),
            ((1, 1, 0), false),
            ((1, 1, 1), false),
        ];
        for ((y, m, d), expected) in cases {
            assert_eq!(is_null_fields(y, m, d), expected, "({y}, {m}, {d})");
        }
    }

    #[test]
    fn test_validate_accepts() {
        for (y, m, d) in [
            (0, 0, 0),
            (1, 1, 1),
            (32767, 12, 31),
            (2012, 2, 29),
            (1300, 2, 29),
            (1582, 10, 4),
            (1582, 10, 15),
        ] {
            assert!(validate(y, m, d).is_ok(), "({y}, {m}, {d}) should be valid");
        }
    }

    #[test]
    fn test_validate_rejects_with_reason() {
        use InvalidDateReason::*;

        let cases = [
            ((-1, 0, 0), YearOutOfRange),
            ((-1, 1, 1), YearOutOfRange),
            ((0, 1, 1), YearOutOfRange),
            ((0, -1, 0), YearOutOfRange),
            ((0, 0, -1), YearOutOfRange),
            ((32768, 1, 1), YearOutOfRange),
            ((1, -1, 1), MonthOutOfRange),
            ((1, 0, 1), MonthOutOfRange),
            ((2015, 13, 1), MonthOutOfRange),
            ((2015, 256, 1), MonthOutOfRange),
            ((1, 1, -1), DayOutOfRange),
            ((1, 1, 0), DayOutOfRange),
            ((2015, 1, 32), DayOutOfRange),
            ((2015, 2, 29), DayOutOfRange),
            ((2012, 2, 30), DayOutOfRange),
            ((2015, 4, 31), DayOutOfRange),
            ((1900, 2, 29), DayOutOfRange),
            ((2015, 12, 288), DayOutOfRange),
        ];

        for ((y, m, d), reason) in cases {
            let err = validate(y, m, d).expect_err("triple should be rejected");
            assert_eq!(err.reason(), reason, "({y}, {m}, {d})");
            assert_eq!((err.year, err.month, err.day), (y, m, d));
        }
    }

    #[test]
    fn test_validate_rejects_cutover_gap() {
        for day in 5..=14 {
            let result = validate(1582, 10, day);
            assert!(
                matches!(
                    result,
                    Err(InvalidDate {
                        reason: InvalidDateReason::DayOutOfRange,
                        ..
                    })
                ),
                "1582-10-{day:02} should not exist"
            );
        }
        assert!(validate(1582, 10, 4).is_ok());
        assert!(validate(1582, 10, 15).is_ok());
    }
}
