//! Leap year rules for both calendars.
//!
//! The Persian rule is the 33-year arithmetic approximation, corrected by the
//! fixed [`NON_LEAP_CORRECTION`] table wherever it disagrees with the
//! astronomical calendar.

use crate::consts::{GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, NON_LEAP_CORRECTION, PERSIAN_CYCLE_YEARS};

/// Whether the 33-year rule was overridden to make `year` a common year.
#[inline]
pub(crate) fn is_non_leap_correction(year: i64) -> bool {
    NON_LEAP_CORRECTION.binary_search(&year).is_ok()
}

/// Returns `true` if `year` is a leap year in the Persian calendar.
///
/// A year listed in the correction table is never leap; the year right after
/// one always is. Every other year follows `(25 * year + 11) mod 33 < 8`.
///
/// ```
/// use jalali_calendar::is_persian_leap_year;
///
/// assert!(is_persian_leap_year(1399));
/// assert!(!is_persian_leap_year(1400));
/// assert!(!is_persian_leap_year(1502)); // corrected to a common year
/// assert!(is_persian_leap_year(1503)); // receives the displaced leap day
/// ```
pub fn is_persian_leap_year(year: i64) -> bool {
    if is_non_leap_correction(year) {
        false
    } else if is_non_leap_correction(year.saturating_sub(1)) {
        true
    } else {
        (25 * year.rem_euclid(PERSIAN_CYCLE_YEARS) + 11) % PERSIAN_CYCLE_YEARS < 8
    }
}

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Century years are folded into a single `mod 400` check.
pub const fn is_gregorian_leap_year(year: i64) -> bool {
    let in_cycle = year.rem_euclid(GREGORIAN_CYCLE);
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && in_cycle != 100 && in_cycle != 200 && in_cycle != 300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction_table_is_sorted() {
        assert!(NON_LEAP_CORRECTION.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(NON_LEAP_CORRECTION.len(), 78);
    }

    #[test]
    fn test_persian_leap_year_cases() {
        struct TestCase {
            year:        i64,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1393,
                is_leap:     false,
                description: "common year by the 33-year rule",
            },
            TestCase {
                year:        1395,
                is_leap:     true,
                description: "leap by the 33-year rule",
            },
            TestCase {
                year:        1399,
                is_leap:     true,
                description: "leap by the 33-year rule",
            },
            TestCase {
                year:        1403,
                is_leap:     true,
                description: "leap by the 33-year rule",
            },
            TestCase {
                year:        1404,
                is_leap:     false,
                description: "common year by the 33-year rule",
            },
            TestCase {
                year:        1408,
                is_leap:     true,
                description: "five-year gap in the cycle",
            },
            TestCase {
                year:        1501,
                is_leap:     false,
                description: "year before a corrected year",
            },
            TestCase {
                year:        1502,
                is_leap:     false,
                description: "corrected year the rule calls leap",
            },
            TestCase {
                year:        1503,
                is_leap:     true,
                description: "year after a corrected year",
            },
            TestCase {
                year:        2987,
                is_leap:     false,
                description: "last corrected year",
            },
            TestCase {
                year:        2988,
                is_leap:     true,
                description: "year after the last corrected year",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_persian_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_every_corrected_year_overrides_the_rule() {
        for &year in NON_LEAP_CORRECTION {
            assert!(
                (25 * year + 11).rem_euclid(PERSIAN_CYCLE_YEARS) < 8,
                "Year {year} should be leap by the 33-year rule"
            );
            assert!(!is_persian_leap_year(year), "Year {year} should be common");
            assert!(is_persian_leap_year(year + 1), "Year {} should be leap", year + 1);
        }
    }

    #[test]
    fn test_leap_rules_at_integer_extremes() {
        assert!(!is_persian_leap_year(i64::MAX));
        assert!(!is_persian_leap_year(i64::MIN));
        assert!(!is_gregorian_leap_year(i64::MAX));
        assert!(is_gregorian_leap_year(i64::MIN));
    }

    #[test]
    fn test_persian_leap_years_per_cycle() {
        // Outside the corrected range, each 33-year cycle carries 8 leap years
        let leaps = (1343..1376).filter(|&y| is_persian_leap_year(y)).count();
        assert_eq!(leaps, 8);
    }

    #[test]
    fn test_gregorian_leap_year_cases() {
        struct TestCase {
            year:        i64,
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
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        0,
                is_leap:     true,
                description: "year zero (1 BC) is divisible by 400",
            },
            TestCase {
                year:        -100,
                is_leap:     false,
                description: "negative century",
            },
            TestCase {
                year:        -4,
                is_leap:     true,
                description: "negative year divisible by 4",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_gregorian_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected leap = {}",
                case.year,
                case.description,
                case.is_leap
            );
        }
    }
}
