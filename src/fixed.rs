//! The shared day axis both calendars convert through.

use std::ops::{Add, Sub};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::consts::{GREGORIAN_EPOCH, MAX_FIXED_DAY, MIN_FIXED_DAY, PERSIAN_EPOCH};
use crate::prelude::*;
use crate::ConversionError;

/// A continuous count of days. Fixed day 1 is 1 January of year 1 in the
/// proleptic Gregorian calendar.
///
/// Values stay within [`FixedDay::MIN`]`..=`[`FixedDay::MAX`], Gregorian
/// years -999,999,999 through 999,999,999. [`FixedDay::new`] and the
/// arithmetic operators saturate at those ends; [`FixedDay::try_from`]
/// rejects anything outside.
///
/// Both calendar converters read and produce values on this axis, so a date
/// in one calendar maps to the other by going through a `FixedDay`:
///
/// ```
/// use jalali_calendar::{FixedDay, fixed_day_to_gregorian, persian_to_fixed_day};
///
/// let day: FixedDay = persian_to_fixed_day(1393, 5, 14);
/// assert_eq!(fixed_day_to_gregorian(day), (2014, 8, 5));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct FixedDay(i64);

impl FixedDay {
    /// 1 January, year 1 (proleptic Gregorian)
    pub const GREGORIAN_EPOCH: Self = Self(GREGORIAN_EPOCH);

    /// Anchor of the Persian new-year formula for year 1
    pub const PERSIAN_EPOCH: Self = Self(PERSIAN_EPOCH);

    /// First supported day
    pub const MIN: Self = Self(MIN_FIXED_DAY);

    /// Last supported day
    pub const MAX: Self = Self(MAX_FIXED_DAY);

    /// Wraps a raw day count, saturating at [`FixedDay::MIN`] and [`FixedDay::MAX`]
    #[inline]
    pub const fn new(value: i64) -> Self {
        if value < MIN_FIXED_DAY {
            Self::MIN
        } else if value > MAX_FIXED_DAY {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The following day
    #[inline]
    pub const fn succ(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// The preceding day
    #[inline]
    pub const fn pred(self) -> Self {
        Self::new(self.0 - 1)
    }

    /// Day of the week. Fixed day 1 was a Monday.
    pub fn weekday(self) -> Weekday {
        match (self.0 - 1).rem_euclid(7) {
            0 => Weekday::Mon,
            1 => Weekday::Tue,
            2 => Weekday::Wed,
            3 => Weekday::Thu,
            4 => Weekday::Fri,
            5 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }
}

impl TryFrom<i64> for FixedDay {
    type Error = ConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_FIXED_DAY..=MAX_FIXED_DAY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConversionError::Unrepresentable(format!("fixed day {value}")))
        }
    }
}

impl Add<i64> for FixedDay {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        Self::new(self.0.saturating_add(days))
    }
}

impl Sub<i64> for FixedDay {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        Self::new(self.0.saturating_sub(days))
    }
}

impl Sub for FixedDay {
    type Output = i64;

    /// Number of days from `other` to `self`
    fn sub(self, other: Self) -> i64 {
        self.0 - other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let day = FixedDay::new(735_450);
        assert_eq!(day.get(), 735_450);
        assert_eq!(i64::from(day), 735_450);
        assert_eq!(FixedDay::try_from(735_450_i64), Ok(day));
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(FixedDay::MIN.get(), MIN_FIXED_DAY);
        assert_eq!(FixedDay::MAX.get(), MAX_FIXED_DAY);

        assert_eq!(FixedDay::new(i64::MAX), FixedDay::MAX);
        assert_eq!(FixedDay::new(i64::MIN), FixedDay::MIN);
        assert_eq!(FixedDay::MAX.succ(), FixedDay::MAX);
        assert_eq!(FixedDay::MIN.pred(), FixedDay::MIN);
        assert_eq!(FixedDay::MAX + i64::MAX, FixedDay::MAX);
        assert_eq!(FixedDay::MIN - i64::MAX, FixedDay::MIN);
        assert_eq!(FixedDay::MAX - FixedDay::MIN, MAX_FIXED_DAY - MIN_FIXED_DAY);

        assert_eq!(FixedDay::try_from(MAX_FIXED_DAY), Ok(FixedDay::MAX));
        assert!(matches!(
            FixedDay::try_from(MAX_FIXED_DAY + 1),
            Err(ConversionError::Unrepresentable(_))
        ));
        assert!(matches!(
            FixedDay::try_from(i64::MIN),
            Err(ConversionError::Unrepresentable(_))
        ));
    }

    #[test]
    fn test_arithmetic() {
        let day = FixedDay::new(100);
        assert_eq!(day + 5, FixedDay::new(105));
        assert_eq!(day - 5, FixedDay::new(95));
        assert_eq!(FixedDay::new(105) - day, 5);
        assert_eq!(day - FixedDay::new(105), -5);
        assert_eq!(day.succ(), FixedDay::new(101));
        assert_eq!(day.pred(), FixedDay::new(99));
    }

    #[test]
    fn test_ordering() {
        assert!(FixedDay::new(-3) < FixedDay::new(0));
        assert!(FixedDay::GREGORIAN_EPOCH < FixedDay::PERSIAN_EPOCH);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(FixedDay::GREGORIAN_EPOCH.weekday(), Weekday::Mon);
        // 2014-08-05 was a Tuesday
        assert_eq!(FixedDay::new(735_450).weekday(), Weekday::Tue);
        // 1970-01-01 was a Thursday
        assert_eq!(FixedDay::new(719_163).weekday(), Weekday::Thu);
        assert_eq!(FixedDay::new(0).weekday(), Weekday::Sun);
        assert_eq!(FixedDay::new(-6).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_display() {
        assert_eq!(FixedDay::new(735_450).to_string(), "735450");
        assert_eq!(FixedDay::new(-12).to_string(), "-12");
    }

    #[test]
    fn test_serde() {
        let day = FixedDay::new(735_450);
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "735450");

        let parsed: FixedDay = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);

        let result: Result<FixedDay, _> = serde_json::from_str(&i64::MAX.to_string());
        assert!(result.is_err());
    }
}
