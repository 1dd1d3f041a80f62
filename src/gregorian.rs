//! Proleptic Gregorian calendar conversions to and from [`FixedDay`].

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{
    DAYS_IN_4_YEARS, DAYS_IN_100_YEARS, DAYS_IN_400_YEARS, DAYS_IN_YEAR, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_DATE_SEPARATOR, GREGORIAN_DAYS_IN_MONTH, GREGORIAN_EPOCH, MARCH,
    YEAR_LIMIT,
};
use crate::leap::is_gregorian_leap_year;
use crate::prelude::*;
use crate::types::{Month, check_day, narrow, split_triple};
use crate::{ConversionError, FixedDay};

/// Day count of a Gregorian date before saturating to the [`FixedDay`] range
fn day_number(year: i64, month: u8, day: u8) -> i64 {
    let year = year.clamp(-YEAR_LIMIT, YEAR_LIMIT);
    let prior_years = year - 1;
    let m = i64::from(month);

    // Months are counted as if February had 30 days, then corrected
    let february_correction = if month <= FEBRUARY {
        0
    } else if is_gregorian_leap_year(year) {
        -1
    } else {
        -2
    };

    GREGORIAN_EPOCH - 1
        + DAYS_IN_YEAR * prior_years
        + prior_years.div_euclid(4)
        - prior_years.div_euclid(100)
        + prior_years.div_euclid(400)
        + (367 * m - 362).div_euclid(12)
        + february_correction
        + i64::from(day)
}

/// Converts a Gregorian date to its fixed day number.
///
/// The arithmetic is lenient: out-of-range days simply offset from the
/// start of the month. Use [`GregorianDate::new`] for validated input.
/// Dates past either end of the [`FixedDay`] range saturate.
pub fn gregorian_to_fixed_day(year: i64, month: u8, day: u8) -> FixedDay {
    FixedDay::new(day_number(year, month, day))
}

/// Fixed day of 1 January of `year`
pub fn gregorian_new_year(year: i64) -> FixedDay {
    gregorian_to_fixed_day(year, 1, 1)
}

/// Gregorian year containing `date`, without iterating over years.
pub fn gregorian_year_from_fixed(date: FixedDay) -> i64 {
    let d0 = date.get() - GREGORIAN_EPOCH;
    let n400 = d0.div_euclid(DAYS_IN_400_YEARS);
    let d1 = d0.rem_euclid(DAYS_IN_400_YEARS);
    let n100 = d1 / DAYS_IN_100_YEARS;
    let d2 = d1 % DAYS_IN_100_YEARS;
    let n4 = d2 / DAYS_IN_4_YEARS;
    let d3 = d2 % DAYS_IN_4_YEARS;
    let n1 = d3 / DAYS_IN_YEAR;
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;

    // The last day of a leap cycle lands one block "too far"
    if n100 == 4 || n1 == 4 { year } else { year + 1 }
}

/// Converts a fixed day number back to a Gregorian `(year, month, day)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fixed_day_to_gregorian(date: FixedDay) -> (i64, u8, u8) {
    let fixed = date.get();
    let year = gregorian_year_from_fixed(date);
    let prior_days = fixed - day_number(year, 1, 1);

    // Pretend February has 30 days so the month polynomial is regular
    let correction = if fixed < day_number(year, MARCH, 1) {
        0
    } else if is_gregorian_leap_year(year) {
        1
    } else {
        2
    };

    // month is in 1..=12 and day in 1..=31 here
    let month = ((12 * (prior_days + correction) + 373) / 367) as u8;
    let day = (fixed - day_number(year, month, 1) + 1) as u8;
    (year, month, day)
}

/// Number of days in a Gregorian month
pub const fn gregorian_days_in_month(year: i64, month: Month) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// A validated date in the proleptic Gregorian calendar.
///
/// Year 0 is 1 BC, following astronomical year numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day")]
pub struct GregorianDate {
    year:  i64,
    month: Month,
    day:   u8,
}

impl GregorianDate {
    /// Creates a date, checking the month and the day against its month length.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidMonth` or `ConversionError::InvalidDay`,
    /// or `ConversionError::Unrepresentable` for a year past ±999,999,999.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, ConversionError> {
        let month_typed = Month::new(month)?;
        let day = check_day(year, month, day, gregorian_days_in_month(year, month_typed))?;
        FixedDay::try_from(day_number(year, month, day))
            .map_err(|_| ConversionError::Unrepresentable(format!("{year}-{month}-{day}")))?;
        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// The date falling on `date`
    pub fn from_fixed(date: FixedDay) -> Self {
        let (year, month, day) = fixed_day_to_gregorian(date);
        Self {
            year,
            // from_fixed always yields a month in 1..=12
            month: Month::new(month).unwrap_or(Month::MAX),
            day,
        }
    }

    /// Fixed day number of this date
    pub fn to_fixed(self) -> FixedDay {
        gregorian_to_fixed_day(self.year, self.month.get(), self.day)
    }

    /// Returns the year
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(&self) -> (i64, u8, u8) {
        (self.year, self.month.get(), self.day)
    }

    /// Whether this date falls in a Gregorian leap year
    pub const fn is_leap_year(&self) -> bool {
        is_gregorian_leap_year(self.year)
    }

    /// The next calendar day, saturating at the end of the [`FixedDay`] range
    pub fn succ(self) -> Self {
        Self::from_fixed(self.to_fixed().succ())
    }

    /// The previous calendar day, saturating at the start of the [`FixedDay`] range
    pub fn pred(self) -> Self {
        Self::from_fixed(self.to_fixed().pred())
    }
}

impl FromStr for GregorianDate {
    type Err = ConversionError;

    /// Parses ISO 8601 `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [year, month, day] = split_triple(s, GREGORIAN_DATE_SEPARATOR)?;
        Self::new(year, narrow(month, s)?, narrow(day, s)?)
    }
}

impl TryFrom<(i64, u8, u8)> for GregorianDate {
    type Error = ConversionError;

    fn try_from(value: (i64, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        // chrono counts 0001-01-01 as day 1, same as the fixed day axis
        Self::from_fixed(FixedDay::new(i64::from(date.num_days_from_ce())))
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = ConversionError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        i32::try_from(date.to_fixed().get())
            .ok()
            .and_then(Self::from_num_days_from_ce_opt)
            .ok_or_else(|| ConversionError::Unrepresentable(date.to_string()))
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
