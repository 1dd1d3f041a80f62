//! Persian (Jalali) calendar conversions to and from [`FixedDay`].
//!
//! New year days come from the 33-year arithmetic cycle, shifted by one day
//! after every year in the correction table so that this module always
//! agrees with [`is_persian_leap_year`]. The first six months have 31 days,
//! the next five 30, and Esfand 29 or 30.

use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{
    DAYS_IN_YEAR, ESFAND, ESFAND_DAYS_LEAP, MEHR, PERSIAN_CYCLE_DAYS, PERSIAN_CYCLE_YEARS,
    PERSIAN_DATE_SEPARATOR, PERSIAN_DAYS_IN_MONTH, PERSIAN_EPOCH, PERSIAN_LONG_MONTHS_DAYS,
    YEAR_LIMIT,
};
use crate::gregorian::GregorianDate;
use crate::leap::{is_non_leap_correction, is_persian_leap_year};
use crate::prelude::*;
use crate::types::{Month, check_day, narrow, split_triple};
use crate::{ConversionError, FixedDay};

/// Day count of 1 Farvardin, with `year` already within `±YEAR_LIMIT`
fn new_year_day(year: i64) -> i64 {
    let mut new_year = PERSIAN_EPOCH - 1
        + DAYS_IN_YEAR * (year - 1)
        + (8 * year + 21).div_euclid(PERSIAN_CYCLE_YEARS);
    if is_non_leap_correction(year - 1) {
        new_year -= 1;
    }
    new_year
}

/// Days elapsed in the year before the first of `month`
fn days_before_month(month: u8) -> i64 {
    let m = i64::from(month);
    if month <= MEHR { 31 * (m - 1) } else { 30 * (m - 1) + 6 }
}

/// Day count of a Persian date before saturating to the [`FixedDay`] range
fn day_number(year: i64, month: u8, day: u8) -> i64 {
    new_year_day(year.clamp(-YEAR_LIMIT, YEAR_LIMIT)) + days_before_month(month) + i64::from(day) - 1
}

/// Fixed day of 1 Farvardin of `year`, saturating outside the [`FixedDay`] range
pub fn persian_new_year(year: i64) -> FixedDay {
    FixedDay::new(day_number(year, Month::MIN.get(), 1))
}

/// Converts a Persian date to its fixed day number.
///
/// The arithmetic is lenient: out-of-range days simply offset from the
/// start of the month. Use [`PersianDate::new`] for validated input.
/// Dates past either end of the [`FixedDay`] range saturate.
///
/// ```
/// use jalali_calendar::{gregorian_to_fixed_day, persian_to_fixed_day};
///
/// assert_eq!(persian_to_fixed_day(1393, 5, 14), gregorian_to_fixed_day(2014, 8, 5));
/// ```
pub fn persian_to_fixed_day(year: i64, month: u8, day: u8) -> FixedDay {
    FixedDay::new(day_number(year, month, day))
}

/// Converts a fixed day number back to a Persian `(year, month, day)`.
///
/// The year is estimated from the 33-year ratio and then checked against
/// that year's new year day.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fixed_day_to_persian(date: FixedDay) -> (i64, u8, u8) {
    let fixed = date.get();
    let days_since_epoch = fixed - new_year_day(1);
    let mut year = 1 + (PERSIAN_CYCLE_YEARS * days_since_epoch + 3).div_euclid(PERSIAN_CYCLE_DAYS);
    let mut day_of_year = fixed - new_year_day(year) + 1;

    // The estimate treats a corrected year as leap; its day 366 is next year's day 1
    if day_of_year == DAYS_IN_YEAR + 1 && is_non_leap_correction(year) {
        trace!("fixed day {date} rolls over from corrected year {year}");
        year += 1;
        day_of_year = 1;
    }

    let month = if day_of_year <= PERSIAN_LONG_MONTHS_DAYS {
        (day_of_year + 30).div_euclid(31)
    } else {
        (day_of_year - 6 + 29).div_euclid(30)
    };
    // month is in 1..=12 here
    let month = month as u8;
    let day = (fixed - day_number(year, month, 1) + 1) as u8;
    (year, month, day)
}

/// Number of days in a Persian month
///
/// ```
/// use jalali_calendar::{Month, persian_days_in_month};
///
/// let esfand = Month::new(12).unwrap();
/// assert_eq!(persian_days_in_month(1399, esfand), 30);
/// assert_eq!(persian_days_in_month(1400, esfand), 29);
/// ```
pub fn persian_days_in_month(year: i64, month: Month) -> u8 {
    let month = month.get();
    if month == ESFAND && is_persian_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        PERSIAN_DAYS_IN_MONTH[usize::from(month)]
    }
}

/// A validated date in the Persian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", "year", "month.get()", "day")]
pub struct PersianDate {
    year:  i64,
    month: Month,
    day:   u8,
}

impl PersianDate {
    /// Creates a date, checking the month and the day against its month length.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidMonth` or `ConversionError::InvalidDay`,
    /// or `ConversionError::Unrepresentable` for a date outside the
    /// [`FixedDay`] range.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, ConversionError> {
        let month_typed = Month::new(month)?;
        let day = check_day(year, month, day, persian_days_in_month(year, month_typed))?;
        FixedDay::try_from(day_number(year, month, day))
            .map_err(|_| ConversionError::Unrepresentable(format!("{year}/{month}/{day}")))?;
        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// The date falling on `date`
    pub fn from_fixed(date: FixedDay) -> Self {
        let (year, month, day) = fixed_day_to_persian(date);
        Self {
            year,
            // from_fixed always yields a month in 1..=12
            month: Month::new(month).unwrap_or(Month::MAX),
            day,
        }
    }

    /// Fixed day number of this date
    pub fn to_fixed(self) -> FixedDay {
        persian_to_fixed_day(self.year, self.month.get(), self.day)
    }

    /// Returns the year
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month (1-12, Farvardin is 1)
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

    /// Day of the year, 1 for 1 Farvardin
    pub fn ordinal(&self) -> u16 {
        // at most 366
        u16::try_from(days_before_month(self.month.get()) + i64::from(self.day)).unwrap_or(u16::MAX)
    }

    /// Whether this date falls in a Persian leap year
    pub fn is_leap_year(&self) -> bool {
        is_persian_leap_year(self.year)
    }

    /// The next calendar day, saturating at the end of the [`FixedDay`] range
    pub fn succ(self) -> Self {
        Self::from_fixed(self.to_fixed().succ())
    }

    /// The previous calendar day, saturating at the start of the [`FixedDay`] range
    pub fn pred(self) -> Self {
        Self::from_fixed(self.to_fixed().pred())
    }

    /// The same day in the Gregorian calendar
    pub fn to_gregorian(self) -> GregorianDate {
        GregorianDate::from_fixed(self.to_fixed())
    }

    /// The same day in the Persian calendar
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_fixed(date.to_fixed())
    }
}

impl From<GregorianDate> for PersianDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl From<PersianDate> for GregorianDate {
    fn from(date: PersianDate) -> Self {
        date.to_gregorian()
    }
}

impl FromStr for PersianDate {
    type Err = ConversionError;

    /// Parses `YYYY/MM/DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [year, month, day] = split_triple(s, PERSIAN_DATE_SEPARATOR)?;
        Self::new(year, narrow(month, s)?, narrow(day, s)?)
    }
}

impl TryFrom<(i64, u8, u8)> for PersianDate {
    type Error = ConversionError;

    fn try_from(value: (i64, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
