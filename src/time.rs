//! Time of day, carried alongside dates but never touched by day arithmetic.

use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::TIME_SEPARATOR;
use crate::gregorian::GregorianDate;
use crate::prelude::*;
use crate::types::{narrow, split_triple};
use crate::ConversionError;

const MAX_HOUR: u8 = 23;
const MAX_MINUTE: u8 = 59;
const MAX_SECOND: u8 = 59;

/// Hour, minute and second of a local wall clock. No time zone, no leap
/// seconds, no sub-second precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct TimeOfDay {
    hour:   u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// 00:00:00
    pub const MIDNIGHT: Self = Self {
        hour:   0,
        minute: 0,
        second: 0,
    };

    /// Creates a time, range-checking each field.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidTime` if the hour is past 23 or the
    /// minute or second past 59.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ConversionError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND {
            return Err(ConversionError::InvalidTime { hour, minute, second });
        }
        Ok(Self { hour, minute, second })
    }

    /// Returns the hour (0-23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59)
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59)
    pub const fn second(&self) -> u8 {
        self.second
    }
}

impl FromStr for TimeOfDay {
    type Err = ConversionError;

    /// Parses `hh:mm:ss`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [hour, minute, second] = split_triple(s, TIME_SEPARATOR)?;
        Self::new(narrow(hour, s)?, narrow(minute, s)?, narrow(second, s)?)
    }
}

impl From<NaiveTime> for TimeOfDay {
    #[allow(clippy::cast_possible_truncation)]
    fn from(time: NaiveTime) -> Self {
        // chrono keeps these within 0..=23 and 0..=59; a leap second shows up
        // only in the nanosecond field, which is dropped
        Self {
            hour:   time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        Self::from_hms_opt(time.hour.into(), time.minute.into(), time.second.into()).unwrap_or_default()
    }
}

impl From<NaiveDateTime> for TimeOfDay {
    fn from(datetime: NaiveDateTime) -> Self {
        datetime.time().into()
    }
}

/// A Gregorian date with a wall-clock time, the output of the calendar bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{} {}", date, time)]
pub struct GregorianDateTime {
    date: GregorianDate,
    time: TimeOfDay,
}

impl GregorianDateTime {
    /// Pairs a date with a time
    pub const fn new(date: GregorianDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Returns the date half
    pub const fn date(&self) -> GregorianDate {
        self.date
    }

    /// Returns the time half
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }
}

impl From<GregorianDate> for GregorianDateTime {
    fn from(date: GregorianDate) -> Self {
        Self::new(date, TimeOfDay::MIDNIGHT)
    }
}

impl From<GregorianDateTime> for GregorianDate {
    fn from(datetime: GregorianDateTime) -> Self {
        datetime.date
    }
}

impl From<GregorianDateTime> for TimeOfDay {
    fn from(datetime: GregorianDateTime) -> Self {
        datetime.time
    }
}

impl From<NaiveDateTime> for GregorianDateTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime.date().into(), datetime.time().into())
    }
}

impl From<NaiveDateTime> for GregorianDate {
    fn from(datetime: NaiveDateTime) -> Self {
        datetime.date().into()
    }
}

impl TryFrom<GregorianDateTime> for NaiveDateTime {
    type Error = ConversionError;

    fn try_from(datetime: GregorianDateTime) -> Result<Self, Self::Error> {
        let date = chrono::NaiveDate::try_from(datetime.date)?;
        Ok(date.and_time(datetime.time.into()))
    }
}

impl FromStr for GregorianDateTime {
    type Err = ConversionError;

    /// Parses `YYYY-MM-DD hh:mm:ss`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (date, time) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| ConversionError::InvalidFormat(s.to_owned()))?;
        Ok(Self::new(date.parse()?, time.trim().parse()?))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for GregorianDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
