use crate::ConversionError;
use crate::consts::{MAX_MONTH, MIN_DAY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// Month number shared by both calendars: Farvardin through Esfand on the
/// Persian side, January through December on the Gregorian side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// The first month of the year
    pub const MIN: Self = Self(NonZeroU8::MIN);

    /// The last month of the year
    pub const MAX: Self = match NonZeroU8::new(MAX_MONTH) {
        Some(month) => Self(month),
        None => unreachable!(),
    };

    /// Validates a month number.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidMonth` outside `1..=12`.
    pub fn new(value: u8) -> Result<Self, ConversionError> {
        let non_zero = NonZeroU8::new(value).ok_or(ConversionError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ConversionError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month number, 1-based
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a day against the length of its month.
///
/// # Errors
/// Returns `ConversionError::InvalidDay` if the day is 0 or past `max_day`.
pub(crate) const fn check_day(year: i64, month: u8, day: u8, max_day: u8) -> Result<u8, ConversionError> {
    if day < MIN_DAY || day > max_day {
        return Err(ConversionError::InvalidDay { year, month, day });
    }
    Ok(day)
}

/// Splits `s` on `separator` into exactly three trimmed numeric fields.
///
/// # Errors
/// Returns `ConversionError::EmptyInput` for blank input and
/// `ConversionError::InvalidFormat` if the field count is wrong or any field
/// is not an integer.
pub(crate) fn split_triple(s: &str, separator: char) -> Result<[i64; 3], ConversionError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ConversionError::InvalidFormat(format!(
            "Expected 3 fields separated by '{separator}', found {}: {s}",
            parts.len()
        )));
    }

    let mut fields = [0_i64; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        // Signs are not part of any accepted format
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConversionError::InvalidFormat(s.to_owned()));
        }
        *field = part
            .parse::<i64>()
            .map_err(|_| ConversionError::InvalidFormat(s.to_owned()))?;
    }
    Ok(fields)
}

/// Narrows a parsed field to `u8`
///
/// # Errors
/// Returns `ConversionError::InvalidFormat` if the value does not fit.
pub(crate) fn narrow(value: i64, source: &str) -> Result<u8, ConversionError> {
    u8::try_from(value).map_err(|_| ConversionError::InvalidFormat(source.to_owned()))
}
