//! Digit-only Persian date and time formats (`yymmdd`, `yyyymmdd`, `hhmmss`)
//! as used in fixed-width records.

use crate::bridge::jalali_to_gregorian;
use crate::gregorian::GregorianDate;
use crate::persian::PersianDate;
use crate::time::{GregorianDateTime, TimeOfDay};
use crate::ConversionError;

/// Century assumed for two-digit Persian years
const COMPACT_CENTURY: i64 = 1300;

/// Splits an all-digit string into fields of the given widths.
fn digit_fields<const N: usize>(s: &str, widths: [usize; N]) -> Result<[i64; N], ConversionError> {
    let invalid = || ConversionError::InvalidFormat(s.to_owned());
    if s.len() != widths.iter().sum::<usize>() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut fields = [0_i64; N];
    let mut start = 0;
    for (field, width) in fields.iter_mut().zip(widths) {
        *field = s[start..start + width].parse().map_err(|_| invalid())?;
        start += width;
    }
    Ok(fields)
}

/// Formats the Persian date of a Gregorian date as `yymmdd`
///
/// ```
/// use jalali_calendar::{GregorianDate, format_compact_date};
///
/// let date = GregorianDate::new(2014, 8, 26).unwrap();
/// assert_eq!(format_compact_date(date), "930604");
/// ```
pub fn format_compact_date(date: impl Into<GregorianDate>) -> String {
    let (year, month, day) = PersianDate::from_gregorian(date.into()).to_tuple();
    format!("{:02}{month:02}{day:02}", year.rem_euclid(100))
}

/// Formats the time of day as `hhmmss`
pub fn format_compact_time(time: impl Into<TimeOfDay>) -> String {
    let time = time.into();
    format!("{:02}{:02}{:02}", time.hour(), time.minute(), time.second())
}

/// Converts a compact Persian date and time to a Gregorian date-time.
///
/// `date` is either `yyyymmdd` or `yymmdd`; a two-digit year is read as
/// `13yy`. `time` is `hhmmss`.
///
/// # Errors
/// Returns `ConversionError::InvalidFormat` if either string has the wrong
/// length or a non-digit, otherwise any error of [`jalali_to_gregorian`].
pub fn parse_compact_datetime(date: &str, time: &str) -> Result<GregorianDateTime, ConversionError> {
    let date = date.trim();
    let [hour, minute, second] = digit_fields(time.trim(), [2, 2, 2])?;

    let (year, month, day) = match date.len() {
        8 => {
            let [year, month, day] = digit_fields(date, [4, 2, 2])?;
            (year, month, day)
        }
        6 => {
            let [year, month, day] = digit_fields(date, [2, 2, 2])?;
            (COMPACT_CENTURY + year, month, day)
        }
        _ => return Err(ConversionError::InvalidFormat(date.to_owned())),
    };

    // Fields are at most two digits, so this only changes the type
    let narrow = |value: i64| u8::try_from(value).map_err(|_| ConversionError::InvalidFormat(date.to_owned()));
    jalali_to_gregorian(
        year,
        narrow(month)?,
        narrow(day)?,
        narrow(hour)?,
        narrow(minute)?,
        narrow(second)?,
    )
}
