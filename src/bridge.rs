//! Direct Persian to Gregorian conversion and back, with the time of day
//! passed through unchanged.
//!
//! Persian input is accepted either year-first (`1393/5/14`) or day-first
//! (`14/5/1393`). The year-first reading is tried first; the day-first
//! reading is only used when the first one is rejected, which happens
//! whenever its "year" is below [`MIN_BRIDGE_YEAR`].

use log::debug;

use crate::consts::{
    DATE_TIME_GAP, MAX_BRIDGE_DAY, MAX_MONTH, MIN_BRIDGE_YEAR, PERSIAN_DATE_SEPARATOR,
};
use crate::gregorian::GregorianDate;
use crate::persian::PersianDate;
use crate::time::{GregorianDateTime, TimeOfDay};
use crate::types::split_triple;
use crate::ConversionError;

/// Checks the coarse bridge bounds, then the exact calendar rules.
fn checked_persian(year: i64, month: i64, day: i64) -> Result<PersianDate, ConversionError> {
    let out_of_bounds = || ConversionError::OutOfBounds { year, month, day };
    if year < MIN_BRIDGE_YEAR || month > i64::from(MAX_MONTH) || day > i64::from(MAX_BRIDGE_DAY) {
        return Err(out_of_bounds());
    }
    let month = u8::try_from(month).map_err(|_| out_of_bounds())?;
    let day = u8::try_from(day).map_err(|_| out_of_bounds())?;
    PersianDate::new(year, month, day)
}

/// Tries `first/month/last` as year-first, then as day-first.
fn resolve(fields: [i64; 3], time: TimeOfDay) -> Result<GregorianDateTime, ConversionError> {
    let [first, month, last] = fields;
    checked_persian(first, month, last)
        .or_else(|err| {
            debug!("{first}/{month}/{last} is not a year-first date ({err}), trying day-first");
            checked_persian(last, month, first)
        })
        .map(|date| GregorianDateTime::new(date.to_gregorian(), time))
}

/// Converts a Persian date and local time to a Gregorian date-time.
///
/// # Errors
/// Returns `ConversionError::OutOfBounds` when `year < 1000`, `month > 12`
/// or `day > 31`; `ConversionError::InvalidMonth` or
/// `ConversionError::InvalidDay` when the date does not exist in the Persian
/// calendar; `ConversionError::InvalidTime` for an out-of-range time.
///
/// ```
/// use jalali_calendar::jalali_to_gregorian;
///
/// let datetime = jalali_to_gregorian(1393, 5, 14, 10, 2, 4).unwrap();
/// assert_eq!(datetime.to_string(), "2014-08-05 10:02:04");
/// ```
pub fn jalali_to_gregorian(
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> Result<GregorianDateTime, ConversionError> {
    let date = checked_persian(year, month.into(), day.into())?;
    let time = TimeOfDay::new(hour, minute, second)?;
    Ok(GregorianDateTime::new(date.to_gregorian(), time))
}

/// Converts a `Y/M/D` or `D/M/Y` Persian date string to a Gregorian
/// date-time at midnight.
///
/// # Errors
/// Returns `ConversionError::InvalidFormat` if the input is not three
/// `/`-separated integers, or the error of the day-first reading when
/// neither reading is a valid date.
pub fn jalali_str_to_gregorian(input: &str) -> Result<GregorianDateTime, ConversionError> {
    let fields = split_triple(input, PERSIAN_DATE_SEPARATOR)?;
    resolve(fields, TimeOfDay::MIDNIGHT)
}

/// Converts a `Y/M/D hh:mm:ss` or `D/M/Y hh:mm:ss` Persian date-time string
/// to a Gregorian date-time.
///
/// Accepts the output of [`gregorian_to_jalali`] in either field order.
///
/// # Errors
/// Returns `ConversionError::InvalidFormat` unless the input is a date and a
/// time separated by whitespace, `ConversionError::InvalidTime` for an
/// out-of-range time, or the date error as for [`jalali_str_to_gregorian`].
pub fn jalali_datetime_str_to_gregorian(input: &str) -> Result<GregorianDateTime, ConversionError> {
    let mut halves = input.split_whitespace();
    let (Some(date), Some(time), None) = (halves.next(), halves.next(), halves.next()) else {
        return Err(if input.trim().is_empty() {
            ConversionError::EmptyInput
        } else {
            ConversionError::InvalidFormat(input.to_owned())
        });
    };

    let fields = split_triple(date, PERSIAN_DATE_SEPARATOR)?;
    resolve(fields, time.parse()?)
}

/// Formats the Persian date of a Gregorian date as `DD/MM/YYYY` when
/// `day_at_first` is set, `YYYY/MM/DD` otherwise. Day and month are
/// zero-padded.
///
/// ```
/// use jalali_calendar::{GregorianDate, gregorian_to_jalali_date};
///
/// let date = GregorianDate::new(2014, 8, 5).unwrap();
/// assert_eq!(gregorian_to_jalali_date(date, true), "14/05/1393");
/// assert_eq!(gregorian_to_jalali_date(date, false), "1393/05/14");
/// ```
pub fn gregorian_to_jalali_date(date: impl Into<GregorianDate>, day_at_first: bool) -> String {
    let persian = PersianDate::from_gregorian(date.into());
    let (year, month, day) = persian.to_tuple();
    if day_at_first {
        format!("{day:02}/{month:02}/{year}")
    } else {
        format!("{year}/{month:02}/{day:02}")
    }
}

/// Formats the time of day as `HH:MM:SS`.
pub fn gregorian_to_jalali_time(time: impl Into<TimeOfDay>) -> String {
    time.into().to_string()
}

/// Formats the Persian date and the time of day, separated by three spaces.
pub fn gregorian_to_jalali(datetime: impl Into<GregorianDateTime>, day_at_first: bool) -> String {
    let datetime = datetime.into();
    format!(
        "{}{DATE_TIME_GAP}{}",
        gregorian_to_jalali_date(datetime.date(), day_at_first),
        gregorian_to_jalali_time(datetime.time())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn gregorian(year: i64, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> GregorianDateTime {
        GregorianDateTime::new(
            GregorianDate::new(year, month, day).unwrap(),
            TimeOfDay::new(hour, minute, second).unwrap(),
        )
    }

    #[test]
    fn test_jalali_to_gregorian_passes_time_through() {
        let cases = [(10, 2, 4), (12, 1, 1), (23, 1, 1), (1, 23, 1), (0, 0, 0)];
        for (hour, minute, second) in cases {
            assert_eq!(
                jalali_to_gregorian(1393, 5, 14, hour, minute, second),
                Ok(gregorian(2014, 8, 5, hour, minute, second))
            );
        }
    }

    #[test]
    fn test_jalali_to_gregorian_bounds() {
        assert!(matches!(
            jalali_to_gregorian(999, 1, 1, 0, 0, 0),
            Err(ConversionError::OutOfBounds { year: 999, .. })
        ));
        assert!(matches!(
            jalali_to_gregorian(1393, 13, 1, 0, 0, 0),
            Err(ConversionError::OutOfBounds { month: 13, .. })
        ));
        assert!(matches!(
            jalali_to_gregorian(1393, 1, 32, 0, 0, 0),
            Err(ConversionError::OutOfBounds { day: 32, .. })
        ));
        assert!(jalali_to_gregorian(1000, 1, 1, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_jalali_to_gregorian_rejects_nonexistent_days() {
        assert!(matches!(
            jalali_to_gregorian(1393, 7, 31, 0, 0, 0),
            Err(ConversionError::InvalidDay { .. })
        ));
        assert!(matches!(
            jalali_to_gregorian(1393, 12, 30, 0, 0, 0),
            Err(ConversionError::InvalidDay { .. })
        ));
        assert!(matches!(
            jalali_to_gregorian(1393, 5, 0, 0, 0, 0),
            Err(ConversionError::InvalidDay { .. })
        ));
        assert!(matches!(
            jalali_to_gregorian(1393, 0, 5, 0, 0, 0),
            Err(ConversionError::InvalidMonth(0))
        ));
        assert_eq!(
            jalali_to_gregorian(1399, 12, 30, 0, 0, 0),
            Ok(gregorian(2021, 3, 20, 0, 0, 0))
        );
    }

    #[test]
    fn test_jalali_to_gregorian_rejects_bad_time() {
        assert!(matches!(
            jalali_to_gregorian(1393, 5, 14, 24, 0, 0),
            Err(ConversionError::InvalidTime { hour: 24, .. })
        ));
    }

    #[test]
    fn test_str_year_first_and_day_first_agree() {
        let expected = gregorian(2014, 8, 5, 0, 0, 0);
        assert_eq!(jalali_str_to_gregorian("1393/5/14"), Ok(expected));
        assert_eq!(jalali_str_to_gregorian("14/5/1393"), Ok(expected));
        assert_eq!(jalali_str_to_gregorian("1393/05/14"), Ok(expected));
        assert_eq!(jalali_str_to_gregorian("14/05/1393"), Ok(expected));
    }

    #[test]
    fn test_str_failures() {
        assert_eq!(jalali_str_to_gregorian(""), Err(ConversionError::EmptyInput));
        assert!(matches!(
            jalali_str_to_gregorian("1393/5"),
            Err(ConversionError::InvalidFormat(_))
        ));
        assert!(matches!(
            jalali_str_to_gregorian("1393/x/14"),
            Err(ConversionError::InvalidFormat(_))
        ));
        // Neither reading has a year >= 1000
        assert!(matches!(
            jalali_str_to_gregorian("14/5/93"),
            Err(ConversionError::OutOfBounds { year: 93, .. })
        ));
        // Day-first reading of a nonexistent leap day
        assert!(matches!(
            jalali_str_to_gregorian("30/12/1393"),
            Err(ConversionError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_gregorian_to_jalali_date() {
        let date = GregorianDate::new(2014, 8, 5).unwrap();
        assert_eq!(gregorian_to_jalali_date(date, true), "14/05/1393");
        assert_eq!(gregorian_to_jalali_date(date, false), "1393/05/14");

        // Zero padding on both fields
        let date = GregorianDate::new(2014, 7, 27).unwrap();
        assert_eq!(gregorian_to_jalali_date(date, true), "05/05/1393");

        let naive = NaiveDate::from_ymd_opt(2015, 3, 21).unwrap();
        assert_eq!(gregorian_to_jalali_date(naive, false), "1394/01/01");
    }

    #[test]
    fn test_gregorian_to_jalali_time() {
        assert_eq!(gregorian_to_jalali_time(gregorian(2014, 7, 5, 10, 25, 1)), "10:25:01");
        assert_eq!(gregorian_to_jalali_time(TimeOfDay::MIDNIGHT), "00:00:00");
    }

    #[test]
    fn test_gregorian_to_jalali() {
        assert_eq!(
            gregorian_to_jalali(gregorian(2014, 7, 5, 10, 25, 1), true),
            "14/04/1393   10:25:01"
        );
        assert_eq!(
            gregorian_to_jalali(gregorian(2015, 3, 21, 0, 0, 0), true),
            "01/01/1394   00:00:00"
        );
        let naive = NaiveDate::from_ymd_opt(2015, 3, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(gregorian_to_jalali(naive, false), "1394/01/01   00:00:00");
    }

    #[test]
    fn test_datetime_string_round_trip() {
        let original = gregorian(2018, 3, 13, 19, 21, 30);

        let year_first = gregorian_to_jalali(original, false);
        assert_eq!(year_first, "1396/12/22   19:21:30");
        assert_eq!(jalali_datetime_str_to_gregorian(&year_first), Ok(original));

        let day_first = gregorian_to_jalali(original, true);
        assert_eq!(day_first, "22/12/1396   19:21:30");
        assert_eq!(jalali_datetime_str_to_gregorian(&day_first), Ok(original));
    }

    #[test]
    fn test_datetime_string_failures() {
        assert_eq!(jalali_datetime_str_to_gregorian("  "), Err(ConversionError::EmptyInput));
        assert!(matches!(
            jalali_datetime_str_to_gregorian("1393/5/14"),
            Err(ConversionError::InvalidFormat(_))
        ));
        assert!(matches!(
            jalali_datetime_str_to_gregorian("1393/5/14 10:00:00 extra"),
            Err(ConversionError::InvalidFormat(_))
        ));
        assert!(matches!(
            jalali_datetime_str_to_gregorian("1393/5/14 10:60:00"),
            Err(ConversionError::InvalidTime { .. })
        ));
    }
}
