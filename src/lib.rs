//! Conversion between the Persian (Jalali, Solar Hijri) and Gregorian
//! calendars.
//!
//! Both calendars convert to and from a [`FixedDay`], a plain count of days
//! where day 1 is 1 January of year 1 (proleptic Gregorian). Going through
//! that shared axis is all a cross-calendar conversion needs:
//!
//! ```
//! use jalali_calendar::{fixed_day_to_gregorian, persian_to_fixed_day};
//!
//! assert_eq!(fixed_day_to_gregorian(persian_to_fixed_day(1393, 5, 14)), (2014, 8, 5));
//! ```
//!
//! The supported range is Gregorian years -999,999,999 through 999,999,999
//! ([`FixedDay::MIN`] to [`FixedDay::MAX`]). Validated constructors reject
//! dates outside it; the plain conversion functions saturate.
//!
//! Persian leap years follow the 33-year arithmetic rule, corrected by a
//! fixed table of years ([`NON_LEAP_CORRECTION`]) where the rule drifts from
//! the astronomical calendar.
//!
//! The string helpers take Persian dates either year-first or day-first:
//!
//! ```
//! use jalali_calendar::{gregorian_to_jalali_date, jalali_str_to_gregorian};
//!
//! let a = jalali_str_to_gregorian("1393/5/14").unwrap();
//! let b = jalali_str_to_gregorian("14/5/1393").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(gregorian_to_jalali_date(a, true), "14/05/1393");
//! ```

mod bridge;
mod compact;
mod consts;
mod error;
mod fixed;
mod gregorian;
mod leap;
mod persian;
mod prelude;
mod time;
mod types;

pub use bridge::{
    gregorian_to_jalali, gregorian_to_jalali_date, gregorian_to_jalali_time,
    jalali_datetime_str_to_gregorian, jalali_str_to_gregorian, jalali_to_gregorian,
};
pub use compact::{format_compact_date, format_compact_time, parse_compact_datetime};
pub use consts::*;
pub use error::ConversionError;
pub use fixed::FixedDay;
pub use gregorian::{
    GregorianDate, fixed_day_to_gregorian, gregorian_days_in_month, gregorian_new_year,
    gregorian_to_fixed_day, gregorian_year_from_fixed,
};
pub use leap::{is_gregorian_leap_year, is_persian_leap_year};
pub use persian::{
    PersianDate, fixed_day_to_persian, persian_days_in_month, persian_new_year,
    persian_to_fixed_day,
};
pub use time::{GregorianDateTime, TimeOfDay};
pub use types::Month;
