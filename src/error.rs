use crate::consts::{MAX_BRIDGE_DAY, MAX_MONTH, MIN_BRIDGE_YEAR};

/// Error type for calendar conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Fields fall outside the coarse bounds the calendar bridge accepts.
    #[error(
        "Date {year}/{month}/{day} out of bounds (year must be >= {min_year}, month <= {max_month}, day <= {max_day})",
        min_year = MIN_BRIDGE_YEAR,
        max_month = MAX_MONTH,
        max_day = MAX_BRIDGE_DAY
    )]
    OutOfBounds { year: i64, month: i64, day: i64 },

    /// Month is not in `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day does not exist in the given month and year.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: u8 },

    /// Time of day fields out of range.
    #[error("Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },

    /// Input could not be tokenized into the expected numeric fields.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Input was empty or whitespace only.
    #[error("Empty date string")]
    EmptyInput,

    /// The value cannot be represented by the target type.
    #[error("Value out of representable range: {0}")]
    Unrepresentable(String),
}
