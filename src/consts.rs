/// Fixed day of 1 January, year 1 of the proleptic Gregorian calendar
pub const GREGORIAN_EPOCH: i64 = 1;

/// Fixed day anchoring 1 Farvardin, year 1 of the Persian calendar
pub const PERSIAN_EPOCH: i64 = 226_896;

/// Smallest Persian year accepted by the calendar bridge.
/// Anything lower is treated as a day-first (`D/M/Y`) candidate.
pub const MIN_BRIDGE_YEAR: i64 = 1000;

/// Coarse upper bound on the day field accepted by the calendar bridge
pub const MAX_BRIDGE_DAY: u8 = 31;

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of every month
pub const MIN_DAY: u8 = 1;

/// First supported fixed day, 1 January of Gregorian year -999,999,999
pub const MIN_FIXED_DAY: i64 = -365_242_499_999;
/// Last supported fixed day, 31 December of Gregorian year 999,999,999
pub const MAX_FIXED_DAY: i64 = 365_242_499_634;
/// Years are clamped to this magnitude before any day arithmetic
pub(crate) const YEAR_LIMIT: i64 = 2_000_000_000;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, where Gregorian month arithmetic is normalized
pub const MARCH: u8 = 3;
/// Month number for Mehr, the first 30-day Persian month
pub const MEHR: u8 = 7;
/// Month number for Esfand, the month that grows in a Persian leap year
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Maximum days in each Persian month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const PERSIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_persian_leap_year check)
];

/// Day of the Persian year on which month lengths switch from 31 to 30 days
pub(crate) const PERSIAN_LONG_MONTHS_DAYS: i64 = 186;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// ...except for the century years landing here in a 400-year cycle
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_IN_400_YEARS: i64 = 146_097;
/// Days in a regular 100-year Gregorian block
pub(crate) const DAYS_IN_100_YEARS: i64 = 36_524;
/// Days in a regular 4-year Gregorian block
pub(crate) const DAYS_IN_4_YEARS: i64 = 1_461;
/// Days in a common year
pub(crate) const DAYS_IN_YEAR: i64 = 365;

/// Length of the arithmetic Persian leap cycle in years
pub(crate) const PERSIAN_CYCLE_YEARS: i64 = 33;
/// Days in one arithmetic 33-year Persian cycle (8 leap years)
pub(crate) const PERSIAN_CYCLE_DAYS: i64 = 12_053;

/// Persian years the 33-year rule marks as leap, but which are common years.
/// The leap day moves to the following year instead. Sorted ascending.
pub const NON_LEAP_CORRECTION: &[i64] = &[
    1502,
    1601, 1634, 1667,
    1700, 1733, 1766, 1799,
    1832, 1865, 1898,
    1931, 1964, 1997,
    2030, 2059, 2063, 2096,
    2129, 2158, 2162, 2191, 2195,
    2224, 2228, 2257, 2261, 2290, 2294,
    2323, 2327, 2356, 2360, 2389, 2393,
    2422, 2426, 2455, 2459, 2488, 2492,
    2521, 2525, 2554, 2558, 2587, 2591,
    2620, 2624, 2653, 2657, 2686, 2690,
    2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789,
    2818, 2822, 2847, 2851, 2855, 2880, 2884, 2888,
    2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

/// Date component separator for Persian dates
pub const PERSIAN_DATE_SEPARATOR: char = '/';
/// Date component separator for Gregorian dates (ISO 8601 format)
pub const GREGORIAN_DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Gap between the date and time halves of a formatted date-time
pub const DATE_TIME_GAP: &str = "   ";
