//! Conversion between Gregorian calendar date/time and epoch seconds.
//!
//! The epoch is 1601-01-01 00:00:00, the start of the 400-year Gregorian
//! cycle containing the usual computing epochs. Conversions run on plain
//! integer arithmetic: epoch seconds decompose into 400/100/4/1-year
//! spans, then days, then the time of day.
//!
//! Months and days of the month are stored zero-based, matching how they
//! index into month-length tables; [`std::fmt::Display`] renders the
//! conventional one-based form.
//!
//! # Examples
//!
//! ```
//! use exercises::gregorian::{Gregorian, Month};
//!
//! let date = Gregorian::from_epoch_seconds(0);
//! assert_eq!(date.year, 1601);
//! assert_eq!(date.to_string(), "1601-01-01 00:00:00");
//!
//! // 2000 is a leap year, 1900 is not.
//! assert!(Gregorian::is_leap_year(2000));
//! assert!(!Gregorian::is_leap_year(1900));
//! assert_eq!(Gregorian::days_in_month(Month::February as u8, 2000), 29);
//! ```

use std::fmt;

const SECONDS_IN_MINUTE: u64 = 60;
const SECONDS_IN_HOUR: u64 = 60 * SECONDS_IN_MINUTE;
const SECONDS_IN_DAY: u64 = 24 * SECONDS_IN_HOUR;

const DAYS_IN_NON_LEAP_YEAR: u64 = 365;

// There are 97 leap years in each span of 400 years:
// 100 years divisible by 4, minus the 4 divisible by 100,
// plus the 1 divisible by 400.
const LEAPS_IN_400_YEARS: u64 = 400 / 4 - 400 / 100 + 400 / 400;
const LEAPS_IN_100_YEARS: u64 = 100 / 4 - 1;

const SECONDS_IN_400_YEARS: u64 =
    (400 * DAYS_IN_NON_LEAP_YEAR + LEAPS_IN_400_YEARS) * SECONDS_IN_DAY;
const SECONDS_IN_100_YEARS: u64 =
    (100 * DAYS_IN_NON_LEAP_YEAR + LEAPS_IN_100_YEARS) * SECONDS_IN_DAY;
const SECONDS_IN_4_YEARS: u64 = (4 * DAYS_IN_NON_LEAP_YEAR + 1) * SECONDS_IN_DAY;
const SECONDS_IN_1_YEAR: u64 = DAYS_IN_NON_LEAP_YEAR * SECONDS_IN_DAY;

/// Days per month in a non-leap year, indexed by zero-based month.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Zero-based month numbers, for readable call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Month {
    January = 0,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// A Gregorian calendar date and time of day.
///
/// Fields are plain and public; the struct is a value, not an abstraction.
/// `month` and `day_of_month` are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gregorian {
    /// Calendar year, at least [`Gregorian::EPOCH_YEAR`].
    pub year: u16,
    /// Month of the year, `0..=11`.
    pub month: u8,
    /// Day of the month, `0..=30`.
    pub day_of_month: u8,
    /// Day of the year, `0..=365` (365 only in a leap year).
    pub day_of_year: u16,
    /// Hour of the day, `0..=23`.
    pub hours: u8,
    /// Minute of the hour, `0..=59`.
    pub minutes: u8,
    /// Second of the minute, `0..=59`.
    pub seconds: u8,
}

impl Gregorian {
    /// The epoch year: conversions count seconds from 1601-01-01 00:00:00.
    pub const EPOCH_YEAR: u16 = 1601;

    /// Builds a date from its parts, deriving `day_of_year`.
    ///
    /// `month` and `day_of_month` are zero-based; out-of-range parts are a
    /// caller error and trip debug assertions downstream.
    pub fn new(year: u16, month: u8, day_of_month: u8, hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            year,
            month,
            day_of_month,
            day_of_year: Self::day_of_year(year, month, day_of_month),
            hours,
            minutes,
            seconds,
        }
    }

    /// Converts seconds since the epoch to a calendar date and time.
    ///
    /// The year must come out at or below `u16::MAX`, which holds for any
    /// epoch-seconds value below roughly 2 × 10¹².
    pub fn from_epoch_seconds(seconds_since_epoch: u64) -> Self {
        let mut remaining = seconds_since_epoch;

        let span_400 = remaining / SECONDS_IN_400_YEARS;
        remaining -= span_400 * SECONDS_IN_400_YEARS;

        // The trailing day of a 400-year cycle (Dec 31 of the leap year
        // closing it) would otherwise count as a fifth century; likewise
        // the leap day closing a 4-year span would count as a fifth year.
        let span_100 = (remaining / SECONDS_IN_100_YEARS).min(3);
        remaining -= span_100 * SECONDS_IN_100_YEARS;

        let span_4 = remaining / SECONDS_IN_4_YEARS;
        remaining -= span_4 * SECONDS_IN_4_YEARS;

        let span_1 = (remaining / SECONDS_IN_1_YEAR).min(3);
        remaining -= span_1 * SECONDS_IN_1_YEAR;

        let year_span = span_400 * 400 + span_100 * 100 + span_4 * 4 + span_1;
        debug_assert!(year_span <= u64::from(u16::MAX - Self::EPOCH_YEAR));
        let year = Self::EPOCH_YEAR + year_span as u16;

        let day_of_year = (remaining / SECONDS_IN_DAY) as u16;
        remaining -= u64::from(day_of_year) * SECONDS_IN_DAY;

        let mut month = 0u8;
        let mut day_count = day_of_year;
        while day_count >= u16::from(Self::days_in_month(month, year)) {
            day_count -= u16::from(Self::days_in_month(month, year));
            month += 1;
        }

        let hours = (remaining / SECONDS_IN_HOUR) as u8;
        remaining -= u64::from(hours) * SECONDS_IN_HOUR;
        let minutes = (remaining / SECONDS_IN_MINUTE) as u8;
        remaining -= u64::from(minutes) * SECONDS_IN_MINUTE;

        Self {
            year,
            month,
            day_of_month: day_count as u8,
            day_of_year,
            hours,
            minutes,
            seconds: remaining as u8,
        }
    }

    /// Converts this calendar date and time to seconds since the epoch.
    ///
    /// The day of the year is derived from year/month/day, so the stored
    /// `day_of_year` field does not need to be consistent.
    pub fn to_epoch_seconds(&self) -> u64 {
        let years = u64::from(self.year - Self::EPOCH_YEAR);
        let days = years * DAYS_IN_NON_LEAP_YEAR
            + u64::from(Self::leap_years_before(self.year))
            + u64::from(Self::day_of_year(self.year, self.month, self.day_of_month));

        days * SECONDS_IN_DAY
            + u64::from(self.hours) * SECONDS_IN_HOUR
            + u64::from(self.minutes) * SECONDS_IN_MINUTE
            + u64::from(self.seconds)
    }

    /// Returns `true` for leap years: divisible by 4, except centuries not
    /// divisible by 400.
    pub fn is_leap_year(year: u16) -> bool {
        year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
    }

    /// Days in the given zero-based month, accounting for leap-year
    /// February.
    pub fn days_in_month(month: u8, year: u16) -> u8 {
        let days = MONTH_DAYS[usize::from(month)];
        if month == Month::February as u8 && Self::is_leap_year(year) {
            days + 1
        } else {
            days
        }
    }

    /// The number of leap years in `[EPOCH_YEAR, year)`, i.e. the number
    /// of extra days accumulated before `year` begins.
    pub fn leap_years_before(year: u16) -> u16 {
        debug_assert!(year >= Self::EPOCH_YEAR);
        (leap_days_through(year - 1) - leap_days_through(Self::EPOCH_YEAR - 1)) as u16
    }

    /// Zero-based day of the year for the given date.
    pub fn day_of_year(year: u16, month: u8, day_of_month: u8) -> u16 {
        debug_assert!(day_of_month < Self::days_in_month(month, year));
        let mut days = 0u16;
        for earlier in 0..month {
            days += u16::from(Self::days_in_month(earlier, year));
        }
        days + u16::from(day_of_month)
    }
}

/// Renders as `YYYY-MM-DD hh:mm:ss` with conventional one-based month and
/// day.
impl fmt::Display for Gregorian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year,
            self.month + 1,
            self.day_of_month + 1,
            self.hours,
            self.minutes,
            self.seconds
        )
    }
}

/// Leap days in years `[1, year]` of the proleptic Gregorian calendar.
fn leap_days_through(year: u16) -> u32 {
    let year = u32::from(year);
    year / 4 - year / 100 + year / 400
}
