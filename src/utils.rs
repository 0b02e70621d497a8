//! Utility date equations for the Gregorian and Whensday calendars.
//!
//! All equations operate on epoch days, i.e. whole days counted from
//! 1970-01-01 in the proleptic Gregorian calendar.

use crate::MS_PER_DAY;

// ==== Begin Date Equations ====

/// `IsLeapYear`
///
/// The Whensday calendar reuses this rule for its Sol leap day.
#[inline]
pub(crate) const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Mathematically determine the days in a year.
#[inline]
pub(crate) const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the epoch day of a proleptic Gregorian date.
///
/// NOTE: Month should be in a range of 1-12.
pub(crate) const fn epoch_days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = (if month > 2 { month - 3 } else { month + 9 }) as i64;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era =
        year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Returns the proleptic Gregorian `(year, month, day)` of an epoch day,
/// with month in a range of 1-12.
pub(crate) const fn civil_from_epoch_days(epoch_days: i64) -> (i64, u8, u8) {
    let shifted = epoch_days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u8;
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Returns the epoch day of January 1st of `year`.
#[inline]
pub(crate) const fn epoch_days_for_year(year: i64) -> i64 {
    epoch_days_from_civil(year, 1, 1)
}

/// Returns the 1-indexed day of the year for an epoch day.
#[inline]
pub(crate) const fn epoch_days_to_day_of_year(epoch_days: i64) -> u16 {
    let (year, _, _) = civil_from_epoch_days(epoch_days);
    (epoch_days - epoch_days_for_year(year) + 1) as u16
}

/// Returns the weekday of an epoch day, where 0 is Sunday.
///
/// 1970-01-01 was a Thursday.
#[inline]
pub(crate) const fn epoch_days_to_weekday(epoch_days: i64) -> u8 {
    (epoch_days + 4).rem_euclid(7) as u8
}

/// `EpochTimeToDayNumber`
#[inline]
pub(crate) const fn epoch_ms_to_epoch_days(epoch_ms: i64) -> i64 {
    epoch_ms.div_euclid(MS_PER_DAY as i64)
}

// ==== End Date Equations ====

// ==== Begin Calendar Equations ====

/// `ISODaysInMonth ( year, month )` with month in a range of 1-12.
pub(crate) const fn gregorian_days_in_month(year: i64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

// ==== End Calendar Equations ====
