//! Free functions for converting days between the Gregorian and Whensday
//! calendars.
//!
//! These are thin entry points over [`DayInstant`], [`GregorianDate`] and
//! [`WhensdayDate`] for hosts that work with month indices and raw
//! millisecond timestamps.
//!
//! [`GregorianDate`]: crate::GregorianDate

use crate::{
    components::{CalendarDate, CalendarSystem, WhensdayDate, WhensdayMonth, WhensdayPeriod},
    day_instant::DayInstant,
    gregorian::GregorianMonth,
    utils, WhensdayResult,
};

/// Returns whether `year` is a Gregorian leap year. The Whensday calendar
/// uses the same rule.
#[inline]
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    utils::is_leap_year(year as i64)
}

/// Returns the number of days in the Whensday month `month_index` of `year`.
///
/// Only month indices 0 through 12 are accepted; Weensday (-1) has no month
/// length and is rejected.
pub fn days_in_whensday_month(month_index: i32, year: i32) -> WhensdayResult<u8> {
    WhensdayMonth::try_from_index(month_index).map(|month| month.days_in_month(year))
}

/// Returns the Whensday date of a Gregorian day.
#[inline]
#[must_use]
pub fn gregorian_to_whensday(instant: DayInstant) -> WhensdayDate {
    WhensdayDate::from_day_instant(instant)
}

/// Returns the day of a Whensday date. Weensday is January 1st of its year.
#[inline]
#[must_use]
pub fn whensday_to_gregorian(date: &WhensdayDate) -> DayInstant {
    date.to_day_instant()
}

/// Returns the Gregorian weekday (0 is Sunday) of the first day of the
/// Whensday month `month_index` in `year`.
pub fn first_weekday_of_whensday_month(month_index: i32, year: i32) -> WhensdayResult<u8> {
    let month = WhensdayMonth::try_from_index(month_index)?;
    let first = WhensdayDate::try_new(year, month, 1)?;
    Ok(whensday_to_gregorian(&first).weekday())
}

/// Returns the day `day` in the calendar system `to`.
///
/// The source system is the system `day` is expressed in.
#[inline]
#[must_use]
pub fn convert_day_in_grid(day: &CalendarDate, to: CalendarSystem) -> CalendarDate {
    day.convert_to(to)
}

/// Returns whether two millisecond timestamps fall on the same UTC
/// calendar day, ignoring the time of day.
#[must_use]
pub const fn same_calendar_day(a_ms: i64, b_ms: i64) -> bool {
    let (a_year, a_month, a_day) = utils::civil_from_epoch_days(utils::epoch_ms_to_epoch_days(a_ms));
    let (b_year, b_month, b_day) = utils::civil_from_epoch_days(utils::epoch_ms_to_epoch_days(b_ms));
    a_year == b_year && a_month == b_month && a_day == b_day
}

/// Returns the name of month `index` in `system`.
///
/// For the Whensday system an index of -1 names Weensday.
pub fn month_name(system: CalendarSystem, index: i32) -> WhensdayResult<&'static str> {
    match system {
        CalendarSystem::Gregorian => GregorianMonth::try_from_index(index).map(GregorianMonth::name),
        CalendarSystem::Whensday => WhensdayPeriod::try_from_index(index).map(WhensdayPeriod::name),
    }
}
