//! The `whensday_rs` crate converts days between the Gregorian calendar
//! and the Whensday calendar, and evaluates recurring on/off schedules
//! for a given day.
//!
//! ```rust
//! use whensday_rs::{DayInstant, WhensdayDate, WhensdayMonth};
//! use core::str::FromStr;
//!
//! // January 2nd opens the first Whensday month.
//! let day = DayInstant::from_str("2024-01-02").unwrap();
//! let whensday = WhensdayDate::from_day_instant(day);
//! assert_eq!(whensday.month(), Some(WhensdayMonth::Snowlyn));
//! assert_eq!(whensday.day(), 1);
//!
//! // January 1st is always Weensday.
//! let weensday = DayInstant::from_str("2024-01-01").unwrap();
//! assert!(WhensdayDate::from_day_instant(weensday).is_weensday());
//! ```
//!
//! The Whensday calendar has thirteen months of 28 days, preceded by a
//! single intercalary day, Weensday, on Gregorian January 1st. In leap
//! years the seventh month, Sol, gains a leap day, so both calendars
//! always have the same number of days in a year and every day maps to
//! exactly one day in the other calendar.
//!
//! Days are exchanged as [`DayInstant`] values: a count of whole UTC
//! days since the Unix epoch. Millisecond timestamps are normalized to
//! the UTC midnight that starts their day when they enter the crate.
//!
//! Schedules are evaluated with [`Schedule::evaluate`], which layers
//! booked holidays, bonus days and exemption windows over a repeating
//! on/off pattern.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod conversion;
pub mod error;
pub mod parsers;

#[cfg(feature = "sys")]
mod sys;

mod components;
mod day_instant;
mod gregorian;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::WhensdayError;

/// The `whensday_rs` result type
pub type WhensdayResult<T> = Result<T, WhensdayError>;

pub use crate::components::{
    evaluate, schedules_by_day, schedules_for_day, CalendarDate, CalendarSystem, DisplayMonth,
    Exemption, GridCell, MonthGrid, Schedule, ScheduleForDay, SchedulePattern, ScheduleState,
    WeekStart, WhensdayDate, WhensdayMonth, WhensdayPeriod,
};
pub use crate::conversion::{
    convert_day_in_grid, days_in_whensday_month, first_weekday_of_whensday_month,
    gregorian_to_whensday, is_leap_year, month_name, same_calendar_day, whensday_to_gregorian,
};
pub use crate::day_instant::DayInstant;
pub use crate::gregorian::{GregorianDate, GregorianMonth};

#[cfg(feature = "sys")]
pub use crate::sys::today_utc;

/// A library specific trait for unwrapping assertions.
pub(crate) trait WhensdayUnwrap {
    type Output;

    /// `whensday_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn whensday_unwrap(self) -> WhensdayResult<Self::Output>;
}

impl<T> WhensdayUnwrap for Option<T> {
    type Output = T;

    fn whensday_unwrap(self) -> WhensdayResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(WhensdayError::assert())
    }
}

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;
/// The earliest Gregorian (and Whensday) year that can be represented.
pub const MIN_YEAR: i32 = -271_820;
/// The latest Gregorian (and Whensday) year that can be represented.
pub const MAX_YEAR: i32 = 275_759;
/// Epoch day of January 1st of [`MIN_YEAR`].
pub(crate) const MIN_EPOCH_DAYS: i64 = utils::epoch_days_for_year(MIN_YEAR as i64);
/// Epoch day of December 31st of [`MAX_YEAR`].
pub(crate) const MAX_EPOCH_DAYS: i64 = utils::epoch_days_for_year(MAX_YEAR as i64 + 1) - 1;
