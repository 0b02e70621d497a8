//! This module implements the proleptic Gregorian date record.
//!
//! A `GregorianDate` represents a year, a 0-based month index, and a
//! 1-based day of the month. The month index follows the layout used by
//! the month grids: January is 0 and December is 11.

use tinystr::{tinystr, TinyAsciiStr};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    day_instant::DayInstant, error::ErrorMessage, utils, WhensdayError, WhensdayResult, MAX_YEAR,
    MIN_YEAR,
};

/// The twelve Gregorian months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GregorianMonth {
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

impl GregorianMonth {
    /// All Gregorian months in calendar order.
    pub const ALL: [GregorianMonth; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the month for a 0-based month index.
    pub fn try_from_index(index: i32) -> WhensdayResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(WhensdayError::range().with_enum(ErrorMessage::GregorianMonthOutOfRange))
    }

    /// Returns the 0-based month index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Returns the month code, `M01` through `M12`.
    #[must_use]
    pub const fn month_code(self) -> TinyAsciiStr<4> {
        GREGORIAN_MONTH_CODES[self as usize]
    }

    /// Returns the month for a month code.
    pub fn try_from_month_code(code: &TinyAsciiStr<4>) -> WhensdayResult<Self> {
        GREGORIAN_MONTH_CODES
            .iter()
            .position(|c| c == code)
            .map(|i| Self::ALL[i])
            .ok_or(WhensdayError::range().with_enum(ErrorMessage::MonthCodeInvalid))
    }

    /// Returns the number of days in this month for `year`.
    #[inline]
    #[must_use]
    pub const fn days_in_month(self, year: i32) -> u8 {
        utils::gregorian_days_in_month(year as i64, self as u8 + 1)
    }

    /// Returns the following month, or `None` after December.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(usize::from(self.index()) + 1).copied()
    }

    /// Returns the preceding month, or `None` before January.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        usize::from(self.index())
            .checked_sub(1)
            .map(|i| Self::ALL[i])
    }
}

const GREGORIAN_MONTH_CODES: [TinyAsciiStr<4>; 12] = [
    tinystr!(4, "M01"),
    tinystr!(4, "M02"),
    tinystr!(4, "M03"),
    tinystr!(4, "M04"),
    tinystr!(4, "M05"),
    tinystr!(4, "M06"),
    tinystr!(4, "M07"),
    tinystr!(4, "M08"),
    tinystr!(4, "M09"),
    tinystr!(4, "M10"),
    tinystr!(4, "M11"),
    tinystr!(4, "M12"),
];

/// `GregorianDate` serves as a record for a proleptic Gregorian year,
/// month, and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: GregorianMonth,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: GregorianMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a validated `GregorianDate` from a year, a 0-based month
    /// index, and a 1-based day.
    pub fn try_new(year: i32, month_index: i32, day: i32) -> WhensdayResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(WhensdayError::range().with_enum(ErrorMessage::YearOutOfRange));
        }
        let month = GregorianMonth::try_from_index(month_index)?;
        if !(1..=i32::from(month.days_in_month(year))).contains(&day) {
            return Err(WhensdayError::range().with_enum(ErrorMessage::DayOfMonthOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day as u8))
    }

    /// Returns the Gregorian date of a [`DayInstant`].
    #[must_use]
    pub fn from_day_instant(instant: DayInstant) -> Self {
        let (year, month, day) = utils::civil_from_epoch_days(instant.epoch_days());
        // NOTE: `DayInstant` is bounded to `MIN_YEAR..=MAX_YEAR`, and `month` is 1-12.
        Self::new_unchecked(year as i32, GregorianMonth::ALL[usize::from(month - 1)], day)
    }

    /// Returns the [`DayInstant`] of this date.
    #[must_use]
    pub fn to_day_instant(&self) -> DayInstant {
        DayInstant::new_unchecked(utils::epoch_days_from_civil(
            i64::from(self.year),
            self.month.index() + 1,
            self.day,
        ))
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> GregorianMonth {
        self.month
    }

    /// Returns the 0-based month index.
    #[inline]
    #[must_use]
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    /// Returns the 1-based day of the month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the 1-based day of the year.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        utils::epoch_days_to_day_of_year(self.to_day_instant().epoch_days())
    }

    /// Returns the weekday, where 0 is Sunday.
    #[must_use]
    pub fn weekday(&self) -> u8 {
        self.to_day_instant().weekday()
    }

    /// Returns the number of days in this date's year.
    #[inline]
    #[must_use]
    pub const fn days_in_year(&self) -> u16 {
        utils::days_in_year(self.year as i64)
    }

    /// Returns whether this date falls in a leap year.
    #[inline]
    #[must_use]
    pub const fn in_leap_year(&self) -> bool {
        utils::is_leap_year(self.year as i64)
    }
}

impl Writeable for GregorianDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str(self.month.name())?;
        sink.write_char(' ')?;
        self.day.write_to(sink)?;
        sink.write_str(", ")?;
        self.year.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.month.name().len() + 3)
            + self.day.writeable_length_hint()
            + self.year.writeable_length_hint()
    }
}

impl_display_with_writeable!(GregorianDate);
