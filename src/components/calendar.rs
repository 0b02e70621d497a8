//! This module implements the calendar system selector and the dual
//! calendar date.
//!
//! A [`CalendarDate`] is a day expressed in either the Gregorian or the
//! Whensday calendar. Both variants convert through a [`DayInstant`], so
//! switching systems never loses or gains a day.

use core::str::FromStr;

use tinystr::TinyAsciiStr;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    components::whensday::{WhensdayDate, WhensdayPeriod},
    day_instant::DayInstant,
    gregorian::GregorianDate,
    WhensdayError, WhensdayResult,
};

/// The calendar system a date or month grid is expressed in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSystem {
    /// The proleptic Gregorian calendar.
    #[default]
    Gregorian,
    /// The thirteen month Whensday calendar.
    Whensday,
}

impl CalendarSystem {
    /// Returns the identifier of this calendar system.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Whensday => "whensday",
        }
    }

    /// Returns the number of months in a year, not counting Weensday.
    #[inline]
    #[must_use]
    pub const fn months_in_year(self) -> u8 {
        match self {
            Self::Gregorian => 12,
            Self::Whensday => 13,
        }
    }

    /// Returns the other calendar system.
    #[inline]
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Gregorian => Self::Whensday,
            Self::Whensday => Self::Gregorian,
        }
    }
}

impl FromStr for CalendarSystem {
    type Err = WhensdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("gregorian") || s.eq_ignore_ascii_case("gregory") {
            Ok(Self::Gregorian)
        } else if s.eq_ignore_ascii_case("whensday") {
            Ok(Self::Whensday)
        } else {
            Err(WhensdayError::r#type().with_message("Unknown calendar system identifier."))
        }
    }
}

/// A day in either calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarDate {
    Gregorian(GregorianDate),
    Whensday(WhensdayDate),
}

impl CalendarDate {
    /// Returns the date of `instant` in `system`.
    #[must_use]
    pub fn from_day_instant(instant: DayInstant, system: CalendarSystem) -> Self {
        match system {
            CalendarSystem::Gregorian => Self::Gregorian(GregorianDate::from_day_instant(instant)),
            CalendarSystem::Whensday => Self::Whensday(WhensdayDate::from_day_instant(instant)),
        }
    }

    /// Creates a validated date from raw fields.
    ///
    /// The month index is 0-based in both systems. For the Whensday system
    /// a month index of -1 denotes Weensday.
    pub fn try_from_fields(
        system: CalendarSystem,
        year: i32,
        month_index: i32,
        day: i32,
    ) -> WhensdayResult<Self> {
        match system {
            CalendarSystem::Gregorian => {
                GregorianDate::try_new(year, month_index, day).map(Self::Gregorian)
            }
            CalendarSystem::Whensday => {
                WhensdayDate::try_from_fields(year, month_index, day).map(Self::Whensday)
            }
        }
    }

    /// Returns the [`DayInstant`] of this date.
    #[must_use]
    pub fn to_day_instant(&self) -> DayInstant {
        match self {
            Self::Gregorian(date) => date.to_day_instant(),
            Self::Whensday(date) => date.to_day_instant(),
        }
    }

    /// Returns the same day expressed in `system`.
    #[must_use]
    pub fn convert_to(&self, system: CalendarSystem) -> Self {
        if self.system() == system {
            return *self;
        }
        Self::from_day_instant(self.to_day_instant(), system)
    }

    /// Returns the calendar system of this date.
    #[must_use]
    pub const fn system(&self) -> CalendarSystem {
        match self {
            Self::Gregorian(_) => CalendarSystem::Gregorian,
            Self::Whensday(_) => CalendarSystem::Whensday,
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        match self {
            Self::Gregorian(date) => date.year(),
            Self::Whensday(date) => date.year(),
        }
    }

    /// Returns the 0-based month index, or -1 for Weensday.
    #[must_use]
    pub const fn month_index(&self) -> i8 {
        match self {
            Self::Gregorian(date) => date.month_index() as i8,
            Self::Whensday(date) => date.month_index(),
        }
    }

    #[must_use]
    pub const fn day(&self) -> u8 {
        match self {
            Self::Gregorian(date) => date.day(),
            Self::Whensday(date) => date.day(),
        }
    }

    /// Returns the name of this date's month, or "Weensday".
    #[must_use]
    pub const fn month_name(&self) -> &'static str {
        match self {
            Self::Gregorian(date) => date.month().name(),
            Self::Whensday(date) => date.period().name(),
        }
    }

    /// Returns the month code of this date's month.
    #[must_use]
    pub const fn month_code(&self) -> TinyAsciiStr<4> {
        match self {
            Self::Gregorian(date) => date.month().month_code(),
            Self::Whensday(date) => date.period().month_code(),
        }
    }

    /// Returns whether this date is Weensday.
    #[must_use]
    pub const fn is_weensday(&self) -> bool {
        matches!(self, Self::Whensday(date) if matches!(date.period(), WhensdayPeriod::Weensday))
    }

    /// Returns whether this date is the Whensday leap day. Gregorian dates
    /// are never flagged, even on February 29th.
    #[must_use]
    pub const fn is_whensday_leap_day(&self) -> bool {
        match self {
            Self::Gregorian(_) => false,
            Self::Whensday(date) => date.is_leap_day(),
        }
    }

    /// Returns the Gregorian weekday, where 0 is Sunday.
    #[must_use]
    pub fn weekday(&self) -> u8 {
        self.to_day_instant().weekday()
    }
}

impl From<GregorianDate> for CalendarDate {
    fn from(value: GregorianDate) -> Self {
        Self::Gregorian(value)
    }
}

impl From<WhensdayDate> for CalendarDate {
    fn from(value: WhensdayDate) -> Self {
        Self::Whensday(value)
    }
}

impl Writeable for CalendarDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self {
            Self::Gregorian(date) => date.write_to(sink),
            Self::Whensday(date) => date.write_to(sink),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match self {
            Self::Gregorian(date) => date.writeable_length_hint(),
            Self::Whensday(date) => date.writeable_length_hint(),
        }
    }
}

impl_display_with_writeable!(CalendarDate);
