//! This module implements the Whensday calendar's month and date types.
//!
//! A Whensday year starts with Weensday, an intercalary day that always
//! falls on Gregorian January 1st and belongs to no month. Thirteen
//! months of 28 days follow. In Gregorian leap years the seventh month,
//! Sol, has 29 days and its 15th day is the Whensday leap day.

use tinystr::{tinystr, TinyAsciiStr};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    day_instant::DayInstant, error::ErrorMessage, utils, WhensdayError, WhensdayResult, MAX_YEAR,
    MIN_YEAR,
};

/// The day of Sol that is only flagged as the leap day in leap years.
const LEAP_DAY_OF_SOL: u8 = 15;

const WEENSDAY_CODE: TinyAsciiStr<4> = tinystr!(4, "W00");

const WHENSDAY_MONTH_CODES: [TinyAsciiStr<4>; 13] = [
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
    tinystr!(4, "M13"),
];

/// The thirteen Whensday months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WhensdayMonth {
    Snowlyn = 0,
    Aquilaria,
    Aquelaelum,
    Emberfell,
    Mayfall,
    Peachcup,
    Sol,
    Butterdoodle,
    Sweetpop,
    Shadowfell,
    Knocturn,
    Finnabell,
    Zephania,
}

impl WhensdayMonth {
    /// All Whensday months in calendar order.
    pub const ALL: [WhensdayMonth; 13] = [
        Self::Snowlyn,
        Self::Aquilaria,
        Self::Aquelaelum,
        Self::Emberfell,
        Self::Mayfall,
        Self::Peachcup,
        Self::Sol,
        Self::Butterdoodle,
        Self::Sweetpop,
        Self::Shadowfell,
        Self::Knocturn,
        Self::Finnabell,
        Self::Zephania,
    ];

    /// The month that carries the leap day.
    pub const LEAP_MONTH: WhensdayMonth = Self::Sol;

    /// Returns the month for a 0-based month index.
    ///
    /// Weensday's index, -1, is rejected because Weensday is not a month.
    pub fn try_from_index(index: i32) -> WhensdayResult<Self> {
        if index == -1 {
            return Err(WhensdayError::range().with_enum(ErrorMessage::WeensdayHasNoMonth));
        }
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(WhensdayError::range().with_enum(ErrorMessage::WhensdayMonthOutOfRange))
    }

    /// Returns the 0-based month index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Snowlyn => "Snowlyn",
            Self::Aquilaria => "Aquilaria",
            Self::Aquelaelum => "Aquelaelum",
            Self::Emberfell => "Emberfell",
            Self::Mayfall => "Mayfall",
            Self::Peachcup => "Peachcup",
            Self::Sol => "Sol",
            Self::Butterdoodle => "Butterdoodle",
            Self::Sweetpop => "Sweetpop",
            Self::Shadowfell => "Shadowfell",
            Self::Knocturn => "Knocturn",
            Self::Finnabell => "Finnabell",
            Self::Zephania => "Zephania",
        }
    }

    /// Returns the month code, `M01` through `M13`.
    #[must_use]
    pub const fn month_code(self) -> TinyAsciiStr<4> {
        WHENSDAY_MONTH_CODES[self as usize]
    }

    /// Returns the number of days in this month for `year`: 29 for Sol in
    /// a Gregorian leap year, otherwise 28.
    #[inline]
    #[must_use]
    pub const fn days_in_month(self, year: i32) -> u8 {
        if matches!(self, Self::Sol) && utils::is_leap_year(year as i64) {
            29
        } else {
            28
        }
    }

    /// Returns the following month, or `None` after Zephania.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(usize::from(self.index()) + 1).copied()
    }

    /// Returns the preceding month, or `None` before Snowlyn.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        usize::from(self.index())
            .checked_sub(1)
            .map(|i| Self::ALL[i])
    }
}

/// Either Weensday or one of the thirteen Whensday months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WhensdayPeriod {
    /// The intercalary day on Gregorian January 1st.
    Weensday,
    /// A regular month.
    Month(WhensdayMonth),
}

impl WhensdayPeriod {
    /// Returns the period for an index where -1 is Weensday and 0..=12 are months.
    pub fn try_from_index(index: i32) -> WhensdayResult<Self> {
        if index == -1 {
            return Ok(Self::Weensday);
        }
        WhensdayMonth::try_from_index(index).map(Self::Month)
    }

    /// Returns -1 for Weensday, otherwise the 0-based month index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> i8 {
        match self {
            Self::Weensday => -1,
            Self::Month(month) => month.index() as i8,
        }
    }

    /// Returns the display name of the period.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weensday => "Weensday",
            Self::Month(month) => month.name(),
        }
    }

    /// Returns the month code, with `W00` for Weensday.
    #[must_use]
    pub const fn month_code(self) -> TinyAsciiStr<4> {
        match self {
            Self::Weensday => WEENSDAY_CODE,
            Self::Month(month) => month.month_code(),
        }
    }

    /// Returns the period for a month code.
    pub fn try_from_month_code(code: &TinyAsciiStr<4>) -> WhensdayResult<Self> {
        if *code == WEENSDAY_CODE {
            return Ok(Self::Weensday);
        }
        WHENSDAY_MONTH_CODES
            .iter()
            .position(|c| c == code)
            .map(|i| Self::Month(WhensdayMonth::ALL[i]))
            .ok_or(WhensdayError::range().with_enum(ErrorMessage::MonthCodeInvalid))
    }
}

/// A date in the Whensday calendar.
///
/// Whether the date is Weensday or the Sol leap day is derived from its
/// fields, so a `WhensdayDate` can never carry an inconsistent flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WhensdayDate {
    year: i32,
    period: WhensdayPeriod,
    day: u8,
}

impl WhensdayDate {
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, period: WhensdayPeriod, day: u8) -> Self {
        Self { year, period, day }
    }

    /// Creates the Weensday of `year`.
    pub fn weensday(year: i32) -> WhensdayResult<Self> {
        check_year(year)?;
        Ok(Self::new_unchecked(year, WhensdayPeriod::Weensday, 1))
    }

    /// Creates a validated date within a Whensday month.
    pub fn try_new(year: i32, month: WhensdayMonth, day: i32) -> WhensdayResult<Self> {
        check_year(year)?;
        if !(1..=i32::from(month.days_in_month(year))).contains(&day) {
            return Err(WhensdayError::range().with_enum(ErrorMessage::DayOfMonthOutOfRange));
        }
        Ok(Self::new_unchecked(
            year,
            WhensdayPeriod::Month(month),
            day as u8,
        ))
    }

    /// Creates a validated date from raw fields, where a month index of -1
    /// denotes Weensday and requires `day == 1`.
    pub fn try_from_fields(year: i32, month_index: i32, day: i32) -> WhensdayResult<Self> {
        match WhensdayPeriod::try_from_index(month_index)? {
            WhensdayPeriod::Weensday if day != 1 => {
                Err(WhensdayError::range().with_enum(ErrorMessage::WeensdayDayNotOne))
            }
            WhensdayPeriod::Weensday => Self::weensday(year),
            WhensdayPeriod::Month(month) => Self::try_new(year, month, day),
        }
    }

    /// Returns the Whensday date of a [`DayInstant`].
    #[must_use]
    pub fn from_day_instant(instant: DayInstant) -> Self {
        let (year, _, _) = utils::civil_from_epoch_days(instant.epoch_days());
        let day_of_year = utils::epoch_days_to_day_of_year(instant.epoch_days());
        // NOTE: `DayInstant` is bounded to `MIN_YEAR..=MAX_YEAR`.
        Self::from_year_and_day_of_year(year as i32, day_of_year)
    }

    /// Places a 1-indexed day of the year into the Whensday calendar.
    ///
    /// A day of the year past the end of the year cannot be produced from a
    /// `DayInstant`; it is clamped to the last day of Zephania.
    pub(crate) fn from_year_and_day_of_year(year: i32, day_of_year: u16) -> Self {
        if day_of_year <= 1 {
            return Self::new_unchecked(year, WhensdayPeriod::Weensday, 1);
        }

        let mut remaining = day_of_year - 1;
        for month in WhensdayMonth::ALL {
            let days_in_month = u16::from(month.days_in_month(year));
            if remaining <= days_in_month {
                return Self::new_unchecked(year, WhensdayPeriod::Month(month), remaining as u8);
            }
            remaining -= days_in_month;
        }

        #[cfg(feature = "log")]
        log::warn!(
            "day {day_of_year} of {year} is past the end of the Whensday year, clamping to the last day of Zephania"
        );
        let last = WhensdayMonth::Zephania;
        Self::new_unchecked(
            year,
            WhensdayPeriod::Month(last),
            last.days_in_month(year),
        )
    }

    /// Returns the [`DayInstant`] of this date.
    #[must_use]
    pub fn to_day_instant(&self) -> DayInstant {
        DayInstant::new_unchecked(
            utils::epoch_days_for_year(i64::from(self.year)) + i64::from(self.day_of_year()) - 1,
        )
    }

    /// Returns the 1-indexed day of the year, which is also the Gregorian
    /// day of the year.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        match self.period {
            WhensdayPeriod::Weensday => 1,
            WhensdayPeriod::Month(month) => {
                let preceding: u16 = WhensdayMonth::ALL[..usize::from(month.index())]
                    .iter()
                    .map(|m| u16::from(m.days_in_month(self.year)))
                    .sum();
                // Weensday occupies the first day of the year.
                preceding + u16::from(self.day) + 1
            }
        }
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns Weensday or the month of this date.
    #[inline]
    #[must_use]
    pub const fn period(&self) -> WhensdayPeriod {
        self.period
    }

    /// Returns the month, or `None` for Weensday.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> Option<WhensdayMonth> {
        match self.period {
            WhensdayPeriod::Weensday => None,
            WhensdayPeriod::Month(month) => Some(month),
        }
    }

    /// Returns -1 for Weensday, otherwise the 0-based month index.
    #[inline]
    #[must_use]
    pub const fn month_index(&self) -> i8 {
        self.period.index()
    }

    /// Returns the 1-based day of the month; always 1 for Weensday.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns whether this date is Weensday.
    #[inline]
    #[must_use]
    pub const fn is_weensday(&self) -> bool {
        matches!(self.period, WhensdayPeriod::Weensday)
    }

    /// Returns whether this date is the Sol leap day.
    #[inline]
    #[must_use]
    pub const fn is_leap_day(&self) -> bool {
        matches!(self.period, WhensdayPeriod::Month(WhensdayMonth::Sol))
            && self.day == LEAP_DAY_OF_SOL
            && utils::is_leap_year(self.year as i64)
    }

    /// Returns the number of days in this date's year, Weensday included.
    #[inline]
    #[must_use]
    pub const fn days_in_year(&self) -> u16 {
        utils::days_in_year(self.year as i64)
    }

    /// Returns the Gregorian weekday, where 0 is Sunday.
    #[must_use]
    pub fn weekday(&self) -> u8 {
        self.to_day_instant().weekday()
    }
}

fn check_year(year: i32) -> WhensdayResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(WhensdayError::range().with_enum(ErrorMessage::YearOutOfRange));
    }
    Ok(())
}

impl Writeable for WhensdayDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str(self.period.name())?;
        if !self.is_weensday() {
            sink.write_char(' ')?;
            self.day.write_to(sink)?;
        }
        sink.write_str(", ")?;
        self.year.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let day = if self.is_weensday() {
            LengthHint::exact(0)
        } else {
            LengthHint::exact(1) + self.day.writeable_length_hint()
        };
        LengthHint::exact(self.period.name().len() + 2) + day + self.year.writeable_length_hint()
    }
}

impl_display_with_writeable!(WhensdayDate);

#[cfg(test)]
mod tests;
