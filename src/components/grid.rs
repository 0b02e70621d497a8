//! This module implements month grids and month navigation.
//!
//! A [`MonthGrid`] lays out the days of one displayed month in week rows.
//! The grid starts with padding cells so that each day lands in the
//! column of its Gregorian weekday, relative to the configured
//! [`WeekStart`]. Weensday belongs to no month and never appears in a
//! grid.

use alloc::vec::Vec;

use crate::{
    components::{
        calendar::{CalendarDate, CalendarSystem},
        whensday::{WhensdayDate, WhensdayMonth, WhensdayPeriod},
    },
    day_instant::DayInstant,
    error::ErrorMessage,
    gregorian::{GregorianDate, GregorianMonth},
    WhensdayError, WhensdayResult, MAX_YEAR, MIN_YEAR,
};

/// Number of columns in a grid row.
pub const DAYS_IN_WEEK: usize = 7;

/// The weekday shown in the first column of a grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekStart {
    #[default]
    Sunday = 0,
    Monday = 1,
}

impl WeekStart {
    /// Returns the weekday index of the first column, where 0 is Sunday.
    #[inline]
    #[must_use]
    pub const fn weekday(self) -> u8 {
        self as u8
    }

    /// Returns the 0-based column of `weekday` in a grid row.
    #[inline]
    #[must_use]
    pub const fn column_of(self, weekday: u8) -> u8 {
        (weekday % 7 + 7 - self.weekday()) % 7
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = WhensdayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            _ => Err(WhensdayError::range()
                .with_message("Week start must be 0 (Sunday) or 1 (Monday).")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum MonthOf {
    Gregorian(GregorianMonth),
    Whensday(WhensdayMonth),
}

/// A month displayed in a grid: a calendar system, a year, and a month
/// of that system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayMonth {
    year: i32,
    month: MonthOf,
}

impl DisplayMonth {
    /// Creates a `DisplayMonth` from a 0-based month index.
    ///
    /// Weensday (-1) is rejected for the Whensday system since it has no grid.
    pub fn try_new(system: CalendarSystem, year: i32, month_index: i32) -> WhensdayResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(WhensdayError::range().with_enum(ErrorMessage::YearOutOfRange));
        }
        let month = match system {
            CalendarSystem::Gregorian => {
                MonthOf::Gregorian(GregorianMonth::try_from_index(month_index)?)
            }
            CalendarSystem::Whensday => {
                MonthOf::Whensday(WhensdayMonth::try_from_index(month_index)?)
            }
        };
        Ok(Self { year, month })
    }

    /// Returns the month containing `instant` in `system`.
    ///
    /// Weensday is displayed as the first month of its year.
    #[must_use]
    pub fn containing(instant: DayInstant, system: CalendarSystem) -> Self {
        let date = CalendarDate::from_day_instant(instant, system);
        Self::of_date(&date)
    }

    fn of_date(date: &CalendarDate) -> Self {
        let month = match date {
            CalendarDate::Gregorian(date) => MonthOf::Gregorian(date.month()),
            CalendarDate::Whensday(date) => match date.period() {
                WhensdayPeriod::Weensday => MonthOf::Whensday(WhensdayMonth::Snowlyn),
                WhensdayPeriod::Month(month) => MonthOf::Whensday(month),
            },
        };
        Self {
            year: date.year(),
            month,
        }
    }

    #[must_use]
    pub const fn system(&self) -> CalendarSystem {
        match self.month {
            MonthOf::Gregorian(_) => CalendarSystem::Gregorian,
            MonthOf::Whensday(_) => CalendarSystem::Whensday,
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 0-based month index.
    #[must_use]
    pub const fn month_index(&self) -> u8 {
        match self.month {
            MonthOf::Gregorian(month) => month.index(),
            MonthOf::Whensday(month) => month.index(),
        }
    }

    /// Returns the month name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.month {
            MonthOf::Gregorian(month) => month.name(),
            MonthOf::Whensday(month) => month.name(),
        }
    }

    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        match self.month {
            MonthOf::Gregorian(month) => month.days_in_month(self.year),
            MonthOf::Whensday(month) => month.days_in_month(self.year),
        }
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(&self) -> CalendarDate {
        match self.month {
            MonthOf::Gregorian(month) => {
                CalendarDate::Gregorian(GregorianDate::new_unchecked(self.year, month, 1))
            }
            MonthOf::Whensday(month) => CalendarDate::Whensday(WhensdayDate::new_unchecked(
                self.year,
                WhensdayPeriod::Month(month),
                1,
            )),
        }
    }

    /// Returns the following month, rolling over into the next year.
    pub fn next(&self) -> WhensdayResult<Self> {
        let (year, month) = match self.month {
            MonthOf::Gregorian(month) => match month.next() {
                Some(next) => (self.year, MonthOf::Gregorian(next)),
                None => (self.year + 1, MonthOf::Gregorian(GregorianMonth::January)),
            },
            MonthOf::Whensday(month) => match month.next() {
                Some(next) => (self.year, MonthOf::Whensday(next)),
                None => (self.year + 1, MonthOf::Whensday(WhensdayMonth::Snowlyn)),
            },
        };
        Self::checked(year, month)
    }

    /// Returns the preceding month, rolling back into the previous year.
    pub fn previous(&self) -> WhensdayResult<Self> {
        let (year, month) = match self.month {
            MonthOf::Gregorian(month) => match month.previous() {
                Some(previous) => (self.year, MonthOf::Gregorian(previous)),
                None => (self.year - 1, MonthOf::Gregorian(GregorianMonth::December)),
            },
            MonthOf::Whensday(month) => match month.previous() {
                Some(previous) => (self.year, MonthOf::Whensday(previous)),
                None => (self.year - 1, MonthOf::Whensday(WhensdayMonth::Zephania)),
            },
        };
        Self::checked(year, month)
    }

    fn checked(year: i32, month: MonthOf) -> WhensdayResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(WhensdayError::range().with_enum(ErrorMessage::YearOutOfRange));
        }
        Ok(Self { year, month })
    }

    /// Returns the month of `system` containing the first day of this month.
    #[must_use]
    pub fn convert_to(&self, system: CalendarSystem) -> Self {
        Self::of_date(&self.first_day().convert_to(system))
    }
}

/// A cell of a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// A blank cell ahead of the first day of the month.
    Padding,
    /// A day of the displayed month.
    Day {
        date: CalendarDate,
        instant: DayInstant,
        is_today: bool,
    },
}

impl GridCell {
    /// Returns the day instant of a day cell.
    #[must_use]
    pub const fn instant(&self) -> Option<DayInstant> {
        match self {
            Self::Padding => None,
            Self::Day { instant, .. } => Some(*instant),
        }
    }
}

/// The cells of one displayed month, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: DisplayMonth,
    week_start: WeekStart,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Lays out `month`, flagging the cell equal to `today` if there is one.
    #[must_use]
    pub fn new(month: DisplayMonth, week_start: WeekStart, today: Option<DayInstant>) -> Self {
        let system = month.system();
        let first = month.first_day().to_day_instant();
        let padding = usize::from(week_start.column_of(first.weekday()));
        let days = usize::from(month.days_in_month());

        let mut cells = Vec::with_capacity(padding + days);
        cells.resize(padding, GridCell::Padding);
        for offset in 0..days {
            // Every day of a displayed month lies within its year.
            let instant = DayInstant::new_unchecked(first.epoch_days() + offset as i64);
            cells.push(GridCell::Day {
                date: CalendarDate::from_day_instant(instant, system),
                instant,
                is_today: today == Some(instant),
            });
        }

        Self {
            month,
            week_start,
            cells,
        }
    }

    #[must_use]
    pub const fn month(&self) -> &DisplayMonth {
        &self.month
    }

    #[must_use]
    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Returns the number of padding cells before the first day.
    #[must_use]
    pub fn leading_padding(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, GridCell::Padding))
            .count()
    }

    /// Returns the grid split into rows of [`DAYS_IN_WEEK`] cells. The last
    /// row may be shorter.
    pub fn weeks(&self) -> core::slice::Chunks<'_, GridCell> {
        self.cells.chunks(DAYS_IN_WEEK)
    }

    /// Returns the day instants of the displayed month in order.
    pub fn day_instants(&self) -> impl Iterator<Item = DayInstant> + '_ {
        self.cells.iter().filter_map(GridCell::instant)
    }
}
