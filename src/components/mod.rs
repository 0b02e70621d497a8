//! The calendar and scheduling components provided by `whensday_rs`.
//!
//! Dates in either calendar system are converted through a shared
//! [`DayInstant`](crate::DayInstant), which also keys every schedule
//! lookup.

pub mod calendar;
pub mod grid;
pub mod schedule;

mod whensday;

#[doc(inline)]
pub use calendar::{CalendarDate, CalendarSystem};
#[doc(inline)]
pub use grid::{DisplayMonth, GridCell, MonthGrid, WeekStart};
#[doc(inline)]
pub use schedule::{
    evaluate, schedules_by_day, schedules_for_day, Exemption, Schedule, ScheduleForDay,
    SchedulePattern, ScheduleState,
};
#[doc(inline)]
pub use whensday::{WhensdayDate, WhensdayMonth, WhensdayPeriod};
