//! This module implements recurring schedules and their per-day state.
//!
//! A [`Schedule`] repeats a pattern of `on` days followed by `off` days
//! from its start day. Booked holidays, bonus days and exemption windows
//! override the pattern, in that order of precedence:
//!
//! 1. a booked holiday is [`ScheduleState::Holiday`],
//! 2. a bonus day is [`ScheduleState::Bonus`],
//! 3. a day inside any exemption window is [`ScheduleState::Exemption`],
//! 4. otherwise the pattern decides between [`ScheduleState::On`] and
//!    [`ScheduleState::Off`].
//!
//! Evaluation is a pure read of the schedule and never fails.

use alloc::{collections::BTreeMap, collections::BTreeSet, string::String, vec::Vec};

use num_traits::ToPrimitive;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{day_instant::DayInstant, error::ErrorMessage, WhensdayError, WhensdayResult};

/// The state of a schedule on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleState {
    On,
    Off,
    Holiday,
    Bonus,
    Exemption,
}

impl ScheduleState {
    /// Returns the lowercase name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Holiday => "holiday",
            Self::Bonus => "bonus",
            Self::Exemption => "exemption",
        }
    }

    /// Returns whether the state is reported for a day, which is every
    /// state except `Off`.
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl Writeable for ScheduleState {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str(self.as_str())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(self.as_str().len())
    }
}

impl_display_with_writeable!(ScheduleState);

/// A repeating cycle of `on` days followed by `off` days.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchedulePattern {
    on: u32,
    off: u32,
}

impl SchedulePattern {
    /// Creates a pattern, rejecting negative day counts.
    pub fn try_new(on: i64, off: i64) -> WhensdayResult<Self> {
        if on < 0 || off < 0 {
            return Err(WhensdayError::range().with_enum(ErrorMessage::PatternNegative));
        }
        let on = on
            .to_u32()
            .ok_or(WhensdayError::range().with_message("Pattern length is too large."))?;
        let off = off
            .to_u32()
            .ok_or(WhensdayError::range().with_message("Pattern length is too large."))?;
        Ok(Self { on, off })
    }

    #[inline]
    #[must_use]
    pub const fn on(&self) -> u32 {
        self.on
    }

    #[inline]
    #[must_use]
    pub const fn off(&self) -> u32 {
        self.off
    }

    /// Returns the number of days in one cycle.
    #[inline]
    #[must_use]
    pub const fn cycle_length(&self) -> u64 {
        self.on as u64 + self.off as u64
    }

    /// Returns the pattern state `days_since_start` days after the start.
    ///
    /// Days before the start and every day of an empty pattern are `Off`.
    #[must_use]
    pub const fn state_at(&self, days_since_start: i64) -> ScheduleState {
        let length = self.cycle_length();
        if days_since_start < 0 || length == 0 {
            return ScheduleState::Off;
        }
        if (days_since_start as u64) % length < self.on as u64 {
            ScheduleState::On
        } else {
            ScheduleState::Off
        }
    }
}

/// An inclusive window of days during which the pattern is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exemption {
    start: DayInstant,
    end: DayInstant,
    resume_after: u32,
}

impl Exemption {
    /// Creates an exemption window covering `start..=end`.
    ///
    /// `resume_after` is the 0-based day of the pattern to resume on. It is
    /// stored and returned as is; it does not affect evaluation.
    pub fn try_new(start: DayInstant, end: DayInstant, resume_after: i64) -> WhensdayResult<Self> {
        if end < start {
            return Err(WhensdayError::range().with_enum(ErrorMessage::ExemptionEndsBeforeStart));
        }
        if resume_after < 0 {
            return Err(WhensdayError::range().with_enum(ErrorMessage::ResumeAfterNegative));
        }
        let resume_after = resume_after
            .to_u32()
            .ok_or(WhensdayError::range().with_message("Resume day is too large."))?;
        Ok(Self {
            start,
            end,
            resume_after,
        })
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> DayInstant {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> DayInstant {
        self.end
    }

    #[inline]
    #[must_use]
    pub const fn resume_after(&self) -> u32 {
        self.resume_after
    }

    /// Returns whether `day` falls within the window, both ends included.
    #[inline]
    #[must_use]
    pub fn contains(&self, day: DayInstant) -> bool {
        self.start <= day && day <= self.end
    }
}

/// A recurring on/off schedule with its overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    id: String,
    start: DayInstant,
    end: Option<DayInstant>,
    pattern: SchedulePattern,
    booked_holidays: BTreeSet<DayInstant>,
    bonus_days: BTreeSet<DayInstant>,
    exemptions: Vec<Exemption>,
    completed_days: BTreeSet<DayInstant>,
    is_visible: bool,
}

impl Schedule {
    /// Creates a visible schedule with no overrides.
    pub fn new(id: impl Into<String>, start: DayInstant, pattern: SchedulePattern) -> Self {
        Self {
            id: id.into(),
            start,
            end: None,
            pattern,
            booked_holidays: BTreeSet::new(),
            bonus_days: BTreeSet::new(),
            exemptions: Vec::new(),
            completed_days: BTreeSet::new(),
            is_visible: true,
        }
    }

    /// Sets the end day. The end day is kept for the host and is not
    /// consulted by [`Schedule::evaluate`].
    #[must_use]
    pub fn with_end_date(mut self, end: DayInstant) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn with_booked_holidays(mut self, days: impl IntoIterator<Item = DayInstant>) -> Self {
        self.booked_holidays.extend(days);
        self
    }

    #[must_use]
    pub fn with_bonus_days(mut self, days: impl IntoIterator<Item = DayInstant>) -> Self {
        self.bonus_days.extend(days);
        self
    }

    /// Appends exemption windows, keeping their order.
    #[must_use]
    pub fn with_exemptions(mut self, exemptions: impl IntoIterator<Item = Exemption>) -> Self {
        self.exemptions.extend(exemptions);
        self
    }

    #[must_use]
    pub fn with_completed_days(mut self, days: impl IntoIterator<Item = DayInstant>) -> Self {
        self.completed_days.extend(days);
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    /// Books `day` as a holiday. Returns `false` if it was already booked.
    pub fn book_holiday(&mut self, day: DayInstant) -> bool {
        self.booked_holidays.insert(day)
    }

    /// Removes a booked holiday. Returns `false` if it was not booked.
    pub fn cancel_holiday(&mut self, day: DayInstant) -> bool {
        self.booked_holidays.remove(&day)
    }

    /// Adds a bonus day. Returns `false` if it was already present.
    pub fn add_bonus_day(&mut self, day: DayInstant) -> bool {
        self.bonus_days.insert(day)
    }

    pub fn add_exemption(&mut self, exemption: Exemption) {
        self.exemptions.push(exemption);
    }

    /// Marks `day` as completed. Returns `false` if it already was.
    pub fn mark_completed(&mut self, day: DayInstant) -> bool {
        self.completed_days.insert(day)
    }

    /// Clears the completion mark of `day`. Returns `false` if it had none.
    pub fn unmark_completed(&mut self, day: DayInstant) -> bool {
        self.completed_days.remove(&day)
    }

    pub fn set_visible(&mut self, is_visible: bool) {
        self.is_visible = is_visible;
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn start_date(&self) -> DayInstant {
        self.start
    }

    #[must_use]
    pub const fn end_date(&self) -> Option<DayInstant> {
        self.end
    }

    #[must_use]
    pub const fn pattern(&self) -> SchedulePattern {
        self.pattern
    }

    #[must_use]
    pub const fn booked_holidays(&self) -> &BTreeSet<DayInstant> {
        &self.booked_holidays
    }

    #[must_use]
    pub const fn bonus_days(&self) -> &BTreeSet<DayInstant> {
        &self.bonus_days
    }

    #[must_use]
    pub fn exemptions(&self) -> &[Exemption] {
        &self.exemptions
    }

    #[must_use]
    pub const fn completed_days(&self) -> &BTreeSet<DayInstant> {
        &self.completed_days
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Returns whether `day` has been marked completed. Completion has no
    /// effect on the evaluated state.
    #[must_use]
    pub fn is_completed(&self, day: DayInstant) -> bool {
        self.completed_days.contains(&day)
    }

    /// Returns the state of this schedule on `day`.
    #[must_use]
    pub fn evaluate(&self, day: DayInstant) -> ScheduleState {
        let state = if self.booked_holidays.contains(&day) {
            ScheduleState::Holiday
        } else if self.bonus_days.contains(&day) {
            ScheduleState::Bonus
        } else if self.exemptions.iter().any(|e| e.contains(day)) {
            ScheduleState::Exemption
        } else {
            self.pattern.state_at(self.start.days_until(&day))
        };

        #[cfg(feature = "log")]
        log::trace!(
            "schedule {:?} on epoch day {}: {}",
            self.id,
            day.epoch_days(),
            state.as_str()
        );

        state
    }
}

/// Returns the state of `schedule` on `day`.
#[inline]
#[must_use]
pub fn evaluate(schedule: &Schedule, day: DayInstant) -> ScheduleState {
    schedule.evaluate(day)
}

/// A schedule reported for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleForDay<'a> {
    pub schedule: &'a Schedule,
    pub state: ScheduleState,
    pub is_completed: bool,
}

/// Returns every visible schedule that is not `Off` on `day`, in input order.
#[must_use]
pub fn schedules_for_day(schedules: &[Schedule], day: DayInstant) -> Vec<ScheduleForDay<'_>> {
    schedules
        .iter()
        .filter(|schedule| schedule.is_visible())
        .filter_map(|schedule| {
            let state = schedule.evaluate(day);
            state.is_active().then(|| ScheduleForDay {
                schedule,
                state,
                is_completed: schedule.is_completed(day),
            })
        })
        .collect()
}

/// Runs [`schedules_for_day`] for each of `days`, leaving out days with no
/// reported schedule.
#[must_use]
pub fn schedules_by_day(
    schedules: &[Schedule],
    days: impl IntoIterator<Item = DayInstant>,
) -> BTreeMap<DayInstant, Vec<ScheduleForDay<'_>>> {
    days.into_iter()
        .filter_map(|day| {
            let reported = schedules_for_day(schedules, day);
            (!reported.is_empty()).then_some((day, reported))
        })
        .collect()
}

#[cfg(test)]
mod tests;
