use super::*;

use crate::{error::ErrorKind, GregorianDate};
use alloc::{format, vec};

fn day(year: i32, month_index: i32, day: i32) -> DayInstant {
    GregorianDate::try_new(year, month_index, day)
        .unwrap()
        .to_day_instant()
}

fn pattern(on: i64, off: i64) -> SchedulePattern {
    SchedulePattern::try_new(on, off).unwrap()
}

#[test]
fn pattern_cycle() {
    let start = day(2024, 0, 1);
    let schedule = Schedule::new("shift", start, pattern(2, 3));
    let expected = [
        ScheduleState::On,
        ScheduleState::On,
        ScheduleState::Off,
        ScheduleState::Off,
        ScheduleState::Off,
    ];
    for offset in 0..50 {
        let target = start.add_days(offset).unwrap();
        assert_eq!(
            schedule.evaluate(target),
            expected[(offset % 5) as usize],
            "offset {offset}"
        );
    }
}

#[test]
fn before_start_is_off() {
    let start = day(2024, 5, 10);
    let always_on = Schedule::new("always", start, pattern(1, 0));
    assert_eq!(always_on.evaluate(start), ScheduleState::On);
    for offset in 1..=30 {
        let before = start.add_days(-offset).unwrap();
        assert_eq!(always_on.evaluate(before), ScheduleState::Off);
    }
}

#[test]
fn empty_pattern_is_always_off() {
    let start = day(2024, 0, 1);
    let schedule = Schedule::new("empty", start, SchedulePattern::default());
    assert_eq!(schedule.pattern().cycle_length(), 0);
    for offset in -10..40 {
        let target = start.add_days(offset).unwrap();
        assert_eq!(schedule.evaluate(target), ScheduleState::Off);
    }
}

#[test]
fn holiday_takes_precedence() {
    let start = day(2024, 0, 1);
    let target = day(2024, 0, 3);
    let window = Exemption::try_new(day(2024, 0, 2), day(2024, 0, 4), 0).unwrap();
    let schedule = Schedule::new("layered", start, pattern(5, 0))
        .with_booked_holidays([target])
        .with_bonus_days([target])
        .with_exemptions([window]);
    assert_eq!(schedule.evaluate(target), ScheduleState::Holiday);

    let mut schedule = schedule;
    assert!(schedule.cancel_holiday(target));
    assert_eq!(schedule.evaluate(target), ScheduleState::Bonus);
}

#[test]
fn bonus_beats_exemption() {
    let start = day(2024, 0, 1);
    let target = day(2024, 0, 3);
    let window = Exemption::try_new(start, day(2024, 0, 31), 2).unwrap();
    let mut schedule = Schedule::new("bonus", start, pattern(0, 4)).with_exemptions([window]);
    assert_eq!(schedule.evaluate(target), ScheduleState::Exemption);
    assert!(schedule.add_bonus_day(target));
    assert!(!schedule.add_bonus_day(target));
    assert_eq!(schedule.evaluate(target), ScheduleState::Bonus);
}

#[test]
fn exemption_windows_are_inclusive() {
    let start = day(2024, 0, 1);
    let first = Exemption::try_new(day(2024, 1, 1), day(2024, 1, 3), 0).unwrap();
    let second = Exemption::try_new(day(2024, 1, 10), day(2024, 1, 10), 1).unwrap();
    let schedule =
        Schedule::new("exempt", start, pattern(1, 0)).with_exemptions([first, second]);

    assert_eq!(schedule.evaluate(day(2024, 0, 31)), ScheduleState::On);
    assert_eq!(schedule.evaluate(day(2024, 1, 1)), ScheduleState::Exemption);
    assert_eq!(schedule.evaluate(day(2024, 1, 3)), ScheduleState::Exemption);
    assert_eq!(schedule.evaluate(day(2024, 1, 4)), ScheduleState::On);
    assert_eq!(schedule.evaluate(day(2024, 1, 10)), ScheduleState::Exemption);
    assert_eq!(schedule.exemptions()[1].resume_after(), 1);
}

#[test]
fn resume_after_does_not_change_state() {
    let start = day(2024, 0, 1);
    let window = |resume_after| {
        Exemption::try_new(day(2024, 0, 5), day(2024, 0, 8), resume_after).unwrap()
    };
    let early = Schedule::new("a", start, pattern(2, 3)).with_exemptions([window(0)]);
    let late = Schedule::new("b", start, pattern(2, 3)).with_exemptions([window(4)]);
    for offset in 0..30 {
        let target = start.add_days(offset).unwrap();
        assert_eq!(early.evaluate(target), late.evaluate(target));
    }
}

#[test]
fn end_date_is_not_consulted() {
    let start = day(2024, 0, 1);
    let schedule = Schedule::new("ended", start, pattern(1, 0)).with_end_date(day(2024, 0, 10));
    assert_eq!(schedule.end_date(), Some(day(2024, 0, 10)));
    assert_eq!(schedule.evaluate(day(2024, 1, 1)), ScheduleState::On);
}

#[test]
fn construction_errors() {
    let err = SchedulePattern::try_new(-1, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(SchedulePattern::try_new(2, -3).is_err());
    assert!(SchedulePattern::try_new(i64::from(u32::MAX) + 1, 0).is_err());

    let start = day(2024, 0, 10);
    assert!(Exemption::try_new(start, day(2024, 0, 9), 0).is_err());
    assert!(Exemption::try_new(start, start, -1).is_err());
    assert!(Exemption::try_new(start, start, 0).is_ok());
}

#[test]
fn completion_is_reported_separately() {
    let start = day(2024, 0, 1);
    let mut schedule = Schedule::new("done", start, pattern(1, 1));
    assert!(schedule.mark_completed(start));
    assert!(schedule.is_completed(start));
    assert_eq!(schedule.evaluate(start), ScheduleState::On);

    let off_day = start.add_days(1).unwrap();
    schedule.mark_completed(off_day);
    assert_eq!(schedule.evaluate(off_day), ScheduleState::Off);
    assert!(schedule.unmark_completed(off_day));
    assert!(!schedule.is_completed(off_day));
}

#[test]
fn schedules_for_a_day() {
    let start = day(2024, 0, 1);
    let schedules = vec![
        Schedule::new("on", start, pattern(1, 0)).with_completed_days([start]),
        Schedule::new("off", start, pattern(0, 1)),
        Schedule::new("hidden", start, pattern(1, 0)).with_visibility(false),
        Schedule::new("holiday", start, pattern(0, 1)).with_booked_holidays([start]),
    ];

    let reported = schedules_for_day(&schedules, start);
    assert_eq!(reported.len(), 2);
    assert_eq!(reported[0].schedule.id(), "on");
    assert_eq!(reported[0].state, ScheduleState::On);
    assert!(reported[0].is_completed);
    assert_eq!(reported[1].schedule.id(), "holiday");
    assert_eq!(reported[1].state, ScheduleState::Holiday);
    assert!(!reported[1].is_completed);

    assert_eq!(evaluate(&schedules[3], start), ScheduleState::Holiday);
}

#[test]
fn schedules_over_a_range() {
    let start = day(2024, 0, 1);
    let schedules = vec![Schedule::new("alternate", start, pattern(1, 1))];
    let days = (0..6).map(|offset| start.add_days(offset).unwrap());

    let by_day = schedules_by_day(&schedules, days);
    assert_eq!(by_day.len(), 3);
    assert!(by_day.keys().all(|d| start.days_until(d) % 2 == 0));
}

#[test]
fn state_names() {
    writeable::assert_writeable_eq!(ScheduleState::Exemption, "exemption");
    assert_eq!(ScheduleState::Off.as_str(), "off");
    assert!(!ScheduleState::Off.is_active());
    assert!(ScheduleState::Bonus.is_active());
}
