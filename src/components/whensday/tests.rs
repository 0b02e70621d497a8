use super::*;

use crate::{error::ErrorKind, GregorianDate};
use alloc::{format, vec::Vec};

fn gregorian(year: i32, month_index: i32, day: i32) -> DayInstant {
    GregorianDate::try_new(year, month_index, day)
        .unwrap()
        .to_day_instant()
}

#[test]
fn january_first_is_weensday() {
    let date = WhensdayDate::from_day_instant(gregorian(2024, 0, 1));
    assert!(date.is_weensday());
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), None);
    assert_eq!(date.month_index(), -1);
    assert_eq!(date.day(), 1);
    assert!(!date.is_leap_day());
}

#[test]
fn january_second_opens_snowlyn() {
    let date = WhensdayDate::from_day_instant(gregorian(2024, 0, 2));
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), Some(WhensdayMonth::Snowlyn));
    assert_eq!(date.day(), 1);
    assert!(!date.is_weensday());
}

#[test]
fn sol_leap_day_in_leap_year() {
    let date = WhensdayDate::from_day_instant(gregorian(2024, 6, 2));
    assert_eq!(date.month(), Some(WhensdayMonth::Sol));
    assert_eq!(date.day(), 15);
    assert!(date.is_leap_day());

    let sol_29 = WhensdayDate::try_new(2024, WhensdayMonth::Sol, 29).unwrap();
    assert!(!sol_29.is_leap_day());
}

#[test]
fn sol_in_common_year() {
    let day_15 = WhensdayDate::try_new(2023, WhensdayMonth::Sol, 15).unwrap();
    assert!(!day_15.is_leap_day());

    let err = WhensdayDate::try_new(2023, WhensdayMonth::Sol, 29).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn last_day_of_year_is_zephania_28() {
    for year in [2023, 2024] {
        let date = WhensdayDate::from_day_instant(gregorian(year, 11, 31));
        assert_eq!(date.month(), Some(WhensdayMonth::Zephania));
        assert_eq!(date.day(), 28);
    }
}

#[test]
fn year_lengths_match_gregorian() {
    for year in 1600..=2400 {
        let month_days: u16 = WhensdayMonth::ALL
            .iter()
            .map(|m| u16::from(m.days_in_month(year)))
            .sum();
        // Weensday adds one day outside the months.
        assert_eq!(
            month_days + 1,
            utils::days_in_year(i64::from(year)),
            "year {year}"
        );
    }
}

#[test]
fn every_day_round_trips_from_gregorian() {
    let start = gregorian(1899, 0, 1).epoch_days();
    let end = gregorian(2101, 11, 31).epoch_days();
    for epoch_days in start..=end {
        let instant = DayInstant::try_from_epoch_days(epoch_days).unwrap();
        let whensday = WhensdayDate::from_day_instant(instant);
        assert_eq!(whensday.to_day_instant(), instant, "epoch day {epoch_days}");
        assert_eq!(
            whensday.day_of_year(),
            GregorianDate::from_day_instant(instant).day_of_year()
        );
    }
}

#[test]
fn every_whensday_date_round_trips() {
    for year in [1900, 2000, 2023, 2024, -4, 0] {
        let mut dates = Vec::new();
        dates.push(WhensdayDate::weensday(year).unwrap());
        for month in WhensdayMonth::ALL {
            for day in 1..=i32::from(month.days_in_month(year)) {
                dates.push(WhensdayDate::try_new(year, month, day).unwrap());
            }
        }
        assert_eq!(dates.len(), usize::from(dates[0].days_in_year()));

        let first = dates[0].to_day_instant();
        assert_eq!(GregorianDate::from_day_instant(first).month_index(), 0);
        assert_eq!(GregorianDate::from_day_instant(first).day(), 1);

        for (offset, date) in dates.iter().enumerate() {
            let instant = date.to_day_instant();
            assert_eq!(first.days_until(&instant), offset as i64);
            assert_eq!(WhensdayDate::from_day_instant(instant), *date);
        }

        let leap_days = dates.iter().filter(|d| d.is_leap_day()).count();
        let expected = usize::from(utils::is_leap_year(i64::from(year)));
        assert_eq!(leap_days, expected, "year {year}");
    }
}

#[test]
fn overflowing_day_of_year_clamps_to_zephania() {
    let clamped = WhensdayDate::from_year_and_day_of_year(2023, 366);
    assert_eq!(clamped.month(), Some(WhensdayMonth::Zephania));
    assert_eq!(clamped.day(), 28);

    let clamped = WhensdayDate::from_year_and_day_of_year(2024, 400);
    assert_eq!(clamped.month(), Some(WhensdayMonth::Zephania));
    assert_eq!(clamped.day(), 28);
}

#[test]
fn fields_with_weensday_sentinel() {
    assert!(WhensdayDate::try_from_fields(2024, -1, 1)
        .unwrap()
        .is_weensday());
    assert!(WhensdayDate::try_from_fields(2024, -1, 2).is_err());
    assert!(WhensdayDate::try_from_fields(2024, 13, 1).is_err());
    assert!(WhensdayDate::try_from_fields(2024, -2, 1).is_err());
    assert!(WhensdayDate::try_from_fields(2024, 12, 0).is_err());
    assert!(WhensdayDate::try_from_fields(MAX_YEAR + 1, 0, 1).is_err());
    assert_eq!(
        WhensdayDate::try_from_fields(2024, 6, 15).unwrap(),
        WhensdayDate::try_new(2024, WhensdayMonth::Sol, 15).unwrap()
    );
}

#[test]
fn month_index_lookups() {
    assert_eq!(WhensdayMonth::try_from_index(6).unwrap(), WhensdayMonth::Sol);
    assert_eq!(
        WhensdayMonth::try_from_index(-1).unwrap_err(),
        WhensdayError::range().with_enum(ErrorMessage::WeensdayHasNoMonth)
    );
    assert!(WhensdayMonth::try_from_index(13).is_err());
    assert_eq!(WhensdayMonth::Snowlyn.previous(), None);
    assert_eq!(WhensdayMonth::Zephania.next(), None);
    assert_eq!(
        WhensdayMonth::Peachcup.next(),
        Some(WhensdayMonth::LEAP_MONTH)
    );
}

#[test]
fn month_codes() {
    assert_eq!(WhensdayMonth::Zephania.month_code(), tinystr!(4, "M13"));
    assert_eq!(WhensdayPeriod::Weensday.month_code(), tinystr!(4, "W00"));
    assert_eq!(
        WhensdayPeriod::try_from_month_code(&tinystr!(4, "M07")).unwrap(),
        WhensdayPeriod::Month(WhensdayMonth::Sol)
    );
    assert_eq!(
        WhensdayPeriod::try_from_month_code(&tinystr!(4, "W00")).unwrap(),
        WhensdayPeriod::Weensday
    );
    assert!(WhensdayPeriod::try_from_month_code(&tinystr!(4, "M14")).is_err());
}

#[test]
fn formatting() {
    let leap_day = WhensdayDate::try_new(2024, WhensdayMonth::Sol, 15).unwrap();
    writeable::assert_writeable_eq!(leap_day, "Sol 15, 2024");
    writeable::assert_writeable_eq!(WhensdayDate::weensday(2024).unwrap(), "Weensday, 2024");
}
