//! This module implements parsing of date strings and string output for
//! day values.

use core::str::FromStr;

use ixdtf::parsers::IxdtfParser;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    components::{CalendarDate, CalendarSystem},
    day_instant::DayInstant,
    error::ErrorMessage,
    gregorian::GregorianDate,
    utils, WhensdayError, WhensdayResult, WhensdayUnwrap,
};

/// Parses an IXDTF string into the [`DayInstant`] of its calendar date.
///
/// Any time of day, offset or annotation is accepted and discarded; the
/// date as written is the day.
pub fn parse_day_instant(source: &str) -> WhensdayResult<DayInstant> {
    let record = IxdtfParser::from_str(source).parse()?;
    let date = record
        .date
        .ok_or(WhensdayError::syntax().with_enum(ErrorMessage::ParserNeedsDate))?;
    // NOTE: the parser rejects months outside of 1-12.
    let month_index = date.month.checked_sub(1).whensday_unwrap()?;
    GregorianDate::try_new(date.year, i32::from(month_index), i32::from(date.day))
        .map(|date| date.to_day_instant())
}

impl FromStr for DayInstant {
    type Err = WhensdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_day_instant(s)
    }
}

/// An ISO 8601 calendar date, `YYYY-MM-DD`, with month and day in 1-based
/// form. Years outside of 0..=9999 are written in the six digit extended
/// form with a sign.
#[derive(Debug)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.0) { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_four_digit_year(year, sink)
    } else {
        write_extended_year(year, sink)
    }
}

fn write_four_digit_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    for divisor in [1_000, 100, 10, 1] {
        (year / divisor % 10).write_to(sink)?;
    }
    Ok(())
}

fn write_extended_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    sink.write_char(if year < 0 { '-' } else { '+' })?;
    let magnitude = year.unsigned_abs();
    for divisor in [100_000, 10_000, 1_000, 100, 10, 1] {
        (magnitude / divisor % 10).write_to(sink)?;
    }
    Ok(())
}

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

impl From<DayInstant> for FormattableDate {
    fn from(value: DayInstant) -> Self {
        let (year, month, day) = utils::civil_from_epoch_days(value.epoch_days());
        // NOTE: `DayInstant` is bounded to `MIN_YEAR..=MAX_YEAR`.
        Self(year as i32, month, day)
    }
}

impl Writeable for DayInstant {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDate::from(*self).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDate::from(*self).writeable_length_hint()
    }
}

/// An optional day written as a date of a calendar system, such as
/// `Sol 15, 2024`, or `Not Set` when there is no day.
#[derive(Debug, Clone, Copy)]
pub struct FormattableCalendarDay {
    pub day: Option<DayInstant>,
    pub system: CalendarSystem,
}

const NOT_SET: &str = "Not Set";

impl Writeable for FormattableCalendarDay {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self.day {
            Some(day) => CalendarDate::from_day_instant(day, self.system).write_to(sink),
            None => sink.write_str(NOT_SET),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match self.day {
            Some(day) => CalendarDate::from_day_instant(day, self.system).writeable_length_hint(),
            None => LengthHint::exact(NOT_SET.len()),
        }
    }
}

impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(DayInstant);
impl_display_with_writeable!(FormattableCalendarDay);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alloc::format;
    use writeable::assert_writeable_eq;

    #[test]
    fn parse_dates() {
        let day = DayInstant::from_str("2024-01-02").unwrap();
        assert_eq!(day.epoch_milliseconds(), 1_704_153_600_000);

        let compact = DayInstant::from_str("20240102").unwrap();
        assert_eq!(compact, day);

        let leap = parse_day_instant("2024-02-29").unwrap();
        assert_eq!(leap.epoch_milliseconds(), 1_709_164_800_000);
    }

    #[test]
    fn parse_discards_time_of_day() {
        let day = DayInstant::from_str("2024-01-02").unwrap();
        assert_eq!(DayInstant::from_str("2024-01-02T23:59:59Z").unwrap(), day);
        assert_eq!(
            DayInstant::from_str("2024-01-02T08:00:00+05:00[Asia/Karachi]").unwrap(),
            day
        );
    }

    #[test]
    fn parse_errors() {
        let err = DayInstant::from_str("2024-13-01").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(DayInstant::from_str("2023-02-29").is_err());
        assert!(DayInstant::from_str("not a date").is_err());
        assert!(DayInstant::from_str("").is_err());
    }

    #[test]
    fn date_string() {
        let date = FormattableDate(2024, 12, 8);
        assert_writeable_eq!(date, "2024-12-08");

        let date = FormattableDate(275_759, 12, 8);
        assert_writeable_eq!(date, "+275759-12-08");

        let date = FormattableDate(-271_820, 1, 1);
        assert_writeable_eq!(date, "-271820-01-01");

        let date = FormattableDate(0, 12, 8);
        assert_writeable_eq!(date, "0000-12-08");

        let date = FormattableDate(10_000, 12, 8);
        assert_writeable_eq!(date, "+010000-12-08");
    }

    #[test]
    fn day_instant_string() {
        let day = DayInstant::from_epoch_milliseconds(1_704_153_600_000).unwrap();
        assert_writeable_eq!(day, "2024-01-02");
        let before_epoch = DayInstant::from_epoch_milliseconds(-1).unwrap();
        assert_writeable_eq!(before_epoch, "1969-12-31");
    }

    #[test]
    fn calendar_day_string() {
        let leap_day = DayInstant::from_str("2024-07-02").unwrap();
        let whensday = FormattableCalendarDay {
            day: Some(leap_day),
            system: CalendarSystem::Whensday,
        };
        assert_writeable_eq!(whensday, "Sol 15, 2024");

        let gregorian = FormattableCalendarDay {
            day: Some(leap_day),
            system: CalendarSystem::Gregorian,
        };
        assert_writeable_eq!(gregorian, "July 2, 2024");

        let unset = FormattableCalendarDay {
            day: None,
            system: CalendarSystem::Whensday,
        };
        assert_writeable_eq!(unset, "Not Set");
    }
}
