//! The normalized UTC day value shared by both calendar systems.

use num_traits::ToPrimitive;

use crate::{
    error::ErrorMessage, utils, WhensdayError, WhensdayResult, MAX_EPOCH_DAYS, MIN_EPOCH_DAYS,
    MS_PER_DAY,
};

/// A single calendar day, stored as the number of whole UTC days since
/// 1970-01-01.
///
/// A `DayInstant` always represents midnight UTC of its day. Timestamps
/// carrying a time of day are floored to the start of their day when
/// converted with [`DayInstant::from_epoch_milliseconds`], so two
/// `DayInstant`s are equal exactly when they name the same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayInstant(i32);

impl DayInstant {
    /// Creates a `DayInstant` from a count of days since the Unix epoch.
    pub fn try_from_epoch_days(epoch_days: i64) -> WhensdayResult<Self> {
        if !is_valid_epoch_days(epoch_days) {
            return Err(WhensdayError::range().with_enum(ErrorMessage::DayOutOfRange));
        }
        let days = epoch_days
            .to_i32()
            .ok_or(WhensdayError::range().with_enum(ErrorMessage::DayOutOfRange))?;
        Ok(Self(days))
    }

    /// Creates a `DayInstant` for the UTC day containing `epoch_ms`.
    ///
    /// Any time of day is discarded: `2024-01-02T18:30Z` becomes
    /// `2024-01-02T00:00Z`.
    pub fn from_epoch_milliseconds(epoch_ms: i64) -> WhensdayResult<Self> {
        Self::try_from_epoch_days(utils::epoch_ms_to_epoch_days(epoch_ms))
    }

    /// Creates a `DayInstant` without checking the representable range.
    #[inline]
    pub(crate) const fn new_unchecked(epoch_days: i64) -> Self {
        Self(epoch_days as i32)
    }

    /// Returns the number of days since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn epoch_days(&self) -> i64 {
        self.0 as i64
    }

    /// Returns the UTC midnight of this day in milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn epoch_milliseconds(&self) -> i64 {
        self.0 as i64 * MS_PER_DAY as i64
    }

    /// Returns the Gregorian weekday of this day, where 0 is Sunday and 6 is Saturday.
    #[inline]
    #[must_use]
    pub const fn weekday(&self) -> u8 {
        utils::epoch_days_to_weekday(self.epoch_days())
    }

    /// Returns the day `days` after this one, or before it for negative values.
    pub fn add_days(&self, days: i64) -> WhensdayResult<Self> {
        let target = self
            .epoch_days()
            .checked_add(days)
            .ok_or(WhensdayError::range().with_enum(ErrorMessage::DayOutOfRange))?;
        Self::try_from_epoch_days(target)
    }

    /// Returns the signed number of days from this day until `other`.
    #[inline]
    #[must_use]
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.epoch_days() - self.epoch_days()
    }
}

/// Utility for determining if epoch days are within the representable range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_days(epoch_days: i64) -> bool {
    (MIN_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&epoch_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_YEAR, MIN_YEAR};

    const JAN_2_2024_MS: i64 = 1_704_153_600_000;

    #[test]
    fn normalizes_time_of_day() {
        let midnight = DayInstant::from_epoch_milliseconds(JAN_2_2024_MS).unwrap();
        let evening = DayInstant::from_epoch_milliseconds(JAN_2_2024_MS + 66_600_000).unwrap();
        let last_ms = DayInstant::from_epoch_milliseconds(JAN_2_2024_MS + 86_399_999).unwrap();
        assert_eq!(midnight, evening);
        assert_eq!(midnight, last_ms);
        assert_eq!(evening.epoch_milliseconds(), JAN_2_2024_MS);
    }

    #[test]
    fn negative_timestamps_floor_to_previous_day() {
        let day = DayInstant::from_epoch_milliseconds(-1).unwrap();
        assert_eq!(day.epoch_days(), -1);
        assert_eq!(day.epoch_milliseconds(), -86_400_000);
    }

    #[test]
    fn range_limits() {
        assert!(DayInstant::try_from_epoch_days(MIN_EPOCH_DAYS).is_ok());
        assert!(DayInstant::try_from_epoch_days(MAX_EPOCH_DAYS).is_ok());
        assert!(DayInstant::try_from_epoch_days(MIN_EPOCH_DAYS - 1).is_err());
        assert!(DayInstant::try_from_epoch_days(MAX_EPOCH_DAYS + 1).is_err());
        assert!(DayInstant::from_epoch_milliseconds(i64::MAX).is_err());
        assert!(DayInstant::from_epoch_milliseconds(i64::MIN).is_err());

        let (first_year, month, day) = utils::civil_from_epoch_days(MIN_EPOCH_DAYS);
        assert_eq!((first_year, month, day), (i64::from(MIN_YEAR), 1, 1));
        let (last_year, month, day) = utils::civil_from_epoch_days(MAX_EPOCH_DAYS);
        assert_eq!((last_year, month, day), (i64::from(MAX_YEAR), 12, 31));
    }

    #[test]
    fn day_arithmetic() {
        let day = DayInstant::from_epoch_milliseconds(JAN_2_2024_MS).unwrap();
        let later = day.add_days(30).unwrap();
        assert_eq!(day.days_until(&later), 30);
        assert_eq!(later.days_until(&day), -30);
        assert_eq!(later.add_days(-30).unwrap(), day);
        assert!(day.add_days(i64::MAX).is_err());
    }

    #[test]
    fn weekday_of_day() {
        // 2024-01-02 was a Tuesday.
        let day = DayInstant::from_epoch_milliseconds(JAN_2_2024_MS).unwrap();
        assert_eq!(day.weekday(), 2);
    }
}
