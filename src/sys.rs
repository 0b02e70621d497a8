use crate::{DayInstant, WhensdayError, WhensdayResult};

use num_traits::ToPrimitive;
use web_time::{SystemTime, UNIX_EPOCH};

/// Returns the current UTC day of the host system clock.
pub fn today_utc() -> WhensdayResult<DayInstant> {
    let epoch_ms = get_system_milliseconds()?;
    DayInstant::from_epoch_milliseconds(epoch_ms)
}

pub(crate) fn get_system_milliseconds() -> WhensdayResult<i64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| WhensdayError::general("Error fetching system time"))?
        .as_millis()
        .to_i64()
        .ok_or(WhensdayError::range().with_message("System time is out of range."))
}
