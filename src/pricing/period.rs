//! Day/night period classification.

use chrono::{NaiveDateTime, Timelike};

use crate::models::Period;

/// First hour of the day period (inclusive).
pub const DAY_START_HOUR: u32 = 6;

/// First hour of the night period (inclusive).
pub const NIGHT_START_HOUR: u32 = 19;

/// Determines the period for a given instant.
///
/// A pure clock-hour function: local hour in `[6, 19)` is [`Period::Day`],
/// anything else is [`Period::Night`]. Rule `start_time`/`end_time` fields
/// are display metadata and do not participate.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use tariff_engine::models::Period;
/// use tariff_engine::pricing::classify_period;
///
/// let morning = NaiveDateTime::parse_from_str("2026-03-02 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(classify_period(morning), Period::Day);
///
/// let evening = NaiveDateTime::parse_from_str("2026-03-02 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(classify_period(evening), Period::Night);
/// ```
pub fn classify_period(at: NaiveDateTime) -> Period {
    if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&at.hour()) {
        Period::Day
    } else {
        Period::Night
    }
}
