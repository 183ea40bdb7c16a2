//! Day-type classification.

use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::models::DayType;

use super::TariffProvider;

/// Determines the day type for a given instant.
///
/// The holiday check takes precedence over the weekend check: a Saturday
/// that is a registered holiday classifies as [`DayType::Holiday`].
/// Quote-level day-type overrides are handled by the assembler, which
/// bypasses this function entirely (including the holiday lookup).
///
/// # Arguments
///
/// * `provider` - Holiday lookup capability
/// * `at` - The instant to classify
/// * `country_code` - The country whose holiday calendar applies
pub fn classify_day_type<P: TariffProvider + ?Sized>(
    provider: &P,
    at: NaiveDateTime,
    country_code: &str,
) -> DayType {
    if provider.is_holiday(at.date(), country_code) {
        return DayType::Holiday;
    }
    match at.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}
