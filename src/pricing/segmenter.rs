//! Time segmentation at calendar and clock boundaries.
//!
//! This module splits a quote window into maximal runs of constant
//! `(day_type, period)` so each run can be billed against a single tariff
//! rule.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DayType, Period};

use super::day_type::classify_day_type;
use super::period::{DAY_START_HOUR, NIGHT_START_HOUR, classify_period};
use super::provider::TariffProvider;

/// A maximal sub-interval of the quote window with constant classification.
///
/// Segments are half-open `[from, to)` with `to > from`. The ordered
/// sequence produced by [`segment_window`] is contiguous and
/// non-overlapping, and its total duration equals the window's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSegment {
    /// Segment start, inclusive.
    pub from: NaiveDateTime,
    /// Segment end, exclusive.
    pub to: NaiveDateTime,
    /// Day type constant across the segment.
    pub day_type: DayType,
    /// Period constant across the segment.
    pub period: Period,
}

impl TimeSegment {
    /// Whole minutes in the segment.
    pub fn minutes(&self) -> i64 {
        (self.to - self.from).num_minutes()
    }
}

/// Partitions `[entry_at, exit_at)` into maximal constant-classification runs.
///
/// Starting at `entry_at`, each step advances to the nearest of: `exit_at`,
/// the next midnight, the next 06:00, and the next 19:00. The segment up to
/// that boundary is classified at its start instant, so the classification
/// is constant across the whole segment by construction.
///
/// When `override_day_type` is supplied, it replaces the day-type
/// classification for every segment and the holiday lookup is skipped;
/// period boundaries still apply.
///
/// # Errors
///
/// Returns [`EngineError::InvalidQuoteWindow`] when `entry_at >= exit_at`,
/// and [`EngineError::CalculationError`] if the loop ever exceeds its
/// defensive iteration bound.
///
/// # Example
///
/// ```
/// # use chrono::NaiveDate;
/// # use tariff_engine::models::{DayType, Period, PricingConfig, TariffRule, VehicleType};
/// # use tariff_engine::pricing::{TariffProvider, segment_window};
/// # struct NoHolidays;
/// # impl TariffProvider for NoHolidays {
/// #     fn find_rule(&self, _: &str, _: &str, _: VehicleType, _: DayType, _: Period) -> Option<&TariffRule> { None }
/// #     fn pricing_config(&self, _: &str, _: &str) -> Option<&PricingConfig> { None }
/// #     fn is_holiday(&self, _: chrono::NaiveDate, _: &str) -> bool { false }
/// # }
/// let entry = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(18, 0, 0).unwrap();
/// let exit = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(20, 0, 0).unwrap();
/// let segments = segment_window(&NoHolidays, entry, exit, "CO", None).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].period, Period::Day);
/// assert_eq!(segments[1].period, Period::Night);
/// ```
pub fn segment_window<P: TariffProvider + ?Sized>(
    provider: &P,
    entry_at: NaiveDateTime,
    exit_at: NaiveDateTime,
    country_code: &str,
    override_day_type: Option<DayType>,
) -> EngineResult<Vec<TimeSegment>> {
    if entry_at >= exit_at {
        return Err(EngineError::InvalidQuoteWindow { entry_at, exit_at });
    }

    // At most three boundary kinds per calendar day touched, plus margin.
    let days_spanned = (exit_at.date() - entry_at.date()).num_days();
    let max_steps = 3 * (days_spanned + 2);

    let mut segments = Vec::new();
    let mut current = entry_at;
    let mut steps = 0;

    while current < exit_at {
        steps += 1;
        if steps > max_steps {
            return Err(EngineError::CalculationError {
                message: format!(
                    "segmentation exceeded {max_steps} steps for window [{entry_at}, {exit_at})"
                ),
            });
        }

        let boundary = next_boundary(current, exit_at);
        let day_type = match override_day_type {
            Some(forced) => forced,
            None => classify_day_type(provider, current, country_code),
        };
        segments.push(TimeSegment {
            from: current,
            to: boundary,
            day_type,
            period: classify_period(current),
        });
        current = boundary;
    }

    Ok(segments)
}

/// The nearest upcoming boundary after `current`: exit, midnight, 06:00, or
/// 19:00, whichever comes first.
fn next_boundary(current: NaiveDateTime, exit_at: NaiveDateTime) -> NaiveDateTime {
    let mut boundary = exit_at;

    let next_midnight = (current.date() + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .expect("valid midnight time");
    if next_midnight < boundary {
        boundary = next_midnight;
    }

    for hour in [DAY_START_HOUR, NIGHT_START_HOUR] {
        let today = current
            .date()
            .and_hms_opt(hour, 0, 0)
            .expect("valid clock boundary");
        let candidate = if today > current {
            today
        } else {
            today + Duration::days(1)
        };
        if candidate < boundary {
            boundary = candidate;
        }
    }

    boundary
}
