//! Per-segment billing.

use crate::models::{SegmentLine, TariffRule};

use super::rounding::round_units;
use super::segmenter::TimeSegment;
use super::units::raw_units;

/// Bills one segment against its resolved rule.
///
/// Converts the segment's minutes into a unit count using the rule's
/// billing unit and rounding mode, then applies the minimum-charge floor:
/// `subtotal = max(units × unit_price, minimum_charge)`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use tariff_engine::models::{BillingUnit, DayType, Period, RoundingMode, TariffRule, VehicleType};
/// use tariff_engine::pricing::{TimeSegment, bill_segment};
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let segment = TimeSegment {
///     from: date.and_hms_opt(10, 0, 0).unwrap(),
///     to: date.and_hms_opt(12, 0, 0).unwrap(),
///     day_type: DayType::Weekday,
///     period: Period::Day,
/// };
/// let rule = TariffRule {
///     id: "car_weekday_day".to_string(),
///     vehicle_type: VehicleType::Car,
///     day_type: DayType::Weekday,
///     period: Period::Day,
///     start_time: None,
///     end_time: None,
///     billing_unit: BillingUnit::Hour,
///     unit_price: 3000,
///     minimum_charge: Some(1500),
///     rounding: RoundingMode::Ceil,
///     is_active: true,
/// };
///
/// let line = bill_segment(&segment, &rule);
/// assert_eq!(line.units_billed, 2);
/// assert_eq!(line.subtotal, 6000);
/// ```
pub fn bill_segment(segment: &TimeSegment, rule: &TariffRule) -> SegmentLine {
    let minutes = segment.minutes();
    let units = round_units(raw_units(minutes, rule.billing_unit), rule.rounding);
    let gross = units * rule.unit_price;
    let subtotal = gross.max(rule.minimum_charge.unwrap_or(0));

    SegmentLine {
        from: segment.from,
        to: segment.to,
        day_type: segment.day_type,
        period: segment.period,
        unit: rule.billing_unit,
        minutes,
        units_billed: units,
        unit_price: rule.unit_price,
        subtotal,
        rule_id: rule.id.clone(),
    }
}
