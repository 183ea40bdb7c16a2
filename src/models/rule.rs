//! Tariff rule model and its closed vocabulary of enums.
//!
//! A tariff rule prices one `(vehicle type, day type, period)` bucket for a
//! parking lot. The rule-administration collaborator guarantees at most one
//! active rule per bucket; the engine assumes that invariant and performs
//! exact lookups only.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// The kind of vehicle a parking session is for.
///
/// Used as the first dimension of tariff rule lookup.
///
/// # Example
///
/// ```
/// use tariff_engine::models::VehicleType;
///
/// let vehicle = VehicleType::TruckBus;
/// assert_eq!(vehicle.to_string(), "truck_bus");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Bicycles.
    Bicycle,
    /// Motorcycles.
    Motorcycle,
    /// Passenger cars.
    Car,
    /// Trucks and buses.
    TruckBus,
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Bicycle => write!(f, "bicycle"),
            VehicleType::Motorcycle => write!(f, "motorcycle"),
            VehicleType::Car => write!(f, "car"),
            VehicleType::TruckBus => write!(f, "truck_bus"),
        }
    }
}

/// The calendar classification of an instant for tariff selection.
///
/// Holiday takes precedence over weekend: a Saturday that is also a
/// registered holiday classifies as [`DayType::Holiday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, excluding holidays.
    Weekday,
    /// Saturday or Sunday, excluding holidays.
    Weekend,
    /// A date registered in the holiday set.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "weekday"),
            DayType::Weekend => write!(f, "weekend"),
            DayType::Holiday => write!(f, "holiday"),
        }
    }
}

/// The day/night classification of an instant.
///
/// Derived purely from the local clock hour: [6, 19) is day, the rest is
/// night. Rule `start_time`/`end_time` fields do not participate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// 06:00 through 18:59 local time.
    Day,
    /// 19:00 through 05:59 local time.
    Night,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Day => write!(f, "day"),
            Period::Night => write!(f, "night"),
        }
    }
}

/// The time granularity a rule charges by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingUnit {
    /// Per started minute.
    Minute,
    /// Per 15-minute block.
    #[serde(rename = "block_15")]
    Block15,
    /// Per 30-minute block.
    #[serde(rename = "block_30")]
    Block30,
    /// Per hour.
    Hour,
    /// Per calendar day (1440 minutes).
    Day,
}

impl std::fmt::Display for BillingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingUnit::Minute => write!(f, "minute"),
            BillingUnit::Block15 => write!(f, "block_15"),
            BillingUnit::Block30 => write!(f, "block_30"),
            BillingUnit::Hour => write!(f, "hour"),
            BillingUnit::Day => write!(f, "day"),
        }
    }
}

/// How a fractional unit count is converted to a billed integer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round up to the next whole unit.
    Ceil,
    /// Round down to the previous whole unit.
    Floor,
    /// Round to the nearest whole unit, half away from zero.
    Nearest,
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::Ceil
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingMode::Ceil => write!(f, "ceil"),
            RoundingMode::Floor => write!(f, "floor"),
            RoundingMode::Nearest => write!(f, "nearest"),
        }
    }
}

/// A tariff rule pricing one `(vehicle type, day type, period)` bucket.
///
/// Monetary fields are integers in the lot's minor currency unit.
///
/// # Example
///
/// ```
/// use tariff_engine::models::{BillingUnit, DayType, Period, RoundingMode, TariffRule, VehicleType};
///
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
/// assert!(rule.is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRule {
    /// Unique identifier for the rule.
    pub id: String,
    /// The vehicle type this rule prices.
    pub vehicle_type: VehicleType,
    /// The day type this rule prices.
    pub day_type: DayType,
    /// The period this rule prices.
    pub period: Period,
    /// Display-only start of the rule's nominal window. Not used for
    /// period classification.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Display-only end of the rule's nominal window. Not used for
    /// period classification.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// The granularity this rule charges by.
    pub billing_unit: BillingUnit,
    /// Price per billed unit, in minor currency units.
    pub unit_price: i64,
    /// Floor applied to the segment subtotal, in minor currency units.
    #[serde(default)]
    pub minimum_charge: Option<i64>,
    /// How fractional unit counts are rounded.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Whether the rule participates in lookups.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_display() {
        assert_eq!(VehicleType::Bicycle.to_string(), "bicycle");
        assert_eq!(VehicleType::Motorcycle.to_string(), "motorcycle");
        assert_eq!(VehicleType::Car.to_string(), "car");
        assert_eq!(VehicleType::TruckBus.to_string(), "truck_bus");
    }

    #[test]
    fn test_day_type_serialization() {
        let holiday = DayType::Holiday;
        let json = serde_json::to_string(&holiday).unwrap();
        assert_eq!(json, "\"holiday\"");

        let deserialized: DayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayType::Holiday);
    }

    #[test]
    fn test_billing_unit_block_wire_names() {
        assert_eq!(
            serde_json::to_string(&BillingUnit::Block15).unwrap(),
            "\"block_15\""
        );
        assert_eq!(
            serde_json::to_string(&BillingUnit::Block30).unwrap(),
            "\"block_30\""
        );
        let unit: BillingUnit = serde_json::from_str("\"block_30\"").unwrap();
        assert_eq!(unit, BillingUnit::Block30);
    }

    #[test]
    fn test_rounding_mode_defaults_to_ceil() {
        assert_eq!(RoundingMode::default(), RoundingMode::Ceil);
    }

    #[test]
    fn test_rule_deserialization_with_defaults() {
        let json = r#"{
            "id": "car_weekday_day",
            "vehicle_type": "car",
            "day_type": "weekday",
            "period": "day",
            "billing_unit": "hour",
            "unit_price": 3000
        }"#;

        let rule: TariffRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.rounding, RoundingMode::Ceil);
        assert_eq!(rule.minimum_charge, None);
        assert!(rule.is_active);
        assert!(rule.start_time.is_none());
    }

    #[test]
    fn test_rule_roundtrip() {
        let rule = TariffRule {
            id: "moto_weekend_night".to_string(),
            vehicle_type: VehicleType::Motorcycle,
            day_type: DayType::Weekend,
            period: Period::Night,
            start_time: NaiveTime::from_hms_opt(19, 0, 0),
            end_time: NaiveTime::from_hms_opt(6, 0, 0),
            billing_unit: BillingUnit::Block30,
            unit_price: 800,
            minimum_charge: Some(800),
            rounding: RoundingMode::Nearest,
            is_active: false,
        };

        let json = serde_json::to_string(&rule).unwrap();
        let deserialized: TariffRule = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, rule);
    }
}
