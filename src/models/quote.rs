//! Quote input model.
//!
//! A [`PricingQuoteInput`] captures everything the engine needs for one
//! quote computation. The engine never persists it; each quote is a fresh
//! computation over freshly-read inputs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{DayType, VehicleType};

/// Per-quote options toggling optional pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteOptions {
    /// Apply the flat lost-ticket surcharge.
    #[serde(default)]
    pub lost_ticket: bool,
    /// Replace the day-type classifier for every segment of the quote.
    /// Used for tariff simulation; the holiday lookup is skipped entirely.
    #[serde(default)]
    pub override_day_type: Option<DayType>,
    /// Apply the configured grace period.
    #[serde(default = "default_true")]
    pub apply_grace: bool,
    /// Apply the configured daily maximum cap.
    #[serde(default = "default_true")]
    pub apply_daily_max: bool,
}

fn default_true() -> bool {
    true
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            lost_ticket: false,
            override_day_type: None,
            apply_grace: true,
            apply_daily_max: true,
        }
    }
}

/// The input to one quote computation.
///
/// `entry_at`/`exit_at` are lot-local instants; `entry_at < exit_at` is
/// required and guarded by the engine.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use tariff_engine::models::{PricingQuoteInput, QuoteOptions, VehicleType};
///
/// let input = PricingQuoteInput {
///     company_id: "acme_parking".to_string(),
///     parking_lot_id: "lot_centro".to_string(),
///     vehicle_type: VehicleType::Car,
///     entry_at: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(10, 0, 0).unwrap(),
///     exit_at: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(12, 0, 0).unwrap(),
///     options: QuoteOptions::default(),
/// };
/// assert!(input.entry_at < input.exit_at);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingQuoteInput {
    /// The company operating the parking lot.
    pub company_id: String,
    /// The parking lot the session belongs to.
    pub parking_lot_id: String,
    /// The vehicle type being quoted.
    pub vehicle_type: VehicleType,
    /// Session entry instant, lot-local.
    pub entry_at: NaiveDateTime,
    /// Session exit instant, lot-local. For live quotes this is "now".
    pub exit_at: NaiveDateTime,
    /// Optional pipeline toggles.
    #[serde(default)]
    pub options: QuoteOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = QuoteOptions::default();
        assert!(!options.lost_ticket);
        assert!(options.override_day_type.is_none());
        assert!(options.apply_grace);
        assert!(options.apply_daily_max);
    }

    #[test]
    fn test_deserialize_input_without_options() {
        let json = r#"{
            "company_id": "acme_parking",
            "parking_lot_id": "lot_centro",
            "vehicle_type": "car",
            "entry_at": "2026-03-02T10:00:00",
            "exit_at": "2026-03-02T12:00:00"
        }"#;

        let input: PricingQuoteInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.vehicle_type, VehicleType::Car);
        assert!(input.options.apply_grace);
        assert!(input.options.apply_daily_max);
    }

    #[test]
    fn test_deserialize_partial_options_keeps_other_defaults() {
        let json = r#"{
            "company_id": "acme_parking",
            "parking_lot_id": "lot_centro",
            "vehicle_type": "car",
            "entry_at": "2026-03-02T10:00:00",
            "exit_at": "2026-03-02T12:00:00",
            "options": { "lost_ticket": true }
        }"#;

        let input: PricingQuoteInput = serde_json::from_str(json).unwrap();
        assert!(input.options.lost_ticket);
        assert!(input.options.apply_grace);
        assert!(input.options.apply_daily_max);
    }

    #[test]
    fn test_deserialize_override_day_type() {
        let json = r#"{
            "company_id": "acme_parking",
            "parking_lot_id": "lot_centro",
            "vehicle_type": "car",
            "entry_at": "2026-03-02T10:00:00",
            "exit_at": "2026-03-02T12:00:00",
            "options": { "override_day_type": "holiday" }
        }"#;

        let input: PricingQuoteInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.options.override_day_type, Some(DayType::Holiday));
    }
}
