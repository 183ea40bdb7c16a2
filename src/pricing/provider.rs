//! The lookup capabilities the engine consumes.

use chrono::NaiveDate;

use crate::models::{DayType, Period, PricingConfig, TariffRule, VehicleType};

/// Read-only access to tariff rules, pricing configuration, and the
/// holiday set.
///
/// The engine performs no I/O of its own: all reads go through this trait,
/// implemented over an immutable snapshot taken by the calling boundary
/// before the computation starts. Unit tests implement it with in-memory
/// tables instead of mocking a database.
pub trait TariffProvider {
    /// Exact lookup of the single active rule for a pricing bucket.
    ///
    /// No fallback or wildcard matching: a missing bucket returns `None`.
    fn find_rule(
        &self,
        company_id: &str,
        parking_lot_id: &str,
        vehicle_type: VehicleType,
        day_type: DayType,
        period: Period,
    ) -> Option<&TariffRule>;

    /// The pricing configuration for a parking lot, if any.
    fn pricing_config(&self, company_id: &str, parking_lot_id: &str) -> Option<&PricingConfig>;

    /// Whether `date` is a registered holiday in `country_code`.
    fn is_holiday(&self, date: NaiveDate, country_code: &str) -> bool;
}
