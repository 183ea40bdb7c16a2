//! Configuration types for tariff interpretation.
//!
//! This module contains the strongly-typed structures deserialized from the
//! per-lot YAML configuration files, and the [`TariffSnapshot`] assembled
//! from them.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;

use crate::models::{DayType, Period, PricingConfig, TariffRule, VehicleType};
use crate::pricing::TariffProvider;

/// Identity of the parking lot a configuration directory describes.
#[derive(Debug, Clone, Deserialize)]
pub struct LotMetadata {
    /// The company operating the lot.
    pub company_id: String,
    /// The lot's unique identifier.
    pub parking_lot_id: String,
    /// Human-readable lot name.
    pub name: String,
}

/// Tariff rules file structure (`tariffs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TariffsFile {
    /// All tariff rules for the lot, active and inactive.
    pub rules: Vec<TariffRule>,
}

/// One entry of the holiday calendar.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The holiday's date.
    pub date: NaiveDate,
    /// The holiday's name.
    pub name: String,
}

/// Holiday calendar file structure (`holidays.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The country the calendar applies to.
    pub country_code: String,
    /// Registered holidays.
    pub holidays: Vec<HolidayEntry>,
}

/// An immutable read-only snapshot of one lot's tariff configuration.
///
/// This is the production implementation of
/// [`TariffProvider`]: all engine reads go through it, and
/// it never changes for the lifetime of a quote computation.
#[derive(Debug, Clone)]
pub struct TariffSnapshot {
    lot: LotMetadata,
    pricing: PricingConfig,
    rules: Vec<TariffRule>,
    holiday_country: String,
    holidays: HashSet<NaiveDate>,
}

impl TariffSnapshot {
    /// Assembles a snapshot from its loaded parts.
    pub fn new(
        lot: LotMetadata,
        pricing: PricingConfig,
        tariffs: TariffsFile,
        holidays: HolidaysFile,
    ) -> Self {
        Self {
            lot,
            pricing,
            rules: tariffs.rules,
            holiday_country: holidays.country_code,
            holidays: holidays.holidays.into_iter().map(|h| h.date).collect(),
        }
    }

    /// The lot this snapshot describes.
    pub fn lot(&self) -> &LotMetadata {
        &self.lot
    }

    /// The lot's pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// All configured rules, active and inactive.
    pub fn rules(&self) -> &[TariffRule] {
        &self.rules
    }

    /// Whether this snapshot serves the given company/lot pair.
    pub fn serves(&self, company_id: &str, parking_lot_id: &str) -> bool {
        self.lot.company_id == company_id && self.lot.parking_lot_id == parking_lot_id
    }
}

impl TariffProvider for TariffSnapshot {
    fn find_rule(
        &self,
        company_id: &str,
        parking_lot_id: &str,
        vehicle_type: VehicleType,
        day_type: DayType,
        period: Period,
    ) -> Option<&TariffRule> {
        if !self.serves(company_id, parking_lot_id) {
            return None;
        }
        self.rules.iter().find(|rule| {
            rule.is_active
                && rule.vehicle_type == vehicle_type
                && rule.day_type == day_type
                && rule.period == period
        })
    }

    fn pricing_config(&self, company_id: &str, parking_lot_id: &str) -> Option<&PricingConfig> {
        if !self.serves(company_id, parking_lot_id) {
            return None;
        }
        Some(&self.pricing)
    }

    fn is_holiday(&self, date: NaiveDate, country_code: &str) -> bool {
        country_code == self.holiday_country && self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillingUnit, RoundingMode};

    fn snapshot() -> TariffSnapshot {
        TariffSnapshot::new(
            LotMetadata {
                company_id: "acme_parking".to_string(),
                parking_lot_id: "lot_centro".to_string(),
                name: "Parqueadero Centro".to_string(),
            },
            PricingConfig::default(),
            TariffsFile {
                rules: vec![
                    TariffRule {
                        id: "car_weekday_day".to_string(),
                        vehicle_type: VehicleType::Car,
                        day_type: DayType::Weekday,
                        period: Period::Day,
                        start_time: None,
                        end_time: None,
                        billing_unit: BillingUnit::Hour,
                        unit_price: 3000,
                        minimum_charge: None,
                        rounding: RoundingMode::Ceil,
                        is_active: true,
                    },
                    TariffRule {
                        id: "car_weekday_day_retired".to_string(),
                        vehicle_type: VehicleType::Car,
                        day_type: DayType::Weekday,
                        period: Period::Night,
                        start_time: None,
                        end_time: None,
                        billing_unit: BillingUnit::Hour,
                        unit_price: 9000,
                        minimum_charge: None,
                        rounding: RoundingMode::Ceil,
                        is_active: false,
                    },
                ],
            },
            HolidaysFile {
                country_code: "CO".to_string(),
                holidays: vec![HolidayEntry {
                    date: NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
                    name: "Día de la Independencia".to_string(),
                }],
            },
        )
    }

    #[test]
    fn test_find_rule_exact_match() {
        let snapshot = snapshot();
        let rule = snapshot.find_rule(
            "acme_parking",
            "lot_centro",
            VehicleType::Car,
            DayType::Weekday,
            Period::Day,
        );
        assert_eq!(rule.unwrap().id, "car_weekday_day");
    }

    #[test]
    fn test_find_rule_skips_inactive() {
        let snapshot = snapshot();
        let rule = snapshot.find_rule(
            "acme_parking",
            "lot_centro",
            VehicleType::Car,
            DayType::Weekday,
            Period::Night,
        );
        assert!(rule.is_none());
    }

    #[test]
    fn test_find_rule_no_wildcard_fallback() {
        let snapshot = snapshot();
        let rule = snapshot.find_rule(
            "acme_parking",
            "lot_centro",
            VehicleType::Car,
            DayType::Weekend,
            Period::Day,
        );
        assert!(rule.is_none());
    }

    #[test]
    fn test_foreign_lot_resolves_nothing() {
        let snapshot = snapshot();
        assert!(
            snapshot
                .find_rule(
                    "acme_parking",
                    "lot_norte",
                    VehicleType::Car,
                    DayType::Weekday,
                    Period::Day,
                )
                .is_none()
        );
        assert!(snapshot.pricing_config("other_co", "lot_centro").is_none());
    }

    #[test]
    fn test_is_holiday_scoped_by_country() {
        let snapshot = snapshot();
        let date = NaiveDate::from_ymd_opt(2026, 7, 20).unwrap();
        assert!(snapshot.is_holiday(date, "CO"));
        assert!(!snapshot.is_holiday(date, "AR"));
        assert!(!snapshot.is_holiday(NaiveDate::from_ymd_opt(2026, 7, 21).unwrap(), "CO"));
    }
}
