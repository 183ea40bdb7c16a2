//! Billing-unit conversion.

use rust_decimal::Decimal;

use crate::models::BillingUnit;

/// Returns the divisor in minutes for a billing unit.
pub fn unit_minutes(unit: BillingUnit) -> i64 {
    match unit {
        BillingUnit::Minute => 1,
        BillingUnit::Block15 => 15,
        BillingUnit::Block30 => 30,
        BillingUnit::Hour => 60,
        BillingUnit::Day => 1440,
    }
}

/// Converts elapsed minutes into a raw (fractional) unit count.
///
/// The fractional count is rounded separately by the rule's rounding mode;
/// see [`crate::pricing::round_units`].
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_engine::models::BillingUnit;
/// use tariff_engine::pricing::raw_units;
///
/// assert_eq!(raw_units(90, BillingUnit::Hour), Decimal::new(15, 1)); // 1.5
/// assert_eq!(raw_units(90, BillingUnit::Block30), Decimal::new(3, 0));
/// ```
pub fn raw_units(minutes: i64, unit: BillingUnit) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(unit_minutes(unit), 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // UN-001: divisor table
    // ==========================================================================
    #[test]
    fn test_un_001_divisors() {
        assert_eq!(unit_minutes(BillingUnit::Minute), 1);
        assert_eq!(unit_minutes(BillingUnit::Block15), 15);
        assert_eq!(unit_minutes(BillingUnit::Block30), 30);
        assert_eq!(unit_minutes(BillingUnit::Hour), 60);
        assert_eq!(unit_minutes(BillingUnit::Day), 1440);
    }

    // ==========================================================================
    // UN-002: 90 minutes in 30-minute blocks is exactly 3 units
    // ==========================================================================
    #[test]
    fn test_un_002_90_minutes_block_30() {
        assert_eq!(raw_units(90, BillingUnit::Block30), dec("3"));
    }

    // ==========================================================================
    // UN-003: 90 minutes in hours is 1.5 units
    // ==========================================================================
    #[test]
    fn test_un_003_90_minutes_hour() {
        assert_eq!(raw_units(90, BillingUnit::Hour), dec("1.5"));
    }

    #[test]
    fn test_zero_minutes_is_zero_units() {
        assert_eq!(raw_units(0, BillingUnit::Hour), dec("0"));
    }

    #[test]
    fn test_full_day_in_day_units() {
        assert_eq!(raw_units(1440, BillingUnit::Day), dec("1"));
        assert_eq!(raw_units(2160, BillingUnit::Day), dec("1.5"));
    }

    #[test]
    fn test_minute_unit_is_identity() {
        assert_eq!(raw_units(37, BillingUnit::Minute), dec("37"));
    }
}
