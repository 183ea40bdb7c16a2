//! Per-lot pricing configuration.

use serde::{Deserialize, Serialize};

/// Lot-level pricing knobs that sit outside individual tariff rules.
///
/// Modeled as a value type with explicit defaults (no grace, no cap, no
/// surcharge) so a lot without configuration still quotes cleanly.
///
/// # Example
///
/// ```
/// use tariff_engine::models::PricingConfig;
///
/// let config = PricingConfig::default();
/// assert_eq!(config.default_grace_minutes, 0);
/// assert_eq!(config.default_daily_max, None);
/// assert_eq!(config.currency, "COP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// ISO 4217 currency code all amounts are denominated in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// ISO 3166 country code used for holiday lookups.
    #[serde(default = "default_country_code")]
    pub country_code: String,
    /// Minutes of parking absorbed free of charge.
    #[serde(default)]
    pub default_grace_minutes: u32,
    /// Ceiling on the summed segment subtotal, in minor currency units.
    #[serde(default)]
    pub default_daily_max: Option<i64>,
    /// Flat surcharge when the physical ticket is reported lost.
    #[serde(default)]
    pub lost_ticket_fee: Option<i64>,
}

fn default_currency() -> String {
    "COP".to_string()
}

fn default_country_code() -> String {
    "CO".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            country_code: default_country_code(),
            default_grace_minutes: 0,
            default_daily_max: None,
            lost_ticket_fee: None,
        }
    }
}
