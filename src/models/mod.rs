//! Core data models for the Tariff Interpretation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pricing_config;
mod quote;
mod quote_result;
mod rule;

pub use pricing_config::PricingConfig;
pub use quote::{PricingQuoteInput, QuoteOptions};
pub use quote_result::{
    PricingQuoteOutput, QuoteBreakdown, QuoteDebug, QuoteWarning, SegmentLine, WarningSeverity,
};
pub use rule::{BillingUnit, DayType, Period, RoundingMode, TariffRule, VehicleType};
