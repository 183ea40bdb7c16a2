//! Request types for the Tariff Interpretation Engine API.
//!
//! This module defines the JSON request structures for the `/quote`
//! endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{DayType, PricingQuoteInput, QuoteOptions, VehicleType};

/// Request body for the `/quote` endpoint.
///
/// Contains all information needed to quote one parking session. For live
/// quotes on an open session the caller sets `exit_at` to the current
/// instant; the simulation endpoint posts arbitrary inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The company operating the parking lot.
    pub company_id: String,
    /// The parking lot the session belongs to.
    pub parking_lot_id: String,
    /// The vehicle type being quoted.
    pub vehicle_type: VehicleType,
    /// Session entry instant, lot-local.
    pub entry_at: NaiveDateTime,
    /// Session exit instant, lot-local.
    pub exit_at: NaiveDateTime,
    /// Optional pipeline toggles.
    #[serde(default)]
    pub options: QuoteOptionsRequest,
}

/// Quote options in a quote request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteOptionsRequest {
    /// Apply the flat lost-ticket surcharge.
    #[serde(default)]
    pub lost_ticket: bool,
    /// Force a day type for every segment (tariff simulation).
    #[serde(default)]
    pub override_day_type: Option<DayType>,
    /// Apply the configured grace period. Defaults to true.
    #[serde(default)]
    pub apply_grace: Option<bool>,
    /// Apply the configured daily maximum. Defaults to true.
    #[serde(default)]
    pub apply_daily_max: Option<bool>,
}

impl From<QuoteOptionsRequest> for QuoteOptions {
    fn from(req: QuoteOptionsRequest) -> Self {
        QuoteOptions {
            lost_ticket: req.lost_ticket,
            override_day_type: req.override_day_type,
            apply_grace: req.apply_grace.unwrap_or(true),
            apply_daily_max: req.apply_daily_max.unwrap_or(true),
        }
    }
}

impl From<QuoteRequest> for PricingQuoteInput {
    fn from(req: QuoteRequest) -> Self {
        PricingQuoteInput {
            company_id: req.company_id,
            parking_lot_id: req.parking_lot_id,
            vehicle_type: req.vehicle_type,
            entry_at: req.entry_at,
            exit_at: req.exit_at,
            options: req.options.into(),
        }
    }
}
