//! Quote output models.
//!
//! This module contains the [`PricingQuoteOutput`] type and its associated
//! structures: the per-segment billing lines, the breakdown totals, and the
//! warnings surfaced to callers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{BillingUnit, DayType, Period};

/// One billed sub-interval of the quote window.
///
/// Segments are half-open `[from, to)`, ordered, and non-overlapping. Each
/// carries the rule that priced it and the resulting subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentLine {
    /// Segment start, inclusive.
    pub from: NaiveDateTime,
    /// Segment end, exclusive.
    pub to: NaiveDateTime,
    /// Day type constant across the segment.
    pub day_type: DayType,
    /// Period constant across the segment.
    pub period: Period,
    /// The billing unit of the applied rule.
    pub unit: BillingUnit,
    /// Whole minutes in the segment.
    pub minutes: i64,
    /// Post-rounding integer unit count.
    pub units_billed: i64,
    /// Price per unit, in minor currency units.
    pub unit_price: i64,
    /// `max(units_billed × unit_price, minimum_charge)`.
    pub subtotal: i64,
    /// The id of the tariff rule that priced this segment.
    pub rule_id: String,
}

/// Severity of a quote warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational only.
    Low,
    /// Worth surfacing to an operator.
    Medium,
    /// Indicates a revenue-affecting configuration gap.
    High,
}

/// A warning generated during quote computation.
///
/// Warnings indicate conditions that do not prevent quoting but may
/// require attention, such as a missing lost-ticket fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

impl QuoteWarning {
    /// Warning for a lost-ticket surcharge requested without a configured fee.
    pub fn lost_ticket_fee_not_configured() -> Self {
        Self {
            code: "LOST_TICKET_FEE_NOT_CONFIGURED".to_string(),
            message: "Lost ticket reported but no lost_ticket_fee is configured; no surcharge applied"
                .to_string(),
            severity: WarningSeverity::Medium,
        }
    }

    /// Warning for a segment dropped from billing because no rule matched.
    pub fn segment_without_rule(
        from: NaiveDateTime,
        to: NaiveDateTime,
        day_type: DayType,
        period: Period,
    ) -> Self {
        Self {
            code: "SEGMENT_WITHOUT_RULE".to_string(),
            message: format!(
                "No active tariff rule for segment [{from}, {to}) ({day_type}/{period}); segment not billed"
            ),
            severity: WarningSeverity::High,
        }
    }
}

/// Itemized totals for one quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Whole minutes between entry and exit.
    pub total_minutes: i64,
    /// `total_minutes - grace_applied_minutes`. Reporting figure only; the
    /// full window is billed.
    pub billable_minutes: i64,
    /// Minutes absorbed by the grace period.
    pub grace_applied_minutes: i64,
    /// The billed segments, in chronological order.
    pub segments: Vec<SegmentLine>,
    /// Whether the daily maximum truncated the subtotal.
    pub daily_max_applied: bool,
    /// The cap value, when it was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_max_amount: Option<i64>,
    /// Whether the lost-ticket surcharge was added.
    pub lost_ticket_fee_applied: bool,
    /// The surcharge value, when it was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost_ticket_fee_amount: Option<i64>,
    /// Ids of the rules that priced at least one segment, in first-use order.
    pub rule_ids_used: Vec<String>,
    /// True when at least one segment had no rule and was dropped from
    /// billing.
    pub partially_billed: bool,
}

/// Diagnostic output accompanying a quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDebug {
    /// Warnings collected along the pipeline.
    pub warnings: Vec<QuoteWarning>,
}

/// The complete result of one quote computation.
///
/// # Example
///
/// ```
/// use tariff_engine::models::{PricingQuoteOutput, QuoteBreakdown, QuoteDebug};
///
/// let output = PricingQuoteOutput {
///     total: 6000,
///     currency: "COP".to_string(),
///     breakdown: QuoteBreakdown {
///         total_minutes: 120,
///         billable_minutes: 105,
///         grace_applied_minutes: 15,
///         segments: vec![],
///         daily_max_applied: false,
///         daily_max_amount: None,
///         lost_ticket_fee_applied: false,
///         lost_ticket_fee_amount: None,
///         rule_ids_used: vec![],
///         partially_billed: false,
///     },
///     debug: QuoteDebug::default(),
/// };
/// assert_eq!(output.total, 6000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingQuoteOutput {
    /// The final charge, in minor currency units.
    pub total: i64,
    /// ISO 4217 currency code of `total`.
    pub currency: String,
    /// Itemized totals and segments.
    pub breakdown: QuoteBreakdown,
    /// Warnings and diagnostics.
    pub debug: QuoteDebug,
}
