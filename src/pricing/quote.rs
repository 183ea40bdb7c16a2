//! Quote assembly.
//!
//! [`calculate_quote`] strings the pipeline together: grace assessment
//! (with early exit), segmentation, per-segment rule resolution and
//! billing, the daily maximum cap, and the lost-ticket surcharge. The
//! engine holds no state across calls; each quote is an independent
//! computation over the provider's snapshot.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    PricingQuoteInput, PricingQuoteOutput, QuoteBreakdown, QuoteDebug, QuoteWarning, SegmentLine,
};

use super::biller::bill_segment;
use super::daily_max::apply_daily_max;
use super::grace::{GraceOutcome, assess_grace};
use super::lost_ticket::apply_lost_ticket;
use super::provider::TariffProvider;
use super::segmenter::segment_window;

/// Computes a deterministic quote for one parking session.
///
/// The pipeline is strictly linear with one early return (the window fully
/// absorbed by grace) and one hard failure (no segment resolves a rule).
/// Segments whose bucket has no active rule are dropped from billing with
/// a warning and `partially_billed = true` in the breakdown; they never
/// silently vanish.
///
/// # Errors
///
/// - [`EngineError::InvalidQuoteWindow`] when `entry_at >= exit_at`.
/// - [`EngineError::NoTariffConfigured`] when a non-absorbed window has no
///   billable segment at all, naming the vehicle type.
pub fn calculate_quote<P: TariffProvider + ?Sized>(
    provider: &P,
    input: &PricingQuoteInput,
) -> EngineResult<PricingQuoteOutput> {
    if input.entry_at >= input.exit_at {
        return Err(EngineError::InvalidQuoteWindow {
            entry_at: input.entry_at,
            exit_at: input.exit_at,
        });
    }

    let config = provider
        .pricing_config(&input.company_id, &input.parking_lot_id)
        .cloned()
        .unwrap_or_default();

    let total_minutes = (input.exit_at - input.entry_at).num_minutes();
    let grace_minutes = if input.options.apply_grace {
        i64::from(config.default_grace_minutes)
    } else {
        0
    };

    let (grace_applied_minutes, billable_minutes) =
        match assess_grace(total_minutes, grace_minutes) {
            GraceOutcome::FullyAbsorbed { total_minutes } => {
                return Ok(grace_absorbed_output(total_minutes, config.currency));
            }
            GraceOutcome::Partial {
                grace_minutes,
                billable_minutes,
                ..
            } => (grace_minutes, billable_minutes),
        };

    // Grace shrinks the reported billable minutes only; the full window is
    // segmented and billed.
    let segments = segment_window(
        provider,
        input.entry_at,
        input.exit_at,
        &config.country_code,
        input.options.override_day_type,
    )?;

    let mut warnings: Vec<QuoteWarning> = Vec::new();
    let mut lines: Vec<SegmentLine> = Vec::new();
    let mut rule_ids_used: Vec<String> = Vec::new();
    let mut partially_billed = false;

    for segment in &segments {
        match provider.find_rule(
            &input.company_id,
            &input.parking_lot_id,
            input.vehicle_type,
            segment.day_type,
            segment.period,
        ) {
            Some(rule) => {
                let line = bill_segment(segment, rule);
                if !rule_ids_used.contains(&line.rule_id) {
                    rule_ids_used.push(line.rule_id.clone());
                }
                lines.push(line);
            }
            None => {
                warnings.push(QuoteWarning::segment_without_rule(
                    segment.from,
                    segment.to,
                    segment.day_type,
                    segment.period,
                ));
                partially_billed = true;
            }
        }
    }

    if lines.is_empty() {
        return Err(EngineError::NoTariffConfigured {
            vehicle_type: input.vehicle_type,
        });
    }

    let subtotal: i64 = lines.iter().map(|line| line.subtotal).sum();
    let capped = apply_daily_max(
        subtotal,
        config.default_daily_max,
        input.options.apply_daily_max,
    );
    let surcharged = apply_lost_ticket(capped.total, input.options.lost_ticket, config.lost_ticket_fee);
    if let Some(warning) = surcharged.warning {
        warnings.push(warning);
    }

    Ok(PricingQuoteOutput {
        total: surcharged.total,
        currency: config.currency,
        breakdown: QuoteBreakdown {
            total_minutes,
            billable_minutes,
            grace_applied_minutes,
            segments: lines,
            daily_max_applied: capped.applied,
            daily_max_amount: capped.cap,
            lost_ticket_fee_applied: surcharged.applied,
            lost_ticket_fee_amount: surcharged.fee,
            rule_ids_used,
            partially_billed,
        },
        debug: QuoteDebug { warnings },
    })
}

/// The zero-total output for a window fully absorbed by grace.
fn grace_absorbed_output(total_minutes: i64, currency: String) -> PricingQuoteOutput {
    PricingQuoteOutput {
        total: 0,
        currency,
        breakdown: QuoteBreakdown {
            total_minutes,
            billable_minutes: 0,
            grace_applied_minutes: total_minutes,
            segments: vec![],
            daily_max_applied: false,
            daily_max_amount: None,
            lost_ticket_fee_applied: false,
            lost_ticket_fee_amount: None,
            rule_ids_used: vec![],
            partially_billed: false,
        },
        debug: QuoteDebug::default(),
    }
}
