//! Lost-ticket surcharge.

use crate::models::QuoteWarning;

/// The outcome of applying the lost-ticket surcharge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LostTicketOutcome {
    /// The total including the surcharge, when one was applied.
    pub total: i64,
    /// Whether the surcharge was added.
    pub applied: bool,
    /// The surcharge value, when it was applied.
    pub fee: Option<i64>,
    /// Warning emitted when the surcharge was requested but no fee is
    /// configured.
    pub warning: Option<QuoteWarning>,
}

/// Adds the flat lost-ticket fee to an already-capped total.
///
/// A requested surcharge with no configured fee is downgraded to a warning;
/// the quote never fails on it.
///
/// # Example
///
/// ```
/// use tariff_engine::pricing::apply_lost_ticket;
///
/// let outcome = apply_lost_ticket(40000, true, Some(25000));
/// assert_eq!(outcome.total, 65000);
/// assert!(outcome.applied);
///
/// let outcome = apply_lost_ticket(40000, true, None);
/// assert_eq!(outcome.total, 40000);
/// assert!(outcome.warning.is_some());
/// ```
pub fn apply_lost_ticket(total: i64, requested: bool, fee: Option<i64>) -> LostTicketOutcome {
    if !requested {
        return LostTicketOutcome {
            total,
            applied: false,
            fee: None,
            warning: None,
        };
    }

    match fee {
        Some(fee) => LostTicketOutcome {
            total: total + fee,
            applied: true,
            fee: Some(fee),
            warning: None,
        },
        None => LostTicketOutcome {
            total,
            applied: false,
            fee: None,
            warning: Some(QuoteWarning::lost_ticket_fee_not_configured()),
        },
    }
}
