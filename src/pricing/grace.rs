//! Grace period policy.

/// The outcome of assessing the grace period for one quote.
///
/// Assessed once, before segmentation. Full absorption short-circuits the
/// quote entirely, so a fully-grace session can never fail on a missing
/// tariff rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraceOutcome {
    /// The whole window fits inside the grace period; nothing is billed.
    FullyAbsorbed {
        /// Whole minutes of the window, all reported as grace-absorbed.
        total_minutes: i64,
    },
    /// The window exceeds the grace period.
    ///
    /// `billable_minutes` is a reporting figure: the full window is still
    /// segmented and billed.
    Partial {
        /// Whole minutes of the window.
        total_minutes: i64,
        /// Minutes reported as grace-absorbed.
        grace_minutes: i64,
        /// `total_minutes - grace_minutes`.
        billable_minutes: i64,
    },
}

/// Assesses the grace period for a window of `total_minutes`.
///
/// `grace_minutes` is the configured grace, already zeroed by the caller
/// when the quote disables grace or no configuration exists.
///
/// # Example
///
/// ```
/// use tariff_engine::pricing::{GraceOutcome, assess_grace};
///
/// assert_eq!(
///     assess_grace(10, 15),
///     GraceOutcome::FullyAbsorbed { total_minutes: 10 }
/// );
/// assert_eq!(
///     assess_grace(120, 15),
///     GraceOutcome::Partial { total_minutes: 120, grace_minutes: 15, billable_minutes: 105 }
/// );
/// ```
pub fn assess_grace(total_minutes: i64, grace_minutes: i64) -> GraceOutcome {
    if total_minutes <= grace_minutes {
        GraceOutcome::FullyAbsorbed { total_minutes }
    } else {
        GraceOutcome::Partial {
            total_minutes,
            grace_minutes,
            billable_minutes: total_minutes - grace_minutes,
        }
    }
}
