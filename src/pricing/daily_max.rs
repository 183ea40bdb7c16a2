//! Daily maximum cap.

/// The outcome of applying the daily maximum to a summed subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyMaxOutcome {
    /// The (possibly capped) subtotal.
    pub total: i64,
    /// Whether the cap truncated the subtotal.
    pub applied: bool,
    /// The cap value, when it was applied.
    pub cap: Option<i64>,
}

/// Caps `subtotal` at the configured daily maximum.
///
/// The cap only fires when enabled for the quote, configured for the lot,
/// and actually exceeded; a subtotal equal to the cap passes through
/// unmarked.
///
/// # Example
///
/// ```
/// use tariff_engine::pricing::apply_daily_max;
///
/// let outcome = apply_daily_max(61000, Some(40000), true);
/// assert_eq!(outcome.total, 40000);
/// assert!(outcome.applied);
/// ```
pub fn apply_daily_max(subtotal: i64, daily_max: Option<i64>, enabled: bool) -> DailyMaxOutcome {
    match daily_max {
        Some(cap) if enabled && subtotal > cap => DailyMaxOutcome {
            total: cap,
            applied: true,
            cap: Some(cap),
        },
        _ => DailyMaxOutcome {
            total: subtotal,
            applied: false,
            cap: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // CAP-001: a subtotal above the cap is truncated to exactly the cap
    // ==========================================================================
    #[test]
    fn test_cap_001_truncates_to_cap() {
        let outcome = apply_daily_max(61000, Some(40000), true);
        assert_eq!(outcome.total, 40000);
        assert!(outcome.applied);
        assert_eq!(outcome.cap, Some(40000));
    }

    // ==========================================================================
    // CAP-002: a subtotal at or below the cap passes through
    // ==========================================================================
    #[test]
    fn test_cap_002_below_cap_untouched() {
        let outcome = apply_daily_max(39999, Some(40000), true);
        assert_eq!(outcome.total, 39999);
        assert!(!outcome.applied);

        let outcome = apply_daily_max(40000, Some(40000), true);
        assert_eq!(outcome.total, 40000);
        assert!(!outcome.applied);
        assert_eq!(outcome.cap, None);
    }

    // ==========================================================================
    // CAP-003: no configured cap means no capping
    // ==========================================================================
    #[test]
    fn test_cap_003_unconfigured() {
        let outcome = apply_daily_max(1_000_000, None, true);
        assert_eq!(outcome.total, 1_000_000);
        assert!(!outcome.applied);
    }

    // ==========================================================================
    // CAP-004: the quote can opt out of the cap
    // ==========================================================================
    #[test]
    fn test_cap_004_disabled_by_options() {
        let outcome = apply_daily_max(61000, Some(40000), false);
        assert_eq!(outcome.total, 61000);
        assert!(!outcome.applied);
    }
}
