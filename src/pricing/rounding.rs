//! Rounding of fractional unit counts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::RoundingMode;

/// Converts a raw unit count into a billed integer count.
///
/// `Nearest` rounds half away from zero, so 2.5 units bill as 3.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use tariff_engine::models::RoundingMode;
/// use tariff_engine::pricing::round_units;
///
/// assert_eq!(round_units(Decimal::new(15, 1), RoundingMode::Ceil), 2);
/// assert_eq!(round_units(Decimal::new(15, 1), RoundingMode::Floor), 1);
/// assert_eq!(round_units(Decimal::new(14, 1), RoundingMode::Nearest), 1);
/// assert_eq!(round_units(Decimal::new(16, 1), RoundingMode::Nearest), 2);
/// ```
pub fn round_units(raw: Decimal, mode: RoundingMode) -> i64 {
    let rounded = match mode {
        RoundingMode::Ceil => raw.ceil(),
        RoundingMode::Floor => raw.floor(),
        RoundingMode::Nearest => {
            raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
    };
    // Unit counts are derived from minute spans, which fit comfortably in i64.
    rounded.to_i64().expect("rounded unit count fits in i64")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // RND-001: ceil rounds any fraction up
    // ==========================================================================
    #[test]
    fn test_rnd_001_ceil() {
        assert_eq!(round_units(dec("1.01"), RoundingMode::Ceil), 2);
        assert_eq!(round_units(dec("1.99"), RoundingMode::Ceil), 2);
        assert_eq!(round_units(dec("2.0"), RoundingMode::Ceil), 2);
    }

    // ==========================================================================
    // RND-002: floor rounds any fraction down
    // ==========================================================================
    #[test]
    fn test_rnd_002_floor() {
        assert_eq!(round_units(dec("1.01"), RoundingMode::Floor), 1);
        assert_eq!(round_units(dec("1.99"), RoundingMode::Floor), 1);
        assert_eq!(round_units(dec("2.0"), RoundingMode::Floor), 2);
    }

    // ==========================================================================
    // RND-003: nearest rounds 1.4 down and 1.6 up
    // ==========================================================================
    #[test]
    fn test_rnd_003_nearest() {
        assert_eq!(round_units(dec("1.4"), RoundingMode::Nearest), 1);
        assert_eq!(round_units(dec("1.6"), RoundingMode::Nearest), 2);
    }

    // ==========================================================================
    // RND-004: nearest rounds the midpoint away from zero
    // ==========================================================================
    #[test]
    fn test_rnd_004_nearest_midpoint() {
        assert_eq!(round_units(dec("2.5"), RoundingMode::Nearest), 3);
        assert_eq!(round_units(dec("0.5"), RoundingMode::Nearest), 1);
    }

    #[test]
    fn test_zero_rounds_to_zero_in_every_mode() {
        for mode in [RoundingMode::Ceil, RoundingMode::Floor, RoundingMode::Nearest] {
            assert_eq!(round_units(dec("0"), mode), 0);
        }
    }
}
