//! Pricing logic for the Tariff Interpretation Engine.
//!
//! This module contains the full quote pipeline: day-type and period
//! classification, time segmentation at calendar and clock boundaries,
//! billing-unit conversion with rounding, per-segment billing, the grace
//! period policy, the daily maximum cap, the lost-ticket surcharge, and the
//! quote assembler that strings them together.

mod biller;
mod daily_max;
mod day_type;
mod grace;
mod lost_ticket;
mod period;
mod provider;
mod quote;
mod rounding;
mod segmenter;
mod units;

pub use biller::bill_segment;
pub use daily_max::{DailyMaxOutcome, apply_daily_max};
pub use day_type::classify_day_type;
pub use grace::{GraceOutcome, assess_grace};
pub use lost_ticket::{LostTicketOutcome, apply_lost_ticket};
pub use period::{DAY_START_HOUR, NIGHT_START_HOUR, classify_period};
pub use provider::TariffProvider;
pub use quote::calculate_quote;
pub use rounding::round_units;
pub use segmenter::{TimeSegment, segment_window};
pub use units::{raw_units, unit_minutes};
