//! Tariff Interpretation Engine for parking-lot pricing.
//!
//! This crate computes deterministic parking charges from a session's entry
//! and exit instants, a vehicle type, and a configured tariff rule set,
//! segmenting the elapsed time across calendar-day, weekend/holiday, and
//! day/night boundaries.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
