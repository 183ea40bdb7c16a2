//! Error types for the Tariff Interpretation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a quote or
//! loading tariff configuration.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::VehicleType;

/// The main error type for the Tariff Interpretation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tariff_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The quote window was empty or inverted.
    #[error("Invalid quote window: entry {entry_at} is not before exit {exit_at}")]
    InvalidQuoteWindow {
        /// The entry instant of the rejected window.
        entry_at: NaiveDateTime,
        /// The exit instant of the rejected window.
        exit_at: NaiveDateTime,
    },

    /// The requested parking lot is not served by the loaded configuration.
    #[error("Parking lot not found: {parking_lot_id}")]
    ParkingLotNotFound {
        /// The parking lot id that was not found.
        parking_lot_id: String,
    },

    /// No segment of a billable window resolved an active tariff rule.
    #[error("No tariff configured for vehicle type {vehicle_type}")]
    NoTariffConfigured {
        /// The vehicle type that had no matching rule.
        vehicle_type: VehicleType,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
