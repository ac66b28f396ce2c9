//! Error types for the Rate Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur during rate resolution and
//! booking amount calculation.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::RentalPeriod;

/// The main error type for the Rate Engine.
///
/// All operations in the engine return this error type. Every variant is an
/// input-validation or configuration failure; the engine performs no I/O
/// during calculation, so there are no transient failures and no retries.
///
/// # Example
///
/// ```
/// use rate_engine::error::RateError;
///
/// let error = RateError::ConfigNotFound {
///     path: "/missing/fleet.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/fleet.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RateError {
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

    /// A rate supplied in an override was negative.
    #[error("Invalid {period} rate: {rate} (rate must not be negative)")]
    InvalidRate {
        /// The rental period the rate was supplied for.
        period: RentalPeriod,
        /// The offending rate value.
        rate: Decimal,
    },

    /// A discount percentage was outside its allowed bound.
    #[error("Invalid {period} discount: {discount}% (discount must be between 0 and {max}%)")]
    InvalidDiscount {
        /// The rental period the discount was supplied for.
        period: RentalPeriod,
        /// The offending discount percentage.
        discount: u32,
        /// The upper bound that was exceeded.
        max: u32,
    },

    /// A recurring discount was supplied without any applicable weekdays.
    #[error("Recurring {period} discount requires at least one applicable weekday")]
    MissingWeekdaySelection {
        /// The rental period the discount was supplied for.
        period: RentalPeriod,
    },

    /// A booking period had a zero or negative duration.
    #[error("Invalid booking period: end time {end} must be after start time {start}")]
    InvalidBookingPeriod {
        /// The booking start time.
        start: NaiveDateTime,
        /// The booking end time.
        end: NaiveDateTime,
    },
}

/// A type alias for Results that return RateError.
pub type RateResult<T> = Result<T, RateError>;
