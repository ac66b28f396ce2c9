//! Booking period and additional charge models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The date range of a booking.
///
/// `end_time` must be strictly after `start_time`; duration checks are
/// enforced by [`crate::calculation::chargeable_days`] rather than at
/// construction, so form layers can round-trip partially filled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPeriod {
    /// When the rental starts.
    pub start_time: NaiveDateTime,
    /// When the rental ends.
    pub end_time: NaiveDateTime,
}

impl BookingPeriod {
    /// Returns the booking duration in seconds (negative if inverted).
    pub fn duration_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}

/// An extra charge collected with a booking, such as a fuel top-up or a
/// damage fee.
///
/// Additional charges are summed as-is; they are never prorated across
/// rental periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCharge {
    /// The charge amount (non-negative).
    pub amount: Decimal,
    /// Free-text description of the charge.
    pub description: String,
    /// When the charge was paid.
    pub payment_date: NaiveDateTime,
}
