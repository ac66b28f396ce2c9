//! Booking duration calculation.
//!
//! Bookings bill in whole days: a booking spanning any part of a day counts
//! as a full day, so durations are rounded up, never pro-rated.

use crate::error::{RateError, RateResult};
use crate::models::BookingPeriod;

const SECONDS_PER_DAY: i64 = 86_400;

/// Returns the number of chargeable days for a booking.
///
/// The duration between start and end is rounded up to whole days, with a
/// minimum of one day for any positive duration.
///
/// # Errors
///
/// Returns [`RateError::InvalidBookingPeriod`] when the end time is not
/// strictly after the start time. Zero-duration bookings are rejected
/// rather than rounded up.
///
/// # Examples
///
/// ```
/// use rate_engine::calculation::chargeable_days;
/// use rate_engine::models::BookingPeriod;
/// use chrono::NaiveDateTime;
///
/// let booking = BookingPeriod {
///     start_time: NaiveDateTime::parse_from_str("2026-03-10 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-03-10 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
/// // Half a day still bills as one full day.
/// assert_eq!(chargeable_days(&booking).unwrap(), 1);
/// ```
pub fn chargeable_days(booking: &BookingPeriod) -> RateResult<u32> {
    let seconds = booking.duration_seconds();
    if seconds <= 0 {
        return Err(RateError::InvalidBookingPeriod {
            start: booking.start_time,
            end: booking.end_time,
        });
    }

    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    Ok(days as u32)
}
