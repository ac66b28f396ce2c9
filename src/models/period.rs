//! Rental period and rate provenance types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The billing granularity tier for a rental rate.
///
/// Bookings are decomposed greedily into the largest periods first:
/// monthly units, then weekly units, then remaining days at the daily tier.
///
/// # Example
///
/// ```
/// use rate_engine::models::RentalPeriod;
///
/// assert_eq!(RentalPeriod::Monthly.days(), 30);
/// assert_eq!(RentalPeriod::Daily.to_string(), "daily");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalPeriod {
    /// One day of rental.
    Daily,
    /// Seven consecutive days of rental.
    Weekly,
    /// Thirty consecutive days of rental.
    Monthly,
}

impl RentalPeriod {
    /// Returns the length of this period in days.
    ///
    /// These unit lengths drive the greedy tier decomposition: a month is
    /// billed as 30 days and a week as 7, regardless of calendar alignment.
    pub fn days(&self) -> u32 {
        match self {
            RentalPeriod::Daily => 1,
            RentalPeriod::Weekly => 7,
            RentalPeriod::Monthly => 30,
        }
    }

    /// Returns all periods in descending unit size (decomposition order).
    pub fn descending() -> [RentalPeriod; 3] {
        [
            RentalPeriod::Monthly,
            RentalPeriod::Weekly,
            RentalPeriod::Daily,
        ]
    }
}

impl fmt::Display for RentalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RentalPeriod::Daily => "daily",
            RentalPeriod::Weekly => "weekly",
            RentalPeriod::Monthly => "monthly",
        };
        write!(f, "{}", name)
    }
}

/// The provenance of a resolved rental rate.
///
/// Records which rule produced each resolved period rate so callers can
/// display where a price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// An operator-set per-vehicle manual override.
    ManualOverride,
    /// The fleet-wide bulk discount rule.
    BulkDiscount,
    /// The vehicle's unmodified base rental table.
    BaseRate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_days() {
        assert_eq!(RentalPeriod::Daily.days(), 1);
        assert_eq!(RentalPeriod::Weekly.days(), 7);
        assert_eq!(RentalPeriod::Monthly.days(), 30);
    }

    #[test]
    fn test_descending_order_is_largest_first() {
        let periods = RentalPeriod::descending();
        assert_eq!(periods[0], RentalPeriod::Monthly);
        assert_eq!(periods[1], RentalPeriod::Weekly);
        assert_eq!(periods[2], RentalPeriod::Daily);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(RentalPeriod::Daily.to_string(), "daily");
        assert_eq!(RentalPeriod::Weekly.to_string(), "weekly");
        assert_eq!(RentalPeriod::Monthly.to_string(), "monthly");
    }

    #[test]
    fn test_period_serialization() {
        assert_eq!(
            serde_json::to_string(&RentalPeriod::Daily).unwrap(),
            "\"daily\""
        );
        assert_eq!(
            serde_json::to_string(&RentalPeriod::Monthly).unwrap(),
            "\"monthly\""
        );
    }

    #[test]
    fn test_rate_source_serialization() {
        assert_eq!(
            serde_json::to_string(&RateSource::ManualOverride).unwrap(),
            "\"manual_override\""
        );
        assert_eq!(
            serde_json::to_string(&RateSource::BulkDiscount).unwrap(),
            "\"bulk_discount\""
        );
        assert_eq!(
            serde_json::to_string(&RateSource::BaseRate).unwrap(),
            "\"base_rate\""
        );
    }

    #[test]
    fn test_rate_source_deserialization() {
        let source: RateSource = serde_json::from_str("\"bulk_discount\"").unwrap();
        assert_eq!(source, RateSource::BulkDiscount);
    }
}
