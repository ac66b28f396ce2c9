//! Resolved rental rate models.
//!
//! A [`RentalPeriodRate`] is the output of rate resolution: the effective
//! price, mileage limit, and discount schedule for one rental period after
//! the manual-over-bulk-over-base precedence has been applied.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RateSource, RentalPeriod};

/// The effective rate for a single rental period after resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalPeriodRate {
    /// The rental period this rate applies to.
    pub period: RentalPeriod,
    /// The effective rental price per unit of the period.
    pub rate: Decimal,
    /// The mileage included per unit of the period.
    pub mileage_limit: u32,
    /// The discount percentage applied per unit (0-100).
    pub discount_percent: u32,
    /// The weekdays on which the discount is active (empty when no
    /// discount rule applies).
    pub applicable_weekdays: Vec<Weekday>,
    /// Whether the discount reapplies every week.
    pub is_recurring: bool,
    /// Whether any discount rule (manual or bulk) is in effect.
    pub is_discount_active: bool,
    /// Which rule produced this rate.
    pub source: RateSource,
}

impl RentalPeriodRate {
    /// Returns the per-unit price after applying the discount percentage.
    ///
    /// The discount applies to each consumed unit individually, never to
    /// the aggregate booking amount.
    ///
    /// # Example
    ///
    /// ```
    /// use rate_engine::models::{RateSource, RentalPeriod, RentalPeriodRate};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let rate = RentalPeriodRate {
    ///     period: RentalPeriod::Daily,
    ///     rate: Decimal::from_str("100.00").unwrap(),
    ///     mileage_limit: 200,
    ///     discount_percent: 10,
    ///     applicable_weekdays: vec![],
    ///     is_recurring: false,
    ///     is_discount_active: true,
    ///     source: RateSource::BulkDiscount,
    /// };
    /// assert_eq!(rate.effective_unit_price(), Decimal::from_str("90").unwrap());
    /// ```
    pub fn effective_unit_price(&self) -> Decimal {
        let remaining = Decimal::from(100 - self.discount_percent.min(100));
        self.rate * remaining / Decimal::from(100)
    }
}

/// The complete set of resolved rates for a vehicle, one per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRates {
    /// The resolved daily rate.
    pub daily: RentalPeriodRate,
    /// The resolved weekly rate.
    pub weekly: RentalPeriodRate,
    /// The resolved monthly rate.
    pub monthly: RentalPeriodRate,
}

impl ResolvedRates {
    /// Returns the resolved rate for the given period.
    pub fn get(&self, period: RentalPeriod) -> &RentalPeriodRate {
        match period {
            RentalPeriod::Daily => &self.daily,
            RentalPeriod::Weekly => &self.weekly,
            RentalPeriod::Monthly => &self.monthly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_rate(rate: &str, discount: u32) -> RentalPeriodRate {
        RentalPeriodRate {
            period: RentalPeriod::Daily,
            rate: dec(rate),
            mileage_limit: 200,
            discount_percent: discount,
            applicable_weekdays: vec![],
            is_recurring: false,
            is_discount_active: discount > 0,
            source: RateSource::BaseRate,
        }
    }

    #[test]
    fn test_effective_unit_price_without_discount() {
        let rate = create_rate("100.00", 0);
        assert_eq!(rate.effective_unit_price(), dec("100.00"));
    }

    #[test]
    fn test_effective_unit_price_with_discount() {
        let rate = create_rate("100.00", 10);
        assert_eq!(rate.effective_unit_price(), dec("90"));
    }

    #[test]
    fn test_effective_unit_price_full_discount() {
        let rate = create_rate("100.00", 100);
        assert_eq!(rate.effective_unit_price(), dec("0"));
    }

    #[test]
    fn test_effective_unit_price_zero_rate() {
        let rate = create_rate("0", 25);
        assert_eq!(rate.effective_unit_price(), dec("0"));
    }

    #[test]
    fn test_resolved_rates_get_by_period() {
        let rates = ResolvedRates {
            daily: create_rate("100.00", 0),
            weekly: RentalPeriodRate {
                period: RentalPeriod::Weekly,
                ..create_rate("600.00", 0)
            },
            monthly: RentalPeriodRate {
                period: RentalPeriod::Monthly,
                ..create_rate("2000.00", 0)
            },
        };

        assert_eq!(rates.get(RentalPeriod::Daily).rate, dec("100.00"));
        assert_eq!(rates.get(RentalPeriod::Weekly).rate, dec("600.00"));
        assert_eq!(rates.get(RentalPeriod::Monthly).rate, dec("2000.00"));
    }

    #[test]
    fn test_rental_period_rate_serialization() {
        let rate = create_rate("100.00", 10);
        let json = serde_json::to_string(&rate).unwrap();
        assert!(json.contains("\"period\":\"daily\""));
        assert!(json.contains("\"rate\":\"100.00\""));
        assert!(json.contains("\"source\":\"base_rate\""));

        let deserialized: RentalPeriodRate = serde_json::from_str(&json).unwrap();
        assert_eq!(rate, deserialized);
    }
}
