//! Vehicle base rental table models.
//!
//! The base rental table is the unmodified price list a vehicle carries
//! before any manual override or bulk discount rule is applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RentalPeriod;

/// The base rate for a single rental period of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePeriodRate {
    /// The base rental price per unit of this period (currency-agnostic).
    pub base_rate: Decimal,
    /// The mileage included per unit of this period (distance unit).
    pub base_mileage_limit: u32,
}

/// A vehicle's base rental table: one base rate per rental period.
///
/// # Example
///
/// ```
/// use rate_engine::models::{BasePeriodRate, BaseRentalTable, RentalPeriod};
/// use rust_decimal::Decimal;
///
/// let table = BaseRentalTable {
///     daily: BasePeriodRate { base_rate: Decimal::new(10000, 2), base_mileage_limit: 200 },
///     weekly: BasePeriodRate { base_rate: Decimal::new(60000, 2), base_mileage_limit: 1200 },
///     monthly: BasePeriodRate { base_rate: Decimal::new(200000, 2), base_mileage_limit: 4500 },
/// };
/// assert_eq!(table.get(RentalPeriod::Weekly).base_mileage_limit, 1200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRentalTable {
    /// Base rate for the daily period.
    pub daily: BasePeriodRate,
    /// Base rate for the weekly period.
    pub weekly: BasePeriodRate,
    /// Base rate for the monthly period.
    pub monthly: BasePeriodRate,
}

impl BaseRentalTable {
    /// Returns the base rate entry for the given rental period.
    pub fn get(&self, period: RentalPeriod) -> &BasePeriodRate {
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

    fn create_test_table() -> BaseRentalTable {
        BaseRentalTable {
            daily: BasePeriodRate {
                base_rate: dec("100.00"),
                base_mileage_limit: 200,
            },
            weekly: BasePeriodRate {
                base_rate: dec("600.00"),
                base_mileage_limit: 1200,
            },
            monthly: BasePeriodRate {
                base_rate: dec("2000.00"),
                base_mileage_limit: 4500,
            },
        }
    }

    #[test]
    fn test_get_returns_matching_period_entry() {
        let table = create_test_table();
        assert_eq!(table.get(RentalPeriod::Daily).base_rate, dec("100.00"));
        assert_eq!(table.get(RentalPeriod::Weekly).base_rate, dec("600.00"));
        assert_eq!(table.get(RentalPeriod::Monthly).base_rate, dec("2000.00"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let table = create_test_table();
        let json = serde_json::to_string(&table).unwrap();
        let deserialized: BaseRentalTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{
            "daily": { "base_rate": "100.00", "base_mileage_limit": 200 },
            "weekly": { "base_rate": "600.00", "base_mileage_limit": 1200 },
            "monthly": { "base_rate": "2000.00", "base_mileage_limit": 4500 }
        }"#;

        let table: BaseRentalTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.daily.base_rate, dec("100.00"));
        assert_eq!(table.monthly.base_mileage_limit, 4500);
    }
}
