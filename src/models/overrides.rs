//! Rate override models.
//!
//! An effective rental rate comes from one of three sources, in strict
//! priority order: a per-vehicle manual override, the fleet-wide bulk
//! discount rule, or the vehicle's unmodified base rental table. The
//! [`RateOverride`] variant makes that choice explicit rather than relying
//! on presence checks scattered through the calculation.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RentalPeriod;

/// An operator-set per-vehicle rate override for a single rental period.
///
/// A manual override replaces every pricing attribute of the period it
/// applies to; nothing is inherited from the base table or the bulk rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualOverride {
    /// The overridden rental rate per unit of the period.
    pub rate: Decimal,
    /// The discount percentage (0-100).
    pub discount_percent: u32,
    /// The overridden mileage limit per unit of the period.
    pub mileage_limit: u32,
    /// The weekdays on which the discount is active (order irrelevant).
    #[serde(default)]
    pub applicable_weekdays: Vec<Weekday>,
    /// Whether the discount reapplies every week rather than being a
    /// one-time window.
    #[serde(default)]
    pub is_recurring: bool,
}

/// The set of manual overrides for a vehicle, at most one per period.
///
/// An absent entry means no override exists for that period; a present
/// entry always wins over the bulk discount rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualOverrides {
    /// Override for the daily period, if any.
    #[serde(default)]
    pub daily: Option<ManualOverride>,
    /// Override for the weekly period, if any.
    #[serde(default)]
    pub weekly: Option<ManualOverride>,
    /// Override for the monthly period, if any.
    #[serde(default)]
    pub monthly: Option<ManualOverride>,
}

impl ManualOverrides {
    /// Returns the manual override for the given period, if one exists.
    pub fn get(&self, period: RentalPeriod) -> Option<&ManualOverride> {
        match period {
            RentalPeriod::Daily => self.daily.as_ref(),
            RentalPeriod::Weekly => self.weekly.as_ref(),
            RentalPeriod::Monthly => self.monthly.as_ref(),
        }
    }
}

/// A fleet-wide discount rule applying to every vehicle without a manual
/// override for the period in question.
///
/// The rule only supplies discount percentages; rates and mileage limits
/// always come from each vehicle's own base rental table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDiscountRule {
    /// Discount percentage for the daily period (0-30).
    pub daily_discount: u32,
    /// Discount percentage for the weekly period (0-30).
    pub weekly_discount: u32,
    /// Discount percentage for the monthly period (0-30).
    pub monthly_discount: u32,
    /// The weekdays on which the discounts are active, shared by all
    /// periods.
    #[serde(default)]
    pub applicable_weekdays: Vec<Weekday>,
    /// Whether the discounts reapply every week, shared by all periods.
    #[serde(default)]
    pub is_recurring: bool,
}

impl BulkDiscountRule {
    /// Returns the discount percentage for the given period.
    pub fn discount_for(&self, period: RentalPeriod) -> u32 {
        match period {
            RentalPeriod::Daily => self.daily_discount,
            RentalPeriod::Weekly => self.weekly_discount,
            RentalPeriod::Monthly => self.monthly_discount,
        }
    }
}

/// The rule source selected for one vehicle and period.
///
/// Selection is an explicit priority list: `Manual` wins over `Bulk`, which
/// wins over `None`. There are no exceptions to this ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateOverride<'a> {
    /// A per-vehicle manual override applies.
    Manual(&'a ManualOverride),
    /// The fleet-wide bulk discount rule applies.
    Bulk(&'a BulkDiscountRule),
    /// No override applies; the base rental table is used as-is.
    None,
}
