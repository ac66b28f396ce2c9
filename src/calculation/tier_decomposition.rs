//! Tier decomposition functionality.
//!
//! A booking's duration is decomposed greedily into the largest rental
//! periods first: whole monthly units, then weekly units from the
//! remainder, then leftover days at the daily tier. The daily tier is the
//! terminal fallback: remaining days always bill there, even when the
//! daily rate is zero.

use serde::{Deserialize, Serialize};

use crate::models::RentalPeriod;

/// The decomposition of a booking duration into whole period units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDecomposition {
    /// The number of whole 30-day monthly units.
    pub monthly_units: u32,
    /// The number of whole 7-day weekly units from the remainder.
    pub weekly_units: u32,
    /// The leftover days billed at the daily tier.
    pub daily_units: u32,
}

impl TierDecomposition {
    /// Returns the unit count for the given period.
    pub fn units(&self, period: RentalPeriod) -> u32 {
        match period {
            RentalPeriod::Daily => self.daily_units,
            RentalPeriod::Weekly => self.weekly_units,
            RentalPeriod::Monthly => self.monthly_units,
        }
    }

    /// Returns the total days covered by the decomposition.
    pub fn total_days(&self) -> u32 {
        self.monthly_units * RentalPeriod::Monthly.days()
            + self.weekly_units * RentalPeriod::Weekly.days()
            + self.daily_units
    }
}

/// Decomposes a duration in days into the largest applicable periods first.
///
/// # Examples
///
/// ```
/// use rate_engine::calculation::decompose_days;
///
/// let tiers = decompose_days(35);
/// assert_eq!(tiers.monthly_units, 1);
/// assert_eq!(tiers.weekly_units, 0);
/// assert_eq!(tiers.daily_units, 5);
/// ```
pub fn decompose_days(total_days: u32) -> TierDecomposition {
    let monthly_units = total_days / RentalPeriod::Monthly.days();
    let after_months = total_days % RentalPeriod::Monthly.days();
    let weekly_units = after_months / RentalPeriod::Weekly.days();
    let daily_units = after_months % RentalPeriod::Weekly.days();

    TierDecomposition {
        monthly_units,
        weekly_units,
        daily_units,
    }
}
