//! Calculation logic for the Rate Engine.
//!
//! This module contains all the calculation functions for pricing a
//! booking, including rate resolution with override precedence, rate and
//! discount validation, chargeable day calculation, greedy tier
//! decomposition, base rental amount calculation, and the final amount
//! with discount adjustment and tax.

mod booking_duration;
mod final_amount;
mod rate_resolution;
mod rental_amount;
mod tier_decomposition;

pub use booking_duration::chargeable_days;
pub use final_amount::{
    FinalAmountResult, TAX_RATE, calculate_final_amount, total_additional_charges,
};
pub use rate_resolution::{
    MAX_BULK_DISCOUNT, MAX_MANUAL_DISCOUNT, PeriodRateResolution, RateResolution,
    resolve_period_rate, resolve_rates, select_override, validate_bulk_rule,
    validate_manual_override,
};
pub use rental_amount::{RentalAmountResult, calculate_rental_amount};
pub use tier_decomposition::{TierDecomposition, decompose_days};
