//! Core data models for the Rate Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod booking;
mod overrides;
mod period;
mod quote;
mod rate;
mod vehicle;

pub use booking::{AdditionalCharge, BookingPeriod};
pub use overrides::{BulkDiscountRule, ManualOverride, ManualOverrides, RateOverride};
pub use period::{RateSource, RentalPeriod};
pub use quote::{AuditStep, AuditTrace, ChargeLine, FinalAmountBreakdown, QuoteResult};
pub use rate::{RentalPeriodRate, ResolvedRates};
pub use vehicle::{BasePeriodRate, BaseRentalTable};
