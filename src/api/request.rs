//! Request types for the Rate Engine API.
//!
//! This module defines the JSON request structures for the `/quote` endpoint.

use chrono::{NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AdditionalCharge, BasePeriodRate, BaseRentalTable, BookingPeriod, BulkDiscountRule,
    ManualOverride, ManualOverrides,
};

/// Request body for the `/quote` endpoint.
///
/// Contains all information needed to quote a booking: the vehicle's rate
/// configuration, the booking window, any additional charges, and the
/// optional operator discount adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The vehicle being booked.
    pub vehicle: VehicleRequest,
    /// The booking window.
    pub booking: BookingRequest,
    /// Additional charges collected alongside the rental.
    #[serde(default)]
    pub additional_charges: Vec<AdditionalChargeRequest>,
    /// Operator-entered flat discount deducted from the base rental amount.
    #[serde(default)]
    pub discount_adjustment: Option<Decimal>,
    /// Request-level bulk discount rule. When present it replaces the
    /// fleet-wide rule from configuration for this quote.
    #[serde(default)]
    pub bulk_discount_rule: Option<BulkDiscountRuleRequest>,
}

/// Vehicle information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRequest {
    /// Unique identifier for the vehicle.
    pub id: String,
    /// The vehicle's base rental table.
    pub base_rental_table: BaseRentalTableRequest,
    /// Per-period manual overrides set by the operator.
    #[serde(default)]
    pub manual_overrides: ManualOverridesRequest,
}

/// A vehicle's base rental table in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRentalTableRequest {
    /// The daily base entry.
    pub daily: BasePeriodRateRequest,
    /// The weekly base entry.
    pub weekly: BasePeriodRateRequest,
    /// The monthly base entry.
    pub monthly: BasePeriodRateRequest,
}

/// A single period's base rate entry in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasePeriodRateRequest {
    /// The base rental rate per unit of the period.
    pub base_rate: Decimal,
    /// The included mileage per unit of the period.
    pub base_mileage_limit: u32,
}

/// Manual overrides in a quote request, at most one per period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManualOverridesRequest {
    /// Override for the daily period, if any.
    #[serde(default)]
    pub daily: Option<ManualOverrideRequest>,
    /// Override for the weekly period, if any.
    #[serde(default)]
    pub weekly: Option<ManualOverrideRequest>,
    /// Override for the monthly period, if any.
    #[serde(default)]
    pub monthly: Option<ManualOverrideRequest>,
}

/// A single period's manual override in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualOverrideRequest {
    /// The overridden rate per unit of the period.
    pub rate: Decimal,
    /// The discount percentage (0-100).
    #[serde(default)]
    pub discount_percent: u32,
    /// The overridden mileage limit per unit of the period.
    pub mileage_limit: u32,
    /// The weekdays on which the discount is active.
    #[serde(default)]
    pub applicable_weekdays: Vec<Weekday>,
    /// Whether the discount reapplies every week.
    #[serde(default)]
    pub is_recurring: bool,
}

/// A bulk discount rule in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDiscountRuleRequest {
    /// Discount percentage for the daily period (0-30).
    pub daily_discount: u32,
    /// Discount percentage for the weekly period (0-30).
    pub weekly_discount: u32,
    /// Discount percentage for the monthly period (0-30).
    pub monthly_discount: u32,
    /// The weekdays on which the discounts are active.
    #[serde(default)]
    pub applicable_weekdays: Vec<Weekday>,
    /// Whether the discounts reapply every week.
    #[serde(default)]
    pub is_recurring: bool,
}

/// Booking window in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// When the rental starts.
    pub start_time: NaiveDateTime,
    /// When the rental ends.
    pub end_time: NaiveDateTime,
}

/// An additional charge in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalChargeRequest {
    /// The charge amount.
    pub amount: Decimal,
    /// What the charge is for.
    pub description: String,
    /// When the charge was or will be collected.
    pub payment_date: NaiveDateTime,
}

impl From<BasePeriodRateRequest> for BasePeriodRate {
    fn from(req: BasePeriodRateRequest) -> Self {
        BasePeriodRate {
            base_rate: req.base_rate,
            base_mileage_limit: req.base_mileage_limit,
        }
    }
}

impl From<BaseRentalTableRequest> for BaseRentalTable {
    fn from(req: BaseRentalTableRequest) -> Self {
        BaseRentalTable {
            daily: req.daily.into(),
            weekly: req.weekly.into(),
            monthly: req.monthly.into(),
        }
    }
}

impl From<ManualOverrideRequest> for ManualOverride {
    fn from(req: ManualOverrideRequest) -> Self {
        ManualOverride {
            rate: req.rate,
            discount_percent: req.discount_percent,
            mileage_limit: req.mileage_limit,
            applicable_weekdays: req.applicable_weekdays,
            is_recurring: req.is_recurring,
        }
    }
}

impl From<ManualOverridesRequest> for ManualOverrides {
    fn from(req: ManualOverridesRequest) -> Self {
        ManualOverrides {
            daily: req.daily.map(Into::into),
            weekly: req.weekly.map(Into::into),
            monthly: req.monthly.map(Into::into),
        }
    }
}

impl From<BulkDiscountRuleRequest> for BulkDiscountRule {
    fn from(req: BulkDiscountRuleRequest) -> Self {
        BulkDiscountRule {
            daily_discount: req.daily_discount,
            weekly_discount: req.weekly_discount,
            monthly_discount: req.monthly_discount,
            applicable_weekdays: req.applicable_weekdays,
            is_recurring: req.is_recurring,
        }
    }
}

impl From<BookingRequest> for BookingPeriod {
    fn from(req: BookingRequest) -> Self {
        BookingPeriod {
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

impl From<AdditionalChargeRequest> for AdditionalCharge {
    fn from(req: AdditionalChargeRequest) -> Self {
        AdditionalCharge {
            amount: req.amount,
            description: req.description,
            payment_date: req.payment_date,
        }
    }
}
