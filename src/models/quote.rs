//! Quote result models.
//!
//! This module contains the [`QuoteResult`] type and its associated
//! structures that capture all outputs from a booking quote: per-tier
//! charge lines, the final amount breakdown, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RentalPeriod, ResolvedRates};

/// A single billed tier in a rental amount calculation.
///
/// Each line records how many units of a period were consumed, the per-unit
/// base rate, the per-unit discount, and the resulting line amount.
///
/// # Example
///
/// ```
/// use rate_engine::models::{ChargeLine, RentalPeriod};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = ChargeLine {
///     period: RentalPeriod::Monthly,
///     units: 1,
///     rate: Decimal::from_str("2000.00").unwrap(),
///     discount_percent: 0,
///     amount: Decimal::from_str("2000.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeLine {
    /// The rental period billed by this line.
    pub period: RentalPeriod,
    /// The number of whole units of the period consumed.
    pub units: u32,
    /// The per-unit base rate before discount.
    pub rate: Decimal,
    /// The discount percentage applied to each unit.
    pub discount_percent: u32,
    /// The total amount for this line (units x discounted rate).
    pub amount: Decimal,
}

/// The final amount breakdown for a booking.
///
/// Invariant: `total_amount_collected` equals
/// `(base_rental_amount - discount_adjustment + additional_charges_total)`
/// multiplied by `1 + tax_rate`, rounded to 2 decimal places. The
/// `discount_adjustment` stored here is already clamped to
/// `[0, base_rental_amount]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalAmountBreakdown {
    /// The rental charge from tier decomposition.
    pub base_rental_amount: Decimal,
    /// The sum of all additional charges.
    pub additional_charges_total: Decimal,
    /// The operator-entered discount, clamped to the base rental amount.
    pub discount_adjustment: Decimal,
    /// The flat tax rate applied to the subtotal (fixed at 5%).
    pub tax_rate: Decimal,
    /// The final amount due, rounded to 2 decimal places.
    pub total_amount_collected: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application so a quote can be explained after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a booking quote.
///
/// Captures the resolved rates, the itemised charge lines, the final
/// amount breakdown, and the audit trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the quote.
    pub engine_version: String,
    /// The resolved rates used for the calculation.
    pub rates: ResolvedRates,
    /// Individual charge lines making up the base rental amount.
    pub charge_lines: Vec<ChargeLine>,
    /// The final amount breakdown.
    pub breakdown: FinalAmountBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
