//! Final amount calculation.
//!
//! Applies the discount adjustment, additional charges, and fixed tax to
//! the base rental amount to produce the amount collected from the renter.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AdditionalCharge, AuditStep, FinalAmountBreakdown};

/// The fixed tax rate applied to every booking (5%).
pub const TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// The result of a final amount calculation.
#[derive(Debug, Clone)]
pub struct FinalAmountResult {
    /// The itemised breakdown of the final amount.
    pub breakdown: FinalAmountBreakdown,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
}

/// Sums the amounts of a booking's additional charges.
pub fn total_additional_charges(charges: &[AdditionalCharge]) -> Decimal {
    charges.iter().map(|c| c.amount).sum()
}

/// Calculates the final amount collected for a booking.
///
/// The discount adjustment is clamped to `[0, base_rental_amount]`: a
/// negative adjustment is treated as zero and an adjustment exceeding the
/// base amount reduces it to exactly zero, never below. Additional charges
/// are added after the adjustment, and the fixed 5% tax applies to the
/// whole taxable amount. The total is rounded to two decimal places with
/// midpoints rounding away from zero.
///
/// # Examples
///
/// ```
/// use rate_engine::calculation::calculate_final_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_final_amount(
///     Decimal::from_str("100").unwrap(),
///     &[],
///     Decimal::ZERO,
///     1,
/// );
/// assert_eq!(
///     result.breakdown.total_amount_collected,
///     Decimal::from_str("105.00").unwrap()
/// );
/// ```
pub fn calculate_final_amount(
    base_rental_amount: Decimal,
    additional_charges: &[AdditionalCharge],
    discount_adjustment: Decimal,
    step_number: u32,
) -> FinalAmountResult {
    let clamped_adjustment = discount_adjustment
        .max(Decimal::ZERO)
        .min(base_rental_amount.max(Decimal::ZERO));

    let charges_total = total_additional_charges(additional_charges);
    let taxable = base_rental_amount - clamped_adjustment + charges_total;
    let total = (taxable * (Decimal::ONE + TAX_RATE))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let breakdown = FinalAmountBreakdown {
        base_rental_amount,
        additional_charges_total: charges_total,
        discount_adjustment: clamped_adjustment,
        tax_rate: TAX_RATE,
        total_amount_collected: total,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "final_amount".to_string(),
        rule_name: "Final Amount".to_string(),
        input: serde_json::json!({
            "base_rental_amount": base_rental_amount.normalize().to_string(),
            "additional_charges_total": charges_total.normalize().to_string(),
            "requested_discount_adjustment": discount_adjustment.normalize().to_string()
        }),
        output: serde_json::json!({
            "discount_adjustment": clamped_adjustment.normalize().to_string(),
            "tax_rate": TAX_RATE.to_string(),
            "total_amount_collected": total.to_string()
        }),
        reasoning: format!(
            "({} - {} + {}) with 5% tax collects {}",
            base_rental_amount.normalize(),
            clamped_adjustment.normalize(),
            charges_total.normalize(),
            total
        ),
    };

    FinalAmountResult {
        breakdown,
        audit_step,
    }
}
