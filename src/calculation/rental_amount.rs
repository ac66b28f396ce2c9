//! Base rental amount calculation.
//!
//! Combines booking duration, tier decomposition, and resolved rates into
//! the base rental charge. Discounts apply per consumed unit, never to the
//! aggregate amount.

use rust_decimal::Decimal;

use crate::error::RateResult;
use crate::models::{AuditStep, BookingPeriod, ChargeLine, RentalPeriod, ResolvedRates};

use super::booking_duration::chargeable_days;
use super::tier_decomposition::decompose_days;

/// The result of a base rental amount calculation.
#[derive(Debug, Clone)]
pub struct RentalAmountResult {
    /// The total base rental charge across all tiers.
    pub total: Decimal,
    /// One charge line per consumed tier.
    pub charge_lines: Vec<ChargeLine>,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
}

/// Calculates the base rental charge for a booking.
///
/// The duration is rounded up to whole days and decomposed greedily into
/// monthly, weekly, and daily units. Each consumed unit is billed at
/// `rate * (1 - discount/100)` for its tier. A tier with a zero rate
/// contributes zero for its units; units are never re-decomposed into
/// smaller tiers, and leftover days always bill at the daily tier.
///
/// # Errors
///
/// Returns [`crate::error::RateError::InvalidBookingPeriod`] when the
/// booking has zero or negative duration.
///
/// # Examples
///
/// ```
/// use rate_engine::calculation::{calculate_rental_amount, resolve_rates};
/// use rate_engine::models::{
///     BasePeriodRate, BaseRentalTable, BookingPeriod, ManualOverrides,
/// };
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = BaseRentalTable {
///     daily: BasePeriodRate { base_rate: Decimal::from_str("100").unwrap(), base_mileage_limit: 200 },
///     weekly: BasePeriodRate { base_rate: Decimal::from_str("600").unwrap(), base_mileage_limit: 1200 },
///     monthly: BasePeriodRate { base_rate: Decimal::from_str("2000").unwrap(), base_mileage_limit: 4500 },
/// };
/// let rates = resolve_rates(&table, &ManualOverrides::default(), None, 1).unwrap().rates;
/// let booking = BookingPeriod {
///     start_time: NaiveDateTime::parse_from_str("2026-03-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-04-05 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
///
/// // 35 days: 1 month (2000) + 5 days (500), not 35 x 100.
/// let result = calculate_rental_amount(&rates, &booking, 1).unwrap();
/// assert_eq!(result.total, Decimal::from_str("2500").unwrap());
/// ```
pub fn calculate_rental_amount(
    rates: &ResolvedRates,
    booking: &BookingPeriod,
    step_number: u32,
) -> RateResult<RentalAmountResult> {
    let total_days = chargeable_days(booking)?;
    let tiers = decompose_days(total_days);

    let mut charge_lines = Vec::new();
    let mut total = Decimal::ZERO;

    for period in RentalPeriod::descending() {
        let units = tiers.units(period);
        if units == 0 {
            continue;
        }

        let rate = rates.get(period);
        let amount = Decimal::from(units) * rate.effective_unit_price();
        total += amount;

        charge_lines.push(ChargeLine {
            period,
            units,
            rate: rate.rate,
            discount_percent: rate.discount_percent,
            amount,
        });
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "rental_amount".to_string(),
        rule_name: "Base Rental Amount".to_string(),
        input: serde_json::json!({
            "start_time": booking.start_time.to_string(),
            "end_time": booking.end_time.to_string(),
            "total_days": total_days
        }),
        output: serde_json::json!({
            "monthly_units": tiers.monthly_units,
            "weekly_units": tiers.weekly_units,
            "daily_units": tiers.daily_units,
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} chargeable days decomposed as {} month(s) + {} week(s) + {} day(s), totalling {}",
            total_days,
            tiers.monthly_units,
            tiers.weekly_units,
            tiers.daily_units,
            total.normalize()
        ),
    };

    Ok(RentalAmountResult {
        total,
        charge_lines,
        audit_step,
    })
}
