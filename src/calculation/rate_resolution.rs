//! Rate resolution functionality.
//!
//! This module resolves the effective rate for each rental period from a
//! vehicle's base rental table, its manual overrides, and the fleet-wide
//! bulk discount rule. The precedence is strict and has no exceptions:
//! a manual override always wins over the bulk discount rule, which always
//! wins over the unmodified base rate.

use rust_decimal::Decimal;

use crate::error::{RateError, RateResult};
use crate::models::{
    AuditStep, BasePeriodRate, BaseRentalTable, BulkDiscountRule, ManualOverride, ManualOverrides,
    RateOverride, RateSource, RentalPeriod, RentalPeriodRate, ResolvedRates,
};

/// The maximum discount an operator may set on a per-vehicle manual
/// override.
pub const MAX_MANUAL_DISCOUNT: u32 = 100;

/// The maximum discount a fleet-wide bulk rule may carry per period.
///
/// Deliberately tighter than [`MAX_MANUAL_DISCOUNT`]: the portal caps bulk
/// entry at 30% while allowing per-vehicle overrides up to 100%. The
/// asymmetry is preserved from the portal's behaviour as given.
pub const MAX_BULK_DISCOUNT: u32 = 30;

/// Validates a manual override before it is accepted for resolution.
///
/// # Arguments
///
/// * `period` - The rental period the override applies to (used in errors)
/// * `manual` - The override to validate
///
/// # Errors
///
/// - [`RateError::InvalidRate`] if the rate is negative
/// - [`RateError::InvalidDiscount`] if the discount exceeds 100%
/// - [`RateError::MissingWeekdaySelection`] if the discount is recurring
///   and non-zero but no weekday is selected
pub fn validate_manual_override(
    period: RentalPeriod,
    manual: &ManualOverride,
) -> RateResult<()> {
    if manual.rate < Decimal::ZERO {
        return Err(RateError::InvalidRate {
            period,
            rate: manual.rate,
        });
    }

    if manual.discount_percent > MAX_MANUAL_DISCOUNT {
        return Err(RateError::InvalidDiscount {
            period,
            discount: manual.discount_percent,
            max: MAX_MANUAL_DISCOUNT,
        });
    }

    if manual.is_recurring && manual.discount_percent > 0 && manual.applicable_weekdays.is_empty()
    {
        return Err(RateError::MissingWeekdaySelection { period });
    }

    Ok(())
}

/// Validates a bulk discount rule against the fleet-wide entry cap.
///
/// # Errors
///
/// Returns [`RateError::InvalidDiscount`] if any period's discount exceeds
/// [`MAX_BULK_DISCOUNT`].
pub fn validate_bulk_rule(rule: &BulkDiscountRule) -> RateResult<()> {
    for period in RentalPeriod::descending() {
        let discount = rule.discount_for(period);
        if discount > MAX_BULK_DISCOUNT {
            return Err(RateError::InvalidDiscount {
                period,
                discount,
                max: MAX_BULK_DISCOUNT,
            });
        }
    }
    Ok(())
}

/// Selects which rule source applies, as an explicit priority list.
///
/// Manual wins over bulk wins over none. Presence is decided by the typed
/// `Option`s, never by field truthiness.
pub fn select_override<'a>(
    manual: Option<&'a ManualOverride>,
    bulk: Option<&'a BulkDiscountRule>,
) -> RateOverride<'a> {
    match (manual, bulk) {
        (Some(m), _) => RateOverride::Manual(m),
        (None, Some(b)) => RateOverride::Bulk(b),
        (None, None) => RateOverride::None,
    }
}

/// The result of resolving one period's rate, including the audit step.
#[derive(Debug, Clone)]
pub struct PeriodRateResolution {
    /// The resolved rate for the period.
    pub rate: RentalPeriodRate,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the effective rate for a single rental period.
///
/// Resolution follows the override precedence:
/// 1. A present manual override supplies every attribute directly.
/// 2. Otherwise a present bulk rule supplies the discount schedule while
///    the rate and mileage come from the vehicle's own base entry.
/// 3. Otherwise the base entry is used with no discount.
///
/// Manual-override validation is enforced before acceptance.
///
/// # Examples
///
/// ```
/// use rate_engine::calculation::resolve_period_rate;
/// use rate_engine::models::{BasePeriodRate, RateSource, RentalPeriod};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = BasePeriodRate {
///     base_rate: Decimal::from_str("100.00").unwrap(),
///     base_mileage_limit: 200,
/// };
/// let resolution = resolve_period_rate(RentalPeriod::Daily, &base, None, None, 1).unwrap();
/// assert_eq!(resolution.rate.source, RateSource::BaseRate);
/// assert!(!resolution.rate.is_discount_active);
/// ```
pub fn resolve_period_rate(
    period: RentalPeriod,
    base: &BasePeriodRate,
    manual: Option<&ManualOverride>,
    bulk: Option<&BulkDiscountRule>,
    step_number: u32,
) -> RateResult<PeriodRateResolution> {
    if let Some(manual) = manual {
        validate_manual_override(period, manual)?;
    }

    let rate = match select_override(manual, bulk) {
        RateOverride::Manual(manual) => RentalPeriodRate {
            period,
            rate: manual.rate,
            mileage_limit: manual.mileage_limit,
            discount_percent: manual.discount_percent,
            applicable_weekdays: manual.applicable_weekdays.clone(),
            is_recurring: manual.is_recurring,
            is_discount_active: true,
            source: RateSource::ManualOverride,
        },
        RateOverride::Bulk(rule) => RentalPeriodRate {
            period,
            rate: base.base_rate,
            mileage_limit: base.base_mileage_limit,
            discount_percent: rule.discount_for(period),
            applicable_weekdays: rule.applicable_weekdays.clone(),
            is_recurring: rule.is_recurring,
            is_discount_active: true,
            source: RateSource::BulkDiscount,
        },
        RateOverride::None => RentalPeriodRate {
            period,
            rate: base.base_rate,
            mileage_limit: base.base_mileage_limit,
            discount_percent: 0,
            applicable_weekdays: Vec::new(),
            is_recurring: false,
            is_discount_active: false,
            source: RateSource::BaseRate,
        },
    };

    let reasoning = match rate.source {
        RateSource::ManualOverride => format!(
            "Using per-vehicle manual override for the {} period: rate {} with {}% discount",
            period, rate.rate, rate.discount_percent
        ),
        RateSource::BulkDiscount => format!(
            "No manual override for the {} period; applying fleet bulk discount of {}% to base rate {}",
            period, rate.discount_percent, rate.rate
        ),
        RateSource::BaseRate => format!(
            "No override for the {} period; using base rate {} with no discount",
            period, rate.rate
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_resolution".to_string(),
        rule_name: "Rate Resolution".to_string(),
        input: serde_json::json!({
            "period": period.to_string(),
            "base_rate": base.base_rate.normalize().to_string(),
            "manual_override_present": manual.is_some(),
            "bulk_rule_present": bulk.is_some()
        }),
        output: serde_json::json!({
            "rate": rate.rate.normalize().to_string(),
            "discount_percent": rate.discount_percent,
            "source": match rate.source {
                RateSource::ManualOverride => "manual_override",
                RateSource::BulkDiscount => "bulk_discount",
                RateSource::BaseRate => "base_rate",
            },
        }),
        reasoning,
    };

    Ok(PeriodRateResolution { rate, audit_step })
}

/// The result of resolving all three period rates for a vehicle.
#[derive(Debug, Clone)]
pub struct RateResolution {
    /// The resolved rates, one per period.
    pub rates: ResolvedRates,
    /// The audit steps recording each period's resolution.
    pub audit_steps: Vec<AuditStep>,
}

/// Resolves the effective rates for all three rental periods of a vehicle.
///
/// Each period is resolved independently; a manual override on one period
/// does not shadow the bulk rule on the others.
///
/// # Errors
///
/// Fails if any present manual override is invalid; in that case no rates
/// are produced at all.
pub fn resolve_rates(
    table: &BaseRentalTable,
    overrides: &ManualOverrides,
    bulk: Option<&BulkDiscountRule>,
    step_number: u32,
) -> RateResult<RateResolution> {
    let daily = resolve_period_rate(
        RentalPeriod::Daily,
        table.get(RentalPeriod::Daily),
        overrides.get(RentalPeriod::Daily),
        bulk,
        step_number,
    )?;
    let weekly = resolve_period_rate(
        RentalPeriod::Weekly,
        table.get(RentalPeriod::Weekly),
        overrides.get(RentalPeriod::Weekly),
        bulk,
        step_number + 1,
    )?;
    let monthly = resolve_period_rate(
        RentalPeriod::Monthly,
        table.get(RentalPeriod::Monthly),
        overrides.get(RentalPeriod::Monthly),
        bulk,
        step_number + 2,
    )?;

    Ok(RateResolution {
        rates: ResolvedRates {
            daily: daily.rate,
            weekly: weekly.rate,
            monthly: monthly.rate,
        },
        audit_steps: vec![daily.audit_step, weekly.audit_step, monthly.audit_step],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
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

    fn create_manual_override(discount: u32) -> ManualOverride {
        ManualOverride {
            rate: dec("85.00"),
            discount_percent: discount,
            mileage_limit: 300,
            applicable_weekdays: vec![Weekday::Sat, Weekday::Sun],
            is_recurring: true,
        }
    }

    fn create_bulk_rule() -> BulkDiscountRule {
        BulkDiscountRule {
            daily_discount: 10,
            weekly_discount: 15,
            monthly_discount: 20,
            applicable_weekdays: vec![Weekday::Mon, Weekday::Tue],
            is_recurring: true,
        }
    }

    /// RR-001: manual override wins over bulk rule
    #[test]
    fn test_manual_override_wins_over_bulk_rule() {
        let table = create_test_table();
        let manual = create_manual_override(15);
        let bulk = create_bulk_rule();

        let resolution = resolve_period_rate(
            RentalPeriod::Daily,
            table.get(RentalPeriod::Daily),
            Some(&manual),
            Some(&bulk),
            1,
        )
        .unwrap();

        assert_eq!(resolution.rate.source, RateSource::ManualOverride);
        assert_eq!(resolution.rate.rate, dec("85.00"));
        assert_eq!(resolution.rate.discount_percent, 15);
        assert_eq!(resolution.rate.mileage_limit, 300);
        assert_eq!(
            resolution.rate.applicable_weekdays,
            vec![Weekday::Sat, Weekday::Sun]
        );
        assert!(resolution.rate.is_discount_active);
    }

    /// RR-002: bulk rule applies when no manual override
    #[test]
    fn test_bulk_rule_applies_without_manual_override() {
        let table = create_test_table();
        let bulk = create_bulk_rule();

        let resolution = resolve_period_rate(
            RentalPeriod::Weekly,
            table.get(RentalPeriod::Weekly),
            None,
            Some(&bulk),
            1,
        )
        .unwrap();

        assert_eq!(resolution.rate.source, RateSource::BulkDiscount);
        // Rate and mileage stay the vehicle's own.
        assert_eq!(resolution.rate.rate, dec("600.00"));
        assert_eq!(resolution.rate.mileage_limit, 1200);
        // Discount schedule comes from the rule's period field.
        assert_eq!(resolution.rate.discount_percent, 15);
        assert_eq!(
            resolution.rate.applicable_weekdays,
            vec![Weekday::Mon, Weekday::Tue]
        );
        assert!(resolution.rate.is_recurring);
        assert!(resolution.rate.is_discount_active);
    }

    /// RR-003: base rate fallback when no override of any kind
    #[test]
    fn test_base_rate_fallback_without_overrides() {
        let table = create_test_table();

        let resolution = resolve_period_rate(
            RentalPeriod::Monthly,
            table.get(RentalPeriod::Monthly),
            None,
            None,
            1,
        )
        .unwrap();

        assert_eq!(resolution.rate.source, RateSource::BaseRate);
        assert_eq!(resolution.rate.rate, dec("2000.00"));
        assert_eq!(resolution.rate.discount_percent, 0);
        assert!(resolution.rate.applicable_weekdays.is_empty());
        assert!(!resolution.rate.is_recurring);
        assert!(!resolution.rate.is_discount_active);
    }

    /// RR-004: manual discount above 100 is rejected
    #[test]
    fn test_manual_discount_above_100_rejected() {
        let table = create_test_table();
        let manual = create_manual_override(150);

        let result = resolve_period_rate(
            RentalPeriod::Daily,
            table.get(RentalPeriod::Daily),
            Some(&manual),
            None,
            1,
        );

        match result.unwrap_err() {
            RateError::InvalidDiscount {
                period,
                discount,
                max,
            } => {
                assert_eq!(period, RentalPeriod::Daily);
                assert_eq!(discount, 150);
                assert_eq!(max, MAX_MANUAL_DISCOUNT);
            }
            other => panic!("Expected InvalidDiscount, got {:?}", other),
        }
    }

    /// RR-005: negative manual rate is rejected
    #[test]
    fn test_negative_manual_rate_rejected() {
        let table = create_test_table();
        let mut manual = create_manual_override(10);
        manual.rate = dec("-5.00");

        let result = resolve_period_rate(
            RentalPeriod::Daily,
            table.get(RentalPeriod::Daily),
            Some(&manual),
            None,
            1,
        );

        match result.unwrap_err() {
            RateError::InvalidRate { period, rate } => {
                assert_eq!(period, RentalPeriod::Daily);
                assert_eq!(rate, dec("-5.00"));
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    /// RR-006: recurring discount without weekdays is rejected
    #[test]
    fn test_recurring_discount_without_weekdays_rejected() {
        let table = create_test_table();
        let mut manual = create_manual_override(10);
        manual.applicable_weekdays.clear();

        let result = resolve_period_rate(
            RentalPeriod::Weekly,
            table.get(RentalPeriod::Weekly),
            Some(&manual),
            None,
            1,
        );

        match result.unwrap_err() {
            RateError::MissingWeekdaySelection { period } => {
                assert_eq!(period, RentalPeriod::Weekly);
            }
            other => panic!("Expected MissingWeekdaySelection, got {:?}", other),
        }
    }

    /// RR-007: recurring override with zero discount needs no weekdays
    #[test]
    fn test_recurring_zero_discount_needs_no_weekdays() {
        let table = create_test_table();
        let mut manual = create_manual_override(0);
        manual.applicable_weekdays.clear();

        let result = resolve_period_rate(
            RentalPeriod::Daily,
            table.get(RentalPeriod::Daily),
            Some(&manual),
            None,
            1,
        );

        assert!(result.is_ok());
    }

    /// RR-008: manual discount of exactly 100 is accepted
    #[test]
    fn test_manual_discount_of_100_accepted() {
        let table = create_test_table();
        let manual = create_manual_override(100);

        let result = resolve_period_rate(
            RentalPeriod::Daily,
            table.get(RentalPeriod::Daily),
            Some(&manual),
            None,
            1,
        );

        assert!(result.is_ok());
        assert_eq!(result.unwrap().rate.discount_percent, 100);
    }

    #[test]
    fn test_bulk_rule_cap_accepts_30() {
        let mut rule = create_bulk_rule();
        rule.monthly_discount = 30;
        assert!(validate_bulk_rule(&rule).is_ok());
    }

    #[test]
    fn test_bulk_rule_cap_rejects_31() {
        let mut rule = create_bulk_rule();
        rule.weekly_discount = 31;

        match validate_bulk_rule(&rule).unwrap_err() {
            RateError::InvalidDiscount {
                period,
                discount,
                max,
            } => {
                assert_eq!(period, RentalPeriod::Weekly);
                assert_eq!(discount, 31);
                assert_eq!(max, MAX_BULK_DISCOUNT);
            }
            other => panic!("Expected InvalidDiscount, got {:?}", other),
        }
    }

    #[test]
    fn test_select_override_priority() {
        let manual = create_manual_override(10);
        let bulk = create_bulk_rule();

        assert!(matches!(
            select_override(Some(&manual), Some(&bulk)),
            RateOverride::Manual(_)
        ));
        assert!(matches!(
            select_override(None, Some(&bulk)),
            RateOverride::Bulk(_)
        ));
        assert!(matches!(select_override(None, None), RateOverride::None));
    }

    #[test]
    fn test_resolve_rates_mixes_sources_per_period() {
        let table = create_test_table();
        let overrides = ManualOverrides {
            daily: Some(create_manual_override(15)),
            weekly: None,
            monthly: None,
        };
        let bulk = create_bulk_rule();

        let resolution = resolve_rates(&table, &overrides, Some(&bulk), 1).unwrap();

        assert_eq!(resolution.rates.daily.source, RateSource::ManualOverride);
        assert_eq!(resolution.rates.weekly.source, RateSource::BulkDiscount);
        assert_eq!(resolution.rates.monthly.source, RateSource::BulkDiscount);
        assert_eq!(resolution.audit_steps.len(), 3);
    }

    #[test]
    fn test_resolve_rates_fails_on_any_invalid_override() {
        let table = create_test_table();
        let overrides = ManualOverrides {
            daily: None,
            weekly: None,
            monthly: Some(create_manual_override(150)),
        };

        let result = resolve_rates(&table, &overrides, None, 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_audit_steps_numbered_sequentially() {
        let table = create_test_table();
        let overrides = ManualOverrides::default();

        let resolution = resolve_rates(&table, &overrides, None, 5).unwrap();

        let numbers: Vec<u32> = resolution
            .audit_steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![5, 6, 7]);
    }

    #[test]
    fn test_audit_step_records_source() {
        let table = create_test_table();
        let bulk = create_bulk_rule();

        let resolution = resolve_period_rate(
            RentalPeriod::Daily,
            table.get(RentalPeriod::Daily),
            None,
            Some(&bulk),
            1,
        )
        .unwrap();

        assert_eq!(resolution.audit_step.rule_id, "rate_resolution");
        assert_eq!(
            resolution.audit_step.output["source"].as_str().unwrap(),
            "bulk_discount"
        );
        assert!(resolution.audit_step.reasoning.contains("bulk discount"));
    }
}
