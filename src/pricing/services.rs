//! Quote computation.
//!
//! `compute_quote` is a total function: every footage and every config maps
//! to a `Quote`. Callers that want malformed input rejected instead of
//! normalized run `validation` first; that is the only source of
//! `PricingError`.

use rust_decimal::Decimal;

use super::calculators::{
    apply_minimum_rule, deposit_due, lift_total, normalize_footage, round_money, select_tier,
};
use super::kits::cheapest_cover;
use super::models::{PricingConfig, Quote, QuoteRequest};

/// Pricing error types raised by strict validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    InvalidFootage {
        raw: String,
    },
    ConfigurationError {
        message: String,
        errors: Vec<String>,
    },
}

impl PricingError {
    /// Stable machine-readable tag for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::InvalidFootage { .. } => "invalid_footage",
            PricingError::ConfigurationError { .. } => "configuration_error",
        }
    }
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidFootage { raw } => {
                write!(f, "Footage {} is outside 0-400 ft", raw)
            }
            PricingError::ConfigurationError { message, .. } => {
                write!(f, "Configuration error: {}", message)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Compute a customer quote for the requested footage.
///
/// Footage is floored and clamped to `[0, 400]`, the rate tier is chosen, the
/// cheapest kit cover is solved, and money is rounded to cents once at the
/// end. Lift is charged to the customer and the deposit but not to profit.
pub fn compute_quote(request: &QuoteRequest, config: &PricingConfig) -> Quote {
    let footage = normalize_footage(request.footage);
    let tier = select_tier(footage, config);
    let cover = cheapest_cover(footage, &config.kit_costs);

    let base_revenue = Decimal::from(footage).saturating_mul(tier.rate);
    let (core_revenue, min_applied) = apply_minimum_rule(footage, base_revenue, &config.min_rule);

    let lift = lift_total(config);
    let materials = cover.cost;
    let deposit_base = materials.saturating_add(lift);

    Quote {
        applied_footage: footage,
        tier,
        core_revenue: round_money(core_revenue, 2),
        customer_total: round_money(core_revenue.saturating_add(lift), 2),
        materials_cost: round_money(materials, 2),
        profit: round_money(core_revenue.saturating_sub(materials), 2),
        deposit_base: round_money(deposit_base, 2),
        deposit_due: deposit_due(deposit_base),
        lift_total: round_money(lift, 2),
        total_kit_footage: cover.total_footage,
        leftover_footage: cover.leftover(footage),
        kit_count: cover.kit_count(),
        kit_counts: cover.counts,
        min_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::MinimumRule;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn quote(footage: f64, config: &PricingConfig) -> Quote {
        compute_quote(&QuoteRequest::new(footage), config)
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidFootage {
            raw: "NaN".to_string(),
        };
        assert!(err.to_string().contains("NaN"));
        assert_eq!(err.error_type(), "invalid_footage");

        let err = PricingError::ConfigurationError {
            message: "test error".to_string(),
            errors: vec![],
        };
        assert!(err.to_string().contains("test error"));
        assert_eq!(err.error_type(), "configuration_error");
    }

    #[test]
    fn test_clamping() {
        let config = PricingConfig::default();
        assert_eq!(quote(-5.0, &config).applied_footage, 0);
        assert_eq!(quote(9999.0, &config).applied_footage, 400);
        assert_eq!(quote(159.7, &config).applied_footage, 159);
        assert_eq!(quote(f64::NAN, &config).applied_footage, 0);
    }

    #[test]
    fn test_tier_boundaries() {
        let config = PricingConfig::default();
        assert_eq!(quote(99.0, &config).tier.rate, config.rate_under_100);
        assert_eq!(quote(100.0, &config).tier.rate, config.rate_under_200);
        assert_eq!(quote(199.0, &config).tier.rate, config.rate_under_200);
        assert_eq!(quote(200.0, &config).tier.rate, config.rate_200_plus);
    }

    #[test]
    fn test_minimum_rule() {
        let config = PricingConfig {
            rate_under_100: dec!(27),
            min_rule: MinimumRule {
                enabled: true,
                threshold_ft: 75,
                minimum: dec!(2000),
            },
            ..PricingConfig::default()
        };

        let small = quote(50.0, &config);
        assert_eq!(small.core_revenue, dec!(2000));
        assert!(small.min_applied);

        let at_threshold = quote(75.0, &config);
        assert_eq!(at_threshold.core_revenue, dec!(2025));
        assert!(!at_threshold.min_applied);
    }

    #[test]
    fn test_min_applied_flag_when_revenue_already_above_minimum() {
        let config = PricingConfig {
            rate_under_100: dec!(50),
            ..PricingConfig::default()
        };

        let q = quote(60.0, &config);
        assert_eq!(q.core_revenue, dec!(3000));
        assert!(q.min_applied);
    }

    #[test]
    fn test_full_quote_159_ft() {
        let config = PricingConfig::default();
        let q = quote(159.0, &config);

        assert_eq!(q.tier.label, "100–199 ft");
        assert_eq!(q.core_revenue, dec!(3975));
        assert_eq!(q.kit_counts, BTreeMap::from([(200, 1)]));
        assert_eq!(q.kit_count, 1);
        assert_eq!(q.total_kit_footage, 200);
        assert_eq!(q.leftover_footage, 41);
        assert_eq!(q.materials_cost, dec!(2514.24));
        assert_eq!(q.profit, dec!(1460.76));
        assert_eq!(q.lift_total, dec!(0));
        assert_eq!(q.customer_total, dec!(3975));
        assert_eq!(q.deposit_base, dec!(2514.24));
        assert_eq!(q.deposit_due, dec!(2765.66));
        assert!(!q.min_applied);
    }

    #[test]
    fn test_zero_footage() {
        let config = PricingConfig::default();
        let q = quote(0.0, &config);

        assert_eq!(q.materials_cost, dec!(0));
        assert!(q.kit_counts.is_empty());
        assert_eq!(q.kit_count, 0);
        assert_eq!(q.total_kit_footage, 0);
        assert_eq!(q.leftover_footage, 0);
        assert_eq!(q.core_revenue, dec!(0));
        assert!(!q.min_applied);
    }

    #[test]
    fn test_zero_footage_still_charges_lift() {
        let config = PricingConfig {
            use_lift: true,
            lift_rental_per_day: dec!(350),
            lift_days: 1,
            kit_costs: BTreeMap::new(),
            ..PricingConfig::default()
        };
        let q = quote(0.0, &config);

        assert_eq!(q.customer_total, dec!(350));
        assert_eq!(q.deposit_due, dec!(385));
        assert_eq!(q.profit, dec!(0));
    }

    #[test]
    fn test_lift_excluded_from_profit() {
        let without = PricingConfig::default();
        let with = PricingConfig {
            use_lift: true,
            lift_rental_per_day: dec!(350),
            lift_days: 1,
            ..PricingConfig::default()
        };

        let a = quote(159.0, &without);
        let b = quote(159.0, &with);

        assert_eq!(a.profit, b.profit);
        assert_eq!(b.lift_total, dec!(350));
        assert_eq!(b.customer_total, a.customer_total + dec!(350));
        assert_eq!(b.deposit_base, dec!(2864.24));
        assert_eq!(b.deposit_due, dec!(3150.66));
        assert_ne!(a.deposit_due, b.deposit_due);
    }

    #[test]
    fn test_rounding_applied_once_at_output() {
        let config = PricingConfig {
            kit_costs: BTreeMap::from([(10, dec!(1.004))]),
            rate_under_100: dec!(27.555),
            min_rule: MinimumRule {
                enabled: false,
                ..MinimumRule::default()
            },
            ..PricingConfig::default()
        };
        let q = quote(3.0, &config);

        // 82.665 - 1.004 = 81.661, not 82.67 - 1.00
        assert_eq!(q.core_revenue, dec!(82.67));
        assert_eq!(q.materials_cost, dec!(1.00));
        assert_eq!(q.profit, dec!(81.66));
    }

    #[test]
    fn test_monetary_outputs_are_rounded() {
        let config = PricingConfig::default();
        for footage in [1.0, 74.0, 150.5, 333.0, 400.0] {
            let q = quote(footage, &config);
            for amount in [
                q.core_revenue,
                q.customer_total,
                q.materials_cost,
                q.profit,
                q.deposit_base,
                q.deposit_due,
                q.lift_total,
            ] {
                assert_eq!(round_money(amount, 2), amount);
            }
        }
    }

    #[test]
    fn test_invariants_across_footage() {
        let config = PricingConfig::default();
        for footage in 0..=400 {
            let q = quote(f64::from(footage), &config);
            assert_eq!(q.applied_footage, footage);
            assert!(q.total_kit_footage >= q.applied_footage);
            assert_eq!(q.leftover_footage, q.total_kit_footage - q.applied_footage);

            let counted: Decimal = q
                .kit_counts
                .iter()
                .map(|(len, qty)| config.kit_costs[len] * Decimal::from(*qty))
                .sum();
            assert_eq!(q.materials_cost, round_money(counted, 2));
        }
    }

    #[test]
    fn test_empty_catalog() {
        let config = PricingConfig {
            kit_costs: BTreeMap::new(),
            ..PricingConfig::default()
        };
        let q = quote(120.0, &config);

        assert_eq!(q.materials_cost, dec!(0));
        assert!(q.kit_counts.is_empty());
        assert_eq!(q.leftover_footage, 0);
        assert_eq!(q.profit, q.core_revenue);
    }

    #[test]
    fn test_extreme_values_do_not_panic() {
        let config = PricingConfig {
            kit_costs: BTreeMap::from([(1, Decimal::MAX), (2, Decimal::MAX)]),
            rate_200_plus: Decimal::MAX,
            use_lift: true,
            lift_rental_per_day: Decimal::MAX,
            lift_days: u32::MAX,
            ..PricingConfig::default()
        };
        let q = quote(f64::INFINITY, &config);
        assert_eq!(q.applied_footage, 400);
    }

    #[test]
    fn test_deterministic() {
        let config = PricingConfig::default();
        for footage in [0.0, 42.0, 159.7, 275.0, 400.0] {
            let first = quote(footage, &config);
            for _ in 0..10 {
                assert_eq!(quote(footage, &config), first);
            }
        }
    }
}
