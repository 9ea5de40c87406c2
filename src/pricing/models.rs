//! Domain models for the quote engine.
//!
//! These are plain value types: the engine takes a `QuoteRequest` and a
//! `PricingConfig` by reference and hands back a freshly built `Quote`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Minimum invoice charge for small jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumRule {
    pub enabled: bool,
    /// Jobs strictly below this footage (and above zero) get the minimum
    pub threshold_ft: u32,
    pub minimum: Decimal,
}

impl Default for MinimumRule {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_ft: 75,
            minimum: dec!(2000.00),
        }
    }
}

/// Business-configured rates, kit catalog and lift settings.
///
/// `kit_costs` maps kit length in feet to the cost of one kit. The map is
/// ordered so the solver always visits kit sizes smallest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub kit_costs: BTreeMap<u32, Decimal>,
    pub rate_under_100: Decimal,
    pub rate_under_200: Decimal,
    pub rate_200_plus: Decimal,
    pub use_lift: bool,
    pub lift_rental_per_day: Decimal,
    pub lift_days: u32,
    pub min_rule: MinimumRule,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            kit_costs: BTreeMap::from([
                (100, dec!(1488.24)),
                (150, dec!(2039.04)),
                (200, dec!(2514.24)),
                (400, dec!(4713.12)),
            ]),
            rate_under_100: dec!(27),
            rate_under_200: dec!(25),
            rate_200_plus: dec!(23),
            use_lift: false,
            lift_rental_per_day: dec!(350.00),
            lift_days: 1,
            min_rule: MinimumRule::default(),
        }
    }
}

/// Footage requested by the caller. Any `f64` is accepted, including NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteRequest {
    pub footage: f64,
}

impl QuoteRequest {
    pub fn new(footage: f64) -> Self {
        Self { footage }
    }
}

/// Rate bracket selected by footage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateTier {
    pub label: &'static str,
    pub rate: Decimal,
}

/// Cheapest multiset of kits covering a footage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KitCover {
    /// Kit length -> quantity
    pub counts: BTreeMap<u32, u32>,
    pub total_footage: u32,
    /// Unrounded sum of the selected kits' costs
    pub cost: Decimal,
}

impl KitCover {
    /// Excess kit footage over `footage`. Zero when the catalog could not
    /// reach the footage at all.
    pub fn leftover(&self, footage: u32) -> u32 {
        self.total_footage.saturating_sub(footage)
    }

    /// Number of kits bought, saturating at `u32::MAX`
    pub fn kit_count(&self) -> u32 {
        self.counts
            .values()
            .fold(0u32, |total, qty| total.saturating_add(*qty))
    }
}

/// Result of one quote computation. All money is rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub applied_footage: u32,
    pub tier: RateTier,
    pub core_revenue: Decimal,
    pub customer_total: Decimal,
    pub materials_cost: Decimal,
    pub profit: Decimal,
    pub deposit_base: Decimal,
    pub deposit_due: Decimal,
    pub lift_total: Decimal,
    pub total_kit_footage: u32,
    pub leftover_footage: u32,
    pub kit_counts: BTreeMap<u32, u32>,
    pub kit_count: u32,
    /// Set whenever the rule's condition holds (`enabled && 0 < footage <
    /// threshold_ft`), even if the footage revenue already exceeds the
    /// minimum and `core_revenue` is unchanged.
    pub min_applied: bool,
}
