//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no I/O, no shared state.
//! Money stays unrounded until `round_money` is applied at the output.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{MinimumRule, PricingConfig, RateTier};

/// Largest footage the engine will price.
pub const MAX_FOOTAGE: u32 = 400;

/// Footage at which the second rate tier starts.
pub const TIER_1_LIMIT_FT: u32 = 100;

/// Footage at which the third rate tier starts.
pub const TIER_2_LIMIT_FT: u32 = 200;

/// Deposit is 110% of materials plus lift.
pub const DEPOSIT_MULTIPLIER: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

/// Round to specified decimal places, halves away from zero (ROUND_HALF_UP).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use lightquote::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Floor and clamp raw footage into `[0, MAX_FOOTAGE]`.
///
/// NaN becomes 0, infinities clamp to the nearest bound.
pub fn normalize_footage(footage: f64) -> u32 {
    if footage.is_nan() {
        return 0;
    }
    footage.floor().clamp(0.0, f64::from(MAX_FOOTAGE)) as u32
}

/// Pick the per-foot rate bracket for an already-normalized footage.
pub fn select_tier(footage: u32, config: &PricingConfig) -> RateTier {
    if footage < TIER_1_LIMIT_FT {
        RateTier {
            label: "Under 100 ft",
            rate: config.rate_under_100,
        }
    } else if footage < TIER_2_LIMIT_FT {
        RateTier {
            label: "100–199 ft",
            rate: config.rate_under_200,
        }
    } else {
        RateTier {
            label: "200 ft+",
            rate: config.rate_200_plus,
        }
    }
}

/// Raise revenue to the configured minimum for small, non-empty jobs.
///
/// Returns the (possibly raised) revenue and whether the rule fired. The rule
/// fires for `0 < footage < threshold_ft`, even when revenue already exceeds
/// the minimum.
pub fn apply_minimum_rule(footage: u32, revenue: Decimal, rule: &MinimumRule) -> (Decimal, bool) {
    if rule.enabled && footage > 0 && footage < rule.threshold_ft {
        (revenue.max(rule.minimum), true)
    } else {
        (revenue, false)
    }
}

/// Lift rental passed through to the customer.
pub fn lift_total(config: &PricingConfig) -> Decimal {
    if config.use_lift {
        config
            .lift_rental_per_day
            .saturating_mul(Decimal::from(config.lift_days))
    } else {
        Decimal::ZERO
    }
}

/// Deposit owed up front, rounded to cents.
pub fn deposit_due(deposit_base: Decimal) -> Decimal {
    round_money(deposit_base.saturating_mul(DEPOSIT_MULTIPLIER), 2)
}
