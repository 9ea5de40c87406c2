//! Strict input checks for callers that prefer rejection over normalization.
//!
//! The engine itself never calls into this module.

use rust_decimal::Decimal;

use super::calculators::MAX_FOOTAGE;
use super::models::PricingConfig;
use super::services::PricingError;

/// Reject footage the engine would otherwise clamp or zero out.
pub fn validate_footage(footage: f64) -> Result<(), PricingError> {
    if footage.is_finite() && (0.0..=f64::from(MAX_FOOTAGE)).contains(&footage) {
        Ok(())
    } else {
        Err(PricingError::InvalidFootage {
            raw: footage.to_string(),
        })
    }
}

/// Collect every problem in a pricing config.
pub fn validate_config(config: &PricingConfig) -> Result<(), PricingError> {
    let mut errors = Vec::new();

    for (length, cost) in &config.kit_costs {
        if *length == 0 {
            errors.push("kit length must be positive".to_string());
        }
        if *cost < Decimal::ZERO {
            errors.push(format!("kit {} ft has negative cost {}", length, cost));
        }
    }

    for (name, rate) in [
        ("rate_under_100", config.rate_under_100),
        ("rate_under_200", config.rate_under_200),
        ("rate_200_plus", config.rate_200_plus),
    ] {
        if rate <= Decimal::ZERO {
            errors.push(format!("{} must be positive, got {}", name, rate));
        }
    }

    if config.lift_rental_per_day < Decimal::ZERO {
        errors.push(format!(
            "lift_rental_per_day must not be negative, got {}",
            config.lift_rental_per_day
        ));
    }
    if config.use_lift && config.lift_days == 0 {
        errors.push("lift_days must be positive when lift is used".to_string());
    }

    if config.min_rule.minimum < Decimal::ZERO {
        errors.push(format!(
            "min_rule.minimum must not be negative, got {}",
            config.min_rule.minimum
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PricingError::ConfigurationError {
            message: format!("{} invalid pricing setting(s)", errors.len()),
            errors,
        })
    }
}
