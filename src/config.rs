//! Server configuration.
//!
//! Loaded from environment variables (after `.env` via dotenvy) with the
//! stock pricing catalog as fallback for every pricing field.

use std::collections::BTreeMap;
use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::pricing::PricingConfig;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Pricing used when a quote request carries no config of its own
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PricingConfig::default();

        let kit_costs = match lookup("QUOTE_KIT_COSTS") {
            Some(raw) => parse_kit_costs(&raw)?,
            None => defaults.kit_costs,
        };

        let pricing = PricingConfig {
            kit_costs,
            rate_under_100: parse_var(&lookup, "QUOTE_RATE_UNDER_100", defaults.rate_under_100)?,
            rate_under_200: parse_var(&lookup, "QUOTE_RATE_UNDER_200", defaults.rate_under_200)?,
            rate_200_plus: parse_var(&lookup, "QUOTE_RATE_200_PLUS", defaults.rate_200_plus)?,
            use_lift: parse_var(&lookup, "QUOTE_USE_LIFT", defaults.use_lift)?,
            lift_rental_per_day: parse_var(
                &lookup,
                "QUOTE_LIFT_PER_DAY",
                defaults.lift_rental_per_day,
            )?,
            lift_days: parse_var(&lookup, "QUOTE_LIFT_DAYS", defaults.lift_days)?,
            min_rule: crate::pricing::MinimumRule {
                enabled: parse_var(&lookup, "QUOTE_MIN_ENABLED", defaults.min_rule.enabled)?,
                threshold_ft: parse_var(
                    &lookup,
                    "QUOTE_MIN_THRESHOLD_FT",
                    defaults.min_rule.threshold_ft,
                )?,
                minimum: parse_var(&lookup, "QUOTE_MIN_AMOUNT", defaults.min_rule.minimum)?,
            },
        };

        Ok(AppConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT", 3000)?,
            pricing,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

/// Parse `length:cost` pairs, e.g. `100:1488.24,150:2039.04`.
fn parse_kit_costs(raw: &str) -> Result<BTreeMap<u32, Decimal>, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: "QUOTE_KIT_COSTS".to_string(),
        value: raw.to_string(),
    };

    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (length, cost) = pair.split_once(':').ok_or_else(invalid)?;
            let length = length.trim().parse::<u32>().map_err(|_| invalid())?;
            let cost = cost.trim().parse::<Decimal>().map_err(|_| invalid())?;
            Ok::<_, ConfigError>((length, cost))
        })
        .collect()
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
