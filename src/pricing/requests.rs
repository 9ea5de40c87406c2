//! Request DTOs for the quote API.
//!
//! Deserialization is deliberately forgiving: missing money fields become
//! zero and footage that is not a number becomes NaN, which the engine
//! normalizes to zero. Strict callers opt in with `"strict": true`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use super::models::{MinimumRule, PricingConfig};

/// Request to compute a quote
#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequestBody {
    #[serde(default, deserialize_with = "lenient_footage")]
    pub footage: f64,
    /// Falls back to the server's default pricing when absent
    #[serde(default)]
    pub config: Option<PricingConfigRequest>,
    #[serde(default)]
    pub strict: bool,
}

/// Pricing configuration supplied by the caller
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PricingConfigRequest {
    pub kit_costs: BTreeMap<u32, Option<Decimal>>,
    pub rate_under_100: Option<Decimal>,
    pub rate_under_200: Option<Decimal>,
    pub rate_200_plus: Option<Decimal>,
    pub use_lift: bool,
    pub lift_rental_per_day: Option<Decimal>,
    pub lift_days: Option<u32>,
    pub min_rule: MinimumRuleRequest,
}

/// Minimum-charge rule in the request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MinimumRuleRequest {
    pub enabled: bool,
    pub threshold_ft: u32,
    pub minimum: Option<Decimal>,
}

impl From<MinimumRuleRequest> for MinimumRule {
    fn from(req: MinimumRuleRequest) -> Self {
        MinimumRule {
            enabled: req.enabled,
            threshold_ft: req.threshold_ft,
            minimum: req.minimum.unwrap_or_default(),
        }
    }
}

impl From<PricingConfigRequest> for PricingConfig {
    fn from(req: PricingConfigRequest) -> Self {
        PricingConfig {
            kit_costs: req
                .kit_costs
                .into_iter()
                .map(|(length, cost)| (length, cost.unwrap_or_default()))
                .collect(),
            rate_under_100: req.rate_under_100.unwrap_or_default(),
            rate_under_200: req.rate_under_200.unwrap_or_default(),
            rate_200_plus: req.rate_200_plus.unwrap_or_default(),
            use_lift: req.use_lift,
            lift_rental_per_day: req.lift_rental_per_day.unwrap_or_default(),
            lift_days: req.lift_days.unwrap_or_default(),
            min_rule: req.min_rule.into(),
        }
    }
}

/// Accept numbers, numeric strings and null. Anything else is NaN.
fn lenient_footage<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => 0.0,
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(_) => f64::NAN,
    })
}
