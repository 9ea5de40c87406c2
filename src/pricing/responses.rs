//! Response DTOs for the quote API.

use rust_decimal::Decimal;
use serde::Serialize;

use super::format::format_currency;
use super::models::{PricingConfig, Quote};

/// One kit size in the selected combination
#[derive(Debug, Serialize)]
pub struct KitLineResponse {
    pub length_ft: u32,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub line_total: Decimal,
}

/// Currency-formatted copies of the money fields
#[derive(Debug, Serialize)]
pub struct QuoteDisplayResponse {
    pub tier_rate: String,
    pub core_revenue: String,
    pub customer_total: String,
    pub materials_cost: String,
    pub profit: String,
    pub deposit_due: String,
    pub lift_total: String,
}

/// Response for quote computation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub applied_footage: u32,
    pub tier_label: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub tier_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub core_revenue: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub customer_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub materials_cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub profit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub deposit_base: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub deposit_due: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub lift_total: Decimal,
    pub total_kit_footage: u32,
    pub leftover_footage: u32,
    pub kit_count: u32,
    pub min_applied: bool,
    pub kits: Vec<KitLineResponse>,
    pub display: QuoteDisplayResponse,
}

impl QuoteResponse {
    /// Build the API response; `config` supplies per-kit unit costs.
    pub fn from_quote(quote: Quote, config: &PricingConfig) -> Self {
        let kits = quote
            .kit_counts
            .iter()
            .map(|(length, quantity)| {
                let unit_cost = config.kit_costs.get(length).copied().unwrap_or_default();
                KitLineResponse {
                    length_ft: *length,
                    quantity: *quantity,
                    unit_cost,
                    line_total: unit_cost.saturating_mul(Decimal::from(*quantity)),
                }
            })
            .collect();

        let display = QuoteDisplayResponse {
            tier_rate: format_currency(quote.tier.rate),
            core_revenue: format_currency(quote.core_revenue),
            customer_total: format_currency(quote.customer_total),
            materials_cost: format_currency(quote.materials_cost),
            profit: format_currency(quote.profit),
            deposit_due: format_currency(quote.deposit_due),
            lift_total: format_currency(quote.lift_total),
        };

        Self {
            applied_footage: quote.applied_footage,
            tier_label: quote.tier.label.to_string(),
            tier_rate: quote.tier.rate,
            core_revenue: quote.core_revenue,
            customer_total: quote.customer_total,
            materials_cost: quote.materials_cost,
            profit: quote.profit,
            deposit_base: quote.deposit_base,
            deposit_due: quote.deposit_due,
            lift_total: quote.lift_total,
            total_kit_footage: quote.total_kit_footage,
            leftover_footage: quote.leftover_footage,
            kit_count: quote.kit_count,
            min_applied: quote.min_applied,
            kits,
            display,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Response for the health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
