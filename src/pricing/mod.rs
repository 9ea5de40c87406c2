//! Quote engine for holiday-lighting installs.
//!
//! Turns a requested footage plus business pricing (tier rates, kit catalog,
//! lift rental, minimum charge) into a customer quote, deposit, materials
//! cost and profit. The engine is pure; `routes` exposes it over HTTP/JSON.

pub mod calculators;
pub mod format;
pub mod kits;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod validation;

// Re-export commonly used items
pub use calculators::round_money;
pub use format::format_currency;
pub use kits::cheapest_cover;
pub use models::{KitCover, MinimumRule, PricingConfig, Quote, QuoteRequest, RateTier};
pub use routes::router;
pub use services::{compute_quote, PricingError};
pub use validation::{validate_config, validate_footage};
