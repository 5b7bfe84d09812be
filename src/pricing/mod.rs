//! Pricing engine module for boarding stays.
//!
//! Pure pricing calculations over a single named [`RateTable`]: nightly rate,
//! sales tax and flat multi-night packages.

pub mod calculators;
pub mod models;
pub mod responses;

// Re-export commonly used items
pub use calculators::{
    build_quote, calculate_nightly_rate, calculate_total, get_package_price, round_money,
    PricingError,
};
pub use models::{NightlyRate, PackageTier, PricingQuote, RateTable};
pub use responses::{MoneyResponse, QuoteSummary};
