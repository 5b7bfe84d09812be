//! Presentation DTOs for quotes.
//!
//! This is the only place amounts are rounded to the cent.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::round_money;
use super::models::PricingQuote;

/// Money value for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    fn cents(amount: Decimal, currency: &str) -> Self {
        Self {
            amount: round_money(amount, 2),
            currency: currency.to_string(),
        }
    }
}

/// Rounded quote breakdown for summary views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub nightly_rate: MoneyResponse,
    pub nights: u32,
    pub subtotal: MoneyResponse,
    pub tax: MoneyResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_price: Option<MoneyResponse>,
    pub total: MoneyResponse,
    pub savings: MoneyResponse,
}

impl PricingQuote {
    pub fn summary(&self) -> QuoteSummary {
        let currency = self.currency.as_str();
        QuoteSummary {
            nightly_rate: MoneyResponse::cents(self.nightly_rate, currency),
            nights: self.nights,
            subtotal: MoneyResponse::cents(self.subtotal, currency),
            tax: MoneyResponse::cents(self.tax, currency),
            package_price: self
                .package_price
                .map(|amount| MoneyResponse::cents(amount, currency)),
            total: MoneyResponse::cents(self.total, currency),
            savings: MoneyResponse::cents(self.savings, currency),
        }
    }
}
