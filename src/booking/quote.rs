//! Pricing for the current calendar selection.

use crate::calendar::{DateRange, StayDates};
use crate::models::PetConfig;
use crate::pricing::{build_quote, PricingError, PricingQuote, RateTable};

/// Prices the current selection against a rate table.
#[derive(Debug, Clone, Copy)]
pub struct BookingQuoteBuilder<'a> {
    table: &'a RateTable,
}

impl<'a> BookingQuoteBuilder<'a> {
    pub fn new(table: &'a RateTable) -> Self {
        Self { table }
    }

    /// Quote for the selection, or `None` until both dates are chosen so
    /// summary views never show partial pricing.
    pub fn quote(
        &self,
        range: &DateRange,
        pets: &PetConfig,
    ) -> Result<Option<PricingQuote>, PricingError> {
        match range.stay() {
            Some(stay) => self.quote_stay(&stay, pets).map(Some),
            None => Ok(None),
        }
    }

    pub fn quote_stay(&self, stay: &StayDates, pets: &PetConfig) -> Result<PricingQuote, PricingError> {
        build_quote(self.table, pets, stay.nights())
    }
}
