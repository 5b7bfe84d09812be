//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O. Amounts keep full `Decimal`
//! precision; rounding happens only at presentation via [`round_money`].

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::models::{DogSize, PetConfig, PetCount, PetType};

use super::models::{PricingQuote, RateTable};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Stay must be at least one night, got {0}")]
    InvalidNights(u32),

    #[error("No nightly rate configured for {pet_type:?}/{dog_size:?}/{pet_count:?}")]
    MissingRate {
        pet_type: PetType,
        dog_size: Option<DogSize>,
        pet_count: PetCount,
    },

    #[error("Price calculation overflowed")]
    Overflow,
}

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use pawstay_booking::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(132.8125), 2), dec!(132.81));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

fn ensure_nights(nights: u32) -> Result<(), PricingError> {
    if nights == 0 {
        return Err(PricingError::InvalidNights(nights));
    }
    Ok(())
}

/// Pre-tax subtotal and the tax on it.
fn nightly_breakdown(
    table: &RateTable,
    nightly_rate: Decimal,
    nights: u32,
) -> Result<(Decimal, Decimal), PricingError> {
    let subtotal = nightly_rate
        .checked_mul(Decimal::from(nights))
        .ok_or(PricingError::Overflow)?;
    let tax = subtotal
        .checked_mul(table.tax_rate)
        .ok_or(PricingError::Overflow)?;
    Ok((subtotal, tax))
}

fn checked_sum(a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_add(b).ok_or(PricingError::Overflow)
}

/// Look up the nightly rate for a pet configuration.
///
/// Dog size is ignored for cats.
pub fn calculate_nightly_rate(table: &RateTable, pets: &PetConfig) -> Result<Decimal, PricingError> {
    table
        .nightly_rate(pets)
        .ok_or(PricingError::MissingRate {
            pet_type: pets.pet_type,
            dog_size: pets.effective_dog_size(),
            pet_count: pets.pet_count,
        })
}

/// Nightly-rate total for a stay, tax included.
///
/// Tax is applied once to the full subtotal, never per night.
pub fn calculate_total(
    table: &RateTable,
    pets: &PetConfig,
    nights: u32,
) -> Result<Decimal, PricingError> {
    ensure_nights(nights)?;
    let (subtotal, tax) = nightly_breakdown(table, calculate_nightly_rate(table, pets)?, nights)?;
    checked_sum(subtotal, tax)
}

/// Flat package price (tax included) for long stays, if one applies.
///
/// Packages bypass the nightly table entirely. When several thresholds are
/// reached the longest one wins.
pub fn get_package_price(
    table: &RateTable,
    pets: &PetConfig,
    nights: u32,
) -> Result<Option<Decimal>, PricingError> {
    ensure_nights(nights)?;
    let Some(tier) = table.package_for(pets, nights) else {
        return Ok(None);
    };
    table
        .tax_multiplier()
        .and_then(|multiplier| tier.base_price.checked_mul(multiplier))
        .map(Some)
        .ok_or(PricingError::Overflow)
}

/// Build the full pricing breakdown for a stay.
pub fn build_quote(
    table: &RateTable,
    pets: &PetConfig,
    nights: u32,
) -> Result<PricingQuote, PricingError> {
    ensure_nights(nights)?;

    let nightly_rate = calculate_nightly_rate(table, pets)?;
    let (subtotal, tax) = nightly_breakdown(table, nightly_rate, nights)?;
    let nightly_total = checked_sum(subtotal, tax)?;
    let package_price = get_package_price(table, pets, nights)?;

    let (total, savings) = match package_price {
        Some(package) => (
            package,
            nightly_total
                .checked_sub(package)
                .ok_or(PricingError::Overflow)?,
        ),
        None => (nightly_total, Decimal::ZERO),
    };

    tracing::debug!(
        "Quoted {:?} for {} nights: total {} {}",
        pets,
        nights,
        total,
        table.currency
    );

    Ok(PricingQuote {
        currency: table.currency.clone(),
        nightly_rate,
        nights,
        subtotal,
        tax,
        package_price,
        total,
        savings,
    })
}
