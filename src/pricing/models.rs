//! Rate table and quote models.
//!
//! The rate table is plain data so rates, tax and package thresholds can be
//! swapped (see [`crate::config`]) without touching selector or validator logic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{DogSize, PetConfig, PetCount, PetType};

/// Massachusetts sales tax
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.0625);

pub const DEFAULT_CURRENCY: &str = "USD";

/// One row of the nightly-rate table.
///
/// `dog_size` must be `None` for cats and `Some` for dogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightlyRate {
    pub pet_type: PetType,
    #[serde(default)]
    pub dog_size: Option<DogSize>,
    pub pet_count: PetCount,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
}

/// A flat multi-night package. `base_price` is before tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageTier {
    pub pet_type: PetType,
    #[serde(default)]
    pub dog_size: Option<DogSize>,
    pub pet_count: PetCount,
    pub min_nights: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
}

fn matches(
    pet_type: PetType,
    dog_size: Option<DogSize>,
    pet_count: PetCount,
    pets: &PetConfig,
) -> bool {
    pet_type == pets.pet_type
        && pet_count == pets.pet_count
        && dog_size == pets.effective_dog_size()
}

/// All pricing constants in one place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_tax_rate", with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
    pub nightly_rates: Vec<NightlyRate>,
    #[serde(default)]
    pub packages: Vec<PackageTier>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_tax_rate() -> Decimal {
    DEFAULT_TAX_RATE
}

impl RateTable {
    /// Exact nightly-rate lookup, no interpolation
    pub fn nightly_rate(&self, pets: &PetConfig) -> Option<Decimal> {
        self.nightly_rates
            .iter()
            .find(|row| matches(row.pet_type, row.dog_size, row.pet_count, pets))
            .map(|row| row.rate)
    }

    /// The package with the longest threshold that `nights` reaches, if any
    pub fn package_for(&self, pets: &PetConfig, nights: u32) -> Option<&PackageTier> {
        self.packages
            .iter()
            .filter(|tier| matches(tier.pet_type, tier.dog_size, tier.pet_count, pets))
            .filter(|tier| nights >= tier.min_nights)
            .max_by_key(|tier| tier.min_nights)
    }

    /// `1 + tax_rate`, the factor that turns a pre-tax amount into a tax-inclusive one.
    ///
    /// `None` if the tax rate is too large to represent.
    pub fn tax_multiplier(&self) -> Option<Decimal> {
        Decimal::ONE.checked_add(self.tax_rate)
    }

    /// Check a loaded table for values the calculators cannot price sensibly.
    ///
    /// Returns every problem found, empty when the table is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.currency.trim().is_empty() {
            errors.push("currency is empty".to_string());
        }
        if self.tax_rate.is_sign_negative() {
            errors.push(format!("tax_rate {} is negative", self.tax_rate));
        }

        let mut seen = HashSet::new();
        for row in &self.nightly_rates {
            if let Some(problem) = size_problem(row.pet_type, row.dog_size) {
                errors.push(format!("nightly rate {problem}"));
            }
            if row.rate.is_sign_negative() {
                errors.push(format!("nightly rate {} is negative", row.rate));
            }
            if !seen.insert((row.pet_type, row.dog_size, row.pet_count)) {
                errors.push(format!(
                    "duplicate nightly rate for {:?}/{:?}/{:?}",
                    row.pet_type, row.dog_size, row.pet_count
                ));
            }
        }

        let mut seen = HashSet::new();
        for tier in &self.packages {
            if let Some(problem) = size_problem(tier.pet_type, tier.dog_size) {
                errors.push(format!("package {problem}"));
            }
            if tier.min_nights == 0 {
                errors.push("package min_nights must be at least 1".to_string());
            }
            if tier.base_price.is_sign_negative() {
                errors.push(format!("package price {} is negative", tier.base_price));
            }
            if !seen.insert((tier.pet_type, tier.dog_size, tier.pet_count, tier.min_nights)) {
                errors.push(format!(
                    "duplicate {}-night package for {:?}/{:?}/{:?}",
                    tier.min_nights, tier.pet_type, tier.dog_size, tier.pet_count
                ));
            }
        }

        errors
    }
}

fn size_problem(pet_type: PetType, dog_size: Option<DogSize>) -> Option<&'static str> {
    match (pet_type, dog_size) {
        (PetType::Cat, Some(_)) => Some("for cats must not set dog_size"),
        (PetType::Dog, None) => Some("for dogs must set dog_size"),
        _ => None,
    }
}

impl Default for RateTable {
    fn default() -> Self {
        use DogSize::{Large, Small};
        use PetCount::{One, Two};
        use PetType::{Cat, Dog};

        let rate = |pet_type, dog_size, pet_count, rate| NightlyRate {
            pet_type,
            dog_size,
            pet_count,
            rate,
        };
        let package = |pet_type, dog_size, min_nights, base_price| PackageTier {
            pet_type,
            dog_size,
            pet_count: One,
            min_nights,
            base_price,
        };

        Self {
            currency: default_currency(),
            tax_rate: DEFAULT_TAX_RATE,
            nightly_rates: vec![
                rate(Cat, None, One, dec!(25)),
                rate(Cat, None, Two, dec!(40)),
                rate(Dog, Some(Small), One, dec!(40)),
                rate(Dog, Some(Large), One, dec!(60)),
                rate(Dog, Some(Small), Two, dec!(70)),
                rate(Dog, Some(Large), Two, dec!(110)),
            ],
            packages: vec![
                package(Cat, None, 60, dec!(1400)),
                package(Cat, None, 30, dec!(700)),
                package(Dog, Some(Small), 30, dec!(1000)),
                package(Dog, Some(Large), 30, dec!(1500)),
            ],
        }
    }
}

/// Full-precision pricing breakdown for one stay.
///
/// Amounts are never rounded here; use [`PricingQuote::summary`] for display.
/// Only the calculators build quotes, so the total and savings always agree
/// with the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingQuote {
    pub(super) currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub(super) nightly_rate: Decimal,
    pub(super) nights: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub(super) subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub(super) tax: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub(super) package_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub(super) total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub(super) savings: Decimal,
}

impl PricingQuote {
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn nightly_rate(&self) -> Decimal {
        self.nightly_rate
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Tax-inclusive package price, when the stay qualifies for one
    pub fn package_price(&self) -> Option<Decimal> {
        self.package_price
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn savings(&self) -> Decimal {
        self.savings
    }

    pub fn has_package(&self) -> bool {
        self.package_price.is_some()
    }

    /// What the stay would cost at the nightly rate, tax included
    pub fn nightly_total(&self) -> Decimal {
        self.subtotal + self.tax
    }
}
