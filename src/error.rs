//! Error handling for the booking core

use crate::booking::SubmissionError;
use crate::calendar::RangeError;
use crate::config::ConfigError;
use crate::pricing::PricingError;

/// Crate-level error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Date range error: {0}")]
    Range(#[from] RangeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

pub type Result<T> = std::result::Result<T, Error>;
