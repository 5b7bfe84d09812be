//! Booking core for the PawStay boarding app.
//!
//! Turns calendar taps into a check-in/check-out range, gates each tap against
//! day-level capacity, prices the stay and validates the booking form before a
//! [`BookingRequest`] is handed to the booking and reminder collaborators.
//!
//! Everything here is synchronous and side-effect free apart from logging.

pub mod booking;
pub mod cache;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;

// Re-export commonly used items
pub use booking::{
    submit, BookingForm, BookingFormValidator, BookingQuoteBuilder, BookingRequest, BookingStore,
    FieldId, HandoffError, ReminderScheduler, SubmissionError, ValidationReport,
};
pub use cache::AvailabilityCache;
pub use calendar::{
    AvailabilityGate, Clock, DateRange, DateRangeSelector, FixedClock, RangeEvent, RejectReason,
    SelectionOutcome, StayDates, SystemClock,
};
pub use config::BoardingConfig;
pub use error::{Error, Result};
pub use models::{AvailabilityStatus, DayAvailability, DogSize, PetConfig, PetCount, PetType};
pub use pricing::{round_money, PricingError, PricingQuote, RateTable};

/// Installs a tracing subscriber for tests so `RUST_LOG=debug` shows log output.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
