//! Submittable booking requests and the outbound handoff.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{DateRange, StayDates};
use crate::models::{DogSize, PetCount, PetType};
use crate::pricing::{PricingError, PricingQuote};

use super::quote::BookingQuoteBuilder;
use super::validator::{BookingForm, BookingFormValidator, ValidationReport};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Both check-in and check-out dates must be selected")]
    IncompleteRange,

    #[error("Form is missing {:?}", .0.missing_fields)]
    Invalid(ValidationReport),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A validated, priced booking ready to hand off.
///
/// Immutable once built; status tracking belongs to the booking store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    request_id: Uuid,
    pet_names: Vec<String>,
    pet_type: PetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    dog_size: Option<DogSize>,
    pet_count: PetCount,
    stay: StayDates,
    owner_name: String,
    owner_email: String,
    owner_phone: Option<String>,
    special_requests: Option<String>,
    agreed_to_terms: bool,
    quote: PricingQuote,
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl BookingRequest {
    /// Build a request from the current selection and form.
    ///
    /// The quote is computed here from `range` and the form's pets so it can
    /// never disagree with them.
    pub fn from_form(
        form: &BookingForm,
        range: &DateRange,
        quotes: &BookingQuoteBuilder<'_>,
    ) -> Result<Self, SubmissionError> {
        let stay = range.stay().ok_or(SubmissionError::IncompleteRange)?;

        let report = BookingFormValidator::validate(form);
        if !report.valid {
            return Err(SubmissionError::Invalid(report));
        }

        let quote = quotes.quote_stay(&stay, &form.pets)?;
        let pet_names = form
            .pet_names
            .iter()
            .take(form.pets.pet_count.as_usize())
            .cloned()
            .collect();

        Ok(Self {
            request_id: Uuid::new_v4(),
            pet_names,
            pet_type: form.pets.pet_type,
            dog_size: form.pets.effective_dog_size(),
            pet_count: form.pets.pet_count,
            stay,
            owner_name: form.owner_name.clone(),
            owner_email: form.owner_email.clone(),
            owner_phone: optional(&form.owner_phone),
            special_requests: optional(&form.special_requests),
            agreed_to_terms: form.agreed_to_terms,
            quote,
        })
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn pet_names(&self) -> &[String] {
        &self.pet_names
    }

    pub fn pet_type(&self) -> PetType {
        self.pet_type
    }

    pub fn dog_size(&self) -> Option<DogSize> {
        self.dog_size
    }

    pub fn pet_count(&self) -> PetCount {
        self.pet_count
    }

    pub fn stay(&self) -> StayDates {
        self.stay
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }

    pub fn owner_phone(&self) -> Option<&str> {
        self.owner_phone.as_deref()
    }

    pub fn special_requests(&self) -> Option<&str> {
        self.special_requests.as_deref()
    }

    pub fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    pub fn quote(&self) -> &PricingQuote {
        &self.quote
    }
}

/// Failure reported by an outbound collaborator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct HandoffError(pub String);

/// Persists bookings; owns pending/confirmed/cancelled status
pub trait BookingStore {
    fn add_booking(&self, request: &BookingRequest) -> Result<(), HandoffError>;
}

pub trait ReminderScheduler {
    fn schedule_booking_reminder(&self, request: &BookingRequest) -> Result<(), HandoffError>;
}

/// Hand a request to the booking store and the reminder scheduler.
///
/// Each collaborator is called exactly once. Failures are logged, not retried
/// and not returned.
pub fn submit(
    request: &BookingRequest,
    store: &dyn BookingStore,
    reminders: &dyn ReminderScheduler,
) {
    info!(
        "Submitting booking {} for {} nights ({} {})",
        request.request_id,
        request.stay.nights(),
        request.quote.total(),
        request.quote.currency()
    );

    if let Err(e) = store.add_booking(request) {
        warn!("Booking store rejected {}: {}", request.request_id, e);
    }
    if let Err(e) = reminders.schedule_booking_reminder(request) {
        warn!("Reminder scheduling failed for {}: {}", request.request_id, e);
    }
}
