//! Booking quote, form validation and submission.
//!
//! Flow: a complete [`DateRange`](crate::calendar::DateRange) is priced by
//! [`BookingQuoteBuilder`], the owner fills a [`BookingForm`] that
//! [`BookingFormValidator`] checks, and [`BookingRequest::from_form`] produces
//! the request handed to the collaborators by [`submit`].

pub mod quote;
pub mod request;
pub mod validator;

pub use quote::BookingQuoteBuilder;
pub use request::{submit, BookingRequest, BookingStore, HandoffError, ReminderScheduler, SubmissionError};
pub use validator::{BookingForm, BookingFormValidator, FieldId, ValidationReport};
