//! Calendar date-range selection for check-in/check-out.

pub mod availability;
pub mod range;
pub mod selector;

pub use availability::AvailabilityGate;
pub use range::{DateRange, RangeError, RangeEvent, StayDates};
pub use selector::{Clock, DateRangeSelector, FixedClock, RejectReason, SelectionOutcome, SystemClock};
