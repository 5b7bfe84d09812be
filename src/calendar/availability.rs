//! Per-day capacity lookup consumed by the selector.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::models::{AvailabilityStatus, DayAvailability};

/// Read-only view of the booking calendar's day-level capacity.
///
/// Implementations must already hold the data they answer from; the selector
/// never waits on a lookup. `None` means "no data for that day", which the
/// selector treats exactly like a full day.
pub trait AvailabilityGate {
    fn availability(&self, date: NaiveDate) -> Option<DayAvailability>;
}

impl<G: AvailabilityGate + ?Sized> AvailabilityGate for &G {
    fn availability(&self, date: NaiveDate) -> Option<DayAvailability> {
        (**self).availability(date)
    }
}

impl AvailabilityGate for HashMap<NaiveDate, AvailabilityStatus> {
    fn availability(&self, date: NaiveDate) -> Option<DayAvailability> {
        self.get(&date)
            .map(|status| DayAvailability::new(date, *status))
    }
}

impl AvailabilityGate for BTreeMap<NaiveDate, AvailabilityStatus> {
    fn availability(&self, date: NaiveDate) -> Option<DayAvailability> {
        self.get(&date)
            .map(|status| DayAvailability::new(date, *status))
    }
}
