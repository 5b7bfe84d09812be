//! Day-level capacity models supplied by the booking-state manager.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    Limited,
    Full,
}

impl AvailabilityStatus {
    /// Whether a day with this status may be tapped (past-date check aside)
    pub const fn accepts_bookings(self) -> bool {
        !matches!(self, AvailabilityStatus::Full)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub status: AvailabilityStatus,
}

impl DayAvailability {
    pub const fn new(date: NaiveDate, status: AvailabilityStatus) -> Self {
        Self { date, status }
    }
}
