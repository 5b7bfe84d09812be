//! Stay dates and the tap-driven selection state machine.
//!
//! [`DateRange::transition`] is pure; [`crate::calendar::DateRangeSelector`]
//! decides which taps reach it.

use chrono::NaiveDate;
use serde::Serialize;

/// A complete stay: check-in strictly before check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

/// Error type for stay date construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Check-out ({check_out}) must be after check-in ({check_in})")]
    NotAfterCheckIn {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

impl StayDates {
    /// # Errors
    /// Returns `RangeError::NotAfterCheckIn` if `check_out <= check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, RangeError> {
        if check_out <= check_in {
            return Err(RangeError::NotAfterCheckIn {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Calendar-day difference; the check-out day is not a night
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Strictly between check-in and check-out
    pub fn contains_night_between(&self, date: NaiveDate) -> bool {
        self.check_in < date && date < self.check_out
    }
}

/// Input to [`DateRange::transition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEvent {
    Tap(NaiveDate),
    Clear,
}

/// Selection state, named by occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    Empty,
    Anchored {
        start: NaiveDate,
    },
    Complete(StayDates),
}

impl DateRange {
    /// Apply one accepted event.
    ///
    /// Taps reaching this function have already passed the past-date and
    /// availability checks. A tap on or before the anchor moves the anchor; a
    /// tap after a complete range starts over from that date.
    pub fn transition(self, event: RangeEvent) -> Self {
        let tapped = match event {
            RangeEvent::Clear => return DateRange::Empty,
            RangeEvent::Tap(date) => date,
        };

        match self {
            DateRange::Empty | DateRange::Complete(_) => DateRange::Anchored { start: tapped },
            DateRange::Anchored { start } => match StayDates::new(start, tapped) {
                Ok(stay) => DateRange::Complete(stay),
                Err(_) => DateRange::Anchored { start: tapped },
            },
        }
    }

    pub const fn start(&self) -> Option<NaiveDate> {
        match self {
            DateRange::Empty => None,
            DateRange::Anchored { start } => Some(*start),
            DateRange::Complete(stay) => Some(stay.check_in),
        }
    }

    pub const fn end(&self) -> Option<NaiveDate> {
        match self {
            DateRange::Complete(stay) => Some(stay.check_out),
            _ => None,
        }
    }

    pub const fn stay(&self) -> Option<StayDates> {
        match self {
            DateRange::Complete(stay) => Some(*stay),
            _ => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, DateRange::Complete(_))
    }
}
