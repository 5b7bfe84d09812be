//! Tap-driven check-in/check-out selection.
//!
//! One selector instance belongs to one booking session. It owns the current
//! [`DateRange`] and only ever changes it through [`DateRange::transition`].

use chrono::{Local, NaiveDate};
use tracing::debug;

use super::availability::AvailabilityGate;
use super::range::{DateRange, RangeEvent};

/// Source of "today" in the local calendar
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Why a tap did not change the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    PastDate,
    Full,
    Unknown,
}

/// Result of [`DateRangeSelector::select_date`]. Rejections are not errors;
/// the selection simply stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Accepted(DateRange),
    Rejected(RejectReason),
}

impl SelectionOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, SelectionOutcome::Accepted(_))
    }
}

pub struct DateRangeSelector<G, C = SystemClock> {
    range: DateRange,
    gate: G,
    clock: C,
}

impl<G: AvailabilityGate> DateRangeSelector<G, SystemClock> {
    pub fn new(gate: G) -> Self {
        Self::with_clock(gate, SystemClock)
    }
}

impl<G: AvailabilityGate, C: Clock> DateRangeSelector<G, C> {
    pub fn with_clock(gate: G, clock: C) -> Self {
        Self {
            range: DateRange::Empty,
            gate,
            clock,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    fn check(&self, date: NaiveDate) -> Result<(), RejectReason> {
        if date < self.clock.today() {
            return Err(RejectReason::PastDate);
        }
        match self.gate.availability(date) {
            Some(day) if day.status.accepts_bookings() => Ok(()),
            Some(_) => Err(RejectReason::Full),
            None => Err(RejectReason::Unknown),
        }
    }

    /// Whether a tap on `date` would be accepted right now
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.check(date).is_ok()
    }

    /// Handle a tap on `tapped`.
    ///
    /// Past days and full or unknown days leave the selection unchanged.
    pub fn select_date(&mut self, tapped: NaiveDate) -> SelectionOutcome {
        if let Err(reason) = self.check(tapped) {
            debug!("Ignoring tap on {}: {:?}", tapped, reason);
            return SelectionOutcome::Rejected(reason);
        }

        let next = self.range.transition(RangeEvent::Tap(tapped));
        debug!("Selection {:?} -> {:?}", self.range, next);
        self.range = next;
        SelectionOutcome::Accepted(next)
    }

    /// Reset to an empty selection from any state
    pub fn clear(&mut self) {
        self.range = self.range.transition(RangeEvent::Clear);
    }

    /// Strictly inside a complete range
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        self.range
            .stay()
            .is_some_and(|stay| stay.contains_night_between(date))
    }

    pub fn is_range_start(&self, date: NaiveDate) -> bool {
        self.range.start() == Some(date)
    }

    pub fn is_range_end(&self, date: NaiveDate) -> bool {
        self.range.end() == Some(date)
    }
}
