//! In-memory availability cache using moka
//!
//! The booking-state manager publishes per-day capacity here ahead of time and
//! the selector reads it synchronously. Entries expire after the configured
//! TTL, after which the day reads as unknown and is not selectable.

use chrono::NaiveDate;
use moka::sync::Cache;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::calendar::AvailabilityGate;
use crate::config::BoardingConfig;
use crate::models::{AvailabilityStatus, DayAvailability};

/// Resident copy of the booking calendar's day-level capacity
#[derive(Clone)]
pub struct AvailabilityCache {
    days: Cache<NaiveDate, AvailabilityStatus>,
}

impl AvailabilityCache {
    /// Create a cache holding at most `max_days` entries for `ttl` each
    pub fn new(max_days: u64, ttl: Duration) -> Self {
        Self {
            days: Cache::builder()
                .max_capacity(max_days)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn from_config(config: &BoardingConfig) -> Self {
        Self::new(config.availability_capacity, config.availability_ttl)
    }

    pub fn publish(&self, day: DayAvailability) {
        self.days.insert(day.date, day.status);
    }

    /// Publish a batch of days, typically a month fetched from the booking manager
    pub fn publish_all<I>(&self, days: I)
    where
        I: IntoIterator<Item = DayAvailability>,
    {
        let mut count = 0usize;
        for day in days {
            self.publish(day);
            count += 1;
        }
        info!("Published availability for {} days", count);
    }

    pub fn invalidate(&self, date: NaiveDate) {
        self.days.invalidate(&date);
    }

    /// Invalidate all days
    pub fn invalidate_all(&self) {
        self.days.invalidate_all();
        info!("Availability cache invalidated");
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        self.days.run_pending_tasks();
        CacheStats {
            days_cached: self.days.entry_count(),
        }
    }
}

impl Default for AvailabilityCache {
    fn default() -> Self {
        Self::from_config(&BoardingConfig::default())
    }
}

impl AvailabilityGate for AvailabilityCache {
    fn availability(&self, date: NaiveDate) -> Option<DayAvailability> {
        self.days
            .get(&date)
            .map(|status| DayAvailability::new(date, status))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub days_cached: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{DateRange, DateRangeSelector, FixedClock, RejectReason, SelectionOutcome};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 12, d).unwrap()
    }

    #[test]
    fn test_publish_and_lookup() {
        let cache = AvailabilityCache::default();
        cache.publish(DayAvailability::new(day(1), AvailabilityStatus::Limited));

        assert_eq!(
            cache.availability(day(1)),
            Some(DayAvailability::new(day(1), AvailabilityStatus::Limited))
        );
        assert_eq!(cache.availability(day(2)), None);
    }

    #[test]
    fn test_republish_overwrites_status() {
        let cache = AvailabilityCache::default();
        cache.publish(DayAvailability::new(day(3), AvailabilityStatus::Available));
        cache.publish(DayAvailability::new(day(3), AvailabilityStatus::Full));

        assert_eq!(
            cache.availability(day(3)).map(|d| d.status),
            Some(AvailabilityStatus::Full)
        );
    }

    #[test]
    fn test_invalidate_makes_day_unknown() {
        let cache = AvailabilityCache::default();
        cache.publish_all((1..=5).map(|d| DayAvailability::new(day(d), AvailabilityStatus::Available)));
        assert_eq!(cache.stats().days_cached, 5);

        cache.invalidate(day(2));
        assert_eq!(cache.availability(day(2)), None);
        assert!(cache.availability(day(3)).is_some());

        cache.invalidate_all();
        assert_eq!(cache.availability(day(3)), None);
    }

    #[test]
    fn test_selector_reads_from_cache() {
        let cache = AvailabilityCache::default();
        cache.publish_all([
            DayAvailability::new(day(10), AvailabilityStatus::Available),
            DayAvailability::new(day(12), AvailabilityStatus::Available),
            DayAvailability::new(day(11), AvailabilityStatus::Full),
        ]);

        let mut selector = DateRangeSelector::with_clock(&cache, FixedClock(day(1)));
        assert!(selector.select_date(day(10)).is_accepted());
        assert!(!selector.select_date(day(11)).is_accepted());
        assert!(selector.select_date(day(12)).is_accepted());
        assert_eq!(selector.range().stay().map(|s| s.nights()), Some(2));
    }

    #[test]
    fn test_expired_day_reads_unknown() {
        let cache = AvailabilityCache::new(10, Duration::from_millis(50));
        cache.publish(DayAvailability::new(day(20), AvailabilityStatus::Available));
        assert!(cache.availability(day(20)).is_some());

        std::thread::sleep(Duration::from_millis(150));

        assert_eq!(cache.availability(day(20)), None);
        let mut selector = DateRangeSelector::with_clock(&cache, FixedClock(day(1)));
        assert_eq!(
            selector.select_date(day(20)),
            SelectionOutcome::Rejected(RejectReason::Unknown)
        );
        assert_eq!(selector.range(), DateRange::Empty);
    }
}
