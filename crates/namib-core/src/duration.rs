//! # Duration Module
//!
//! Whole-day rental duration from the pickup/return calendar dates.
//!
//! The date pickers yield calendar dates (times are normalized away before
//! they reach the engine), so the difference is an exact whole-day count.
//! A minimum of 1 day is enforced even for same-day rentals and for a
//! return date entered before the pickup date.

use chrono::NaiveDate;
use std::collections::VecDeque;

/// How many (pickup, return) pairs the memo cache retains.
///
/// Recomputation fires on every form event with the same date pair, so a
/// handful of entries covers the working set; the cache evicts oldest-first
/// instead of growing without bound.
pub const DURATION_CACHE_CAPACITY: usize = 16;

// =============================================================================
// Duration Calculation
// =============================================================================

/// Computes the whole-day rental duration between two calendar dates.
///
/// ## Rules
/// - Same-day rental → 1
/// - Return N days after pickup → N
/// - Return before pickup → 1 (guard against inverted ranges)
///
/// Missing dates never reach this function; the controller treats an
/// incomplete date range as duration 0 ("no booking yet") upstream.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use namib_core::duration::duration_days;
///
/// let pickup = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let ret = NaiveDate::from_ymd_opt(2025, 3, 13).unwrap();
/// assert_eq!(duration_days(pickup, ret), 3);
/// assert_eq!(duration_days(pickup, pickup), 1);
/// ```
pub fn duration_days(pickup: NaiveDate, ret: NaiveDate) -> u32 {
    let days = (ret - pickup).num_days();
    days.max(1) as u32
}

/// Formats a duration for the booking summary, pluralizing the unit.
///
/// ## Example
/// ```rust
/// use namib_core::duration::format_duration;
///
/// assert_eq!(format_duration(1), "1 day");
/// assert_eq!(format_duration(5), "5 days");
/// ```
pub fn format_duration(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

// =============================================================================
// Bounded Memo Cache
// =============================================================================

/// Bounded memoization of [`duration_days`] keyed by the date pair.
///
/// Identical inputs always yield identical output, so caching is safe. The
/// cache holds the last [`DURATION_CACHE_CAPACITY`] pairs and evicts
/// oldest-first.
#[derive(Debug, Default)]
pub struct DurationCache {
    entries: VecDeque<((NaiveDate, NaiveDate), u32)>,
}

impl DurationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        DurationCache {
            entries: VecDeque::with_capacity(DURATION_CACHE_CAPACITY),
        }
    }

    /// Returns the duration for the pair, computing and caching on a miss.
    pub fn duration_days(&mut self, pickup: NaiveDate, ret: NaiveDate) -> u32 {
        let key = (pickup, ret);
        if let Some(&(_, days)) = self.entries.iter().find(|(k, _)| *k == key) {
            return days;
        }

        let days = duration_days(pickup, ret);
        if self.entries.len() == DURATION_CACHE_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((key, days));
        days
    }

    /// Number of cached pairs (for tests).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
