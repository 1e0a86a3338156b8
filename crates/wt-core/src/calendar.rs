//! Per-day aggregation of worked time.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::interval::TimeInterval;

/// Accumulated worked time for one calendar date.
///
/// Carries no classification of its own; whether the date is a holiday,
/// vacation or ignored day is derived on demand from the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    date: NaiveDate,
    worktime: Duration,
}

impl DaySummary {
    /// A summary with no recorded worktime.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            worktime: Duration::zero(),
        }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn worktime(&self) -> Duration {
        self.worktime
    }

    /// Adds the portion of `interval` that falls on this date.
    pub fn add(&mut self, interval: &TimeInterval) {
        self.worktime = self.worktime + interval.duration_on(self.date);
    }
}

/// Mapping from calendar date to that day's worked-time summary.
///
/// Built once per invocation from the full interval history and read-only
/// afterwards. Insertion order never matters: each interval contributes an
/// independent portion per date.
#[derive(Debug, Default, Clone)]
pub struct Calendar {
    days: HashMap<NaiveDate, DaySummary>,
}

impl Calendar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar from a collection of intervals.
    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = TimeInterval>,
    {
        let mut calendar = Self::new();
        let mut count = 0usize;
        for interval in intervals {
            calendar.insert(&interval);
            count += 1;
        }
        tracing::debug!(
            intervals = count,
            days = calendar.days.len(),
            "calendar built"
        );
        calendar
    }

    /// Spreads `interval` across every date it touches.
    pub fn insert(&mut self, interval: &TimeInterval) {
        for date in interval.dates() {
            self.days
                .entry(date)
                .or_insert_with(|| DaySummary::new(date))
                .add(interval);
        }
    }

    /// The summary recorded for `date`, or a fresh zero summary.
    ///
    /// Lookups never grow the map; a date nobody worked on stays absent.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> DaySummary {
        self.days
            .get(&date)
            .copied()
            .unwrap_or_else(|| DaySummary::new(date))
    }

    /// Number of dates with at least one recorded interval.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
