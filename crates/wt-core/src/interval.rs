//! Immutable worked-time intervals and their per-day portions.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::period::{Dates, PeriodWindow};

/// Error returned when an interval would stop before it starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("interval stops before it starts: {start} > {stop}")]
pub struct IntervalError {
    pub start: NaiveDateTime,
    pub stop: NaiveDateTime,
}

/// A recorded contiguous span of worked time.
///
/// May cross any number of day boundaries; [`duration_on`](Self::duration_on)
/// clips it to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: NaiveDateTime,
    stop: NaiveDateTime,
}

impl TimeInterval {
    /// Creates an interval, rejecting `start > stop`.
    pub fn new(start: NaiveDateTime, stop: NaiveDateTime) -> Result<Self, IntervalError> {
        if start > stop {
            return Err(IntervalError { start, stop });
        }
        Ok(Self { start, stop })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub const fn stop(&self) -> NaiveDateTime {
        self.stop
    }

    /// The portion of this interval that falls on `date`.
    ///
    /// Clamping both endpoints into the day yields zero for any date wholly
    /// outside the interval, so no separate overlap check is needed. The
    /// upper clamp is the next day's midnight, which makes the per-day
    /// portions sum exactly to `stop - start`.
    #[must_use]
    pub fn duration_on(&self, date: NaiveDate) -> Duration {
        clamp(self.stop, date) - clamp(self.start, date)
    }

    /// The dates this interval touches, oldest first.
    #[must_use]
    pub fn dates(&self) -> Dates {
        PeriodWindow::new(self.start.date(), self.stop.date()).dates()
    }
}

/// Clamps an instant into the given day: earlier instants become the day's
/// midnight, later ones the next day's midnight.
fn clamp(instant: NaiveDateTime, date: NaiveDate) -> NaiveDateTime {
    if instant.date() < date {
        date.and_time(NaiveTime::MIN)
    } else if instant.date() > date {
        date.succ_opt()
            .map_or(NaiveDateTime::MAX, |next| next.and_time(NaiveTime::MIN))
    } else {
        instant
    }
}
