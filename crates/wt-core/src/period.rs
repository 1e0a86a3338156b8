//! Reporting-period resolution and date iteration.

use std::iter::FusedIterator;

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use crate::schedule::Schedule;
use crate::weekday::Weekday;

/// Fallback report length when nothing else narrows the window.
pub const DEFAULT_PERIOD_DAYS: i64 = 7;

/// Conflicting or unusable period selections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("cannot give --from/--to when using --workweek")]
    WorkweekWithBounds,

    #[error("cannot give all of --from, --to and --period")]
    ConflictingBounds,

    #[error("cannot anchor the workweek without configured workdays")]
    NoWorkdays,
}

/// Caller-supplied period selection, prior to resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodSelection {
    /// Explicit first day of the report.
    pub from: Option<NaiveDate>,
    /// Explicit last day of the report.
    pub to: Option<NaiveDate>,
    /// Relative length, counted back from the end of the window.
    pub period: Option<Duration>,
    /// Anchor the window at the start of the current workweek.
    pub workweek: bool,
}

impl PeriodSelection {
    /// Resolves the selection into a concrete window.
    ///
    /// Priority when no workweek anchor is requested: explicit `from`, then
    /// `end - period`, then the configured inception date, then a
    /// [`DEFAULT_PERIOD_DAYS`]-day lookback. `start > end` is legal and
    /// yields an empty window downstream.
    pub fn resolve<S: Schedule + ?Sized>(
        &self,
        schedule: &S,
        inception: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<PeriodWindow, PeriodError> {
        if self.workweek {
            if self.from.is_some() || self.to.is_some() {
                return Err(PeriodError::WorkweekWithBounds);
            }
            let Some(&anchor) = schedule.workdays().first() else {
                return Err(PeriodError::NoWorkdays);
            };

            // The anchor weekday recurs every 7 days, so at most 6 steps.
            let mut start = today;
            for _ in 0..6 {
                if Weekday::from_date(start) == anchor {
                    break;
                }
                match start.pred_opt() {
                    Some(previous) => start = previous,
                    None => break,
                }
            }
            return Ok(PeriodWindow::new(start, today));
        }

        if self.from.is_some() && self.to.is_some() && self.period.is_some() {
            return Err(PeriodError::ConflictingBounds);
        }

        let end = self.to.unwrap_or(today);
        let start = if let Some(from) = self.from {
            from
        } else if let Some(period) = self.period {
            end - period
        } else if let Some(inception) = inception {
            inception
        } else {
            end - Duration::days(DEFAULT_PERIOD_DAYS)
        };

        let window = PeriodWindow::new(start, end);
        tracing::debug!(start = %window.start, end = %window.end, "period resolved");
        Ok(window)
    }
}

/// The resolved inclusive date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Iterates the window's dates, oldest first; empty when `start > end`.
    #[must_use]
    pub const fn dates(&self) -> Dates {
        Dates {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Lazy iterator over the dates of a [`PeriodWindow`].
#[derive(Debug, Clone)]
pub struct Dates {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ_opt();
        Some(current)
    }
}

impl FusedIterator for Dates {}
