//! Core domain logic for worktime reporting.
//!
//! This crate contains the pure types and logic for:
//! - Calendar: aggregating raw worked intervals into per-day summaries
//! - Schedule: expected-worktime and overtime accounting
//! - Period: resolving the inclusive date range a report covers
//! - Format: rendering accumulated totals for display
//!
//! Nothing here performs I/O; the CLI crate supplies the interval log, the
//! configuration and the wall clock.

mod calendar;
mod format;
mod interval;
mod period;
mod schedule;
mod weekday;

pub use calendar::{Calendar, DaySummary};
pub use format::{TotalFormat, format_hms, format_total};
pub use interval::{IntervalError, TimeInterval};
pub use period::{DEFAULT_PERIOD_DAYS, Dates, PeriodError, PeriodSelection, PeriodWindow};
pub use schedule::Schedule;
pub use weekday::{ParseWeekdayError, Weekday};
