//! Vacation bookkeeping: listing the budget and adding or removing days.

use std::io::Write;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use wt_core::{Calendar, PeriodWindow};

use crate::config::Config;

/// Prints all known vacation days and the budget for the year of `today`.
pub fn list<W: Write>(writer: &mut W, config: &Config, today: NaiveDate) -> Result<()> {
    for day in config.vacation() {
        writeln!(writer, "{day}")?;
    }

    let taken = config
        .vacation()
        .iter()
        .filter(|day| day.year() == today.year())
        .count();
    let remaining = i64::from(config.settings().vacation_per_year) - i64::try_from(taken)?;

    writeln!(writer, "------")?;
    writeln!(writer, "Vacation days taken: {taken}")?;
    writeln!(writer, "Vacation days remaining: {remaining}")?;
    Ok(())
}

/// Records the given days as vacation and saves the list.
///
/// A span only contributes days the report would display, so weekends and
/// holidays inside it never consume vacation budget.
pub fn add(
    config: &mut Config,
    calendar: &Calendar,
    days: &[NaiveDate],
    span: Option<(NaiveDate, NaiveDate)>,
) -> Result<()> {
    let mut selected = days.to_vec();
    if let Some((from, to)) = span {
        for date in PeriodWindow::new(from, to).dates() {
            if calendar.day(date).should_display(config) {
                selected.push(date);
            }
        }
    }

    for day in selected {
        config.add_vacation(day);
    }
    config.save()
}

/// Removes the given days from the vacation list and saves it.
///
/// Spans are expanded verbatim here; removing a day that was never recorded
/// is a no-op.
pub fn del(
    config: &mut Config,
    days: &[NaiveDate],
    span: Option<(NaiveDate, NaiveDate)>,
) -> Result<()> {
    let mut selected = days.to_vec();
    if let Some((from, to)) = span {
        selected.extend(PeriodWindow::new(from, to).dates());
    }

    for day in selected {
        config.remove_vacation(day);
    }
    config.save()
}
