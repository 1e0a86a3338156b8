//! Marking days as ignored for overtime accounting.

use anyhow::Result;
use chrono::NaiveDate;

use crate::config::Config;

/// Adds the given days to the ignored list and saves it.
pub fn ignore(config: &mut Config, days: &[NaiveDate]) -> Result<()> {
    for &day in days {
        config.add_ignored(day);
    }
    config.save()
}

/// Removes the given days from the ignored list and saves it. Unknown days
/// are skipped silently.
pub fn unignore(config: &mut Config, days: &[NaiveDate]) -> Result<()> {
    for &day in days {
        config.remove_ignored(day);
    }
    config.save()
}
