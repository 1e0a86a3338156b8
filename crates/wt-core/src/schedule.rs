//! Expected-worktime accounting against a configured schedule.

use chrono::{Duration, NaiveDate};

use crate::calendar::DaySummary;
use crate::weekday::Weekday;

/// Configuration collaborator consulted when classifying a date.
///
/// Implemented by the CLI configuration; test code supplies fakes.
pub trait Schedule {
    /// Whether `date` is a public holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Whether `date` was taken as vacation.
    fn is_vacation(&self, date: NaiveDate) -> bool;

    /// Whether `date` is excluded from worktime accounting altogether.
    fn is_ignored(&self, date: NaiveDate) -> bool;

    /// Configured workdays; the first entry anchors the workweek.
    fn workdays(&self) -> &[Weekday];

    /// Target worktime on a regular workday.
    fn worktime_per_day(&self) -> Duration;
}

impl DaySummary {
    /// How long work was expected on this date.
    ///
    /// Holidays, vacation and ignored days take precedence over the workday
    /// check and expect zero.
    pub fn expected_worktime<S: Schedule + ?Sized>(&self, schedule: &S) -> Duration {
        let date = self.date();
        if schedule.is_holiday(date) || schedule.is_vacation(date) || schedule.is_ignored(date) {
            return Duration::zero();
        }
        if schedule.workdays().contains(&Weekday::from_date(date)) {
            schedule.worktime_per_day()
        } else {
            Duration::zero()
        }
    }

    /// Signed difference between recorded and expected worktime.
    ///
    /// Ignored dates contribute zero no matter what was recorded on them;
    /// their raw worktime still shows up in per-day listings.
    pub fn overtime<S: Schedule + ?Sized>(&self, schedule: &S) -> Duration {
        if schedule.is_ignored(self.date()) {
            return Duration::zero();
        }
        self.worktime() - self.expected_worktime(schedule)
    }

    /// Whether the day belongs in a per-day listing: worked days always,
    /// unworked days only when work was expected.
    pub fn should_display<S: Schedule + ?Sized>(&self, schedule: &S) -> bool {
        !self.worktime().is_zero() || !self.expected_worktime(schedule).is_zero()
    }
}
