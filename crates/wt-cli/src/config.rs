//! Configuration loading and schedule wiring.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use wt_core::{Schedule, TotalFormat, Weekday};

use crate::holidays::RegionalHolidays;
use crate::store;

/// How per-day listings are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayListStyle {
    /// Every displayable day.
    #[default]
    Full,
    /// Totals only.
    None,
    /// First and last five days with an ellipsis in between.
    Truncate,
}

/// Settings persisted in `worktime.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// ISO country code for the holiday lookup.
    pub country: String,
    /// Country subdivision for the holiday lookup.
    pub state: Option<String>,
    /// Target worktime on a workday, in hours.
    pub hours_per_day: f64,
    /// Workdays, first entry anchoring the workweek.
    pub workdays: Vec<Weekday>,
    /// Yearly vacation budget.
    pub vacation_per_year: u32,
    /// How report totals are rendered.
    pub total_format: TotalFormat,
    /// How per-day listings are rendered.
    pub day_list: DayListStyle,
    /// Earliest date open-ended reports fall back to.
    pub inception: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            country: "DE".to_string(),
            state: Some("BW".to_string()),
            hours_per_day: 8.0,
            workdays: vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
            vacation_per_year: 30,
            total_format: TotalFormat::Exact,
            day_list: DayListStyle::Full,
            inception: None,
        }
    }
}

impl Settings {
    /// Loads settings: defaults, then `worktime.toml` in the Watson
    /// directory, then an optional override file, then `WT_*` environment
    /// variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load(watson_dir: &Path, override_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(watson_dir.join("worktime.toml")));

        if let Some(path) = override_path {
            figment = figment.merge(Toml::file(path));
        }

        // Env keys use underscores; config keys are kebab-case.
        figment = figment.merge(
            Env::prefixed("WT_").map(|key| key.as_str().replace('_', "-").into()),
        );

        figment.extract()
    }
}

/// Runtime configuration: settings plus the loaded day lists and the holiday
/// predicate for the configured region.
pub struct Config {
    watson_dir: PathBuf,
    settings: Settings,
    vacation: BTreeSet<NaiveDate>,
    ignored: BTreeSet<NaiveDate>,
    holidays: RegionalHolidays,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("watson_dir", &self.watson_dir)
            .field("settings", &self.settings)
            .field("vacation", &self.vacation.len())
            .field("ignored", &self.ignored.len())
            .finish()
    }
}

impl Config {
    /// Assembles a configuration from already-loaded parts.
    #[must_use]
    pub fn new(
        watson_dir: PathBuf,
        settings: Settings,
        vacation: BTreeSet<NaiveDate>,
        ignored: BTreeSet<NaiveDate>,
    ) -> Self {
        let holidays = RegionalHolidays::new(&settings.country, settings.state.as_deref());
        Self {
            watson_dir,
            settings,
            vacation,
            ignored,
            holidays,
        }
    }

    /// Loads the configuration from the ambient Watson directory.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        Self::load_from(store::watson_dir(), override_path)
    }

    /// Loads the configuration from a specific Watson directory.
    pub fn load_from(watson_dir: PathBuf, override_path: Option<&Path>) -> Result<Self> {
        let settings = Settings::load(&watson_dir, override_path)
            .context("failed to load configuration")?;
        let vacation = store::load_days(&watson_dir.join("vacation-days"))?;
        let ignored = store::load_days(&watson_dir.join("ignored-days"))?;
        tracing::debug!(?settings, dir = %watson_dir.display(), "configuration loaded");
        Ok(Self::new(watson_dir, settings, vacation, ignored))
    }

    /// Persists the vacation and ignored day lists.
    pub fn save(&self) -> Result<()> {
        store::save_days(&self.watson_dir.join("vacation-days"), &self.vacation)?;
        store::save_days(&self.watson_dir.join("ignored-days"), &self.ignored)?;
        Ok(())
    }

    #[must_use]
    pub fn watson_dir(&self) -> &Path {
        &self.watson_dir
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn vacation(&self) -> &BTreeSet<NaiveDate> {
        &self.vacation
    }

    pub fn add_vacation(&mut self, day: NaiveDate) {
        self.vacation.insert(day);
    }

    /// Removing an absent day is a no-op.
    pub fn remove_vacation(&mut self, day: NaiveDate) {
        self.vacation.remove(&day);
    }

    pub fn add_ignored(&mut self, day: NaiveDate) {
        self.ignored.insert(day);
    }

    /// Removing an absent day is a no-op.
    pub fn remove_ignored(&mut self, day: NaiveDate) {
        self.ignored.remove(&day);
    }
}

impl Schedule for Config {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    fn is_vacation(&self, date: NaiveDate) -> bool {
        self.vacation.contains(&date)
    }

    fn is_ignored(&self, date: NaiveDate) -> bool {
        self.ignored.contains(&date)
    }

    fn workdays(&self) -> &[Weekday] {
        &self.settings.workdays
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "hours-per-day stays far below the i64 second range"
    )]
    fn worktime_per_day(&self) -> Duration {
        Duration::seconds((self.settings.hours_per_day * 3600.0) as i64)
    }
}
