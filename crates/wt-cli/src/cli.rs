//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::{Duration, NaiveDate};
use clap::{Args, Parser, Subcommand};
use regex::Regex;

/// Worktime and overtime reporting over Watson time logs.
///
/// Aggregates the raw intervals recorded by Watson into per-day summaries and
/// compares them against the configured work schedule.
#[derive(Debug, Parser)]
#[command(name = "wt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file merged over `worktime.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report the worktime and overtime for a period.
    Report(ReportArgs),

    /// Manage vacation days.
    Vacation {
        #[command(subcommand)]
        action: VacationAction,
    },

    /// Exclude days from worktime accounting.
    Ignore {
        /// Days to ignore.
        #[arg(value_name = "DAY", required = true)]
        days: Vec<NaiveDate>,
    },

    /// Re-include previously ignored days.
    Unignore {
        /// Days to unignore.
        #[arg(value_name = "DAY", required = true)]
        days: Vec<NaiveDate>,
    },
}

/// Options of the `report` subcommand.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// First day to report.
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to report.
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Relative period to report, e.g. "10 days" or "2 weeks".
    #[arg(long, value_parser = parse_period)]
    pub period: Option<Duration>,

    /// Report the current workweek.
    #[arg(long)]
    pub workweek: bool,

    /// Include the currently running interval.
    #[arg(short, long)]
    pub current: bool,
}

/// Vacation management actions.
#[derive(Debug, Subcommand)]
pub enum VacationAction {
    /// List vacation days and the remaining yearly budget.
    List,

    /// Add vacation days, given explicitly or as a span.
    Add(DaySpanArgs),

    /// Remove vacation days.
    Del(DaySpanArgs),
}

/// Days given explicitly and/or as an inclusive `--from`/`--to` span.
#[derive(Debug, Args)]
pub struct DaySpanArgs {
    /// First day of the span.
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last day of the span.
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Individual days.
    #[arg(value_name = "DAY")]
    pub days: Vec<NaiveDate>,
}

impl DaySpanArgs {
    /// Both span bounds when a span was requested; clap enforces the pairing.
    #[must_use]
    pub const fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }
}

/// Parses a relative period: a day or week count with its unit.
fn parse_period(value: &str) -> Result<Duration, String> {
    let matcher = Regex::new(r"^(?:(?<days>\d+)\s*d(?:ay)?s?|(?<weeks>\d+)\s*w(?:eek)?s?)$")
        .map_err(|err| err.to_string())?;
    let captures = matcher
        .captures(value.trim())
        .ok_or_else(|| format!("invalid period: {value}"))?;

    let (group, scale) = captures
        .name("days")
        .map_or_else(|| (captures.name("weeks"), 7), |days| (Some(days), 1));
    let count: i64 = group
        .ok_or_else(|| format!("invalid period: {value}"))?
        .as_str()
        .parse()
        .map_err(|_| format!("period too large: {value}"))?;

    count
        .checked_mul(scale)
        .map(Duration::days)
        .ok_or_else(|| format!("period too large: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_periods() {
        assert_eq!(parse_period("10 days").unwrap(), Duration::days(10));
        assert_eq!(parse_period("1 day").unwrap(), Duration::days(1));
        assert_eq!(parse_period("3d").unwrap(), Duration::days(3));
    }

    #[test]
    fn parses_week_periods() {
        assert_eq!(parse_period("2 weeks").unwrap(), Duration::days(14));
        assert_eq!(parse_period("1w").unwrap(), Duration::days(7));
    }

    #[test]
    fn rejects_other_units_and_garbage() {
        assert!(parse_period("3 months").is_err());
        assert!(parse_period("days").is_err());
        assert!(parse_period("-2 days").is_err());
        assert!(parse_period("").is_err());
    }

    #[test]
    fn rejects_mixed_units() {
        assert!(parse_period("1 day 2 weeks").is_err());
    }

    #[test]
    fn cli_parses_a_report_invocation() {
        use clap::Parser as _;

        let cli = Cli::parse_from([
            "wt", "report", "--from", "2024-01-01", "--to", "2024-01-31", "--current",
        ]);
        let Some(Commands::Report(args)) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.from, Some("2024-01-01".parse().unwrap()));
        assert_eq!(args.to, Some("2024-01-31".parse().unwrap()));
        assert!(args.current);
        assert!(!args.workweek);
    }

    #[test]
    fn vacation_span_requires_both_bounds() {
        use clap::Parser as _;

        let result = Cli::try_parse_from(["wt", "vacation", "add", "--from", "2024-01-01"]);
        assert!(result.is_err());
    }
}
