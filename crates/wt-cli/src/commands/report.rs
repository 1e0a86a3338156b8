//! Report command: per-day listing and overtime total for a period.

use std::collections::VecDeque;
use std::io::Write;

use anyhow::Result;
use chrono::{Duration, NaiveDate};

use wt_core::{Calendar, DaySummary, PeriodSelection, Schedule, format_hms, format_total};

use crate::config::{Config, DayListStyle};

/// Days shown at each edge of a truncated listing.
const TRUNCATE_WINDOW: usize = 5;

/// Runs the report over an already-built calendar.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    calendar: &Calendar,
    selection: PeriodSelection,
    today: NaiveDate,
) -> Result<()> {
    let window = selection.resolve(config, config.settings().inception, today)?;

    let mut total_overtime = Duration::zero();
    let mut listing = DayListing::new(config);

    for date in window.dates() {
        let day = calendar.day(date);
        if !day.should_display(config) {
            continue;
        }
        total_overtime = total_overtime + day.overtime(config);
        listing.show(writer, &day)?;
    }
    listing.finish(writer)?;

    let total = format_total(
        total_overtime,
        config.settings().total_format,
        config.worktime_per_day(),
    );
    writeln!(writer, "Total: {total}")?;
    Ok(())
}

/// Per-day listing honoring the configured style.
///
/// In truncated mode the first [`TRUNCATE_WINDOW`] days print immediately
/// while the most recent ones are buffered until [`finish`](Self::finish).
struct DayListing<'a> {
    config: &'a Config,
    last_days: VecDeque<DaySummary>,
    count: usize,
}

impl<'a> DayListing<'a> {
    fn new(config: &'a Config) -> Self {
        Self {
            config,
            last_days: VecDeque::with_capacity(TRUNCATE_WINDOW),
            count: 0,
        }
    }

    fn show<W: Write>(&mut self, writer: &mut W, day: &DaySummary) -> Result<()> {
        match self.config.settings().day_list {
            DayListStyle::None => Ok(()),
            DayListStyle::Full => write_day(writer, self.config, day),
            DayListStyle::Truncate => {
                if self.count < TRUNCATE_WINDOW {
                    write_day(writer, self.config, day)?;
                } else {
                    if self.last_days.len() == TRUNCATE_WINDOW {
                        self.last_days.pop_front();
                    }
                    self.last_days.push_back(*day);
                }
                self.count += 1;
                Ok(())
            }
        }
    }

    fn finish<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        let style = self.config.settings().day_list;
        if style == DayListStyle::Truncate {
            if self.count > 2 * TRUNCATE_WINDOW {
                writeln!(writer, "⋮   ⋮   ⋮           ⋮       ⋮")?;
            }
            for day in &self.last_days {
                write_day(writer, self.config, day)?;
            }
        }
        if style != DayListStyle::None {
            writeln!(writer, "------")?;
        }
        Ok(())
    }
}

fn write_day<W: Write>(writer: &mut W, config: &Config, day: &DaySummary) -> Result<()> {
    let overtime = day.overtime(config);
    let rendered_overtime = if overtime == Duration::zero() {
        "+0".to_string()
    } else if overtime > Duration::zero() {
        format!("+{}", format_hms(overtime))
    } else {
        format!("-{}", format_hms(overtime.abs()))
    };

    let annotation = if config.is_vacation(day.date()) {
        " (vacation)"
    } else if config.is_ignored(day.date()) {
        " (ignored)"
    } else {
        ""
    };

    writeln!(
        writer,
        "Day {} {}: {} {}{}",
        day.date().format("%a"),
        day.date().format("%Y-%m-%d"),
        format_hms(day.worktime()),
        rendered_overtime,
        annotation,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use chrono::NaiveDateTime;

    use wt_core::TimeInterval;

    use crate::config::Settings;

    fn instant(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn interval(start: &str, stop: &str) -> TimeInterval {
        TimeInterval::new(instant(start), instant(stop)).unwrap()
    }

    fn test_config(settings: Settings) -> Config {
        Config::new(
            PathBuf::from("/nonexistent"),
            settings,
            BTreeSet::new(),
            BTreeSet::new(),
        )
    }

    fn plain_settings() -> Settings {
        // No holidays so weekday arithmetic stays undisturbed.
        Settings {
            country: "XX".to_string(),
            state: None,
            ..Settings::default()
        }
    }

    fn render(
        config: &Config,
        calendar: &Calendar,
        selection: PeriodSelection,
        today: &str,
    ) -> String {
        let mut output = Vec::new();
        run(&mut output, config, calendar, selection, date(today)).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn full_listing_shows_worked_and_missed_days() {
        let config = test_config(plain_settings());
        // 2024-01-02 is a Tuesday; eight hours worked, Wednesday missed.
        let calendar = Calendar::from_intervals([interval(
            "2024-01-02T09:00:00",
            "2024-01-02T17:00:00",
        )]);
        let selection = PeriodSelection {
            from: Some(date("2024-01-02")),
            to: Some(date("2024-01-03")),
            ..PeriodSelection::default()
        };

        let output = render(&config, &calendar, selection, "2024-06-01");
        assert_eq!(
            output,
            "Day Tue 2024-01-02: 8:00:00 +0\n\
             Day Wed 2024-01-03: 0:00:00 -8:00:00\n\
             ------\n\
             Total: -8:00:00\n"
        );
    }

    #[test]
    fn weekend_days_without_work_are_suppressed() {
        let config = test_config(plain_settings());
        let calendar = Calendar::new();
        // 2024-01-06/07 are a weekend.
        let selection = PeriodSelection {
            from: Some(date("2024-01-06")),
            to: Some(date("2024-01-07")),
            ..PeriodSelection::default()
        };

        let output = render(&config, &calendar, selection, "2024-06-01");
        assert_eq!(output, "------\nTotal: +0:00:00\n");
    }

    #[test]
    fn ignored_days_show_worktime_but_add_no_overtime() {
        let mut config = test_config(plain_settings());
        config.add_ignored(date("2024-01-02"));
        let calendar = Calendar::from_intervals([interval(
            "2024-01-02T09:00:00",
            "2024-01-02T19:00:00",
        )]);
        let selection = PeriodSelection {
            from: Some(date("2024-01-02")),
            to: Some(date("2024-01-02")),
            ..PeriodSelection::default()
        };

        let output = render(&config, &calendar, selection, "2024-06-01");
        assert_eq!(
            output,
            "Day Tue 2024-01-02: 10:00:00 +0 (ignored)\n------\nTotal: +0:00:00\n"
        );
    }

    #[test]
    fn vacation_days_are_annotated() {
        let mut config = test_config(plain_settings());
        config.add_vacation(date("2024-01-02"));
        let calendar = Calendar::from_intervals([interval(
            "2024-01-02T09:00:00",
            "2024-01-02T10:00:00",
        )]);
        let selection = PeriodSelection {
            from: Some(date("2024-01-02")),
            to: Some(date("2024-01-02")),
            ..PeriodSelection::default()
        };

        let output = render(&config, &calendar, selection, "2024-06-01");
        assert_eq!(
            output,
            "Day Tue 2024-01-02: 1:00:00 +1:00:00 (vacation)\n------\nTotal: +1:00:00\n"
        );
    }

    #[test]
    fn day_list_none_only_prints_the_total() {
        let config = test_config(Settings {
            day_list: DayListStyle::None,
            ..plain_settings()
        });
        let calendar = Calendar::from_intervals([interval(
            "2024-01-02T09:00:00",
            "2024-01-02T17:00:00",
        )]);
        let selection = PeriodSelection {
            from: Some(date("2024-01-02")),
            to: Some(date("2024-01-02")),
            ..PeriodSelection::default()
        };

        let output = render(&config, &calendar, selection, "2024-06-01");
        assert_eq!(output, "Total: +0:00:00\n");
    }

    #[test]
    fn truncated_listing_keeps_both_edges() {
        let config = test_config(Settings {
            day_list: DayListStyle::Truncate,
            ..plain_settings()
        });
        let calendar = Calendar::new();
        // 2024-01-01 .. 2024-01-19: fifteen displayable workdays.
        let selection = PeriodSelection {
            from: Some(date("2024-01-01")),
            to: Some(date("2024-01-19")),
            ..PeriodSelection::default()
        };

        let output = render(&config, &calendar, selection, "2024-06-01");
        let lines: Vec<_> = output.lines().collect();

        // 5 leading days, ellipsis, 5 trailing days, separator, total.
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("Day Mon 2024-01-01"));
        assert!(lines[4].starts_with("Day Fri 2024-01-05"));
        assert!(lines[5].starts_with('⋮'));
        assert!(lines[6].starts_with("Day Mon 2024-01-15"));
        assert!(lines[10].starts_with("Day Fri 2024-01-19"));
        assert_eq!(lines[11], "------");
        assert!(lines[12].starts_with("Total: -"));
    }

    #[test]
    fn truncated_listing_without_overflow_shows_everything() {
        let config = test_config(Settings {
            day_list: DayListStyle::Truncate,
            ..plain_settings()
        });
        let calendar = Calendar::new();
        // Eight workdays: more than one window, but no ellipsis.
        let selection = PeriodSelection {
            from: Some(date("2024-01-01")),
            to: Some(date("2024-01-10")),
            ..PeriodSelection::default()
        };

        let output = render(&config, &calendar, selection, "2024-06-01");
        assert!(!output.contains('⋮'));
        assert_eq!(output.lines().filter(|l| l.starts_with("Day ")).count(), 8);
    }

    #[test]
    fn conflicting_selection_aborts_before_any_output() {
        let config = test_config(plain_settings());
        let calendar = Calendar::new();
        let selection = PeriodSelection {
            from: Some(date("2024-01-01")),
            to: Some(date("2024-01-31")),
            period: Some(Duration::days(7)),
            workweek: false,
        };

        let mut output = Vec::new();
        let result = run(&mut output, &config, &calendar, selection, date("2024-06-01"));
        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn compact_total_format_is_honored() {
        let config = test_config(Settings {
            total_format: wt_core::TotalFormat::Compact,
            ..plain_settings()
        });
        let calendar = Calendar::from_intervals([interval(
            "2024-01-02T09:00:00",
            "2024-01-02T17:02:10",
        )]);
        let selection = PeriodSelection {
            from: Some(date("2024-01-02")),
            to: Some(date("2024-01-02")),
            ..PeriodSelection::default()
        };

        let output = render(&config, &calendar, selection, "2024-06-01");
        assert!(output.ends_with("Total: +2.17m\n"), "got: {output}");
    }
}
