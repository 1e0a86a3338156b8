//! Human-facing rendering of accumulated signed durations.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// How a total duration is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalFormat {
    /// Full workdays plus the literal leftover, e.g. `1 Workdays and 2:00:00`.
    #[default]
    Exact,
    /// Single scaled unit with two decimals, e.g. `2.17m`.
    Compact,
}

/// Renders a signed total with a `+`/`-` prefix; zero counts as non-negative.
#[must_use]
pub fn format_total(total: Duration, format: TotalFormat, worktime_per_day: Duration) -> String {
    let sign = if total < Duration::zero() { '-' } else { '+' };
    let magnitude = total.abs();
    let rendered = match format {
        TotalFormat::Exact => format_exact(magnitude, worktime_per_day),
        TotalFormat::Compact => format_compact(magnitude),
    };
    format!("{sign}{rendered}")
}

/// Counts whole workday units out of the magnitude and renders the leftover
/// verbatim. A non-positive workday target renders the magnitude alone.
fn format_exact(magnitude: Duration, workday: Duration) -> String {
    let mut remainder = magnitude;
    let mut full_workdays = 0_u32;
    if workday > Duration::zero() {
        while remainder > workday {
            remainder = remainder - workday;
            full_workdays += 1;
        }
    }

    if full_workdays > 0 {
        format!("{full_workdays} Workdays and {}", format_hms(remainder))
    } else {
        format_hms(remainder)
    }
}

/// Walks the unit ladder while the magnitude still exceeds 60 and renders the
/// first unit where it does not, rounded to two decimals.
#[expect(
    clippy::cast_precision_loss,
    reason = "worktime totals are far below 2^52 seconds"
)]
fn format_compact(magnitude: Duration) -> String {
    const UNITS: [(f64, &str); 4] = [(60.0, "m"), (60.0, "h"), (24.0, "d"), (365.0, "y")];

    let mut value = magnitude.num_seconds() as f64;
    let mut suffix = "s";
    for (factor, unit) in UNITS {
        if value > 60.0 {
            suffix = unit;
            value /= factor;
        } else {
            break;
        }
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}{suffix}")
}

/// Formats a non-negative duration as `H:MM:SS` (hours unpadded).
#[must_use]
pub fn format_hms(duration: Duration) -> String {
    let total = duration.num_seconds();
    let hours = total / 3600;
    let minutes = total / 60 % 60;
    let seconds = total % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_splits_into_workdays_and_leftover() {
        let rendered = format_total(Duration::hours(10), TotalFormat::Exact, Duration::hours(8));
        assert_eq!(rendered, "+1 Workdays and 2:00:00");
    }

    #[test]
    fn exact_below_one_workday_is_the_bare_remainder() {
        let rendered = format_total(
            Duration::minutes(7 * 60 + 15),
            TotalFormat::Exact,
            Duration::hours(8),
        );
        assert_eq!(rendered, "+7:15:00");
    }

    #[test]
    fn exact_negative_total_keeps_its_sign() {
        let rendered = format_total(Duration::hours(-10), TotalFormat::Exact, Duration::hours(8));
        assert_eq!(rendered, "-1 Workdays and 2:00:00");
    }

    #[test]
    fn exact_with_zero_workday_target_never_loops() {
        let rendered = format_total(Duration::hours(3), TotalFormat::Exact, Duration::zero());
        assert_eq!(rendered, "+3:00:00");
    }

    #[test]
    fn zero_total_is_non_negative() {
        assert_eq!(
            format_total(Duration::zero(), TotalFormat::Exact, Duration::hours(8)),
            "+0:00:00"
        );
        assert_eq!(
            format_total(Duration::zero(), TotalFormat::Compact, Duration::hours(8)),
            "+0s"
        );
    }

    #[test]
    fn compact_escalates_units_past_sixty() {
        assert_eq!(
            format_total(Duration::seconds(130), TotalFormat::Compact, Duration::hours(8)),
            "+2.17m"
        );
    }

    #[test]
    fn compact_keeps_seconds_at_or_below_sixty() {
        assert_eq!(
            format_total(Duration::seconds(45), TotalFormat::Compact, Duration::hours(8)),
            "+45s"
        );
        assert_eq!(
            format_total(Duration::seconds(60), TotalFormat::Compact, Duration::hours(8)),
            "+60s"
        );
    }

    #[test]
    fn compact_stops_at_the_first_small_enough_unit() {
        // 3600 s -> 60 m, which does not exceed 60, so no escalation to hours.
        assert_eq!(
            format_total(Duration::hours(1), TotalFormat::Compact, Duration::hours(8)),
            "+60m"
        );
        // Three days' worth keeps escalating until days.
        assert_eq!(
            format_total(Duration::days(3), TotalFormat::Compact, Duration::hours(8)),
            "+3d"
        );
    }

    #[test]
    fn compact_negative_total_keeps_its_sign() {
        assert_eq!(
            format_total(Duration::seconds(-130), TotalFormat::Compact, Duration::hours(8)),
            "-2.17m"
        );
    }

    #[test]
    fn hms_pads_minutes_and_seconds_only() {
        assert_eq!(format_hms(Duration::seconds(3661)), "1:01:01");
        assert_eq!(format_hms(Duration::hours(25)), "25:00:00");
        assert_eq!(format_hms(Duration::zero()), "0:00:00");
    }

    #[test]
    fn total_format_deserializes_lowercase() {
        let parsed: TotalFormat = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(parsed, TotalFormat::Compact);
        assert_eq!(serde_json::to_string(&TotalFormat::Exact).unwrap(), "\"exact\"");
    }
}
