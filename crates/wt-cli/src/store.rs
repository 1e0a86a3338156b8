//! Access to the Watson data directory: the interval log, the open-session
//! state and the vacation/ignored day lists.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use wt_core::TimeInterval;

/// The Watson data directory: `$WATSON_DIR`, or `<config dir>/watson`.
#[must_use]
pub fn watson_dir() -> PathBuf {
    std::env::var_os("WATSON_DIR").map_or_else(
        || {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("watson")
        },
        PathBuf::from,
    )
}

/// One row of the `frames` file.
///
/// Rows are arrays whose first two elements are start/stop epoch seconds;
/// trailing elements (project, id, tags, ...) belong to Watson and are
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameRecord {
    start: i64,
    stop: i64,
}

impl<'de> Deserialize<'de> for FrameRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FrameVisitor;

        impl<'de> Visitor<'de> for FrameVisitor {
            type Value = FrameRecord;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("an array starting with start and stop epoch seconds")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FrameRecord, A::Error> {
                let start = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let stop = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(FrameRecord { start, stop })
            }
        }

        deserializer.deserialize_seq(FrameVisitor)
    }
}

/// Open-session record from the `state` file.
#[derive(Debug, Default, Deserialize)]
struct OpenSession {
    #[serde(default)]
    start: Option<i64>,
}

/// Loads the interval history from `frames`, optionally appending the open
/// session closed at `now`. A missing `frames` file is a hard failure.
pub fn load_intervals(
    dir: &Path,
    include_current: bool,
    now: NaiveDateTime,
) -> Result<Vec<TimeInterval>> {
    let path = dir.join("frames");
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<FrameRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("malformed frame log {}", path.display()))?;

    let mut intervals = Vec::with_capacity(records.len() + 1);
    for record in records {
        let start = local_datetime(record.start)?;
        let stop = local_datetime(record.stop)?;
        let interval = TimeInterval::new(start, stop)
            .with_context(|| format!("reversed frame at epoch {}", record.start))?;
        intervals.push(interval);
    }

    if include_current {
        if let Some(start) = open_session_start(dir)? {
            let interval = TimeInterval::new(local_datetime(start)?, now)
                .context("open session starts in the future")?;
            intervals.push(interval);
        }
    }

    tracing::debug!(intervals = intervals.len(), "interval log loaded");
    Ok(intervals)
}

/// Start of the currently running session, if any.
///
/// A missing file or a state record without a `start` field means no open
/// session, not an error.
fn open_session_start(dir: &Path) -> Result<Option<i64>> {
    let path = dir.join("state");
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let session: OpenSession = serde_json::from_str(&raw)
        .with_context(|| format!("malformed state file {}", path.display()))?;
    Ok(session.start)
}

fn local_datetime(epoch_seconds: i64) -> Result<NaiveDateTime> {
    Local
        .timestamp_opt(epoch_seconds, 0)
        .single()
        .map(|instant| instant.naive_local())
        .with_context(|| format!("timestamp out of range: {epoch_seconds}"))
}

/// Loads a day-list file, one ISO date per line. A missing file is empty.
pub fn load_days(path: &Path) -> Result<BTreeSet<NaiveDate>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse()
                .with_context(|| format!("invalid date {line:?} in {}", path.display()))
        })
        .collect()
}

/// Writes a day list sorted, one date per line.
pub fn save_days(path: &Path, days: &BTreeSet<NaiveDate>) -> Result<()> {
    let contents = days
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
