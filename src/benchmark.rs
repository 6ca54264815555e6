use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use tracing::info;

use crate::database::LogStore;
use crate::error::{Error, Result};
use crate::stopwatch::{format_duration, format_timestamp, serialize_millis, time};

/// How far inside the stored range the counted window starts and ends.
const WINDOW_MARGIN_SECS: i64 = 10;

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkData {
    pub earliest: NaiveDateTime,
    pub latest: NaiveDateTime,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
    pub count: i64,
    pub timings: Timings,
}

#[derive(Debug, Clone, Serialize)]
pub struct Timings {
    #[serde(rename = "earliest_ms", serialize_with = "serialize_millis")]
    pub earliest: Duration,
    #[serde(rename = "latest_ms", serialize_with = "serialize_millis")]
    pub latest: Duration,
    #[serde(rename = "count_ms", serialize_with = "serialize_millis")]
    pub count: Duration,
}

/// Bounds of the counted window, `WINDOW_MARGIN_SECS` inside both ends.
///
/// For runs shorter than twice the margin the window is inverted and matches
/// nothing.
pub fn window(earliest: NaiveDateTime, latest: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let margin = TimeDelta::seconds(WINDOW_MARGIN_SECS);
    (earliest + margin, latest - margin)
}

/// Times the three read queries against the `log` table, printing each
/// result as it arrives. Nothing is asserted about the values.
pub fn run<S: LogStore>(store: &mut S) -> Result<BenchmarkData> {
    let (earliest, earliest_elapsed) = time(|| store.earliest());
    let earliest = earliest?.ok_or(Error::EmptyTable)?;
    println!(
        "FOUND earliest timestamp in {}.",
        format_duration(earliest_elapsed)
    );

    let (latest, latest_elapsed) = time(|| store.latest());
    let latest = latest?.ok_or(Error::EmptyTable)?;
    println!(
        "FOUND latest timestamp in {}.",
        format_duration(latest_elapsed)
    );

    println!("Earliest timestamp: {} ", format_timestamp(earliest));
    println!("Latest timestamp: {} ", format_timestamp(latest));

    let (window_start, window_end) = window(earliest, latest);
    let (count, count_elapsed) = time(|| store.count_between(window_start, window_end));
    let count = count?;
    println!(
        "FOUND {} matching records in {}.",
        count,
        format_duration(count_elapsed)
    );

    info!(
        %earliest,
        %latest,
        count,
        total_ms = (earliest_elapsed + latest_elapsed + count_elapsed).as_millis() as u64,
        "benchmark finished"
    );

    Ok(BenchmarkData {
        earliest,
        latest,
        window_start,
        window_end,
        count,
        timings: Timings {
            earliest: earliest_elapsed,
            latest: latest_elapsed,
            count: count_elapsed,
        },
    })
}
