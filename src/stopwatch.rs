use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime, TimeZone};
use serde::Serializer;

/// Runs `task` once and returns its output with the wall-clock time it took.
pub fn time<T>(task: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = task();
    (output, start.elapsed())
}

/// `mm:ss:SSS`. Unlike a clock format, minutes do not wrap at 60.
pub fn format_duration(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    format!(
        "{:02}:{:02}:{:03}",
        millis / 60_000,
        millis / 1_000 % 60,
        millis % 1_000
    )
}

/// Stored timestamps are UTC; shown as local `mm:ss:SSS`.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    Local
        .from_utc_datetime(&timestamp)
        .format("%M:%S:%3f")
        .to_string()
}

pub fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(elapsed.as_millis() as u64)
}
