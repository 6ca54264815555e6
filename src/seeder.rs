use std::time::Duration;

use chrono::{NaiveDateTime, SubsecRound, Utc};
use indicatif::ProgressBar;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::database::model::NewLog;
use crate::database::LogStore;
use crate::error::Result;
use crate::stopwatch::{self, format_duration, serialize_millis};

mod progress_styles;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// The table already held the target row count.
    Skipped { rows: u64 },
    Seeded {
        removed: usize,
        inserted: u64,
        #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
        elapsed: Duration,
    },
}

/// Random alphanumeric text of exactly `length` characters.
pub fn payload(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

pub fn progress_bar(target: u64) -> ProgressBar {
    let pb = ProgressBar::new(target);
    pb.set_style(progress_styles::get_pb_seeding());
    pb
}

/// Makes the table hold exactly `target` freshly generated rows.
///
/// Leaves the table alone when its row count already matches. Otherwise every
/// row is deleted and `target` rows are inserted one statement at a time, all
/// sharing a single payload of `entry_length` characters. There is no
/// transaction: an insert failure returns the error and keeps whatever rows
/// were written before it.
pub fn seed<S: LogStore>(
    store: &mut S,
    target: u64,
    entry_length: usize,
    pb: &ProgressBar,
) -> Result<SeedOutcome> {
    let existing = store.count()?;
    if u64::try_from(existing) == Ok(target) {
        info!(rows = existing, "log table already seeded, skipping");
        return Ok(SeedOutcome::Skipped { rows: target });
    }

    let removed = store.clear()?;
    info!(removed, target, entry_length, "seeding log table");

    let (inserted, elapsed) = stopwatch::time(|| {
        let entry = payload(entry_length);
        insert_rows(store, target, &entry, pb)
    });
    let inserted = inserted?;

    println!(
        "CREATED {} records in {}.",
        inserted,
        format_duration(elapsed)
    );
    Ok(SeedOutcome::Seeded {
        removed,
        inserted,
        elapsed,
    })
}

fn insert_rows<S: LogStore>(
    store: &mut S,
    target: u64,
    entry: &str,
    pb: &ProgressBar,
) -> Result<u64> {
    pb.set_length(target);
    for _ in 0..target {
        store
            .insert(&NewLog {
                timestamp: now(),
                entry,
            })
            .inspect_err(|_| pb.abandon())?;
        pb.inc(1);
    }
    pb.finish_with_message("done");
    Ok(target)
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(3)
}
