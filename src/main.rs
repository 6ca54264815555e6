use tracing::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::report::Report;

mod benchmark;
mod config;
mod database;
mod error;
mod report;
mod seeder;
mod stopwatch;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run() {
        error!(error = %e, "log benchmark failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    info!(
        records = config.records,
        entry_length = config.entry_length,
        "loaded configuration"
    );

    let mut db = database::establish_connection(&config.database_url)?;
    info!(backend = db.backend(), "connected");

    let pb = seeder::progress_bar(config.records);
    let seeding = seeder::seed(&mut db, config.records, config.entry_length, &pb)?;
    let benchmark = benchmark::run(&mut db)?;

    Report {
        backend: db.backend(),
        seeding,
        benchmark,
    }
    .print(config.report_format)
}
