use serde::Serialize;
use tracing::info;

use crate::benchmark::BenchmarkData;
use crate::config::ReportFormat;
use crate::error::Result;
use crate::seeder::SeedOutcome;

/// Everything one run measured.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub backend: &'static str,
    pub seeding: SeedOutcome,
    pub benchmark: BenchmarkData,
}

impl Report {
    /// The text lines are printed while the run progresses, so only the JSON
    /// form writes anything here.
    pub fn print(&self, format: ReportFormat) -> Result<()> {
        match format {
            ReportFormat::Text => {
                info!(backend = self.backend, "text report already streamed");
            }
            ReportFormat::Json => println!("{}", self.to_json()?),
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::benchmark::Timings;
    use crate::database::test_utils::at;

    fn report() -> Report {
        Report {
            backend: "sqlite",
            seeding: SeedOutcome::Skipped { rows: 60 },
            benchmark: BenchmarkData {
                earliest: at(0, 0),
                latest: at(59, 500),
                window_start: at(10, 0),
                window_end: at(49, 500),
                count: 39,
                timings: Timings {
                    earliest: Duration::from_millis(12),
                    latest: Duration::from_millis(7),
                    count: Duration::from_millis(1_250),
                },
            },
        }
    }

    #[test]
    fn json_report_carries_results_and_timings() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["backend"], "sqlite");
        assert_eq!(json["seeding"]["status"], "skipped");
        assert_eq!(json["benchmark"]["count"], 39);
        assert_eq!(json["benchmark"]["earliest"], "2024-01-01T12:00:00");
        assert_eq!(json["benchmark"]["latest"], "2024-01-01T12:00:59.500");
        assert_eq!(json["benchmark"]["timings"]["count_ms"], 1250);
        assert_eq!(json["benchmark"]["timings"]["earliest_ms"], 12);
    }

    #[test]
    fn both_formats_print() {
        report().print(ReportFormat::Text).unwrap();
        report().print(ReportFormat::Json).unwrap();
    }
}
