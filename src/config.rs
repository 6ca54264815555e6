use std::str::FromStr;

use crate::error::{Error, Result};

const DEFAULT_RECORDS: u64 = 1_000_000;
const DEFAULT_ENTRY_LENGTH: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(Error::Config {
                key: "REPORT_FORMAT",
                detail: format!("expected `text` or `json`, got `{}`", other),
            }),
        }
    }
}

/// Settings read from the environment, with `.env` as a fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub records: u64,
    pub entry_length: usize,
    pub report_format: ReportFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| Error::Config {
            key: "DATABASE_URL",
            detail: "must be set".to_string(),
        })?;
        let records = parse_or(&lookup, "LOG_RECORDS", DEFAULT_RECORDS)?;
        let entry_length = parse_or(&lookup, "LOG_ENTRY_LENGTH", DEFAULT_ENTRY_LENGTH)?;
        let report_format = match lookup("REPORT_FORMAT") {
            Some(value) => value.parse()?,
            None => ReportFormat::Text,
        };
        Ok(Config {
            database_url,
            records,
            entry_length,
            report_format,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| Error::Config {
            key,
            detail: format!("`{}`: {}", value, e),
        }),
        None => Ok(default),
    }
}
