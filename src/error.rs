#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config ({key}): {detail}")]
    Config { key: &'static str, detail: String },

    #[error("failed to connect to database: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("table `log` is empty")]
    EmptyTable,

    #[error("report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
