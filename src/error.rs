use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedStatsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Writing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Fetch Error: {0}")]
    Fetch(#[from] FetchError),
}

/// Failures raised by a [`crate::corpus::PostSource`] while retrieving posts.
///
/// Any of these aborts the run before anything is persisted.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("bad or missing credentials: {0}")]
    Authentication(String),

    #[error("unknown subject '{0}'")]
    UnknownSubject(String),

    #[error("rate limited by the post source")]
    RateLimited,

    #[error("network failure: {0}")]
    Network(String),

    #[error("malformed response for '{subject}': {reason}")]
    Malformed { subject: String, reason: String },
}

pub type FsResult<T> = Result<T, FeedStatsError>;
