// File: crates/chart-core/src/error.rs
// Summary: Typed errors raised by the normalizer and the data sources.

use thiserror::Error;

/// Errors of the normalization pass. All of them are fatal: no partial results are produced.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A record's time field is not `"<minutes>:<seconds>"`. Carries the offending string.
    #[error("malformed duration {0:?}: expected \"<minutes>:<seconds>\"")]
    MalformedDuration(String),
    /// Scales were requested over zero records.
    #[error("cannot build scales over an empty dataset")]
    EmptyDataset,
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failure of a data source to produce the record sequence.
#[derive(Debug, Error)]
pub enum FetchError {
    #[cfg(feature = "http")]
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("reading dataset failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}
