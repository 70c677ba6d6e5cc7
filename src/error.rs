//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when an [`EntitySource`](crate::source::EntitySource) cannot
/// produce the raw records.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered with something other than `200 OK`.
    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// A file-backed source could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The body was not a JSON array of entity records.
    #[error("malformed entity list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Error returned when loading the dataset fails.
///
/// Individual records never fail a load: a record without a usable age is
/// shown with an unknown-age label instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Error returned when a configuration file cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
