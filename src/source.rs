//! Where the entity list comes from.
//!
//! The widget reads its dataset exactly once per controller through an
//! [`EntitySource`]. [`HttpSource`] talks to the real endpoint; the other two
//! exist for offline runs and tests.

use crate::entity::EntityRecord;
use crate::error::SourceError;
use std::future::Future;
use std::path::PathBuf;

/// A one-shot asynchronous read of the full entity list.
///
/// No retries, no timeouts, no pagination: a failure is reported as-is.
pub trait EntitySource {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<EntityRecord>, SourceError>>;
}

/// `GET {endpoint}` expecting `200 OK` and a JSON array body.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl EntitySource for HttpSource {
    async fn fetch_all(&self) -> Result<Vec<EntityRecord>, SourceError> {
        let request_error = |source| SourceError::Request {
            url: self.endpoint.clone(),
            source,
        };

        tracing::info!("Fetching entities from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SourceError::Status {
                url: self.endpoint.clone(),
                status,
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        let records: Vec<EntityRecord> = serde_json::from_slice(&body)?;
        tracing::debug!("Fetched {} entities ({} bytes)", records.len(), body.len());
        Ok(records)
    }
}

/// Reads the same JSON array from a file, e.g. a saved endpoint response.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EntitySource for FileSource {
    async fn fetch_all(&self) -> Result<Vec<EntityRecord>, SourceError> {
        tracing::info!("Reading entities from {}", self.path.display());
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// A fixed, already-decoded list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<EntityRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<EntityRecord>) -> Self {
        Self { records }
    }

    /// Decodes `json` the way [`HttpSource`] decodes a response body.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl EntitySource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<EntityRecord>, SourceError> {
        Ok(self.records.clone())
    }
}
