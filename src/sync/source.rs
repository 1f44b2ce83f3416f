use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::calendar::CalendarDocument;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Failed to read calendar file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Calendar not found: {0}")]
    NotFound(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarSource: Send + Sync {
    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;

    async fn fetch_document(&self) -> Result<CalendarDocument, SourceError>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CalendarSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_document(&self) -> Result<CalendarDocument, SourceError> {
        tracing::info!("Reading calendar from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::NotFound(self.path.display().to_string())
            } else {
                SourceError::ReadError(e)
            }
        })?;

        Ok(CalendarDocument::from_json(&content)?)
    }
}

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url: url.into(), client })
    }
}

#[async_trait]
impl CalendarSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_document(&self) -> Result<CalendarDocument, SourceError> {
        tracing::info!("Fetching calendar from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::info!("Fetch calendar response status: {}", status);

        if status == 404 {
            tracing::error!("Calendar not found: {}", self.url);
            return Err(SourceError::NotFound(self.url.clone()));
        }

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Failed to fetch calendar. Status: {}, Body: {}", status, body);
            return Err(SourceError::RequestError(format!("Status {}: {}", status, body)));
        }

        let content = response.text().await?;
        Ok(CalendarDocument::from_json(&content)?)
    }
}

/// Picks the source kind from the shape of `location`.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn CalendarSource>, SourceError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::with_timeout(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
