use async_trait::async_trait;
use thiserror::Error;

/// Per-identifier failures. None of these abort a harvest run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("No <meta name=\"description\"> element on {url}")]
    MissingDescription { url: String },
    #[error("Empty description on {url}")]
    EmptyDescription { url: String },
}

#[async_trait]
pub trait PageSource: Send + Sync {
    /// Short label for log lines (e.g., "http").
    fn source_id(&self) -> &str;

    /// Fetches the page at `url` and returns its body, or a [`FetchError`]
    /// for transport failures and non-success statuses.
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}
