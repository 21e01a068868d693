use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentFetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Unexpected status {0}")]
    Status(u16),
}

/// Fetches the bytes behind a public document URL.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DocumentFetchError>;
}
