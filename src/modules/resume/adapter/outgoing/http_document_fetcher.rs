use async_trait::async_trait;
use reqwest::Client;

use crate::modules::resume::application::ports::outgoing::{DocumentFetchError, DocumentFetcher};

/// Plain HTTP GET; follows redirects so Google Docs exports resolve.
#[derive(Clone)]
pub struct HttpDocumentFetcher {
    client: Client,
}

impl HttpDocumentFetcher {
    pub fn new() -> Result<Self, DocumentFetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| DocumentFetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DocumentFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DocumentFetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocumentFetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DocumentFetchError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
